//! Suite loading and the list-driven verification runner
//!
//! Test cases arrive either as `TARGET:FILENAME` list files handed to an
//! external verification script, or as annotated assembly files whose
//! embedded directives configure the pattern runner.

pub mod directives;
pub mod list;

pub use directives::{extract, Directives, Expectation};
pub use list::{load_files, load_targets, ListEntry};

use std::path::PathBuf;

use crate::common::{Error, Result};
use crate::process;

/// Run the verification script over every entry of every list file
///
/// Entries run strictly in order. The first nonzero script exit aborts the
/// whole run; the error carries the script's exit code so the process can
/// terminate with it verbatim. Abort-on-first-error is deliberate in this
/// mode.
pub async fn run_verified(lists: &[PathBuf], verify_script: &str) -> Result<()> {
    for list in lists {
        for entry in load_targets(list)? {
            println!("Testing \"{}\":", entry.file);
            let command = vec![
                verify_script.to_string(),
                entry.target.clone(),
                entry.file.clone(),
            ];
            let code = process::run_status(&command).await?;
            if code != 0 {
                return Err(Error::verify_failed(&command, code));
            }
        }
    }
    Ok(())
}
