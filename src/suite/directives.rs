//! Directive extraction from annotated assembly files
//!
//! Test inputs carry their own configuration as specially-formatted
//! comment lines:
//!
//! ```text
//! #Option:  --mao=RELAX=stat[1]
//! #Plugin: MaoTestPlugin
//! #grep MaoRelax.*foo.*2 1
//! ```
//!
//! `#Option:` and `#Plugin:` are last-write-wins; every `#grep` line adds
//! one expectation, in file order.

use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

use crate::common::{Error, Result};

/// One pattern-count expectation from a `#grep` line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expectation {
    pub pattern: String,
    pub count: u64,
}

/// Directives collected from one annotated file
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Directives {
    pub options: Option<String>,
    pub plugin: Option<String>,
    pub expectations: Vec<Expectation>,
}

fn option_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"#Option: (.*)").unwrap())
}

fn plugin_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"#Plugin: (.*)").unwrap())
}

fn grep_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"#grep:? ?(.*) ([0-9]+)").unwrap())
}

/// Scan every line of `path` for directives
pub fn extract(path: &Path) -> Result<Directives> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::file_read(path, e))?;

    content
        .lines()
        .try_fold(Directives::default(), |mut acc, line| {
            if let Some(captures) = option_re().captures(line) {
                acc.options = Some(captures[1].trim().to_string());
            }
            if let Some(captures) = plugin_re().captures(line) {
                acc.plugin = Some(captures[1].trim().to_string());
            }
            if let Some(captures) = grep_re().captures(line) {
                let count = captures[2].trim().parse().map_err(|_| Error::Directive {
                    path: path.display().to_string(),
                    message: format!("bad #grep count in '{line}'"),
                })?;
                acc.expectations.push(Expectation {
                    pattern: captures[1].trim().to_string(),
                    count,
                });
            }
            Ok(acc)
        })
}
