//! CLI command handling
//!
//! Resolves configuration and tool paths, then hands each subcommand to
//! its runner. Returns the process exit code; aborting errors bubble up
//! to `main`.

use std::path::PathBuf;

use crate::commands::Commands;
use crate::common::config::Config;
use crate::common::{paths, Result};
use crate::suite;
use crate::verify::objdiff::{self, ObjDiffTools};
use crate::verify::pattern::PatternRunner;
use crate::verify::relax::{self, RelaxTools};

/// Dispatch a CLI command, returning the desired process exit code
pub async fn dispatch(command: Commands) -> Result<i32> {
    let config = Config::load()?;

    match command {
        Commands::Run {
            files,
            list,
            target,
            lib_ext,
        } => {
            let target = target.unwrap_or(config.defaults.target);
            let lib_ext = lib_ext.unwrap_or(config.defaults.lib_ext);
            let bin_dir = paths::resolve_bin_dir(&config.tools.bin_dir);

            let tool = paths::tool_binary(&bin_dir, &target);
            paths::ensure_executable(&tool)?;

            let mut inputs: Vec<PathBuf> = files;
            if let Some(list) = list {
                inputs.extend(suite::load_files(&list)?);
            }

            let runner = PatternRunner {
                tool,
                bin_dir,
                target,
                lib_ext,
            };
            // Individual case failures are printed, not turned into a
            // nonzero exit; the whole suite stays triageable in one run.
            runner.run_files(&inputs).await?;
            Ok(0)
        }

        Commands::Suite { lists } => {
            suite::run_verified(&lists, &config.tools.verify_script).await?;
            Ok(0)
        }

        Commands::Objdiff { target, file } => {
            let bin_dir = paths::resolve_bin_dir(&config.tools.bin_dir);
            let tools = ObjDiffTools {
                tool: paths::tool_binary(&bin_dir, &target),
                assembler: paths::find_program(&config.tools.assembler)?,
                diff: paths::find_program(&config.tools.diff)?,
            };
            objdiff::verify_object(&tools, &file).await
        }

        Commands::Relax {
            file,
            target,
            verbose,
        } => {
            let target = target.unwrap_or(config.defaults.target);
            let bin_dir = paths::resolve_bin_dir(&config.tools.bin_dir);
            let tools = RelaxTools {
                tool: paths::tool_binary(&bin_dir, &target),
                assembler: paths::find_program(&config.tools.assembler)?,
                symbol_dumper: paths::find_program(&config.tools.symbol_dumper)?,
            };
            let ok = relax::verify_relaxation(&tools, &file, verbose).await?;
            Ok(if ok { 0 } else { 1 })
        }
    }
}
