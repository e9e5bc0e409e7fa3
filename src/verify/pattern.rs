//! Pattern-count comparator
//!
//! Runs the tool once per annotated file and counts regex matches over the
//! combined stdout/stderr text. A sub-check passes iff the match count
//! equals the expected count exactly.

use std::path::{Path, PathBuf};

use regex::Regex;

use crate::common::paths;
use crate::common::{Error, Result};
use crate::process;
use crate::report::{print_case, CaseOutcome, Summary};
use crate::suite::{self, Expectation};

/// Context for running annotated-file cases against one tool build
#[derive(Debug)]
pub struct PatternRunner {
    pub tool: PathBuf,
    pub bin_dir: PathBuf,
    pub target: String,
    pub lib_ext: String,
}

impl PatternRunner {
    /// Build the tool invocation for one case, in fixed order: tool,
    /// default-plugin-loading flag, optional plugin library, the
    /// whitespace-tokenized options, the input file.
    ///
    /// Options are split on whitespace, so a single logical flag cannot
    /// contain a literal space.
    pub fn build_command(&self, options: &str, plugin: Option<&str>, input: &Path) -> Vec<String> {
        let mut command = Vec::new();
        command.push(self.tool.display().to_string());
        command.push("--mao=-s".to_string());
        if let Some(plugin) = plugin {
            let library =
                paths::plugin_library(&self.bin_dir, plugin, &self.target, &self.lib_ext);
            command.push(format!("--mao=--plugin={}", library.display()));
        }
        command.extend(options.split_whitespace().map(str::to_string));
        command.push(input.display().to_string());
        command
    }

    /// Run one annotated file. Returns `None` when the file carries no
    /// `#Option:` line: the case is skipped with a diagnostic, not failed.
    pub async fn run_case(&self, input: &Path) -> Result<Option<CaseOutcome>> {
        let directives = suite::extract(input)?;
        let Some(options) = directives.options else {
            println!(
                "Unable to find options in input file: {}",
                input.display()
            );
            return Ok(None);
        };

        let command = self.build_command(&options, directives.plugin.as_deref(), input);
        let result = process::run_captured(&command, &[]).await?;
        if !result.success() {
            // The tool's diagnostics are part of the searched text, so a
            // nonzero exit is not fatal here.
            tracing::warn!(
                command = %process::render_command(&command),
                code = result.exit_code,
                "tool exited nonzero; output still checked"
            );
        }

        let text = result.combined_output();
        let (checks_passed, messages) = evaluate(&directives.expectations, &text);
        let name = input
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| input.display().to_string());
        Ok(Some(CaseOutcome::from_checks(
            name,
            checks_passed,
            directives.expectations.len(),
            messages,
        )))
    }

    /// Run every file in order, printing one status line per case
    pub async fn run_files(&self, files: &[PathBuf]) -> Result<Summary> {
        let mut summary = Summary::default();
        for file in files {
            if let Some(outcome) = self.run_case(file).await? {
                print_case(&outcome);
                summary.record(&outcome);
            }
        }
        tracing::debug!(
            passed = summary.passed,
            failed = summary.failed,
            "pattern run finished"
        );
        Ok(summary)
    }
}

/// Count non-overlapping matches of `pattern` in `text`
pub fn count_matches(pattern: &str, text: &str) -> Result<usize> {
    let re = Regex::new(pattern).map_err(|e| Error::Pattern {
        pattern: pattern.to_string(),
        source: e,
    })?;
    Ok(re.find_iter(text).count())
}

/// Apply every expectation to the captured text
///
/// Returns the number of passing sub-checks and one message per failing
/// one. A pattern that fails to compile fails its sub-check with the
/// compile error as the message; the rest of the case still runs.
pub fn evaluate(expectations: &[Expectation], text: &str) -> (usize, Vec<String>) {
    let mut checks_passed = 0;
    let mut messages = Vec::new();
    for expectation in expectations {
        match count_matches(&expectation.pattern, text) {
            Ok(actual) if actual as u64 == expectation.count => checks_passed += 1,
            Ok(actual) => messages.push(format!(
                "Found {} instances of {} Should have been {}",
                actual, expectation.pattern, expectation.count
            )),
            Err(e) => messages.push(e.to_string()),
        }
    }
    (checks_passed, messages)
}
