//! Per-case reporting and pass/fail aggregation
//!
//! One line per case: base filename padded to a fixed width, PASS or FAIL,
//! the sub-check fraction, then any error messages joined with ` - `.

use colored::Colorize;

/// Width the case name is left-justified to
const NAME_WIDTH: usize = 20;

/// Outcome of one test case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseOutcome {
    pub name: String,
    pub passed: bool,
    pub checks_passed: usize,
    pub checks_total: usize,
    pub messages: Vec<String>,
}

impl CaseOutcome {
    /// A case passes iff no sub-check failed; an empty expectation list is
    /// vacuously PASS with `(0/0)`.
    pub fn from_checks(
        name: String,
        checks_passed: usize,
        checks_total: usize,
        messages: Vec<String>,
    ) -> Self {
        Self {
            name,
            passed: messages.is_empty(),
            checks_passed,
            checks_total,
            messages,
        }
    }

    /// The status line printed for this case
    pub fn status_line(&self) -> String {
        let verdict = if self.passed {
            "PASS".green()
        } else {
            "FAIL".red()
        };
        let mut line = format!(
            "{:<NAME_WIDTH$} {} ({}/{})",
            self.name, verdict, self.checks_passed, self.checks_total
        );
        if !self.messages.is_empty() {
            line.push(' ');
            line.push_str(&self.messages.join(" - "));
        }
        line
    }
}

/// Print the status line for one case
pub fn print_case(outcome: &CaseOutcome) {
    println!("{}", outcome.status_line());
}

/// Running pass/fail totals across a suite
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub passed: usize,
    pub failed: usize,
}

impl Summary {
    pub fn record(&mut self, outcome: &CaseOutcome) {
        if outcome.passed {
            self.passed += 1;
        } else {
            self.failed += 1;
        }
    }

    pub fn total(&self) -> usize {
        self.passed + self.failed
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}
