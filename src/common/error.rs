//! Error types for the harness
//!
//! One variant per failure cause, so runners can decide which failures
//! abort the whole run and which become a case-level FAIL. Variants that
//! carry a failed command render the literal command line in their
//! message; the abort path in `main` prints it to stderr verbatim.

use std::io;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the harness
#[derive(Error, Debug)]
pub enum Error {
    // === Process errors ===
    #[error("command failed to launch: {command}: {source}")]
    Launch {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("command exited with code {code}: {command}")]
    NonZeroExit { command: String, code: i32 },

    /// A verification script signalled failure; its exit code terminates
    /// the suite run verbatim.
    #[error("command exited with code {code}: {command}")]
    VerifyFailed { command: String, code: i32 },

    #[error("{path} is not executable")]
    NotExecutable { path: String },

    // === Input errors ===
    #[error("{path}:{line_no}: malformed list line '{line}' (expected TARGET:FILENAME)")]
    MalformedLine {
        path: String,
        line_no: usize,
        line: String,
    },

    #[error("{path}: bad directive: {message}")]
    Directive { path: String, message: String },

    #[error("bad pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Failed to read file '{path}': {error}")]
    FileRead { path: String, error: String },

    // === Configuration errors ===
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration file: {0}")]
    ConfigParse(String),

    // === IO errors ===
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Create a launch error from an argument vector
    pub fn launch(command: &[String], source: io::Error) -> Self {
        Self::Launch {
            command: command.join(" "),
            source,
        }
    }

    /// Create a nonzero-exit error from an argument vector
    pub fn non_zero_exit(command: &[String], code: i32) -> Self {
        Self::NonZeroExit {
            command: command.join(" "),
            code,
        }
    }

    /// Create a verification-failure error from an argument vector
    pub fn verify_failed(command: &[String], code: i32) -> Self {
        Self::VerifyFailed {
            command: command.join(" "),
            code,
        }
    }

    /// Create a file-read error
    pub fn file_read(path: &std::path::Path, source: io::Error) -> Self {
        Self::FileRead {
            path: path.display().to_string(),
            error: source.to_string(),
        }
    }

    /// Process exit code for an aborting error.
    ///
    /// A failed verification script terminates the run with the script's
    /// own exit code; everything else is the generic failure code 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::VerifyFailed { code, .. } => *code,
            _ => 1,
        }
    }
}
