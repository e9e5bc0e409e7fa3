//! CLI command definitions
//!
//! Defines the clap commands for the harness.

use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    /// Run annotated assembly tests and check embedded #grep expectations
    Run {
        /// Annotated assembly files to test
        files: Vec<PathBuf>,

        /// File listing additional inputs, one filename per line
        #[arg(short = 'f', long = "file-list")]
        list: Option<PathBuf>,

        /// Target the tool was built for (selects bin/mao-<target>)
        #[arg(short, long)]
        target: Option<String>,

        /// Shared-library suffix for plugin artifacts
        #[arg(short, long)]
        lib_ext: Option<String>,
    },

    /// Run TARGET:FILENAME list files through the verification script
    Suite {
        /// List files, one TARGET:FILENAME entry per line
        #[arg(required = true)]
        lists: Vec<PathBuf>,
    },

    /// Compare assembled objects before and after transformation
    Objdiff {
        /// Target the tool was built for
        target: String,

        /// Assembly file to verify
        file: PathBuf,
    },

    /// Compare relaxer-reported function sizes against the symbol dump
    Relax {
        /// Assembly file to verify
        file: PathBuf,

        /// Target the tool was built for
        #[arg(short, long)]
        target: Option<String>,

        /// Also print a CORRECT line per verified function
        #[arg(short, long)]
        verbose: bool,
    },
}
