//! MAO test harness CLI
//!
//! Thin orchestration over external executables: run the tool on
//! annotated assembly inputs, compare results against a reference
//! assembler, and report PASS/FAIL per case.

use clap::Parser;
use mao_harness::{cli, commands::Commands, common::logging};

#[derive(Parser)]
#[command(name = "mao-test", about = "Test harness for the MAO assembly-transformation tool")]
#[command(version, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() {
    logging::init_cli();

    let cli = Cli::parse();

    match cli::dispatch(cli.command).await {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
