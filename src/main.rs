//! # Overlay Run CLI
//!
//! This is the binary entry point for the `overlay-run` command-line tool.
//!
//! Its primary responsibilities are:
//! - Parsing launcher options using `clap`.
//! - Resolving the command and its arguments with the library.
//! - Running the command and reporting its exit status as our own.
//!
//! The resolution logic lives in the `lib.rs` library crate, so the binary is
//! a thin wrapper around it.

mod cli;

use std::process::ExitCode;

use clap::Parser;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();
    match cli.execute() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
