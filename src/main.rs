//! # CodeCommit Sign CLI
//!
//! This is the binary entry point for the `codecommit-sign` command-line tool.
//!
//! Its primary responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Acquiring credentials and executing the selected command.
//! - Handling top-level application errors; `anyhow` renders them on stderr
//!   and the process exits with status 1.
//!
//! The signing and translation logic lives in the `lib.rs` library crate, so
//! the binary stays a thin wrapper around it.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.execute()
}
