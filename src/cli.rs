//! CLI argument parsing and command dispatch

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands;

/// CodeCommit Sign - Generate AWS SigV4 signed CodeCommit clone URLs
#[derive(Parser, Debug)]
#[command(name = "codecommit-sign")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(
        long,
        global = true,
        value_name = "LEVEL",
        env = "RUST_LOG",
        default_value = "warn"
    )]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Sign a CodeCommit clone URL with temporary credentials
    Sign(commands::sign::SignArgs),

    /// Translate a CodeCommit URL between the HTTPS and GRC notations
    Translate(commands::translate::TranslateArgs),

    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        env_logger::Builder::new()
            .parse_filters(&self.log_level)
            .format_timestamp(None)
            .init();

        match self.command {
            Commands::Sign(args) => commands::sign::execute(args),
            Commands::Translate(args) => commands::translate::execute(args),
            Commands::Completions(args) => commands::completions::execute(args),
        }
    }
}
