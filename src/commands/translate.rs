//! # Translate Command Implementation
//!
//! This module implements the `translate` subcommand, which converts a
//! CodeCommit URL into the opposite notation:
//!
//! - `https://git-codecommit.<region>.amazonaws.com/v1/repos/<repo>` becomes
//!   `codecommit::<region>://<repo>`.
//! - `codecommit[::<region>]://[<profile>@]<repo>` becomes the HTTPS clone
//!   URL. A missing region falls back to `--region`/`AWS_REGION`.
//!
//! Profiles and userinfo are dropped in both directions.

use anyhow::Result;
use clap::Args;
use log::debug;

use codecommit_sign::defaults;
use codecommit_sign::translate;

/// Translate a CodeCommit URL between the HTTPS and GRC notations
#[derive(Args, Debug)]
pub struct TranslateArgs {
    /// The HTTPS or GRC (codecommit://) URL to translate
    #[arg(value_name = "URL")]
    pub url: String,

    /// Region used for GRC URLs that do not name one
    #[arg(long, value_name = "REGION", env = defaults::REGION_ENV)]
    pub region: Option<String>,
}

/// Execute the `translate` command.
pub fn execute(args: TranslateArgs) -> Result<()> {
    let translated = translate::translate(&args.url, args.region.as_deref())?;
    // The input may carry userinfo; only the rendered URL is logged.
    debug!("Translated to {}", translated);
    println!("{}", translated);
    Ok(())
}
