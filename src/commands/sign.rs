//! # Sign Command Implementation
//!
//! This module implements the `sign` subcommand, which prints a SigV4 signed
//! clone URL for a CodeCommit repository.
//!
//! ## Functionality
//!
//! - **Either notation**: The URL may be given as an HTTPS clone URL or as a
//!   GRC URL. A GRC URL is first translated to HTTPS, falling back to
//!   `--region`/`AWS_REGION` when it names no region.
//! - **Credential lookup**: Credentials come from the environment or the
//!   shared credentials file. A profile named by `--profile` wins over one
//!   embedded in a GRC URL.
//!
//! ## Example
//!
//! ```bash
//! git clone "$(codecommit-sign sign codecommit::eu-west-1://my-repo)"
//! ```

use anyhow::{Context, Result};
use clap::Args;
use log::{debug, info};
use std::path::PathBuf;

use codecommit_sign::credentials::CredentialChain;
use codecommit_sign::defaults;
use codecommit_sign::remote::{self, Remote};
use codecommit_sign::signer::{RequestTime, Signer};
use codecommit_sign::translate;

/// Sign a CodeCommit clone URL with temporary credentials
#[derive(Args, Debug)]
pub struct SignArgs {
    /// The HTTPS or GRC (codecommit://) URL of the repository
    #[arg(value_name = "URL")]
    pub url: String,

    /// The AWS named profile to use when looking up credentials
    #[arg(long, value_name = "PROFILE")]
    pub profile: Option<String>,

    /// Region used for GRC URLs that do not name one
    #[arg(long, value_name = "REGION", env = defaults::REGION_ENV)]
    pub region: Option<String>,

    /// Path to the shared credentials file.
    ///
    /// Defaults to `~/.aws/credentials`.
    #[arg(long, value_name = "FILE", env = defaults::CREDENTIALS_FILE_ENV)]
    pub credentials_file: Option<PathBuf>,
}

/// Execute the `sign` command.
pub fn execute(args: SignArgs) -> Result<()> {
    let (clone_url, url_profile) = if remote::is_grc(&args.url) {
        let remote = Remote::parse_grc(&args.url)?;
        let clone_url = translate::canonical_url(&remote, args.region.as_deref())
            .context("Failed to resolve the GRC URL to an HTTPS clone URL")?;
        debug!("Resolved {} to {}", args.url, clone_url);
        (clone_url, Some(remote.profile).filter(|p| !p.is_empty()))
    } else {
        (args.url, None)
    };

    let profile = args.profile.or(url_profile);
    if let Some(profile) = &profile {
        info!("Using AWS profile '{}'", profile);
    }

    let chain = CredentialChain::default_chain(profile.as_deref(), args.credentials_file);
    let credentials = chain
        .resolve()
        .context("Failed to retrieve AWS credentials")?;

    let signed = Signer::new().sign(&clone_url, &credentials, RequestTime::now())?;
    println!("{}", signed);
    Ok(())
}
