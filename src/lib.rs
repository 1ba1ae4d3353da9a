//! # CodeCommit Sign Library
//!
//! This library generates temporary, AWS SigV4 signed clone URLs for AWS
//! CodeCommit repositories, so that git clients and build agents can fetch
//! and push without long-lived git credentials. It also translates between
//! the two notations a CodeCommit remote can be written in.
//!
//! ## Quick Example
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use codecommit_sign::credentials::Credentials;
//! use codecommit_sign::signer::{RequestTime, Signer};
//! use codecommit_sign::translate;
//!
//! // Resolve a GRC remote into its HTTPS clone URL
//! let url = translate::to_canonical_form("codecommit::eu-west-1://dummy-repo", None).unwrap();
//! assert_eq!(url, "https://git-codecommit.eu-west-1.amazonaws.com/v1/repos/dummy-repo");
//!
//! // Sign it
//! let creds = Credentials::new("ACCESS_KEY_ID", "SECRET_ACCESS_KEY", "");
//! let time = RequestTime::from(Utc.with_ymd_and_hms(2021, 9, 1, 10, 25, 23).unwrap());
//! let signed = Signer::new().sign(&url, &creds, time).unwrap();
//! assert!(signed.contains("@git-codecommit.eu-west-1.amazonaws.com/v1/repos/dummy-repo"));
//! ```
//!
//! ## Core Concepts
//!
//! - **Remotes (`remote`)**: Dissects HTTPS and GRC (git-remote-codecommit)
//!   URLs into a region, repository and optional profile.
//! - **Translation (`translate`)**: Renders a remote in the opposite notation,
//!   resolving a missing region from a supplied default and choosing the
//!   partition domain.
//! - **Signing (`signer`)**: Computes the SigV4 signature for a git request
//!   and embeds it into the clone URL as Basic authentication.
//! - **Credentials (`credentials`)**: The credentials value consumed by the
//!   signer, plus environment and shared-file providers for callers.
//!
//! The remote, translate and signer modules are pure: they perform no I/O,
//! hold no shared state and never log.

pub mod credentials;
pub mod defaults;
pub mod error;
pub mod remote;
pub mod signer;
pub mod translate;

#[cfg(test)]
mod remote_proptest;
