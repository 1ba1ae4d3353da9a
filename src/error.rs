//! # Error Handling
//!
//! This module defines the centralized error type for `codecommit-sign`. It
//! uses the `thiserror` library to derive a single `Error` enum covering every
//! failure the library can report.
//!
//! ## Error Kinds
//!
//! - **Malformed URL**: the input does not match the grammar of its notation.
//!   Raised by the remote parser and the signer, and passed through the
//!   translator unchanged. See [`Error::is_malformed_url`].
//! - **Region resolution**: a GRC URL carries no region and no default region
//!   was supplied.
//! - **Credentials**: credential acquisition failed. Only the credential
//!   providers raise this; the signing core never does.
//!
//! Error messages never echo the offending URL, since HTTPS remotes may carry
//! userinfo.

use thiserror::Error;

/// Main error type for codecommit-sign operations
#[derive(Error, Debug)]
pub enum Error {
    /// The URL is not a CodeCommit HTTPS clone URL.
    #[error("malformed codecommit HTTPS URL")]
    MalformedHttpsUrl,

    /// The URL is not a CodeCommit GRC (git-remote-codecommit) URL.
    #[error("malformed codecommit GRC URL")]
    MalformedGrcUrl,

    /// The signer could not find a region label in the clone URL host.
    #[error("no region found in malformed codecommit URL")]
    NoRegion,

    /// A GRC URL without a region was translated and no default region was
    /// available to fall back on.
    #[error("no aws region identified")]
    RegionResolution,

    /// Credentials could not be acquired.
    ///
    /// Includes an optional hint describing how to supply them.
    #[error("Credential error: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    Credentials {
        message: String,
        /// Optional hint for how to resolve the credential issue
        hint: Option<String>,
    },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A shared credentials file could not be read or parsed.
    #[error("Credentials file error: {0}")]
    Ini(#[from] ini::Error),

    /// A URL parsing error, wrapped from `url::ParseError`.
    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),
}

impl Error {
    /// Returns `true` for every variant that reports input not matching a
    /// CodeCommit URL grammar.
    pub fn is_malformed_url(&self) -> bool {
        matches!(
            self,
            Error::MalformedHttpsUrl | Error::MalformedGrcUrl | Error::NoRegion | Error::UrlParse(_)
        )
    }
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
