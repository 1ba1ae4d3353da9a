//! # CodeCommit Remotes
//!
//! A CodeCommit repository can be named with two equivalent notations:
//!
//! - **HTTPS**: `https://[userinfo@]git-codecommit.<region>.<domain>/v1/repos/<repository>`
//!   where `<domain>` is one of the partition domains `amazonaws.com` or
//!   `amazonaws.com.cn`.
//! - **GRC** (git-remote-codecommit): `codecommit[::<region>]://[<profile>@]<repository>`
//!
//! This module only dissects URLs into a [`Remote`]. It performs no region
//! resolution; a GRC URL without a region yields an empty `region`, which
//! [`crate::translate`] resolves later.
//!
//! ## Example
//!
//! ```
//! use codecommit_sign::remote::Remote;
//!
//! let remote = Remote::parse_grc("codecommit::eu-west-1://dev@my-repo").unwrap();
//! assert_eq!(remote.region, "eu-west-1");
//! assert_eq!(remote.repository, "my-repo");
//! assert_eq!(remote.profile, "dev");
//! ```

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};

/// Host label shared by every CodeCommit git endpoint
pub const SERVICE_HOST: &str = "git-codecommit";

/// Partition domain used by the standard AWS partition
pub const STANDARD_DOMAIN: &str = "amazonaws.com";

/// Partition domain used by the AWS China partition
pub const CHINA_DOMAIN: &str = "amazonaws.com.cn";

/// Scheme prefix of the GRC notation
pub const GRC_SCHEME: &str = "codecommit";

static HTTPS_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^https://(?:[^@/]+@)?git-codecommit\.(?P<region>[^./@]+)\.(?P<domain>amazonaws\.com|amazonaws\.com\.cn)/v1/repos/(?P<repository>[^/]+)$",
    )
    .expect("HTTPS remote pattern is valid")
});

static GRC_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^codecommit(?:::(?P<region>[^:/]+))?://(?P<remainder>.+)$")
        .expect("GRC remote pattern is valid")
});

/// Details about how a repository is hosted within CodeCommit and how it
/// will be accessed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Remote {
    /// Name of the target repository, never empty after a successful parse
    pub repository: String,

    /// AWS region hosting the repository. Empty when a GRC URL omitted it.
    pub region: String,

    /// Named AWS profile selected by a GRC URL. Empty means none.
    pub profile: String,
}

impl Remote {
    /// Dissect a CodeCommit HTTPS clone URL.
    ///
    /// Any userinfo in the authority is ignored and never treated as a
    /// profile.
    pub fn parse_https(url: &str) -> Result<Self> {
        let captures = HTTPS_URL.captures(url).ok_or(Error::MalformedHttpsUrl)?;

        Ok(Remote {
            repository: captures["repository"].to_string(),
            region: captures["region"].to_string(),
            profile: String::new(),
        })
    }

    /// Dissect a CodeCommit GRC URL.
    ///
    /// The last `@` in the remainder separates the profile from the
    /// repository, so a profile can never contain `@`.
    pub fn parse_grc(url: &str) -> Result<Self> {
        let captures = GRC_URL.captures(url).ok_or(Error::MalformedGrcUrl)?;

        let region = captures
            .name("region")
            .map(|m| m.as_str().to_string())
            .unwrap_or_default();

        let remainder = &captures["remainder"];
        let (profile, repository) = match remainder.rsplit_once('@') {
            Some((profile, repository)) => (profile, repository),
            None => ("", remainder),
        };

        if repository.is_empty() {
            return Err(Error::MalformedGrcUrl);
        }

        Ok(Remote {
            repository: repository.to_string(),
            region,
            profile: profile.to_string(),
        })
    }

    /// Dissect a URL in either notation, choosing the parser by scheme.
    pub fn parse(url: &str) -> Result<Self> {
        if is_grc(url) {
            Self::parse_grc(url)
        } else {
            Self::parse_https(url)
        }
    }
}

/// Returns `true` when the URL uses the GRC scheme.
pub fn is_grc(url: &str) -> bool {
    url.strip_prefix(GRC_SCHEME)
        .is_some_and(|rest| rest.starts_with(':'))
}

/// Extract the region label from a CodeCommit HTTPS host.
///
/// Unlike [`Remote::parse_https`], everything after `/v1/repos/` is treated
/// opaquely and userinfo is not accepted.
pub(crate) fn https_region(url: &str) -> Result<&str> {
    static HOST: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(
            r"^https://git-codecommit\.(?P<region>[^./@]+)\.(?:amazonaws\.com|amazonaws\.com\.cn)/v1/repos/",
        )
        .expect("HTTPS host pattern is valid")
    });

    HOST.captures(url)
        .and_then(|c| c.name("region"))
        .map(|m| m.as_str())
        .ok_or(Error::NoRegion)
}
