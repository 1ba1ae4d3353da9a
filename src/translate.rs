//! Translation between the HTTPS and GRC notations of a CodeCommit remote.
//!
//! A profile is only ever used to route credential lookup, so it is dropped
//! from both rendered notations.

use crate::error::{Error, Result};
use crate::remote::{self, Remote, CHINA_DOMAIN, GRC_SCHEME, SERVICE_HOST, STANDARD_DOMAIN};

/// Regions served from the AWS China partition
pub const CHINA_REGIONS: &[&str] = &["cn-north-1", "cn-northwest-1"];

/// Select the partition domain suffix for a region.
pub fn partition_domain(region: &str) -> &'static str {
    if CHINA_REGIONS.contains(&region) {
        CHINA_DOMAIN
    } else {
        STANDARD_DOMAIN
    }
}

/// Translate a CodeCommit HTTPS URL to the GRC notation.
///
/// ```
/// use codecommit_sign::translate::to_short_form;
///
/// let grc = to_short_form("https://git-codecommit.eu-west-1.amazonaws.com/v1/repos/repo").unwrap();
/// assert_eq!(grc, "codecommit::eu-west-1://repo");
/// ```
pub fn to_short_form(https_url: &str) -> Result<String> {
    let remote = Remote::parse_https(https_url)?;
    Ok(render_grc(&remote))
}

/// Translate a CodeCommit GRC URL to the HTTPS notation.
///
/// When the URL carries no region, `default_region` is used instead; an
/// empty default counts as missing.
pub fn to_canonical_form(grc_url: &str, default_region: Option<&str>) -> Result<String> {
    canonical_url(&Remote::parse_grc(grc_url)?, default_region)
}

/// Render an already parsed remote as its HTTPS clone URL, resolving a
/// missing region from `default_region`.
pub fn canonical_url(remote: &Remote, default_region: Option<&str>) -> Result<String> {
    let region = match remote.region.as_str() {
        "" => default_region
            .filter(|region| !region.is_empty())
            .ok_or(Error::RegionResolution)?,
        region => region,
    };

    Ok(render_https(region, &remote.repository))
}

/// Translate a URL into whichever notation it is not already in.
pub fn translate(url: &str, default_region: Option<&str>) -> Result<String> {
    if remote::is_grc(url) {
        to_canonical_form(url, default_region)
    } else {
        to_short_form(url)
    }
}

fn render_grc(remote: &Remote) -> String {
    format!("{}::{}://{}", GRC_SCHEME, remote.region, remote.repository)
}

fn render_https(region: &str, repository: &str) -> String {
    format!(
        "https://{}.{}.{}/v1/repos/{}",
        SERVICE_HOST,
        region,
        partition_domain(region),
        repository
    )
}
