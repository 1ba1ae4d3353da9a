//! # CodeCommit URL Signing
//!
//! Implements the AWS Signature Version 4 algorithm, specialised to the
//! request a git client makes against CodeCommit: the `GIT` verb, no query
//! parameters, no payload, and `host` as the only signed header. See
//! <https://docs.aws.amazon.com/general/latest/gr/sigv4_signing.html>.
//!
//! CodeCommit is accessed directly by git over HTTPS, so the signature is
//! supplied through Basic authentication embedded in the clone URL:
//!
//! ```text
//! https://<access key id>%<session token>:<timestamp>Z<signature>@git-codecommit.<region>.amazonaws.com/v1/repos/<repository>
//! ```
//!
//! ## Example
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use codecommit_sign::credentials::Credentials;
//! use codecommit_sign::signer::{RequestTime, Signer};
//!
//! let creds = Credentials::new("ACCESS_KEY_ID", "SECRET_ACCESS_KEY", "SESSION_TOKEN");
//! let time = RequestTime::from(Utc.with_ymd_and_hms(2021, 9, 1, 10, 25, 23).unwrap());
//!
//! let signed = Signer::new()
//!     .sign("https://git-codecommit.eu-west-1.amazonaws.com/v1/repos/dummy-repo", &creds, time)
//!     .unwrap();
//! assert!(signed.starts_with("https://ACCESS_KEY_ID%25SESSION_TOKEN:20210901T102523Z"));
//! ```

use chrono::{DateTime, SubsecRound, Utc};
use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};
use url::form_urlencoded;

use crate::credentials::Credentials;
use crate::error::{Error, Result};
use crate::remote;

/// Service name CodeCommit signatures are scoped to
pub const SERVICE: &str = "codecommit";

/// Signing algorithm identifier
pub const ALGORITHM_IDENTIFIER: &str = "AWS4-HMAC-SHA256";

/// Terminator of every credential scope
pub const KEY_TYPE_IDENTIFIER: &str = "aws4_request";

const METHOD: &str = "GIT";
const SIGNED_HEADERS: &str = "host";
const SCHEME_PREFIX: &str = "https://";

/// The instant a request is signed at, truncated to whole seconds.
///
/// Sampled once per signature so every derived value agrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestTime(DateTime<Utc>);

impl RequestTime {
    /// The current time.
    pub fn now() -> Self {
        Self::from(Utc::now())
    }

    /// Timestamp in the compact `YYYYMMDDThhmmss` format.
    pub fn timestamp(&self) -> String {
        self.0.format("%Y%m%dT%H%M%S").to_string()
    }

    /// Date in the 8 digit `YYYYMMDD` format.
    pub fn date(&self) -> String {
        self.0.format("%Y%m%d").to_string()
    }
}

impl From<DateTime<Utc>> for RequestTime {
    fn from(time: DateTime<Utc>) -> Self {
        Self(time.trunc_subsecs(0))
    }
}

/// Signs CodeCommit clone URLs.
///
/// Holds no state beyond the service name, so a single signer can be shared
/// freely between callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signer {
    service: String,
}

impl Default for Signer {
    fn default() -> Self {
        Self::new()
    }
}

impl Signer {
    /// Create a signer for the CodeCommit service.
    pub fn new() -> Self {
        Self {
            service: SERVICE.to_string(),
        }
    }

    /// Sign a CodeCommit HTTPS clone URL.
    ///
    /// Returns the same URL with signed credentials inserted into its
    /// authority. Fails only when no region can be found in the host.
    pub fn sign(
        &self,
        clone_url: &str,
        credentials: &Credentials,
        time: RequestTime,
    ) -> Result<String> {
        let region = remote::https_region(clone_url)?;
        let (host, path) = request_target(clone_url)?;

        let canonical_request = canonical_request(path, host);
        let scope = self.scope(&time, region);
        let string_to_sign = string_to_sign(&canonical_request, &time, &scope);
        let signature = self.signature(&credentials.secret_access_key, &time, region, &string_to_sign);

        let password = format!("{}Z{}", time.timestamp(), signature);
        let username: String = form_urlencoded::byte_serialize(
            format!("{}%{}", credentials.access_key_id, credentials.session_token).as_bytes(),
        )
        .collect();

        Ok(clone_url.replacen(
            SCHEME_PREFIX,
            &format!("{}{}:{}@", SCHEME_PREFIX, username, password),
            1,
        ))
    }

    /// Credential scope binding a signature to a date, region and service.
    fn scope(&self, time: &RequestTime, region: &str) -> String {
        format!(
            "{}/{}/{}/{}",
            time.date(),
            region,
            self.service,
            KEY_TYPE_IDENTIFIER
        )
    }

    fn signing_key(&self, secret: &str, time: &RequestTime, region: &str) -> Vec<u8> {
        let key = format!("AWS4{}", secret);
        let k_date = hmac_sign(key.as_bytes(), time.date().as_bytes());
        let k_region = hmac_sign(&k_date, region.as_bytes());
        let k_service = hmac_sign(&k_region, self.service.as_bytes());
        hmac_sign(&k_service, KEY_TYPE_IDENTIFIER.as_bytes())
    }

    fn signature(
        &self,
        secret: &str,
        time: &RequestTime,
        region: &str,
        string_to_sign: &str,
    ) -> String {
        let signing_key = self.signing_key(secret, time, region);
        hex::encode(hmac_sign(&signing_key, string_to_sign.as_bytes()))
    }
}

/// Split a clone URL into the host and path exactly as written.
///
/// Nothing is normalised: the host keeps its case and the path keeps any
/// dot segments or escapes. Query and fragment are dropped.
fn request_target(clone_url: &str) -> Result<(&str, &str)> {
    let rest = clone_url.strip_prefix(SCHEME_PREFIX).ok_or(Error::NoRegion)?;
    let slash = rest.find('/').ok_or(Error::NoRegion)?;
    let (host, path) = rest.split_at(slash);
    let end = path.find(|c: char| c == '?' || c == '#').unwrap_or(path.len());
    Ok((host, &path[..end]))
}

// Query parameters and payload are never part of a git request, so both
// positions stay empty.
fn canonical_request(path: &str, host: &str) -> String {
    format!(
        "{}\n{}\n\nhost:{}\n\n{}\n",
        METHOD, path, host, SIGNED_HEADERS
    )
}

fn string_to_sign(canonical_request: &str, time: &RequestTime, scope: &str) -> String {
    format!(
        "{}\n{}\n{}\n{}",
        ALGORITHM_IDENTIFIER,
        time.timestamp(),
        scope,
        hex::encode(Sha256::digest(canonical_request.as_bytes()))
    )
}

fn hmac_sign(key: &[u8], data: &[u8]) -> Vec<u8> {
    let mut mac = Hmac::<Sha256>::new_from_slice(key).expect("HMAC can take key of any size");
    mac.update(data);
    mac.finalize().into_bytes().to_vec()
}
