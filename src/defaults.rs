//! Default values for codecommit-sign configuration.
//!
//! This module centralizes the environment variable names and default
//! locations shared by the credential providers and the CLI.

use std::path::PathBuf;

/// Environment variable holding the access key id.
pub const ACCESS_KEY_ID_ENV: &str = "AWS_ACCESS_KEY_ID";

/// Environment variable holding the secret access key.
pub const SECRET_ACCESS_KEY_ENV: &str = "AWS_SECRET_ACCESS_KEY";

/// Environment variable holding the session token of temporary credentials.
pub const SESSION_TOKEN_ENV: &str = "AWS_SESSION_TOKEN";

/// Environment variable naming the profile to read credentials from.
pub const PROFILE_ENV: &str = "AWS_PROFILE";

/// Environment variable supplying the default region for GRC URLs that
/// omit one.
pub const REGION_ENV: &str = "AWS_REGION";

/// Environment variable overriding the shared credentials file location.
pub const CREDENTIALS_FILE_ENV: &str = "AWS_SHARED_CREDENTIALS_FILE";

/// Profile used when none is selected.
pub const DEFAULT_PROFILE: &str = "default";

/// Credentials file path used when the home directory cannot be determined.
pub const CREDENTIALS_FILE_FALLBACK: &str = ".aws/credentials";

/// Returns the default shared credentials file, `~/.aws/credentials`.
///
/// Returns `None` if the home directory cannot be determined.
pub fn default_credentials_file() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".aws").join("credentials"))
}

/// Returns the profile named by `AWS_PROFILE`, or `default`.
pub fn default_profile() -> String {
    std::env::var(PROFILE_ENV)
        .ok()
        .filter(|profile| !profile.is_empty())
        .unwrap_or_else(|| DEFAULT_PROFILE.to_string())
}
