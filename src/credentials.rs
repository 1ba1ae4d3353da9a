//! # Credentials
//!
//! The signer consumes a [`Credentials`] value and never acquires, refreshes
//! or validates credentials on its own. This module also provides a small
//! acquisition layer, modelled on the AWS default provider chain, for callers
//! such as the `codecommit-sign` binary:
//!
//! - [`EnvironmentProvider`]: `AWS_ACCESS_KEY_ID`, `AWS_SECRET_ACCESS_KEY` and
//!   `AWS_SESSION_TOKEN`.
//! - [`ProfileProvider`]: a named profile within the shared credentials file
//!   (`~/.aws/credentials` unless overridden).
//! - [`CredentialChain`]: tries providers in order until one yields
//!   credentials.
//!
//! Secret values are never logged and are redacted from `Debug` output.

use std::fmt;
use std::path::PathBuf;

use ini::Ini;
use log::{debug, warn};

use crate::defaults;
use crate::error::{Error, Result};

/// AWS credentials used to sign a single request.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    /// AWS Access Key ID
    pub access_key_id: String,
    /// AWS Secret Access Key
    pub secret_access_key: String,
    /// Session token for temporary credentials. Empty for long-lived keys.
    pub session_token: String,
}

impl Credentials {
    /// Create a new set of credentials.
    pub fn new(
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
        session_token: impl Into<String>,
    ) -> Self {
        Self {
            access_key_id: access_key_id.into(),
            secret_access_key: secret_access_key.into(),
            session_token: session_token.into(),
        }
    }

    /// Check that both the access key id and the secret are present.
    pub fn validate(&self) -> Result<()> {
        let missing = if self.access_key_id.is_empty() {
            "access key id"
        } else if self.secret_access_key.is_empty() {
            "secret access key"
        } else {
            return Ok(());
        };

        Err(Error::Credentials {
            message: format!("credentials are missing an {}", missing),
            hint: None,
        })
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"<redacted>")
            .field(
                "session_token",
                &if self.session_token.is_empty() {
                    "<none>"
                } else {
                    "<redacted>"
                },
            )
            .finish()
    }
}

/// A source of credentials.
///
/// `Ok(None)` means the source has nothing to offer and the next source
/// should be tried; `Err` means the source exists but is unusable.
pub trait ProvideCredentials {
    /// A short name used in log messages.
    fn name(&self) -> &str;

    /// Attempt to load credentials from this source.
    fn provide(&self) -> Result<Option<Credentials>>;
}

type EnvLookup = Box<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// Loads credentials from the standard AWS environment variables.
pub struct EnvironmentProvider {
    lookup: EnvLookup,
}

impl EnvironmentProvider {
    /// Read from the process environment.
    pub fn new() -> Self {
        Self::with_lookup(|key| std::env::var(key).ok())
    }

    /// Read through a custom lookup function instead of the process
    /// environment.
    pub fn with_lookup(lookup: impl Fn(&str) -> Option<String> + Send + Sync + 'static) -> Self {
        Self {
            lookup: Box::new(lookup),
        }
    }

    fn var(&self, key: &str) -> Option<String> {
        (self.lookup)(key).filter(|value| !value.is_empty())
    }
}

impl Default for EnvironmentProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for EnvironmentProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvironmentProvider").finish_non_exhaustive()
    }
}

impl ProvideCredentials for EnvironmentProvider {
    fn name(&self) -> &str {
        "environment"
    }

    fn provide(&self) -> Result<Option<Credentials>> {
        let access_key_id = self.var(defaults::ACCESS_KEY_ID_ENV);
        let secret_access_key = self.var(defaults::SECRET_ACCESS_KEY_ENV);

        match (access_key_id, secret_access_key) {
            (Some(access_key_id), Some(secret_access_key)) => Ok(Some(Credentials {
                access_key_id,
                secret_access_key,
                session_token: self.var(defaults::SESSION_TOKEN_ENV).unwrap_or_default(),
            })),
            (None, None) => Ok(None),
            _ => {
                warn!(
                    "Ignoring partial credentials in the environment: both {} and {} must be set",
                    defaults::ACCESS_KEY_ID_ENV,
                    defaults::SECRET_ACCESS_KEY_ENV
                );
                Ok(None)
            }
        }
    }
}

/// Loads credentials for a named profile from a shared credentials file.
///
/// By default a missing file or profile yields nothing so the next provider
/// can be tried. A [`required`](ProfileProvider::required) provider reports
/// it as an error instead.
#[derive(Debug, Clone)]
pub struct ProfileProvider {
    path: PathBuf,
    profile: String,
    required: bool,
}

impl ProfileProvider {
    /// Read `profile` from the credentials file at `path`.
    pub fn new(path: impl Into<PathBuf>, profile: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            profile: profile.into(),
            required: false,
        }
    }

    /// Fail instead of yielding nothing when the profile cannot be found.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    fn missing(&self, message: String) -> Result<Option<Credentials>> {
        if self.required {
            return Err(self.not_found(message));
        }
        debug!("{}", message);
        Ok(None)
    }

    fn not_found(&self, message: String) -> Error {
        Error::Credentials {
            message,
            hint: Some(format!(
                "Add a [{}] section with aws_access_key_id and aws_secret_access_key to {}",
                self.profile,
                self.path.display()
            )),
        }
    }
}

impl ProvideCredentials for ProfileProvider {
    fn name(&self) -> &str {
        "profile"
    }

    fn provide(&self) -> Result<Option<Credentials>> {
        if !self.path.exists() {
            return self.missing(format!(
                "credentials file {} does not exist",
                self.path.display()
            ));
        }

        let file = Ini::load_from_file(&self.path)?;
        let Some(section) = file.section(Some(self.profile.as_str())) else {
            return self.missing(format!(
                "profile '{}' not found in {}",
                self.profile,
                self.path.display()
            ));
        };

        let access_key_id = section.get("aws_access_key_id").unwrap_or_default();
        let secret_access_key = section.get("aws_secret_access_key").unwrap_or_default();
        if access_key_id.is_empty() || secret_access_key.is_empty() {
            return Err(self.not_found(format!(
                "profile '{}' in {} is missing aws_access_key_id or aws_secret_access_key",
                self.profile,
                self.path.display()
            )));
        }

        Ok(Some(Credentials {
            access_key_id: access_key_id.to_string(),
            secret_access_key: secret_access_key.to_string(),
            session_token: section
                .get("aws_session_token")
                .unwrap_or_default()
                .to_string(),
        }))
    }
}

/// Tries a list of providers in order; the first to yield credentials wins.
#[derive(Default)]
pub struct CredentialChain {
    providers: Vec<Box<dyn ProvideCredentials + Send + Sync>>,
}

impl CredentialChain {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a provider to the chain.
    pub fn push(mut self, provider: impl ProvideCredentials + Send + Sync + 'static) -> Self {
        self.providers.push(Box::new(provider));
        self
    }

    /// Build the default chain for an optional explicitly selected profile.
    ///
    /// An explicit profile reads only that profile from the credentials
    /// file. Otherwise the environment is tried first, followed by the
    /// profile named by `AWS_PROFILE` (or `default`).
    pub fn default_chain(profile: Option<&str>, credentials_file: Option<PathBuf>) -> Self {
        let path = credentials_file
            .or_else(defaults::default_credentials_file)
            .unwrap_or_else(|| PathBuf::from(defaults::CREDENTIALS_FILE_FALLBACK));

        match profile.filter(|p| !p.is_empty()) {
            Some(profile) => Self::new().push(ProfileProvider::new(path, profile).required()),
            None => Self::new()
                .push(EnvironmentProvider::new())
                .push(ProfileProvider::new(path, defaults::default_profile())),
        }
    }

    /// Number of providers in the chain.
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Returns `true` if the chain has no providers.
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Resolve credentials, failing when no provider has any.
    pub fn resolve(&self) -> Result<Credentials> {
        for provider in &self.providers {
            if let Some(credentials) = provider.provide()? {
                debug!(
                    "Using credentials from the {} provider (access key id {})",
                    provider.name(),
                    credentials.access_key_id
                );
                credentials.validate()?;
                return Ok(credentials);
            }
            debug!("No credentials from the {} provider", provider.name());
        }

        Err(Error::Credentials {
            message: "no AWS credentials found".to_string(),
            hint: Some(format!(
                "Set {} and {}, or configure a profile in the shared credentials file",
                defaults::ACCESS_KEY_ID_ENV,
                defaults::SECRET_ACCESS_KEY_ENV
            )),
        })
    }
}

impl fmt::Debug for CredentialChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.providers.iter().map(|p| p.name()))
            .finish()
    }
}
