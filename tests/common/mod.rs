//! Shared test utilities for E2E tests.
//!
//! This module provides common fixtures, helper functions, and constants
//! to reduce duplication across test files.
//!
//! ## Usage
//!
//! Add `mod common;` to your test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new().with_credentials(credentials::DEFAULT_AND_DEV);
//!     fixture.command().args(["sign", urls::HTTPS]).assert().success();
//! }
//! ```

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use assert_fs::prelude::*;
use std::path::Path;

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    pub use assert_fs::prelude::*;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::{clean_command, credentials, urls, TestFixture};
}

/// Environment variables that would leak the developer's AWS setup into a
/// test run.
const AMBIENT_ENV: &[&str] = &[
    "AWS_ACCESS_KEY_ID",
    "AWS_SECRET_ACCESS_KEY",
    "AWS_SESSION_TOKEN",
    "AWS_PROFILE",
    "AWS_REGION",
    "AWS_SHARED_CREDENTIALS_FILE",
    "RUST_LOG",
    "RUST_BACKTRACE",
    "RUST_LIB_BACKTRACE",
];

/// CodeCommit URLs used across tests.
#[allow(dead_code)]
pub mod urls {
    pub const HTTPS: &str = "https://git-codecommit.eu-west-1.amazonaws.com/v1/repos/dummy-repo";
    pub const HTTPS_CHINA: &str =
        "https://git-codecommit.cn-north-1.amazonaws.com.cn/v1/repos/dummy-repo";
    pub const GRC: &str = "codecommit::eu-west-1://dummy-repo";
    pub const GRC_WITH_PROFILE: &str = "codecommit::eu-west-1://dev@dummy-repo";
    pub const GRC_NO_REGION: &str = "codecommit://dummy-repo";
    pub const MALFORMED_HTTPS: &str = "https://git-codecommit..amazonaws.com/v1/repos/dummy-repo";
}

/// Shared credentials file contents.
#[allow(dead_code)]
pub mod credentials {
    pub const DEFAULT_AND_DEV: &str = r#"[default]
aws_access_key_id = DEFAULT_ID
aws_secret_access_key = DEFAULT_SECRET

[dev]
aws_access_key_id = DEV_ID
aws_secret_access_key = DEV_SECRET
aws_session_token = DEV_TOKEN
"#;
}

/// A binary command with every ambient AWS variable removed.
pub fn clean_command() -> Command {
    let mut cmd = cargo_bin_cmd!("codecommit-sign");
    for var in AMBIENT_ENV {
        cmd.env_remove(var);
    }
    cmd
}

/// A test fixture providing an isolated home directory.
///
/// Commands created by the fixture use the temporary directory as `HOME`, so
/// `~/.aws/credentials` resolves inside it.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

impl TestFixture {
    /// Create a new test fixture with an empty temporary home directory.
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Write `~/.aws/credentials` with the given content.
    #[allow(dead_code)]
    pub fn with_credentials(self, content: &str) -> Self {
        self.temp_dir
            .child(".aws/credentials")
            .write_str(content)
            .expect("Failed to write credentials file");
        self
    }

    /// Get the path to the temporary home directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Create a command running with this fixture as its home directory.
    pub fn command(&self) -> Command {
        let mut cmd = clean_command();
        cmd.env("HOME", self.path());
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
