//! Snapshot tests for CLI output using insta.
//!
//! These tests capture translated URLs and error messages as snapshots,
//! making it easy to review changes to user-facing output.
//!
//! To update snapshots after intentional changes:
//! ```bash
//! cargo insta test --accept
//! ```

#[allow(dead_code)]
mod common;
use common::clean_command;

/// Strip trailing whitespace from each line for stable snapshots
fn normalize_output(output: &[u8]) -> String {
    String::from_utf8_lossy(output)
        .lines()
        .map(|line| line.trim_end())
        .collect::<Vec<_>>()
        .join("\n")
}

fn translate_stdout(url: &str) -> String {
    let output = clean_command()
        .args(["translate", url])
        .output()
        .expect("Failed to execute command");
    normalize_output(&output.stdout)
}

fn translate_stderr(url: &str) -> String {
    let output = clean_command()
        .args(["translate", url])
        .output()
        .expect("Failed to execute command");
    normalize_output(&output.stderr)
}

#[test]
fn test_translate_https_snapshot() {
    let normalized =
        translate_stdout("https://git-codecommit.eu-west-1.amazonaws.com/v1/repos/repository");
    insta::assert_snapshot!("translate_https", normalized);
}

#[test]
fn test_translate_grc_snapshot() {
    let normalized = translate_stdout("codecommit::eu-west-1://profile@repository");
    insta::assert_snapshot!("translate_grc", normalized);
}

#[test]
fn test_translate_grc_china_snapshot() {
    let normalized = translate_stdout("codecommit::cn-northwest-1://repository");
    insta::assert_snapshot!("translate_grc_china", normalized);
}

#[test]
fn test_malformed_https_error_snapshot() {
    let normalized = translate_stderr("https://git-codecommit..amazonaws.com/v1/repos/repository");
    insta::assert_snapshot!("malformed_https_error", normalized);
}

#[test]
fn test_region_resolution_error_snapshot() {
    let normalized = translate_stderr("codecommit://repository");
    insta::assert_snapshot!("region_resolution_error", normalized);
}
