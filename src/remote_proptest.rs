//! Property-based tests for remote parsing, translation and signing.
//!
//! These tests use proptest to generate random inputs and verify that
//! invariants hold for all possible inputs.

#[cfg(test)]
mod proptest_tests {
    use crate::credentials::Credentials;
    use crate::remote::Remote;
    use crate::signer::{RequestTime, Signer};
    use crate::translate::{partition_domain, to_canonical_form, to_short_form};
    use chrono::{TimeZone, Utc};
    use proptest::prelude::*;

    fn region() -> impl Strategy<Value = String> {
        prop_oneof![
            "[a-z]{2}-[a-z]{4,9}-[1-9]",
            Just("cn-north-1".to_string()),
            Just("cn-northwest-1".to_string()),
        ]
    }

    fn repository() -> impl Strategy<Value = String> {
        "[A-Za-z0-9._-]{1,40}"
    }

    fn https_url(region: &str, repository: &str) -> String {
        format!(
            "https://git-codecommit.{}.{}/v1/repos/{}",
            region,
            partition_domain(region),
            repository
        )
    }

    // ============================================================================
    // Parsing property tests
    // ============================================================================

    proptest! {
        /// Property: a parsed HTTPS remote always has a non-empty repository
        #[test]
        fn parse_https_extracts_fields(region in region(), repository in repository()) {
            let remote = Remote::parse_https(&https_url(&region, &repository)).unwrap();
            prop_assert_eq!(&remote.region, &region);
            prop_assert_eq!(&remote.repository, &repository);
            prop_assert!(remote.profile.is_empty());
        }

        /// Property: only the final `@` splits profile from repository
        #[test]
        fn parse_grc_last_at_wins(
            profile in "[a-z0-9@]{1,10}",
            repository in repository(),
        ) {
            let remote = Remote::parse_grc(&format!("codecommit://{}@{}", profile, repository)).unwrap();
            prop_assert_eq!(remote.profile, profile);
            prop_assert_eq!(remote.repository, repository);
            prop_assert_eq!(remote.region, "");
        }

        /// Property: parsing never panics on arbitrary input
        #[test]
        fn parse_never_panics(input in ".*") {
            let _ = Remote::parse(&input);
        }
    }

    // ============================================================================
    // Translation property tests
    // ============================================================================

    proptest! {
        /// Property: HTTPS -> GRC -> HTTPS is the identity without a profile
        #[test]
        fn https_round_trip(region in region(), repository in repository()) {
            let url = https_url(&region, &repository);
            let grc = to_short_form(&url).unwrap();
            prop_assert_eq!(to_canonical_form(&grc, None).unwrap(), url);
        }

        /// Property: GRC -> HTTPS -> GRC drops only the profile
        #[test]
        fn grc_round_trip_drops_profile(
            region in region(),
            profile in "[a-z]{1,10}",
            repository in repository(),
        ) {
            let grc = format!("codecommit::{}://{}@{}", region, profile, repository);
            let https = to_canonical_form(&grc, None).unwrap();
            prop_assert_eq!(
                to_short_form(&https).unwrap(),
                format!("codecommit::{}://{}", region, repository)
            );
        }
    }

    // ============================================================================
    // Signing property tests
    // ============================================================================

    proptest! {
        /// Property: signing is deterministic and only alters the authority
        #[test]
        fn sign_is_deterministic(
            region in region(),
            repository in repository(),
            secret in "[A-Za-z0-9/+]{1,40}",
            seconds in 0i64..4_000_000_000,
        ) {
            let url = https_url(&region, &repository);
            let creds = Credentials::new("AKID", secret, "TOKEN");
            let time = RequestTime::from(Utc.timestamp_opt(seconds, 0).unwrap());

            let signer = Signer::new();
            let first = signer.sign(&url, &creds, time).unwrap();
            let second = signer.sign(&url, &creds, time).unwrap();
            prop_assert_eq!(&first, &second);

            let (userinfo, rest) = first
                .strip_prefix("https://")
                .and_then(|s| s.split_once('@'))
                .unwrap();
            prop_assert!(userinfo.starts_with("AKID%25TOKEN:"));
            prop_assert_eq!(format!("https://{}", rest), url);
        }
    }
}
