//! Integration tests for parsing the client configuration

use std::time::Duration;

use rstest::rstest;
use serde_json::json;
use tendermint_light_client_update::config::DEFAULT_MAX_CLOCK_DRIFT;
use tendermint_light_client_update::{
    parse_config, ConfigError, TendermintClient, TrustThreshold, TrustThresholdConfig,
    UpdateClientConfig,
};

#[test]
fn test_empty_config_uses_defaults() {
    let config: UpdateClientConfig = parse_config(json!({})).expect("empty config parses");

    assert_eq!(config, UpdateClientConfig::default());
    assert_eq!(config.max_clock_drift, DEFAULT_MAX_CLOCK_DRIFT);

    let client = TendermintClient::new(&config).expect("default config is valid");
    assert_eq!(client.trust_threshold(), TrustThreshold::TWO_THIRDS);
}

#[test]
fn test_custom_values_are_parsed() {
    let config: UpdateClientConfig = parse_config(json!({
        "trust_threshold": { "numerator": 3, "denominator": 4 },
        "max_clock_drift": 30,
    }))
    .expect("config parses");

    assert_eq!(
        config.trust_threshold,
        TrustThresholdConfig {
            numerator: 3,
            denominator: 4,
        }
    );
    assert_eq!(config.max_clock_drift, Duration::from_secs(30));

    let client = TendermintClient::new(&config).expect("3/4 is a valid threshold");
    assert_eq!(client.trust_threshold().numerator(), 3);
    assert_eq!(client.trust_threshold().denominator(), 4);
}

#[rstest]
#[case::below_one_third(1, 4)]
#[case::above_one(5, 4)]
#[case::zero_denominator(1, 0)]
fn test_invalid_trust_threshold_is_rejected(#[case] numerator: u64, #[case] denominator: u64) {
    let config: UpdateClientConfig = parse_config(json!({
        "trust_threshold": { "numerator": numerator, "denominator": denominator },
    }))
    .expect("config parses");

    let err = TendermintClient::new(&config).unwrap_err();

    assert_eq!(
        err,
        ConfigError::InvalidTrustThreshold {
            numerator,
            denominator,
        }
    );
}

#[test]
fn test_unknown_field_error_names_its_path() {
    let err = parse_config::<UpdateClientConfig>(json!({
        "trust_threshold": { "numerator": 2, "denominator": 3, "quorum": 1 },
    }))
    .unwrap_err();

    let message = err.to_string();
    assert!(message.contains("trust_threshold"), "{message}");
    assert!(message.contains("quorum"), "{message}");
}

#[test]
fn test_wrong_type_error_names_its_path() {
    let err = parse_config::<UpdateClientConfig>(json!({
        "max_clock_drift": "15s",
    }))
    .unwrap_err();

    assert!(err.to_string().contains("max_clock_drift"), "{err}");
}
