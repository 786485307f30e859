//! Configuration of the tendermint light client.

use core::time::Duration;

use light_client_utils::serde::duration_as_secs;
use serde::{Deserialize, Serialize};
use tendermint_light_client_verifier::types::TrustThreshold;

/// The default maximum clock drift allowed between the remote chain and the host.
pub const DEFAULT_MAX_CLOCK_DRIFT: Duration = Duration::from_secs(15);

/// Configuration of a [`TendermintClient`](crate::TendermintClient).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
#[allow(clippy::module_name_repetitions)]
pub struct UpdateClientConfig {
    /// Fraction of the trusted validators' voting power that must sign a new header
    #[serde(default)]
    pub trust_threshold: TrustThresholdConfig,
    /// Maximum amount a header's time may be ahead of the host clock, in seconds
    #[serde(default = "default_max_clock_drift", with = "duration_as_secs")]
    pub max_clock_drift: Duration,
}

/// A trust threshold as a fraction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
#[allow(clippy::module_name_repetitions)]
pub struct TrustThresholdConfig {
    /// Numerator of the fraction
    pub numerator: u64,
    /// Denominator of the fraction
    pub denominator: u64,
}

/// Errors in a configuration that parses but cannot be used.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[allow(clippy::module_name_repetitions)]
pub enum ConfigError {
    /// The trust threshold is not a fraction in `[1/3, 1]`
    #[error("invalid trust threshold {numerator}/{denominator}")]
    InvalidTrustThreshold {
        /// Numerator of the rejected fraction
        numerator: u64,
        /// Denominator of the rejected fraction
        denominator: u64,
    },
}

const fn default_max_clock_drift() -> Duration {
    DEFAULT_MAX_CLOCK_DRIFT
}

impl Default for UpdateClientConfig {
    fn default() -> Self {
        Self {
            trust_threshold: TrustThresholdConfig::default(),
            max_clock_drift: DEFAULT_MAX_CLOCK_DRIFT,
        }
    }
}

impl Default for TrustThresholdConfig {
    fn default() -> Self {
        Self {
            numerator: 2,
            denominator: 3,
        }
    }
}

impl TryFrom<TrustThresholdConfig> for TrustThreshold {
    type Error = ConfigError;

    fn try_from(config: TrustThresholdConfig) -> Result<Self, Self::Error> {
        Self::new(config.numerator, config.denominator).map_err(|_| {
            ConfigError::InvalidTrustThreshold {
                numerator: config.numerator,
                denominator: config.denominator,
            }
        })
    }
}

/// Parse a configuration value into the target struct while producing
/// detailed path-aware error messages.
///
/// # Errors
/// Returns an [`anyhow::Error`] with the path of the offending field and the
/// original serde error message.
pub fn parse_config<T>(value: serde_json::Value) -> anyhow::Result<T>
where
    T: serde::de::DeserializeOwned,
{
    // Going through a string lets the deserializer report line and column.
    let json_string = value.to_string();

    let mut deserializer = serde_json::Deserializer::from_str(&json_string);
    serde_path_to_error::deserialize::<_, T>(&mut deserializer)
        .map_err(|e| anyhow::anyhow!("config error at {}: {}", e.path(), e))
}
