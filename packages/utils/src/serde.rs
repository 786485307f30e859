//! This module provides custom serde implementations.

/// Serialize a [`core::time::Duration`] as a whole number of seconds.
pub mod duration_as_secs {
    use core::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    /// Implements the serde `serialize` function for a duration.
    /// # Errors
    /// Returns an error if the serializer fails.
    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(duration.as_secs())
    }

    /// Implements the serde `deserialize` function for a duration.
    /// # Errors
    /// Returns an error if the value is not an unsigned integer.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        u64::deserialize(deserializer).map(Duration::from_secs)
    }
}
