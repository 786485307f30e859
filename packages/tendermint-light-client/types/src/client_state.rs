//! The trusted state of a tendermint light client.

use serde::{Deserialize, Serialize};
use tendermint::block::Height;

/// The client state of a tendermint light client.
///
/// A client state is never mutated in place: every accepted header produces a
/// new value which the caller persists in place of the old one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientState {
    /// Height of the most recent header this client has accepted
    pub latest_height: Height,
    /// Height at which the client was frozen, if any
    #[serde(default)]
    pub frozen_height: Option<Height>,
}

impl ClientState {
    /// Creates an active client state trusting the given height.
    #[must_use]
    pub const fn new(latest_height: Height) -> Self {
        Self {
            latest_height,
            frozen_height: None,
        }
    }

    /// Returns true if the client has been frozen.
    #[must_use]
    pub const fn is_frozen(&self) -> bool {
        self.frozen_height.is_some()
    }

    /// Returns a copy of this client state with the latest height replaced.
    #[must_use]
    pub fn with_latest_height(&self, latest_height: Height) -> Self {
        Self {
            latest_height,
            ..self.clone()
        }
    }

    /// Returns a copy of this client state frozen at the given height.
    #[must_use]
    pub fn frozen_at(&self, height: Height) -> Self {
        Self {
            frozen_height: Some(height),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn freezing_keeps_latest_height() {
        let client_state = ClientState::new(Height::from(10_u32));
        let frozen = client_state.frozen_at(Height::from(12_u32));

        assert!(!client_state.is_frozen());
        assert!(frozen.is_frozen());
        assert_eq!(frozen.latest_height, client_state.latest_height);
    }

    #[test]
    fn frozen_height_defaults_to_active() {
        let client_state = ClientState::new(Height::from(7_u32));
        let mut value = serde_json::to_value(&client_state).unwrap();
        value.as_object_mut().unwrap().remove("frozen_height");

        let decoded: ClientState = serde_json::from_value(value).unwrap();
        assert_eq!(decoded, client_state);
    }
}
