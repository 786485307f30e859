//! A minimal height-only client variant.
//!
//! The mock variant carries no cryptographic material. It exists so callers can
//! exercise client-type dispatch without generating signed headers.

use serde::{Deserialize, Serialize};
use tendermint::block::Height;
use tendermint::Time;

/// Client state of the mock client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MockClientState {
    /// Height of the most recent accepted mock header
    pub latest_height: Height,
}

/// Header of the mock client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MockHeader {
    /// Height of the header
    pub height: Height,
    /// Time of the header
    pub timestamp: Time,
}

/// Consensus state of the mock client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MockConsensusState {
    /// Time of the header the state was derived from
    pub timestamp: Time,
}

impl From<MockHeader> for MockConsensusState {
    fn from(header: MockHeader) -> Self {
        Self {
            timestamp: header.timestamp,
        }
    }
}
