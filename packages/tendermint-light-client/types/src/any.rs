//! The closed set of light client variants.

use core::fmt;

use serde::{Deserialize, Serialize};
use tendermint::block::Height;

use crate::mock::{MockClientState, MockConsensusState, MockHeader};
use crate::{ClientState, ConsensusState, Header};

/// Identifies a light client variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClientType {
    /// A client tracking a tendermint chain
    Tendermint,
    /// The height-only mock client
    Mock,
}

impl ClientType {
    /// Returns the IBC client type identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Tendermint => "07-tendermint",
            Self::Mock => "9999-mock",
        }
    }
}

impl fmt::Display for ClientType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A client state of any supported variant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnyClientState {
    /// Tendermint client state
    Tendermint(ClientState),
    /// Mock client state
    Mock(MockClientState),
}

impl AnyClientState {
    /// The variant of this client state.
    #[must_use]
    pub const fn client_type(&self) -> ClientType {
        match self {
            Self::Tendermint(_) => ClientType::Tendermint,
            Self::Mock(_) => ClientType::Mock,
        }
    }

    /// Height of the most recent accepted header.
    #[must_use]
    pub const fn latest_height(&self) -> Height {
        match self {
            Self::Tendermint(client_state) => client_state.latest_height,
            Self::Mock(client_state) => client_state.latest_height,
        }
    }
}

impl From<ClientState> for AnyClientState {
    fn from(client_state: ClientState) -> Self {
        Self::Tendermint(client_state)
    }
}

impl From<MockClientState> for AnyClientState {
    fn from(client_state: MockClientState) -> Self {
        Self::Mock(client_state)
    }
}

/// A header of any supported variant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[allow(clippy::large_enum_variant)]
pub enum AnyHeader {
    /// Tendermint header
    Tendermint(Header),
    /// Mock header
    Mock(MockHeader),
}

impl AnyHeader {
    /// The variant of this header.
    #[must_use]
    pub const fn client_type(&self) -> ClientType {
        match self {
            Self::Tendermint(_) => ClientType::Tendermint,
            Self::Mock(_) => ClientType::Mock,
        }
    }

    /// Height of the header.
    #[must_use]
    pub const fn height(&self) -> Height {
        match self {
            Self::Tendermint(header) => header.height(),
            Self::Mock(header) => header.height,
        }
    }
}

impl From<Header> for AnyHeader {
    fn from(header: Header) -> Self {
        Self::Tendermint(header)
    }
}

impl From<MockHeader> for AnyHeader {
    fn from(header: MockHeader) -> Self {
        Self::Mock(header)
    }
}

/// A consensus state of any supported variant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnyConsensusState {
    /// Tendermint consensus state
    Tendermint(ConsensusState),
    /// Mock consensus state
    Mock(MockConsensusState),
}

impl AnyConsensusState {
    /// The variant of this consensus state.
    #[must_use]
    pub const fn client_type(&self) -> ClientType {
        match self {
            Self::Tendermint(_) => ClientType::Tendermint,
            Self::Mock(_) => ClientType::Mock,
        }
    }
}

impl From<ConsensusState> for AnyConsensusState {
    fn from(consensus_state: ConsensusState) -> Self {
        Self::Tendermint(consensus_state)
    }
}

impl From<MockConsensusState> for AnyConsensusState {
    fn from(consensus_state: MockConsensusState) -> Self {
        Self::Mock(consensus_state)
    }
}
