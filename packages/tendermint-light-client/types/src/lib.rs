//! Value types for the tendermint light client: the client state, the header
//! submitted on update, the consensus state stored per height, and the closed
//! set of client variants the update entry point dispatches over.
#![deny(missing_docs, clippy::nursery, clippy::pedantic)]

pub mod any;
pub mod client_state;
pub mod consensus_state;
pub mod header;
pub mod mock;

pub use any::{AnyClientState, AnyConsensusState, AnyHeader, ClientType};
pub use client_state::ClientState;
pub use consensus_state::ConsensusState;
pub use header::{Header, HeaderError};

pub use ibc_core_commitment_types::commitment::CommitmentRoot;
pub use tendermint::block::signed_header::SignedHeader;
pub use tendermint::validator::Set as ValidatorSet;
