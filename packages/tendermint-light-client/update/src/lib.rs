//! Header validity checking and state update for the tendermint light client.
//!
//! The entry point is [`ClientDef::check_validity_and_update_state`]. It is
//! implemented by [`TendermintClient`] for tendermint values, by
//! [`MockClient`] for the mock variant, and by [`AnyClient`] which dispatches a
//! value of any variant to the matching client and rejects mismatched ones.
//!
//! A successful call returns the next client state and the consensus state at
//! the new height. The caller owns persistence of both.
#![deny(missing_docs, clippy::nursery, clippy::pedantic)]

pub mod any;
pub mod client;
pub mod clock;
pub mod config;
pub mod error;
pub mod mock;
pub mod updater;
pub mod validity;
pub mod verifier;

use core::time::Duration;

use tendermint::block::Height;
use tendermint::chain;
use tendermint_light_client_types::ValidatorSet;

pub use any::AnyClient;
pub use client::TendermintClient;
pub use clock::{FixedClock, HostClock, SystemClock};
pub use config::{parse_config, ConfigError, TrustThresholdConfig, UpdateClientConfig};
pub use error::UpdateClientError;
pub use mock::MockClient;
pub use verifier::{
    BisectionVerifier, TendermintVerifier, TrustedAnchor, UntrustedCandidate, VerifierError,
};

pub use tendermint_light_client_verifier::types::TrustThreshold;

/// Caller supplied inputs of an update besides the states and headers.
#[derive(Clone, Copy, Debug)]
pub struct UpdateParams<'a> {
    /// Validator set the old header declared for the next block
    pub old_header_next_validators: &'a ValidatorSet,
    /// Chain id the client tracks
    pub chain_id: &'a chain::Id,
    /// Maximum age of the old header for it to anchor the update
    pub trusting_period: Duration,
}

/// The states produced by a successful update.
///
/// Both states are returned together so a caller can never persist one
/// without the other.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UpdateClientOutput<CS, S> {
    /// The next client state
    pub client_state: CS,
    /// The consensus state at the new height
    pub consensus_state: S,
    /// Height of the header the update was verified against
    pub trusted_height: Height,
}

impl<CS, S> UpdateClientOutput<CS, S> {
    /// Splits the output into the client state and the consensus state.
    pub fn into_parts(self) -> (CS, S) {
        (self.client_state, self.consensus_state)
    }

    /// Converts both states into another representation.
    #[must_use]
    pub fn map_into<CS2, S2>(self) -> UpdateClientOutput<CS2, S2>
    where
        CS2: From<CS>,
        S2: From<S>,
    {
        UpdateClientOutput {
            client_state: self.client_state.into(),
            consensus_state: self.consensus_state.into(),
            trusted_height: self.trusted_height,
        }
    }
}

/// A light client variant able to validate a header and derive its next state.
pub trait ClientDef {
    /// Client state of this variant
    type ClientState;
    /// Header of this variant
    type Header;
    /// Consensus state of this variant
    type ConsensusState;

    /// Checks that `new_header` may replace the trusted state anchored at
    /// `old_header`, and returns the resulting states.
    ///
    /// # Errors
    /// Returns an [`UpdateClientError`] if the header is rejected. No state is
    /// produced in that case.
    fn check_validity_and_update_state(
        &self,
        client_state: &Self::ClientState,
        old_header: &Self::Header,
        new_header: &Self::Header,
        params: &UpdateParams<'_>,
    ) -> Result<UpdateClientOutput<Self::ClientState, Self::ConsensusState>, UpdateClientError>;
}
