//! Derives the next client and consensus state from an accepted header.

use ibc_core_commitment_types::commitment::CommitmentRoot;
use tendermint::chain;
use tendermint_light_client_types::{ClientState, ConsensusState, Header};

use crate::UpdateClientError;

/// Produces the states that replace `client_state` once `header` is accepted.
///
/// Only call this with a header that passed
/// [`check_validity`](crate::validity::check_validity).
#[must_use]
pub fn update(client_state: &ClientState, header: &Header) -> (ClientState, ConsensusState) {
    (
        client_state.with_latest_height(header.height()),
        consensus_state_from(header),
    )
}

/// Creates the initial states of a client from a genesis header.
///
/// # Errors
/// Returns [`UpdateClientError::HeaderSelfValidationFailed`] if the genesis
/// header is malformed or belongs to another chain.
pub fn initialize(
    genesis: &Header,
    chain_id: &chain::Id,
) -> Result<(ClientState, ConsensusState), UpdateClientError> {
    genesis
        .validate_basic(chain_id)
        .map_err(UpdateClientError::HeaderSelfValidationFailed)?;

    Ok((ClientState::new(genesis.height()), consensus_state_from(genesis)))
}

fn consensus_state_from(header: &Header) -> ConsensusState {
    ConsensusState {
        root: CommitmentRoot::from_bytes(header.app_hash().as_bytes()),
        validator_set_hash: header.validator_set.hash(),
        next_validators_hash: header.signed_header.header.next_validators_hash,
        timestamp: header.time(),
    }
}
