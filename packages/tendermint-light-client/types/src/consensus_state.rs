//! The per-height snapshot stored by a tendermint light client.

use ibc_core_commitment_types::commitment::CommitmentRoot;
use serde::{Deserialize, Serialize};
use tendermint::{Hash, Time};

/// The consensus state of the remote chain at one accepted height.
///
/// Application-level membership proofs at that height are verified against
/// `root`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsensusState {
    /// Commitment root derived from the header's app hash
    pub root: CommitmentRoot,
    /// Hash of the validator set that signed the header
    pub validator_set_hash: Hash,
    /// Hash of the validator set expected to sign the next header
    pub next_validators_hash: Hash,
    /// Block time of the header
    pub timestamp: Time,
}
