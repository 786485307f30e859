//! The header submitted to a tendermint light client on update.

use light_client_utils::ensure;
use serde::{Deserialize, Serialize};
use tendermint::block::signed_header::SignedHeader;
use tendermint::block::{CommitSig, Height};
use tendermint::validator::Set as ValidatorSet;
use tendermint::{chain, AppHash, Hash, Time};

/// A block of the remote chain together with the validator set that signed it
/// and the validator set expected to sign the next block.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    /// The block header and the commit signing it
    pub signed_header: SignedHeader,
    /// The validator set that signed `signed_header`
    pub validator_set: ValidatorSet,
    /// The validator set expected to sign the next block
    pub next_validator_set: ValidatorSet,
}

/// Structural failures of a header, detected without any signature checks.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum HeaderError {
    /// The header was produced by a different chain
    #[error("chain id mismatch: expected `{expected}`, got `{actual}`")]
    ChainIdMismatch {
        /// Chain id the client tracks
        expected: chain::Id,
        /// Chain id found in the header
        actual: chain::Id,
    },
    /// The commit carries no signature from any validator
    #[error("commit for height {0} carries no signatures")]
    MissingSignatures(Height),
    /// The commit is for another height than the header
    #[error("commit height {commit} does not match header height {header}")]
    CommitHeightMismatch {
        /// Height of the header
        header: Height,
        /// Height of the commit
        commit: Height,
    },
    /// The commit signs another block than the header
    #[error("commit block hash {commit} does not match header hash {header}")]
    CommitBlockIdMismatch {
        /// Hash of the header
        header: Hash,
        /// Block hash signed by the commit
        commit: Hash,
    },
}

impl Header {
    /// Creates a new header.
    #[must_use]
    pub const fn new(
        signed_header: SignedHeader,
        validator_set: ValidatorSet,
        next_validator_set: ValidatorSet,
    ) -> Self {
        Self {
            signed_header,
            validator_set,
            next_validator_set,
        }
    }

    /// Height of the block.
    #[must_use]
    pub const fn height(&self) -> Height {
        self.signed_header.header.height
    }

    /// Application state hash committed to by the block.
    #[must_use]
    pub const fn app_hash(&self) -> &AppHash {
        &self.signed_header.header.app_hash
    }

    /// Block time.
    #[must_use]
    pub const fn time(&self) -> Time {
        self.signed_header.header.time
    }

    /// Chain id embedded in the block.
    #[must_use]
    pub const fn chain_id(&self) -> &chain::Id {
        &self.signed_header.header.chain_id
    }

    /// Checks that the header belongs to `chain_id` and that the commit it
    /// carries is well formed for this block.
    ///
    /// # Errors
    /// Returns the first [`HeaderError`] encountered.
    pub fn validate_basic(&self, chain_id: &chain::Id) -> Result<(), HeaderError> {
        let header = &self.signed_header.header;
        let commit = &self.signed_header.commit;

        ensure!(
            header.chain_id == *chain_id,
            HeaderError::ChainIdMismatch {
                expected: chain_id.clone(),
                actual: header.chain_id.clone(),
            }
        );

        ensure!(
            commit
                .signatures
                .iter()
                .any(|sig| !matches!(sig, CommitSig::BlockIdFlagAbsent)),
            HeaderError::MissingSignatures(header.height)
        );

        ensure!(
            commit.height == header.height,
            HeaderError::CommitHeightMismatch {
                header: header.height,
                commit: commit.height,
            }
        );

        let header_hash = header.hash();
        ensure!(
            commit.block_id.hash == header_hash,
            HeaderError::CommitBlockIdMismatch {
                header: header_hash,
                commit: commit.block_id.hash,
            }
        );

        Ok(())
    }
}
