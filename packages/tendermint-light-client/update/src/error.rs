//! Errors returned by a rejected update.

use tendermint::block::Height;
use tendermint_light_client_types::{ClientType, HeaderError};

use crate::verifier::VerifierError;

/// Reasons a header is rejected.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum UpdateClientError {
    /// The client state does not belong to the variant handling the update
    #[error("client state is of type {actual}, expected {expected}")]
    WrongClientType {
        /// Variant of the client handling the update
        expected: ClientType,
        /// Variant of the supplied client state
        actual: ClientType,
    },
    /// A header does not belong to the variant handling the update
    #[error("header is of type {actual}, expected {expected}")]
    WrongHeaderType {
        /// Variant of the client handling the update
        expected: ClientType,
        /// Variant of the supplied header
        actual: ClientType,
    },
    /// The client is frozen and accepts no update
    #[error("client is frozen at height {0}")]
    ClientFrozen(Height),
    /// The new header is not above the old header
    #[error("new header height {new} is not greater than old header height {old}")]
    NonIncreasingHeight {
        /// Height of the old header
        old: Height,
        /// Height of the new header
        new: Height,
    },
    /// The new header is older than the latest trusted height
    #[error("new header height {new} is below latest trusted height {latest}")]
    HeightBelowLatestTrusted {
        /// Latest height trusted by the client
        latest: Height,
        /// Height of the new header
        new: Height,
    },
    /// The new header is malformed or belongs to another chain
    #[error("header self validation failed: {0}")]
    HeaderSelfValidationFailed(#[source] HeaderError),
    /// The verifier rejected the new header against the old one
    #[error("header verification failed: {0}")]
    BisectionVerificationFailed(#[source] VerifierError),
}
