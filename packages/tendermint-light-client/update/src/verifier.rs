//! The seam to the voting power verification primitive.
//!
//! [`BisectionVerifier`] is the only way the update logic reaches signature
//! and voting power checks. [`TendermintVerifier`] implements it on top of
//! `tendermint-light-client-verifier`; tests substitute their own.

use light_client_utils::ensure;
use tendermint::block::signed_header::SignedHeader;
use tendermint::{chain, Hash, Time};
use tendermint_light_client_types::ValidatorSet;
use tendermint_light_client_verifier::options::Options;
use tendermint_light_client_verifier::types::{TrustedBlockState, UntrustedBlockState};
use tendermint_light_client_verifier::{ProdVerifier, Verdict, Verifier};

/// The already trusted header an update is verified against.
#[derive(Clone, Copy, Debug)]
pub struct TrustedAnchor<'a> {
    /// The trusted signed header
    pub signed_header: &'a SignedHeader,
    /// The validator set the trusted header declared for the next block
    pub next_validators: &'a ValidatorSet,
}

/// The header being verified.
#[derive(Clone, Copy, Debug)]
pub struct UntrustedCandidate<'a> {
    /// The untrusted signed header
    pub signed_header: &'a SignedHeader,
    /// The validator set claimed to have signed the header
    pub validators: &'a ValidatorSet,
    /// The validator set the header declares for the next block, if supplied
    pub next_validators: Option<&'a ValidatorSet>,
}

/// Failures of the verification primitive.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum VerifierError {
    /// The supplied trusted next validators are not the ones the trusted header declared
    #[error("trusted next validators hash to {computed}, trusted header declares {declared}")]
    TrustedNextValidatorsMismatch {
        /// Hash declared in the trusted header
        declared: Hash,
        /// Hash of the supplied validator set
        computed: Hash,
    },
    /// Too little trusted voting power signed the untrusted header
    #[error("not enough trust: {0}")]
    NotEnoughTrust(String),
    /// The untrusted header failed a verification predicate
    #[error("invalid header: {0}")]
    Invalid(String),
}

/// Verifies an untrusted header against a trusted one.
///
/// Implementations must check that at least `options.trust_threshold` of the
/// trusted next validators' voting power signed the untrusted header, that
/// the untrusted header's validators hash matches the supplied validators,
/// and that the trusted header is not older than `options.trusting_period`
/// at `now`.
pub trait BisectionVerifier {
    /// Verifies `untrusted` against `trusted`.
    ///
    /// # Errors
    /// Returns a [`VerifierError`] if the untrusted header cannot be trusted.
    fn verify(
        &self,
        chain_id: &chain::Id,
        trusted: &TrustedAnchor<'_>,
        untrusted: &UntrustedCandidate<'_>,
        options: &Options,
        now: Time,
    ) -> Result<(), VerifierError>;
}

/// [`BisectionVerifier`] backed by a `tendermint-light-client-verifier` verifier.
#[derive(Clone, Debug, Default)]
pub struct TendermintVerifier<V = ProdVerifier> {
    inner: V,
}

impl<V> TendermintVerifier<V> {
    /// Wraps a tendermint verifier.
    #[must_use]
    pub const fn new(inner: V) -> Self {
        Self { inner }
    }
}

impl<V: Verifier> BisectionVerifier for TendermintVerifier<V> {
    fn verify(
        &self,
        chain_id: &chain::Id,
        trusted: &TrustedAnchor<'_>,
        untrusted: &UntrustedCandidate<'_>,
        options: &Options,
        now: Time,
    ) -> Result<(), VerifierError> {
        let trusted_header = &trusted.signed_header.header;

        // The verifier below takes the trusted next validators at face value.
        let computed = trusted.next_validators.hash();
        ensure!(
            computed == trusted_header.next_validators_hash,
            VerifierError::TrustedNextValidatorsMismatch {
                declared: trusted_header.next_validators_hash,
                computed,
            }
        );

        let trusted_state = TrustedBlockState {
            chain_id,
            header_time: trusted_header.time,
            height: trusted_header.height,
            next_validators: trusted.next_validators,
            next_validators_hash: trusted_header.next_validators_hash,
        };

        let untrusted_state = UntrustedBlockState {
            signed_header: untrusted.signed_header,
            validators: untrusted.validators,
            next_validators: untrusted.next_validators,
        };

        match self
            .inner
            .verify_update_header(untrusted_state, trusted_state, options, now)
        {
            Verdict::Success => Ok(()),
            Verdict::NotEnoughTrust(tally) => Err(VerifierError::NotEnoughTrust(tally.to_string())),
            Verdict::Invalid(detail) => Err(VerifierError::Invalid(detail.to_string())),
        }
    }
}
