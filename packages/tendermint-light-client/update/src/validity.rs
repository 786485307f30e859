//! Decides whether a header may replace the trusted state.

use light_client_utils::ensure;
use tendermint::Time;
use tendermint_light_client_types::{ClientState, Header};
use tendermint_light_client_verifier::options::Options;

use crate::verifier::{BisectionVerifier, TrustedAnchor, UntrustedCandidate};
use crate::{UpdateClientError, UpdateParams};

/// Checks that `new_header` extends the state trusted at `old_header`.
///
/// The checks run in order and stop at the first failure:
/// 1. the new header is strictly above the old header,
/// 2. the new header is not below the client's latest trusted height,
/// 3. the new header is well formed and belongs to `params.chain_id`,
/// 4. `verifier` accepts the new header against the old one at `now`.
///
/// # Errors
/// Returns the [`UpdateClientError`] of the first failed check.
pub fn check_validity<V: BisectionVerifier>(
    verifier: &V,
    client_state: &ClientState,
    old_header: &Header,
    new_header: &Header,
    params: &UpdateParams<'_>,
    options: &Options,
    now: Time,
) -> Result<(), UpdateClientError> {
    ensure!(
        new_header.height() > old_header.height(),
        UpdateClientError::NonIncreasingHeight {
            old: old_header.height(),
            new: new_header.height(),
        }
    );

    ensure!(
        new_header.height() >= client_state.latest_height,
        UpdateClientError::HeightBelowLatestTrusted {
            latest: client_state.latest_height,
            new: new_header.height(),
        }
    );

    new_header
        .validate_basic(params.chain_id)
        .map_err(UpdateClientError::HeaderSelfValidationFailed)?;

    let trusted = TrustedAnchor {
        signed_header: &old_header.signed_header,
        next_validators: params.old_header_next_validators,
    };
    let untrusted = UntrustedCandidate {
        signed_header: &new_header.signed_header,
        validators: &new_header.validator_set,
        next_validators: Some(&new_header.next_validator_set),
    };

    verifier
        .verify(params.chain_id, &trusted, &untrusted, options, now)
        .map_err(UpdateClientError::BisectionVerificationFailed)
}
