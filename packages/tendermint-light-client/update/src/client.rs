//! The tendermint variant of the light client.

use core::time::Duration;

use tendermint_light_client_types::{ClientState, ClientType, ConsensusState, Header};
use tendermint_light_client_verifier::options::Options;
use tendermint_light_client_verifier::types::TrustThreshold;

use crate::clock::{HostClock, SystemClock};
use crate::config::{ConfigError, UpdateClientConfig};
use crate::updater::update;
use crate::validity::check_validity;
use crate::verifier::{BisectionVerifier, TendermintVerifier};
use crate::{ClientDef, UpdateClientError, UpdateClientOutput, UpdateParams};

/// Light client for tendermint chains.
///
/// Holds the verification primitive, the clock and the verification options;
/// all trusted state is passed in and returned by value.
#[derive(Clone, Debug)]
pub struct TendermintClient<V = TendermintVerifier, C = SystemClock> {
    verifier: V,
    clock: C,
    trust_threshold: TrustThreshold,
    max_clock_drift: Duration,
}

impl TendermintClient {
    /// Creates a client using the production verifier and the system clock.
    ///
    /// # Errors
    /// Returns a [`ConfigError`] if the configured trust threshold is invalid.
    pub fn new(config: &UpdateClientConfig) -> Result<Self, ConfigError> {
        Self::with_parts(TendermintVerifier::default(), SystemClock, config)
    }
}

impl<V, C> TendermintClient<V, C> {
    /// Creates a client from an explicit verifier and clock.
    ///
    /// # Errors
    /// Returns a [`ConfigError`] if the configured trust threshold is invalid.
    pub fn with_parts(
        verifier: V,
        clock: C,
        config: &UpdateClientConfig,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            verifier,
            clock,
            trust_threshold: config.trust_threshold.try_into()?,
            max_clock_drift: config.max_clock_drift,
        })
    }

    /// The verification primitive headers are checked with.
    #[must_use]
    pub const fn verifier(&self) -> &V {
        &self.verifier
    }

    /// The trust threshold new headers are verified with.
    #[must_use]
    pub const fn trust_threshold(&self) -> TrustThreshold {
        self.trust_threshold
    }

    const fn options(&self, trusting_period: Duration) -> Options {
        Options {
            trust_threshold: self.trust_threshold,
            trusting_period,
            clock_drift: self.max_clock_drift,
        }
    }
}

impl<V: BisectionVerifier, C: HostClock> ClientDef for TendermintClient<V, C> {
    type ClientState = ClientState;
    type Header = Header;
    type ConsensusState = ConsensusState;

    #[tracing::instrument(
        skip_all,
        fields(
            client_type = %ClientType::Tendermint,
            trusted_height = %old_header.height(),
            new_height = %new_header.height(),
        )
    )]
    fn check_validity_and_update_state(
        &self,
        client_state: &ClientState,
        old_header: &Header,
        new_header: &Header,
        params: &UpdateParams<'_>,
    ) -> Result<UpdateClientOutput<ClientState, ConsensusState>, UpdateClientError> {
        if let Some(frozen_height) = client_state.frozen_height {
            return Err(UpdateClientError::ClientFrozen(frozen_height));
        }

        let options = self.options(params.trusting_period);
        let now = self.clock.now();

        if let Err(err) = check_validity(
            &self.verifier,
            client_state,
            old_header,
            new_header,
            params,
            &options,
            now,
        ) {
            tracing::debug!(%err, "header rejected");
            return Err(err);
        }

        let (client_state, consensus_state) = update(client_state, new_header);
        tracing::info!(latest_height = %client_state.latest_height, "header accepted");

        Ok(UpdateClientOutput {
            client_state,
            consensus_state,
            trusted_height: old_header.height(),
        })
    }
}
