//! Dispatch of client states and headers of any variant.

use tendermint_light_client_types::mock::MockHeader;
use tendermint_light_client_types::{
    AnyClientState, AnyConsensusState, AnyHeader, ClientType, Header,
};

use crate::clock::{HostClock, SystemClock};
use crate::verifier::{BisectionVerifier, TendermintVerifier};
use crate::{
    ClientDef, MockClient, TendermintClient, UpdateClientError, UpdateClientOutput, UpdateParams,
};

/// A light client of any supported variant.
///
/// Values handed to it must be of the client's own variant; anything else is
/// rejected without being interpreted.
#[derive(Clone, Debug)]
pub enum AnyClient<V = TendermintVerifier, C = SystemClock> {
    /// Tendermint client
    Tendermint(TendermintClient<V, C>),
    /// Mock client
    Mock(MockClient),
}

impl<V, C> AnyClient<V, C> {
    /// The variant of this client.
    #[must_use]
    pub const fn client_type(&self) -> ClientType {
        match self {
            Self::Tendermint(_) => ClientType::Tendermint,
            Self::Mock(_) => ClientType::Mock,
        }
    }
}

impl<V, C> From<TendermintClient<V, C>> for AnyClient<V, C> {
    fn from(client: TendermintClient<V, C>) -> Self {
        Self::Tendermint(client)
    }
}

impl<V, C> From<MockClient> for AnyClient<V, C> {
    fn from(client: MockClient) -> Self {
        Self::Mock(client)
    }
}

impl<V: BisectionVerifier, C: HostClock> ClientDef for AnyClient<V, C> {
    type ClientState = AnyClientState;
    type Header = AnyHeader;
    type ConsensusState = AnyConsensusState;

    #[tracing::instrument(skip_all, fields(client_type = %self.client_type()))]
    fn check_validity_and_update_state(
        &self,
        client_state: &AnyClientState,
        old_header: &AnyHeader,
        new_header: &AnyHeader,
        params: &UpdateParams<'_>,
    ) -> Result<UpdateClientOutput<AnyClientState, AnyConsensusState>, UpdateClientError> {
        match (self, client_state) {
            (Self::Tendermint(client), AnyClientState::Tendermint(client_state)) => {
                let old_header = tendermint_header(old_header)?;
                let new_header = tendermint_header(new_header)?;

                client
                    .check_validity_and_update_state(client_state, old_header, new_header, params)
                    .map(UpdateClientOutput::map_into)
            }
            (Self::Mock(client), AnyClientState::Mock(client_state)) => {
                let old_header = mock_header(old_header)?;
                let new_header = mock_header(new_header)?;

                client
                    .check_validity_and_update_state(client_state, old_header, new_header, params)
                    .map(UpdateClientOutput::map_into)
            }
            _ => {
                let actual = client_state.client_type();
                tracing::debug!(%actual, "client state of foreign type");

                Err(UpdateClientError::WrongClientType {
                    expected: self.client_type(),
                    actual,
                })
            }
        }
    }
}

fn tendermint_header(header: &AnyHeader) -> Result<&Header, UpdateClientError> {
    match header {
        AnyHeader::Tendermint(header) => Ok(header),
        AnyHeader::Mock(_) => Err(UpdateClientError::WrongHeaderType {
            expected: ClientType::Tendermint,
            actual: ClientType::Mock,
        }),
    }
}

fn mock_header(header: &AnyHeader) -> Result<&MockHeader, UpdateClientError> {
    match header {
        AnyHeader::Mock(header) => Ok(header),
        AnyHeader::Tendermint(_) => Err(UpdateClientError::WrongHeaderType {
            expected: ClientType::Mock,
            actual: ClientType::Tendermint,
        }),
    }
}
