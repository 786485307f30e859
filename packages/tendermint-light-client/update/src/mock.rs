//! The mock variant of the light client.

use light_client_utils::ensure;
use tendermint_light_client_types::mock::{MockClientState, MockConsensusState, MockHeader};

use crate::{ClientDef, UpdateClientError, UpdateClientOutput, UpdateParams};

/// Light client for the mock variant. Only enforces height ordering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MockClient;

impl ClientDef for MockClient {
    type ClientState = MockClientState;
    type Header = MockHeader;
    type ConsensusState = MockConsensusState;

    fn check_validity_and_update_state(
        &self,
        client_state: &MockClientState,
        old_header: &MockHeader,
        new_header: &MockHeader,
        _params: &UpdateParams<'_>,
    ) -> Result<UpdateClientOutput<MockClientState, MockConsensusState>, UpdateClientError> {
        ensure!(
            new_header.height > old_header.height,
            UpdateClientError::NonIncreasingHeight {
                old: old_header.height,
                new: new_header.height,
            }
        );
        ensure!(
            new_header.height >= client_state.latest_height,
            UpdateClientError::HeightBelowLatestTrusted {
                latest: client_state.latest_height,
                new: new_header.height,
            }
        );

        Ok(UpdateClientOutput {
            client_state: MockClientState {
                latest_height: new_header.height,
            },
            consensus_state: MockConsensusState::from(*new_header),
            trusted_height: old_header.height,
        })
    }
}
