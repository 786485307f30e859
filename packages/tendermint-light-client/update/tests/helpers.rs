//! Common test utilities and fixtures for update client tests

use std::cell::Cell;
use std::time::Duration;

use tendermint::{chain, Time};
use tendermint_light_client_types::{ClientState, Header, ValidatorSet};
use tendermint_light_client_update::{
    BisectionVerifier, FixedClock, TendermintClient, TendermintVerifier, TrustedAnchor,
    UntrustedCandidate, UpdateClientConfig, UpdateParams, VerifierError,
};
use tendermint_light_client_verifier::options::Options;
use tendermint_testgen::{Commit, Generator, Header as TestgenHeader, LightBlock, Validator};

pub const CHAIN_ID: &str = "test-chain-1";
pub const GENESIS_UNIX_SECS: i64 = 1_700_000_000;
pub const TRUSTING_PERIOD: Duration = Duration::from_secs(14 * 24 * 60 * 60);

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

pub fn chain_id() -> chain::Id {
    CHAIN_ID.parse().expect("valid chain id")
}

/// Time `secs` seconds after the genesis time of the test chain
pub fn time_at(secs: u64) -> Time {
    Time::from_unix_timestamp(GENESIS_UNIX_SECS + secs as i64, 0).expect("valid timestamp")
}

pub fn validators(ids: &[&str]) -> Vec<Validator> {
    ids.iter()
        .map(|id| Validator::new(id).voting_power(50))
        .collect()
}

/// Generates a header signed by `vals`, which also form the next validator set
pub fn generate_header_with(chain_id: &str, vals: &[Validator], height: u64, secs: u64) -> Header {
    let header = TestgenHeader::new(vals)
        .next_validators(vals)
        .chain_id(chain_id)
        .height(height)
        .time(time_at(secs));
    let commit = Commit::new(header.clone(), 1);

    let light_block = LightBlock::new(header, commit)
        .generate()
        .expect("failed to generate light block");

    Header::new(
        light_block.signed_header,
        light_block.validators,
        light_block.next_validators,
    )
}

pub fn generate_header(height: u64, secs: u64) -> Header {
    generate_header_with(CHAIN_ID, &validators(&["a", "b", "c", "d"]), height, secs)
}

pub fn validator_set(ids: &[&str]) -> ValidatorSet {
    generate_header_with(CHAIN_ID, &validators(ids), 1, 0).validator_set
}

pub fn params<'a>(old_header: &'a Header, chain_id: &'a chain::Id) -> UpdateParams<'a> {
    UpdateParams {
        old_header_next_validators: &old_header.next_validator_set,
        chain_id,
        trusting_period: TRUSTING_PERIOD,
    }
}

pub fn client_at(now: Time) -> TendermintClient<TendermintVerifier, FixedClock> {
    TendermintClient::with_parts(
        TendermintVerifier::default(),
        FixedClock(now),
        &UpdateClientConfig::default(),
    )
    .expect("default config is valid")
}

pub fn client_state_at(height: u64) -> ClientState {
    ClientState::new(height.try_into().expect("valid height"))
}

/// A verifier that answers with a fixed result and counts its invocations
#[derive(Debug, Default)]
pub struct StubVerifier {
    pub reject: Option<VerifierError>,
    pub calls: Cell<usize>,
}

impl StubVerifier {
    pub fn accepting() -> Self {
        Self::default()
    }

    pub fn rejecting(err: VerifierError) -> Self {
        Self {
            reject: Some(err),
            calls: Cell::new(0),
        }
    }
}

impl BisectionVerifier for StubVerifier {
    fn verify(
        &self,
        _chain_id: &chain::Id,
        _trusted: &TrustedAnchor<'_>,
        _untrusted: &UntrustedCandidate<'_>,
        _options: &Options,
        _now: Time,
    ) -> Result<(), VerifierError> {
        self.calls.set(self.calls.get() + 1);
        self.reject.clone().map_or(Ok(()), Err)
    }
}

pub fn stub_client(verifier: StubVerifier, now: Time) -> TendermintClient<StubVerifier, FixedClock> {
    TendermintClient::with_parts(verifier, FixedClock(now), &UpdateClientConfig::default())
        .expect("default config is valid")
}
