#![allow(dead_code)]

mod fake_api;
mod fake_ethereum;
mod fake_zilliqa;

pub use fake_api::FakeApi;
pub use fake_ethereum::{address_word, EthReply, FakeEthereumNode};
pub use fake_zilliqa::FakeZilliqaNode;

use nameroute_domain::Endpoint;
use std::time::Duration;
use wiremock::MockServer;

pub const TIMEOUT: Duration = Duration::from_secs(5);

pub fn endpoint(server: &MockServer, network: &str) -> Endpoint {
    Endpoint::new(server.uri(), network)
}
