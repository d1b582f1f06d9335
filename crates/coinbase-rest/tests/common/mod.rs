//! Shared helpers for the HTTP-level tests

use coinbase_rest::{ClientConfig, CoinbaseClient, Credentials};
use wiremock::MockServer;

pub const API_KEY: &str = "integration-key";
pub const API_SECRET: &str = "integration-secret";

/// Start a mock API server
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client talking to `server` over the real reqwest transport
pub fn client_for(server: &MockServer, signed: bool) -> CoinbaseClient {
    let mut config = ClientConfig::new().with_base_url(server.uri()).with_timeout(5);
    if signed {
        config = config.with_credentials(Credentials::new(API_KEY, API_SECRET));
    }
    CoinbaseClient::with_config(config).expect("client should build")
}

/// Header value of a recorded request
#[allow(dead_code)]
pub fn header<'a>(request: &'a wiremock::Request, name: &str) -> Option<&'a str> {
    request.headers.get(name).and_then(|value| value.to_str().ok())
}
