//! Common test utilities for integration tests.
//!
//! # What this does NOT handle
//! - Mock server setup (use wiremock directly in tests)

use std::time::Duration;

#[allow(unused_imports)]
pub use nomad_client::testing::{JobFixture, JobSet};
#[allow(unused_imports)]
pub use nomad_client::{ClientError, JobListStub, NomadClient, RetryPolicy, endpoints};
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// A client pointed at the mock server with millisecond backoff.
#[allow(dead_code)]
pub fn client_for(server: &MockServer, max_retries: usize) -> NomadClient {
    NomadClient::builder()
        .address(server.uri())
        .max_retries(max_retries)
        .retry_base_delay(Duration::from_millis(1))
        .timeout(Duration::from_secs(5))
        .build()
        .expect("client should build")
}
