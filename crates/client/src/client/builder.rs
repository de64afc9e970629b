//! Client builder for constructing [`NomadClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Normalizing the address (removing trailing slashes)
//! - Configuring the underlying HTTP client (timeouts, TLS verification)
//!
//! # Invariants
//! - `address` is required and must be provided before calling `build()`
//! - `skip_verify` only affects HTTPS connections; HTTP connections log a warning

use std::time::Duration;

use secrecy::SecretString;

use crate::client::NomadClient;
use crate::endpoints::RetryPolicy;
use crate::error::{ClientError, Result};
use nomad_config::{
    Config,
    constants::{DEFAULT_MAX_REDIRECTS, DEFAULT_TIMEOUT_SECS},
};

/// Builder for creating a new [`NomadClient`].
pub struct NomadClientBuilder {
    address: Option<String>,
    token: Option<SecretString>,
    skip_verify: bool,
    timeout: Duration,
    retry: RetryPolicy,
}

impl Default for NomadClientBuilder {
    fn default() -> Self {
        Self {
            address: None,
            token: None,
            skip_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            retry: RetryPolicy::default(),
        }
    }
}

impl NomadClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the agent address, e.g. `http://127.0.0.1:4646`.
    pub fn address(mut self, address: String) -> Self {
        self.address = Some(address);
        self
    }

    /// Set the ACL token.
    pub fn token(mut self, token: Option<SecretString>) -> Self {
        self.token = token;
        self
    }

    /// Set whether to skip TLS certificate verification.
    ///
    /// # Security Warning
    /// Only use this in development or testing environments.
    pub fn skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = skip;
        self
    }

    /// Set the request timeout. Default is 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the maximum number of retries for retryable responses.
    pub fn max_retries(mut self, retries: usize) -> Self {
        self.retry.max_retries = retries;
        self
    }

    /// Set the delay before the first retry.
    pub fn retry_base_delay(mut self, delay: Duration) -> Self {
        self.retry.base_delay = delay;
        self
    }

    /// Create a client builder from loaded configuration.
    pub fn from_config(mut self, config: &Config) -> Self {
        self.address = Some(config.connection.address.clone());
        self.token = config.auth.token.clone();
        self.skip_verify = config.connection.skip_verify;
        self.timeout = config.connection.timeout;
        self.retry = RetryPolicy {
            max_retries: config.connection.max_retries,
            base_delay: config.connection.retry_base_delay,
        };
        self
    }

    /// Build the [`NomadClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if `address` was not provided.
    /// Returns `ClientError::HttpError` if the HTTP client fails to build.
    pub fn build(self) -> Result<NomadClient> {
        let address = self
            .address
            .ok_or_else(|| ClientError::InvalidUrl("address is required".to_string()))?;
        let address = address.trim_end_matches('/').to_string();

        let mut http_builder = reqwest::Client::builder()
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS));

        if self.skip_verify {
            if address.starts_with("https://") {
                http_builder = http_builder.danger_accept_invalid_certs(true);
            } else {
                tracing::warn!(
                    "skip_verify=true has no effect on HTTP addresses. TLS verification only applies to HTTPS connections."
                );
            }
        }

        let http = http_builder.build()?;

        Ok(NomadClient {
            http,
            address,
            token: self.token,
            retry: self.retry,
        })
    }
}
