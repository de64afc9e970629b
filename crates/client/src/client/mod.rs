//! Main Nomad API client.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `jobs`: Job listing methods
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Loading configuration (see the `nomad-config` crate)

pub mod builder;
mod jobs;

use secrecy::SecretString;

use crate::endpoints::RetryPolicy;

/// Nomad HTTP API client.
///
/// Use [`NomadClient::builder()`] to create a new client:
///
/// ```rust,ignore
/// use nomad_client::NomadClient;
///
/// let client = NomadClient::builder()
///     .address("http://127.0.0.1:4646".to_string())
///     .build()?;
/// let jobs = client.list_jobs(Some("default")).await?;
/// ```
#[derive(Debug)]
pub struct NomadClient {
    pub(crate) http: reqwest::Client,
    pub(crate) address: String,
    pub(crate) token: Option<SecretString>,
    pub(crate) retry: RetryPolicy,
}

impl NomadClient {
    /// Create a new client builder.
    pub fn builder() -> builder::NomadClientBuilder {
        builder::NomadClientBuilder::new()
    }

    /// Address of the Nomad agent, without a trailing slash.
    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    /// Replace the ACL token used for subsequent requests.
    pub fn set_token(&mut self, token: Option<SecretString>) {
        self.token = token;
    }

    pub fn retry_policy(&self) -> &RetryPolicy {
        &self.retry
    }
}
