//! Configuration types for Nomad TUI.
//!
//! Responsibilities:
//! - Define connection settings (address, TLS verification, timeouts, retries).
//! - Define ACL token authentication settings.
//! - Define jobs list presentation settings (page size, refresh).
//! - Define the on-disk JSON configuration file shape.
//!
//! Does NOT handle:
//! - Configuration loading from files/env (see `loader` module).
//! - Actual network connections (see client crate).
//!
//! Invariants:
//! - Default values are provided via `Default` impls, not magic numbers.
//! - Secret values use `secrecy::SecretString` to prevent accidental logging.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::constants::{
    DEFAULT_JOBS_PAGE_SIZE, DEFAULT_MAX_RETRIES, DEFAULT_NOMAD_ADDR,
    DEFAULT_REFRESH_INTERVAL_SECS, DEFAULT_RETRY_BASE_DELAY_MS, DEFAULT_TIMEOUT_SECS,
};

/// Connection configuration for the Nomad HTTP API.
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    /// Base address of the Nomad agent (e.g., http://127.0.0.1:4646)
    pub address: String,
    /// Namespace requested when the location does not name one
    pub namespace: Option<String>,
    /// Whether to skip TLS verification (for self-signed certificates)
    pub skip_verify: bool,
    /// Request timeout
    pub timeout: Duration,
    /// Maximum number of retries for retryable failures
    pub max_retries: usize,
    /// Base delay of the exponential retry backoff
    pub retry_base_delay: Duration,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_NOMAD_ADDR.to_string(),
            namespace: None,
            skip_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_retries: DEFAULT_MAX_RETRIES,
            retry_base_delay: Duration::from_millis(DEFAULT_RETRY_BASE_DELAY_MS),
        }
    }
}

/// ACL token authentication.
///
/// Nomad clusters without ACLs enabled accept anonymous requests, so the
/// token is optional.
#[derive(Debug, Clone, Default)]
pub struct AuthConfig {
    pub token: Option<SecretString>,
}

/// Jobs list presentation settings.
#[derive(Debug, Clone)]
pub struct JobsListConfig {
    /// Rows per page
    pub page_size: usize,
    /// Whether the list re-fetches periodically
    pub auto_refresh: bool,
    /// Interval between automatic re-fetches
    pub refresh_interval: Duration,
}

impl Default for JobsListConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_JOBS_PAGE_SIZE,
            auto_refresh: false,
            refresh_interval: Duration::from_secs(DEFAULT_REFRESH_INTERVAL_SECS),
        }
    }
}

/// Fully resolved configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub connection: ConnectionConfig,
    pub auth: AuthConfig,
    pub jobs: JobsListConfig,
}

impl Config {
    /// Create a config pointing at the given address with all other values defaulted.
    pub fn with_address(address: impl Into<String>) -> Self {
        Self {
            connection: ConnectionConfig {
                address: address.into(),
                ..ConnectionConfig::default()
            },
            ..Self::default()
        }
    }
}

/// Shape of the optional JSON configuration file.
///
/// Every field is optional; absent fields leave the lower-precedence value
/// in place. ACL tokens are deliberately not read from this file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip_verify: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_retries: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_refresh: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_interval_secs: Option<u64>,
}
