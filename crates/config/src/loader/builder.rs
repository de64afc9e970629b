//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for hierarchical configuration merging.
//! - Support loading from the JSON config file, environment variables, and direct builder methods.
//! - Validate and build the final `Config`.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//! - Config file loading logic (delegated to file.rs).
//!
//! Invariants / Assumptions:
//! - Precedence, lowest first: defaults, config file, `.env`, environment, builder methods.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

use secrecy::SecretString;
use std::path::PathBuf;
use std::time::Duration;

use super::env::apply_env;
use super::error::ConfigError;
use super::file::apply_file;
use crate::constants::{
    DEFAULT_JOBS_PAGE_SIZE, DEFAULT_MAX_RETRIES, DEFAULT_NOMAD_ADDR,
    DEFAULT_REFRESH_INTERVAL_SECS, DEFAULT_RETRY_BASE_DELAY_MS, DEFAULT_TIMEOUT_SECS,
    MAX_JOBS_PAGE_SIZE, MAX_MAX_RETRIES, MAX_REFRESH_INTERVAL_SECS, MAX_TIMEOUT_SECS,
};
use crate::types::{AuthConfig, Config, ConnectionConfig, JobsListConfig};

/// Configuration loader that merges defaults, the config file, and the environment.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    address: Option<String>,
    token: Option<SecretString>,
    namespace: Option<String>,
    skip_verify: Option<bool>,
    timeout: Option<Duration>,
    max_retries: Option<usize>,
    retry_base_delay: Option<Duration>,
    page_size: Option<usize>,
    auto_refresh: Option<bool>,
    refresh_interval: Option<Duration>,
    config_path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var("DOTENV_DISABLED").ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` environment variable is set to "true" or "1",
    /// the .env file will not be loaded (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The `.env` file exists but has invalid syntax (`ConfigError::DotenvParse`)
    /// - The `.env` file exists but cannot be read due to I/O errors (`ConfigError::DotenvIo`)
    ///
    /// Missing `.env` files are silently ignored (returns `Ok(self)`).
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Override the config file path. An explicit path must exist.
    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    /// Read configuration from the JSON config file.
    pub fn from_file(mut self) -> Result<Self, ConfigError> {
        apply_file(&mut self)?;
        Ok(self)
    }

    /// Read configuration from environment variables.
    ///
    /// Environment variables take precedence over config file settings.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    /// Set the Nomad agent address.
    pub fn with_address(mut self, address: String) -> Self {
        self.address = Some(address);
        self
    }

    /// Set the ACL token.
    pub fn with_token(mut self, token: String) -> Self {
        self.token = Some(SecretString::new(token.into()));
        self
    }

    /// Set the default namespace.
    pub fn with_namespace(mut self, namespace: String) -> Self {
        self.namespace = Some(namespace);
        self
    }

    /// Set whether to skip TLS verification.
    pub fn with_skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = Some(skip);
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the maximum number of retries.
    pub fn with_max_retries(mut self, retries: usize) -> Self {
        self.max_retries = Some(retries);
        self
    }

    /// Set the base delay of the retry backoff.
    pub fn with_retry_base_delay(mut self, delay: Duration) -> Self {
        self.retry_base_delay = Some(delay);
        self
    }

    /// Set the jobs list page size.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Enable or disable jobs list auto-refresh.
    pub fn with_auto_refresh(mut self, enabled: bool) -> Self {
        self.auto_refresh = Some(enabled);
        self
    }

    /// Set the auto-refresh interval.
    pub fn with_refresh_interval(mut self, interval: Duration) -> Self {
        self.refresh_interval = Some(interval);
        self
    }

    /// Build the final configuration.
    pub fn build(self) -> Result<Config, ConfigError> {
        let address = validate_and_normalize_address(
            self.address.as_deref().unwrap_or(DEFAULT_NOMAD_ADDR),
        )?;

        let connection = ConnectionConfig {
            address,
            namespace: self.namespace.filter(|ns| !ns.trim().is_empty()),
            skip_verify: self.skip_verify.unwrap_or(false),
            timeout: self
                .timeout
                .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
            max_retries: self.max_retries.unwrap_or(DEFAULT_MAX_RETRIES),
            retry_base_delay: self
                .retry_base_delay
                .unwrap_or(Duration::from_millis(DEFAULT_RETRY_BASE_DELAY_MS)),
        };

        let jobs = JobsListConfig {
            page_size: self.page_size.unwrap_or(DEFAULT_JOBS_PAGE_SIZE),
            auto_refresh: self.auto_refresh.unwrap_or(false),
            refresh_interval: self
                .refresh_interval
                .unwrap_or(Duration::from_secs(DEFAULT_REFRESH_INTERVAL_SECS)),
        };

        Self::validate_connection(&connection)?;
        Self::validate_jobs(&jobs)?;

        Ok(Config {
            connection,
            auth: AuthConfig { token: self.token },
            jobs,
        })
    }

    fn validate_connection(connection: &ConnectionConfig) -> Result<(), ConfigError> {
        let timeout_secs = connection.timeout.as_secs();
        if timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout {
                message: "timeout must be greater than 0 seconds".to_string(),
            });
        }
        if timeout_secs > MAX_TIMEOUT_SECS {
            return Err(ConfigError::InvalidTimeout {
                message: format!(
                    "timeout exceeds maximum allowed value of {MAX_TIMEOUT_SECS} seconds"
                ),
            });
        }
        if connection.max_retries > MAX_MAX_RETRIES {
            return Err(ConfigError::InvalidMaxRetries {
                message: format!("max retries must not exceed {MAX_MAX_RETRIES}"),
            });
        }
        Ok(())
    }

    fn validate_jobs(jobs: &JobsListConfig) -> Result<(), ConfigError> {
        if jobs.page_size == 0 || jobs.page_size > MAX_JOBS_PAGE_SIZE {
            return Err(ConfigError::InvalidPageSize {
                message: format!(
                    "page size must be between 1 and {MAX_JOBS_PAGE_SIZE}, got {}",
                    jobs.page_size
                ),
            });
        }
        let interval_secs = jobs.refresh_interval.as_secs();
        if interval_secs == 0 || interval_secs > MAX_REFRESH_INTERVAL_SECS {
            return Err(ConfigError::InvalidRefreshInterval {
                message: format!(
                    "refresh interval must be between 1 and {MAX_REFRESH_INTERVAL_SECS} seconds"
                ),
            });
        }
        Ok(())
    }

    // Internal accessor methods for use by other loader modules

    pub(crate) fn config_path(&self) -> Option<&PathBuf> {
        self.config_path.as_ref()
    }

    pub(crate) fn set_address(&mut self, address: Option<String>) {
        self.address = address;
    }

    pub(crate) fn set_token(&mut self, token: Option<SecretString>) {
        self.token = token;
    }

    pub(crate) fn set_namespace(&mut self, namespace: Option<String>) {
        self.namespace = namespace;
    }

    pub(crate) fn set_skip_verify(&mut self, skip: Option<bool>) {
        self.skip_verify = skip;
    }

    pub(crate) fn set_timeout(&mut self, timeout: Option<Duration>) {
        self.timeout = timeout;
    }

    pub(crate) fn set_max_retries(&mut self, retries: Option<usize>) {
        self.max_retries = retries;
    }

    pub(crate) fn set_page_size(&mut self, page_size: Option<usize>) {
        self.page_size = page_size;
    }

    pub(crate) fn set_auto_refresh(&mut self, enabled: Option<bool>) {
        self.auto_refresh = enabled;
    }

    pub(crate) fn set_refresh_interval(&mut self, interval: Option<Duration>) {
        self.refresh_interval = interval;
    }
}

/// Validates and normalizes a Nomad agent address.
///
/// Validation rules:
/// - Trim surrounding whitespace
/// - Parse as an absolute URL with an http or https scheme and a host
/// - Normalize by stripping the trailing slash
fn validate_and_normalize_address(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();

    let parsed = url::Url::parse(trimmed).map_err(|e| ConfigError::InvalidAddress {
        address: trimmed.to_string(),
        message: format!("must be an absolute http(s) URL (e.g. http://127.0.0.1:4646): {e}"),
    })?;

    let scheme = parsed.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(ConfigError::InvalidAddress {
            address: trimmed.to_string(),
            message: format!("scheme must be http or https, got: {scheme}"),
        });
    }

    if parsed.host_str().is_none() {
        return Err(ConfigError::InvalidAddress {
            address: trimmed.to_string(),
            message: "host is required".to_string(),
        });
    }

    Ok(parsed.as_str().trim_end_matches('/').to_string())
}
