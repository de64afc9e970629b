//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse environment variables for Nomad configuration.
//! - Apply environment variable values to a ConfigLoader instance.
//! - Provide helper functions for reading env vars with empty/whitespace filtering.
//!
//! Does NOT handle:
//! - Loading from the JSON config file (see file.rs).
//! - Building the final Config (see builder.rs).
//! - .env file loading (handled by ConfigLoader::load_dotenv).
//!
//! Invariants:
//! - Environment variables take precedence over config file settings.
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Invalid numeric values return ConfigError::InvalidValue.

use secrecy::SecretString;
use std::str::FromStr;
use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;

/// Nomad agent address, shared with the official Nomad CLI.
pub const ENV_ADDR: &str = "NOMAD_ADDR";
/// ACL token secret ID, shared with the official Nomad CLI.
pub const ENV_TOKEN: &str = "NOMAD_TOKEN";
/// Default namespace, shared with the official Nomad CLI.
pub const ENV_NAMESPACE: &str = "NOMAD_NAMESPACE";
pub const ENV_SKIP_VERIFY: &str = "NOMAD_SKIP_VERIFY";
pub const ENV_TIMEOUT: &str = "NOMAD_TIMEOUT";
pub const ENV_MAX_RETRIES: &str = "NOMAD_MAX_RETRIES";
pub const ENV_PAGE_SIZE: &str = "NOMAD_TUI_PAGE_SIZE";
pub const ENV_AUTO_REFRESH: &str = "NOMAD_TUI_AUTO_REFRESH";
pub const ENV_REFRESH_INTERVAL: &str = "NOMAD_TUI_REFRESH_INTERVAL";
pub const ENV_CONFIG_PATH: &str = "NOMAD_TUI_CONFIG_PATH";

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

fn parse_env<T: FromStr>(key: &str, message: &str) -> Result<Option<T>, ConfigError> {
    env_var_or_none(key)
        .map(|raw| {
            raw.parse().map_err(|_| ConfigError::InvalidValue {
                var: key.to_string(),
                message: message.to_string(),
            })
        })
        .transpose()
}

/// Apply environment variable configuration to the loader.
///
/// Environment variables take precedence over config file settings.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(address) = env_var_or_none(ENV_ADDR) {
        loader.set_address(Some(address));
    }
    if let Some(token) = env_var_or_none(ENV_TOKEN) {
        loader.set_token(Some(SecretString::new(token.into())));
    }
    if let Some(namespace) = env_var_or_none(ENV_NAMESPACE) {
        loader.set_namespace(Some(namespace));
    }
    if let Some(skip) = parse_env::<bool>(ENV_SKIP_VERIFY, "must be true or false")? {
        loader.set_skip_verify(Some(skip));
    }
    if let Some(secs) = parse_env::<u64>(ENV_TIMEOUT, "must be a number")? {
        loader.set_timeout(Some(Duration::from_secs(secs)));
    }
    if let Some(retries) = parse_env::<usize>(ENV_MAX_RETRIES, "must be a non-negative integer")? {
        loader.set_max_retries(Some(retries));
    }
    if let Some(size) = parse_env::<usize>(ENV_PAGE_SIZE, "must be a positive integer")? {
        loader.set_page_size(Some(size));
    }
    if let Some(enabled) = parse_env::<bool>(ENV_AUTO_REFRESH, "must be true or false")? {
        loader.set_auto_refresh(Some(enabled));
    }
    if let Some(secs) = parse_env::<u64>(ENV_REFRESH_INTERVAL, "must be a number")? {
        loader.set_refresh_interval(Some(Duration::from_secs(secs)));
    }
    Ok(())
}
