//! Configuration management for Nomad TUI.
//!
//! This crate provides types and loaders for managing Nomad connection and
//! jobs list configuration from environment variables and files.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{
    ConfigError, ConfigLoader, ENV_ADDR, ENV_AUTO_REFRESH, ENV_CONFIG_PATH, ENV_MAX_RETRIES,
    ENV_NAMESPACE, ENV_PAGE_SIZE, ENV_REFRESH_INTERVAL, ENV_SKIP_VERIFY, ENV_TIMEOUT, ENV_TOKEN,
    default_config_path, env_var_or_none,
};
pub use types::{AuthConfig, Config, ConfigFile, ConnectionConfig, JobsListConfig};
