//! Configuration loader for environment variables and files.
//!
//! Responsibilities:
//! - Load configuration from `.env` files, environment variables, and the JSON config file.
//! - Provide a builder-pattern `ConfigLoader` for hierarchical configuration merging.
//! - Enforce `DOTENV_DISABLED` gate to prevent accidental dotenv loading in tests.
//!
//! Does NOT handle:
//! - Persisting configuration changes back to disk.
//! - Storing ACL tokens anywhere but memory.
//!
//! Invariants / Assumptions:
//! - Environment variables take precedence over config file values.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

mod builder;
mod env;
mod error;
mod file;

#[cfg(test)]
mod tests;

pub use builder::ConfigLoader;
pub use env::{
    ENV_ADDR, ENV_AUTO_REFRESH, ENV_CONFIG_PATH, ENV_MAX_RETRIES, ENV_NAMESPACE, ENV_PAGE_SIZE,
    ENV_REFRESH_INTERVAL, ENV_SKIP_VERIFY, ENV_TIMEOUT, ENV_TOKEN, env_var_or_none,
};
pub use error::ConfigError;
pub use file::default_config_path;
