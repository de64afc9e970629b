//! JSON configuration file loading.
//!
//! Responsibilities:
//! - Resolve the config file path (explicit path, env var, platform default).
//! - Parse the file and apply its values to a ConfigLoader instance.
//!
//! Does NOT handle:
//! - Writing configuration back to disk.
//! - Environment variable overrides (see env.rs).
//!
//! Invariants:
//! - An explicitly requested file must exist; the platform default may be absent.
//! - Parse errors report the path and serde's message, never the raw contents.

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use tracing::debug;

use super::builder::ConfigLoader;
use super::env::{ENV_CONFIG_PATH, env_var_or_none};
use super::error::ConfigError;
use crate::constants::CONFIG_FILE_NAME;
use crate::types::ConfigFile;

/// Platform default location of the config file
/// (e.g. `~/.config/nomad-tui/config.json` on Linux).
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    ProjectDirs::from("", "", "nomad-tui")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
        .ok_or(ConfigError::ConfigDirUnavailable)
}

/// Read and parse a config file.
pub fn read_config_file(path: &Path) -> Result<ConfigFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ConfigFileRead {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|e| ConfigError::ConfigFileParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Apply the config file, if any, to the loader.
pub fn apply_file(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    let explicit = loader
        .config_path()
        .cloned()
        .or_else(|| env_var_or_none(ENV_CONFIG_PATH).map(PathBuf::from));

    let file = match explicit {
        Some(path) => read_config_file(&path)?,
        None => {
            let path = match default_config_path() {
                Ok(path) => path,
                Err(_) => return Ok(()),
            };
            if !path.exists() {
                debug!(path = %path.display(), "No config file found, using defaults");
                return Ok(());
            }
            read_config_file(&path)?
        }
    };

    let ConfigFile {
        address,
        namespace,
        skip_verify,
        timeout_secs,
        max_retries,
        page_size,
        auto_refresh,
        refresh_interval_secs,
    } = file;

    if address.is_some() {
        loader.set_address(address);
    }
    if namespace.is_some() {
        loader.set_namespace(namespace);
    }
    if skip_verify.is_some() {
        loader.set_skip_verify(skip_verify);
    }
    if let Some(secs) = timeout_secs {
        loader.set_timeout(Some(Duration::from_secs(secs)));
    }
    if max_retries.is_some() {
        loader.set_max_retries(max_retries);
    }
    if page_size.is_some() {
        loader.set_page_size(page_size);
    }
    if auto_refresh.is_some() {
        loader.set_auto_refresh(auto_refresh);
    }
    if let Some(secs) = refresh_interval_secs {
        loader.set_refresh_interval(Some(Duration::from_secs(secs)));
    }
    Ok(())
}
