//! Tests for the configuration loader builder.
//!
//! Responsibilities:
//! - Test environment variable handling and precedence.
//! - Test config file loading.
//! - Test validation of loaded values.
//!
//! Invariants:
//! - Tests touching the process environment use `serial_test` and `temp_env`.
//! - Temporary directories are cleaned up automatically via `tempfile`.

pub mod env_tests;

use std::path::{Path, PathBuf};

/// Write a config file into `dir` and return its path.
pub fn write_config_file(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("config.json");
    std::fs::write(&path, contents).unwrap();
    path
}

/// Every variable the loader reads, unset. Keeps the developer's shell out of tests.
pub fn cleared_env() -> Vec<(&'static str, Option<&'static str>)> {
    vec![
        ("NOMAD_ADDR", None),
        ("NOMAD_TOKEN", None),
        ("NOMAD_NAMESPACE", None),
        ("NOMAD_SKIP_VERIFY", None),
        ("NOMAD_TIMEOUT", None),
        ("NOMAD_MAX_RETRIES", None),
        ("NOMAD_TUI_PAGE_SIZE", None),
        ("NOMAD_TUI_AUTO_REFRESH", None),
        ("NOMAD_TUI_REFRESH_INTERVAL", None),
        ("NOMAD_TUI_CONFIG_PATH", None),
    ]
}
