//! Configuration loading for the TUI.
//!
//! Invariants:
//! - Precedence: CLI args > env vars > `.env` > config file > defaults.
//! - `load_dotenv()` is called before reading the environment.

use anyhow::{Context, Result};
use nomad_config::{Config, ConfigLoader};

use crate::cli::Cli;

/// Load configuration, applying CLI overrides last.
pub fn load_config(cli: &Cli) -> Result<Config> {
    let mut loader = ConfigLoader::new().load_dotenv()?;

    if let Some(path) = &cli.config_path {
        loader = loader.with_config_path(path.clone());
    }
    loader = loader.from_file()?.from_env()?;

    if let Some(address) = &cli.address {
        loader = loader.with_address(address.clone());
    }
    if let Some(namespace) = &cli.namespace {
        loader = loader.with_namespace(namespace.clone());
    }
    if let Some(page_size) = cli.page_size {
        loader = loader.with_page_size(page_size);
    }
    if cli.auto_refresh {
        loader = loader.with_auto_refresh(true);
    }

    loader.build().context("Invalid configuration")
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use serial_test::serial;
    use std::io::Write;

    const ENV_VARS: [&str; 10] = [
        "NOMAD_ADDR",
        "NOMAD_TOKEN",
        "NOMAD_NAMESPACE",
        "NOMAD_SKIP_VERIFY",
        "NOMAD_TIMEOUT",
        "NOMAD_MAX_RETRIES",
        "NOMAD_TUI_PAGE_SIZE",
        "NOMAD_TUI_AUTO_REFRESH",
        "NOMAD_TUI_REFRESH_INTERVAL",
        "NOMAD_TUI_CONFIG_PATH",
    ];

    fn with_clean_env<F: FnOnce()>(extra: &[(&str, Option<&str>)], f: F) {
        let mut vars: Vec<(&str, Option<&str>)> = ENV_VARS
            .iter()
            .filter(|k| !extra.iter().any(|(e, _)| e == *k))
            .map(|k| (*k, None))
            .collect();
        vars.push(("DOTENV_DISABLED", Some("1")));
        vars.extend_from_slice(extra);
        temp_env::with_vars(vars, f);
    }

    fn config_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    #[serial]
    fn test_cli_overrides_env_and_file() {
        let file = config_file(r#"{"address": "http://file:4646", "page_size": 20}"#);
        let path = file.path().to_str().unwrap().to_string();
        with_clean_env(&[("NOMAD_ADDR", Some("http://env:4646"))], || {
            let cli = Cli::parse_from([
                "nomad-tui",
                "--config-path",
                &path,
                "--address",
                "http://cli:4646",
            ]);
            let config = load_config(&cli).unwrap();
            assert_eq!(config.connection.address, "http://cli:4646");
            assert_eq!(config.jobs.page_size, 20);
        });
    }

    #[test]
    #[serial]
    fn test_env_overrides_file() {
        let file = config_file(r#"{"address": "http://file:4646", "namespace": "prod"}"#);
        let path = file.path().to_str().unwrap().to_string();
        with_clean_env(&[("NOMAD_ADDR", Some("http://env:4646"))], || {
            let cli = Cli::parse_from(["nomad-tui", "--config-path", &path]);
            let config = load_config(&cli).unwrap();
            assert_eq!(config.connection.address, "http://env:4646");
            assert_eq!(config.connection.namespace.as_deref(), Some("prod"));
        });
    }

    #[test]
    #[serial]
    fn test_invalid_page_size_is_rejected() {
        let file = config_file("{}");
        let path = file.path().to_str().unwrap().to_string();
        with_clean_env(&[], || {
            let cli = Cli::parse_from(["nomad-tui", "--config-path", &path, "--page-size", "0"]);
            assert!(load_config(&cli).is_err());
        });
    }

    #[test]
    #[serial]
    fn test_auto_refresh_flag() {
        let file = config_file("{}");
        let path = file.path().to_str().unwrap().to_string();
        with_clean_env(&[], || {
            let cli = Cli::parse_from(["nomad-tui", "--config-path", &path, "--auto-refresh"]);
            assert!(load_config(&cli).unwrap().jobs.auto_refresh);
        });
    }
}
