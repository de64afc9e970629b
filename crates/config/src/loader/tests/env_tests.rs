//! Environment variable tests for the configuration loader builder.

use crate::loader::builder::ConfigLoader;
use crate::loader::env::env_var_or_none;
use crate::loader::error::ConfigError;
use secrecy::ExposeSecret;
use serial_test::serial;
use std::time::Duration;
use tempfile::TempDir;

use super::{cleared_env, write_config_file};

fn with_env<F: FnOnce()>(vars: &[(&'static str, Option<&'static str>)], f: F) {
    let mut all = cleared_env();
    all.retain(|(k, _)| !vars.iter().any(|(v, _)| v == k));
    all.extend_from_slice(vars);
    temp_env::with_vars(all, f);
}

#[test]
#[serial]
fn test_env_values_applied() {
    with_env(
        &[
            ("NOMAD_ADDR", Some("https://nomad.example.com:4646")),
            ("NOMAD_TOKEN", Some("secret-id")),
            ("NOMAD_NAMESPACE", Some("prod")),
            ("NOMAD_TIMEOUT", Some("12")),
            ("NOMAD_TUI_PAGE_SIZE", Some("25")),
            ("NOMAD_TUI_AUTO_REFRESH", Some("true")),
        ],
        || {
            let config = ConfigLoader::new().from_env().unwrap().build().unwrap();
            assert_eq!(config.connection.address, "https://nomad.example.com:4646");
            assert_eq!(config.connection.namespace.as_deref(), Some("prod"));
            assert_eq!(config.connection.timeout, Duration::from_secs(12));
            assert_eq!(config.jobs.page_size, 25);
            assert!(config.jobs.auto_refresh);
            assert_eq!(
                config.auth.token.as_ref().map(|t| t.expose_secret().to_string()),
                Some("secret-id".to_string())
            );
        },
    );
}

#[test]
#[serial]
fn test_env_overrides_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config_file(
        dir.path(),
        r#"{"address": "http://file.example.com:4646", "page_size": 20}"#,
    );

    with_env(&[("NOMAD_ADDR", Some("http://env.example.com:4646"))], || {
        let config = ConfigLoader::new()
            .with_config_path(path.clone())
            .from_file()
            .unwrap()
            .from_env()
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(config.connection.address, "http://env.example.com:4646");
        assert_eq!(config.jobs.page_size, 20);
    });
}

#[test]
#[serial]
fn test_builder_overrides_env() {
    with_env(&[("NOMAD_TUI_PAGE_SIZE", Some("50"))], || {
        let config = ConfigLoader::new()
            .from_env()
            .unwrap()
            .with_page_size(5)
            .build()
            .unwrap();
        assert_eq!(config.jobs.page_size, 5);
    });
}

#[test]
#[serial]
fn test_empty_env_vars_ignored() {
    with_env(
        &[("NOMAD_ADDR", Some("")), ("NOMAD_TOKEN", Some("   "))],
        || {
            let config = ConfigLoader::new().from_env().unwrap().build().unwrap();
            assert_eq!(config.connection.address, "http://127.0.0.1:4646");
            assert!(config.auth.token.is_none());
        },
    );
}

#[test]
#[serial]
fn test_whitespace_is_trimmed() {
    temp_env::with_var("NOMAD_NAMESPACE", Some("  ops  "), || {
        assert_eq!(env_var_or_none("NOMAD_NAMESPACE").as_deref(), Some("ops"));
    });
}

#[test]
#[serial]
fn test_invalid_numeric_env_var() {
    with_env(&[("NOMAD_TUI_PAGE_SIZE", Some("ten"))], || {
        let err = ConfigLoader::new().from_env().unwrap_err();
        match err {
            ConfigError::InvalidValue { var, .. } => assert_eq!(var, "NOMAD_TUI_PAGE_SIZE"),
            other => panic!("expected InvalidValue, got {other:?}"),
        }
    });
}

#[test]
#[serial]
fn test_invalid_bool_env_var() {
    with_env(&[("NOMAD_SKIP_VERIFY", Some("maybe"))], || {
        assert!(matches!(
            ConfigLoader::new().from_env(),
            Err(ConfigError::InvalidValue { .. })
        ));
    });
}

#[test]
#[serial]
fn test_dotenv_disabled_skips_loading() {
    temp_env::with_var("DOTENV_DISABLED", Some("1"), || {
        assert!(ConfigLoader::new().load_dotenv().is_ok());
    });
}
