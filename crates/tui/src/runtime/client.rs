//! Nomad client creation.
//!
//! Does NOT handle:
//! - Configuration loading (see `runtime::config`).

use std::sync::Arc;

use anyhow::Result;
use nomad_client::NomadClient;
use nomad_config::Config;
use tokio::sync::Mutex;

use crate::runtime::side_effects::SharedClient;

/// Create a client from the resolved configuration.
pub fn create_client(config: &Config) -> Result<NomadClient> {
    NomadClient::builder()
        .from_config(config)
        .build()
        .map_err(|e| e.into())
}

/// Create a client wrapped for sharing with side-effect tasks.
pub fn create_shared_client(config: &Config) -> Result<SharedClient> {
    Ok(Arc::new(Mutex::new(create_client(config)?)))
}
