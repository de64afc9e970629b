//! Centralized constants for the Nomad TUI workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication and improve maintainability.

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default Nomad HTTP API address.
pub const DEFAULT_NOMAD_ADDR: &str = "http://127.0.0.1:4646";

/// Namespace used when none is configured or requested.
pub const DEFAULT_NAMESPACE: &str = "default";

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed connection timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

/// Default maximum number of retries for failed requests.
pub const DEFAULT_MAX_RETRIES: usize = 3;

/// Maximum allowed retry count.
pub const MAX_MAX_RETRIES: usize = 10;

/// Base delay for exponential retry backoff in milliseconds.
pub const DEFAULT_RETRY_BASE_DELAY_MS: u64 = 1000;

// =============================================================================
// Jobs List Defaults
// =============================================================================

/// Number of job rows shown per page.
pub const DEFAULT_JOBS_PAGE_SIZE: usize = 10;

/// Largest accepted page size.
pub const MAX_JOBS_PAGE_SIZE: usize = 100;

/// Default jobs list auto-refresh interval in seconds.
pub const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 10;

/// Maximum allowed auto-refresh interval in seconds (1 hour).
pub const MAX_REFRESH_INTERVAL_SECS: u64 = 3600;

// =============================================================================
// TUI/UI Defaults
// =============================================================================

/// Default channel capacity for action messages.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 256;

/// Default UI tick interval for animations in milliseconds.
pub const DEFAULT_UI_TICK_MS: u64 = 250;

/// File name of the JSON configuration file inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.json";
