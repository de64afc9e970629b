//! Command-line argument parsing for nomad-tui.
//!
//! Responsibilities:
//! - Define CLI argument structure using clap derive macros.
//! - Provide parsed CLI arguments to the main application.
//!
//! Does NOT handle:
//! - Configuration loading or validation (see `runtime::config`).
//! - Environment variable parsing (handled by `nomad_config`).

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for nomad-tui.
///
/// Configuration precedence (highest to lowest):
/// 1. CLI arguments (e.g., --address, --namespace)
/// 2. Environment variables (e.g., NOMAD_ADDR, NOMAD_TOKEN)
/// 3. Configuration file (config.json)
/// 4. Default values
#[derive(Debug, Parser)]
#[command(
    name = "nomad-tui",
    about = "Terminal jobs list for a Nomad cluster",
    version,
    after_help = "Examples:\n  nomad-tui\n  nomad-tui --address http://nomad.service:4646 --namespace prod\n  nomad-tui --location '/jobs?status=%5B%22running%22%5D'\n  nomad-tui --page-size 50 --auto-refresh\n"
)]
pub struct Cli {
    /// Nomad HTTP API address
    #[arg(long, short = 'a')]
    pub address: Option<String>,

    /// Namespace whose jobs are listed
    #[arg(long, short = 'n')]
    pub namespace: Option<String>,

    /// Rows per page of the jobs list
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Path to a custom configuration file
    #[arg(long)]
    pub config_path: Option<PathBuf>,

    /// Directory for log files
    #[arg(long, default_value = "logs")]
    pub log_dir: PathBuf,

    /// Location to open at startup, e.g. `/jobs?search=web&page=2`
    #[arg(long, default_value = "/jobs")]
    pub location: String,

    /// Reload the jobs list periodically
    #[arg(long)]
    pub auto_refresh: bool,
}
