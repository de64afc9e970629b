//! Runtime components for the TUI application.
//!
//! This module contains the runtime infrastructure for the TUI:
//! - Terminal management (TerminalGuard)
//! - Client creation
//! - Configuration loading
//! - Terminal input forwarding
//! - Action processing and async side effect handlers
//!
//! Does NOT handle:
//! - UI rendering or input handling (see `nomad_tui::app` and `nomad_tui::ui`).
//! - HTTP details of the Nomad API (see `nomad_client`).
//!
//! Invariants:
//! - App state is only mutated on the main loop, through `App::update`.
//! - Side effects run in tasks tracked by a `TaskTracker`.

pub mod client;
pub mod config;
pub mod dispatch;
pub mod input;
pub mod side_effects;
pub mod terminal;
