//! Action enum definitions.

use std::sync::Arc;

use crossterm::event::KeyEvent;
use nomad_client::{ClientError, JobListStub};
use secrecy::SecretString;

/// Unified action type for async TUI event handling.
///
/// Actions flow through a channel from the input task, timers, and
/// side-effect tasks to the main loop, where `App::update` applies them.
#[derive(Debug, Clone)]
pub enum Action {
    // System
    /// Quit the application
    Quit,

    // Input
    /// Raw keyboard input event
    Input(KeyEvent),
    /// Terminal resize event with new dimensions (width, height)
    Resize(u16, u16),
    /// UI tick, used to expire toasts
    Tick,
    /// Auto-refresh interval elapsed
    RefreshTick,

    // Navigation
    /// Navigate to a location (path plus optional query string)
    Visit(String),

    // Jobs
    /// Re-fetch the jobs list for the active namespace
    RefreshJobs,
    /// Fetch the jobs list. Issued by the app with a fresh request id.
    LoadJobs { namespace: String, request_id: u64 },
    /// Result of a `LoadJobs` request
    JobsLoaded {
        request_id: u64,
        result: Result<Vec<JobListStub>, Arc<ClientError>>,
    },

    // ACL token
    /// Replace the client's ACL token (`None` clears it)
    SaveToken(Option<SecretString>),
    /// The client now uses the new token
    TokenSaved { has_token: bool },
}
