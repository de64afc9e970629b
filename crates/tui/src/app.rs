//! Application state and rendering.
//!
//! The module is organized into submodules:
//! - `state`: Core state types (InputMode, ConnectionContext, layout constants)
//! - `navigation`: Location handling and jobs requests
//! - `input`: Per-route and per-mode input handlers
//! - `actions`: Action handling
//! - `render`: Rendering logic

pub mod input;
pub mod state;

mod actions;
mod navigation;
mod render;

pub use input::components::SingleLineInput;
pub use state::{ConnectionContext, FOOTER_HEIGHT, HEADER_HEIGHT, InputMode};

use nomad_config::Config;

use crate::jobs::JobListView;
use crate::route::Route;
use crate::ui::Toast;

/// Main application state.
pub struct App {
    pub route: Route,
    pub jobs: JobListView,
    pub input_mode: InputMode,
    pub search_input: SingleLineInput,
    pub token_input: SingleLineInput,
    /// A jobs request is in flight
    pub loading: bool,
    pub auto_refresh: bool,
    pub toasts: Vec<Toast>,
    pub connection: ConnectionContext,
    request_seq: u64,
    /// Id of the only jobs response that will be applied
    latest_request: Option<u64>,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self {
            route: Route::Jobs,
            jobs: JobListView::new(
                config.jobs.page_size,
                config.connection.namespace.clone(),
            ),
            input_mode: InputMode::Normal,
            search_input: SingleLineInput::new(),
            token_input: SingleLineInput::new(),
            loading: false,
            auto_refresh: config.jobs.auto_refresh,
            toasts: Vec::new(),
            connection: ConnectionContext {
                address: config.connection.address.clone(),
                has_token: config.auth.token.is_some(),
            },
            request_seq: 0,
            latest_request: None,
        }
    }

    /// The location the app currently shows, with jobs list state in the query.
    pub fn current_url(&self) -> String {
        match &self.route {
            Route::Jobs => self.jobs.location(),
            other => other.path(),
        }
    }
}
