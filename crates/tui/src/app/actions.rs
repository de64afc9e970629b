//! Action handling for the TUI app.
//!
//! Responsibilities:
//! - Apply actions to app state
//! - Hand back the follow-up action an update implies (a navigation or a fetch)
//!
//! Non-responsibilities:
//! - Does NOT perform side effects (see `runtime::side_effects`)

use std::sync::Arc;

use nomad_client::{ClientError, JobListStub};
use tracing::{debug, info, warn};

use crate::action::Action;
use crate::app::App;
use crate::route::Route;
use crate::ui::Toast;

impl App {
    /// Apply `action` and return the follow-up action, if any.
    pub fn update(&mut self, action: Action) -> Option<Action> {
        match action {
            Action::Quit | Action::Resize(..) | Action::LoadJobs { .. } | Action::SaveToken(_) => {
                None
            }
            Action::Input(key) => self.handle_input(key),
            Action::Tick => {
                self.toasts.retain(|t| !t.is_expired());
                None
            }
            Action::RefreshTick => {
                let due = self.auto_refresh && self.route == Route::Jobs && !self.loading;
                due.then(|| self.load_jobs())
            }
            Action::Visit(location) => self.visit(&location),
            Action::RefreshJobs => Some(self.load_jobs()),
            Action::JobsLoaded { request_id, result } => {
                self.on_jobs_loaded(request_id, result);
                None
            }
            Action::TokenSaved { has_token } => {
                self.connection.has_token = has_token;
                let message = if has_token {
                    "ACL token saved"
                } else {
                    "ACL token cleared"
                };
                self.toasts.push(Toast::success(message));
                Some(self.back_to_jobs())
            }
        }
    }

    fn on_jobs_loaded(
        &mut self,
        request_id: u64,
        result: Result<Vec<JobListStub>, Arc<ClientError>>,
    ) {
        if !self.is_latest_request(request_id) {
            debug!(request_id, "Discarding stale jobs response");
            return;
        }
        self.finish_request();

        match result {
            Ok(jobs) => {
                if self.jobs.set_jobs(jobs) {
                    info!("Pruned facet selections no longer offered");
                    self.toasts
                        .push(Toast::warning("Removed filters no longer offered"));
                }
            }
            Err(e) => {
                if e.is_forbidden() {
                    warn!("Jobs request was not authorized");
                } else {
                    self.toasts
                        .push(Toast::error(format!("Failed to load jobs: {e}")));
                }
                self.jobs.set_error(&e);
            }
        }
    }
}
