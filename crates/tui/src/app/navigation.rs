//! Location handling for the TUI app.
//!
//! Responsibilities:
//! - Apply a visited location: pick the route and restore jobs list state
//! - Issue jobs requests with monotonically increasing ids
//!
//! Non-responsibilities:
//! - Does NOT perform HTTP requests (see runtime side effects)

use tracing::debug;

use crate::action::Action;
use crate::app::App;
use crate::app::state::InputMode;
use crate::jobs::JobsQuery;
use crate::route::{Route, split_location};

impl App {
    /// Navigate to `location`. Returns a jobs request when the route needs fresh data.
    pub fn visit(&mut self, location: &str) -> Option<Action> {
        let (path, query) = split_location(location);
        let route = Route::parse(path);

        self.jobs.close_facet();
        self.input_mode = InputMode::Normal;

        match &route {
            Route::Jobs => {
                let query = JobsQuery::parse(query);
                self.search_input.set_value(query.search());
                self.jobs.set_query(query);
            }
            Route::Tokens => {
                self.token_input.clear();
                self.input_mode = InputMode::TokenEntry;
            }
            Route::NotFound(path) => debug!(path = %path, "Unknown route"),
            Route::JobDetail(_) | Route::RunJob => {}
        }
        self.route = route;

        let refetch = self.route == Route::Jobs || (self.route.needs_jobs() && !self.jobs.is_loaded());
        refetch.then(|| self.load_jobs())
    }

    /// Start a jobs request for the active namespace.
    ///
    /// Responses to earlier requests are discarded once this is issued.
    pub fn load_jobs(&mut self) -> Action {
        self.request_seq += 1;
        self.latest_request = Some(self.request_seq);
        self.loading = true;
        Action::LoadJobs {
            namespace: self.jobs.namespace().to_string(),
            request_id: self.request_seq,
        }
    }

    /// Return to the jobs list, keeping its query state.
    pub fn back_to_jobs(&self) -> Action {
        Action::Visit(self.jobs.location())
    }

    pub(crate) fn is_latest_request(&self, request_id: u64) -> bool {
        self.latest_request == Some(request_id)
    }

    pub(crate) fn finish_request(&mut self) {
        self.latest_request = None;
        self.loading = false;
    }
}
