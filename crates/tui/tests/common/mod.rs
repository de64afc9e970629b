//! Common test utilities for jobs list acceptance tests.
//!
//! A wiremock server stands in for the Nomad agent and answers `GET /v1/jobs`
//! from a [`JobSet`], scoped by the `namespace` query parameter. The app runs
//! against it through the same dispatch path as the event loop, and
//! [`JobsListPage`] drives it the way a user would.
//!
//! # Invariants
//! - Every [`TestContext`] owns its own mock server, channel and task tracker.
//! - `settle()` returns only once no side-effect task is running and the
//!   channel is drained.
//!
//! # What this does NOT handle
//! - Terminal setup or the crossterm event stream.

// Allow dead code since not all tests use all utilities
#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use ratatui::{Terminal, backend::TestBackend};
use tokio::sync::mpsc::{self, Receiver, Sender};
use wiremock::matchers::{method, path};
use wiremock::{Request, Respond};

pub use nomad_client::testing::JobSet;
pub use nomad_config::Config;
pub use nomad_tui::action::Action;
pub use nomad_tui::app::App;
pub use nomad_tui::jobs::{FacetKind, JobRow, JobsListState};
pub use nomad_tui::runtime::dispatch::{Flow, process_action};
pub use nomad_tui::runtime::side_effects::{SharedClient, TaskTracker};
pub use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::helpers::{enter_key, esc_key, key};

/// Cluster state served by the mock agent.
#[derive(Debug, Default)]
struct ClusterState {
    jobs: JobSet,
    /// Token the agent requires, when ACLs are on.
    required_token: Option<String>,
}

/// Namespace-aware `GET /v1/jobs` responder.
#[derive(Clone)]
struct JobsResponder(Arc<Mutex<ClusterState>>);

impl Respond for JobsResponder {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let Ok(state) = self.0.lock() else {
            return ResponseTemplate::new(500);
        };

        if let Some(required) = &state.required_token {
            let presented = request
                .headers
                .get("X-Nomad-Token")
                .and_then(|v| v.to_str().ok());
            if presented != Some(required.as_str()) {
                return ResponseTemplate::new(403).set_body_string("Permission denied");
            }
        }

        let namespace = request
            .url
            .query_pairs()
            .find(|(k, _)| k == "namespace")
            .map(|(_, v)| v.into_owned())
            .unwrap_or_else(|| "default".to_string());
        ResponseTemplate::new(200).set_body_json(state.jobs.to_json_for_namespace(&namespace))
    }
}

/// An app wired to a mock Nomad agent.
pub struct TestContext {
    pub server: MockServer,
    pub app: App,
    pub client: SharedClient,
    pub tx: Sender<Action>,
    pub rx: Receiver<Action>,
    pub task_tracker: TaskTracker,
    cluster: Arc<Mutex<ClusterState>>,
}

impl TestContext {
    /// Start with the default page size of 10.
    pub async fn new() -> Self {
        Self::with_page_size(10).await
    }

    pub async fn with_page_size(page_size: usize) -> Self {
        let server = MockServer::start().await;
        let cluster = Arc::new(Mutex::new(ClusterState::default()));

        Mock::given(method("GET"))
            .and(path("/v1/jobs"))
            .respond_with(JobsResponder(cluster.clone()))
            .mount(&server)
            .await;

        let mut config = Config::with_address(server.uri());
        config.connection.max_retries = 0;
        config.connection.retry_base_delay = Duration::from_millis(1);
        config.connection.timeout = Duration::from_secs(5);
        config.jobs.page_size = page_size;

        let client = nomad_tui::runtime::client::create_shared_client(&config)
            .expect("client should build");
        let app = App::new(&config);
        let (tx, rx) = mpsc::channel::<Action>(100);

        Self {
            server,
            app,
            client,
            tx,
            rx,
            task_tracker: TaskTracker::new(),
            cluster,
        }
    }

    /// Replace the jobs the agent serves.
    pub fn serve(&self, jobs: JobSet) {
        self.cluster.lock().expect("cluster state").jobs = jobs;
    }

    /// Require `token` on every request; anything else gets a 403.
    pub fn require_token(&self, token: &str) {
        self.cluster.lock().expect("cluster state").required_token = Some(token.to_string());
    }

    /// Apply an action through the dispatch path, then settle.
    pub async fn dispatch(&mut self, action: Action) -> Flow {
        let flow = process_action(
            &mut self.app,
            action,
            &self.client,
            &self.tx,
            &self.task_tracker,
        )
        .await;
        self.settle().await;
        flow
    }

    /// Wait for side-effect tasks and apply the actions they sent, until quiet.
    pub async fn settle(&mut self) {
        loop {
            self.task_tracker.close();
            tokio::time::timeout(Duration::from_secs(10), self.task_tracker.wait())
                .await
                .expect("side effects should finish");
            self.task_tracker.reopen();

            let mut applied = false;
            while let Ok(action) = self.rx.try_recv() {
                applied = true;
                process_action(
                    &mut self.app,
                    action,
                    &self.client,
                    &self.tx,
                    &self.task_tracker,
                )
                .await;
            }
            if !applied && self.task_tracker.is_empty() {
                break;
            }
        }
    }

    /// Jobs list page object over this context.
    pub fn jobs_page(&mut self) -> JobsListPage<'_> {
        JobsListPage { ctx: self }
    }
}

/// Drives the jobs list the way a user would.
pub struct JobsListPage<'a> {
    ctx: &'a mut TestContext,
}

impl JobsListPage<'_> {
    pub async fn visit(&mut self, location: &str) {
        self.ctx.dispatch(Action::Visit(location.to_string())).await;
    }

    pub async fn press(&mut self, event: crossterm::event::KeyEvent) -> Flow {
        self.ctx.dispatch(Action::Input(event)).await
    }

    pub fn app(&self) -> &App {
        &self.ctx.app
    }

    pub fn current_url(&self) -> String {
        self.ctx.app.current_url()
    }

    pub fn jobs(&self) -> Vec<JobRow> {
        self.ctx.app.jobs.rows()
    }

    pub fn job_names(&self) -> Vec<String> {
        self.jobs().into_iter().map(|row| row.name).collect()
    }

    /// Type `term` into the search box, replacing what is there.
    pub async fn search(&mut self, term: &str) {
        self.press(key('/')).await;
        if !self.ctx.app.search_input.is_empty() {
            self.press(crate::helpers::ctrl_key('u')).await;
        }
        for c in term.chars() {
            self.press(key(c)).await;
        }
        self.press(enter_key()).await;
    }

    pub async fn next_page(&mut self) {
        self.press(key('n')).await;
    }

    pub async fn prev_page(&mut self) {
        self.press(key('p')).await;
    }

    pub async fn run_job(&mut self) {
        self.press(key('R')).await;
    }

    /// Open the `index`-th row of the current page.
    pub async fn click_job(&mut self, index: usize) {
        for _ in 0..index {
            self.press(key('j')).await;
        }
        self.press(enter_key()).await;
    }

    pub async fn toggle_facet(&mut self, kind: FacetKind) {
        self.press(key(kind.hotkey())).await;
    }

    pub fn facet_options(&self, kind: FacetKind) -> Vec<String> {
        self.ctx
            .app
            .jobs
            .options(kind)
            .iter()
            .map(|option| option.label.clone())
            .collect()
    }

    /// Select the option labelled `label` in the open facet.
    pub async fn toggle_facet_option(&mut self, kind: FacetKind, label: &str) {
        if !self.ctx.app.jobs.facets().is_open(kind) {
            self.toggle_facet(kind).await;
        }
        let position = self
            .facet_options(kind)
            .iter()
            .position(|l| l == label)
            .unwrap_or_else(|| panic!("{label} is not an option of {}", kind.label()));

        // Cursor starts where it was left; walk it to the top first.
        for _ in 0..self.facet_options(kind).len() {
            self.press(crate::helpers::up_key()).await;
        }
        for _ in 0..position {
            self.press(crate::helpers::down_key()).await;
        }
        self.press(key(' ')).await;
    }

    pub async fn close_facet(&mut self) {
        self.press(esc_key()).await;
    }

    pub fn state(&self) -> JobsListState {
        self.ctx.app.jobs.state()
    }

    pub fn is_empty(&self) -> bool {
        self.state().is_empty()
    }

    pub fn empty_headline(&self) -> Option<&'static str> {
        self.state().empty_state().map(|e| e.headline)
    }

    pub fn error_title(&self) -> Option<&'static str> {
        self.state().error_panel().map(|p| p.title)
    }

    pub async fn seek_help(&mut self) {
        self.press(key('h')).await;
    }

    /// Render the whole app into a test buffer, one line per row.
    pub fn rendered_text(&self, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).expect("test terminal");
        terminal
            .draw(|f| self.ctx.app.render(f))
            .expect("draw should succeed");
        let buffer = terminal.backend().buffer();
        buffer
            .content
            .chunks(width as usize)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
