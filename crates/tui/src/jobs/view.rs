//! Jobs list view model.
//!
//! Responsibilities:
//! - Hold the latest job collection (or the error that replaced it).
//! - Scope it to the active namespace, hide child jobs, sort by modify index.
//! - Apply search and facet selections, paginate, and produce table rows.
//! - Keep facet options and the row cursor consistent with the data.
//!
//! Does NOT handle:
//! - Fetching (see `runtime::side_effects::jobs`).
//! - Rendering (see `ui::screens::jobs`).
//!
//! Invariants:
//! - Rows are always ordered by modify index, highest first.
//! - Facet options come from the visible set, never the filtered result.
//! - The displayed page is clamped to the last page; the query keeps what was asked.

use nomad_client::{ClientError, JobListStub, JobStatus};
use nomad_config::constants::DEFAULT_NAMESPACE;

use super::facets::{self, FacetKind, FacetOption, FacetPanel};
use super::list_state::JobsListState;
use super::query::JobsQuery;
use crate::route::{JOBS_PATH, Route};

#[derive(Debug, Clone, Default)]
enum LoadState {
    #[default]
    Loading,
    Loaded {
        namespace: String,
        jobs: Vec<JobListStub>,
    },
    Forbidden,
    Failed(String),
}

/// One rendered table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobRow {
    pub id: String,
    pub name: String,
    /// Detail link shown for the row.
    pub link: String,
    pub status: JobStatus,
    pub job_type: &'static str,
    pub priority: i32,
    pub task_groups: usize,
}

impl JobRow {
    fn from_job(job: &JobListStub) -> Self {
        Self {
            id: job.id.clone(),
            name: job.name.clone(),
            link: Route::JobDetail(job.id.clone()).link(),
            status: job.status,
            job_type: job.display_type(),
            priority: job.priority,
            task_groups: job.task_group_count(),
        }
    }
}

/// Filterable, paginated view over the job collection.
#[derive(Debug, Clone)]
pub struct JobListView {
    load: LoadState,
    query: JobsQuery,
    default_namespace: String,
    page_size: usize,
    /// Indexes into the loaded jobs: namespace-scoped, non-child, sorted.
    visible: Vec<usize>,
    /// Subset of `visible` passing search and facets, same order.
    filtered: Vec<usize>,
    options: [Vec<FacetOption>; 4],
    facets: FacetPanel,
    selected: usize,
}

impl JobListView {
    pub fn new(page_size: usize, default_namespace: Option<String>) -> Self {
        Self {
            load: LoadState::Loading,
            query: JobsQuery::default(),
            default_namespace: default_namespace
                .filter(|ns| !ns.is_empty())
                .unwrap_or_else(|| DEFAULT_NAMESPACE.to_string()),
            page_size: page_size.max(1),
            visible: Vec::new(),
            filtered: Vec::new(),
            options: [
                facets::type_options(),
                facets::status_options(),
                Vec::new(),
                Vec::new(),
            ],
            facets: FacetPanel::default(),
            selected: 0,
        }
    }

    pub fn query(&self) -> &JobsQuery {
        &self.query
    }

    /// Location of the list in its current state.
    pub fn location(&self) -> String {
        self.query.to_location(JOBS_PATH)
    }

    /// Namespace the list is scoped to.
    pub fn namespace(&self) -> &str {
        self.query.namespace().unwrap_or(&self.default_namespace)
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Replace the query, as when visiting a location.
    pub fn set_query(&mut self, query: JobsQuery) {
        self.query = query;
        self.facets.close();
        self.selected = 0;
        self.recompute();
    }

    /// Store a fresh job collection for the current namespace.
    ///
    /// Returns true when stale Datacenter or Prefix selections were pruned,
    /// which changes the location.
    pub fn set_jobs(&mut self, jobs: Vec<JobListStub>) -> bool {
        self.load = LoadState::Loaded {
            namespace: self.namespace().to_string(),
            jobs,
        };
        self.recompute();

        let mut pruned = false;
        for kind in FacetKind::ALL.into_iter().filter(|k| k.is_derived()) {
            let offered = &self.options[kind.index()];
            pruned |= self
                .query
                .retain_selection(kind, |key| offered.iter().any(|o| o.key == key));
        }
        if pruned {
            self.recompute();
        }
        pruned
    }

    /// Replace the collection with a request failure.
    pub fn set_error(&mut self, error: &ClientError) {
        self.load = if error.is_forbidden() {
            LoadState::Forbidden
        } else {
            LoadState::Failed(error.to_string())
        };
        self.recompute();
    }

    /// Whether jobs for the active namespace have been loaded.
    pub fn is_loaded(&self) -> bool {
        matches!(&self.load, LoadState::Loaded { namespace, .. } if namespace == self.namespace())
    }

    fn loaded_jobs(&self) -> &[JobListStub] {
        match &self.load {
            LoadState::Loaded { jobs, .. } => jobs,
            _ => &[],
        }
    }

    /// Look up a loaded job by id.
    pub fn job(&self, id: &str) -> Option<&JobListStub> {
        self.loaded_jobs().iter().find(|job| job.id == id)
    }

    pub fn state(&self) -> JobsListState {
        match &self.load {
            LoadState::Loading => JobsListState::Loading,
            LoadState::Forbidden => JobsListState::NotAuthorized,
            LoadState::Failed(message) => JobsListState::Failed(message.clone()),
            LoadState::Loaded { .. } if !self.is_loaded() => JobsListState::Loading,
            LoadState::Loaded { .. } if self.visible.is_empty() => JobsListState::NoJobs,
            LoadState::Loaded { .. } if self.filtered.is_empty() => JobsListState::NoMatches {
                search: Some(self.query.search().to_string()).filter(|s| !s.is_empty()),
            },
            LoadState::Loaded { .. } => JobsListState::Loaded,
        }
    }

    /// Number of jobs passing the search and facets.
    pub fn total_matches(&self) -> usize {
        self.filtered.len()
    }

    pub fn page_count(&self) -> usize {
        self.total_matches().div_ceil(self.page_size).max(1)
    }

    /// Page actually displayed.
    pub fn current_page(&self) -> usize {
        self.query.page().clamp(1, self.page_count())
    }

    fn page_range(&self) -> std::ops::Range<usize> {
        let start = (self.current_page() - 1) * self.page_size;
        let end = (start + self.page_size).min(self.filtered.len());
        start.min(end)..end
    }

    fn page_jobs(&self) -> impl Iterator<Item = &JobListStub> {
        let jobs = self.loaded_jobs();
        self.filtered[self.page_range()].iter().map(move |&idx| &jobs[idx])
    }

    /// Rows of the displayed page.
    pub fn rows(&self) -> Vec<JobRow> {
        self.page_jobs().map(JobRow::from_job).collect()
    }

    /// `"<start>–<end> of <total>"`, when there are rows.
    pub fn page_summary(&self) -> Option<String> {
        let range = self.page_range();
        if range.is_empty() {
            return None;
        }
        Some(format!(
            "{}–{} of {}",
            range.start + 1,
            range.end,
            self.total_matches()
        ))
    }

    pub fn next_page(&mut self) -> bool {
        let current = self.current_page();
        if current >= self.page_count() {
            return false;
        }
        self.query.set_page(current + 1);
        self.selected = 0;
        true
    }

    pub fn prev_page(&mut self) -> bool {
        let current = self.current_page();
        if current <= 1 {
            return false;
        }
        self.query.set_page(current - 1);
        self.selected = 0;
        true
    }

    /// Returns true when the search text changed.
    pub fn set_search(&mut self, search: &str) -> bool {
        if self.query.search() == search {
            return false;
        }
        self.query.set_search(search);
        self.recompute();
        true
    }

    pub fn toggle_option(&mut self, kind: FacetKind, key: &str) {
        self.query.toggle(kind, key);
        self.recompute();
    }

    pub fn options(&self, kind: FacetKind) -> &[FacetOption] {
        &self.options[kind.index()]
    }

    pub fn facets(&self) -> &FacetPanel {
        &self.facets
    }

    pub fn toggle_facet(&mut self, kind: FacetKind) {
        self.facets.toggle(kind);
    }

    pub fn close_facet(&mut self) {
        self.facets.close();
    }

    pub fn move_facet_cursor(&mut self, delta: isize) {
        if let Some(kind) = self.facets.open_kind() {
            let count = self.options(kind).len();
            self.facets.move_cursor(delta, count);
        }
    }

    /// Toggle the option under the facet cursor. Returns true when one was toggled.
    pub fn toggle_facet_cursor(&mut self) -> bool {
        let Some(kind) = self.facets.open_kind() else {
            return false;
        };
        let Some(key) = self
            .options(kind)
            .get(self.facets.cursor())
            .map(|option| option.key.clone())
        else {
            return false;
        };
        self.toggle_option(kind, &key);
        true
    }

    /// Cursor position within the displayed page.
    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn select_next(&mut self) {
        let len = self.page_range().len();
        if len > 0 {
            self.selected = (self.selected + 1).min(len - 1);
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn selected_job(&self) -> Option<&JobListStub> {
        self.page_jobs().nth(self.selected)
    }

    fn recompute(&mut self) {
        let namespace = self.namespace().to_string();
        let jobs = self.loaded_jobs();

        let mut visible: Vec<usize> = jobs
            .iter()
            .enumerate()
            .filter(|(_, job)| job.namespace_or_default() == namespace && !job.is_child())
            .map(|(idx, _)| idx)
            .collect();
        visible.sort_by(|&a, &b| {
            jobs[b]
                .modify_index
                .cmp(&jobs[a].modify_index)
                .then_with(|| jobs[a].id.cmp(&jobs[b].id))
        });

        let search = self.query.search().to_lowercase();
        let filtered: Vec<usize> = visible
            .iter()
            .copied()
            .filter(|&idx| {
                let job = &jobs[idx];
                matches_search(job, &search)
                    && FacetKind::ALL
                        .into_iter()
                        .all(|kind| facets::matches(kind, job, self.query.selection(kind)))
            })
            .collect();

        let visible_jobs = || visible.iter().map(|&idx| &jobs[idx]);
        let datacenters = facets::datacenter_options(visible_jobs());
        let prefixes = facets::prefix_options(visible_jobs());

        self.options[FacetKind::Datacenter.index()] = datacenters;
        self.options[FacetKind::Prefix.index()] = prefixes;
        self.visible = visible;
        self.filtered = filtered;

        let rows = self.page_range().len();
        self.selected = self.selected.min(rows.saturating_sub(1));
        if let Some(kind) = self.facets.open_kind() {
            let count = self.options(kind).len();
            self.facets.move_cursor(0, count);
        }
    }
}

fn matches_search(job: &JobListStub, lowered: &str) -> bool {
    lowered.is_empty()
        || job.id.to_lowercase().contains(lowered)
        || job.name.to_lowercase().contains(lowered)
}
