//! Facet dimensions, option derivation, and matching.
//!
//! Responsibilities:
//! - Name the four facets and their query parameters.
//! - Derive options from the visible (namespace-scoped, non-child) jobs.
//! - Decide whether a job passes a facet's selection.
//! - Track which facet dropdown is open and where its cursor sits.
//!
//! Invariants:
//! - An empty selection matches every job.
//! - Options within one facet combine with OR.
//! - Type and Status options are static; Datacenter and Prefix depend on the jobs.

use std::collections::{BTreeMap, BTreeSet};

use nomad_client::JobListStub;

/// A filter dimension over the jobs list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FacetKind {
    Type,
    Status,
    Datacenter,
    Prefix,
}

impl FacetKind {
    pub const ALL: [FacetKind; 4] = [Self::Type, Self::Status, Self::Datacenter, Self::Prefix];

    pub fn label(self) -> &'static str {
        match self {
            Self::Type => "Type",
            Self::Status => "Status",
            Self::Datacenter => "Datacenter",
            Self::Prefix => "Prefix",
        }
    }

    /// Query parameter holding the selection.
    pub fn param_name(self) -> &'static str {
        match self {
            Self::Type => "type",
            Self::Status => "status",
            Self::Datacenter => "dc",
            Self::Prefix => "prefix",
        }
    }

    /// Key that opens the facet dropdown.
    pub fn hotkey(self) -> char {
        match self {
            Self::Type => 't',
            Self::Status => 's',
            Self::Datacenter => 'd',
            Self::Prefix => 'x',
        }
    }

    pub fn index(self) -> usize {
        match self {
            Self::Type => 0,
            Self::Status => 1,
            Self::Datacenter => 2,
            Self::Prefix => 3,
        }
    }

    pub fn from_param(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.param_name() == name)
    }

    pub fn from_hotkey(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.hotkey() == c)
    }

    /// Whether options depend on the loaded jobs.
    pub fn is_derived(self) -> bool {
        matches!(self, Self::Datacenter | Self::Prefix)
    }
}

/// One selectable option of a facet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetOption {
    /// Value stored in the selection and the location.
    pub key: String,
    pub label: String,
}

impl FacetOption {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }
}

pub fn type_options() -> Vec<FacetOption> {
    vec![
        FacetOption::new("batch", "Batch"),
        FacetOption::new("parameterized", "Parameterized"),
        FacetOption::new("periodic", "Periodic"),
        FacetOption::new("service", "Service"),
        FacetOption::new("system", "System"),
    ]
}

pub fn status_options() -> Vec<FacetOption> {
    vec![
        FacetOption::new("pending", "Pending"),
        FacetOption::new("running", "Running"),
        FacetOption::new("dead", "Dead"),
    ]
}

/// Sorted union of the jobs' datacenters.
pub fn datacenter_options<'a>(jobs: impl IntoIterator<Item = &'a JobListStub>) -> Vec<FacetOption> {
    let datacenters: BTreeSet<&str> = jobs
        .into_iter()
        .flat_map(|job| job.datacenters.iter().map(String::as_str))
        .collect();
    datacenters
        .into_iter()
        .map(|dc| FacetOption::new(dc, dc))
        .collect()
}

/// Prefixes shared by more than one job, labelled with their job count.
pub fn prefix_options<'a>(jobs: impl IntoIterator<Item = &'a JobListStub>) -> Vec<FacetOption> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for job in jobs {
        if let Some(prefix) = job_prefix(&job.name) {
            *counts.entry(prefix).or_default() += 1;
        }
    }
    counts
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(prefix, count)| FacetOption::new(prefix, format!("{prefix} ({count})")))
        .collect()
}

/// Text before the first `-` or `.` that follows at least one character.
pub fn job_prefix(name: &str) -> Option<&str> {
    name.char_indices()
        .skip(1)
        .find(|(_, c)| matches!(c, '-' | '.'))
        .map(|(idx, _)| &name[..idx])
}

pub fn options_for<'a>(
    kind: FacetKind,
    jobs: impl IntoIterator<Item = &'a JobListStub>,
) -> Vec<FacetOption> {
    match kind {
        FacetKind::Type => type_options(),
        FacetKind::Status => status_options(),
        FacetKind::Datacenter => datacenter_options(jobs),
        FacetKind::Prefix => prefix_options(jobs),
    }
}

/// Whether `job` passes `selection` for the given facet.
pub fn matches(kind: FacetKind, job: &JobListStub, selection: &[String]) -> bool {
    if selection.is_empty() {
        return true;
    }
    match kind {
        FacetKind::Type => selection.iter().any(|key| key == job.display_type()),
        FacetKind::Status => selection.iter().any(|key| key == job.status.as_str()),
        FacetKind::Datacenter => job
            .datacenters
            .iter()
            .any(|dc| selection.iter().any(|key| key == dc)),
        FacetKind::Prefix => selection
            .iter()
            .any(|prefix| job.name.starts_with(prefix.as_str())),
    }
}

/// Dropdown state of the facet bar. At most one facet is open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FacetPanel {
    open: Option<FacetKind>,
    cursor: usize,
}

impl FacetPanel {
    pub fn open_kind(&self) -> Option<FacetKind> {
        self.open
    }

    pub fn is_open(&self, kind: FacetKind) -> bool {
        self.open == Some(kind)
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Open `kind`, or close it when it is already open.
    pub fn toggle(&mut self, kind: FacetKind) {
        if self.open == Some(kind) {
            self.close();
        } else {
            self.open = Some(kind);
            self.cursor = 0;
        }
    }

    pub fn close(&mut self) {
        self.open = None;
        self.cursor = 0;
    }

    /// Move the cursor by `delta`, clamped to `option_count`.
    pub fn move_cursor(&mut self, delta: isize, option_count: usize) {
        if option_count == 0 {
            self.cursor = 0;
            return;
        }
        let max = option_count - 1;
        self.cursor = self.cursor.saturating_add_signed(delta).min(max);
    }
}
