//! Deterministic job fixtures for mock Nomad servers.
//!
//! Responsibilities:
//! - Build `JobListStub` values with sensible defaults (`JobFixture`).
//! - Build collections of jobs with unique, stable ids and modify indexes (`JobSet`).
//! - Render collections as the JSON body `GET /v1/jobs` would return.
//!
//! Invariants:
//! - The same sequence of `create` calls always yields the same jobs.
//! - Modify indexes are unique within a set and deliberately not in creation
//!   order, so sorting is observable.

use std::collections::BTreeMap;

use crate::models::{JobListStub, JobStatus, JobSummary, JobType, TaskGroupSummary};

const NAME_STEMS: [&str; 8] = [
    "api", "cache", "web", "worker", "ingest", "billing", "search", "proxy",
];

/// Builder for a single job stub.
#[derive(Debug, Clone)]
pub struct JobFixture {
    job: JobListStub,
    task_groups: Vec<String>,
}

impl JobFixture {
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            job: JobListStub {
                name: id.clone(),
                id,
                namespace: Some("default".to_string()),
                job_type: JobType::Service,
                status: JobStatus::Running,
                priority: 50,
                datacenters: vec!["dc1".to_string()],
                ..JobListStub::default()
            },
            task_groups: vec!["group-0".to_string()],
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.job.id = id.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.job.name = name.into();
        self
    }

    pub fn job_type(mut self, job_type: JobType) -> Self {
        self.job.job_type = job_type;
        self
    }

    pub fn status(mut self, status: JobStatus) -> Self {
        self.job.status = status;
        self
    }

    pub fn priority(mut self, priority: i32) -> Self {
        self.job.priority = priority;
        self
    }

    pub fn datacenters<I, S>(mut self, datacenters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.job.datacenters = datacenters.into_iter().map(Into::into).collect();
        self
    }

    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.job.namespace = Some(namespace.into());
        self
    }

    pub fn periodic(mut self, periodic: bool) -> Self {
        self.job.periodic = periodic;
        self
    }

    pub fn parameterized(mut self, parameterized: bool) -> Self {
        self.job.parameterized_job = parameterized;
        self
    }

    /// Mark the job as a child of `parent_id`.
    pub fn parent(mut self, parent_id: impl Into<String>) -> Self {
        self.job.parent_id = parent_id.into();
        self
    }

    pub fn task_groups<I, S>(mut self, groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.task_groups = groups.into_iter().map(Into::into).collect();
        self
    }

    pub fn modify_index(mut self, index: u64) -> Self {
        self.job.modify_index = index;
        self
    }

    pub fn build(self) -> JobListStub {
        let mut job = self.job;
        let summary: BTreeMap<String, TaskGroupSummary> = self
            .task_groups
            .into_iter()
            .map(|name| {
                (
                    name,
                    TaskGroupSummary {
                        running: 1,
                        ..TaskGroupSummary::default()
                    },
                )
            })
            .collect();
        job.job_summary = Some(JobSummary { summary });
        job.create_index = job.modify_index.saturating_sub(1);
        job.job_modify_index = job.modify_index;
        job
    }
}

/// A deterministic collection of jobs, standing in for the cluster state.
#[derive(Debug, Clone, Default)]
pub struct JobSet {
    jobs: Vec<JobListStub>,
}

impl JobSet {
    pub fn new() -> Self {
        Self::default()
    }

    fn seeded(seq: usize) -> JobFixture {
        let stem = NAME_STEMS[seq % NAME_STEMS.len()];
        let groups = (0..(1 + seq % 3)).map(|i| format!("group-{i}"));
        JobFixture::new(format!("job-{seq}"))
            .name(format!("{stem}-{seq}"))
            .modify_index(100 + ((seq as u64 * 37) % 101))
            .task_groups(groups)
    }

    /// Create one job, customised by `f`, and return a copy of it.
    pub fn create(&mut self, f: impl FnOnce(JobFixture) -> JobFixture) -> JobListStub {
        let seq = self.jobs.len();
        let job = f(Self::seeded(seq)).build();
        self.jobs.push(job.clone());
        job
    }

    /// Create `count` jobs, each customised by `f`.
    pub fn create_list(&mut self, count: usize, f: impl Fn(JobFixture) -> JobFixture) {
        for _ in 0..count {
            self.create(&f);
        }
    }

    pub fn jobs(&self) -> &[JobListStub] {
        &self.jobs
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    pub fn sorted_by_modify_index_desc(&self) -> Vec<JobListStub> {
        let mut jobs = self.jobs.clone();
        jobs.sort_by(|a, b| b.modify_index.cmp(&a.modify_index));
        jobs
    }

    /// All jobs as a `GET /v1/jobs` response body.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(&self.jobs).unwrap_or(serde_json::Value::Null)
    }

    /// Jobs in `namespace` as a namespace-scoped `GET /v1/jobs` response body.
    pub fn to_json_for_namespace(&self, namespace: &str) -> serde_json::Value {
        let scoped: Vec<&JobListStub> = self
            .jobs
            .iter()
            .filter(|job| job.namespace_or_default() == namespace)
            .collect();
        serde_json::to_value(scoped).unwrap_or(serde_json::Value::Null)
    }
}
