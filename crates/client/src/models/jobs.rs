//! Job models for the Nomad jobs API.
//!
//! # What this module handles:
//! - The job list stub returned by `GET /v1/jobs`
//! - Derived presentation values (display type, task groups, namespace)
//!
//! # What this module does NOT handle:
//! - Full job specifications (`GET /v1/job/:id`)
//! - HTTP transport (see [`crate::endpoints::jobs`])

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use nomad_config::constants::DEFAULT_NAMESPACE;

/// Scheduler type of a job.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobType {
    Batch,
    #[default]
    Service,
    System,
    Sysbatch,
    #[serde(other)]
    Unknown,
}

impl JobType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Batch => "batch",
            Self::Service => "service",
            Self::System => "system",
            Self::Sysbatch => "sysbatch",
            Self::Unknown => "unknown",
        }
    }
}

/// Lifecycle status of a job.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    #[default]
    Pending,
    Running,
    Dead,
    #[serde(other)]
    Unknown,
}

impl JobStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Running => "running",
            Self::Dead => "dead",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Allocation counts for one task group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TaskGroupSummary {
    pub queued: u64,
    pub complete: u64,
    pub failed: u64,
    pub running: u64,
    pub starting: u64,
    pub lost: u64,
}

/// Per-task-group summary embedded in the job stub.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct JobSummary {
    #[serde(default, deserialize_with = "crate::serde_helpers::null_as_default")]
    pub summary: BTreeMap<String, TaskGroupSummary>,
}

/// One entry of `GET /v1/jobs`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct JobListStub {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "ParentID", default)]
    pub parent_id: String,
    pub name: String,
    #[serde(default)]
    pub namespace: Option<String>,
    #[serde(rename = "Type", default)]
    pub job_type: JobType,
    #[serde(default)]
    pub priority: i32,
    #[serde(default)]
    pub periodic: bool,
    #[serde(default)]
    pub parameterized_job: bool,
    #[serde(default)]
    pub stop: bool,
    #[serde(default)]
    pub status: JobStatus,
    #[serde(default)]
    pub status_description: String,
    #[serde(default, deserialize_with = "crate::serde_helpers::null_as_default")]
    pub datacenters: Vec<String>,
    #[serde(default)]
    pub job_summary: Option<JobSummary>,
    #[serde(default)]
    pub create_index: u64,
    #[serde(default)]
    pub modify_index: u64,
    #[serde(default)]
    pub job_modify_index: u64,
    #[serde(default)]
    pub submit_time: i64,
}

impl JobListStub {
    /// Type label shown in the list: `periodic` wins over `parameterized`,
    /// which wins over the scheduler type.
    pub fn display_type(&self) -> &'static str {
        if self.periodic {
            "periodic"
        } else if self.parameterized_job {
            "parameterized"
        } else {
            self.job_type.as_str()
        }
    }

    /// Task group names in summary order.
    pub fn task_groups(&self) -> Vec<&str> {
        self.job_summary
            .as_ref()
            .map(|s| s.summary.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    pub fn task_group_count(&self) -> usize {
        self.job_summary.as_ref().map_or(0, |s| s.summary.len())
    }

    /// Namespace of the job, treating a missing value as `default`.
    pub fn namespace_or_default(&self) -> &str {
        self.namespace
            .as_deref()
            .filter(|ns| !ns.is_empty())
            .unwrap_or(DEFAULT_NAMESPACE)
    }

    /// Dispatched and periodic child jobs carry their parent's id.
    pub fn is_child(&self) -> bool {
        !self.parent_id.is_empty()
    }
}
