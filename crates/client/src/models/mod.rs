//! Data models for Nomad API responses.

mod jobs;

pub use jobs::{JobListStub, JobStatus, JobSummary, JobType, TaskGroupSummary};
