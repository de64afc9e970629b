//! Screen renderers, one per route.

pub mod job_detail;
pub mod jobs;
pub mod run_job;
pub mod tokens;
