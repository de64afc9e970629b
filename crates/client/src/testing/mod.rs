//! Testing utilities for Nomad client tests.
//!
//! Available when running tests or when the `test-utils` feature is enabled.
//!
//! # Example
//! ```ignore
//! use nomad_client::testing::fixtures::JobSet;
//!
//! let mut jobs = JobSet::new();
//! jobs.create_list(3, |job| job.job_type(JobType::Batch));
//! let body = jobs.to_json();
//! ```

pub mod fixtures;

pub use fixtures::{JobFixture, JobSet};
