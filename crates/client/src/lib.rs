//! Nomad HTTP API client.
//!
//! This crate provides a typed client for the parts of the Nomad HTTP API
//! used by the jobs list: listing job stubs, optionally scoped to a
//! namespace and authenticated with an ACL token.

pub mod client;
pub mod error;
pub mod models;
mod serde_helpers;

pub mod endpoints;

#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use client::NomadClient;
pub use client::builder::NomadClientBuilder;
pub use endpoints::RetryPolicy;
pub use error::{ClientError, Result};
pub use models::{JobListStub, JobStatus, JobSummary, JobType, TaskGroupSummary};
