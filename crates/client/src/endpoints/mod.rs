//! Low-level HTTP endpoint functions for the Nomad API.
//!
//! Each function takes the `reqwest::Client`, the agent address, and the
//! request parameters explicitly so it can be exercised against a mock
//! server without constructing a [`crate::NomadClient`].

mod jobs;
mod request;

pub use jobs::list_jobs;
pub use request::{RetryPolicy, send_request_with_retry};

/// Header carrying the ACL token secret ID.
pub const TOKEN_HEADER: &str = "X-Nomad-Token";
