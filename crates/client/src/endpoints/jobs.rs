//! Job endpoints.

use reqwest::Client;

use super::{RetryPolicy, TOKEN_HEADER, send_request_with_retry};
use crate::error::{ClientError, Result};
use crate::models::JobListStub;

/// List job stubs, optionally scoped to a namespace.
pub async fn list_jobs(
    client: &Client,
    address: &str,
    token: Option<&str>,
    namespace: Option<&str>,
    policy: &RetryPolicy,
) -> Result<Vec<JobListStub>> {
    let url = format!("{}/v1/jobs", address);

    let mut builder = client.get(&url);
    if let Some(namespace) = namespace {
        builder = builder.query(&[("namespace", namespace)]);
    }
    if let Some(token) = token {
        builder = builder.header(TOKEN_HEADER, token);
    }

    let response = send_request_with_retry(builder, policy, "/v1/jobs", "GET").await?;
    let body = response.text().await?;

    serde_json::from_str(&body)
        .map_err(|e| ClientError::InvalidResponse(format!("Failed to parse job list: {}", e)))
}
