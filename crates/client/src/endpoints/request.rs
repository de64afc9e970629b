//! Retry helper for HTTP requests with exponential backoff.
//!
//! Responsibilities:
//! - Send a request and retry transient failures (429, 502, 503, 504).
//! - Convert every other non-success response into `ClientError::ApiError`.
//!
//! Does NOT handle:
//! - Decoding successful bodies (callers do that).
//! - Token refresh; Nomad ACL tokens are static.

use std::time::Duration;

use reqwest::{RequestBuilder, Response};
use tracing::debug;

use crate::error::{ClientError, Result};
use nomad_config::constants::{DEFAULT_MAX_RETRIES, DEFAULT_RETRY_BASE_DELAY_MS};

/// How often and how patiently a request is retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries after the first attempt.
    pub max_retries: usize,
    /// Delay before the first retry; doubled for each following retry.
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
            base_delay: Duration::from_millis(DEFAULT_RETRY_BASE_DELAY_MS),
        }
    }
}

impl RetryPolicy {
    /// Backoff before retry number `attempt` (0-based).
    pub fn backoff(&self, attempt: usize) -> Duration {
        let factor = 2u32.saturating_pow(attempt.min(16) as u32);
        self.base_delay.saturating_mul(factor)
    }
}

/// Sends an HTTP request, retrying retryable statuses with exponential backoff.
///
/// # Errors
///
/// - `ClientError::MaxRetriesExceeded` when every attempt hit a retryable status.
/// - `ClientError::ApiError` for any other non-success status, carrying the body text.
/// - `ClientError::Timeout` when the request timed out.
/// - `ClientError::HttpError` for other transport failures.
pub async fn send_request_with_retry(
    builder: RequestBuilder,
    policy: &RetryPolicy,
    endpoint: &str,
    method: &str,
) -> Result<Response> {
    let max_retries = policy.max_retries;

    for attempt in 0..=max_retries {
        let attempt_builder = match builder.try_clone() {
            Some(cloned) => cloned,
            None => {
                debug!(endpoint, "Request builder cannot be cloned, single attempt only");
                return builder.send().await.map_err(|e| map_send_error(e, endpoint));
            }
        };

        let response = attempt_builder
            .send()
            .await
            .map_err(|e| map_send_error(e, endpoint))?;
        let status = response.status().as_u16();

        if response.status().is_success() {
            if attempt > 0 {
                debug!(endpoint, method, attempt = attempt + 1, "Request succeeded after retry");
            }
            return Ok(response);
        }

        if ClientError::is_retryable_status(status) {
            if attempt < max_retries {
                let backoff = policy.backoff(attempt);
                debug!(
                    endpoint,
                    method,
                    status,
                    attempt = attempt + 1,
                    max_attempts = max_retries + 1,
                    backoff_ms = backoff.as_millis() as u64,
                    "Retryable status, backing off"
                );
                tokio::time::sleep(backoff).await;
                continue;
            }
            debug!(endpoint, method, attempts = attempt + 1, "Max retries exhausted");
            return Err(ClientError::MaxRetriesExceeded(max_retries + 1));
        }

        let url = response.url().to_string();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Could not read error response body".to_string());
        return Err(ClientError::ApiError {
            status,
            url,
            message: body.trim().to_string(),
        });
    }

    Err(ClientError::MaxRetriesExceeded(max_retries + 1))
}

fn map_send_error(err: reqwest::Error, endpoint: &str) -> ClientError {
    if err.is_timeout() {
        ClientError::Timeout(endpoint.to_string())
    } else {
        ClientError::from(err)
    }
}
