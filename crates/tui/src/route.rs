//! Application routes and location parsing.
//!
//! The location string (`/jobs?page=2`) stands in for a browser URL: the path
//! selects a [`Route`], the query string carries the jobs list state.
//!
//! Invariants:
//! - `/jobs/run` is the run-job screen, never a job with id `run`.
//! - Job ids are percent-encoded in paths and decoded when parsed.
//! - A leading [`UI_ROOT`] is accepted and stripped, so row links can be visited.

use percent_encoding::{AsciiSet, CONTROLS, percent_decode_str, utf8_percent_encode};

/// Prefix every link rendered by the UI carries.
pub const UI_ROOT: &str = "/ui";

/// Location of the jobs list with no query state.
pub const JOBS_PATH: &str = "/jobs";

/// Location of the token settings screen.
pub const TOKENS_PATH: &str = "/settings/tokens";

const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Screens the application can show.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Jobs,
    JobDetail(String),
    RunJob,
    Tokens,
    NotFound(String),
}

impl Route {
    /// Parse a location path (without query string).
    pub fn parse(path: &str) -> Self {
        let path = path.strip_prefix(UI_ROOT).unwrap_or(path);
        let trimmed = path.trim_end_matches('/');

        match trimmed {
            "" | "/jobs" => Self::Jobs,
            "/jobs/run" => Self::RunJob,
            "/settings/tokens" => Self::Tokens,
            other => match other.strip_prefix("/jobs/") {
                Some(id) if !id.is_empty() && !id.contains('/') => {
                    Self::JobDetail(percent_decode_str(id).decode_utf8_lossy().into_owned())
                }
                _ => Self::NotFound(path.to_string()),
            },
        }
    }

    /// Location path of this route.
    pub fn path(&self) -> String {
        match self {
            Self::Jobs => JOBS_PATH.to_string(),
            Self::JobDetail(id) => format!("/jobs/{}", utf8_percent_encode(id, PATH_SEGMENT)),
            Self::RunJob => "/jobs/run".to_string(),
            Self::Tokens => TOKENS_PATH.to_string(),
            Self::NotFound(path) => path.clone(),
        }
    }

    /// Link rendered in the UI, rooted at [`UI_ROOT`].
    pub fn link(&self) -> String {
        format!("{UI_ROOT}{}", self.path())
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Jobs => "Jobs",
            Self::JobDetail(_) => "Job",
            Self::RunJob => "Run Job",
            Self::Tokens => "ACL Tokens",
            Self::NotFound(_) => "Not Found",
        }
    }

    /// Routes that display data from the jobs list.
    pub fn needs_jobs(&self) -> bool {
        matches!(self, Self::Jobs | Self::JobDetail(_))
    }
}

/// Split a location into its path and query string (without `?`).
pub fn split_location(location: &str) -> (&str, &str) {
    let location = location.split('#').next().unwrap_or(location);
    match location.split_once('?') {
        Some((path, query)) => (path, query),
        None => (location, ""),
    }
}
