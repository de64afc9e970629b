//! Empty and error state resolution for the jobs list.

use crate::route::Route;

/// What the jobs list body shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobsListState {
    /// No response yet.
    Loading,
    /// At least one row to show.
    Loaded,
    /// The namespace has no jobs at all.
    NoJobs,
    /// Jobs exist but none pass the search and facets.
    NoMatches { search: Option<String> },
    /// The list request was refused with a 403.
    NotAuthorized,
    /// Any other request failure.
    Failed(String),
}

/// Headline and message of an empty list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub headline: &'static str,
    pub message: String,
}

/// Remediation offered by an error panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorAction {
    pub label: &'static str,
    pub route: Route,
}

/// Error panel shown in place of the rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorPanel {
    pub title: &'static str,
    pub message: String,
    pub action: Option<ErrorAction>,
}

impl JobsListState {
    pub fn empty_state(&self) -> Option<EmptyState> {
        match self {
            Self::NoJobs => Some(EmptyState {
                headline: "No Jobs",
                message: "The cluster is currently empty.".to_string(),
            }),
            Self::NoMatches { search: Some(term) } => Some(EmptyState {
                headline: "No Matches",
                message: format!("No jobs match the term \"{term}\"."),
            }),
            Self::NoMatches { search: None } => Some(EmptyState {
                headline: "No Matches",
                message: "No jobs match your current filter selection.".to_string(),
            }),
            _ => None,
        }
    }

    pub fn error_panel(&self) -> Option<ErrorPanel> {
        match self {
            Self::NotAuthorized => Some(ErrorPanel {
                title: "Not Authorized",
                message: "Your ACL token does not provide the required permissions to list jobs. \
                          Contact your administrator if this is an error."
                    .to_string(),
                action: Some(ErrorAction {
                    label: "ACL Tokens",
                    route: Route::Tokens,
                }),
            }),
            Self::Failed(message) => Some(ErrorPanel {
                title: "Error",
                message: message.clone(),
                action: None,
            }),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::NoJobs | Self::NoMatches { .. })
    }
}
