//! Redaction wrapper for Action logging.
//!
//! `RedactedAction` implements `Debug` so that ACL tokens, search terms, and
//! typed characters never reach log files. Always log actions through it:
//!
//! ```ignore
//! tracing::info!("Handling action: {:?}", RedactedAction(&action));
//! // Logs: Handling action: Visit(/jobs?<14 chars, hash=1f0c2a9b>)
//! ```
//!
//! Invariants:
//! - Variants carrying user-entered text are matched explicitly.
//! - Location paths are kept; query strings are replaced by length and hash.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crossterm::event::KeyCode;

use crate::action::variants::Action;
use crate::route::split_location;

/// Show only the length and a short hash, so log lines can still be correlated.
fn redact_text(text: &str) -> String {
    let mut hasher = DefaultHasher::new();
    text.hash(&mut hasher);
    let hash = hasher.finish();
    format!("<{} chars, hash={:08x}>", text.len(), hash)
}

fn redact_location(location: &str) -> String {
    let (path, query) = split_location(location);
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{path}?{}", redact_text(query))
    }
}

/// Redacted wrapper for Action that prevents sensitive payloads from being logged.
pub struct RedactedAction<'a>(pub &'a Action);

impl std::fmt::Debug for RedactedAction<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Action::Input(key) => match key.code {
                KeyCode::Char(_) => write!(f, "Input(Char(<redacted>), {:?})", key.modifiers),
                code => write!(f, "Input({:?}, {:?})", code, key.modifiers),
            },
            Action::Visit(location) => write!(f, "Visit({})", redact_location(location)),
            Action::JobsLoaded { request_id, result } => match result {
                Ok(jobs) => write!(
                    f,
                    "JobsLoaded(request_id={}, <{} jobs>)",
                    request_id,
                    jobs.len()
                ),
                Err(e) => write!(
                    f,
                    "JobsLoaded(request_id={}, <error status={:?}>)",
                    request_id,
                    e.status()
                ),
            },
            Action::SaveToken(token) => match token {
                Some(_) => write!(f, "SaveToken(<redacted>)"),
                None => write!(f, "SaveToken(None)"),
            },
            other => write!(f, "{:?}", other),
        }
    }
}
