//! Async side effect handlers for TUI actions.
//!
//! Responsibilities:
//! - Perform the API calls actions ask for, in tracked background tasks.
//! - Send results back via the action channel for state updates.
//!
//! Does NOT handle:
//! - Direct application state modification (sends actions to do that).
//! - UI rendering or terminal management.
//!
//! Invariants:
//! - All API calls are spawned onto the `TaskTracker`.
//! - Results are always sent back via the action channel.
//! - All API calls share one client behind a mutex, so they are serialized.

mod jobs;
mod tokens;

use std::sync::Arc;
use std::time::Instant;

use nomad_client::NomadClient;
use tokio::sync::{Mutex, mpsc::Sender};
use tracing::{Instrument, info_span};

use crate::action::Action;

pub use tokio_util::task::TaskTracker;

/// Shared client handle for async tasks.
///
/// The mutex is needed because replacing the ACL token takes `&mut self`.
pub type SharedClient = Arc<Mutex<NomadClient>>;

/// Handle side effects (async API calls) for actions.
pub async fn handle_side_effects(
    action: Action,
    client: SharedClient,
    tx: Sender<Action>,
    task_tracker: TaskTracker,
) {
    let Some(action_name) = action_type_name(&action) else {
        return;
    };
    let start = Instant::now();

    let span = info_span!(
        "tui.handle_action",
        action_type = action_name,
        duration_ms = tracing::field::Empty,
    );

    async move {
        match action {
            Action::LoadJobs {
                namespace,
                request_id,
            } => jobs::handle_load_jobs(client, tx, task_tracker, namespace, request_id).await,
            Action::SaveToken(token) => {
                tokens::handle_save_token(client, tx, task_tracker, token).await
            }
            _ => {}
        }

        let duration = start.elapsed().as_millis() as i64;
        tracing::Span::current().record("duration_ms", duration);
    }
    .instrument(span)
    .await;
}

/// Name of actions that have side effects; `None` for pure state changes.
fn action_type_name(action: &Action) -> Option<&'static str> {
    match action {
        Action::LoadJobs { .. } => Some("LoadJobs"),
        Action::SaveToken(_) => Some("SaveToken"),
        _ => None,
    }
}
