//! Jobs side effect handlers.

use std::sync::Arc;

use tokio::sync::mpsc::Sender;
use tracing::{debug, warn};

use super::{SharedClient, TaskTracker};
use crate::action::Action;

/// Fetch the jobs list for `namespace` and report it as `JobsLoaded`.
pub async fn handle_load_jobs(
    client: SharedClient,
    tx: Sender<Action>,
    task_tracker: TaskTracker,
    namespace: String,
    request_id: u64,
) {
    task_tracker.spawn(async move {
        let result = {
            let client = client.lock().await;
            client.list_jobs(Some(&namespace)).await
        };
        let result = match result {
            Ok(jobs) => {
                debug!(request_id, count = jobs.len(), "Jobs loaded");
                Ok(jobs)
            }
            Err(e) => {
                warn!(request_id, error = %e, "Failed to load jobs");
                Err(Arc::new(e))
            }
        };
        let _ = tx.send(Action::JobsLoaded { request_id, result }).await;
    });
}
