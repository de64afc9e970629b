//! ACL token side effect handlers.

use secrecy::SecretString;
use tokio::sync::mpsc::Sender;
use tracing::info;

use super::{SharedClient, TaskTracker};
use crate::action::Action;

/// Replace the client's token. Waits for in-flight requests holding the client.
pub async fn handle_save_token(
    client: SharedClient,
    tx: Sender<Action>,
    task_tracker: TaskTracker,
    token: Option<SecretString>,
) {
    task_tracker.spawn(async move {
        let has_token = token.is_some();
        client.lock().await.set_token(token);
        info!(has_token, "ACL token updated");
        let _ = tx.send(Action::TokenSaved { has_token }).await;
    });
}
