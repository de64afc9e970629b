//! Action processing shared by the event loop and the test harness.

use tokio::sync::mpsc::Sender;

use crate::action::{Action, RedactedAction};
use crate::app::App;
use crate::runtime::side_effects::{SharedClient, TaskTracker, handle_side_effects};

/// Whether the event loop should keep running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Apply `action` and every follow-up action it produces, running side effects for each.
pub async fn process_action(
    app: &mut App,
    action: Action,
    client: &SharedClient,
    tx: &Sender<Action>,
    task_tracker: &TaskTracker,
) -> Flow {
    let mut next = Some(action);
    while let Some(action) = next.take() {
        if matches!(action, Action::Quit) {
            return Flow::Quit;
        }
        if !matches!(action, Action::Tick) {
            tracing::info!("Handling action: {:?}", RedactedAction(&action));
        }

        next = app.update(action.clone());
        handle_side_effects(action, client.clone(), tx.clone(), task_tracker.clone()).await;
    }
    Flow::Continue
}
