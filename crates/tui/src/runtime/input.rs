//! Terminal input forwarding.
//!
//! Key presses and resizes from the crossterm event stream become actions on
//! the main loop's channel. The task runs outside the side-effect
//! `TaskTracker`: it blocks on the terminal until the next event, so shutdown
//! aborts it through its handle instead of waiting on it.

use std::io;

use crossterm::event::{Event, KeyEventKind};
use futures_util::{Stream, StreamExt};
use tokio::sync::mpsc::Sender;
use tokio::task::JoinHandle;

use crate::action::Action;

/// Map a terminal event to an action. Key releases and mouse events are ignored.
pub fn event_to_action(event: Event) -> Option<Action> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => Some(Action::Input(key)),
        Event::Resize(width, height) => Some(Action::Resize(width, height)),
        _ => None,
    }
}

/// Forward `events` to `tx` until the stream ends, fails, or the channel closes.
pub async fn forward_events<S>(mut events: S, tx: Sender<Action>)
where
    S: Stream<Item = io::Result<Event>> + Unpin,
{
    while let Some(event_result) = events.next().await {
        let event = match event_result {
            Ok(event) => event,
            Err(e) => {
                tracing::error!(error = %e, "Terminal event stream failed");
                break;
            }
        };
        let Some(action) = event_to_action(event) else {
            continue;
        };
        if tx.send(action).await.is_err() {
            break;
        }
    }
}

/// Spawn the forwarding task. Abort the returned handle on shutdown.
pub fn spawn_input_task<S>(events: S, tx: Sender<Action>) -> JoinHandle<()>
where
    S: Stream<Item = io::Result<Event>> + Unpin + Send + 'static,
{
    tokio::spawn(forward_events(events, tx))
}
