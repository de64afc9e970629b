//! Action protocol for async TUI event handling.
//!
//! Actions represent user input, timer ticks, navigation, and the results of
//! async API calls.
//!
//! # Security Note
//!
//! When logging Actions, use `RedactedAction(&action)` instead of `?action`
//! so tokens and search terms are not written to log files.
//!
//! # What This Module Does NOT Handle
//!
//! - Action handling logic (handled by `App::update`)
//! - Async task execution (handled by the runtime module)

pub mod redaction;
pub mod variants;

pub use redaction::RedactedAction;
pub use variants::Action;

#[cfg(test)]
mod tests;
