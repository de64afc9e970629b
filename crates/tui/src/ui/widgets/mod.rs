//! Reusable widgets shared across screens.

pub mod empty;

pub use empty::{render_empty_state, render_error_panel};
