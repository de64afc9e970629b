//! UI rendering modules for the TUI.

pub mod screens;
pub mod toast;
pub mod widgets;

pub use toast::{Toast, ToastLevel};
