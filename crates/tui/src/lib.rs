//! Nomad TUI Library
//!
//! This library provides the application logic, state management,
//! and UI components for a terminal jobs list of a Nomad cluster.
//!
//! # Example
//!
//! ```rust
//! use nomad_tui::{App, Action};
//! use nomad_config::Config;
//! use crossterm::event::KeyEvent;
//!
//! let mut app = App::new(&Config::with_address("http://127.0.0.1:4646"));
//! if let Some(action) = app.handle_input(KeyEvent::from(crossterm::event::KeyCode::Char('q'))) {
//!     assert!(matches!(action, Action::Quit));
//! }
//! ```

pub mod action;
pub mod app;
pub mod cli;
pub mod jobs;
pub mod route;
pub mod runtime;
pub mod ui;

// Re-export commonly used types at the crate root
pub use action::Action;
pub use app::{App, FOOTER_HEIGHT, HEADER_HEIGHT};
pub use route::Route;
pub use ui::toast::{Toast, ToastLevel};
