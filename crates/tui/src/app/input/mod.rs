//! Input handlers for the TUI app.
//!
//! Responsibilities:
//! - Route key events by input mode, then by route
//! - Handle keys shared by the secondary screens
//!
//! Non-responsibilities:
//! - Does NOT apply navigation (handlers return `Action::Visit`)

pub mod components;
mod jobs;
mod tokens;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::action::Action;
use crate::app::App;
use crate::app::state::InputMode;
use crate::route::Route;

impl App {
    /// Translate a key press into an action, updating input state along the way.
    pub fn handle_input(&mut self, key: KeyEvent) -> Option<Action> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Action::Quit);
        }

        match self.input_mode {
            InputMode::Search => self.handle_search_box_input(key),
            InputMode::TokenEntry => self.handle_token_input(key),
            InputMode::Normal => match self.route {
                Route::Jobs => self.handle_jobs_input(key),
                _ => self.handle_secondary_input(key),
            },
        }
    }

    /// Detail, run-job, and not-found screens only lead back.
    fn handle_secondary_input(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => Some(self.back_to_jobs()),
            KeyCode::Char('r') => Some(self.load_jobs()),
            _ => None,
        }
    }
}
