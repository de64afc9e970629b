//! Single-line text input built on tui-input.
//!
//! Used by the jobs search box and the ACL token field.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tui_input::{Input, InputRequest};

/// Single-line input with cursor movement and readline-style shortcuts.
#[derive(Debug, Clone, Default)]
pub struct SingleLineInput {
    input: Input,
}

impl SingleLineInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle key event using the InputRequest pattern.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            let req = match key.code {
                KeyCode::Left => Some(InputRequest::GoToPrevWord),
                KeyCode::Right => Some(InputRequest::GoToNextWord),
                // Ctrl+U: clear the line
                KeyCode::Char('u') => Some(InputRequest::DeleteLine),
                // Ctrl+W: delete the previous word
                KeyCode::Char('w') => Some(InputRequest::DeletePrevWord),
                KeyCode::Char('a') => Some(InputRequest::GoToStart),
                KeyCode::Char('e') => Some(InputRequest::GoToEnd),
                _ => None,
            };
            if let Some(r) = req {
                self.input.handle(r);
            }
            return;
        }

        let req = match key.code {
            KeyCode::Char(c) => Some(InputRequest::InsertChar(c)),
            KeyCode::Backspace => Some(InputRequest::DeletePrevChar),
            KeyCode::Delete => Some(InputRequest::DeleteNextChar),
            KeyCode::Left => Some(InputRequest::GoToPrevChar),
            KeyCode::Right => Some(InputRequest::GoToNextChar),
            KeyCode::Home => Some(InputRequest::GoToStart),
            KeyCode::End => Some(InputRequest::GoToEnd),
            _ => None,
        };

        if let Some(r) = req {
            self.input.handle(r);
        }
    }

    pub fn value(&self) -> &str {
        self.input.value()
    }

    /// Replace the value, leaving the cursor at the end.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.input = Input::new(value.into());
    }

    pub fn is_empty(&self) -> bool {
        self.input.value().is_empty()
    }

    /// Cursor position (character index).
    pub fn cursor_position(&self) -> usize {
        self.input.cursor()
    }

    pub fn clear(&mut self) {
        self.input = Input::default();
    }

    /// Length of the value in characters.
    pub fn len(&self) -> usize {
        self.input.value().chars().count()
    }
}
