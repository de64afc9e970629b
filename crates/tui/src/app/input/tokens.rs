//! ACL token entry input handler.

use crossterm::event::{KeyCode, KeyEvent};
use secrecy::SecretString;

use crate::action::Action;
use crate::app::App;
use crate::app::state::InputMode;

impl App {
    pub(crate) fn handle_token_input(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Esc => {
                self.token_input.clear();
                self.input_mode = InputMode::Normal;
                Some(self.back_to_jobs())
            }
            KeyCode::Enter => {
                let value = self.token_input.value().trim().to_string();
                self.token_input.clear();
                let token = (!value.is_empty()).then(|| SecretString::new(value.into()));
                Some(Action::SaveToken(token))
            }
            _ => {
                self.token_input.handle_key(key);
                None
            }
        }
    }
}
