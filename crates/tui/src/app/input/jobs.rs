//! Jobs list input handler.
//!
//! Keys: `/` search, `t` `s` `d` `x` facets, `j`/`k` rows, `n`/`p` pages,
//! Enter opens a job (or the error remediation), `h` seeks help,
//! `R` run job, `r` refresh, `a` toggles auto-refresh.

use crossterm::event::{KeyCode, KeyEvent};

use crate::action::Action;
use crate::app::App;
use crate::app::state::InputMode;
use crate::jobs::{FacetKind, JobsListState};
use crate::route::Route;
use crate::ui::Toast;

impl App {
    pub(crate) fn handle_jobs_input(&mut self, key: KeyEvent) -> Option<Action> {
        if self.jobs.facets().open_kind().is_some() {
            return self.handle_facet_input(key);
        }

        match key.code {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('/') => {
                self.input_mode = InputMode::Search;
                None
            }
            KeyCode::Char('j') | KeyCode::Down => {
                self.jobs.select_next();
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.jobs.select_prev();
                None
            }
            KeyCode::Char('n') | KeyCode::Right | KeyCode::PageDown => {
                self.jobs.next_page();
                None
            }
            KeyCode::Char('p') | KeyCode::Left | KeyCode::PageUp => {
                self.jobs.prev_page();
                None
            }
            KeyCode::Enter => self.activate_selection(),
            KeyCode::Char('h') => self.seek_help(),
            KeyCode::Char('R') => Some(Action::Visit(Route::RunJob.path())),
            KeyCode::Char('r') => Some(Action::RefreshJobs),
            KeyCode::Char('a') => {
                self.auto_refresh = !self.auto_refresh;
                let message = if self.auto_refresh {
                    "Auto-refresh enabled"
                } else {
                    "Auto-refresh disabled"
                };
                self.toasts.push(Toast::info(message));
                None
            }
            KeyCode::Esc if !self.search_input.is_empty() => {
                self.search_input.clear();
                self.jobs.set_search("");
                None
            }
            KeyCode::Char(c) => {
                if let Some(kind) = FacetKind::from_hotkey(c) {
                    self.jobs.toggle_facet(kind);
                }
                None
            }
            _ => None,
        }
    }

    /// Keys while a facet dropdown is open.
    fn handle_facet_input(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Esc => self.jobs.close_facet(),
            KeyCode::Char('j') | KeyCode::Down => self.jobs.move_facet_cursor(1),
            KeyCode::Char('k') | KeyCode::Up => self.jobs.move_facet_cursor(-1),
            KeyCode::Char(' ') | KeyCode::Enter => {
                self.jobs.toggle_facet_cursor();
            }
            KeyCode::Char('q') => return Some(Action::Quit),
            KeyCode::Char(c) => {
                if let Some(other) = FacetKind::from_hotkey(c) {
                    self.jobs.toggle_facet(other);
                }
            }
            _ => {}
        }
        None
    }

    /// Enter on the list: open the selected job, or follow the error remediation.
    fn activate_selection(&mut self) -> Option<Action> {
        match self.jobs.state() {
            JobsListState::Loaded => self
                .jobs
                .selected_job()
                .map(|job| Action::Visit(Route::JobDetail(job.id.clone()).path())),
            JobsListState::NotAuthorized | JobsListState::Failed(_) => self.seek_help(),
            _ => None,
        }
    }

    /// Follow the remediation action of the current error panel.
    pub fn seek_help(&self) -> Option<Action> {
        self.jobs
            .state()
            .error_panel()
            .and_then(|panel| panel.action)
            .map(|action| Action::Visit(action.route.path()))
    }

    pub(crate) fn handle_search_box_input(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Down => {
                self.input_mode = InputMode::Normal;
            }
            _ => {
                self.search_input.handle_key(key);
                self.jobs.set_search(self.search_input.value());
            }
        }
        None
    }
}
