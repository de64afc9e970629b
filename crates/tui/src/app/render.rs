//! Rendering logic for the TUI app.
//!
//! Responsibilities:
//! - Render the main layout (header, content, footer)
//! - Dispatch to route-specific renderers
//!
//! Non-responsibilities:
//! - Does NOT handle input
//! - Does NOT mutate app state

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::app::state::{FOOTER_HEIGHT, HEADER_HEIGHT, InputMode};
use crate::jobs::EmptyState;
use crate::route::{Route, UI_ROOT};
use crate::ui::screens::job_detail::render_job_detail;
use crate::ui::screens::jobs::{JobsRenderConfig, render_jobs};
use crate::ui::screens::run_job::render_run_job;
use crate::ui::screens::tokens::{TokensRenderConfig, render_tokens};
use crate::ui::toast::render_toasts;
use crate::ui::widgets::render_empty_state;

impl App {
    /// Render the application UI.
    pub fn render(&self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(FOOTER_HEIGHT),
            ])
            .split(f.area());

        self.render_header(f, chunks[0]);

        match &self.route {
            Route::Jobs => render_jobs(
                f,
                chunks[1],
                JobsRenderConfig {
                    view: &self.jobs,
                    search_input: self.search_input.value(),
                    search_cursor: self.search_input.cursor_position(),
                    is_searching: self.input_mode == InputMode::Search,
                    auto_refresh: self.auto_refresh,
                },
            ),
            Route::JobDetail(id) => {
                render_job_detail(f, chunks[1], id, self.jobs.job(id), self.loading)
            }
            Route::RunJob => render_run_job(f, chunks[1]),
            Route::Tokens => render_tokens(
                f,
                chunks[1],
                TokensRenderConfig {
                    input_len: self.token_input.len(),
                    cursor: self.token_input.cursor_position(),
                    has_token: self.connection.has_token,
                    address: &self.connection.address,
                },
            ),
            Route::NotFound(path) => render_empty_state(
                f,
                chunks[1],
                "Not Found",
                &EmptyState {
                    headline: "Page not found",
                    message: format!("Nothing lives at {path}. Press Esc to return to jobs."),
                },
            ),
        }

        self.render_footer(f, chunks[2]);
        render_toasts(f, &self.toasts);
    }

    fn render_header(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let token = if self.connection.has_token {
            Span::styled("token: set", Style::default().fg(Color::Green))
        } else {
            Span::styled("token: anonymous", Style::default().fg(Color::DarkGray))
        };
        let mut first = vec![
            Span::styled(
                "Nomad",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(" | {} | ", self.route.title())),
            Span::raw(format!("{} | ns: {} | ", self.connection.address, self.jobs.namespace())),
            token,
        ];
        if self.loading {
            first.push(Span::styled(" | loading...", Style::default().fg(Color::Yellow)));
        }
        let location = Line::from(vec![
            Span::styled("location: ", Style::default().fg(Color::DarkGray)),
            Span::raw(format!("{UI_ROOT}{}", self.current_url())),
        ]);

        let header = Paragraph::new(vec![Line::from(first), location])
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(header, area);
    }

    fn render_footer(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let hints = match (&self.route, self.input_mode) {
            (_, InputMode::Search) => "Type to search | Enter/Esc: done | Ctrl+U: clear",
            (_, InputMode::TokenEntry) => "Enter: save | Esc: cancel",
            (Route::Jobs, _) if self.jobs.facets().open_kind().is_some() => {
                "j/k: move | Space: toggle | t/s/d/x: switch facet | Esc: close"
            }
            (Route::Jobs, _) => {
                "/: search | t/s/d/x: facets | j/k: select | Enter: open | n/p: page | R: run job | r: refresh | a: auto | q: quit"
            }
            _ => "Esc: back to jobs | r: refresh | q: quit",
        };
        let footer = Paragraph::new(hints)
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(footer, area);
    }
}
