//! Empty state and error panel widgets.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::jobs::{EmptyState, ErrorPanel};

/// Render an empty state: a bold headline over a centered message.
///
/// ```rust,ignore
/// render_empty_state(f, area, "Jobs", &JobsListState::NoJobs.empty_state().unwrap());
/// // Displays: "No Jobs" / "The cluster is currently empty."
/// ```
pub fn render_empty_state(f: &mut Frame, area: Rect, title: &str, empty: &EmptyState) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            empty.headline,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(empty.message.as_str()),
    ];
    let placeholder = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(title))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(placeholder, area);
}

/// Render an error panel in place of a table, with its remediation hint.
pub fn render_error_panel(f: &mut Frame, area: Rect, panel: &ErrorPanel) {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            panel.title,
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(panel.message.as_str()),
    ];
    if let Some(action) = &panel.action {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled(
                format!("[Enter] {}", action.label),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", action.route.link()),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red))
                .title(panel.title),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}
