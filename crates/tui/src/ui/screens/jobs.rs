//! Jobs list screen rendering.
//!
//! Renders the search box, the facet bar (with the open facet's dropdown),
//! and then either the jobs table, an empty state, or an error panel.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Clear, List, ListItem, Paragraph, Row, Table, TableState};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
};

use nomad_client::JobStatus;

use crate::jobs::{FacetKind, JobListView, JobsListState};
use crate::ui::widgets::{render_empty_state, render_error_panel};

/// Configuration for rendering the jobs screen.
pub struct JobsRenderConfig<'a> {
    pub view: &'a JobListView,
    /// Current search box text
    pub search_input: &'a str,
    /// Cursor position in the search box (characters)
    pub search_cursor: usize,
    /// Whether the search box has focus
    pub is_searching: bool,
    pub auto_refresh: bool,
}

/// Render the jobs screen.
pub fn render_jobs(f: &mut Frame, area: Rect, config: JobsRenderConfig) {
    let JobsRenderConfig {
        view,
        search_input,
        search_cursor,
        is_searching,
        auto_refresh,
    } = config;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    render_search_box(f, chunks[0], search_input, search_cursor, is_searching);
    render_facet_bar(f, chunks[1], view);

    let title = if auto_refresh { "Jobs [AUTO]" } else { "Jobs" };
    let state = view.state();
    if let Some(panel) = state.error_panel() {
        render_error_panel(f, chunks[2], &panel);
    } else if let Some(empty) = state.empty_state() {
        render_empty_state(f, chunks[2], title, &empty);
    } else if state == JobsListState::Loading {
        let loading = Paragraph::new("Loading jobs...")
            .block(Block::default().borders(Borders::ALL).title(title))
            .alignment(Alignment::Center);
        f.render_widget(loading, chunks[2]);
    } else {
        render_table(f, chunks[2], view, title);
    }

    if let Some(summary) = view.page_summary() {
        let footer = Paragraph::new(format!(
            "{summary}   page {}/{}",
            view.current_page(),
            view.page_count()
        ))
        .alignment(Alignment::Right)
        .style(Style::default().fg(Color::DarkGray));
        f.render_widget(footer, chunks[3]);
    }

    if let Some(kind) = view.facets().open_kind() {
        render_facet_dropdown(f, chunks[1], chunks[2], view, kind);
    }
}

fn render_search_box(
    f: &mut Frame,
    area: Rect,
    input: &str,
    cursor: usize,
    is_searching: bool,
) {
    let (text, style) = if input.is_empty() && !is_searching {
        (
            "Search jobs... (press /)".to_string(),
            Style::default().fg(Color::DarkGray),
        )
    } else {
        (input.to_string(), Style::default())
    };
    let border = if is_searching {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };

    let search = Paragraph::new(text).style(style).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title("Search"),
    );
    f.render_widget(search, area);

    if is_searching {
        let x = area.x + 1 + cursor as u16;
        f.set_cursor_position((x.min(area.right().saturating_sub(2)), area.y + 1));
    }
}

fn render_facet_bar(f: &mut Frame, area: Rect, view: &JobListView) {
    let mut spans = Vec::new();
    for kind in FacetKind::ALL {
        let selected = view.query().selection(kind).len();
        let open = view.facets().is_open(kind);
        let label = if selected > 0 {
            format!(" {} ({}) [{}] ", kind.label(), kind.hotkey(), selected)
        } else {
            format!(" {} ({}) ", kind.label(), kind.hotkey())
        };
        let style = match (open, selected > 0) {
            (true, _) => Style::default().fg(Color::Black).bg(Color::Yellow),
            (false, true) => Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            (false, false) => Style::default(),
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" "));
    }

    let bar = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title("Filters"));
    f.render_widget(bar, area);
}

fn render_facet_dropdown(f: &mut Frame, bar: Rect, body: Rect, view: &JobListView, kind: FacetKind) {
    let options = view.options(kind);
    let items: Vec<ListItem> = if options.is_empty() {
        vec![ListItem::new(Span::styled(
            "No options",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        options
            .iter()
            .enumerate()
            .map(|(idx, option)| {
                let mark = if view.query().is_selected(kind, &option.key) {
                    "[x]"
                } else {
                    "[ ]"
                };
                let style = if idx == view.facets().cursor() {
                    Style::default().bg(Color::DarkGray).fg(Color::Yellow)
                } else {
                    Style::default()
                };
                ListItem::new(format!("{mark} {}", option.label)).style(style)
            })
            .collect()
    };

    let width = options
        .iter()
        .map(|o| o.label.chars().count() as u16 + 6)
        .max()
        .unwrap_or(12)
        .max(kind.label().len() as u16 + 4)
        .min(body.width);
    let height = (items.len() as u16 + 2).min(body.height);
    let offset: u16 = FacetKind::ALL
        .iter()
        .take_while(|k| **k != kind)
        .map(|k| k.label().len() as u16 + 7)
        .sum();
    let x = (bar.x + 1 + offset).min(body.right().saturating_sub(width));

    let area = Rect {
        x,
        y: body.y,
        width,
        height,
    };
    f.render_widget(Clear, area);
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(kind.label()),
    );
    f.render_widget(list, area);
}

fn render_table(f: &mut Frame, area: Rect, view: &JobListView, title: &str) {
    let header = Row::new(vec!["Name", "Status", "Type", "Priority", "Groups"])
        .style(Style::default().fg(Color::Cyan));

    let rows: Vec<Row> = view
        .rows()
        .into_iter()
        .map(|row| {
            Row::new(vec![
                Cell::from(row.name),
                Cell::from(row.status.as_str()).style(status_style(row.status)),
                Cell::from(row.job_type),
                Cell::from(row.priority.to_string()),
                Cell::from(row.task_groups.to_string()),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Min(20),
            Constraint::Length(10),
            Constraint::Length(14),
            Constraint::Length(9),
            Constraint::Length(7),
        ],
    )
    .header(header)
    .block(Block::default().title(title).borders(Borders::ALL))
    .row_highlight_style(Style::default().bg(Color::DarkGray).fg(Color::Yellow))
    .column_spacing(1);

    let mut state = TableState::default().with_selected(Some(view.selected()));
    f.render_stateful_widget(table, area, &mut state);
}

fn status_style(status: JobStatus) -> Style {
    match status {
        JobStatus::Running => Style::default().fg(Color::Green),
        JobStatus::Pending => Style::default().fg(Color::Yellow),
        JobStatus::Dead => Style::default().fg(Color::DarkGray),
        JobStatus::Unknown => Style::default(),
    }
}
