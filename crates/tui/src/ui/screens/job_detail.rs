//! Job detail screen rendering.
//!
//! Shows the fields of the job list stub; the full job specification is not fetched.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use nomad_client::JobListStub;

use crate::jobs::EmptyState;
use crate::ui::widgets::render_empty_state;

pub fn render_job_detail(f: &mut Frame, area: Rect, id: &str, job: Option<&JobListStub>, loading: bool) {
    let Some(job) = job else {
        let empty = EmptyState {
            headline: if loading { "Loading" } else { "Job not found" },
            message: format!("No job with id \"{id}\" in the loaded list."),
        };
        render_empty_state(f, area, "Job", &empty);
        return;
    };

    let field = |label: &'static str, value: String| {
        Line::from(vec![
            Span::styled(
                format!("{label:<14}"),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::raw(value),
        ])
    };

    let lines = vec![
        field("Name", job.name.clone()),
        field("ID", job.id.clone()),
        field("Namespace", job.namespace_or_default().to_string()),
        field("Status", job.status.to_string()),
        field("Type", job.display_type().to_string()),
        field("Priority", job.priority.to_string()),
        field("Datacenters", job.datacenters.join(", ")),
        field("Task Groups", job.task_groups().join(", ")),
        field("Modify Index", job.modify_index.to_string()),
    ];

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Job: {}", job.name)),
        )
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}
