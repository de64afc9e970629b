//! Run job screen rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    widgets::{Block, Borders, Paragraph, Wrap},
};

pub fn render_run_job(f: &mut Frame, area: Rect) {
    let text = "Submitting job specifications is not supported from the terminal yet.\n\n\
                Use `nomad job run <file>` and press Esc to return to the jobs list.";
    let paragraph = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title("Run Job"))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}
