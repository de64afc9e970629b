//! ACL token settings screen rendering.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Configuration for rendering the token screen.
pub struct TokensRenderConfig<'a> {
    /// Length of the token typed so far; the value itself is never drawn.
    pub input_len: usize,
    /// Cursor position within the masked input
    pub cursor: usize,
    pub has_token: bool,
    pub address: &'a str,
}

pub fn render_tokens(f: &mut Frame, area: Rect, config: TokensRenderConfig) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let status = if config.has_token {
        "A token is currently set for this session."
    } else {
        "No token is set; requests are anonymous."
    };
    let intro = Paragraph::new(format!(
        "Paste the Secret ID of an ACL token for {}.\n{status}",
        config.address
    ))
    .block(Block::default().borders(Borders::ALL).title("ACL Tokens"))
    .wrap(Wrap { trim: true });
    f.render_widget(intro, chunks[0]);

    let masked = "*".repeat(config.input_len);
    let input = Paragraph::new(masked).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title("Secret ID"),
    );
    f.render_widget(input, chunks[1]);

    let x = chunks[1].x + 1 + config.cursor as u16;
    f.set_cursor_position((x.min(chunks[1].right().saturating_sub(2)), chunks[1].y + 1));

    let help = Paragraph::new("Enter: save and return to jobs   Enter on empty input: clear token   Esc: cancel")
        .style(Style::default().fg(Color::DarkGray))
        .wrap(Wrap { trim: true });
    f.render_widget(help, chunks[2]);
}
