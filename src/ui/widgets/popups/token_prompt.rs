use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::constants::{TOKEN_DOCS_URL, TOKEN_PROMPT_TITLE};

/// Render the token entry popup. The input is echoed masked.
pub fn render_token_prompt(frame: &mut Frame, input: &str) {
    let area = centered_rect(70, 9, frame.area());

    // Clear the area
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", TOKEN_PROMPT_TITLE))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Layout for docs hint, input, and key help
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Docs hint
            Constraint::Length(1), // Spacing
            Constraint::Length(1), // Input
            Constraint::Min(1),    // Key help
        ])
        .split(inner);

    let hint = Paragraph::new(format!("Create one at {}", TOKEN_DOCS_URL))
        .style(Style::default().fg(Color::DarkGray))
        .wrap(Wrap { trim: true });
    frame.render_widget(hint, chunks[0]);

    // Ghost text while empty, masked echo once typing starts
    let input_text = if input.is_empty() {
        Paragraph::new("Paste your token").style(Style::default().fg(Color::DarkGray))
    } else {
        Paragraph::new("•".repeat(input.chars().count())).style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    };
    frame.render_widget(input_text, chunks[2]);

    let keys =
        Paragraph::new("Enter: save  |  Esc: cancel").style(Style::default().fg(Color::Gray));
    frame.render_widget(keys, chunks[3]);
}

/// Create a centered rect with percentage width and fixed height
fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
