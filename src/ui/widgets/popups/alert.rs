use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::types::{AlertKind, AlertState};

/// Render the blocking alert popup for dispatch results and validation
/// failures
pub fn render_alert_popup(f: &mut Frame, alert: &AlertState) {
    // Calculate popup size (50% width, enough for title, message, OK)
    let popup_width = (f.area().width as f32 * 0.5) as u16;
    let popup_height = 7;

    let popup_x = (f.area().width.saturating_sub(popup_width)) / 2;
    let popup_y = (f.area().height.saturating_sub(popup_height)) / 2;

    let popup_area = Rect {
        x: popup_x,
        y: popup_y,
        width: popup_width,
        height: popup_height,
    };

    // Clear the area behind the popup
    f.render_widget(Clear, popup_area);

    let (title, color) = match alert.kind {
        AlertKind::Success => (" Success ", Color::Green),
        AlertKind::Error => (" Error ", Color::Red),
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    let inner_area = block.inner(popup_area);
    f.render_widget(block, popup_area);

    // Split inner area into message and button sections
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Message
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Button
        ])
        .split(inner_area);

    let message = Paragraph::new(alert.message.as_str())
        .style(Style::default().fg(color))
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Center);
    f.render_widget(message, chunks[0]);

    let button_text = Line::from(vec![Span::styled(
        "[OK]",
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    )]);
    let button = Paragraph::new(button_text).alignment(Alignment::Center);
    f.render_widget(button, chunks[2]);
}
