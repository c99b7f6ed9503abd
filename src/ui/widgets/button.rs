//! The trigger button and forget-token line

use crate::app::AppState;
use crate::constants::{FORGET_LABEL, SPINNER_INTERVAL_MS, TRIGGER_LABEL};
use crate::types::DispatchState;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use std::time::Instant;

/// Braille dots spinner shown inside the button while dispatching
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

fn spinner_frame(started: Instant) -> &'static str {
    let elapsed_ms = started.elapsed().as_millis();
    let idx = (elapsed_ms / SPINNER_INTERVAL_MS as u128) as usize % SPINNER_FRAMES.len();
    SPINNER_FRAMES[idx]
}

/// Render the trigger button centered in the content area, with the
/// forget-token line underneath while a token is stored
pub fn render_button(f: &mut Frame, app: &AppState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(3), // Button
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Forget line
            Constraint::Min(0),
        ])
        .split(area);

    render_trigger(f, app, chunks[1]);

    if app.has_token {
        render_forget_line(f, chunks[3]);
    }
}

fn render_trigger(f: &mut Frame, app: &AppState, area: Rect) {
    let (text, text_style, border_style) = match app.dispatch_state {
        DispatchState::Loading { started } => (
            format!("{} Dispatching...", spinner_frame(started)),
            Style::default().fg(Color::DarkGray),
            Style::default().fg(Color::DarkGray),
        ),
        DispatchState::Idle => (
            TRIGGER_LABEL.to_string(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            Style::default().fg(Color::Red),
        ),
    };

    let button_area = centered_fixed(text.chars().count() as u16 + 8, area);

    let button = Paragraph::new(text)
        .style(text_style)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style),
        );

    f.render_widget(button, button_area);
}

fn render_forget_line(f: &mut Frame, area: Rect) {
    let line = Paragraph::new(format!("[f] {}", FORGET_LABEL))
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);

    f.render_widget(line, area);
}

// Center a fixed-width rect horizontally within the given area
fn centered_fixed(width: u16, area: Rect) -> Rect {
    let width = width.min(area.width);

    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y,
        width,
        height: area.height,
    }
}
