use crate::app::AppState;
use crate::types::UiMode;
use crate::ui::widgets;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::Paragraph,
};

pub fn render(f: &mut Frame, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Titlebar
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Statusbar
        ])
        .split(f.area());

    render_titlebar(f, chunks[0]);
    widgets::button::render_button(f, app, chunks[1]);
    render_statusbar(f, app, chunks[2]);

    // Popups draw over the base layer
    match &app.ui_mode {
        UiMode::TokenPrompt => {
            widgets::popups::token_prompt::render_token_prompt(f, &app.input_buffer);
        }
        UiMode::Alert(alert) => {
            widgets::popups::alert::render_alert_popup(f, alert);
        }
        UiMode::Help => {
            widgets::popups::help::render_help_popup(f);
        }
        UiMode::Normal => {}
    }
}

fn render_titlebar(f: &mut Frame, area: Rect) {
    let title = Paragraph::new("plunger")
        .style(Style::default().fg(Color::White).bg(Color::DarkGray))
        .alignment(ratatui::layout::Alignment::Center);

    f.render_widget(title, area);
}

fn render_statusbar(f: &mut Frame, app: &AppState, area: Rect) {
    let status_text = if app.dispatch_state.is_loading() {
        "Dispatching to GitHub...".to_string()
    } else {
        let mut hints = vec!["Enter/Space: save your date"];
        if app.has_token {
            hints.push("f: forget token");
        }
        hints.push("?: help");
        hints.push("q: quit");
        hints.join("  |  ")
    };

    let status =
        Paragraph::new(status_text).style(Style::default().fg(Color::White).bg(Color::DarkGray));

    f.render_widget(status, area);
}
