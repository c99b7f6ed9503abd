use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

pub fn render_help_popup(f: &mut Frame) {
    let help_text = help_lines();
    let area = popup_area(f.area(), &help_text);

    f.render_widget(Clear, area);

    let paragraph = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .alignment(Alignment::Left);

    f.render_widget(paragraph, area);
}

fn help_lines() -> Vec<Line<'static>> {
    vec![
        Line::from(vec![Span::styled(
            "ACTIONS",
            Style::default().add_modifier(Modifier::BOLD).fg(Color::Yellow),
        )]),
        Line::from(""),
        Line::from("  Enter / Space      Save your date (fires the dispatch)"),
        Line::from("  f                  Forget the stored token"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "APPLICATION",
            Style::default().add_modifier(Modifier::BOLD).fg(Color::Yellow),
        )]),
        Line::from(""),
        Line::from("  ? / F1             Toggle this help"),
        Line::from("  q / Ctrl-c         Quit"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press Esc or ? to close",
            Style::default().fg(Color::Gray),
        )]),
    ]
}

// Size the popup to its content so the binding lines neither wrap nor
// clip at the minimum supported terminal size
fn popup_area(frame: Rect, lines: &[Line]) -> Rect {
    let content_width = lines.iter().map(Line::width).max().unwrap_or(0) as u16;
    let width = (content_width + 2).min(frame.width);
    let height = (lines.len() as u16 + 2).min(frame.height);

    Rect {
        x: frame.x + (frame.width.saturating_sub(width)) / 2,
        y: frame.y + (frame.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{MIN_TERMINAL_HEIGHT, MIN_TERMINAL_WIDTH};

    #[test]
    fn test_popup_fits_minimum_terminal() {
        let frame = Rect::new(0, 0, MIN_TERMINAL_WIDTH, MIN_TERMINAL_HEIGHT);
        let lines = help_lines();

        let area = popup_area(frame, &lines);

        // Inner width holds the longest line, inner height holds them all
        let longest = lines.iter().map(Line::width).max().unwrap_or(0) as u16;
        assert!(area.width >= longest + 2);
        assert_eq!(area.height, lines.len() as u16 + 2);
        assert!(area.right() <= frame.right());
        assert!(area.bottom() <= frame.bottom());
    }
}
