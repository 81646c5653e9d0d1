//! Layout components (header, status bar)

use crate::app::App;
use crate::state::FormSlot;
use chrono::{DateTime, Local};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Split the screen into header, main content and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Header
            Constraint::Min(0),    // Form
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Draw the title and the live clock
pub fn draw_header(frame: &mut Frame, area: Rect, now: DateTime<Local>) {
    let lines = vec![
        Line::from(Span::styled(
            "Production Data Input",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled("◷ ", Style::default().fg(Color::Cyan)),
            Span::styled(
                now.format("%Y-%m-%d %H:%M:%S").to_string(),
                Style::default().fg(Color::Gray),
            ),
        ]),
    ];

    let header = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, area);
}

/// Key hints for the focused slot
pub fn get_slot_hints(slot: FormSlot) -> &'static str {
    if slot == FormSlot::Actions {
        " ↑↓: select  Enter: activate  Tab: fields"
    } else if slot.is_select() {
        " ←→: choose  Tab: next"
    } else {
        " 0-9 . -: type  Backspace: delete  Tab: next"
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        get_slot_hints(app.state.active_slot),
        Style::default().fg(Color::Black),
    )];

    spans.push(Span::raw(" | "));
    spans.push(Span::styled(
        format!("{}: submit", crate::platform::SUBMIT_SHORTCUT),
        Style::default().fg(Color::Black),
    ));

    if let Some(msg) = &app.status_message {
        let color = if app.engine.errors().is_empty() {
            Color::Green
        } else {
            Color::Red
        };
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            msg.as_str(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    // Required-field note and quit hint on the right
    let right = " * required  ^C:quit ";
    let right_width = right.chars().count() as u16;
    if area.width > right_width {
        let right_area = Rect {
            x: area.x + area.width - right_width,
            y: area.y,
            width: right_width,
            height: 1,
        };
        let hint = Paragraph::new(Span::styled(right, Style::default().fg(Color::Yellow)))
            .style(Style::default().bg(Color::DarkGray));
        frame.render_widget(hint, right_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_reserves_header_and_status() {
        let (header, main, status) = create_layout(Rect::new(0, 0, 100, 40));
        assert_eq!(header.height, 4);
        assert_eq!(status.height, 1);
        assert_eq!(status.y, 39);
        assert_eq!(main.height, 35);
    }

    #[test]
    fn test_hints_follow_slot_kind() {
        assert!(get_slot_hints(FormSlot::Operation).contains("choose"));
        assert!(get_slot_hints(FormSlot::Production).contains("type"));
        assert!(get_slot_hints(FormSlot::Actions).contains("activate"));
    }
}
