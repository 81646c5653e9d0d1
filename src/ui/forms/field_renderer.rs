//! Field rendering utilities for forms

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows taken by one field: bordered box plus an error line
pub const FIELD_HEIGHT: u16 = 4;

/// How a field is edited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Cycled with Left/Right; `placeholder` shows while unset
    Select { placeholder: &'static str },
    /// Typed text
    Number,
}

/// Text shown inside the field box
pub fn display_value(value: &str, kind: FieldKind, is_active: bool) -> String {
    match kind {
        FieldKind::Select { placeholder } => {
            let shown = if value.is_empty() { placeholder } else { value };
            if is_active {
                format!("◂ {shown} ▸")
            } else {
                shown.to_string()
            }
        }
        FieldKind::Number => value.to_string(),
    }
}

/// Draw a labelled field with its error message underneath
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    kind: FieldKind,
    is_active: bool,
    error: Option<&str>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1)])
        .split(area);

    let has_error = error.is_some_and(|e| !e.is_empty());
    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else if has_error {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let text = display_value(value, kind, is_active);
    let value_style = match kind {
        FieldKind::Select { .. } if value.is_empty() => Style::default().fg(Color::DarkGray),
        _ if is_active => Style::default().fg(Color::Cyan),
        _ => Style::default(),
    };

    let mut spans = vec![Span::styled(text, value_style)];
    if is_active && kind == FieldKind::Number {
        spans.push(Span::styled("▌", Style::default().fg(Color::Cyan)));
    }

    let block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), chunks[0]);

    if let Some(message) = error.filter(|e| !e.is_empty()) {
        let line = Paragraph::new(Span::styled(
            format!(" {message}"),
            Style::default().fg(Color::Red).add_modifier(Modifier::ITALIC),
        ));
        frame.render_widget(line, chunks[1]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SELECT: FieldKind = FieldKind::Select {
        placeholder: "Select Operation",
    };

    #[test]
    fn test_unset_select_shows_placeholder() {
        assert_eq!(display_value("", SELECT, false), "Select Operation");
    }

    #[test]
    fn test_active_select_shows_arrows() {
        assert_eq!(display_value("Spring", SELECT, true), "◂ Spring ▸");
    }

    #[test]
    fn test_number_shows_raw_text() {
        assert_eq!(display_value("12.", FieldKind::Number, true), "12.");
    }
}
