//! Error dialog component

use super::base::{render_dialog, DialogConfig};
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

/// Dialog title; counts the backlog when more than one error is queued
fn error_title(queued: usize) -> String {
    if queued > 1 {
        format!("Error (1 of {queued})")
    } else {
        "Error".to_string()
    }
}

/// Render the oldest of `queued` errors centered on the screen
pub fn render_error_dialog(frame: &mut Frame, error_message: &str, queued: usize) {
    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let action = if queued > 1 { " next error" } else { " dismiss" };
    let hint = vec![
        Span::styled("Enter", key_style),
        Span::raw("/"),
        Span::styled("Esc", key_style),
        Span::raw(action),
    ];
    let title = error_title(queued);

    render_dialog(
        frame,
        DialogConfig {
            title: &title,
            title_color: Color::Red,
            border_color: Color::Red,
            message: error_message,
            hint: Some(hint),
            max_width: 60,
        },
    );
}
