//! Confirmation dialog for discarding the current entry

use super::base::{render_dialog, DialogConfig};
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

/// Ask before throwing away a partially entered record
pub fn render_confirm_clear_dialog(frame: &mut Frame) {
    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let hint = vec![
        Span::styled("y", key_style),
        Span::raw("/"),
        Span::styled("Enter", key_style),
        Span::raw(" clear  "),
        Span::styled("n", key_style),
        Span::raw("/"),
        Span::styled("Esc", key_style),
        Span::raw(" keep editing"),
    ];

    render_dialog(
        frame,
        DialogConfig {
            title: "Clear Form",
            title_color: Color::Yellow,
            border_color: Color::Yellow,
            message: "Discard the values entered so far? Nothing has been submitted.",
            hint: Some(hint),
            max_width: 50,
        },
    );
}
