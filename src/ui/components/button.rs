//! Action panel buttons

use crate::state::FormButton;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

fn accent(button: FormButton) -> Color {
    match button {
        FormButton::Submit => Color::Green,
        FormButton::Clear => Color::Yellow,
    }
}

/// Label style and border color for a button in its current state
fn button_style(button: FormButton, is_selected: bool, is_enabled: bool) -> (Style, Color) {
    if !is_enabled {
        return (Style::default().fg(Color::DarkGray), Color::DarkGray);
    }
    let accent = accent(button);
    if is_selected {
        (
            Style::default()
                .fg(Color::Black)
                .bg(accent)
                .add_modifier(Modifier::BOLD),
            accent,
        )
    } else {
        (Style::default().fg(accent), Color::DarkGray)
    }
}

/// Render one of the form's action buttons.
///
/// The selected button is filled with its accent color. A disabled button
/// is dimmed whether or not it is selected.
pub fn render_form_button(
    frame: &mut Frame,
    area: Rect,
    button: FormButton,
    is_selected: bool,
    is_enabled: bool,
) {
    let (label_style, border_color) = button_style(button, is_selected, is_enabled);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let paragraph = Paragraph::new(button.label())
        .alignment(Alignment::Center)
        .style(label_style)
        .block(block);

    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_selected_button_is_filled() {
        let (style, border) = button_style(FormButton::Submit, true, true);
        assert_eq!(style.bg, Some(Color::Green));
        assert_eq!(border, Color::Green);
    }

    #[test]
    fn test_unselected_button_shows_accent() {
        let (style, border) = button_style(FormButton::Clear, false, true);
        assert_eq!(style.fg, Some(Color::Yellow));
        assert_eq!(style.bg, None);
        assert_eq!(border, Color::DarkGray);
    }

    #[test]
    fn test_disabled_button_is_dimmed_even_when_selected() {
        let (style, border) = button_style(FormButton::Clear, true, false);
        assert_eq!(style.fg, Some(Color::DarkGray));
        assert_eq!(style.bg, None);
        assert_eq!(border, Color::DarkGray);
    }

    #[test]
    fn test_renders_centered_label() {
        let mut terminal = Terminal::new(TestBackend::new(20, BUTTON_HEIGHT)).unwrap();
        terminal
            .draw(|frame| render_form_button(frame, frame.area(), FormButton::Clear, false, true))
            .unwrap();
        let buffer = terminal.backend().buffer();
        let middle: String = (0..20u16).map(|x| buffer[(x, 1u16)].symbol()).collect();
        assert_eq!(middle, "│      Clear       │");
    }
}
