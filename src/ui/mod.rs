//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (header_area, main_area, status_area) = layout::create_layout(frame.area());

    layout::draw_header(frame, header_area, chrono::Local::now());
    forms::draw_production_form(frame, main_area, app);
    layout::draw_status_bar(frame, status_area, app);

    // Modal overlays, errors on top
    if app.state.confirm_clear {
        components::render_confirm_clear_dialog(frame);
    }
    if let Some(message) = app.state.current_error() {
        components::render_error_dialog(frame, message, app.state.error_count());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TuiConfig;
    use crate::services::{ConfiguredCauses, LogConsumer};
    use crate::state::FieldName;
    use ratatui::{backend::TestBackend, Terminal};

    fn test_app() -> App {
        App::new(
            &TuiConfig::default(),
            &ConfiguredCauses::new(None),
            Box::new(LogConsumer::new()),
        )
    }

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_draws_title_and_placeholders() {
        let screen = render(&test_app());
        assert!(screen.contains("Production Data Input"));
        assert!(screen.contains("Select Equipment"));
        assert!(screen.contains("Submit Data"));
    }

    #[test]
    fn test_draws_inline_errors_after_failed_submit() {
        let mut app = test_app();
        app.submit();
        let screen = render(&app);
        assert!(screen.contains("Operation is required"));
        assert!(screen.contains("Location is required"));
    }

    #[test]
    fn test_draws_selected_values() {
        let mut app = test_app();
        app.engine.set_field(FieldName::Operation, "Spring").unwrap();
        app.engine
            .set_field(FieldName::Equipment, "Spring Machine")
            .unwrap();
        let screen = render(&app);
        assert!(screen.contains("Spring Machine"));
    }

    #[test]
    fn test_draws_error_dialog() {
        let mut app = test_app();
        app.push_error("Could not load downtime causes");
        let screen = render(&app);
        assert!(screen.contains("Could not load downtime causes"));
        assert!(screen.contains("to dismiss"));
    }
}
