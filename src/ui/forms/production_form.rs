//! Production entry form rendering

use super::field_renderer::{draw_field, FieldKind, FIELD_HEIGHT};
use crate::app::App;
use crate::state::{FormButton, FormSlot};
use crate::ui::components::{render_form_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Draw the entry form with its action panel
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    // Split into form (left) and action panel (right)
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(60),    // Form area
            Constraint::Length(20), // Action panel
        ])
        .split(area);

    draw_form(frame, main_chunks[0], app);
    draw_action_panel(frame, main_chunks[1], app);
}

fn draw_form(frame: &mut Frame, area: Rect, app: &App) {
    let border_color = if app.state.is_action_panel_focused() {
        Color::DarkGray
    } else {
        Color::Cyan
    };
    let block = Block::default()
        .title(" Production Record ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FIELD_HEIGHT), // Operation | Equipment
            Constraint::Length(FIELD_HEIGHT), // Product | Production
            Constraint::Length(FIELD_HEIGHT), // Location | Waste
            Constraint::Length(FIELD_HEIGHT), // Downtime
            Constraint::Min(0),
        ])
        .split(inner);

    let pairs = [
        (FormSlot::Operation, FormSlot::Equipment),
        (FormSlot::Product, FormSlot::Production),
    ];
    for (row, (left, right)) in pairs.iter().enumerate() {
        let cols = halves(rows[row]);
        draw_slot(frame, cols[0], app, *left);
        draw_slot(frame, cols[1], app, *right);
    }

    let cols = halves(rows[2]);
    draw_slot(frame, cols[0], app, FormSlot::Location);
    let waste_cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(10)])
        .split(cols[1]);
    draw_slot(frame, waste_cols[0], app, FormSlot::Waste);
    draw_slot(frame, waste_cols[1], app, FormSlot::WasteUnit);

    let downtime_cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(rows[3]);
    draw_slot(frame, downtime_cols[0], app, FormSlot::DowntimeHours);
    draw_slot(frame, downtime_cols[1], app, FormSlot::DowntimeMinutes);
    draw_slot(frame, downtime_cols[2], app, FormSlot::DowntimeCause);
}

fn halves(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area)
}

/// Label, current value and kind for a slot
fn slot_view(app: &App, slot: FormSlot) -> (&'static str, String, FieldKind) {
    let record = app.engine.record();
    let number = |slot| {
        app.state
            .inputs
            .get(slot)
            .map(|f| f.as_text().to_string())
            .unwrap_or_default()
    };
    match slot {
        FormSlot::Operation => (
            "Operation*",
            record.operation.map(|op| op.label().to_string()).unwrap_or_default(),
            FieldKind::Select {
                placeholder: "Select Operation",
            },
        ),
        FormSlot::Equipment => (
            "Equipment*",
            record.equipment.clone(),
            FieldKind::Select {
                placeholder: "Select Equipment",
            },
        ),
        FormSlot::Product => (
            "Product*",
            record.product.clone(),
            FieldKind::Select {
                placeholder: "Select Product",
            },
        ),
        FormSlot::Production => ("Production* (units)", number(slot), FieldKind::Number),
        FormSlot::Location => (
            "Location*",
            record.location.clone(),
            FieldKind::Select {
                placeholder: "Select Location",
            },
        ),
        FormSlot::Waste => ("Waste", number(slot), FieldKind::Number),
        FormSlot::WasteUnit => (
            "Unit",
            record.waste_unit.label().to_string(),
            FieldKind::Select { placeholder: "" },
        ),
        FormSlot::DowntimeHours => ("Downtime hours", number(slot), FieldKind::Number),
        FormSlot::DowntimeMinutes => ("Minutes", number(slot), FieldKind::Number),
        FormSlot::DowntimeCause => (
            "Cause",
            record.downtime.cause.clone(),
            FieldKind::Select {
                placeholder: "Select Cause",
            },
        ),
        FormSlot::Actions => ("", String::new(), FieldKind::Number),
    }
}

fn draw_slot(frame: &mut Frame, area: Rect, app: &App, slot: FormSlot) {
    let (label, value, kind) = slot_view(app, slot);
    // Downtime shares one error; show it once under the hours box
    let error = match slot {
        FormSlot::DowntimeMinutes | FormSlot::DowntimeCause | FormSlot::WasteUnit => None,
        _ => slot
            .error_field()
            .and_then(|field| app.engine.errors().get(field)),
    };
    draw_field(
        frame,
        area,
        label,
        &value,
        kind,
        app.state.active_slot == slot,
        error,
    );
}

/// Draw the action panel sidebar
fn draw_action_panel(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.state.is_action_panel_focused();
    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(" Actions ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let button_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(BUTTON_HEIGHT), // Submit (primary)
            Constraint::Length(BUTTON_HEIGHT), // Clear
            Constraint::Min(0),
        ])
        .split(inner_area);

    let selected = app.state.selected_button;
    render_form_button(
        frame,
        button_chunks[0],
        FormButton::Submit,
        is_focused && selected == FormButton::Submit,
        true,
    );
    // Nothing to clear on a fresh form
    render_form_button(
        frame,
        button_chunks[1],
        FormButton::Clear,
        is_focused && selected == FormButton::Clear,
        app.engine.is_dirty(),
    );
}
