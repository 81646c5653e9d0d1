//! Application state definitions

use super::forms::{DowntimeField, ErrorField, FieldName, NumberField};
use std::collections::VecDeque;

/// Focusable slots on the entry form, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormSlot {
    #[default]
    Operation,
    Equipment,
    Product,
    Production,
    Location,
    Waste,
    WasteUnit,
    DowntimeHours,
    DowntimeMinutes,
    DowntimeCause,
    Actions,
}

impl FormSlot {
    pub const ALL: [FormSlot; 11] = [
        FormSlot::Operation,
        FormSlot::Equipment,
        FormSlot::Product,
        FormSlot::Production,
        FormSlot::Location,
        FormSlot::Waste,
        FormSlot::WasteUnit,
        FormSlot::DowntimeHours,
        FormSlot::DowntimeMinutes,
        FormSlot::DowntimeCause,
        FormSlot::Actions,
    ];

    fn index(&self) -> usize {
        Self::ALL.iter().position(|s| s == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        let idx = self.index();
        if idx == 0 {
            Self::ALL[Self::ALL.len() - 1]
        } else {
            Self::ALL[idx - 1]
        }
    }

    /// Slots edited by typing rather than cycling through choices
    pub fn is_number(&self) -> bool {
        matches!(
            self,
            Self::Production | Self::Waste | Self::DowntimeHours | Self::DowntimeMinutes
        )
    }

    /// Slots that cycle through a list of choices
    pub fn is_select(&self) -> bool {
        matches!(
            self,
            Self::Operation
                | Self::Equipment
                | Self::Product
                | Self::Location
                | Self::WasteUnit
                | Self::DowntimeCause
        )
    }

    /// The error entry rendered under this slot
    pub fn error_field(&self) -> Option<ErrorField> {
        match self {
            Self::Operation => Some(ErrorField::Operation),
            Self::Equipment => Some(ErrorField::Equipment),
            Self::Product => Some(ErrorField::Product),
            Self::Production => Some(ErrorField::Production),
            Self::Location => Some(ErrorField::Location),
            Self::Waste | Self::WasteUnit => Some(ErrorField::Waste),
            Self::DowntimeHours | Self::DowntimeMinutes | Self::DowntimeCause => {
                Some(ErrorField::Downtime)
            }
            Self::Actions => None,
        }
    }

    /// Record field a top-level slot edits
    pub fn field_name(&self) -> Option<FieldName> {
        match self {
            Self::Operation => Some(FieldName::Operation),
            Self::Equipment => Some(FieldName::Equipment),
            Self::Product => Some(FieldName::Product),
            Self::Production => Some(FieldName::Production),
            Self::Location => Some(FieldName::Location),
            Self::Waste => Some(FieldName::Waste),
            Self::WasteUnit => Some(FieldName::WasteUnit),
            _ => None,
        }
    }

    /// Downtime sub-field a slot edits
    pub fn downtime_field(&self) -> Option<DowntimeField> {
        match self {
            Self::DowntimeHours => Some(DowntimeField::Hours),
            Self::DowntimeMinutes => Some(DowntimeField::Minutes),
            Self::DowntimeCause => Some(DowntimeField::Cause),
            _ => None,
        }
    }
}

/// Buttons in the action panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormButton {
    #[default]
    Submit,
    Clear,
}

impl FormButton {
    pub fn toggle(&mut self) {
        *self = match self {
            Self::Submit => Self::Clear,
            Self::Clear => Self::Submit,
        };
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Submit => "Submit Data",
            Self::Clear => "Clear",
        }
    }
}

/// Text buffers behind the numeric fields
#[derive(Debug, Clone)]
pub struct NumberInputs {
    pub production: NumberField,
    pub waste: NumberField,
    pub hours: NumberField,
    pub minutes: NumberField,
}

impl NumberInputs {
    pub fn get(&self, slot: FormSlot) -> Option<&NumberField> {
        match slot {
            FormSlot::Production => Some(&self.production),
            FormSlot::Waste => Some(&self.waste),
            FormSlot::DowntimeHours => Some(&self.hours),
            FormSlot::DowntimeMinutes => Some(&self.minutes),
            _ => None,
        }
    }

    pub fn get_mut(&mut self, slot: FormSlot) -> Option<&mut NumberField> {
        match slot {
            FormSlot::Production => Some(&mut self.production),
            FormSlot::Waste => Some(&mut self.waste),
            FormSlot::DowntimeHours => Some(&mut self.hours),
            FormSlot::DowntimeMinutes => Some(&mut self.minutes),
            _ => None,
        }
    }

    pub fn reset(&mut self) {
        self.production.reset();
        self.waste.reset();
        self.hours.reset();
        self.minutes.reset();
    }
}

impl Default for NumberInputs {
    fn default() -> Self {
        Self {
            production: NumberField::new(),
            waste: NumberField::new(),
            hours: NumberField::new(),
            minutes: NumberField::new(),
        }
    }
}

/// Presentation state around the form engine
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub active_slot: FormSlot,
    pub selected_button: FormButton,
    pub inputs: NumberInputs,
    /// Waiting for the user to confirm discarding the entry
    pub confirm_clear: bool,
    /// Modal error messages, oldest first
    error_queue: VecDeque<String>,
}

impl AppState {
    pub fn next_slot(&mut self) {
        self.active_slot = self.active_slot.next();
    }

    pub fn prev_slot(&mut self) {
        self.active_slot = self.active_slot.prev();
    }

    pub fn is_action_panel_focused(&self) -> bool {
        self.active_slot == FormSlot::Actions
    }

    /// Fresh form: buffers back to zero, focus on the first field
    pub fn clear_form(&mut self) {
        self.inputs.reset();
        self.active_slot = FormSlot::Operation;
        self.selected_button = FormButton::Submit;
        self.confirm_clear = false;
    }

    pub fn push_error(&mut self, message: String) {
        self.error_queue.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.error_queue.is_empty()
    }

    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.front().map(String::as_str)
    }

    pub fn error_count(&self) -> usize {
        self.error_queue.len()
    }

    pub fn dismiss_error(&mut self) {
        self.error_queue.pop_front();
    }
}
