//! Application state and core logic

use crate::config::TuiConfig;
use crate::services::{DowntimeCauseProvider, RecordConsumer, Submission};
use crate::state::{
    AppState, DowntimeField, ErrorField, FieldName, FormButton, FormEngine, FormSlot, Operation,
    WasteUnit, DEFAULT_DOWNTIME_CAUSES,
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use uuid::Uuid;

/// Main application struct
pub struct App {
    /// Presentation state
    pub state: AppState,
    /// The form being filled in
    pub engine: FormEngine,
    /// Receives each successful submission
    consumer: Box<dyn RecordConsumer>,
    /// Whether the app should quit
    quit: bool,
    /// Feedback shown in the status bar until the next key press
    pub status_message: Option<String>,
    /// Id of the most recent successful submission
    pub last_submission: Option<Uuid>,
}

impl App {
    /// Create a new App instance
    pub fn new(
        config: &TuiConfig,
        causes: &dyn DowntimeCauseProvider,
        consumer: Box<dyn RecordConsumer>,
    ) -> Self {
        let mut state = AppState::default();

        let downtime_causes = match causes.downtime_causes() {
            Ok(causes) => causes,
            Err(err) => {
                tracing::warn!("Falling back to default downtime causes: {err:#}");
                state.push_error(format!("Could not load downtime causes: {err}"));
                DEFAULT_DOWNTIME_CAUSES.iter().map(|s| s.to_string()).collect()
            }
        };
        let engine = FormEngine::new(config.form_choices(downtime_causes));

        Self {
            state,
            engine,
            consumer,
            quit: false,
            status_message: None,
            last_submission: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        // Clear confirmation (modal)
        if self.state.confirm_clear {
            match key.code {
                KeyCode::Char('y') | KeyCode::Enter => self.clear_form(),
                KeyCode::Char('n') | KeyCode::Esc => self.state.confirm_clear = false,
                _ => {}
            }
            return Ok(());
        }

        // Clear any status messages on key press
        self.status_message = None;

        let on_action_panel = self.state.is_action_panel_focused();

        match key.code {
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => self.submit(),
            KeyCode::Char('s') if key.modifiers.contains(crate::platform::SUBMIT_MODIFIER) => {
                self.submit()
            }
            KeyCode::Tab => self.state.next_slot(),
            KeyCode::BackTab => self.state.prev_slot(),
            KeyCode::Up | KeyCode::Down if on_action_panel => self.state.selected_button.toggle(),
            KeyCode::Down => self.state.next_slot(),
            KeyCode::Up => self.state.prev_slot(),
            KeyCode::Enter if on_action_panel => match self.state.selected_button {
                FormButton::Submit => self.submit(),
                FormButton::Clear => self.request_clear(),
            },
            KeyCode::Enter => self.state.next_slot(),
            KeyCode::Left if self.state.active_slot.is_select() => self.cycle_choice(false),
            KeyCode::Right if self.state.active_slot.is_select() => self.cycle_choice(true),
            KeyCode::Char(c)
                if self.state.active_slot.is_number()
                    && key.modifiers.difference(KeyModifiers::SHIFT).is_empty() =>
            {
                self.type_char(c)
            }
            KeyCode::Backspace if self.state.active_slot.is_number() => self.backspace(),
            KeyCode::Esc => {
                if self.engine.is_dirty() {
                    self.request_clear();
                } else {
                    self.quit = true;
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Validate and hand the record to the consumer
    pub fn submit(&mut self) {
        match self.engine.submit() {
            Ok(record) => {
                let submission = Submission::new(record);
                self.state.clear_form();
                self.last_submission = Some(submission.id);
                match self.consumer.accept(&submission) {
                    Ok(()) => {
                        tracing::info!(id = %submission.id, "Production record submitted");
                        self.status_message = Some("Data submitted successfully!".to_string());
                    }
                    Err(err) => {
                        tracing::error!(id = %submission.id, "Consumer rejected submission: {err:#}");
                        self.push_error(format!("Failed to deliver submission: {err}"));
                    }
                }
            }
            Err(errors) => {
                let fields: Vec<&str> = errors.fields().map(|f| f.as_str()).collect();
                tracing::debug!(?fields, "Submission rejected by validation");
                self.status_message = Some(format!("{} field(s) need attention", errors.len()));
                if let Some(first) = errors.fields().next() {
                    self.state.active_slot = slot_for_error(first);
                }
            }
        }
    }

    fn request_clear(&mut self) {
        if self.engine.is_dirty() {
            self.state.confirm_clear = true;
        }
    }

    fn clear_form(&mut self) {
        self.engine.reset();
        self.state.clear_form();
        self.status_message = Some("Form cleared".to_string());
    }

    /// Forward a field change, reporting a refusal without leaving the form
    fn set_field(&mut self, name: FieldName, value: &str) {
        if let Err(err) = self.engine.set_field(name, value) {
            tracing::warn!(field = name.as_str(), "Field change refused: {err}");
            self.push_error(err.to_string());
        }
    }

    /// Move a select field to the previous or next choice
    fn cycle_choice(&mut self, forward: bool) {
        let record = self.engine.record();
        match self.state.active_slot {
            FormSlot::Operation => {
                let mut options = vec![String::new()];
                options.extend(Operation::ALL.iter().map(|op| op.label().to_string()));
                let current = record.operation.map(|op| op.label()).unwrap_or("");
                let value = cycle(&options, current, forward);
                self.set_field(FieldName::Operation, &value);
            }
            FormSlot::Equipment => {
                let options = with_unset(self.engine.list_equipment_choices(record.operation));
                let value = cycle(&options, &record.equipment, forward);
                self.set_field(FieldName::Equipment, &value);
            }
            FormSlot::Product => {
                let options = with_unset(self.engine.list_product_choices(record.operation));
                let value = cycle(&options, &record.product, forward);
                self.set_field(FieldName::Product, &value);
            }
            FormSlot::Location => {
                let options = with_unset(self.engine.locations());
                let value = cycle(&options, &record.location, forward);
                self.set_field(FieldName::Location, &value);
            }
            FormSlot::WasteUnit => {
                let unit: WasteUnit = if forward {
                    record.waste_unit.next()
                } else {
                    record.waste_unit.prev()
                };
                self.set_field(FieldName::WasteUnit, unit.name());
            }
            FormSlot::DowntimeCause => {
                let options = with_unset(self.engine.downtime_causes());
                let value = cycle(&options, &record.downtime.cause, forward);
                self.engine.set_downtime_field(DowntimeField::Cause, &value);
            }
            _ => {}
        }
    }

    fn type_char(&mut self, c: char) {
        let slot = self.state.active_slot;
        let changed = self
            .state
            .inputs
            .get_mut(slot)
            .is_some_and(|field| field.push_char(c));
        if changed {
            self.sync_number(slot);
        }
    }

    fn backspace(&mut self) {
        let slot = self.state.active_slot;
        if let Some(field) = self.state.inputs.get_mut(slot) {
            field.pop_char();
            self.sync_number(slot);
        }
    }

    /// Push a number buffer's text into the engine
    fn sync_number(&mut self, slot: FormSlot) {
        let Some(text) = self.state.inputs.get(slot).map(|f| f.as_text().to_string()) else {
            return;
        };
        if let Some(name) = slot.field_name() {
            self.set_field(name, &text);
        } else if let Some(field) = slot.downtime_field() {
            self.engine.set_downtime_field(field, &text);
        }
    }
}

/// Choices preceded by the unset entry
fn with_unset<S: AsRef<str>>(choices: &[S]) -> Vec<String> {
    std::iter::once(String::new())
        .chain(choices.iter().map(|c| c.as_ref().to_string()))
        .collect()
}

/// Step through `options` from `current`, wrapping at either end.
/// An unrecognized current value starts from the first option.
fn cycle(options: &[String], current: &str, forward: bool) -> String {
    if options.is_empty() {
        return String::new();
    }
    let len = options.len();
    let idx = options.iter().position(|o| o == current).unwrap_or(0);
    let next = if forward {
        (idx + 1) % len
    } else {
        (idx + len - 1) % len
    };
    options[next].clone()
}

/// Slot that shows the given error
fn slot_for_error(field: ErrorField) -> FormSlot {
    match field {
        ErrorField::Operation => FormSlot::Operation,
        ErrorField::Equipment => FormSlot::Equipment,
        ErrorField::Product => FormSlot::Product,
        ErrorField::Production => FormSlot::Production,
        ErrorField::Location => FormSlot::Location,
        ErrorField::Waste => FormSlot::Waste,
        ErrorField::Downtime => FormSlot::DowntimeHours,
    }
}
