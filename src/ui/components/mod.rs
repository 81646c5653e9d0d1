//! Reusable UI components

mod button;
mod dialog;

pub use button::{render_form_button, BUTTON_HEIGHT};
pub use dialog::{render_confirm_clear_dialog, render_error_dialog};
