//! Form domain layer
//!
//! The production entry form independent of any UI: the operation taxonomy,
//! the record and its validation rules, and the engine that ties them
//! together.

mod error;
mod field;
mod form_state;
mod record;
mod taxonomy;
mod validation;

pub use error::FormError;
pub use field::{DowntimeField, FieldName, NumberField};
pub use form_state::FormEngine;
pub use record::{FormChoices, Record, DEFAULT_DOWNTIME_CAUSES, DEFAULT_LOCATIONS};
pub use taxonomy::{Operation, WasteUnit};
pub use validation::ErrorField;

#[cfg(test)]
pub use field::Numeric;
