//! Errors for refused field-change events

use thiserror::Error;

/// A field-change event the engine refused. The record is left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("unknown operation: {0}")]
    UnknownOperation(String),

    #[error("unknown waste unit: {0}")]
    UnknownWasteUnit(String),

    #[error("{value:?} is not a valid {field} for the selected operation")]
    NotInSubset { field: &'static str, value: String },
}
