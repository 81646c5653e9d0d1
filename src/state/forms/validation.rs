//! Field-level validation rules

use std::collections::BTreeMap;
use std::fmt;

use super::record::{FormChoices, Record};

/// Fields that can carry a validation error
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorField {
    Operation,
    Equipment,
    Product,
    Production,
    Location,
    Waste,
    Downtime,
}

impl ErrorField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Operation => "operation",
            Self::Equipment => "equipment",
            Self::Product => "product",
            Self::Production => "production",
            Self::Location => "location",
            Self::Waste => "waste",
            Self::Downtime => "downtime",
        }
    }
}

impl fmt::Display for ErrorField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-field error messages. A field missing from the map is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: BTreeMap<ErrorField, String>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn get(&self, field: ErrorField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn insert(&mut self, field: ErrorField, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    pub fn remove(&mut self, field: ErrorField) {
        self.errors.remove(&field);
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }

    /// Failed fields in declaration order
    pub fn fields(&self) -> impl Iterator<Item = ErrorField> + '_ {
        self.errors.keys().copied()
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.errors.values().map(String::as_str).collect();
        write!(f, "{}", messages.join("; "))
    }
}

/// Check every rule against `record`. No rule short-circuits another.
pub fn validate(record: &Record, choices: &FormChoices) -> ValidationResult {
    let mut result = ValidationResult::new();

    if record.operation.is_none() {
        result.insert(ErrorField::Operation, "Operation is required");
    }
    if record.equipment.is_empty() {
        result.insert(ErrorField::Equipment, "Equipment is required");
    }
    if record.product.is_empty() {
        result.insert(ErrorField::Product, "Product is required");
    }
    if !record.production.is_number_and(|v| v > 0.0) {
        result.insert(ErrorField::Production, "Production must be greater than 0");
    }

    if record.location.is_empty() {
        result.insert(ErrorField::Location, "Location is required");
    } else if !choices.locations.contains(&record.location) {
        result.insert(ErrorField::Location, "Unknown location");
    }

    if !record.waste.is_number_and(|v| v >= 0.0) {
        result.insert(ErrorField::Waste, "Waste cannot be negative");
    }

    let downtime = &record.downtime;
    let hours_ok = downtime.hours.is_number_and(|h| h >= 0.0);
    let minutes_ok = downtime.minutes.is_number_and(|m| (0.0..=59.0).contains(&m));
    if !hours_ok || !minutes_ok {
        result.insert(ErrorField::Downtime, "Invalid downtime");
    } else if !downtime.cause.is_empty() && !choices.downtime_causes.contains(&downtime.cause) {
        result.insert(ErrorField::Downtime, "Unknown downtime cause");
    }

    result
}
