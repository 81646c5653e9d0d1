//! Form engine: record state, cascading choices and the submit lifecycle

use super::field::{DowntimeField, FieldName, Numeric};
use super::record::{FormChoices, Record};
use super::taxonomy::{self, Operation};
use super::validation::{self, ErrorField, ValidationResult};
use super::FormError;

/// Owns the record being entered and its last validation result
#[derive(Debug, Clone)]
pub struct FormEngine {
    record: Record,
    errors: ValidationResult,
    choices: FormChoices,
}

impl FormEngine {
    pub fn new(choices: FormChoices) -> Self {
        Self {
            record: Record::default(),
            errors: ValidationResult::new(),
            choices,
        }
    }

    pub fn record(&self) -> &Record {
        &self.record
    }

    pub fn errors(&self) -> &ValidationResult {
        &self.errors
    }

    pub fn locations(&self) -> &[String] {
        &self.choices.locations
    }

    pub fn downtime_causes(&self) -> &[String] {
        &self.choices.downtime_causes
    }

    pub fn list_equipment_choices(&self, operation: Option<Operation>) -> &'static [&'static str] {
        taxonomy::equipment_choices(operation)
    }

    pub fn list_product_choices(&self, operation: Option<Operation>) -> &'static [&'static str] {
        taxonomy::product_choices(operation)
    }

    /// Apply a field-change event.
    ///
    /// Changing the operation drops an equipment or product selection the new
    /// operation does not offer. Editing a field dismisses its error until the
    /// next validation.
    pub fn set_field(&mut self, name: FieldName, raw: &str) -> Result<(), FormError> {
        match name {
            FieldName::Operation => {
                let operation = if raw.is_empty() {
                    None
                } else {
                    Some(raw.parse::<Operation>()?)
                };
                self.set_operation(operation);
            }
            FieldName::Equipment => {
                let allowed = taxonomy::equipment_choices(self.record.operation);
                self.record.equipment = checked_choice("equipment", raw, allowed)?;
                self.errors.remove(ErrorField::Equipment);
            }
            FieldName::Product => {
                let allowed = taxonomy::product_choices(self.record.operation);
                self.record.product = checked_choice("product", raw, allowed)?;
                self.errors.remove(ErrorField::Product);
            }
            FieldName::Production => {
                self.record.production = Numeric::parse(raw);
                self.errors.remove(ErrorField::Production);
            }
            FieldName::Location => {
                self.record.location = raw.to_string();
                self.errors.remove(ErrorField::Location);
            }
            FieldName::Waste => {
                self.record.waste = Numeric::parse(raw);
                self.errors.remove(ErrorField::Waste);
            }
            FieldName::WasteUnit => {
                self.record.waste_unit = raw.parse()?;
            }
        }
        Ok(())
    }

    /// Select an operation directly
    pub fn set_operation(&mut self, operation: Option<Operation>) {
        self.record.operation = operation;
        self.errors.remove(ErrorField::Operation);

        let equipment = taxonomy::equipment_choices(operation);
        if !self.record.equipment.is_empty() && !equipment.contains(&self.record.equipment.as_str())
        {
            self.record.equipment.clear();
            self.errors.remove(ErrorField::Equipment);
        }

        let products = taxonomy::product_choices(operation);
        if !self.record.product.is_empty() && !products.contains(&self.record.product.as_str()) {
            self.record.product.clear();
            self.errors.remove(ErrorField::Product);
        }
    }

    /// Apply a downtime sub-field change
    pub fn set_downtime_field(&mut self, name: DowntimeField, raw: &str) {
        let downtime = &mut self.record.downtime;
        match name {
            DowntimeField::Hours => downtime.hours = Numeric::parse(raw),
            DowntimeField::Minutes => downtime.minutes = Numeric::parse(raw),
            DowntimeField::Cause => downtime.cause = raw.to_string(),
        }
        self.errors.remove(ErrorField::Downtime);
    }

    /// Check the current record without touching engine state
    pub fn validate(&self) -> ValidationResult {
        validation::validate(&self.record, &self.choices)
    }

    /// Hand over the record if it is valid and start a fresh one.
    ///
    /// On failure the errors are kept for display and the record is left as
    /// entered.
    pub fn submit(&mut self) -> Result<Record, ValidationResult> {
        let result = self.validate();
        if result.is_empty() {
            let record = std::mem::take(&mut self.record);
            self.errors.clear();
            Ok(record)
        } else {
            self.errors = result.clone();
            Err(result)
        }
    }

    /// Discard the current entry
    pub fn reset(&mut self) {
        self.record = Record::default();
        self.errors.clear();
    }

    /// True when anything differs from a fresh record
    pub fn is_dirty(&self) -> bool {
        self.record != Record::default()
    }
}

impl Default for FormEngine {
    fn default() -> Self {
        Self::new(FormChoices::default())
    }
}

/// Empty clears; anything else must be one of `allowed`
fn checked_choice(
    field: &'static str,
    raw: &str,
    allowed: &[&str],
) -> Result<String, FormError> {
    if raw.is_empty() || allowed.contains(&raw) {
        Ok(raw.to_string())
    } else {
        Err(FormError::NotInSubset {
            field,
            value: raw.to_string(),
        })
    }
}
