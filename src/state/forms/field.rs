//! Form field value objects

use serde::{Deserialize, Serialize};

/// Scalar fields of a production record accepted by `FormEngine::set_field`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    Operation,
    Equipment,
    Product,
    Production,
    Location,
    Waste,
    WasteUnit,
}

impl FieldName {
    /// camelCase name, as serialized on `Record`
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Operation => "operation",
            Self::Equipment => "equipment",
            Self::Product => "product",
            Self::Production => "production",
            Self::Location => "location",
            Self::Waste => "waste",
            Self::WasteUnit => "wasteUnit",
        }
    }
}

/// Sub-fields of the downtime entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DowntimeField {
    Hours,
    Minutes,
    Cause,
}

/// Result of coercing raw numeric text
///
/// Serializes as a JSON number, or `null` when the text was not a number.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "Option<f64>", into = "Option<f64>")]
pub enum Numeric {
    Number(f64),
    NotANumber,
}

impl Numeric {
    /// Parse raw field text.
    ///
    /// Blank text is zero, like an emptied number box. Anything that is not a
    /// finite number becomes `NotANumber` so validation can reject it.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Self::Number(0.0);
        }
        match trimmed.parse::<f64>() {
            Ok(value) if value.is_finite() => Self::Number(value),
            _ => Self::NotANumber,
        }
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Number(v) => Some(*v),
            Self::NotANumber => None,
        }
    }

    /// True when the value is a number satisfying `predicate`
    pub fn is_number_and(&self, predicate: impl FnOnce(f64) -> bool) -> bool {
        self.value().is_some_and(predicate)
    }
}

impl Default for Numeric {
    fn default() -> Self {
        Self::Number(0.0)
    }
}

impl From<Option<f64>> for Numeric {
    fn from(value: Option<f64>) -> Self {
        match value {
            Some(v) if v.is_finite() => Self::Number(v),
            _ => Self::NotANumber,
        }
    }
}

impl From<Numeric> for Option<f64> {
    fn from(value: Numeric) -> Self {
        value.value()
    }
}

/// Editable text box backing a numeric field
#[derive(Debug, Clone)]
pub struct NumberField {
    text: String,
}

impl NumberField {
    /// Create a new field showing zero
    pub fn new() -> Self {
        Self {
            text: "0".to_string(),
        }
    }

    /// Push a character if it can be part of a number.
    /// Typing into a lone "0" replaces it.
    pub fn push_char(&mut self, c: char) -> bool {
        if !(c.is_ascii_digit() || c == '.' || c == '-') {
            return false;
        }
        if self.text == "0" && c != '.' {
            self.text.clear();
        }
        self.text.push(c);
        true
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.text.pop();
    }

    /// Back to the initial "0"
    pub fn reset(&mut self) {
        self.text = "0".to_string();
    }

    pub fn as_text(&self) -> &str {
        &self.text
    }
}

impl Default for NumberField {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod field_name {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_names_match_record_keys() {
            let record = serde_json::to_value(crate::state::Record::default()).unwrap();
            for name in [
                FieldName::Operation,
                FieldName::Equipment,
                FieldName::Product,
                FieldName::Production,
                FieldName::Location,
                FieldName::Waste,
                FieldName::WasteUnit,
            ] {
                assert!(record.get(name.as_str()).is_some(), "{}", name.as_str());
            }
            assert_eq!(FieldName::WasteUnit.as_str(), "wasteUnit");
        }
    }

    mod numeric {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_parse_number() {
            assert_eq!(Numeric::parse("42"), Numeric::Number(42.0));
            assert_eq!(Numeric::parse(" 1.5 "), Numeric::Number(1.5));
            assert_eq!(Numeric::parse("-3"), Numeric::Number(-3.0));
        }

        #[test]
        fn test_blank_is_zero() {
            assert_eq!(Numeric::parse(""), Numeric::Number(0.0));
            assert_eq!(Numeric::parse("   "), Numeric::Number(0.0));
        }

        #[test]
        fn test_garbage_is_not_a_number() {
            assert_eq!(Numeric::parse("abc"), Numeric::NotANumber);
            assert_eq!(Numeric::parse("1.2.3"), Numeric::NotANumber);
            assert_eq!(Numeric::parse("-"), Numeric::NotANumber);
        }

        #[test]
        fn test_non_finite_is_not_a_number() {
            assert_eq!(Numeric::parse("inf"), Numeric::NotANumber);
            assert_eq!(Numeric::parse("NaN"), Numeric::NotANumber);
        }

        #[test]
        fn test_serializes_to_number_or_null() {
            assert_eq!(serde_json::to_string(&Numeric::Number(2.5)).unwrap(), "2.5");
            assert_eq!(serde_json::to_string(&Numeric::NotANumber).unwrap(), "null");
        }

        #[test]
        fn test_is_number_and() {
            assert!(Numeric::Number(1.0).is_number_and(|v| v > 0.0));
            assert!(!Numeric::NotANumber.is_number_and(|_| true));
        }
    }

    mod number_field {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_new_shows_zero() {
            let field = NumberField::new();
            assert_eq!(field.as_text(), "0");
        }

        #[test]
        fn test_typing_replaces_lone_zero() {
            let mut field = NumberField::new();
            field.push_char('5');
            field.push_char('0');
            assert_eq!(field.as_text(), "50");
        }

        #[test]
        fn test_decimal_point_keeps_zero() {
            let mut field = NumberField::new();
            field.push_char('.');
            field.push_char('5');
            assert_eq!(field.as_text(), "0.5");
        }

        #[test]
        fn test_rejects_letters() {
            let mut field = NumberField::new();
            assert!(!field.push_char('x'));
            assert_eq!(field.as_text(), "0");
        }

        #[test]
        fn test_pop_and_reset() {
            let mut field = NumberField::new();
            field.push_char('4');
            field.pop_char();
            assert_eq!(field.as_text(), "");
            field.reset();
            assert_eq!(field.as_text(), "0");
        }
    }
}
