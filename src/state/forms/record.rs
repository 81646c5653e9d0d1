//! Production record and the injected option lists

use serde::{Deserialize, Serialize};

use super::field::Numeric;
use super::taxonomy::{Operation, WasteUnit};

/// Default storage locations
pub const DEFAULT_LOCATIONS: &[&str] = &["Clean Room Storage", "Warehouse Storage", "Used Rightaway"];

/// Default downtime causes
pub const DEFAULT_DOWNTIME_CAUSES: &[&str] = &[
    "Machine Breakdown",
    "Material Shortage",
    "Changeover",
    "Maintenance",
    "Other",
];

/// Unplanned stoppage attached to a record
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Downtime {
    pub hours: Numeric,
    pub minutes: Numeric,
    /// Empty when no cause was given
    pub cause: String,
}

/// A production event being entered
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub operation: Option<Operation>,
    pub equipment: String,
    pub product: String,
    pub production: Numeric,
    pub location: String,
    pub waste: Numeric,
    pub waste_unit: WasteUnit,
    pub downtime: Downtime,
}

/// Option lists that live outside the operation taxonomy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormChoices {
    pub locations: Vec<String>,
    pub downtime_causes: Vec<String>,
}

impl FormChoices {
    pub fn new(locations: Vec<String>, downtime_causes: Vec<String>) -> Self {
        Self {
            locations,
            downtime_causes,
        }
    }
}

impl Default for FormChoices {
    fn default() -> Self {
        Self {
            locations: DEFAULT_LOCATIONS.iter().map(|s| s.to_string()).collect(),
            downtime_causes: DEFAULT_DOWNTIME_CAUSES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_record() {
        let record = Record::default();
        assert!(record.operation.is_none());
        assert_eq!(record.equipment, "");
        assert_eq!(record.production, Numeric::Number(0.0));
        assert_eq!(record.waste_unit, WasteUnit::Count);
        assert_eq!(record.downtime.hours, Numeric::Number(0.0));
        assert_eq!(record.downtime.cause, "");
    }

    #[test]
    fn test_serialization_uses_camel_case_and_labels() {
        let record = Record {
            operation: Some(Operation::FinalAssembly),
            waste_unit: WasteUnit::Mass,
            ..Record::default()
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["operation"], "Final Assembly");
        assert_eq!(value["wasteUnit"], "mass");
        assert_eq!(value["downtime"]["minutes"], 0.0);
    }

    #[test]
    fn test_deserialize_round_trip() {
        let json = r#"{
            "operation": "Extrusion",
            "equipment": "Dip Tube Extrusion",
            "product": "82mm Dip Tube",
            "production": 10,
            "location": "Warehouse Storage",
            "waste": null,
            "wasteUnit": "count",
            "downtime": {"hours": 1, "minutes": 15, "cause": "Other"}
        }"#;
        let record: Record = serde_json::from_str(json).unwrap();
        assert_eq!(record.operation, Some(Operation::Extrusion));
        assert_eq!(record.waste, Numeric::NotANumber);
        assert_eq!(record.downtime.minutes, Numeric::Number(15.0));
    }

    #[test]
    fn test_default_choices() {
        let choices = FormChoices::default();
        assert_eq!(choices.locations.len(), 3);
        assert_eq!(choices.downtime_causes[0], "Machine Breakdown");
    }
}
