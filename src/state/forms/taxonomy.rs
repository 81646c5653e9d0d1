//! Option taxonomy: operations and the equipment/products they allow

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::FormError;

/// Manufacturing process stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    Moulding,
    Extrusion,
    Spring,
    Assembly,
    #[serde(rename = "Final Assembly")]
    FinalAssembly,
    #[serde(rename = "Packaging/Palletizing")]
    PackagingPalletizing,
}

impl Operation {
    /// All operations in display order
    pub const ALL: [Operation; 6] = [
        Operation::Moulding,
        Operation::Extrusion,
        Operation::Spring,
        Operation::Assembly,
        Operation::FinalAssembly,
        Operation::PackagingPalletizing,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Moulding => "Moulding",
            Self::Extrusion => "Extrusion",
            Self::Spring => "Spring",
            Self::Assembly => "Assembly",
            Self::FinalAssembly => "Final Assembly",
            Self::PackagingPalletizing => "Packaging/Palletizing",
        }
    }

    /// Equipment that can run this operation
    pub fn equipment(&self) -> &'static [&'static str] {
        match self {
            Self::Moulding => &[
                "Injection Molding Machine 1 (IMM1)",
                "Injection Molding Machine 2 (IMM2)",
                "Injection Molding Machine 3 (IMM3)",
            ],
            Self::Extrusion => &["Dip Tube Extrusion"],
            Self::Spring => &["Spring Machine"],
            Self::Assembly => &["Sub-Assembly Machine (SAM)"],
            Self::FinalAssembly => &["Final Assembly Machine (FAM)"],
            Self::PackagingPalletizing => &["Packaging"],
        }
    }

    /// Products this operation yields
    pub fn products(&self) -> &'static [&'static str] {
        match self {
            Self::Moulding => &["Nozzles", "Chaplets", "Piston", "Skirt", "Housing"],
            Self::Extrusion => &[
                "82mm Dip Tube",
                "114mm Dip Tube",
                "150mm Dip Tube",
                "Dip Tube 4",
                "Dip Tube 5",
                "Dip Tube 6",
            ],
            Self::Spring => &["0.9mm Spring", "1.0mm Spring"],
            Self::Assembly => &["Sub-Assembly"],
            Self::FinalAssembly => &["Final Assembly"],
            Self::PackagingPalletizing => &["Packaged Product"],
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Operation {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.label() == s)
            .ok_or_else(|| FormError::UnknownOperation(s.to_string()))
    }
}

/// Equipment choices for an optional operation (empty when unset)
pub fn equipment_choices(operation: Option<Operation>) -> &'static [&'static str] {
    operation.map(|op| op.equipment()).unwrap_or(&[])
}

/// Product choices for an optional operation (empty when unset)
pub fn product_choices(operation: Option<Operation>) -> &'static [&'static str] {
    operation.map(|op| op.products()).unwrap_or(&[])
}

/// Unit the waste quantity is measured in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WasteUnit {
    #[default]
    Count,
    Mass,
    Volume,
}

impl WasteUnit {
    pub const ALL: [WasteUnit; 3] = [WasteUnit::Count, WasteUnit::Mass, WasteUnit::Volume];

    /// Short label shown next to the waste quantity
    pub fn label(&self) -> &'static str {
        match self {
            Self::Count => "No.",
            Self::Mass => "kg",
            Self::Volume => "L",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Count => "count",
            Self::Mass => "mass",
            Self::Volume => "volume",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Self::Count => Self::Mass,
            Self::Mass => Self::Volume,
            Self::Volume => Self::Count,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::Count => Self::Volume,
            Self::Mass => Self::Count,
            Self::Volume => Self::Mass,
        }
    }
}

impl FromStr for WasteUnit {
    type Err = FormError;

    /// Accepts either the label (`kg`) or the name (`mass`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|unit| unit.label() == s || unit.name() == s)
            .ok_or_else(|| FormError::UnknownWasteUnit(s.to_string()))
    }
}
