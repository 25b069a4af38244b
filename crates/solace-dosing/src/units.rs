use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Units a dose string may be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum DoseUnit {
    #[serde(rename = "mg")]
    Mg,
    #[serde(rename = "mcg")]
    Mcg,
    #[serde(rename = "g")]
    G,
    #[serde(rename = "mL")]
    Ml,
}

impl DoseUnit {
    /// Parse a unit token as written in a dose string.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "mg" => Some(DoseUnit::Mg),
            "mcg" => Some(DoseUnit::Mcg),
            "g" => Some(DoseUnit::G),
            "mL" | "ml" => Some(DoseUnit::Ml),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DoseUnit::Mg => "mg",
            DoseUnit::Mcg => "mcg",
            DoseUnit::G => "g",
            DoseUnit::Ml => "mL",
        }
    }

    /// Micrograms per one of this unit. Whole numbers, so conversions
    /// multiply or divide by an exact power of ten. `None` for volumes.
    fn micrograms_per_unit(&self) -> Option<f64> {
        match self {
            DoseUnit::Mcg => Some(1.0),
            DoseUnit::Mg => Some(1_000.0),
            DoseUnit::G => Some(1_000_000.0),
            DoseUnit::Ml => None,
        }
    }

    /// Convert `value` of this unit into `target`. `None` when either unit
    /// is a volume and they differ.
    pub fn convert(&self, value: f64, target: DoseUnit) -> Option<f64> {
        if *self == target {
            return Some(value);
        }
        let from = self.micrograms_per_unit()?;
        let to = target.micrograms_per_unit()?;
        if from >= to {
            Some(value * (from / to))
        } else {
            Some(value / (to / from))
        }
    }
}

impl std::fmt::Display for DoseUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
