use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Clinical interpretation of a raw instrument score.
///
/// Variants are declared in ascending severity, so the derived ordering
/// is the clinical one (`None < Mild < Moderate < Severe`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum PainLevel {
    None,
    Mild,
    Moderate,
    Severe,
}

impl PainLevel {
    pub const ALL: [PainLevel; 4] = [
        PainLevel::None,
        PainLevel::Mild,
        PainLevel::Moderate,
        PainLevel::Severe,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PainLevel::None => "none",
            PainLevel::Mild => "mild",
            PainLevel::Moderate => "moderate",
            PainLevel::Severe => "severe",
        }
    }
}

impl std::fmt::Display for PainLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strength of the literature behind an intervention. `A` is strongest and
/// sorts first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum EvidenceLevel {
    A,
    B,
    C,
}
