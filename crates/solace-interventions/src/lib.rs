//! solace-interventions
//!
//! Non-pharmacological comfort measures and the rule that picks them for a
//! severity level and age band.

pub mod catalog;

use serde::{Deserialize, Serialize};
use solace_core::{AgeCategory, EvidenceLevel, PainLevel};
use ts_rs::TS;

pub use catalog::{all_interventions, definition};

/// Closed set of catalogued interventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum InterventionId {
    Sucrose,
    NonNutritiveSucking,
    SkinToSkin,
    Breastfeeding,
    FacilitatedTucking,
    Swaddling,
    DistractionVisual,
    DistractionAudio,
    ParentalPresence,
    ComfortPositioning,
    BreathingExercises,
    GuidedImagery,
    VirtualReality,
    ColdTherapy,
    HeatTherapy,
    Massage,
    CognitiveBehavioral,
    Hypnosis,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InterventionDefinition {
    pub id: InterventionId,
    pub name: String,
    pub description: String,
    pub evidence_level: EvidenceLevel,
    pub age_appropriate: Vec<AgeCategory>,
    /// Lowest severity at which the measure is offered. Offered at every
    /// level above it too.
    pub min_level: PainLevel,
}

impl InterventionDefinition {
    pub fn suits(&self, level: PainLevel, age: AgeCategory) -> bool {
        level != PainLevel::None && level >= self.min_level && self.age_appropriate.contains(&age)
    }
}

/// Interventions for `level` at `age`, strongest evidence first and catalog
/// order within a grade. Empty when there is no pain.
pub fn recommend(level: PainLevel, age: AgeCategory) -> Vec<InterventionId> {
    recommend_definitions(level, age).into_iter().map(|d| d.id).collect()
}

/// Like [`recommend`], returning the full catalog entries for display.
pub fn recommend_definitions(
    level: PainLevel,
    age: AgeCategory,
) -> Vec<&'static InterventionDefinition> {
    let mut matches: Vec<&'static InterventionDefinition> = all_interventions()
        .iter()
        .filter(|d| d.suits(level, age))
        .collect();
    // Stable, so catalog order breaks ties.
    matches.sort_by_key(|d| d.evidence_level);

    tracing::debug!(%level, %age, count = matches.len(), "recommended interventions");
    matches
}
