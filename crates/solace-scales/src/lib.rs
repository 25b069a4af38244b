//! solace-scales
//!
//! Pediatric pain assessment instruments. Pure data plus the rules that
//! read it: which instruments suit a patient's age, how a raw score maps to
//! a severity level, and how a completed assessment is totalled.

pub mod error;
pub mod recommend;
pub mod scales;
pub mod scoring;

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use solace_core::{AgeProfile, PainLevel};
use ts_rs::TS;

use error::ScaleError;
use scoring::{Component, ComponentSelection, ScaleDefinition, ScoredAssessment, Threshold};

pub use recommend::{DEFAULT_ORDER, recommend_for_profile, recommend_in_order, recommend_scales};

/// Closed set of supported instruments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ScaleId {
    PippR,
    Nips,
    Flacc,
    Cheops,
    WongBaker,
    Vas,
}

impl ScaleId {
    pub const ALL: [ScaleId; 6] = [
        ScaleId::PippR,
        ScaleId::Nips,
        ScaleId::Flacc,
        ScaleId::Cheops,
        ScaleId::WongBaker,
        ScaleId::Vas,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ScaleId::PippR => "pipp_r",
            ScaleId::Nips => "nips",
            ScaleId::Flacc => "flacc",
            ScaleId::Cheops => "cheops",
            ScaleId::WongBaker => "wong_baker",
            ScaleId::Vas => "vas",
        }
    }
}

impl std::fmt::Display for ScaleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScaleId {
    type Err = ScaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ScaleId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| ScaleError::UnknownScale(s.to_string()))
    }
}

/// Trait implemented by each pain assessment instrument.
pub trait PainScale: Send + Sync {
    fn id(&self) -> ScaleId;

    /// Human-readable name (e.g., "FLACC", "Wong-Baker FACES").
    fn name(&self) -> &str;

    /// Population the instrument is validated for, for display.
    fn age_range(&self) -> &str;

    /// Highest attainable total; equals the sum of each component's
    /// highest option.
    fn max_score(&self) -> f64;

    /// Scored items, in rubric order.
    fn components(&self) -> &[Component];

    /// Contiguous bands covering `[0, max_score]`, ascending by severity.
    fn thresholds(&self) -> &[Threshold];

    /// Whether the instrument is validated for a patient of this age.
    fn applies_to(&self, age: &AgeProfile) -> bool;

    /// Map a raw total to a severity level. Scores outside
    /// `[0, max_score]` are rejected, never clamped.
    fn classify(&self, raw_score: f64) -> Result<PainLevel, ScaleError> {
        let out_of_range = || ScaleError::OutOfRange {
            scale: self.id(),
            score: raw_score,
            max_score: self.max_score(),
        };

        if !raw_score.is_finite() || raw_score < 0.0 || raw_score > self.max_score() {
            return Err(out_of_range());
        }

        // Highest band whose lower edge the score has reached. For integer
        // totals this is the band containing the score; fractional totals
        // (VAS) fall into the band they have entered.
        self.thresholds()
            .iter()
            .rev()
            .find(|t| raw_score >= t.min_score)
            .map(|t| t.level)
            .ok_or_else(out_of_range)
    }

    /// Validate a completed assessment and classify its total.
    ///
    /// Every component must be answered exactly once with one of its
    /// option values.
    fn score(&self, selections: &[ComponentSelection]) -> Result<ScoredAssessment, ScaleError> {
        let scale = self.id();
        let components = self.components();

        if let Some(unknown) = selections
            .iter()
            .find(|s| !components.iter().any(|c| c.id == s.component_id))
        {
            return Err(ScaleError::UnknownComponent {
                scale,
                component_id: unknown.component_id.clone(),
            });
        }

        let mut ordered = Vec::with_capacity(components.len());
        for component in components {
            let mut matching = selections.iter().filter(|s| s.component_id == component.id);
            let selection = matching.next().ok_or_else(|| ScaleError::MissingComponent {
                scale,
                component_id: component.id.clone(),
            })?;
            if matching.next().is_some() {
                return Err(ScaleError::DuplicateComponent {
                    scale,
                    component_id: component.id.clone(),
                });
            }
            if !component.has_option(selection.value) {
                return Err(ScaleError::InvalidOption {
                    scale,
                    component_id: component.id.clone(),
                    value: selection.value,
                });
            }
            ordered.push(selection.clone());
        }

        let total_score: f64 = ordered.iter().map(|s| s.value).sum();
        let level = self.classify(total_score)?;
        tracing::debug!(%scale, total_score, %level, "scored assessment");

        Ok(ScoredAssessment {
            scale_id: scale,
            selections: ordered,
            total_score,
            level,
        })
    }

    /// Snapshot of the instrument for display.
    fn definition(&self) -> ScaleDefinition {
        ScaleDefinition {
            id: self.id(),
            name: self.name().to_string(),
            age_range: self.age_range().to_string(),
            max_score: self.max_score(),
            components: self.components().to_vec(),
            thresholds: self.thresholds().to_vec(),
        }
    }
}

/// All instruments in catalog order.
pub fn all_scales() -> [&'static dyn PainScale; 6] {
    ScaleId::ALL.map(scale)
}

/// Look up an instrument by id.
pub fn scale(id: ScaleId) -> &'static dyn PainScale {
    match id {
        ScaleId::PippR => &scales::pipp_r::PippR,
        ScaleId::Nips => &scales::nips::Nips,
        ScaleId::Flacc => &scales::flacc::Flacc,
        ScaleId::Cheops => &scales::cheops::Cheops,
        ScaleId::WongBaker => &scales::wong_baker::WongBaker,
        ScaleId::Vas => &scales::vas::Vas,
    }
}

/// Classify a raw score on the given instrument.
pub fn classify(id: ScaleId, raw_score: f64) -> Result<PainLevel, ScaleError> {
    scale(id).classify(raw_score)
}

/// Serializable snapshot of an instrument for display.
pub fn describe(id: ScaleId) -> ScaleDefinition {
    scale(id).definition()
}

/// Validate and total a completed assessment.
pub fn score_assessment(
    id: ScaleId,
    selections: &[ComponentSelection],
) -> Result<ScoredAssessment, ScaleError> {
    scale(id).score(selections)
}
