use serde::{Deserialize, Serialize};
use solace_core::PainLevel;
use ts_rs::TS;

use crate::ScaleId;

/// Allowed floating point slack when matching a submitted value against an
/// option value.
const VALUE_TOLERANCE: f64 = 1e-9;

/// One selectable answer of a component.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ComponentOption {
    pub value: f64,
    pub label: String,
}

/// A scored item of an instrument (e.g. FLACC "Face").
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Component {
    pub id: String,
    pub name: String,
    pub options: Vec<ComponentOption>,
}

impl Component {
    pub fn min_value(&self) -> f64 {
        self.options.iter().map(|o| o.value).fold(f64::INFINITY, f64::min)
    }

    pub fn max_value(&self) -> f64 {
        self.options.iter().map(|o| o.value).fold(f64::NEG_INFINITY, f64::max)
    }

    pub fn has_option(&self, value: f64) -> bool {
        self.options
            .iter()
            .any(|o| (o.value - value).abs() < VALUE_TOLERANCE)
    }
}

/// Score band `[min_score, max_score]` mapped to a severity level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Threshold {
    pub min_score: f64,
    pub max_score: f64,
    pub level: PainLevel,
}

/// A clinician's answer for one component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ComponentSelection {
    pub component_id: String,
    pub value: f64,
}

/// A completed, validated assessment. This is the payload the records layer
/// stores verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoredAssessment {
    pub scale_id: ScaleId,
    /// Selections in the instrument's component order.
    pub selections: Vec<ComponentSelection>,
    pub total_score: f64,
    pub level: PainLevel,
}

/// Serializable snapshot of an instrument for the presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScaleDefinition {
    pub id: ScaleId,
    pub name: String,
    pub age_range: String,
    pub max_score: f64,
    pub components: Vec<Component>,
    pub thresholds: Vec<Threshold>,
}

pub(crate) fn component(id: &str, name: &str, options: &[(f64, &str)]) -> Component {
    Component {
        id: id.to_string(),
        name: name.to_string(),
        options: options
            .iter()
            .map(|(value, label)| ComponentOption {
                value: *value,
                label: label.to_string(),
            })
            .collect(),
    }
}

/// Build the usual four-band table from the last score of each of the
/// `none`, `mild` and `moderate` bands. Bands are contiguous integer runs;
/// `severe` runs to `max_score`.
pub(crate) fn four_bands(
    none_to: f64,
    mild_to: f64,
    moderate_to: f64,
    max_score: f64,
) -> Vec<Threshold> {
    vec![
        Threshold {
            min_score: 0.0,
            max_score: none_to,
            level: PainLevel::None,
        },
        Threshold {
            min_score: none_to + 1.0,
            max_score: mild_to,
            level: PainLevel::Mild,
        },
        Threshold {
            min_score: mild_to + 1.0,
            max_score: moderate_to,
            level: PainLevel::Moderate,
        },
        Threshold {
            min_score: moderate_to + 1.0,
            max_score,
            level: PainLevel::Severe,
        },
    ]
}
