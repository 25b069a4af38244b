use solace_core::AgeProfile;

use crate::scoring::{Component, Threshold, component, four_bands};
use crate::{PainScale, ScaleId};

/// FLACC: Face, Legs, Activity, Cry, Consolability.
/// Five behavioural items scored 0–2. Total 0–10.
pub struct Flacc;

impl PainScale for Flacc {
    fn id(&self) -> ScaleId {
        ScaleId::Flacc
    }

    fn name(&self) -> &str {
        "FLACC"
    }

    fn age_range(&self) -> &str {
        "2 months to 7 years"
    }

    fn max_score(&self) -> f64 {
        10.0
    }

    fn components(&self) -> &[Component] {
        static COMPONENTS: std::sync::LazyLock<Vec<Component>> = std::sync::LazyLock::new(|| {
            vec![
                component(
                    "face",
                    "Face",
                    &[
                        (0.0, "No particular expression or smile"),
                        (1.0, "Occasional grimace or frown, withdrawn, disinterested"),
                        (2.0, "Frequent to constant quivering chin, clenched jaw"),
                    ],
                ),
                component(
                    "legs",
                    "Legs",
                    &[
                        (0.0, "Normal position or relaxed"),
                        (1.0, "Uneasy, restless, tense"),
                        (2.0, "Kicking, or legs drawn up"),
                    ],
                ),
                component(
                    "activity",
                    "Activity",
                    &[
                        (0.0, "Lying quietly, normal position, moves easily"),
                        (1.0, "Squirming, shifting back and forth, tense"),
                        (2.0, "Arched, rigid or jerking"),
                    ],
                ),
                component(
                    "cry",
                    "Cry",
                    &[
                        (0.0, "No cry (awake or asleep)"),
                        (1.0, "Moans or whimpers; occasional complaint"),
                        (2.0, "Crying steadily, screams or sobs, frequent complaints"),
                    ],
                ),
                component(
                    "consolability",
                    "Consolability",
                    &[
                        (0.0, "Content, relaxed"),
                        (1.0, "Reassured by occasional touching, hugging or being talked to"),
                        (2.0, "Difficult to console or comfort"),
                    ],
                ),
            ]
        });
        &COMPONENTS
    }

    fn thresholds(&self) -> &[Threshold] {
        static THRESHOLDS: std::sync::LazyLock<Vec<Threshold>> =
            std::sync::LazyLock::new(|| four_bands(0.0, 3.0, 6.0, 10.0));
        &THRESHOLDS
    }

    fn applies_to(&self, age: &AgeProfile) -> bool {
        age.corrected_months >= 2 && age.corrected_years < 8
    }
}
