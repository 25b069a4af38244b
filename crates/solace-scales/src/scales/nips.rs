use solace_core::AgeProfile;

use crate::scoring::{Component, Threshold, component, four_bands};
use crate::{PainScale, ScaleId};

/// NIPS: Neonatal Infant Pain Scale.
/// Six items; cry is scored 0–2, the rest 0–1. Total 0–7.
pub struct Nips;

impl PainScale for Nips {
    fn id(&self) -> ScaleId {
        ScaleId::Nips
    }

    fn name(&self) -> &str {
        "NIPS"
    }

    fn age_range(&self) -> &str {
        "Neonates and infants under 12 months"
    }

    fn max_score(&self) -> f64 {
        7.0
    }

    fn components(&self) -> &[Component] {
        static COMPONENTS: std::sync::LazyLock<Vec<Component>> = std::sync::LazyLock::new(|| {
            vec![
                component(
                    "facial_expression",
                    "Facial Expression",
                    &[(0.0, "Relaxed muscles"), (1.0, "Grimace")],
                ),
                component(
                    "cry",
                    "Cry",
                    &[(0.0, "No cry"), (1.0, "Whimper"), (2.0, "Vigorous cry")],
                ),
                component(
                    "breathing",
                    "Breathing Patterns",
                    &[(0.0, "Relaxed"), (1.0, "Change in breathing")],
                ),
                component(
                    "arms",
                    "Arms",
                    &[(0.0, "Relaxed or restrained"), (1.0, "Flexed or extended")],
                ),
                component(
                    "legs",
                    "Legs",
                    &[(0.0, "Relaxed or restrained"), (1.0, "Flexed or extended")],
                ),
                component(
                    "state_of_arousal",
                    "State of Arousal",
                    &[(0.0, "Sleeping or awake"), (1.0, "Fussy")],
                ),
            ]
        });
        &COMPONENTS
    }

    fn thresholds(&self) -> &[Threshold] {
        static THRESHOLDS: std::sync::LazyLock<Vec<Threshold>> =
            std::sync::LazyLock::new(|| four_bands(0.0, 2.0, 4.0, 7.0));
        &THRESHOLDS
    }

    fn applies_to(&self, age: &AgeProfile) -> bool {
        age.corrected_months < 12
    }
}
