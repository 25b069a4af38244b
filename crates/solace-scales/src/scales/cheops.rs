use solace_core::AgeProfile;

use crate::scoring::{Component, Threshold, component, four_bands};
use crate::{PainScale, ScaleId};

/// CHEOPS: Children's Hospital of Eastern Ontario Pain Scale.
/// Six behavioural items. Cry is 1–3, facial and verbal 0–2, torso, touch
/// and legs 1–2, so totals run 4–13; 4 means no pain behaviour observed.
pub struct Cheops;

impl PainScale for Cheops {
    fn id(&self) -> ScaleId {
        ScaleId::Cheops
    }

    fn name(&self) -> &str {
        "CHEOPS"
    }

    fn age_range(&self) -> &str {
        "1 to 7 years"
    }

    fn max_score(&self) -> f64 {
        13.0
    }

    fn components(&self) -> &[Component] {
        static COMPONENTS: std::sync::LazyLock<Vec<Component>> = std::sync::LazyLock::new(|| {
            vec![
                component(
                    "cry",
                    "Cry",
                    &[(1.0, "No cry"), (2.0, "Moaning or crying"), (3.0, "Scream")],
                ),
                component(
                    "facial",
                    "Facial",
                    &[(0.0, "Smiling"), (1.0, "Composed"), (2.0, "Grimace")],
                ),
                component(
                    "child_verbal",
                    "Child Verbal",
                    &[
                        (0.0, "Positive statements"),
                        (1.0, "None, or complaints other than pain"),
                        (2.0, "Pain complaints"),
                    ],
                ),
                component(
                    "torso",
                    "Torso",
                    &[
                        (1.0, "Neutral"),
                        (2.0, "Shifting, tense, shivering, upright or restrained"),
                    ],
                ),
                component(
                    "touch",
                    "Touch",
                    &[
                        (1.0, "Not touching"),
                        (2.0, "Reaching, touching, grabbing or restrained"),
                    ],
                ),
                component(
                    "legs",
                    "Legs",
                    &[
                        (1.0, "Neutral"),
                        (2.0, "Squirming, kicking, drawn up, standing or restrained"),
                    ],
                ),
            ]
        });
        &COMPONENTS
    }

    fn thresholds(&self) -> &[Threshold] {
        static THRESHOLDS: std::sync::LazyLock<Vec<Threshold>> =
            std::sync::LazyLock::new(|| four_bands(4.0, 7.0, 10.0, 13.0));
        &THRESHOLDS
    }

    fn applies_to(&self, age: &AgeProfile) -> bool {
        (1..8).contains(&age.corrected_years)
    }
}
