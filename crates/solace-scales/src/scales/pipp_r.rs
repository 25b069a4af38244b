use solace_core::AgeProfile;

use crate::scoring::{Component, Threshold, component, four_bands};
use crate::{PainScale, ScaleId};

/// Postmenstrual age up to which PIPP-R is validated.
pub const MAX_POSTMENSTRUAL_WEEKS: f64 = 48.0;

/// PIPP-R: Premature Infant Pain Profile, Revised.
/// Seven items scored 0–3: two contextual, two physiological, three facial.
/// Total 0–21.
pub struct PippR;

impl PainScale for PippR {
    fn id(&self) -> ScaleId {
        ScaleId::PippR
    }

    fn name(&self) -> &str {
        "PIPP-R"
    }

    fn age_range(&self) -> &str {
        "Preterm and term infants up to 48 weeks postmenstrual age"
    }

    fn max_score(&self) -> f64 {
        21.0
    }

    fn components(&self) -> &[Component] {
        static COMPONENTS: std::sync::LazyLock<Vec<Component>> = std::sync::LazyLock::new(|| {
            let facial = |id: &str, name: &str| {
                component(
                    id,
                    name,
                    &[
                        (0.0, "None (under 3 seconds)"),
                        (1.0, "Minimal (3–10 seconds)"),
                        (2.0, "Moderate (11–20 seconds)"),
                        (3.0, "Maximal (over 20 seconds)"),
                    ],
                )
            };

            vec![
                component(
                    "gestational_age",
                    "Gestational Age",
                    &[
                        (0.0, "36 weeks or more"),
                        (1.0, "32 to under 36 weeks"),
                        (2.0, "28 to under 32 weeks"),
                        (3.0, "Under 28 weeks"),
                    ],
                ),
                component(
                    "behavioral_state",
                    "Behavioral State",
                    &[
                        (0.0, "Active, awake, eyes open, facial movements"),
                        (1.0, "Quiet, awake, eyes open, no facial movements"),
                        (2.0, "Active, asleep, eyes closed, facial movements"),
                        (3.0, "Quiet, asleep, eyes closed, no facial movements"),
                    ],
                ),
                component(
                    "heart_rate_max",
                    "Heart Rate Maximum",
                    &[
                        (0.0, "Increase of 0–4 bpm"),
                        (1.0, "Increase of 5–14 bpm"),
                        (2.0, "Increase of 15–24 bpm"),
                        (3.0, "Increase of 25 bpm or more"),
                    ],
                ),
                component(
                    "oxygen_saturation_min",
                    "Oxygen Saturation Minimum",
                    &[
                        (0.0, "Decrease of 0–2%"),
                        (1.0, "Decrease of 3–5%"),
                        (2.0, "Decrease of 6–8%"),
                        (3.0, "Decrease of 9% or more"),
                    ],
                ),
                facial("brow_bulge", "Brow Bulge"),
                facial("eye_squeeze", "Eye Squeeze"),
                facial("nasolabial_furrow", "Nasolabial Furrow"),
            ]
        });
        &COMPONENTS
    }

    fn thresholds(&self) -> &[Threshold] {
        static THRESHOLDS: std::sync::LazyLock<Vec<Threshold>> =
            std::sync::LazyLock::new(|| four_bands(6.0, 9.0, 12.0, 21.0));
        &THRESHOLDS
    }

    fn applies_to(&self, age: &AgeProfile) -> bool {
        age.postmenstrual_weeks <= MAX_POSTMENSTRUAL_WEEKS
    }
}
