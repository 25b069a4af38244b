use solace_core::AgeProfile;

use crate::scoring::{Component, Threshold, component, four_bands};
use crate::{PainScale, ScaleId};

/// Wong-Baker FACES: self-report on six faces scored 0, 2, 4, 6, 8, 10.
pub struct WongBaker;

impl PainScale for WongBaker {
    fn id(&self) -> ScaleId {
        ScaleId::WongBaker
    }

    fn name(&self) -> &str {
        "Wong-Baker FACES"
    }

    fn age_range(&self) -> &str {
        "3 years and older"
    }

    fn max_score(&self) -> f64 {
        10.0
    }

    fn components(&self) -> &[Component] {
        static COMPONENTS: std::sync::LazyLock<Vec<Component>> = std::sync::LazyLock::new(|| {
            vec![component(
                "face",
                "Face",
                &[
                    (0.0, "No hurt"),
                    (2.0, "Hurts little bit"),
                    (4.0, "Hurts little more"),
                    (6.0, "Hurts even more"),
                    (8.0, "Hurts whole lot"),
                    (10.0, "Hurts worst"),
                ],
            )]
        });
        &COMPONENTS
    }

    fn thresholds(&self) -> &[Threshold] {
        static THRESHOLDS: std::sync::LazyLock<Vec<Threshold>> =
            std::sync::LazyLock::new(|| four_bands(0.0, 3.0, 7.0, 10.0));
        &THRESHOLDS
    }

    fn applies_to(&self, age: &AgeProfile) -> bool {
        age.corrected_years >= 3
    }
}
