use solace_core::AgeProfile;

use crate::scoring::{Component, ComponentOption, Threshold, four_bands};
use crate::{PainScale, ScaleId};

/// VAS: Visual Analogue Scale, self-reported intensity 0–10.
pub struct Vas;

impl PainScale for Vas {
    fn id(&self) -> ScaleId {
        ScaleId::Vas
    }

    fn name(&self) -> &str {
        "Visual Analogue Scale"
    }

    fn age_range(&self) -> &str {
        "8 years and older"
    }

    fn max_score(&self) -> f64 {
        10.0
    }

    fn components(&self) -> &[Component] {
        static COMPONENTS: std::sync::LazyLock<Vec<Component>> = std::sync::LazyLock::new(|| {
            let options = (0..=10)
                .map(|n| ComponentOption {
                    value: f64::from(n),
                    label: match n {
                        0 => "0 - No pain".to_string(),
                        10 => "10 - Worst possible pain".to_string(),
                        _ => n.to_string(),
                    },
                })
                .collect();

            vec![Component {
                id: "intensity".to_string(),
                name: "Pain Intensity".to_string(),
                options,
            }]
        });
        &COMPONENTS
    }

    fn thresholds(&self) -> &[Threshold] {
        static THRESHOLDS: std::sync::LazyLock<Vec<Threshold>> =
            std::sync::LazyLock::new(|| four_bands(0.0, 3.0, 6.0, 10.0));
        &THRESHOLDS
    }

    fn applies_to(&self, age: &AgeProfile) -> bool {
        age.corrected_years >= 8
    }
}
