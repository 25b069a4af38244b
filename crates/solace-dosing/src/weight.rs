use serde::{Deserialize, Serialize};
use solace_core::AgeCategory;
use ts_rs::TS;

/// Plausible weight range for an age band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WeightBand {
    pub min_kg: f64,
    pub max_kg: f64,
    pub typical: String,
}

impl WeightBand {
    pub fn contains(&self, weight_kg: f64) -> bool {
        (self.min_kg..=self.max_kg).contains(&weight_kg)
    }
}

/// Band for `category`; the child band when the category is unknown.
pub fn weight_band(category: Option<AgeCategory>) -> WeightBand {
    match category.unwrap_or(AgeCategory::Child) {
        AgeCategory::Neonate => WeightBand {
            min_kg: 0.5,
            max_kg: 6.0,
            typical: "0.5-6 kg".to_string(),
        },
        AgeCategory::Infant => WeightBand {
            min_kg: 3.0,
            max_kg: 12.0,
            typical: "3-12 kg".to_string(),
        },
        AgeCategory::Toddler => WeightBand {
            min_kg: 8.0,
            max_kg: 20.0,
            typical: "8-20 kg".to_string(),
        },
        AgeCategory::Child => WeightBand {
            min_kg: 15.0,
            max_kg: 50.0,
            typical: "15-50 kg".to_string(),
        },
        AgeCategory::Adolescent => WeightBand {
            min_kg: 30.0,
            max_kg: 120.0,
            typical: "30-120 kg".to_string(),
        },
    }
}

/// Advisory warning when `weight_kg` is implausible for the age band.
/// Never blocks a calculation.
pub fn check_weight(weight_kg: f64, category: Option<AgeCategory>) -> Option<String> {
    let band = weight_band(category);
    if band.contains(weight_kg) {
        return None;
    }
    let label = category.map_or("patient of unknown age", |c| c.as_str());
    tracing::warn!(weight_kg, category = label, "weight outside typical range");
    Some(format!(
        "Weight {weight_kg} kg is outside the typical range for a {label} ({}). Please verify.",
        band.typical
    ))
}
