use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Developmental age band. The five bands partition every age in days,
/// with negative corrected ages folding into `Neonate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AgeCategory {
    Neonate,
    Infant,
    Toddler,
    Child,
    Adolescent,
}

impl AgeCategory {
    pub const ALL: [AgeCategory; 5] = [
        AgeCategory::Neonate,
        AgeCategory::Infant,
        AgeCategory::Toddler,
        AgeCategory::Child,
        AgeCategory::Adolescent,
    ];

    /// Last day (inclusive) of each band except `Adolescent`, which is open.
    const NEONATE_LAST_DAY: i64 = 28;
    const INFANT_LAST_DAY: i64 = 365;
    const TODDLER_LAST_DAY: i64 = 1095;
    const CHILD_LAST_DAY: i64 = 4380;

    pub fn from_days(age_in_days: i64) -> Self {
        match age_in_days {
            d if d <= Self::NEONATE_LAST_DAY => AgeCategory::Neonate,
            d if d <= Self::INFANT_LAST_DAY => AgeCategory::Infant,
            d if d <= Self::TODDLER_LAST_DAY => AgeCategory::Toddler,
            d if d <= Self::CHILD_LAST_DAY => AgeCategory::Child,
            _ => AgeCategory::Adolescent,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AgeCategory::Neonate => "neonate",
            AgeCategory::Infant => "infant",
            AgeCategory::Toddler => "toddler",
            AgeCategory::Child => "child",
            AgeCategory::Adolescent => "adolescent",
        }
    }
}

impl std::fmt::Display for AgeCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Patient age as supplied by the records layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AgeInput {
    pub date_of_birth: jiff::civil::Date,
    /// Gestational age at birth in completed weeks (22–44). Only used to
    /// correct for prematurity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gestational_age_weeks: Option<u8>,
}

/// Every age measure the recommenders need, resolved against one
/// reference date. Build with [`AgeProfile::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AgeProfile {
    pub chronological_days: i64,
    /// Chronological age reduced by the prematurity deficit. May be
    /// negative for very premature infants.
    pub corrected_days: i64,
    /// Completed calendar months since the corrected birth date (birth date
    /// shifted by the prematurity deficit). Negative before that date.
    pub corrected_months: i32,
    /// Completed calendar years since the corrected birth date.
    pub corrected_years: i32,
    /// Gestational age plus chronological weeks. Term (40 weeks) is assumed
    /// when no gestational age was recorded.
    pub postmenstrual_weeks: f64,
    pub category: AgeCategory,
}
