//! Age-based instrument selection.
//!
//! Applicability rules live with each instrument ([`crate::PainScale::applies_to`]);
//! this module only decides the order in which matching instruments are
//! presented.

use jiff::civil::Date;
use solace_core::{AgeInput, AgeProfile};

use crate::error::ScaleError;
use crate::{ScaleId, scale};

/// Presentation order, most age-specific first.
pub const DEFAULT_ORDER: [ScaleId; 6] = ScaleId::ALL;

/// Instruments validated for a patient born on `dob`, as of `today`.
pub fn recommend_scales(
    dob: Date,
    gestational_weeks: Option<u8>,
    today: Date,
) -> Result<Vec<ScaleId>, ScaleError> {
    let input = AgeInput {
        date_of_birth: dob,
        gestational_age_weeks: gestational_weeks,
    };
    let profile = AgeProfile::resolve(&input, today)?;
    Ok(recommend_for_profile(&profile))
}

pub fn recommend_for_profile(profile: &AgeProfile) -> Vec<ScaleId> {
    recommend_in_order(profile, &DEFAULT_ORDER)
}

/// Like [`recommend_for_profile`] with a caller-chosen order. Ids repeated
/// in `order` are reported once.
pub fn recommend_in_order(profile: &AgeProfile, order: &[ScaleId]) -> Vec<ScaleId> {
    let mut recommended: Vec<ScaleId> = Vec::new();
    for id in order {
        if !recommended.contains(id) && scale(*id).applies_to(profile) {
            recommended.push(*id);
        }
    }
    tracing::debug!(
        corrected_days = profile.corrected_days,
        postmenstrual_weeks = profile.postmenstrual_weeks,
        ?recommended,
        "recommended pain scales"
    );
    recommended
}
