//! Chronological and gestationally corrected age arithmetic.
//!
//! Every function takes the reference date (`today`) explicitly; nothing
//! here reads the wall clock.

use jiff::{Span, Unit};
use jiff::civil::Date;

use crate::error::CoreError;
use crate::models::age::{AgeCategory, AgeInput, AgeProfile};

/// Full-term reference gestation.
pub const TERM_GESTATION_WEEKS: u8 = 40;

/// Accepted gestational ages at birth, in weeks.
pub const GESTATION_WEEKS_RANGE: std::ops::RangeInclusive<u8> = 22..=44;

fn check_gestation(weeks: u8) -> Result<(), CoreError> {
    if GESTATION_WEEKS_RANGE.contains(&weeks) {
        Ok(())
    } else {
        Err(CoreError::InvalidInput(format!(
            "gestational age {weeks} weeks is outside {}-{} weeks",
            GESTATION_WEEKS_RANGE.start(),
            GESTATION_WEEKS_RANGE.end(),
        )))
    }
}

/// Days elapsed from `dob` to `today`. Fails if `dob` is in the future.
pub fn chronological_age_days(dob: Date, today: Date) -> Result<i64, CoreError> {
    if dob > today {
        return Err(CoreError::InvalidInput(format!(
            "date of birth {dob} is after {today}"
        )));
    }
    let span = today.since(dob)?;
    Ok(i64::from(span.get_days()))
}

/// Age in days, reduced by `(40 - gestational_weeks) * 7` when a gestational
/// age is given. The corrected value can be negative.
pub fn age_in_days(
    dob: Date,
    gestational_weeks: Option<u8>,
    today: Date,
) -> Result<i64, CoreError> {
    let chronological = chronological_age_days(dob, today)?;
    match gestational_weeks {
        Some(weeks) => {
            check_gestation(weeks)?;
            let deficit_weeks = i64::from(TERM_GESTATION_WEEKS) - i64::from(weeks);
            Ok(chronological - deficit_weeks * 7)
        }
        None => Ok(chronological),
    }
}

/// Gestational age at birth plus chronological age, in weeks.
pub fn postmenstrual_age_weeks(
    dob: Date,
    gestational_weeks: u8,
    today: Date,
) -> Result<f64, CoreError> {
    check_gestation(gestational_weeks)?;
    let chronological = chronological_age_days(dob, today)?;
    Ok(f64::from(gestational_weeks) + chronological as f64 / 7.0)
}

pub fn age_category(age_in_days: i64) -> AgeCategory {
    AgeCategory::from_days(age_in_days)
}

/// Human-readable chronological age in a single unit: days under 60 days,
/// months under 730 days, years otherwise.
///
/// The gestational age is validated but never applied; display always uses
/// the uncorrected age.
pub fn format_age(
    dob: Date,
    gestational_weeks: Option<u8>,
    today: Date,
) -> Result<String, CoreError> {
    if let Some(weeks) = gestational_weeks {
        check_gestation(weeks)?;
    }
    let days = chronological_age_days(dob, today)?;

    let (count, unit) = if days < 60 {
        (days, "day")
    } else if days < 730 {
        let months = today.since((Unit::Month, dob))?.get_months();
        (i64::from(months), "month")
    } else {
        let years = today.since((Unit::Year, dob))?.get_years();
        (i64::from(years), "year")
    };

    let plural = if count == 1 { "" } else { "s" };
    Ok(format!("{count} {unit}{plural}"))
}

impl AgeProfile {
    /// Resolve every age measure for `input` as of `today`.
    pub fn resolve(input: &AgeInput, today: Date) -> Result<Self, CoreError> {
        let chronological_days = chronological_age_days(input.date_of_birth, today)?;
        let corrected_days = age_in_days(input.date_of_birth, input.gestational_age_weeks, today)?;
        let gestation = input.gestational_age_weeks.unwrap_or(TERM_GESTATION_WEEKS);
        let postmenstrual_weeks = f64::from(gestation) + chronological_days as f64 / 7.0;

        let corrected_birth = input
            .date_of_birth
            .checked_add(Span::new().days(chronological_days - corrected_days))?;
        let corrected_months = today.since((Unit::Month, corrected_birth))?.get_months();
        let corrected_years = i32::from(today.since((Unit::Year, corrected_birth))?.get_years());

        let profile = AgeProfile {
            chronological_days,
            corrected_days,
            corrected_months,
            corrected_years,
            postmenstrual_weeks,
            category: AgeCategory::from_days(corrected_days),
        };
        tracing::debug!(
            chronological_days,
            corrected_days,
            corrected_months,
            postmenstrual_weeks,
            category = %profile.category,
            "resolved age profile"
        );
        Ok(profile)
    }
}
