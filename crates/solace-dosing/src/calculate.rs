use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::DosingError;
use crate::parse::{MaxDoseBasis, ParsedDoseRange, ParsedMaxDose};
use crate::rounding::practical_round;
use crate::units::DoseUnit;

/// A patient-specific dose for one regimen. Recomputed on every weight
/// change; never cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CalculatedDose {
    pub route: String,
    pub frequency: String,
    pub min_dose: f64,
    pub max_dose: f64,
    pub unit: DoseUnit,
    /// Set only by an absolute ceiling; per-kg daily ceilings are reported
    /// in `max_daily_dose` without setting this.
    pub exceeds_max: bool,
    pub warning: Option<String>,
    pub max_daily_dose: Option<f64>,
    pub max_daily_unit: Option<DoseUnit>,
}

/// Relative slack when comparing a converted dose with its ceiling.
const CEILING_TOLERANCE: f64 = 1e-9;

pub(crate) fn check_weight_value(weight_kg: f64) -> Result<(), DosingError> {
    if weight_kg.is_finite() && weight_kg > 0.0 {
        Ok(())
    } else {
        Err(DosingError::InvalidWeight(weight_kg))
    }
}

/// Scale `dose` by `weight_kg`, round both bounds, and compare the rounded
/// upper bound with the absolute ceiling in `max_dose`, if any.
pub fn calculate(
    weight_kg: f64,
    route: &str,
    frequency: &str,
    dose: &ParsedDoseRange,
    max_dose: Option<&ParsedMaxDose>,
) -> Result<CalculatedDose, DosingError> {
    check_weight_value(weight_kg)?;

    let unit = dose.unit;
    let min_dose = practical_round(weight_kg * dose.min_per_kg, unit);
    let max_dose_value = practical_round(weight_kg * dose.max_per_kg, unit);

    let mut exceeds_max = false;
    let mut warning = None;

    if let Some(limit) = max_dose
        && let (Some(ceiling), Some(ceiling_unit)) = (limit.absolute_max, limit.absolute_unit)
    {
        match unit.convert(max_dose_value, ceiling_unit) {
            Some(upper) if upper > ceiling * (1.0 + CEILING_TOLERANCE) => {
                exceeds_max = true;
                let basis = match limit.absolute_basis {
                    Some(MaxDoseBasis::PerDose) => "per dose",
                    _ => "per day",
                };
                tracing::warn!(
                    route,
                    max_dose = max_dose_value,
                    %unit,
                    ceiling,
                    %ceiling_unit,
                    "calculated dose exceeds maximum"
                );
                warning = Some(format!(
                    "Calculated dose of {max_dose_value} {unit} exceeds the maximum of {ceiling} {ceiling_unit} {basis}. Cap at {ceiling} {ceiling_unit}."
                ));
            }
            Some(_) => {}
            None => {
                tracing::debug!(%unit, %ceiling_unit, "dose and ceiling units are not comparable");
            }
        }
    }

    let (max_daily_dose, max_daily_unit) = match max_dose.map(|l| daily_ceiling(weight_kg, l)) {
        Some(Some((value, unit))) => (Some(value), Some(unit)),
        _ => (None, None),
    };

    Ok(CalculatedDose {
        route: route.to_string(),
        frequency: frequency.to_string(),
        min_dose,
        max_dose: max_dose_value,
        unit,
        exceeds_max,
        warning,
        max_daily_dose,
        max_daily_unit,
    })
}

/// Per-kg daily ceiling scaled by weight, capped by an absolute daily
/// ceiling when both are present.
fn daily_ceiling(weight_kg: f64, limit: &ParsedMaxDose) -> Option<(f64, DoseUnit)> {
    let per_kg = limit.per_kg_per_day?;
    let unit = limit.per_kg_per_day_unit?;
    let mut daily = practical_round(weight_kg * per_kg, unit);

    if limit.absolute_basis == Some(MaxDoseBasis::PerDay)
        && let (Some(ceiling), Some(ceiling_unit)) = (limit.absolute_max, limit.absolute_unit)
        && let Some(ceiling) = ceiling_unit.convert(ceiling, unit)
    {
        daily = daily.min(ceiling);
    }
    Some((daily, unit))
}
