use serde::{Deserialize, Serialize};
use solace_core::AgeCategory;
use ts_rs::TS;

use crate::calculate::{CalculatedDose, calculate, check_weight_value};
use crate::error::DosingError;
use crate::formulary::{DosingRegimen, Medication};
use crate::parse::{parse_dose_range, parse_max_dose_limit};
use crate::weight::check_weight;

/// One regimen of a medication at the current weight. `dose` is `None`
/// when the regimen's text gives no usable per-kg dose.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DoseRow {
    pub route: String,
    pub frequency: String,
    pub dose_text: String,
    pub dose: Option<CalculatedDose>,
}

/// Every regimen of one medication at one weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DoseTable {
    pub medication_id: String,
    pub medication_name: String,
    pub weight_kg: f64,
    pub weight_warning: Option<String>,
    pub rows: Vec<DoseRow>,
}

/// Calculate a single regimen. `Ok(None)` means dosing is unavailable for
/// it, not that anything failed.
pub fn calculate_regimen(
    weight_kg: f64,
    regimen: &DosingRegimen,
) -> Result<Option<CalculatedDose>, DosingError> {
    let Some(range) = parse_dose_range(&regimen.dose) else {
        return Ok(None);
    };
    let limit = regimen.max_dose.as_deref().and_then(parse_max_dose_limit);
    calculate(
        weight_kg,
        &regimen.route,
        &regimen.frequency,
        &range,
        limit.as_ref(),
    )
    .map(Some)
}

/// Doses for every regimen of `medication` at `weight_kg`, with an advisory
/// warning when the weight is implausible for `category`.
pub fn dose_table(
    weight_kg: f64,
    medication: &Medication,
    category: Option<AgeCategory>,
) -> Result<DoseTable, DosingError> {
    check_weight_value(weight_kg)?;

    let rows = medication
        .regimens
        .iter()
        .map(|regimen| {
            Ok(DoseRow {
                route: regimen.route.clone(),
                frequency: regimen.frequency.clone(),
                dose_text: regimen.dose.clone(),
                dose: calculate_regimen(weight_kg, regimen)?,
            })
        })
        .collect::<Result<Vec<_>, DosingError>>()?;

    Ok(DoseTable {
        medication_id: medication.id.clone(),
        medication_name: medication.name.clone(),
        weight_kg,
        weight_warning: check_weight(weight_kg, category),
        rows,
    })
}
