//! Narrow grammar for free-text dosing shorthand.
//!
//! Both parsers return `None` when the text carries nothing they
//! recognise; callers treat that as "dosing information unavailable".

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::units::DoseUnit;

/// Case-sensitive markers meaning "do not dose".
const NOT_RECOMMENDED_MARKERS: [&str; 2] = ["NOT", "N/A"];

const NUMBER: &str = r"(\d+(?:\.\d+)?)";

static RANGE_PER_KG: LazyLock<Regex> = LazyLock::new(|| {
    compile(&format!(
        r"{NUMBER}\s*(?:-|–|to)\s*{NUMBER}\s*(mcg|mg|g|mL|ml)\s*/\s*kg"
    ))
});

static SINGLE_PER_KG: LazyLock<Regex> =
    LazyLock::new(|| compile(&format!(r"{NUMBER}\s*(mcg|mg|g|mL|ml)\s*/\s*kg")));

static PER_KG_PER_DAY: LazyLock<Regex> =
    LazyLock::new(|| compile(&format!(r"{NUMBER}\s*(mcg|mg|g)\s*/\s*kg\s*/\s*day")));

static ABSOLUTE_PER_DAY: LazyLock<Regex> = LazyLock::new(|| {
    compile(&format!(
        r"\b[Mm]ax(?:imum)?:?\s*{NUMBER}\s*(mcg|mg|g)\s*/\s*day"
    ))
});

static ABSOLUTE_PER_DOSE: LazyLock<Regex> =
    LazyLock::new(|| compile(&format!(r"{NUMBER}\s*(mcg|mg|g)\s*/\s*dose")));

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid dose pattern {pattern:?}: {e}"))
}

/// Per-kilogram dose range. `min_per_kg == max_per_kg` for single values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ParsedDoseRange {
    pub min_per_kg: f64,
    pub max_per_kg: f64,
    pub unit: DoseUnit,
}

/// Whether an absolute ceiling applies to a day's total or to one dose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum MaxDoseBasis {
    PerDay,
    PerDose,
}

/// Ceilings found in a dose string. Gram values are stored as milligrams.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ParsedMaxDose {
    pub per_kg_per_day: Option<f64>,
    pub per_kg_per_day_unit: Option<DoseUnit>,
    pub absolute_max: Option<f64>,
    pub absolute_unit: Option<DoseUnit>,
    pub absolute_basis: Option<MaxDoseBasis>,
}

fn is_not_recommended(text: &str) -> bool {
    NOT_RECOMMENDED_MARKERS.iter().any(|m| text.contains(m))
}

fn number(capture: Option<regex::Match<'_>>) -> Option<f64> {
    capture?.as_str().parse().ok()
}

/// Gram quantities become milligrams; every other unit passes through.
fn normalize_grams(value: f64, unit: DoseUnit) -> (f64, DoseUnit) {
    match unit {
        DoseUnit::G => (value * 1000.0, DoseUnit::Mg),
        other => (value, other),
    }
}

fn range_from(caps: &regex::Captures<'_>) -> Option<ParsedDoseRange> {
    Some(ParsedDoseRange {
        min_per_kg: number(caps.get(1))?,
        max_per_kg: number(caps.get(2))?,
        unit: DoseUnit::from_token(caps.get(3)?.as_str())?,
    })
}

/// Extract the per-kilogram dose from text like `0.05-0.1 mg/kg/dose` or
/// `15 mg/kg`.
pub fn parse_dose_range(text: &str) -> Option<ParsedDoseRange> {
    if is_not_recommended(text) {
        tracing::debug!(text, "dose marked as not recommended");
        return None;
    }

    if let Some(range) = RANGE_PER_KG.captures(text).and_then(|caps| range_from(&caps)) {
        return Some(range);
    }

    if let Some(caps) = SINGLE_PER_KG.captures(text) {
        let value = number(caps.get(1))?;
        let unit = DoseUnit::from_token(caps.get(2)?.as_str())?;
        return Some(ParsedDoseRange {
            min_per_kg: value,
            max_per_kg: value,
            unit,
        });
    }

    tracing::debug!(text, "no per-kg dose found");
    None
}

/// Extract dose ceilings: a per-kg daily ceiling (`75 mg/kg/day`), an
/// absolute daily ceiling (`max 4g/day`) and, only when there is no
/// absolute daily ceiling, an absolute per-dose ceiling (`10 mg/dose`).
pub fn parse_max_dose_limit(text: &str) -> Option<ParsedMaxDose> {
    let mut limit = ParsedMaxDose::default();

    if let Some(caps) = PER_KG_PER_DAY.captures(text)
        && let (Some(value), Some(unit)) = (
            number(caps.get(1)),
            caps.get(2).and_then(|m| DoseUnit::from_token(m.as_str())),
        )
    {
        let (value, unit) = normalize_grams(value, unit);
        limit.per_kg_per_day = Some(value);
        limit.per_kg_per_day_unit = Some(unit);
    }

    let absolute = [
        (&*ABSOLUTE_PER_DAY, MaxDoseBasis::PerDay),
        (&*ABSOLUTE_PER_DOSE, MaxDoseBasis::PerDose),
    ]
    .into_iter()
    .find_map(|(pattern, basis)| {
        let caps = pattern.captures(text)?;
        let value = number(caps.get(1))?;
        let unit = DoseUnit::from_token(caps.get(2)?.as_str())?;
        Some((normalize_grams(value, unit), basis))
    });

    if let Some(((value, unit), basis)) = absolute {
        limit.absolute_max = Some(value);
        limit.absolute_unit = Some(unit);
        limit.absolute_basis = Some(basis);
    }

    if limit.per_kg_per_day.is_none() && limit.absolute_max.is_none() {
        tracing::debug!(text, "no dose ceiling found");
        return None;
    }
    Some(limit)
}
