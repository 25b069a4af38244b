use solace_dosing::{
    DoseUnit, MaxDoseBasis, ParsedDoseRange, ParsedMaxDose, parse_dose_range,
    parse_max_dose_limit,
};

#[test]
fn range_per_kg_per_dose() {
    assert_eq!(
        parse_dose_range("0.05-0.1 mg/kg/dose"),
        Some(ParsedDoseRange {
            min_per_kg: 0.05,
            max_per_kg: 0.1,
            unit: DoseUnit::Mg,
        })
    );
}

#[test]
fn range_with_spaces_and_mcg() {
    let parsed = parse_dose_range("1 - 2 mcg / kg IV").unwrap();
    assert_eq!(parsed.min_per_kg, 1.0);
    assert_eq!(parsed.max_per_kg, 2.0);
    assert_eq!(parsed.unit, DoseUnit::Mcg);
}

#[test]
fn single_value_is_min_and_max() {
    let parsed = parse_dose_range("75 mg/kg/day (max 4g/day)").unwrap();
    assert_eq!(parsed.min_per_kg, 75.0);
    assert_eq!(parsed.max_per_kg, 75.0);
    assert_eq!(parsed.unit, DoseUnit::Mg);
}

#[test]
fn volume_doses_parse() {
    let parsed = parse_dose_range("0.2-0.5 mL/kg/dose").unwrap();
    assert_eq!(parsed.unit, DoseUnit::Ml);
}

#[test]
fn not_recommended_markers_yield_none() {
    assert_eq!(parse_dose_range("NOT RECOMMENDED"), None);
    assert_eq!(parse_dose_range("N/A"), None);
    assert_eq!(parse_dose_range("0.1 mg/kg NOT for neonates"), None);
}

#[test]
fn markers_are_case_sensitive() {
    assert!(parse_dose_range("0.1 mg/kg, note: slow push").is_some());
}

#[test]
fn text_without_per_kg_dose_yields_none() {
    assert_eq!(parse_dose_range("see protocol"), None);
    assert_eq!(parse_dose_range("500 mg every 6 hours"), None);
    assert_eq!(parse_dose_range(""), None);
}

#[test]
fn per_kg_daily_with_gram_absolute_ceiling() {
    assert_eq!(
        parse_max_dose_limit("75 mg/kg/day (max 4g/day)"),
        Some(ParsedMaxDose {
            per_kg_per_day: Some(75.0),
            per_kg_per_day_unit: Some(DoseUnit::Mg),
            absolute_max: Some(4000.0),
            absolute_unit: Some(DoseUnit::Mg),
            absolute_basis: Some(MaxDoseBasis::PerDay),
        })
    );
}

#[test]
fn per_dose_ceiling_alone() {
    let limit = parse_max_dose_limit("max 2 mg/dose").unwrap();
    assert_eq!(limit.per_kg_per_day, None);
    assert_eq!(limit.absolute_max, Some(2.0));
    assert_eq!(limit.absolute_unit, Some(DoseUnit::Mg));
    assert_eq!(limit.absolute_basis, Some(MaxDoseBasis::PerDose));
}

#[test]
fn daily_ceiling_wins_over_per_dose_ceiling() {
    let limit = parse_max_dose_limit("10 mg/dose, max 40 mg/day").unwrap();
    assert_eq!(limit.absolute_max, Some(40.0));
    assert_eq!(limit.absolute_basis, Some(MaxDoseBasis::PerDay));
}

#[test]
fn mcg_ceiling_keeps_its_unit() {
    let limit = parse_max_dose_limit("max 50 mcg/dose").unwrap();
    assert_eq!(limit.absolute_max, Some(50.0));
    assert_eq!(limit.absolute_unit, Some(DoseUnit::Mcg));
}

#[test]
fn per_kg_dose_is_not_a_per_dose_ceiling() {
    assert_eq!(parse_max_dose_limit("0.05-0.1 mg/kg/dose"), None);
}

#[test]
fn text_without_ceilings_yields_none() {
    assert_eq!(parse_max_dose_limit("titrate to effect"), None);
}
