use proptest::prelude::*;
use solace_dosing::error::DosingError;
use solace_dosing::{DoseUnit, calculate, parse_dose_range, parse_max_dose_limit};

#[test]
fn morphine_iv_for_twenty_kilograms() {
    let range = parse_dose_range("0.05-0.1 mg/kg/dose").unwrap();
    let limit = parse_max_dose_limit("max 2 mg/dose").unwrap();
    let dose = calculate(20.0, "IV", "every 2-4 hours", &range, Some(&limit)).unwrap();

    assert_eq!(dose.min_dose, 1.0);
    assert_eq!(dose.max_dose, 2.0);
    assert_eq!(dose.unit, DoseUnit::Mg);
    assert!(!dose.exceeds_max);
    assert_eq!(dose.warning, None);
    assert_eq!(dose.route, "IV");
    assert_eq!(dose.frequency, "every 2-4 hours");
}

#[test]
fn exceeding_absolute_ceiling_is_flagged_not_capped() {
    let range = parse_dose_range("0.05-0.1 mg/kg/dose").unwrap();
    let limit = parse_max_dose_limit("max 2 mg/dose").unwrap();
    let dose = calculate(35.0, "IV", "every 2-4 hours", &range, Some(&limit)).unwrap();

    assert_eq!(dose.max_dose, 3.5);
    assert!(dose.exceeds_max);
    let warning = dose.warning.unwrap();
    assert!(warning.contains("2 mg"), "{warning}");
    assert!(warning.contains("per dose"), "{warning}");
}

#[test]
fn acetaminophen_daily_ceiling_is_reported_without_flag() {
    let range = parse_dose_range("10-15 mg/kg/dose").unwrap();
    let limit = parse_max_dose_limit("75 mg/kg/day (max 4g/day)").unwrap();
    let dose = calculate(60.0, "PO", "every 4-6 hours", &range, Some(&limit)).unwrap();

    assert_eq!(dose.min_dose, 600.0);
    assert_eq!(dose.max_dose, 900.0);
    assert!(!dose.exceeds_max);
    // 75 mg/kg/day * 60 kg = 4500 mg, capped by the 4 g absolute ceiling.
    assert_eq!(dose.max_daily_dose, Some(4000.0));
    assert_eq!(dose.max_daily_unit, Some(DoseUnit::Mg));
}

#[test]
fn per_kg_daily_ceiling_alone_never_flags() {
    let range = parse_dose_range("30 mg/kg/dose").unwrap();
    let limit = parse_max_dose_limit("40 mg/kg/day").unwrap();
    let dose = calculate(10.0, "PO", "once", &range, Some(&limit)).unwrap();
    assert_eq!(dose.max_daily_dose, Some(400.0));
    assert!(!dose.exceeds_max);
}

#[test]
fn microgram_dose_against_microgram_ceiling() {
    let range = parse_dose_range("1-2 mcg/kg/dose").unwrap();
    let limit = parse_max_dose_limit("max 50 mcg/dose").unwrap();
    let dose = calculate(40.0, "IV", "every 1-2 hours", &range, Some(&limit)).unwrap();
    assert_eq!(dose.min_dose, 40.0);
    assert_eq!(dose.max_dose, 80.0);
    assert!(dose.exceeds_max);
}

#[test]
fn mixed_mass_units_are_compared_after_conversion() {
    let range = parse_dose_range("100 mcg/kg/dose").unwrap();
    let limit = parse_max_dose_limit("max 2 mg/dose").unwrap();
    // 30 kg * 100 mcg = 3000 mcg = 3 mg.
    let dose = calculate(30.0, "IV", "once", &range, Some(&limit)).unwrap();
    assert!(dose.exceeds_max);
}

#[test]
fn mixed_unit_dose_equal_to_ceiling_is_not_flagged() {
    let range = parse_dose_range("10 mcg/kg/dose").unwrap();
    let limit = parse_max_dose_limit("max 0.35 mg/dose").unwrap();
    let dose = calculate(35.0, "IV", "once", &range, Some(&limit)).unwrap();
    assert_eq!(dose.max_dose, 350.0);
    assert!(!dose.exceeds_max);
    assert_eq!(dose.warning, None);
}

#[test]
fn every_mcg_dose_at_its_mg_ceiling_passes() {
    for mcg in (50..100_000u32).step_by(10) {
        let range = parse_dose_range(&format!("{mcg} mcg/kg/dose")).unwrap();
        let ceiling = format!("max {}.{:03} mg/dose", mcg / 1000, mcg % 1000);
        let limit = parse_max_dose_limit(&ceiling).unwrap();
        let dose = calculate(1.0, "IV", "once", &range, Some(&limit)).unwrap();
        assert_eq!(dose.max_dose, f64::from(mcg));
        assert!(!dose.exceeds_max, "{mcg} mcg against {ceiling}");
    }
}

#[test]
fn mg_dose_at_its_mcg_ceiling_passes() {
    let range = parse_dose_range("0.35 mg/kg/dose").unwrap();
    let limit = parse_max_dose_limit("max 350 mcg/dose").unwrap();
    let dose = calculate(1.0, "IV", "once", &range, Some(&limit)).unwrap();
    assert!(!dose.exceeds_max);

    let over = parse_max_dose_limit("max 340 mcg/dose").unwrap();
    assert!(calculate(1.0, "IV", "once", &range, Some(&over)).unwrap().exceeds_max);
}

#[test]
fn unit_conversion_uses_exact_factors() {
    for mcg in (5..100_000u32).step_by(5) {
        let expected: f64 = format!("{}.{:03}", mcg / 1000, mcg % 1000).parse().unwrap();
        assert_eq!(DoseUnit::Mcg.convert(f64::from(mcg), DoseUnit::Mg), Some(expected));
    }
    assert_eq!(DoseUnit::G.convert(4.0, DoseUnit::Mg), Some(4000.0));
    assert_eq!(DoseUnit::Mg.convert(2.0, DoseUnit::Mcg), Some(2000.0));
    assert_eq!(DoseUnit::Ml.convert(2.0, DoseUnit::Mg), None);
}

#[test]
fn volume_dose_is_never_compared_with_mass_ceiling() {
    let range = parse_dose_range("0.5 mL/kg/dose").unwrap();
    let limit = parse_max_dose_limit("max 2 mg/dose").unwrap();
    let dose = calculate(30.0, "PO", "once", &range, Some(&limit)).unwrap();
    assert_eq!(dose.max_dose, 15.0);
    assert!(!dose.exceeds_max);
}

#[test]
fn no_ceiling_no_flag() {
    let range = parse_dose_range("0.1 mg/kg").unwrap();
    let dose = calculate(3.2, "IV", "once", &range, None).unwrap();
    assert_eq!(dose.min_dose, 0.32);
    assert!(!dose.exceeds_max);
    assert_eq!(dose.max_daily_dose, None);
}

#[test]
fn invalid_weights_are_rejected() {
    let range = parse_dose_range("0.1 mg/kg").unwrap();
    for weight in [0.0, -4.0, f64::NAN, f64::INFINITY] {
        assert!(matches!(
            calculate(weight, "IV", "once", &range, None),
            Err(DosingError::InvalidWeight(_))
        ));
    }
}

proptest! {
    #[test]
    fn calculation_is_deterministic(weight in 0.3f64..150.0, per_kg in 0.01f64..20.0) {
        let range = parse_dose_range(&format!("{per_kg:.3} mg/kg/dose")).unwrap();
        let limit = parse_max_dose_limit("75 mg/kg/day (max 4g/day)").unwrap();
        let first = calculate(weight, "PO", "q6h", &range, Some(&limit)).unwrap();
        let second = calculate(weight, "PO", "q6h", &range, Some(&limit)).unwrap();
        prop_assert_eq!(first, second);
    }
}
