use crate::units::DoseUnit;

fn round_to_places(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

fn round_to_step(value: f64, step: f64) -> f64 {
    (value / step).round() * step
}

/// Round a dose to an increment that can actually be measured out.
///
/// - mcg: nearest 5 below 50, nearest 10 from 50.
/// - mg: 2 decimals below 1, 1 decimal below 10, whole numbers below 100,
///   nearest 5 from 100.
/// - anything else: 2 decimals.
pub fn practical_round(value: f64, unit: DoseUnit) -> f64 {
    match unit {
        DoseUnit::Mcg if value < 50.0 => round_to_step(value, 5.0),
        DoseUnit::Mcg => round_to_step(value, 10.0),
        DoseUnit::Mg if value < 1.0 => round_to_places(value, 2),
        DoseUnit::Mg if value < 10.0 => round_to_places(value, 1),
        DoseUnit::Mg if value < 100.0 => value.round(),
        DoseUnit::Mg => round_to_step(value, 5.0),
        DoseUnit::G | DoseUnit::Ml => round_to_places(value, 2),
    }
}
