use solace_core::PainLevel;
use solace_scales::error::ScaleError;
use solace_scales::{ScaleId, all_scales, classify};

#[test]
fn flacc_reference_scores() {
    assert_eq!(classify(ScaleId::Flacc, 0.0).unwrap(), PainLevel::None);
    assert_eq!(classify(ScaleId::Flacc, 2.0).unwrap(), PainLevel::Mild);
    assert_eq!(classify(ScaleId::Flacc, 5.0).unwrap(), PainLevel::Moderate);
    assert_eq!(classify(ScaleId::Flacc, 8.0).unwrap(), PainLevel::Severe);
}

#[test]
fn flacc_band_edges() {
    assert_eq!(classify(ScaleId::Flacc, 1.0).unwrap(), PainLevel::Mild);
    assert_eq!(classify(ScaleId::Flacc, 3.0).unwrap(), PainLevel::Mild);
    assert_eq!(classify(ScaleId::Flacc, 4.0).unwrap(), PainLevel::Moderate);
    assert_eq!(classify(ScaleId::Flacc, 6.0).unwrap(), PainLevel::Moderate);
    assert_eq!(classify(ScaleId::Flacc, 7.0).unwrap(), PainLevel::Severe);
    assert_eq!(classify(ScaleId::Flacc, 10.0).unwrap(), PainLevel::Severe);
}

#[test]
fn wong_baker_reference_scores() {
    assert_eq!(classify(ScaleId::WongBaker, 0.0).unwrap(), PainLevel::None);
    assert_eq!(classify(ScaleId::WongBaker, 2.0).unwrap(), PainLevel::Mild);
    assert_eq!(classify(ScaleId::WongBaker, 4.0).unwrap(), PainLevel::Moderate);
    assert_eq!(classify(ScaleId::WongBaker, 6.0).unwrap(), PainLevel::Moderate);
    assert_eq!(classify(ScaleId::WongBaker, 8.0).unwrap(), PainLevel::Severe);
    assert_eq!(classify(ScaleId::WongBaker, 10.0).unwrap(), PainLevel::Severe);
}

#[test]
fn vas_fractional_score_falls_in_entered_band() {
    assert_eq!(classify(ScaleId::Vas, 3.5).unwrap(), PainLevel::Mild);
    assert_eq!(classify(ScaleId::Vas, 0.5).unwrap(), PainLevel::None);
    assert_eq!(classify(ScaleId::Vas, 6.5).unwrap(), PainLevel::Moderate);
}

#[test]
fn cheops_floor_is_no_pain() {
    assert_eq!(classify(ScaleId::Cheops, 4.0).unwrap(), PainLevel::None);
    assert_eq!(classify(ScaleId::Cheops, 13.0).unwrap(), PainLevel::Severe);
}

#[test]
fn scores_outside_range_are_rejected() {
    for scale in all_scales() {
        let max = scale.max_score();
        assert!(matches!(
            scale.classify(-1.0),
            Err(ScaleError::OutOfRange { .. })
        ));
        assert!(matches!(
            scale.classify(max + 1.0),
            Err(ScaleError::OutOfRange { .. })
        ));
        assert!(scale.classify(f64::NAN).is_err());
        assert!(scale.classify(max).is_ok());
    }
}

#[test]
fn thresholds_partition_zero_to_max() {
    for scale in all_scales() {
        let thresholds = scale.thresholds();
        assert_eq!(thresholds.first().unwrap().min_score, 0.0, "{}", scale.name());
        assert_eq!(
            thresholds.last().unwrap().max_score,
            scale.max_score(),
            "{}",
            scale.name()
        );
        for pair in thresholds.windows(2) {
            assert_eq!(pair[1].min_score, pair[0].max_score + 1.0, "{}", scale.name());
            assert!(pair[0].level < pair[1].level, "{}", scale.name());
        }
        for t in thresholds {
            assert!(t.min_score <= t.max_score, "{}", scale.name());
        }
    }
}

#[test]
fn max_score_is_sum_of_component_maxima() {
    for scale in all_scales() {
        let implied: f64 = scale.components().iter().map(|c| c.max_value()).sum();
        assert_eq!(implied, scale.max_score(), "{}", scale.name());
        for component in scale.components() {
            assert!(component.min_value() >= 0.0);
            assert!(component.max_value() <= scale.max_score());
        }
    }
}

#[test]
fn every_integer_score_classifies() {
    for scale in all_scales() {
        let max = scale.max_score() as u32;
        let mut previous = PainLevel::None;
        for score in 0..=max {
            let level = scale.classify(f64::from(score)).unwrap();
            assert!(level >= previous, "{} at {score}", scale.name());
            previous = level;
        }
    }
}

#[test]
fn scale_ids_round_trip_through_strings() {
    for id in ScaleId::ALL {
        assert_eq!(id.as_str().parse::<ScaleId>().unwrap(), id);
        assert_eq!(
            serde_json::to_string(&id).unwrap(),
            format!("\"{}\"", id.as_str())
        );
    }
    assert!(matches!(
        "faces".parse::<ScaleId>(),
        Err(ScaleError::UnknownScale(_))
    ));
}
