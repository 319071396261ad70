//! Tests for the fuse rating calculator

use caraudio_core::fuse::{
    calculate_fuse_rating, calculate_fuse_rating_with, FuseCalculationInput, FuseRatingTable,
    FuseType, DISPLAYED_RATINGS,
};
use pretty_assertions::assert_eq;

fn input(power: f64, voltage: f64, efficiency: f64, safety_factor: f64) -> FuseCalculationInput {
    FuseCalculationInput {
        power,
        voltage,
        efficiency,
        safety_factor,
    }
}

#[test]
fn test_1000w_amplifier() {
    let result = calculate_fuse_rating(&input(1000.0, 12.0, 85.0, 125.0)).unwrap();

    assert_eq!(result.current_draw, 98.0);
    assert_eq!(result.calculated_fuse, 122.5);
    assert_eq!(result.recommended_fuse, 125);
    assert_eq!(result.fuse_type, FuseType::Anl);
    assert!(result.recommendation.contains("ANL"));

    assert_eq!(result.standard_ratings.len(), DISPLAYED_RATINGS);
    let flagged: Vec<u32> = result
        .standard_ratings
        .iter()
        .filter(|r| r.recommended)
        .map(|r| r.value)
        .collect();
    assert_eq!(flagged, vec![125]);
}

#[test]
fn test_recommended_is_standard_and_covers_load() {
    let table = FuseRatingTable::default();
    for power in [50.0, 300.0, 800.0, 1500.0, 2500.0] {
        for voltage in [12.0, 14.4, 24.0] {
            for efficiency in [50.0, 70.0, 85.0, 100.0] {
                for safety in [100.0, 125.0, 150.0] {
                    let result =
                        calculate_fuse_rating(&input(power, voltage, efficiency, safety)).unwrap();
                    assert!(table.ratings().contains(&result.recommended_fuse));
                    if result.calculated_fuse <= 300.0 {
                        assert!(f64::from(result.recommended_fuse) >= result.calculated_fuse);
                    } else {
                        assert_eq!(result.recommended_fuse, 300);
                    }
                }
            }
        }
    }
}

#[test]
fn test_load_beyond_largest_rating() {
    let result = calculate_fuse_rating(&input(5000.0, 12.0, 85.0, 125.0)).unwrap();
    assert_eq!(result.recommended_fuse, 300);
    assert_eq!(result.fuse_type, FuseType::MegaAmg);
    // 300 A is not among the displayed ratings
    assert!(result.standard_ratings.iter().all(|r| !r.recommended));
}

#[test]
fn test_custom_rating_table() {
    let table = FuseRatingTable::new(vec![10, 20, 35]).unwrap();
    let result = calculate_fuse_rating_with(&input(200.0, 12.0, 100.0, 100.0), &table).unwrap();

    assert_eq!(result.current_draw, 16.7);
    assert_eq!(result.recommended_fuse, 20);
    assert_eq!(result.fuse_type, FuseType::MidiAtc);
    assert_eq!(result.standard_ratings.len(), 3);
}

#[test]
fn test_invalid_inputs() {
    let cases = [
        (input(0.0, 12.0, 85.0, 125.0), "power"),
        (input(1000.0, 0.0, 85.0, 125.0), "voltage"),
        (input(1000.0, 12.0, 0.0, 125.0), "efficiency"),
        (input(1000.0, 12.0, 100.5, 125.0), "efficiency"),
        (input(1000.0, 12.0, 85.0, -5.0), "safetyFactor"),
    ];
    for (case, field) in cases {
        assert_eq!(calculate_fuse_rating(&case).unwrap_err().field(), field);
    }
}

#[test]
fn test_overflowing_fuse_is_rejected() {
    let err = calculate_fuse_rating(&input(1e300, 1.0, 100.0, 1e10)).unwrap_err();
    assert_eq!(err.field(), "calculatedFuse");
}

#[test]
fn test_result_json() {
    let result = calculate_fuse_rating(&input(1000.0, 12.0, 85.0, 125.0)).unwrap();
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["fuseType"], "ANL");
    assert_eq!(json["recommendedFuse"], 125);
    assert_eq!(json["standardRatings"][6]["value"], 125);
    assert_eq!(json["standardRatings"][6]["recommended"], true);
}
