//! Tests for the cable gauge calculator

use caraudio_core::cable::{
    calculate_cable_gauge, calculate_cable_gauge_with, AwgEntry, AwgTable, CableCalculationInput,
};
use pretty_assertions::assert_eq;

fn input(power: f64, length: f64, voltage: f64) -> CableCalculationInput {
    CableCalculationInput {
        power,
        length,
        voltage,
    }
}

#[test]
fn test_1000w_amplifier() {
    let result = calculate_cable_gauge(&input(1000.0, 5.0, 12.0)).unwrap();

    assert_eq!(result.current, 104.2);
    assert_eq!(result.min_gauge, 35);
    assert_eq!(result.recommended_gauge, 53);
    assert_eq!(result.awg_equivalent, "2/0");
    assert!(result.recommendation.contains("standard"));
}

#[test]
fn test_long_run_recommendation() {
    let result = calculate_cable_gauge(&input(1000.0, 6.0, 12.0)).unwrap();
    assert!(result.recommendation.contains("larger"));
}

#[test]
fn test_gauge_beyond_table() {
    // 3000 / 12 / 0.8 = 312.5 A -> 105 mm² -> 158 mm²
    let result = calculate_cable_gauge(&input(3000.0, 3.0, 12.0)).unwrap();
    assert_eq!(result.recommended_gauge, 158);
    assert_eq!(result.awg_equivalent, "0/0");
}

#[test]
fn test_custom_awg_table() {
    let table = AwgTable::new(vec![AwgEntry {
        gauge_mm2: 100,
        awg: "3/0".to_string(),
    }])
    .unwrap();
    let result = calculate_cable_gauge_with(&input(1000.0, 5.0, 12.0), &table).unwrap();
    assert_eq!(result.awg_equivalent, "3/0");
}

#[test]
fn test_invalid_inputs() {
    assert_eq!(
        calculate_cable_gauge(&input(1000.0, 5.0, 0.0)).unwrap_err().field(),
        "voltage"
    );
    assert_eq!(
        calculate_cable_gauge(&input(0.0, 5.0, 12.0)).unwrap_err().field(),
        "power"
    );
    assert_eq!(
        calculate_cable_gauge(&input(1000.0, -2.0, 12.0)).unwrap_err().field(),
        "length"
    );
}

#[test]
fn test_gauge_too_large_for_result() {
    // 1e12 / 12 / 0.8 A needs about 3.5e10 mm², past u32
    let err = calculate_cable_gauge(&input(1e12, 1.0, 12.0)).unwrap_err();
    assert_eq!(err.field(), "minGauge");
}

#[test]
fn test_result_json_field_names() {
    let result = calculate_cable_gauge(&input(1000.0, 5.0, 12.0)).unwrap();
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["minGauge"], 35);
    assert_eq!(json["recommendedGauge"], 53);
    assert_eq!(json["awgEquivalent"], "2/0");
}
