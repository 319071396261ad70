//! Tests for calculator configuration loading

use std::fs;

use caraudio_core::cable::AwgTable;
use caraudio_core::config::CalculatorConfig;
use caraudio_core::fuse::FuseRatingTable;
use caraudio_core::ConfigError;
use pretty_assertions::assert_eq;
use tempfile::tempdir;

#[test]
fn test_empty_object_uses_defaults() {
    let config = CalculatorConfig::from_json("{}").unwrap();
    assert_eq!(config, CalculatorConfig::default());
    assert_eq!(config.awg_table, AwgTable::default());
    assert_eq!(config.fuse_ratings, FuseRatingTable::default());
}

#[test]
fn test_partial_override() {
    let config = CalculatorConfig::from_json(r#"{"fuseRatings": [20, 40, 60]}"#).unwrap();
    assert_eq!(config.fuse_ratings.ratings(), &[20, 40, 60]);
    assert_eq!(config.awg_table, AwgTable::default());
}

#[test]
fn test_awg_override() {
    let config = CalculatorConfig::from_json(
        r#"{"awgTable": [{"gaugeMm2": 10, "awg": "8"}, {"gaugeMm2": 21, "awg": "4"}]}"#,
    )
    .unwrap();
    assert_eq!(config.awg_table.entries().len(), 2);
    assert_eq!(config.awg_table.lookup(15), "4");
}

#[test]
fn test_rejects_unsorted_tables() {
    let err = CalculatorConfig::from_json(r#"{"fuseRatings": [60, 40]}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
    assert!(err.to_string().contains("ascending"));

    let err = CalculatorConfig::from_json(r#"{"fuseRatings": []}"#).unwrap_err();
    assert!(err.to_string().contains("empty"));
}

#[test]
fn test_save_and_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("calculators.json");

    let config = CalculatorConfig {
        fuse_ratings: FuseRatingTable::new(vec![15, 30, 45]).unwrap(),
        ..CalculatorConfig::default()
    };
    config.save(&path).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("fuseRatings"));
    assert!(content.contains("gaugeMm2"));

    let loaded = CalculatorConfig::load(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_missing_file() {
    let dir = tempdir().unwrap();
    let err = CalculatorConfig::load(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}
