//! Cable Gauge Calculator
//!
//! Sizes the amplifier power cable from RMS power, supply voltage and run
//! length. The mm² result is mapped onto AWG through an injectable table.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::formula::{require_finite, require_positive, require_u32, round_to_1_decimal};

/// Assumed amplifier efficiency when estimating current draw
pub const SYSTEM_EFFICIENCY: f64 = 0.8;

/// Allowed current density in A/mm²
pub const CURRENT_DENSITY: f64 = 3.0;

/// Safety margin applied to the minimum cross-section
pub const GAUGE_SAFETY_MARGIN: f64 = 1.5;

/// Runs longer than this (meters) should use a larger cable
pub const LONG_RUN_LENGTH_M: f64 = 5.0;

/// AWG label used when the cross-section exceeds the table
pub const AWG_OUT_OF_RANGE: &str = "0/0";

/// One row of the mm² to AWG table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AwgEntry {
    /// Cross-section in mm²
    pub gauge_mm2: u32,
    /// AWG label, e.g. "4" or "1/0"
    pub awg: String,
}

impl AwgEntry {
    fn new(gauge_mm2: u32, awg: &str) -> Self {
        Self {
            gauge_mm2,
            awg: awg.to_string(),
        }
    }
}

/// Ascending mm² to AWG lookup table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<AwgEntry>", into = "Vec<AwgEntry>")]
pub struct AwgTable {
    entries: Vec<AwgEntry>,
}

impl AwgTable {
    /// Build a table, rejecting empty or non-ascending entries
    pub fn new(entries: Vec<AwgEntry>) -> std::result::Result<Self, ConfigError> {
        if entries.is_empty() {
            return Err(ConfigError::InvalidTable {
                table: "awgTable",
                message: "table is empty".to_string(),
            });
        }
        if let Some(pair) = entries
            .windows(2)
            .find(|pair| pair[0].gauge_mm2 >= pair[1].gauge_mm2)
        {
            return Err(ConfigError::InvalidTable {
                table: "awgTable",
                message: format!(
                    "gauges must be strictly ascending ({} mm² is followed by {} mm²)",
                    pair[0].gauge_mm2, pair[1].gauge_mm2
                ),
            });
        }
        Ok(Self { entries })
    }

    /// Table entries in ascending order
    pub fn entries(&self) -> &[AwgEntry] {
        &self.entries
    }

    /// AWG label of the first entry at least as large as `gauge_mm2`
    pub fn lookup(&self, gauge_mm2: u32) -> &str {
        self.entries
            .iter()
            .find(|entry| entry.gauge_mm2 >= gauge_mm2)
            .map(|entry| entry.awg.as_str())
            .unwrap_or(AWG_OUT_OF_RANGE)
    }
}

impl Default for AwgTable {
    fn default() -> Self {
        Self {
            entries: vec![
                AwgEntry::new(1, "18"),
                AwgEntry::new(2, "16"),
                AwgEntry::new(4, "12"),
                AwgEntry::new(6, "10"),
                AwgEntry::new(10, "8"),
                AwgEntry::new(16, "6"),
                AwgEntry::new(25, "4"),
                AwgEntry::new(35, "2"),
                AwgEntry::new(50, "1/0"),
                AwgEntry::new(70, "2/0"),
            ],
        }
    }
}

impl TryFrom<Vec<AwgEntry>> for AwgTable {
    type Error = ConfigError;

    fn try_from(entries: Vec<AwgEntry>) -> std::result::Result<Self, Self::Error> {
        Self::new(entries)
    }
}

impl From<AwgTable> for Vec<AwgEntry> {
    fn from(table: AwgTable) -> Self {
        table.entries
    }
}

/// Input for the cable calculator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CableCalculationInput {
    /// RMS power in watts
    pub power: f64,
    /// Cable run in meters
    pub length: f64,
    /// Supply voltage in volts
    pub voltage: f64,
}

/// Result of the cable calculator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CableCalculationResult {
    /// Current draw in amperes
    pub current: f64,
    /// Minimum cross-section in mm²
    pub min_gauge: u32,
    /// Cross-section with safety margin in mm²
    pub recommended_gauge: u32,
    /// Nearest AWG size, or "0/0" past the table
    pub awg_equivalent: String,
    /// Advice for the run length
    pub recommendation: String,
}

/// Calculate cable gauge with the default AWG table
pub fn calculate_cable_gauge(input: &CableCalculationInput) -> Result<CableCalculationResult> {
    calculate_cable_gauge_with(input, &AwgTable::default())
}

/// Calculate cable gauge with a custom AWG table
pub fn calculate_cable_gauge_with(
    input: &CableCalculationInput,
    awg_table: &AwgTable,
) -> Result<CableCalculationResult> {
    let power = require_positive("power", input.power)?;
    let length = require_positive("length", input.length)?;
    let voltage = require_positive("voltage", input.voltage)?;

    let current = round_to_1_decimal(require_finite(
        "current",
        power / voltage / SYSTEM_EFFICIENCY,
    )?);
    let min_gauge = require_u32("minGauge", (current / CURRENT_DENSITY).ceil())?;
    let recommended_gauge = require_u32(
        "recommendedGauge",
        (f64::from(min_gauge) * GAUGE_SAFETY_MARGIN).ceil(),
    )?;

    let recommendation = if length > LONG_RUN_LENGTH_M {
        "For long runs consider a cable with a larger cross-section."
    } else {
        "A standard cross-section is suitable for this length."
    };

    Ok(CableCalculationResult {
        current,
        min_gauge,
        recommended_gauge,
        awg_equivalent: awg_table.lookup(recommended_gauge).to_string(),
        recommendation: recommendation.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_awg_lookup() {
        let table = AwgTable::default();
        assert_eq!(table.lookup(1), "18");
        assert_eq!(table.lookup(3), "12");
        assert_eq!(table.lookup(53), "2/0");
        assert_eq!(table.lookup(71), AWG_OUT_OF_RANGE);
    }

    #[test]
    fn test_table_must_ascend() {
        assert!(AwgTable::new(vec![]).is_err());
        assert!(AwgTable::new(vec![AwgEntry::new(4, "12"), AwgEntry::new(2, "16")]).is_err());
        assert!(AwgTable::new(vec![AwgEntry::new(4, "12"), AwgEntry::new(4, "12")]).is_err());
        assert!(AwgTable::new(vec![AwgEntry::new(2, "16"), AwgEntry::new(4, "12")]).is_ok());
    }

    #[test]
    fn test_small_amplifier() {
        let input = CableCalculationInput {
            power: 100.0,
            length: 3.0,
            voltage: 12.0,
        };
        let result = calculate_cable_gauge(&input).unwrap();
        assert_eq!(result.current, 10.4);
        assert_eq!(result.min_gauge, 4);
        assert_eq!(result.recommended_gauge, 6);
        assert_eq!(result.awg_equivalent, "10");
        assert!(result.recommendation.contains("standard"));
    }
}
