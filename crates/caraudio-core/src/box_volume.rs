//! Box Volume Calculator
//!
//! Computes the net enclosure volume for a subwoofer driver from its
//! Thiele/Small parameters.
//! - Sealed boxes use the Butterworth alignment (Qtc = 0.707)
//! - Ported boxes use an approximate volume, a tuning frequency derived from
//!   Fs and a port sized at 16 cm² per liter

use serde::{Deserialize, Serialize};

use crate::error::{CalcError, Result};
use crate::formula::{format_decimal, require_finite, require_positive, round_to_1_decimal};
use crate::port::port_length_cm;

/// Target system Q for a sealed box (Butterworth alignment)
pub const BUTTERWORTH_QTC: f64 = 0.707;

/// Ported volume relative to Vas
pub const PORTED_VOLUME_RATIO: f64 = 1.4;

/// Ported tuning frequency relative to Fs
pub const PORTED_TUNING_RATIO: f64 = 0.8;

/// Port area allotted per liter of ported box volume, in cm²
pub const PORT_AREA_PER_LITER: f64 = 16.0;

/// Slot port size suggested for ported boxes (W×H, cm)
pub const RECOMMENDED_PORT_SLOT: &str = "10×15";

/// Enclosure alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoxType {
    /// Closed enclosure
    Sealed,
    /// Vented (bass reflex) enclosure
    Ported,
}

/// Driver parameters for the box calculator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxCalculationInput {
    /// Nominal driver diameter in inches
    pub speaker_diameter: f64,
    /// Enclosure alignment to design for
    pub box_type: BoxType,
    /// Total driver Q
    pub qts: f64,
    /// Free-air resonance in Hz
    pub fs: f64,
    /// Equivalent compliance volume in liters
    pub vas: f64,
}

/// Result of the box calculator, numbers rendered for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxCalculationResult {
    /// Net volume in liters
    pub volume: String,
    /// Tuning frequency in Hz (ported only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tuning_frequency: Option<String>,
    /// Port slot "W×H" in cm (ported only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port_dimensions: Option<String>,
    /// Port length in cm (ported only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port_length: Option<String>,
    /// Construction advice
    pub recommendation: String,
}

/// Calculate enclosure volume and, for ported boxes, the port
pub fn calculate_box_volume(input: &BoxCalculationInput) -> Result<BoxCalculationResult> {
    let speaker_diameter = require_positive("speakerDiameter", input.speaker_diameter)?;
    let qts = require_positive("qts", input.qts)?;
    let fs = require_positive("fs", input.fs)?;
    let vas = require_positive("vas", input.vas)?;

    match input.box_type {
        BoxType::Sealed => sealed_box(speaker_diameter, qts, vas),
        BoxType::Ported => ported_box(fs, vas),
    }
}

/// `Vb = Vas / ((Qtc/Qts)² − 1)`
fn sealed_box(speaker_diameter: f64, qts: f64, vas: f64) -> Result<BoxCalculationResult> {
    if qts >= BUTTERWORTH_QTC {
        return Err(CalcError::invalid(
            "qts",
            format!("must be below {BUTTERWORTH_QTC} for a sealed enclosure, got {qts}"),
        ));
    }

    let denominator = (BUTTERWORTH_QTC / qts).powi(2) - 1.0;
    let volume = require_finite("volume", vas / denominator)?;

    Ok(BoxCalculationResult {
        volume: format_decimal(round_to_1_decimal(volume)),
        tuning_frequency: None,
        port_dimensions: None,
        port_length: None,
        recommendation: format!(
            "For a {}\" driver use 18-22 mm MDF and line the interior with damping material.",
            format_decimal(speaker_diameter)
        ),
    })
}

/// `Vb = 1.4·Vas`, `Fb = 0.8·Fs`, port length from the Helmholtz formula
///
/// With the slot area this large the Helmholtz length is negative for
/// ordinary drivers, so `portLength` is usually the 5 cm floor.
fn ported_box(fs: f64, vas: f64) -> Result<BoxCalculationResult> {
    let volume = round_to_1_decimal(require_finite("volume", vas * PORTED_VOLUME_RATIO)?);
    let tuning = (fs * PORTED_TUNING_RATIO).round();
    if tuning <= 0.0 {
        return Err(CalcError::invalid(
            "fs",
            format!("too low to derive a tuning frequency, got {fs}"),
        ));
    }

    let port_area = volume * PORT_AREA_PER_LITER;
    let port_length = port_length_cm(port_area, tuning, volume)?;

    Ok(BoxCalculationResult {
        volume: format_decimal(volume),
        tuning_frequency: Some(format_decimal(tuning)),
        port_dimensions: Some(RECOMMENDED_PORT_SLOT.to_string()),
        port_length: Some(format_decimal(port_length)),
        recommendation: "A ported enclosure gives deeper bass. Make sure the port is tuned correctly."
            .to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(box_type: BoxType, qts: f64) -> BoxCalculationInput {
        BoxCalculationInput {
            speaker_diameter: 12.0,
            box_type,
            qts,
            fs: 35.0,
            vas: 50.0,
        }
    }

    #[test]
    fn test_sealed_volume() {
        let result = calculate_box_volume(&input(BoxType::Sealed, 0.4)).unwrap();
        assert_eq!(result.volume, "23.5");
        assert!(result.tuning_frequency.is_none());
        assert!(result.port_length.is_none());
        assert!(result.recommendation.contains("12\""));
    }

    #[test]
    fn test_sealed_rejects_high_qts() {
        let err = calculate_box_volume(&input(BoxType::Sealed, BUTTERWORTH_QTC)).unwrap_err();
        assert_eq!(err.field(), "qts");
        assert!(calculate_box_volume(&input(BoxType::Sealed, 0.9)).is_err());
    }

    #[test]
    fn test_ported_fields() {
        let result = calculate_box_volume(&input(BoxType::Ported, 0.4)).unwrap();
        assert_eq!(result.volume, "70");
        assert_eq!(result.tuning_frequency.as_deref(), Some("28"));
        assert_eq!(result.port_dimensions.as_deref(), Some(RECOMMENDED_PORT_SLOT));
        assert_eq!(result.port_length.as_deref(), Some("5"));
    }

    #[test]
    fn test_ported_ignores_qts_limit() {
        assert!(calculate_box_volume(&input(BoxType::Ported, 0.9)).is_ok());
    }
}
