//! Port Dimension Calculator
//!
//! Sizes the port (vent) of a bass-reflex enclosure from the net box volume,
//! the target tuning frequency and the port cross-section:
//! - Port area for round or rectangular ports
//! - Port length from the Helmholtz resonator approximation
//! - Air velocity through the port and a turbulence recommendation

use serde::{Deserialize, Serialize};

use crate::error::{CalcError, Result};
use crate::formula::{
    circle_area, liters_to_cm3, rectangle_area, require_finite, require_positive,
    round_to_1_decimal,
};

/// Shortest port that can be built, in cm
pub const MIN_PORT_LENGTH_CM: f64 = 5.0;

/// Above this air velocity (m/s) the port is expected to chuff
pub const MAX_AIR_VELOCITY: f64 = 30.0;

/// Below this air velocity (m/s) the port is considered optimal
pub const OPTIMAL_AIR_VELOCITY: f64 = 15.0;

const HELMHOLTZ_CONSTANT: f64 = 2143.0;
const END_CORRECTION: f64 = 1.463;
const VELOCITY_CONSTANT: f64 = 17.0;

/// Port cross-section shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PortType {
    /// Tube port sized by diameter
    Round,
    /// Slot port sized by width and height
    Rectangular,
}

/// Input for the port calculator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortCalculationInput {
    /// Net box volume in liters
    pub box_volume: f64,
    /// Target tuning frequency in Hz
    pub tuning_frequency: f64,
    /// Cross-section shape
    pub port_type: PortType,
    /// Diameter in cm, required for round ports
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port_diameter: Option<f64>,
    /// Width in cm, required for rectangular ports
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port_width: Option<f64>,
    /// Height in cm, required for rectangular ports
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port_height: Option<f64>,
}

/// Result of the port calculator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortCalculationResult {
    /// Port length in cm, never below [`MIN_PORT_LENGTH_CM`]
    pub port_length: f64,
    /// Port area in cm²
    pub port_area: f64,
    /// Air velocity in m/s
    pub air_velocity: f64,
    /// Shape echoed from the input
    pub port_type: PortType,
    /// Verdict on the air velocity
    pub recommendation: String,
}

/// Calculate port length, area and air velocity
pub fn calculate_port_dimensions(input: &PortCalculationInput) -> Result<PortCalculationResult> {
    let box_volume = require_positive("boxVolume", input.box_volume)?;
    let tuning_frequency = require_positive("tuningFrequency", input.tuning_frequency)?;
    let area = port_area(input)?;

    let port_length = port_length_cm(area, tuning_frequency, box_volume)?;
    let air_velocity = round_to_1_decimal(require_finite(
        "airVelocity",
        VELOCITY_CONSTANT * liters_to_cm3(box_volume).sqrt() / area.sqrt(),
    )?);

    Ok(PortCalculationResult {
        port_length,
        port_area: round_to_1_decimal(area),
        air_velocity,
        port_type: input.port_type,
        recommendation: velocity_recommendation(air_velocity).to_string(),
    })
}

/// Cross-section area in cm² for the selected port shape
fn port_area(input: &PortCalculationInput) -> Result<f64> {
    match input.port_type {
        PortType::Round => {
            let diameter = required_dimension("portDiameter", input.port_diameter)?;
            Ok(circle_area(diameter))
        }
        PortType::Rectangular => {
            let width = required_dimension("portWidth", input.port_width)?;
            let height = required_dimension("portHeight", input.port_height)?;
            Ok(rectangle_area(width, height))
        }
    }
}

fn required_dimension(field: &str, value: Option<f64>) -> Result<f64> {
    match value {
        Some(v) => require_positive(field, v),
        None => Err(CalcError::invalid(
            field,
            "required for the selected port type",
        )),
    }
}

/// Helmholtz port length in cm, rounded to one decimal and floored
///
/// `L = 2143·√A / (F·√(V·1000)) − 1.463·√A` with A in cm², F in Hz and V in
/// liters.
pub(crate) fn port_length_cm(area_cm2: f64, tuning_hz: f64, volume_l: f64) -> Result<f64> {
    let sqrt_area = area_cm2.sqrt();
    let sqrt_volume = liters_to_cm3(volume_l).sqrt();
    let length = HELMHOLTZ_CONSTANT * sqrt_area / (tuning_hz * sqrt_volume)
        - END_CORRECTION * sqrt_area;
    let length = require_finite("portLength", length)?;
    Ok(round_to_1_decimal(length).max(MIN_PORT_LENGTH_CM))
}

fn velocity_recommendation(air_velocity: f64) -> &'static str {
    if air_velocity > MAX_AIR_VELOCITY {
        "Air velocity is too high. Enlarge the port area to reduce turbulence and port noise."
    } else if air_velocity < OPTIMAL_AIR_VELOCITY {
        "Air velocity is optimal. The port will work efficiently without audible noise."
    } else {
        "Air velocity is acceptable, but consider enlarging the port area."
    }
}
