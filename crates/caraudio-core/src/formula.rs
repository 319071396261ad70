//! Formula Primitives
//!
//! Scalar helpers shared by every calculator:
//! - Display rounding to one decimal place
//! - Port cross-section areas (round and rectangular)
//! - Volume conversion between liters and cubic centimeters
//! - Domain guards that turn bad inputs into `InvalidParameters`

use std::f64::consts::PI;

use crate::error::{CalcError, Result};

/// Cubic centimeters in one liter
pub const CM3_PER_LITER: f64 = 1000.0;

/// Round to one decimal place (`round(x * 10) / 10`)
///
/// Halves round away from zero on the scaled value. NaN and infinities pass
/// through unchanged, so callers must validate before rounding.
pub fn round_to_1_decimal(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

/// Area of a circle from its diameter
pub fn circle_area(diameter: f64) -> f64 {
    PI * (diameter / 2.0).powi(2)
}

/// Area of a rectangle
pub fn rectangle_area(width: f64, height: f64) -> f64 {
    width * height
}

/// Convert liters to cubic centimeters
pub fn liters_to_cm3(liters: f64) -> f64 {
    liters * CM3_PER_LITER
}

/// Render a number the way result strings are displayed on the site
///
/// Whole numbers lose their fractional part (`23.0` becomes `"23"`),
/// everything else uses the shortest representation.
pub fn format_decimal(x: f64) -> String {
    format!("{x}")
}

/// Reject zero, negative and non-finite input values
pub fn require_positive(field: &str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(CalcError::invalid(field, "must be a finite number"));
    }
    if value <= 0.0 {
        return Err(CalcError::invalid(
            field,
            format!("must be greater than zero, got {value}"),
        ));
    }
    Ok(value)
}

/// Reject a formula result that came out as NaN or infinity
pub fn require_finite(field: &str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::invalid(
            field,
            "formula produced a non-finite result",
        ))
    }
}

/// Convert a non-negative whole-number result to `u32`
///
/// Values that do not fit are rejected instead of saturating.
pub fn require_u32(field: &str, value: f64) -> Result<u32> {
    let value = require_finite(field, value)?;
    if value < 0.0 || value > f64::from(u32::MAX) {
        return Err(CalcError::invalid(
            field,
            format!("result {value} is out of range"),
        ));
    }
    Ok(value as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_1_decimal() {
        assert_eq!(round_to_1_decimal(104.1666), 104.2);
        assert_eq!(round_to_1_decimal(0.25), 0.3);
        assert_eq!(round_to_1_decimal(-0.25), -0.3);
        assert_eq!(round_to_1_decimal(5.0), 5.0);
    }

    #[test]
    fn test_round_passes_through_non_finite() {
        assert!(round_to_1_decimal(f64::NAN).is_nan());
        assert_eq!(round_to_1_decimal(f64::INFINITY), f64::INFINITY);
    }

    #[test]
    fn test_areas() {
        assert!((circle_area(10.0) - 78.5398).abs() < 0.001);
        assert_eq!(rectangle_area(10.0, 15.0), 150.0);
    }

    #[test]
    fn test_format_decimal() {
        assert_eq!(format_decimal(23.0), "23");
        assert_eq!(format_decimal(23.6), "23.6");
        assert_eq!(format_decimal(0.5), "0.5");
        assert_eq!(format_decimal(1.4e19), "14000000000000000000");
    }

    #[test]
    fn test_require_u32() {
        assert_eq!(require_u32("minGauge", 53.0), Ok(53));
        assert_eq!(require_u32("minGauge", f64::from(u32::MAX)), Ok(u32::MAX));
        assert!(require_u32("minGauge", 4_294_967_296.0).is_err());
        assert!(require_u32("minGauge", -1.0).is_err());
        assert!(require_u32("minGauge", f64::INFINITY).is_err());
    }

    #[test]
    fn test_require_positive() {
        assert_eq!(require_positive("power", 10.0), Ok(10.0));
        assert!(require_positive("power", 0.0).is_err());
        assert!(require_positive("power", -3.0).is_err());
        assert!(require_positive("power", f64::NAN).is_err());

        let err = require_positive("voltage", 0.0).unwrap_err();
        assert_eq!(err.field(), "voltage");
    }

    #[test]
    fn test_require_finite() {
        assert!(require_finite("volume", f64::INFINITY).is_err());
        assert!(require_finite("volume", f64::NAN).is_err());
        assert_eq!(require_finite("volume", 1.5), Ok(1.5));
    }
}
