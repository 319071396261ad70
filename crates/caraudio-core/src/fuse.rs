//! Fuse Rating Calculator
//!
//! Picks the main power fuse for an amplifier. The current draw is derived
//! from power, supply voltage and amplifier efficiency, a safety factor is
//! applied and the result is snapped up to the next standard rating.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CalcError, ConfigError, Result};
use crate::formula::{require_finite, require_positive, round_to_1_decimal};

/// Number of standard ratings echoed back in the result
pub const DISPLAYED_RATINGS: usize = 9;

/// Largest rating served by MIDI/ATC fuses
pub const MIDI_MAX_RATING: u32 = 60;

/// Largest rating served by ANL fuses
pub const ANL_MAX_RATING: u32 = 200;

/// Fuse holder family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FuseType {
    /// Blade and MIDI holders, up to 60 A
    #[serde(rename = "MIDI/ATC")]
    MidiAtc,
    /// ANL holders, up to 200 A
    #[serde(rename = "ANL")]
    Anl,
    /// MEGA/AMG holders above 200 A
    #[serde(rename = "MEGA/AMG")]
    MegaAmg,
}

impl FuseType {
    /// Classify a fuse rating in amperes
    pub fn for_rating(rating: u32) -> Self {
        if rating <= MIDI_MAX_RATING {
            FuseType::MidiAtc
        } else if rating <= ANL_MAX_RATING {
            FuseType::Anl
        } else {
            FuseType::MegaAmg
        }
    }

    /// Label as printed on fuse holders
    pub fn label(&self) -> &'static str {
        match self {
            FuseType::MidiAtc => "MIDI/ATC",
            FuseType::Anl => "ANL",
            FuseType::MegaAmg => "MEGA/AMG",
        }
    }
}

impl fmt::Display for FuseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ascending list of standard fuse ratings in amperes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<u32>", into = "Vec<u32>")]
pub struct FuseRatingTable {
    ratings: Vec<u32>,
}

impl FuseRatingTable {
    /// Build a table, rejecting empty or non-ascending ratings
    pub fn new(ratings: Vec<u32>) -> std::result::Result<Self, ConfigError> {
        if ratings.is_empty() {
            return Err(ConfigError::InvalidTable {
                table: "fuseRatings",
                message: "table is empty".to_string(),
            });
        }
        if ratings.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(ConfigError::InvalidTable {
                table: "fuseRatings",
                message: format!("ratings must be strictly ascending: {ratings:?}"),
            });
        }
        Ok(Self { ratings })
    }

    /// All ratings in ascending order
    pub fn ratings(&self) -> &[u32] {
        &self.ratings
    }

    /// Smallest rating that covers `amps`, or the largest rating available
    pub fn snap_up(&self, amps: f64) -> u32 {
        self.ratings
            .iter()
            .copied()
            .find(|&rating| f64::from(rating) >= amps)
            .or_else(|| self.ratings.last().copied())
            .unwrap_or_default()
    }
}

impl Default for FuseRatingTable {
    fn default() -> Self {
        Self {
            ratings: vec![30, 40, 50, 60, 80, 100, 125, 150, 175, 200, 225, 250, 300],
        }
    }
}

impl TryFrom<Vec<u32>> for FuseRatingTable {
    type Error = ConfigError;

    fn try_from(ratings: Vec<u32>) -> std::result::Result<Self, Self::Error> {
        Self::new(ratings)
    }
}

impl From<FuseRatingTable> for Vec<u32> {
    fn from(table: FuseRatingTable) -> Self {
        table.ratings
    }
}

/// Input for the fuse calculator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuseCalculationInput {
    /// RMS power in watts
    pub power: f64,
    /// Supply voltage in volts
    pub voltage: f64,
    /// Amplifier efficiency in percent
    pub efficiency: f64,
    /// Safety factor in percent (125 = 25% headroom)
    pub safety_factor: f64,
}

/// Standard rating echoed back with the chosen one flagged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandardRating {
    /// Rating in amperes
    pub value: u32,
    /// Whether this is the chosen rating
    pub recommended: bool,
}

/// Result of the fuse calculator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuseCalculationResult {
    /// Current draw in amperes
    pub current_draw: f64,
    /// Current draw with the safety factor applied
    pub calculated_fuse: f64,
    /// Chosen standard rating
    pub recommended_fuse: u32,
    /// Holder family for the chosen rating
    pub fuse_type: FuseType,
    /// Mounting advice
    pub recommendation: String,
    /// Leading ratings of the table
    pub standard_ratings: Vec<StandardRating>,
}

/// Calculate fuse rating with the default rating table
pub fn calculate_fuse_rating(input: &FuseCalculationInput) -> Result<FuseCalculationResult> {
    calculate_fuse_rating_with(input, &FuseRatingTable::default())
}

/// Calculate fuse rating with a custom rating table
pub fn calculate_fuse_rating_with(
    input: &FuseCalculationInput,
    table: &FuseRatingTable,
) -> Result<FuseCalculationResult> {
    let power = require_positive("power", input.power)?;
    let voltage = require_positive("voltage", input.voltage)?;
    let efficiency = require_positive("efficiency", input.efficiency)?;
    if efficiency > 100.0 {
        return Err(CalcError::invalid(
            "efficiency",
            format!("must not exceed 100%, got {efficiency}"),
        ));
    }
    let safety_factor = require_positive("safetyFactor", input.safety_factor)?;

    let current_draw = round_to_1_decimal(require_finite(
        "currentDraw",
        power / voltage / (efficiency / 100.0),
    )?);
    let calculated_fuse = round_to_1_decimal(require_finite(
        "calculatedFuse",
        current_draw * (safety_factor / 100.0),
    )?);
    let recommended_fuse = table.snap_up(calculated_fuse);
    let fuse_type = FuseType::for_rating(recommended_fuse);

    let standard_ratings = table
        .ratings()
        .iter()
        .take(DISPLAYED_RATINGS)
        .map(|&value| StandardRating {
            value,
            recommended: value == recommended_fuse,
        })
        .collect();

    Ok(FuseCalculationResult {
        current_draw,
        calculated_fuse,
        recommended_fuse,
        fuse_type,
        recommendation: format!(
            "Use a {fuse_type} fuse. Mount it as close to the battery as possible."
        ),
        standard_ratings,
    })
}
