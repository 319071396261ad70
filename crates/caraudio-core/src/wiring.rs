//! Speaker Wiring Calculator
//!
//! Net load impedance and per-speaker power share for identical speakers
//! wired in parallel or in series.

use serde::{Deserialize, Serialize};

use crate::error::{CalcError, Result};
use crate::formula::{require_finite, require_positive};

/// How the speakers are connected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WiringType {
    /// All speakers across the same two terminals
    Parallel,
    /// Speakers chained end to end
    Series,
}

/// Input for the wiring calculator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeakerWiringInput {
    /// Number of identical speakers
    pub speaker_count: u32,
    /// Nominal impedance of one speaker in ohms
    pub speaker_impedance: f64,
    /// Connection scheme
    pub wiring_type: WiringType,
}

/// Result of the wiring calculator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeakerWiringResult {
    /// Load seen by the amplifier in ohms
    pub total_impedance: f64,
    /// Connection scheme echoed from the input
    pub wiring_type: WiringType,
    /// Share of amplifier power delivered to each speaker, in percent
    pub power_per_speaker: u32,
    /// Advice on amplifier load
    pub recommendation: String,
}

/// Calculate net impedance for a group of identical speakers
pub fn calculate_speaker_wiring(input: &SpeakerWiringInput) -> Result<SpeakerWiringResult> {
    if input.speaker_count == 0 {
        return Err(CalcError::invalid(
            "speakerCount",
            "at least one speaker is required",
        ));
    }
    let impedance = require_positive("speakerImpedance", input.speaker_impedance)?;
    let count = f64::from(input.speaker_count);

    let (total_impedance, power_per_speaker, recommendation) = match input.wiring_type {
        WiringType::Parallel => (
            impedance / count,
            100,
            "Parallel wiring lowers the impedance. Make sure the amplifier is stable at this load.",
        ),
        WiringType::Series => (
            impedance * count,
            (100.0 / count).round() as u32,
            "Series wiring raises the impedance and reduces the power delivered to each speaker.",
        ),
    };

    Ok(SpeakerWiringResult {
        total_impedance: require_finite("totalImpedance", total_impedance)?,
        wiring_type: input.wiring_type,
        power_per_speaker,
        recommendation: recommendation.to_string(),
    })
}
