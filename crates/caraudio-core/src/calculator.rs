//! Calculation dispatcher
//!
//! Boundary helper that accepts a tagged request as it arrives over the wire,
//! runs the matching calculator with the configured lookup tables and counts
//! the call on a [`UsageSink`].
//!
//! ```json
//! { "calculator": "cable", "params": { "power": 1000, "length": 5, "voltage": 12 } }
//! ```

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::box_volume::{calculate_box_volume, BoxCalculationInput, BoxCalculationResult};
use crate::cable::{calculate_cable_gauge_with, CableCalculationInput, CableCalculationResult};
use crate::config::CalculatorConfig;
use crate::error::Result;
use crate::fuse::{calculate_fuse_rating_with, FuseCalculationInput, FuseCalculationResult};
use crate::port::{calculate_port_dimensions, PortCalculationInput, PortCalculationResult};
use crate::stats::{NoopSink, StatKind, UsageSink};
use crate::wiring::{calculate_speaker_wiring, SpeakerWiringInput, SpeakerWiringResult};

/// A calculation request with its parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "calculator", content = "params", rename_all = "lowercase")]
pub enum CalculationRequest {
    /// Enclosure volume
    Box(BoxCalculationInput),
    /// Port dimensions
    Port(PortCalculationInput),
    /// Power cable gauge
    Cable(CableCalculationInput),
    /// Main fuse rating
    Fuse(FuseCalculationInput),
    /// Speaker wiring impedance
    Wiring(SpeakerWiringInput),
}

impl CalculationRequest {
    /// Calculator name as used in the request tag
    pub fn name(&self) -> &'static str {
        match self {
            CalculationRequest::Box(_) => "box",
            CalculationRequest::Port(_) => "port",
            CalculationRequest::Cable(_) => "cable",
            CalculationRequest::Fuse(_) => "fuse",
            CalculationRequest::Wiring(_) => "wiring",
        }
    }
}

/// Result of any calculator, serialized without a tag
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CalculationResponse {
    /// Enclosure volume
    Box(BoxCalculationResult),
    /// Port dimensions
    Port(PortCalculationResult),
    /// Power cable gauge
    Cable(CableCalculationResult),
    /// Main fuse rating
    Fuse(FuseCalculationResult),
    /// Speaker wiring impedance
    Wiring(SpeakerWiringResult),
}

/// Runs calculators with shared configuration and usage tracking
#[derive(Clone)]
pub struct Calculator {
    config: CalculatorConfig,
    sink: Arc<dyn UsageSink>,
}

impl Calculator {
    /// Create a dispatcher reporting to `sink`
    pub fn new(config: CalculatorConfig, sink: Arc<dyn UsageSink>) -> Self {
        Self { config, sink }
    }

    /// Active configuration
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Run one calculation
    ///
    /// Exactly one [`StatKind::Calculation`] is tracked per successful call.
    /// Failed calls are not counted and return no partial result.
    pub fn calculate(&self, request: &CalculationRequest) -> Result<CalculationResponse> {
        let name = request.name();
        tracing::debug!(calculator = name, "Running calculation");

        let response = match request {
            CalculationRequest::Box(input) => calculate_box_volume(input).map(CalculationResponse::Box),
            CalculationRequest::Port(input) => {
                calculate_port_dimensions(input).map(CalculationResponse::Port)
            }
            CalculationRequest::Cable(input) => {
                calculate_cable_gauge_with(input, &self.config.awg_table)
                    .map(CalculationResponse::Cable)
            }
            CalculationRequest::Fuse(input) => {
                calculate_fuse_rating_with(input, &self.config.fuse_ratings)
                    .map(CalculationResponse::Fuse)
            }
            CalculationRequest::Wiring(input) => {
                calculate_speaker_wiring(input).map(CalculationResponse::Wiring)
            }
        }
        .inspect_err(|e| tracing::warn!(calculator = name, "Rejected calculation: {e}"))?;

        self.sink.track(StatKind::Calculation);
        Ok(response)
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new(CalculatorConfig::default(), Arc::new(NoopSink))
    }
}

impl std::fmt::Debug for Calculator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Calculator")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
