//! # CarAudio Core Library
//!
//! Engineering calculators for car audio system design.

#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//!
//! This library provides:
//! - Enclosure volume for sealed and ported subwoofer boxes
//! - Port length, area and air velocity
//! - Power cable gauge (mm² and AWG)
//! - Main fuse rating and fuse holder type
//! - Speaker wiring impedance
//! - System compatibility checks against a component catalog
//!
//! Every calculator is a pure function: the same input always gives the same
//! result, and physically impossible inputs are rejected with
//! [`CalcError::InvalidParameters`].
//!
//! ## Example
//!
//! ```rust
//! use caraudio_core::cable::{calculate_cable_gauge, CableCalculationInput};
//!
//! let result = calculate_cable_gauge(&CableCalculationInput {
//!     power: 1000.0,
//!     length: 5.0,
//!     voltage: 12.0,
//! })?;
//! assert_eq!(result.recommended_gauge, 53);
//! assert_eq!(result.awg_equivalent, "2/0");
//! # Ok::<(), caraudio_core::CalcError>(())
//! ```

pub mod box_volume;
pub mod cable;
pub mod calculator;
pub mod catalog;
pub mod compatibility;
pub mod config;
pub mod error;
pub mod formula;
pub mod fuse;
pub mod port;
pub mod stats;
pub mod wiring;

pub use error::{CalcError, ConfigError, Result};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::box_volume::{
        calculate_box_volume, BoxCalculationInput, BoxCalculationResult, BoxType,
    };
    pub use crate::cable::{
        calculate_cable_gauge, calculate_cable_gauge_with, AwgTable, CableCalculationInput,
        CableCalculationResult,
    };
    pub use crate::calculator::{CalculationRequest, CalculationResponse, Calculator};
    pub use crate::catalog::{CatalogSnapshot, ComponentCatalog, ComponentRecord};
    pub use crate::compatibility::{
        evaluate_compatibility, BodyType, CompatibilityReport, ComponentSelection,
        SystemConfiguration,
    };
    pub use crate::config::CalculatorConfig;
    pub use crate::error::{CalcError, ConfigError};
    pub use crate::fuse::{
        calculate_fuse_rating, calculate_fuse_rating_with, FuseCalculationInput,
        FuseCalculationResult, FuseRatingTable, FuseType,
    };
    pub use crate::port::{
        calculate_port_dimensions, PortCalculationInput, PortCalculationResult, PortType,
    };
    pub use crate::stats::{NoopSink, StatKind, UsageCounters, UsageSink};
    pub use crate::wiring::{
        calculate_speaker_wiring, SpeakerWiringInput, SpeakerWiringResult, WiringType,
    };
}

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
