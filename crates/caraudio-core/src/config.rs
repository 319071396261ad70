//! Calculator configuration
//!
//! Lookup tables that vary by region or supplier. Loaded from JSON:
//!
//! ```json
//! {
//!   "awgTable": [{ "gaugeMm2": 1, "awg": "18" }, { "gaugeMm2": 2, "awg": "16" }],
//!   "fuseRatings": [30, 40, 50, 60, 80, 100]
//! }
//! ```
//!
//! Missing keys fall back to the built-in tables.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::cable::AwgTable;
use crate::error::ConfigError;
use crate::fuse::FuseRatingTable;

/// Tables injected into the cable and fuse calculators
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CalculatorConfig {
    /// Cross-section to AWG mapping for the cable calculator
    pub awg_table: AwgTable,
    /// Standard ratings for the fuse calculator
    pub fuse_ratings: FuseRatingTable,
}

impl CalculatorConfig {
    /// Parse configuration from JSON text
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load configuration from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Save configuration as pretty-printed JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
