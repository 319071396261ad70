//! Error types for the calculators

use thiserror::Error;

/// Errors that can occur while evaluating a calculation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    /// A required field is missing or a value lies outside its valid domain
    #[error("Invalid parameter '{field}': {message}")]
    InvalidParameters {
        /// Input field name as it appears in JSON
        field: String,
        /// What is wrong with the value
        message: String,
    },
}

impl CalcError {
    /// Build an `InvalidParameters` error for `field`
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        CalcError::InvalidParameters {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Name of the offending input field
    pub fn field(&self) -> &str {
        match self {
            CalcError::InvalidParameters { field, .. } => field,
        }
    }
}

/// Result alias used throughout the calculators
pub type Result<T> = std::result::Result<T, CalcError>;

/// Errors that can occur while loading calculator configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file could not be read or written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid JSON for the expected layout
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A lookup table failed validation
    #[error("Invalid {table}: {message}")]
    InvalidTable {
        /// Which table was rejected
        table: &'static str,
        /// Reason for rejection
        message: String,
    },
}
