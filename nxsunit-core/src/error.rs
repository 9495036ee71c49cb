//! Unit conversion errors
//!
//! Only a conversion request can fail. Table construction and unit
//! normalization are total, so the error surface stays small.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes (machine-readable)
pub mod codes {
    pub const INCOMPATIBLE_UNITS: &str = "INCOMPATIBLE_UNITS";
    pub const UNKNOWN_DIMENSION: &str = "UNKNOWN_DIMENSION";
}

/// Error type for unit operations
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum UnitError {
    /// The requested target units are not in the dimension resolved for the source units
    #[error("{requested} are not compatible with {units}")]
    IncompatibleUnits { requested: String, units: String },

    #[error("Unknown dimension: {0}")]
    UnknownDimension(String),
}

impl UnitError {
    pub fn incompatible(requested: impl Into<String>, units: impl Into<String>) -> Self {
        UnitError::IncompatibleUnits {
            requested: requested.into(),
            units: units.into(),
        }
    }

    pub fn unknown_dimension(name: impl Into<String>) -> Self {
        UnitError::UnknownDimension(name.into())
    }

    /// Machine-readable code for logging failed records
    pub fn code(&self) -> &'static str {
        match self {
            UnitError::IncompatibleUnits { .. } => codes::INCOMPATIBLE_UNITS,
            UnitError::UnknownDimension(_) => codes::UNKNOWN_DIMENSION,
        }
    }
}
