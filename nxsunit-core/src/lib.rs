//! nxsunit Core - Fundamental types
//!
//! This crate provides the core types shared by the nxsunit crates:
//! - `Value`: a scalar reading or an ordered sequence of readings
//! - `UnitError`: conversion failures with machine-readable codes

mod value;
mod error;

pub use value::Value;
pub use error::{UnitError, codes};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Value, UnitError};
    pub use crate::error::codes;
}
