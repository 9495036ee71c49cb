//! nxsunit - Unit normalization and conversion for instrument metadata
//!
//! Unit strings found in scientific data files are free text: "mili*metre",
//! "1/Ang^2", "counts/sec", "degree_celsius". This crate normalizes them to
//! canonical tokens, resolves each token to a physical dimension and
//! converts scalars or sequences between units of the same dimension.
//!
//! Dimensions:
//! - distance (m, mm, Å, micron, etc.)
//! - time (s, ms, min, hr, etc.)
//! - angle (deg, rad, arcmin, etc.)
//! - frequency (Hz, rpm, s^-1, etc.)
//! - temperature (K, degC, degF, degR)
//! - charge (C, µAh)
//! - resistance (Ω)
//! - sld (m^-2, Å^-2)
//! - Q (m^-1, Å^-1)
//! - scattering_volume (m^-3, Å^-3)
//! - SESANS (Å^-2 cm^-1)
//! - energy (eV, meV, etc.)
//! - magnetism (T, G)
//! - dimensionless (a.u., counts, unknown)
//!
//! ```
//! use nxsunit::{Converter, Dimension};
//!
//! let converter = Converter::new(Some("degree_celsius"));
//! assert_eq!(converter.dimensions(), &[Dimension::Temperature]);
//! assert_eq!(converter.convert_scalar(100.0, "degF").unwrap().round(), 212.0);
//! ```

mod dimension;
mod factor;
mod normalize;
mod converter;
pub mod tables;
pub mod ambiguity;

pub use dimension::Dimension;
pub use factor::ConversionFactor;
pub use normalize::{standardize_units, canonical_units};
pub use converter::Converter;
pub use tables::{TABLES, UnitTables, ScaleMap};
pub use nxsunit_core::{Value, UnitError, codes};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Converter, Dimension, ConversionFactor, Value, UnitError};
    pub use crate::{standardize_units, canonical_units};
}
