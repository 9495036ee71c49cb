//! Physical dimensions recognized in instrument metadata
//!
//! Each dimension owns its own unit-name table. Tokens are classified by
//! scanning dimensions in `Dimension::ALL` order, so the order here decides
//! which table claims a spelling that several tables know.

use std::fmt;
use std::str::FromStr;
use serde::{Serialize, Deserialize};
use nxsunit_core::UnitError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    #[serde(rename = "distance")]
    Distance,
    #[serde(rename = "time")]
    Time,
    #[serde(rename = "angle")]
    Angle,
    #[serde(rename = "frequency")]
    Frequency,
    #[serde(rename = "temperature")]
    Temperature,
    #[serde(rename = "charge")]
    Charge,
    #[serde(rename = "resistance")]
    Resistance,
    /// Scattering length density (inverse area)
    #[serde(rename = "sld")]
    Sld,
    /// Momentum transfer (inverse length)
    #[serde(rename = "Q")]
    Q,
    /// Inverse volume
    #[serde(rename = "scattering_volume")]
    ScatteringVolume,
    /// Spin-echo SANS pseudo-dimension (Å^-2 cm^-1)
    #[serde(rename = "SESANS")]
    Sesans,
    #[serde(rename = "energy")]
    Energy,
    #[serde(rename = "magnetism")]
    Magnetism,
    #[default]
    #[serde(rename = "dimensionless")]
    Dimensionless,
}

impl Dimension {
    /// Every dimension, in classification order
    pub const ALL: [Dimension; 14] = [
        Dimension::Distance,
        Dimension::Time,
        Dimension::Angle,
        Dimension::Frequency,
        Dimension::Temperature,
        Dimension::Charge,
        Dimension::Resistance,
        Dimension::Sld,
        Dimension::Q,
        Dimension::ScatteringVolume,
        Dimension::Sesans,
        Dimension::Energy,
        Dimension::Magnetism,
        Dimension::Dimensionless,
    ];

    /// Name used in metadata hints and serialized output
    pub fn name(&self) -> &'static str {
        match self {
            Dimension::Distance => "distance",
            Dimension::Time => "time",
            Dimension::Angle => "angle",
            Dimension::Frequency => "frequency",
            Dimension::Temperature => "temperature",
            Dimension::Charge => "charge",
            Dimension::Resistance => "resistance",
            Dimension::Sld => "sld",
            Dimension::Q => "Q",
            Dimension::ScatteringVolume => "scattering_volume",
            Dimension::Sesans => "SESANS",
            Dimension::Energy => "energy",
            Dimension::Magnetism => "magnetism",
            Dimension::Dimensionless => "dimensionless",
        }
    }

    pub fn is_dimensionless(&self) -> bool {
        matches!(self, Dimension::Dimensionless)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Dimension {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Dimension::ALL
            .iter()
            .copied()
            .find(|d| d.name() == s)
            .ok_or_else(|| UnitError::unknown_dimension(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensionless() {
        assert!(Dimension::Dimensionless.is_dimensionless());
        assert!(!Dimension::Distance.is_dimensionless());
        assert_eq!(Dimension::default(), Dimension::Dimensionless);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Dimension::Distance), "distance");
        assert_eq!(format!("{}", Dimension::Q), "Q");
        assert_eq!(format!("{}", Dimension::ScatteringVolume), "scattering_volume");
    }

    #[test]
    fn test_from_str_round_trips_names() {
        for dim in Dimension::ALL {
            assert_eq!(dim.name().parse::<Dimension>().unwrap(), dim);
        }
    }

    #[test]
    fn test_from_str_unknown() {
        let err = "colour".parse::<Dimension>().unwrap_err();
        assert_eq!(err, UnitError::unknown_dimension("colour"));
    }

    #[test]
    fn test_classification_order() {
        // dimensionless is the catch-all and must be scanned last
        assert_eq!(Dimension::ALL[0], Dimension::Distance);
        assert_eq!(Dimension::ALL[Dimension::ALL.len() - 1], Dimension::Dimensionless);
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&Dimension::Sesans).unwrap(), "\"SESANS\"");
        let dim: Dimension = serde_json::from_str("\"temperature\"").unwrap();
        assert_eq!(dim, Dimension::Temperature);
    }
}
