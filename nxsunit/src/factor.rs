//! Conversion factors relative to a dimension's base unit

use std::fmt;
use serde::{Serialize, Deserialize};

/// Scale and offset taking a value into the base unit of its dimension:
/// `value_base = (value - offset) * scale`.
///
/// Only temperature units carry a non-zero offset. Kelvin is the
/// temperature base, so Celsius is `(1, -273.15)` and Fahrenheit is
/// `(5/9, -459.67)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConversionFactor {
    pub scale: f64,
    pub offset: f64,
}

impl ConversionFactor {
    pub const IDENTITY: ConversionFactor = ConversionFactor { scale: 1.0, offset: 0.0 };

    /// Pure multiplicative factor
    pub const fn new(scale: f64) -> Self {
        ConversionFactor { scale, offset: 0.0 }
    }

    /// Affine factor (temperature)
    pub const fn with_offset(scale: f64, offset: f64) -> Self {
        ConversionFactor { scale, offset }
    }

    pub fn has_offset(&self) -> bool {
        self.offset != 0.0
    }

    /// Fold another factor of a compound unit into this one.
    ///
    /// Scales multiply and offsets add, which is only meaningful when at
    /// most one factor carries an offset.
    pub fn combine(&self, other: &ConversionFactor) -> ConversionFactor {
        ConversionFactor {
            scale: self.scale * other.scale,
            offset: self.offset + other.offset,
        }
    }

    /// Multiply the scale, keeping the offset
    pub fn scaled(&self, by: f64) -> ConversionFactor {
        ConversionFactor { scale: self.scale * by, offset: self.offset }
    }

    /// Factor for the inverse n-th power of this unit (offset dropped)
    pub fn inverse_power(&self, n: i32) -> ConversionFactor {
        ConversionFactor::new(1.0 / self.scale.powi(n))
    }

    pub fn to_base(&self, value: f64) -> f64 {
        (value - self.offset) * self.scale
    }

    pub fn from_base(&self, value: f64) -> f64 {
        value / self.scale + self.offset
    }

    /// Convert a value expressed with this factor into `target`
    pub fn convert_to(&self, value: f64, target: &ConversionFactor) -> f64 {
        (value - self.offset) * self.scale / target.scale + target.offset
    }
}

impl From<f64> for ConversionFactor {
    fn from(scale: f64) -> Self {
        ConversionFactor::new(scale)
    }
}

impl Default for ConversionFactor {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl fmt::Display for ConversionFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_offset() {
            write!(f, "({}, {})", self.scale, self.offset)
        } else {
            write!(f, "{}", self.scale)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!((actual - expected).abs() <= 1e-9 * expected.abs().max(1.0),
            "expected {}, got {}", expected, actual);
    }

    fn celsius() -> ConversionFactor {
        ConversionFactor::with_offset(1.0, -273.15)
    }

    fn fahrenheit() -> ConversionFactor {
        ConversionFactor::with_offset(5.0 / 9.0, 32.0 - 491.67)
    }

    #[test]
    fn test_identity() {
        assert_eq!(ConversionFactor::default(), ConversionFactor::IDENTITY);
        assert!(!ConversionFactor::IDENTITY.has_offset());
        assert_eq!(ConversionFactor::IDENTITY.convert_to(7.0, &ConversionFactor::IDENTITY), 7.0);
    }

    #[test]
    fn test_proportional() {
        let mm = ConversionFactor::new(1e-3);
        let km = ConversionFactor::new(1e3);
        assert_close(mm.convert_to(5e6, &km), 5.0);
        assert_close(km.convert_to(5.0, &mm), 5e6);
    }

    #[test]
    fn test_celsius_to_kelvin() {
        let kelvin = ConversionFactor::with_offset(1.0, 0.0);
        assert_close(celsius().to_base(0.0), 273.15);
        assert_close(celsius().convert_to(100.0, &kelvin), 373.15);
        assert_close(kelvin.convert_to(0.0, &celsius()), -273.15);
    }

    #[test]
    fn test_celsius_fahrenheit_both_ways() {
        assert_close(celsius().convert_to(0.0, &fahrenheit()), 32.0);
        assert_close(celsius().convert_to(100.0, &fahrenheit()), 212.0);
        assert_close(fahrenheit().convert_to(212.0, &celsius()), 100.0);
        assert_close(fahrenheit().convert_to(-40.0, &celsius()), -40.0);
    }

    #[test]
    fn test_base_round_trip() {
        let f = fahrenheit();
        assert_close(f.from_base(f.to_base(451.0)), 451.0);
    }

    #[test]
    fn test_combine() {
        let compound = ConversionFactor::new(1e-3).combine(&ConversionFactor::new(60.0));
        assert_close(compound.scale, 0.06);
        assert_eq!(compound.offset, 0.0);

        let with_offset = celsius().combine(&ConversionFactor::new(2.0));
        assert_eq!(with_offset.offset, -273.15);
    }

    #[test]
    fn test_inverse_power() {
        let cm = ConversionFactor::new(1e-2);
        assert_close(cm.inverse_power(1).scale, 100.0);
        assert_close(cm.inverse_power(2).scale, 1e4);
        assert!(!celsius().inverse_power(1).has_offset());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", ConversionFactor::new(0.5)), "0.5");
        assert_eq!(format!("{}", ConversionFactor::with_offset(1.0, -2.5)), "(1, -2.5)");
    }
}
