//! Numeric payloads handed to a converter
//!
//! Instrument readers hand over either a single reading or a whole column
//! of readings. Both shapes go through the same elementwise path.

use serde::{Deserialize, Serialize};

/// A scalar reading or an ordered sequence of readings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Value {
    Scalar(f64),
    Sequence(Vec<f64>),
}

impl Value {
    // ========== Safe Accessors (never panic) ==========

    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Value::Scalar(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[f64]> {
        match self {
            Value::Sequence(values) => Some(values),
            _ => None,
        }
    }

    pub fn is_sequence(&self) -> bool {
        matches!(self, Value::Sequence(_))
    }

    /// Number of readings carried (1 for a scalar)
    pub fn len(&self) -> usize {
        match self {
            Value::Scalar(_) => 1,
            Value::Sequence(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Scalar(_) => "Scalar",
            Value::Sequence(_) => "Sequence",
        }
    }

    /// Apply `f` to every reading, keeping shape and order.
    pub fn map<F>(self, f: F) -> Value
    where
        F: Fn(f64) -> f64,
    {
        match self {
            Value::Scalar(v) => Value::Scalar(f(v)),
            Value::Sequence(values) => Value::Sequence(values.into_iter().map(f).collect()),
        }
    }

    /// Flatten into a vector (a scalar becomes a one-element vector)
    pub fn into_vec(self) -> Vec<f64> {
        match self {
            Value::Scalar(v) => vec![v],
            Value::Sequence(values) => values,
        }
    }
}

// ========== Conversions ==========

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Scalar(v)
    }
}

impl From<Vec<f64>> for Value {
    fn from(values: Vec<f64>) -> Self {
        Value::Sequence(values)
    }
}

impl From<&[f64]> for Value {
    fn from(values: &[f64]) -> Self {
        Value::Sequence(values.to_vec())
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Scalar(0.0)
    }
}
