//! Converter - a value's source units, resolved once, converted on demand

use std::collections::HashSet;
use std::fmt;
use tracing::{debug, warn};
use nxsunit_core::{UnitError, Value};
use crate::{ambiguity, ConversionFactor, Dimension};
use crate::normalize::{canonical_units, standardize_units};
use crate::tables::TABLES;

/// Source units of a value or column, normalized and resolved to dimensions.
///
/// Each canonical token is paired with a dimension and the per-token
/// factors are folded into one combined factor. Converting only needs the
/// target units; the source side is never re-parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct Converter {
    tokens: Vec<String>,
    dimensions: Vec<Dimension>,
    factor: ConversionFactor,
}

impl Converter {
    /// Converter for `units`, classifying every token. Absent units are "a.u.".
    pub fn new(units: Option<&str>) -> Self {
        Self::with_dimensions(units, &[])
    }

    /// Converter with explicit dimension hints, one per source token.
    ///
    /// An empty slice means "classify": ambiguous spellings take their
    /// default, everything else the first table that knows it.
    pub fn with_dimensions(units: Option<&str>, dimensions: &[Dimension]) -> Self {
        let tokens = standardize_units(Some(units.unwrap_or("a.u.")));
        let dimensions = if dimensions.is_empty() {
            resolve_dimensions(&tokens)
        } else {
            dimensions.to_vec()
        };
        let factor = source_factor(&tokens, &dimensions);

        debug!(?tokens, ?dimensions, %factor, "converter created");
        Converter { tokens, dimensions, factor }
    }

    /// Converter with dimension hints given by name ("time", "Q", ...)
    pub fn from_dimension_names(units: Option<&str>, names: &[&str]) -> Result<Self, UnitError> {
        let dimensions = names
            .iter()
            .map(|name| name.parse::<Dimension>())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::with_dimensions(units, &dimensions))
    }

    /// Canonical source units, tokens joined by a space
    pub fn units(&self) -> String {
        self.tokens.join(" ")
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn dimensions(&self) -> &[Dimension] {
        &self.dimensions
    }

    /// Combined factor of the source units
    pub fn factor(&self) -> ConversionFactor {
        self.factor
    }

    /// Combined factor of `target_units`, looked up in the source dimensions.
    ///
    /// Target tokens pair positionally with the source dimensions; extra
    /// tokens on either side are ignored.
    pub fn scale_for(&self, target_units: &str) -> Result<ConversionFactor, UnitError> {
        let requested = standardize_units(Some(target_units));
        self.dimensions
            .iter()
            .zip(&requested)
            .try_fold(ConversionFactor::IDENTITY, |acc, (dim, token)| {
                TABLES
                    .lookup(*dim, token)
                    .map(|f| acc.combine(&f))
                    .ok_or_else(|| UnitError::incompatible(requested.join(" "), self.units()))
            })
    }

    /// Convert a scalar or sequence into `target_units`.
    ///
    /// An empty target returns the value unchanged.
    pub fn convert<V: Into<Value>>(&self, value: V, target_units: &str) -> Result<Value, UnitError> {
        let value = value.into();
        if target_units.trim().is_empty() {
            return Ok(value);
        }
        let target = self.scale_for(target_units)?;
        Ok(value.map(|v| self.factor.convert_to(v, &target)))
    }

    pub fn convert_scalar(&self, value: f64, target_units: &str) -> Result<f64, UnitError> {
        if target_units.trim().is_empty() {
            return Ok(value);
        }
        let target = self.scale_for(target_units)?;
        Ok(self.factor.convert_to(value, &target))
    }

    /// Every spelling the source dimensions accept, normalized and
    /// de-duplicated, smallest scale first (ties by offset, then name).
    ///
    /// Only single-token names whose canonical form is itself a table key
    /// are listed, so each entry is a valid `convert` target.
    pub fn compatible_units(&self) -> Vec<String> {
        let mut seen_dims = HashSet::new();
        let mut seen_names = HashSet::new();
        let mut units: Vec<(String, ConversionFactor)> = Vec::new();

        for dim in self.dimensions.iter().filter(|d| seen_dims.insert(**d)) {
            let Some(table) = TABLES.table(*dim) else { continue };
            let mut names: Vec<&String> = table.keys().collect();
            names.sort();
            for name in names {
                let canonical = canonical_units(Some(name));
                if canonical.is_empty() || canonical.contains(' ') || seen_names.contains(&canonical) {
                    continue;
                }
                if let Some(factor) = table.get(&canonical).copied() {
                    seen_names.insert(canonical.clone());
                    units.push((canonical, factor));
                }
            }
        }

        units.sort_by(|(a_name, a), (b_name, b)| {
            a.scale
                .total_cmp(&b.scale)
                .then(a.offset.total_cmp(&b.offset))
                .then_with(|| a_name.cmp(b_name))
        });
        units.into_iter().map(|(name, _)| name).collect()
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new(None)
    }
}

impl fmt::Display for Converter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.units())
    }
}

// ============ Resolution ============

fn resolve_dimensions(tokens: &[String]) -> Vec<Dimension> {
    let joined = tokens.join(" ");
    tokens
        .iter()
        .map(|token| {
            if ambiguity::is_ambiguous(token) {
                if let Some(dim) = ambiguity::resolve(&joined).or_else(|| ambiguity::resolve(token)) {
                    return dim;
                }
            }
            TABLES.classify(token).unwrap_or(Dimension::Dimensionless)
        })
        .collect()
}

fn source_factor(tokens: &[String], dimensions: &[Dimension]) -> ConversionFactor {
    dimensions
        .iter()
        .zip(tokens)
        .fold(ConversionFactor::IDENTITY, |acc, (dim, token)| {
            match TABLES.lookup(*dim, token) {
                Some(f) => acc.combine(&f),
                None => {
                    warn!(unit = %token, dimension = %dim, "unrecognized unit, using scale 1");
                    acc
                }
            }
        })
}
