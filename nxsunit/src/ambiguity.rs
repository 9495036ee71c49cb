//! Default dimensions for spellings that several tables claim

use std::collections::HashMap;
use std::sync::LazyLock;
use crate::Dimension;

/// Global ambiguity table
pub static AMBIGUITIES: LazyLock<HashMap<&'static str, Dimension>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    // distance: Angstrom, current: Ampere
    m.insert("A", Dimension::Distance);
    // time, angle
    m.insert("second", Dimension::Time);
    m.insert("seconds", Dimension::Time);
    m.insert("sec", Dimension::Time);
    // temperature, angle
    m.insert("°", Dimension::Angle);
    // time, angle
    m.insert("minute", Dimension::Angle);
    m.insert("minutes", Dimension::Angle);
    m.insert("min", Dimension::Angle);
    // temperature: Celsius, charge: Coulomb
    m.insert("C", Dimension::Temperature);
    // temperature: Fahrenheit, capacitance: Farad
    m.insert("F", Dimension::Temperature);
    // temperature: Rankine, radiation: Roentgen
    m.insert("R", Dimension::Temperature);
    m
});

pub fn is_ambiguous(unit: &str) -> bool {
    AMBIGUITIES.contains_key(unit)
}

/// Default dimension for an ambiguous spelling
pub fn resolve(unit: &str) -> Option<Dimension> {
    AMBIGUITIES.get(unit).copied()
}
