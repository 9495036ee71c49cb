//! Unit tables - every recognized spelling per dimension
//!
//! Metric families are generated from a full name and an abbreviation
//! (prefix x spelling x joiner x plural). Dimension-specific literals are
//! inserted after the generated names so they win any collision; the
//! insertion order in each `register_*` method is significant.

use std::collections::HashMap;
use std::f64::consts::PI;
use std::sync::LazyLock;
use tracing::debug;
use crate::{ConversionFactor, Dimension};

/// Global unit tables, built on first use
pub static TABLES: LazyLock<UnitTables> = LazyLock::new(UnitTables::new);

/// Unit name -> factor relative to the dimension's base unit
pub type ScaleMap = HashMap<String, ConversionFactor>;

/// Long metric prefixes; "mili" is a spelling found in real files.
const PREFIX: [(&str, f64); 13] = [
    ("peta", 1e15), ("tera", 1e12), ("giga", 1e9), ("mega", 1e6), ("kilo", 1e3),
    ("deci", 1e-1), ("centi", 1e-2), ("milli", 1e-3), ("mili", 1e-3),
    ("micro", 1e-6), ("nano", 1e-9), ("pico", 1e-12), ("femto", 1e-15),
];

/// Short metric prefixes, including both micro signs (U+00B5, U+03BC).
const SHORT_PREFIX: [(&str, f64); 14] = [
    ("P", 1e15), ("T", 1e12), ("G", 1e9), ("M", 1e6), ("k", 1e3),
    ("d", 1e-1), ("c", 1e-2), ("m", 1e-3), ("u", 1e-6), ("µ", 1e-6), ("μ", 1e-6),
    ("n", 1e-9), ("p", 1e-12), ("f", 1e-15),
];

/// Every prefix spelling, long before short; the normalizer strips "<prefix>*" in this order.
pub(crate) fn prefix_spellings() -> Vec<String> {
    let mut spellings: Vec<String> = PREFIX.iter().map(|&(p, _)| p.to_string()).collect();
    spellings.extend(PREFIX.iter().map(|&(p, _)| capitalize(p)));
    spellings.extend(SHORT_PREFIX.iter().map(|&(p, _)| p.to_string()));
    spellings
}

/// Registry of unit tables, one per dimension
pub struct UnitTables {
    dimensions: HashMap<Dimension, ScaleMap>,
}

impl UnitTables {
    pub fn new() -> Self {
        let mut tables = UnitTables {
            dimensions: HashMap::new(),
        };
        tables.register_all_units();
        for dim in Dimension::ALL {
            debug!(dimension = %dim, units = tables.table(dim).map_or(0, |t| t.len()), "unit table built");
        }
        tables
    }

    /// Table for a dimension
    pub fn table(&self, dimension: Dimension) -> Option<&ScaleMap> {
        self.dimensions.get(&dimension)
    }

    /// Factor for `unit` within one dimension
    pub fn lookup(&self, dimension: Dimension, unit: &str) -> Option<ConversionFactor> {
        self.table(dimension).and_then(|t| t.get(unit)).copied()
    }

    /// First dimension (in `Dimension::ALL` order) whose table knows `unit`
    pub fn classify(&self, unit: &str) -> Option<Dimension> {
        Dimension::ALL
            .iter()
            .copied()
            .find(|&dim| self.table(dim).is_some_and(|t| t.contains_key(unit)))
    }

    /// Total number of spellings across all dimensions
    pub fn len(&self) -> usize {
        self.dimensions.values().map(|t| t.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn register(&mut self, dimension: Dimension, units: ScaleMap) {
        self.dimensions.insert(dimension, units);
    }

    fn register_all_units(&mut self) {
        self.register_distance_units();
        self.register_time_units();
        self.register_angle_units();
        self.register_frequency_units();
        self.register_temperature_units();
        self.register_charge_units();
        self.register_resistance_units();
        self.register_inverse_length_units();
        self.register_sesans_units();
        self.register_energy_units();
        self.register_magnetism_units();
        self.register_dimensionless_units();
    }

    fn register_distance_units(&mut self) {
        let mut distance = metric_units("meter", "m");
        distance.extend(metric_units("metre", "m"));
        distance.extend(plural_units(&[("micron", 1e-6), ("Angstrom", 1e-10)]));
        for name in ["Å", "A", "Ang", "ang"] {
            distance.insert(name.to_string(), ConversionFactor::new(1e-10));
        }
        self.register(Dimension::Distance, distance);
    }

    fn register_time_units(&mut self) {
        let mut time = metric_units("second", "s");
        time.extend(plural_units(&[
            ("minute", 60.0),
            ("hour", 3600.0),
            ("day", 24.0 * 3600.0),
            ("week", 7.0 * 24.0 * 3600.0),
        ]));
        time.extend(literal_units(&[("sec", 1.0), ("min", 60.0), ("hr", 3600.0)]));
        time.extend(literal_units(&[
            ("1e-7 s", 1e-7),
            ("1e-7 second", 1e-7),
            ("1e-7 seconds", 1e-7),
        ]));
        self.register(Dimension::Time, time);
    }

    fn register_angle_units(&mut self) {
        // Degree is the base; minutes and seconds here are arc measures
        let mut angle = plural_units(&[
            ("degree", 1.0),
            ("minute", 1.0 / 60.0),
            ("second", 1.0 / 3600.0),
            ("arcdegree", 1.0),
            ("arcminute", 1.0 / 60.0),
            ("arcsecond", 1.0 / 3600.0),
            ("radian", 180.0 / PI),
        ]);
        angle.extend(literal_units(&[
            ("deg", 1.0),
            ("min", 1.0 / 60.0),
            ("sec", 1.0 / 3600.0),
            ("arcdeg", 1.0),
            ("arcmin", 1.0 / 60.0),
            ("arcsec", 1.0 / 3600.0),
            ("angular_degree", 1.0),
            ("angular_minute", 1.0 / 60.0),
            ("angular_second", 1.0 / 3600.0),
            ("rad", 180.0 / PI),
        ]));
        // Spellings as they leave the normalizer ("arcsec" -> "arcs", "_" dropped)
        angle.extend(literal_units(&[
            ("arcs", 1.0 / 3600.0),
            ("angulardegree", 1.0),
            ("angularminute", 1.0 / 60.0),
            ("angularsecond", 1.0 / 3600.0),
            ("angulars", 1.0 / 3600.0),
        ]));
        angle.insert("°".to_string(), ConversionFactor::new(1.0));
        self.register(Dimension::Angle, angle);
    }

    fn register_frequency_units(&mut self) {
        let mut frequency = metric_units("hertz", "Hz");
        frequency.extend(metric_units("Hertz", "Hz"));
        frequency.extend(plural_units(&[("rpm", 1.0 / 60.0)]));
        frequency.extend(inverse_metric_units("second", "s", 1));
        self.register(Dimension::Frequency, frequency);
    }

    fn register_temperature_units(&mut self) {
        // Kelvin is the base; every generated kelvin name is affine with zero offset
        let mut temperature: ScaleMap = metric_units("kelvin", "K")
            .into_iter()
            .map(|(name, f)| (name, ConversionFactor::with_offset(f.scale, 0.0)))
            .collect();

        let celsius = ConversionFactor::with_offset(1.0, -273.15);
        temperature.extend(degree_units("celcius", "C", celsius));
        temperature.extend(degree_units("celsius", "C", celsius));
        temperature.extend(degree_units("centigrade", "C", celsius));
        temperature.extend(degree_units("celsius", "℃", celsius));

        let fahrenheit = ConversionFactor::with_offset(5.0 / 9.0, 32.0 - 491.67);
        temperature.extend(degree_units("fahrenheit", "F", fahrenheit));
        temperature.extend(degree_units("rankine", "R", ConversionFactor::with_offset(5.0 / 9.0, 0.0)));

        temperature.insert("℃".to_string(), celsius);
        temperature.insert("℉".to_string(), fahrenheit);
        self.register(Dimension::Temperature, temperature);
    }

    fn register_charge_units(&mut self) {
        let mut charge = metric_units("coulomb", "C");
        // microampere-hours, raw and in the forms the normalizer produces
        charge.extend(literal_units(&[
            ("microAmp*hour", 0.0036),
            ("microAmphour", 0.0036),
            ("uAmphour", 0.0036),
            ("µAmphour", 0.0036),
            ("μAmphour", 0.0036),
        ]));
        self.register(Dimension::Charge, charge);
    }

    fn register_resistance_units(&mut self) {
        self.register(Dimension::Resistance, metric_units("ohm", "Ω"));
    }

    fn register_inverse_length_units(&mut self) {
        const ANGSTROM: [&str; 6] = ["Å", "A", "Ang", "Angstrom", "ang", "angstrom"];

        // Scattering length density: inverse area
        let mut sld = inverse_metric_units("meter", "m", 2);
        sld.extend(inverse_units(&ANGSTROM, ConversionFactor::new(1.0e20), 2));
        sld.insert("10^-6 Angstrom^-2".to_string(), ConversionFactor::new(1e-6));
        self.register(Dimension::Sld, sld);

        // Momentum transfer: inverse length
        let mut q = inverse_metric_units("meter", "m", 1);
        q.extend(inverse_units(&ANGSTROM, ConversionFactor::new(1.0e10), 1));
        q.insert("10^-3 Angstrom^-1".to_string(), ConversionFactor::new(1e-3));
        self.register(Dimension::Q, q);

        // Inverse volume
        let mut volume = inverse_metric_units("meter", "m", 3);
        volume.extend(inverse_units(&ANGSTROM, ConversionFactor::new(1.0e30), 3));
        self.register(Dimension::ScatteringVolume, volume);
    }

    fn register_sesans_units(&mut self) {
        self.register(Dimension::Sesans, literal_units(&[
            ("Å^{-2} cm^{-1}", 1.0),
            ("A^{-2} cm^{-1}", 1.0),
        ]));
    }

    fn register_energy_units(&mut self) {
        // energy <-> wavelength needs a probe type and is not offered here
        self.register(Dimension::Energy, metric_units("electronvolt", "eV"));
    }

    fn register_magnetism_units(&mut self) {
        let mut magnetism = metric_units("tesla", "T");
        magnetism.extend(
            metric_units("gauss", "G")
                .into_iter()
                .map(|(name, f)| (name, f.scaled(1e-4))),
        );
        self.register(Dimension::Magnetism, magnetism);
    }

    fn register_dimensionless_units(&mut self) {
        // Facilities write 'a.u.', '???', blanks, or nothing at all
        self.register(Dimension::Dimensionless, literal_units(&[
            ("None", 1.0), ("???", 1.0), ("", 1.0),
            ("A.U.", 1.0), ("a.u.", 1.0), ("arbitrary", 1.0), ("arbitrary units", 1.0),
            ("Counts", 1.0), ("counts", 1.0), ("Cts", 1.0), ("cts", 1.0),
            ("unitless", 1.0), ("unknown", 1.0), ("Unknown", 1.0), ("Unk", 1.0),
        ]));
    }
}

impl Default for UnitTables {
    fn default() -> Self {
        Self::new()
    }
}

// ============ Generators ============

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(|c| c.to_lowercase())).collect(),
        None => String::new(),
    }
}

fn literal_units(units: &[(&str, f64)]) -> ScaleMap {
    units
        .iter()
        .map(|&(name, scale)| (name.to_string(), ConversionFactor::new(scale)))
        .collect()
}

/// Singular and plural ("name", "names") for each entry
fn plural_units(units: &[(&str, f64)]) -> ScaleMap {
    let mut map = ScaleMap::new();
    for &(name, scale) in units {
        map.insert(name.to_string(), ConversionFactor::new(scale));
        map.insert(format!("{}s", name), ConversionFactor::new(scale));
    }
    map
}

/// All SI spellings of a unit, femto through peta.
///
/// For "second"/"s" this yields s, ns, n*s, n_s, n s, second, nanosecond,
/// nano*second, Nano_second, nanoseconds, ... Abbreviations are never
/// pluralized so that "ms" cannot collide with a pluralized "m".
fn metric_units(unit: &str, abbr: &str) -> ScaleMap {
    let capitalized = capitalize(unit);
    let lower = unit.to_lowercase();
    let families: [Vec<(String, f64)>; 3] = [
        PREFIX.iter().map(|&(p, s)| (p.to_string(), s)).collect(),
        PREFIX.iter().map(|&(p, s)| (capitalize(p), s)).collect(),
        SHORT_PREFIX.iter().map(|&(p, s)| (p.to_string(), s)).collect(),
    ];

    let mut units = ScaleMap::new();
    for name in [unit, capitalized.as_str(), lower.as_str(), abbr] {
        for prefixes in &families {
            let mut names = ScaleMap::new();
            names.insert(name.to_string(), ConversionFactor::new(1.0));
            for (prefix, scale) in prefixes {
                let factor = ConversionFactor::new(*scale);
                for joiner in ["", "*", "_", " "] {
                    names.insert(format!("{}{}{}", prefix, joiner, name), factor);
                }
            }
            if name != abbr {
                let plurals: Vec<(String, ConversionFactor)> = names
                    .iter()
                    .map(|(n, f)| (format!("{}s", n), *f))
                    .collect();
                names.extend(plurals);
            }
            units.extend(names);
        }
    }
    units
}

/// The four inverse-power notations: 1/x^n, invx^n, x^-n, x^{-n}
fn inverse_units(names: &[&str], factor: ConversionFactor, n: i32) -> ScaleMap {
    let mut units = ScaleMap::new();
    for name in names {
        units.insert(format!("1/{}^{}", name, n), factor);
        units.insert(format!("inv{}^{}", name, n), factor);
        units.insert(format!("{}^-{}", name, n), factor);
        units.insert(format!("{}^{{-{}}}", name, n), factor);
    }
    units
}

/// Inverse n-th power of every metric spelling of `unit`
fn inverse_metric_units(unit: &str, abbr: &str, n: i32) -> ScaleMap {
    let mut units = ScaleMap::new();
    for (name, factor) in metric_units(unit, abbr) {
        units.extend(inverse_units(&[name.as_str()], factor.inverse_power(n), n));
    }
    units
}

/// Temperature spellings: degC, deg_C, °C, degree_celsius, Celsius, ...
fn degree_units(name: &str, symbol: &str, factor: ConversionFactor) -> ScaleMap {
    let mut units = ScaleMap::new();
    units.insert(symbol.to_string(), factor);

    let symbol_lower = symbol.to_lowercase();
    for s in [symbol, symbol_lower.as_str()] {
        units.insert(format!("deg{}", s), factor);
        units.insert(format!("deg_{}", s), factor);
        units.insert(format!("°{}", s), factor);
    }

    let capitalized = capitalize(name);
    for s in [name, capitalized.as_str(), symbol, symbol_lower.as_str()] {
        units.insert(s.to_string(), factor);
        units.insert(format!("degree_{}", s), factor);
        units.insert(format!("degree{}", s), factor);
        units.insert(format!("degrees{}", s), factor);
    }
    units
}
