//! Unit string normalization - "mili*metre", "Ang^-2", "counts/sec" to table keys
//!
//! Normalization runs a fixed sequence of textual rewrites; each stage
//! assumes the spelling produced by the one before it:
//! 1. canonical spellings (angstrom -> Å, metre -> m, kelvin -> K, ...)
//! 2. implicit exponents get a caret ("A-2" -> "A^-2")
//! 3. prefix glue is removed ("milli*m" -> "millim")
//! 4. remaining "*" separate factors
//! 5. "inv" and "1/" become a division marker
//! 6. "_", "(" and ")" are dropped
//! 7. factors become `name^{exp}` tokens, negated right of the first "/"
//!
//! Nothing here fails. Unknown spellings pass through untouched and only
//! surface later as a failed table lookup.

use std::sync::OnceLock;
use regex::Regex;
use tracing::trace;
use crate::tables::prefix_spellings;

/// Canonical spellings, applied in order
const SPELLINGS: [(&str, &str); 9] = [
    (r"(?i)[ÅAa]ng(?:str[oö]m)?s?(\b|_|\d)", "Å${1}"),
    (r"(?i)met(?:er|re)s?", "m"),
    (r"(?i)sec(?:ond)?s?", "s"),
    (r"(?i)kel(?:vin)?s?", "K"),
    (r"(?i)cel(?:[cs]ius)?", "℃"),
    (r"(?i)h(?:ert)?z", "Hz"),
    (r"(?i)arb(?:itrary|\.)? ?(?:units)?|a\. ?u\.|\baus?\b\.?", "a.u."),
    (r"(?i)unk(?:nown)?", "Unk"),
    (r"(?i)\bc(?:oun)?ts?\b", "cts"),
];

// ============ Compiled patterns ============

fn spelling_rules() -> &'static [(Regex, &'static str)] {
    static RULES: OnceLock<Vec<(Regex, &'static str)>> = OnceLock::new();
    RULES.get_or_init(|| {
        SPELLINGS
            .iter()
            .map(|&(pattern, replacement)| (Regex::new(pattern).unwrap(), replacement))
            .collect()
    })
}

fn get_exponent_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"([℃ÅA-Za-z_ ]+)([-0-9]+)").unwrap())
}

fn get_inverse_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)inv").unwrap())
}

fn prefix_glue() -> &'static [(String, String)] {
    static GLUE: OnceLock<Vec<(String, String)>> = OnceLock::new();
    GLUE.get_or_init(|| {
        prefix_spellings()
            .into_iter()
            .map(|prefix| (format!("{}*", prefix), prefix))
            .collect()
    })
}

// ============ Public API ============

/// Normalize a raw unit string into canonical tokens.
///
/// An absent unit is treated as the text "None", which the dimensionless
/// table knows.
///
/// ```
/// use nxsunit::standardize_units;
///
/// assert_eq!(standardize_units(Some("mili*metre")), vec!["milim"]);
/// assert_eq!(standardize_units(Some("counts/sec")), vec!["cts", "s^{-1}"]);
/// assert_eq!(standardize_units(Some("1/Ang^2")), vec!["Å^{-2}"]);
/// ```
pub fn standardize_units(unit: Option<&str>) -> Vec<String> {
    let raw = unit.unwrap_or("None");
    let spelled = canonicalize_spelling(raw);
    let tokens = format_unit_structure(&spelled);
    trace!(unit = raw, ?tokens, "standardized units");
    tokens
}

/// Canonical tokens joined by a single space, suitable for persisting
pub fn canonical_units(unit: Option<&str>) -> String {
    standardize_units(unit).join(" ")
}

// ============ Stages ============

fn canonicalize_spelling(unit: &str) -> String {
    spelling_rules()
        .iter()
        .fold(unit.to_string(), |acc, (re, replacement)| {
            re.replace_all(&acc, *replacement).into_owned()
        })
}

fn format_unit_structure(unit: &str) -> Vec<String> {
    // a-2 b3 -> a^-2 b^3
    let mut unit = get_exponent_regex().replace_all(unit, "${1}^${2}").into_owned();

    // centi*m -> centim, before '*' turns into a separator
    for (glued, prefix) in prefix_glue() {
        unit = unit.replace(glued.as_str(), prefix);
    }
    let unit = unit.replace('*', " ");

    // invUnit, 1/unit -> /unit
    let unit = get_inverse_regex().replace_all(&unit, "/").replace("1/", "/");

    let unit: String = unit.chars().filter(|c| !matches!(c, '_' | '(' | ')')).collect();

    assemble_tokens(&unit)
}

fn assemble_tokens(unit: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    for (i, segment) in unit.split('/').enumerate() {
        let denominator = i > 0;
        for item in segment.split_whitespace() {
            let mut parts = item.split('^');
            let name = parts.next().unwrap_or("");
            let exponent = parts.next().map(|e| e.trim_matches(|c: char| c == '{' || c == '}'));
            tokens.push(format_token(name, exponent, denominator));
        }
    }
    tokens
}

fn format_token(name: &str, exponent: Option<&str>, denominator: bool) -> String {
    let exponent = exponent.unwrap_or("1");
    let signed = match exponent.parse::<i64>() {
        Ok(n) if denominator => (-n).to_string(),
        Ok(n) => n.to_string(),
        Err(_) if denominator => format!("-{}", exponent),
        Err(_) => exponent.to_string(),
    };
    if signed == "1" {
        name.to_string()
    } else {
        format!("{}^{{{}}}", name, signed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn norm(unit: &str) -> Vec<String> {
        standardize_units(Some(unit))
    }

    #[test]
    fn test_absent_and_empty() {
        assert_eq!(standardize_units(None), vec!["None"]);
        assert!(norm("").is_empty());
        assert!(norm("   ").is_empty());
    }

    #[test]
    fn test_angstrom_spellings() {
        for unit in ["Angstrom", "angstroms", "ANGSTROM", "Ang", "ang", "Ångström"] {
            assert_eq!(norm(unit), vec!["Å"], "{}", unit);
        }
        assert_eq!(norm("A"), vec!["A"]);
    }

    #[test]
    fn test_angstrom_rule_leaves_words_alone() {
        assert_eq!(norm("angular_degree"), vec!["angulardegree"]);
        assert_eq!(norm("angular_second"), vec!["angulars"]);
    }

    #[test]
    fn test_angstrom_with_trailing_exponent() {
        assert_eq!(norm("Angstrom2"), vec!["Å^{2}"]);
        assert_eq!(norm("1/Angstroms2"), vec!["Å^{-2}"]);
        assert_eq!(norm("Ang-1"), vec!["Å^{-1}"]);
    }

    #[test]
    fn test_length_spellings() {
        assert_eq!(norm("metres"), vec!["m"]);
        assert_eq!(norm("Meter"), vec!["m"]);
        assert_eq!(norm("millimeters"), vec!["millim"]);
        assert_eq!(norm("Millimeter"), vec!["Millim"]);
        assert_eq!(norm("milli_meter"), vec!["millim"]);
        assert_eq!(norm("milli*metre"), vec!["millim"]);
        assert_eq!(norm("mili*metre"), vec!["milim"]);
    }

    #[test]
    fn test_time_spellings() {
        assert_eq!(norm("seconds"), vec!["s"]);
        assert_eq!(norm("sec"), vec!["s"]);
        assert_eq!(norm("nano*second"), vec!["nanos"]);
        assert_eq!(norm("microseconds"), vec!["micros"]);
        assert_eq!(norm("usec"), vec!["us"]);
        assert_eq!(norm("msec"), vec!["ms"]);
        assert_eq!(norm("nanosec"), vec!["nanos"]);
        assert_eq!(norm("arcsec"), vec!["arcs"]);
        assert_eq!(norm("arcseconds"), vec!["arcs"]);
    }

    #[test]
    fn test_temperature_spellings() {
        assert_eq!(norm("Kelvin"), vec!["K"]);
        assert_eq!(norm("kelvins"), vec!["K"]);
        assert_eq!(norm("Celsius"), vec!["℃"]);
        assert_eq!(norm("celcius"), vec!["℃"]);
        assert_eq!(norm("degC"), vec!["degC"]);
        assert_eq!(norm("degree_celsius"), vec!["degree℃"]);
    }

    #[test]
    fn test_frequency_spellings() {
        assert_eq!(norm("hertz"), vec!["Hz"]);
        assert_eq!(norm("HZ"), vec!["Hz"]);
        assert_eq!(norm("kHz"), vec!["kHz"]);
    }

    #[test]
    fn test_dimensionless_spellings() {
        for unit in ["arbitrary units", "arbitrary", "arb. units", "a.u.", "A.U.", "au", "a. u."] {
            assert_eq!(norm(unit), vec!["a.u."], "{}", unit);
        }
        assert_eq!(norm("unknown"), vec!["Unk"]);
        assert_eq!(norm("Counts"), vec!["cts"]);
        assert_eq!(norm("ct"), vec!["cts"]);
    }

    #[test]
    fn test_word_rules_do_not_split_units() {
        assert_eq!(norm("gauss"), vec!["gauss"]);
        assert_eq!(norm("electronvolt"), vec!["electronvolt"]);
        assert_eq!(norm("coulomb"), vec!["coulomb"]);
    }

    #[test]
    fn test_exponent_attachment() {
        assert_eq!(norm("A-2"), vec!["A^{-2}"]);
        assert_eq!(norm("cm-1"), vec!["cm^{-1}"]);
        assert_eq!(norm("Ang^-1"), vec!["Å^{-1}"]);
        assert_eq!(norm("m^2"), vec!["m^{2}"]);
    }

    #[test]
    fn test_inverse_markers() {
        assert_eq!(norm("1/s"), vec!["s^{-1}"]);
        assert_eq!(norm("invAng"), vec!["Å^{-1}"]);
        assert_eq!(norm("1/Ang^2"), vec!["Å^{-2}"]);
        assert_eq!(norm("INVcm"), vec!["cm^{-1}"]);
    }

    #[test]
    fn test_compound_units() {
        assert_eq!(norm("m/s"), vec!["m", "s^{-1}"]);
        assert_eq!(norm("counts/sec"), vec!["cts", "s^{-1}"]);
        assert_eq!(norm("K*s"), vec!["K", "s"]);
        assert_eq!(norm("m^2/s^2"), vec!["m^{2}", "s^{-2}"]);
        assert_eq!(norm("Å^{-2} cm^{-1}"), vec!["Å^{-2}", "cm^{-1}"]);
        assert_eq!(norm("(m)"), vec!["m"]);
    }

    #[test]
    fn test_denominator_negates_signed_exponent() {
        assert_eq!(norm("1/m^-2"), vec!["m^{2}"]);
        assert_eq!(norm("m^1"), vec!["m"]);
    }

    #[test]
    fn test_prefix_glue() {
        assert_eq!(norm("n*s"), vec!["ns"]);
        assert_eq!(norm("Kilo*m"), vec!["Kilom"]);
        assert_eq!(norm("µAmp*hour"), vec!["µAmphour"]);
    }

    #[test]
    fn test_idempotent() {
        let raw = [
            "mili*metre", "1/Ang^2", "counts/sec", "degree_celsius", "arbitrary units",
            "unknown", "Kelvin", "A-2", "m^2/s^2", "microAmp*hour", "1e-7 seconds", "usec", "arcsec", "1/Angstroms2",
            "Å^{-2} cm^{-1}", "hertz", "None", "???",
        ];
        for unit in raw {
            let once = canonical_units(Some(unit));
            let twice = canonical_units(Some(once.as_str()));
            assert_eq!(once, twice, "{} not idempotent", unit);
        }
    }

    #[test]
    fn test_unrecognized_passes_through() {
        assert_eq!(norm("furlong"), vec!["furlong"]);
        assert_eq!(norm("???"), vec!["???"]);
    }
}
