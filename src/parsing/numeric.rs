//! Numeric literals as the server writes them.
//!
//! Some server versions print a negative value hard against the one before
//! it, as in `(pol 19.11 111.69-9.57)`. Literals are therefore found by
//! scanning for sign, digits and decimal point rather than by splitting on
//! whitespace: once one literal has been read, a `+` or `-` immediately
//! following it begins the next.

use crate::language::Angle;
use crate::regex::compile;

/// Split one whitespace-free word into the literals it holds. On failure
/// returns the byte index within the word where scanning stopped.
pub fn scan_literals(word: &str) -> Result<Vec<f64>, usize> {
    let re = compile!(r"^[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?");

    let mut values = Vec::new();
    let mut rest = word;
    let mut index = 0;

    while !rest.is_empty() {
        let found = re
            .find(rest)
            .ok_or(index)?;

        let value = found
            .as_str()
            .parse::<f64>()
            .map_err(|_| index)?;
        values.push(value);

        rest = &rest[found.end()..];
        index += found.end();

        if !rest.is_empty() && !rest.starts_with(['+', '-']) {
            return Err(index);
        }
    }

    if values.is_empty() {
        return Err(0);
    }

    Ok(values)
}

/// Parse a word that must hold exactly one literal.
pub fn parse_number(word: &str) -> Option<f64> {
    match scan_literals(word) {
        Ok(values) if values.len() == 1 => Some(values[0]),
        _ => None,
    }
}

/// Parse a non-negative whole number such as a player or uniform id.
pub fn parse_count(word: &str) -> Option<u32> {
    let value = parse_number(word)?;
    if value >= 0.0 && value.fract() == 0.0 && value <= u32::MAX as f64 {
        Some(value as u32)
    } else {
        None
    }
}

pub fn degrees(value: f64) -> Angle {
    Angle::from_degrees(value)
}
