//! Numeric token extraction shared by the classification rules.

use crate::core::errors::ClassifyError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::RangeInclusive;

static INTEGER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").unwrap());
static DECIMAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+(?:\.\d+)?").unwrap());
static YEAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(\d{4})(?:\s*-\s*(\d{4}))?\b").unwrap());

/// All maximal digit runs, in order of appearance.
pub(crate) fn integer_tokens(text: &str) -> Vec<&str> {
    INTEGER.find_iter(text).map(|m| m.as_str()).collect()
}

/// Digit runs with an optional decimal fraction (`1.5`).
pub(crate) fn decimal_tokens(text: &str) -> Vec<&str> {
    DECIMAL.find_iter(text).map(|m| m.as_str()).collect()
}

pub(crate) fn parse_integer(token: &str) -> Result<f64, ClassifyError> {
    token
        .parse::<u64>()
        .map(|n| n as f64)
        .map_err(|_| ClassifyError::NumberOutOfRange(token.to_string()))
}

pub(crate) fn parse_decimal(token: &str) -> Result<f64, ClassifyError> {
    match token.parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(n),
        _ => Err(ClassifyError::InvalidNumber(token.to_string())),
    }
}

/// First 4-digit year (or `YYYY-YYYY` span) in `text`. A span yields its
/// later year.
pub(crate) fn first_year(text: &str) -> Option<i32> {
    let caps = YEAR.captures(text)?;
    let start = caps.get(1)?.as_str().parse::<i32>().ok()?;
    let end = caps
        .get(2)
        .and_then(|m| m.as_str().parse::<i32>().ok())
        .unwrap_or(start);
    Some(start.max(end))
}

/// A bare 4-digit token inside the configured year window.
pub(crate) fn as_year(token: &str, window: &RangeInclusive<i32>) -> Option<i32> {
    if token.len() != 4 {
        return None;
    }
    token.parse::<i32>().ok().filter(|year| window.contains(year))
}
