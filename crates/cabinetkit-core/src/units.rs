//! Unit conversion utilities
//!
//! All derivation happens in inches. This module handles the presentation
//! boundary: parsing decimal and fractional inch text, formatting lengths for
//! display in inches or millimetres, and rendering fractions such as `1/2`.

use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Millimetres per inch
pub const MM_PER_INCH: f64 = 25.4;

/// Largest denominator `format_fraction` will use
const MAX_DENOMINATOR: u32 = 64;

/// Measurement system used for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementSystem {
    /// Metric system (mm)
    Metric,
    /// Imperial system (inches)
    Imperial,
}

impl Default for MeasurementSystem {
    fn default() -> Self {
        Self::Imperial
    }
}

/// Round to 2 decimal places, the precision used for display
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Format a length given in inches for display
///
/// The value is rounded to 2 decimals here and nowhere else; callers keep
/// full precision until this point.
pub fn format_length(value_in: f64, system: MeasurementSystem) -> String {
    match system {
        MeasurementSystem::Imperial => format!("{}\"", round2(value_in)),
        MeasurementSystem::Metric => format!("{} mm", round2(value_in * MM_PER_INCH)),
    }
}

/// Format an inch value as a mixed fraction (`1/2`, `1 1/4`, `3`)
///
/// Values that are not a multiple of 1/64 fall back to plain decimal text.
pub fn format_fraction(value_in: f64) -> String {
    let sign = if value_in < 0.0 { "-" } else { "" };
    let magnitude = value_in.abs();
    let scaled = magnitude * f64::from(MAX_DENOMINATOR);
    let units = scaled.round();

    if (scaled - units).abs() > 1e-9 {
        return format!("{}", value_in);
    }

    let units = units as u64;
    let denominator = u64::from(MAX_DENOMINATOR);
    let whole = units / denominator;
    let mut numerator = units % denominator;
    let mut denom = denominator;

    if numerator == 0 {
        return format!("{}{}", sign, whole);
    }

    while numerator % 2 == 0 {
        numerator /= 2;
        denom /= 2;
    }

    if whole == 0 {
        format!("{}{}/{}", sign, numerator, denom)
    } else {
        format!("{}{} {}/{}", sign, whole, numerator, denom)
    }
}

/// Parse length text to inches
///
/// Accepts decimal inches (`0.75`), fractional inches (`3/4`, `1 1/2`), an
/// optional trailing `"` or `in`, and millimetres with an `mm` suffix.
pub fn parse_length(input: &str) -> Result<f64, ParseError> {
    let invalid = |reason: &str| ParseError::InvalidLength {
        input: input.to_string(),
        reason: reason.to_string(),
    };

    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(invalid("empty value"));
    }

    if let Some(mm) = trimmed.strip_suffix("mm") {
        let value = mm
            .trim()
            .parse::<f64>()
            .map_err(|e| invalid(&e.to_string()))?;
        return Ok(value / MM_PER_INCH);
    }

    let trimmed = trimmed
        .strip_suffix('"')
        .or_else(|| trimmed.strip_suffix("in"))
        .unwrap_or(trimmed)
        .trim();

    if !trimmed.contains('/') {
        return trimmed.parse::<f64>().map_err(|e| invalid(&e.to_string()));
    }

    let negative = trimmed.starts_with('-');
    let unsigned = trimmed.trim_start_matches('-');
    let mut total_inches = 0.0;

    for part in unsigned.split_whitespace() {
        if part.contains('/') {
            let frac_parts: Vec<&str> = part.split('/').collect();
            if frac_parts.len() != 2 {
                return Err(invalid("invalid fraction format"));
            }
            let num = frac_parts[0]
                .parse::<f64>()
                .map_err(|_| invalid("invalid numerator"))?;
            let den = frac_parts[1]
                .parse::<f64>()
                .map_err(|_| invalid("invalid denominator"))?;
            if den == 0.0 {
                return Err(invalid("division by zero"));
            }
            total_inches += num / den;
        } else {
            total_inches += part
                .parse::<f64>()
                .map_err(|_| invalid("invalid number part"))?;
        }
    }

    Ok(if negative { -total_inches } else { total_inches })
}

/// Serde helper: accept a length as a number or as text understood by
/// [`parse_length`]
///
/// Use with `#[serde(deserialize_with = "deserialize_length")]`.
pub fn deserialize_length<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    struct LengthVisitor;

    impl<'de> serde::de::Visitor<'de> for LengthVisitor {
        type Value = f64;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a number or a length such as \"3/4\" or \"19 mm\"")
        }

        fn visit_f64<E: serde::de::Error>(self, value: f64) -> Result<f64, E> {
            Ok(value)
        }

        fn visit_i64<E: serde::de::Error>(self, value: i64) -> Result<f64, E> {
            Ok(value as f64)
        }

        fn visit_u64<E: serde::de::Error>(self, value: u64) -> Result<f64, E> {
            Ok(value as f64)
        }

        fn visit_str<E: serde::de::Error>(self, value: &str) -> Result<f64, E> {
            parse_length(value).map_err(E::custom)
        }
    }

    deserializer.deserialize_any(LengthVisitor)
}
