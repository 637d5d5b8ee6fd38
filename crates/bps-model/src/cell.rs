//! Tagged cell values.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single decoded spreadsheet cell.
///
/// Serialized untagged: `null`, a JSON number or a JSON string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    #[default]
    Empty,
    Number(f64),
    Text(String),
}

impl Cell {
    /// Returns true for `Empty` and zero-length text.
    ///
    /// Whitespace-only text is *not* empty; see [`Cell::is_blank`].
    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Number(_) => false,
            Cell::Text(text) => text.is_empty(),
        }
    }

    /// Returns true for `Empty` and text that is empty after trimming.
    pub fn is_blank(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Number(_) => false,
            Cell::Text(text) => text.trim().is_empty(),
        }
    }

    /// Canonical string form of the cell.
    pub fn display(&self) -> String {
        match self {
            Cell::Empty => String::new(),
            Cell::Number(value) => format_number(*value),
            Cell::Text(text) => text.clone(),
        }
    }

    /// Canonical string form, trimmed.
    pub fn display_trimmed(&self) -> String {
        match self {
            Cell::Text(text) => text.trim().to_string(),
            other => other.display(),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => Ok(()),
            Cell::Number(value) => f.write_str(&format_number(*value)),
            Cell::Text(text) => f.write_str(text),
        }
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Number(value)
    }
}

impl From<i32> for Cell {
    fn from(value: i32) -> Self {
        Cell::Number(f64::from(value))
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Text(value)
    }
}

/// Renders a number the way browser spreadsheet tools show it.
///
/// Uses the shortest round-trip digits. Integral values have no fractional
/// part, negative zero prints as `0`, and infinities print as `Infinity` /
/// `-Infinity`. Magnitudes of at least `1e21` or below `1e-6` switch to
/// exponent notation (`1e+21`, `1.5e-7`).
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    // `{:e}` yields the shortest digits as `d.ddde<exp>`.
    let scientific = format!("{:e}", value.abs());
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return format!("{value}");
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return format!("{value}");
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let digit_count = digits.len() as i32;
    // Position of the decimal point relative to the first digit.
    let point = exponent + 1;

    let body = if digit_count <= point && point <= 21 {
        format!("{digits}{}", "0".repeat((point - digit_count).unsigned_abs() as usize))
    } else if 0 < point && point <= 21 {
        let (int_part, frac_part) = digits.split_at(point.unsigned_abs() as usize);
        format!("{int_part}.{frac_part}")
    } else if -6 < point && point <= 0 {
        format!("0.{}{digits}", "0".repeat(point.unsigned_abs() as usize))
    } else {
        let exp_sign = if exponent < 0 { '-' } else { '+' };
        let (first, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{first}e{exp_sign}{}", exponent.unsigned_abs())
        } else {
            format!("{first}.{rest}e{exp_sign}{}", exponent.unsigned_abs())
        }
    };

    if value < 0.0 {
        format!("-{body}")
    } else {
        body
    }
}
