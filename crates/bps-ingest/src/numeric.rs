//! Numeric coercion of cell values.
//!
//! Two flavours are needed:
//! - [`coerce_lenient`] for row classification: commas count as decimal
//!   points and only the leading numeric literal has to parse, so
//!   `"2020*"` or `"12,5 %"` still count as numbers.
//! - [`coerce_strict`] for column profiling: the whole trimmed text must be
//!   a finite number.

use bps_model::Cell;

pub use bps_model::format_number;

/// Lenient coercion used when counting numeric cells in a row.
pub fn coerce_lenient(cell: &Cell) -> Option<f64> {
    match cell {
        Cell::Empty => None,
        Cell::Number(value) if value.is_nan() => None,
        Cell::Number(value) => Some(*value),
        Cell::Text(text) => parse_leading_float(&text.trim().replace(',', ".")),
    }
}

/// Strict coercion used when deciding whether a column is numeric.
pub fn coerce_strict(cell: &Cell) -> Option<f64> {
    match cell {
        Cell::Empty => None,
        Cell::Number(value) => Some(*value).filter(|v| v.is_finite()),
        Cell::Text(text) => parse_f64(text),
    }
}

/// Parses a whole string as a finite f64, ignoring surrounding whitespace.
pub fn parse_f64(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Returns true for finite values without a fractional part.
pub fn is_integral(value: f64) -> bool {
    value.is_finite() && value.fract() == 0.0
}

/// Parses the longest decimal literal at the start of `text`.
///
/// Accepts an optional sign, digits with an optional fraction (at least one
/// digit overall), an optional exponent, or the word `Infinity`. Trailing
/// characters are ignored.
pub fn parse_leading_float(text: &str) -> Option<f64> {
    let bytes = text.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    if text[end..].starts_with("Infinity") {
        return Some(if bytes[0] == b'-' {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut cursor = end + 1;
        if matches!(bytes.get(cursor), Some(b'+' | b'-')) {
            cursor += 1;
        }
        let exp_digits = count_digits(&bytes[cursor..]);
        if exp_digits > 0 {
            end = cursor + exp_digits;
        }
    }

    text[..end].parse::<f64>().ok()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leading_float_plain() {
        assert_eq!(parse_leading_float("123"), Some(123.0));
        assert_eq!(parse_leading_float("-45.5"), Some(-45.5));
        assert_eq!(parse_leading_float(".5"), Some(0.5));
        assert_eq!(parse_leading_float("5."), Some(5.0));
        assert_eq!(parse_leading_float("1e3"), Some(1000.0));
    }

    #[test]
    fn test_leading_float_ignores_suffix() {
        assert_eq!(parse_leading_float("2020*"), Some(2020.0));
        assert_eq!(parse_leading_float("12.5 %"), Some(12.5));
        assert_eq!(parse_leading_float("1.234.567"), Some(1.234));
        assert_eq!(parse_leading_float("3e"), Some(3.0));
        assert_eq!(parse_leading_float("3e+"), Some(3.0));
    }

    #[test]
    fn test_leading_float_rejects_text() {
        assert_eq!(parse_leading_float(""), None);
        assert_eq!(parse_leading_float("."), None);
        assert_eq!(parse_leading_float("-"), None);
        assert_eq!(parse_leading_float("Jawa Barat"), None);
        assert_eq!(parse_leading_float("nan"), None);
        assert_eq!(parse_leading_float("inf"), None);
    }

    #[test]
    fn test_leading_float_infinity() {
        assert_eq!(parse_leading_float("Infinity"), Some(f64::INFINITY));
        assert_eq!(parse_leading_float("-Infinity"), Some(f64::NEG_INFINITY));
    }

    #[test]
    fn test_lenient_comma_decimal() {
        assert_eq!(coerce_lenient(&Cell::from(" 12,5 ")), Some(12.5));
        assert_eq!(coerce_lenient(&Cell::from("1,234")), Some(1.234));
        assert_eq!(coerce_lenient(&Cell::from(7)), Some(7.0));
        assert_eq!(coerce_lenient(&Cell::Number(f64::NAN)), None);
        assert_eq!(coerce_lenient(&Cell::Empty), None);
        assert_eq!(coerce_lenient(&Cell::from("")), None);
    }

    #[test]
    fn test_strict() {
        assert_eq!(coerce_strict(&Cell::from(" 30.5 ")), Some(30.5));
        assert_eq!(coerce_strict(&Cell::from("2020*")), None);
        assert_eq!(coerce_strict(&Cell::from("12,5")), None);
        assert_eq!(coerce_strict(&Cell::from("inf")), None);
        assert_eq!(coerce_strict(&Cell::from("NaN")), None);
        assert_eq!(coerce_strict(&Cell::Number(f64::INFINITY)), None);
        assert_eq!(coerce_strict(&Cell::from(10)), Some(10.0));
    }

    #[test]
    fn test_is_integral() {
        assert!(is_integral(2020.0));
        assert!(is_integral(-3.0));
        assert!(!is_integral(0.5));
        assert!(!is_integral(f64::INFINITY));
        assert!(!is_integral(f64::NAN));
    }
}
