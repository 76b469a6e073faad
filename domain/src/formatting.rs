//! Number parsing and display formatting for financial figures.
//!
//! Raw figures arrive loosely typed (numbers, strings with thousands
//! separators, empty strings, `null`, placeholder dashes). `parse_number`
//! turns them into `Option<f64>` once at ingestion; everything downstream
//! works on the strict optional value.

use regex::Regex;
use shared::{FormattedCell, NumericClass, RawValue};
use std::sync::LazyLock;

/// Placeholder shown for absent values
pub const ABSENT_PLACEHOLDER: &str = "-";

/// Fraction digits kept by the Korean locale number format
const MAX_FRACTION_DIGITS: i32 = 3;

static FLOAT_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?").expect("valid float prefix pattern")
});

/// Normalizes a raw figure into a number or absent.
///
/// Empty strings, `null`, missing keys and `"-"` are absent. Commas are
/// stripped and the longest leading float literal is read, so `"12억"`
/// parses as 12 and `"abc"` is absent. Non-finite results are absent.
pub fn parse_number(raw: &RawValue) -> Option<f64> {
    match raw {
        RawValue::Number(value) => value.is_finite().then_some(*value),
        RawValue::Missing => None,
        RawValue::Text(text) if text.is_empty() || text == ABSENT_PLACEHOLDER => None,
        RawValue::Text(text) => parse_float_prefix(&text.replace(',', "")),
    }
}

fn parse_float_prefix(input: &str) -> Option<f64> {
    let literal = FLOAT_PREFIX.find(input.trim_start())?;
    literal
        .as_str()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Formats a value with Korean digit grouping ("1,234,567.5"), or "-" when absent.
///
/// Fraction digits are rounded from the exact binary value, so `1.0005`
/// (stored just below the half) shows as "1" the way the browser's
/// `Intl.NumberFormat` does. True halves round away from zero.
pub fn format_number(value: Option<f64>) -> String {
    match value {
        Some(number) => group_digits(number),
        None => ABSENT_PLACEHOLDER.to_string(),
    }
}

/// Formats a value and appends a unit suffix ("1,234억")
pub fn format_with_unit(value: Option<f64>, unit: &str) -> String {
    format!("{}{}", format_number(value), unit)
}

/// Exact halves at the last kept digit are the odd multiples of 2^-(digits + 1)
fn is_exact_half(abs: f64) -> bool {
    let scaled = abs * 2f64.powi(MAX_FRACTION_DIGITS + 1);
    scaled.fract() == 0.0 && scaled % 2.0 == 1.0
}

fn fixed_fraction(abs: f64) -> String {
    let value = if is_exact_half(abs) {
        let scale = 10f64.powi(MAX_FRACTION_DIGITS);
        (abs * scale).round() / scale
    } else {
        abs
    };
    let fixed = format!("{:.*}", MAX_FRACTION_DIGITS as usize, value);
    fixed.trim_end_matches('0').trim_end_matches('.').to_string()
}

fn group_digits(number: f64) -> String {
    let plain = fixed_fraction(number.abs());
    let (integer, fraction) = match plain.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (plain.as_str(), None),
    };

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3 + 1);
    for (i, ch) in integer.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if number < 0.0 {
        grouped.push('-');
    }
    let mut result: String = grouped.chars().rev().collect();

    if let Some(fraction) = fraction {
        result.push('.');
        result.push_str(fraction);
    }
    result
}

/// Styling class of a figure: absent, negative, or positive (zero included)
pub fn numeric_class(value: Option<f64>) -> NumericClass {
    match value {
        None => NumericClass::Empty,
        Some(number) if number < 0.0 => NumericClass::Negative,
        Some(_) => NumericClass::Positive,
    }
}

/// Formatted text and styling class for a table cell
pub fn format_cell(value: Option<f64>) -> FormattedCell {
    FormattedCell {
        text: format_number(value),
        class: numeric_class(value),
    }
}

/// Rounds half away from zero to `decimals` places; never returns negative zero
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale + 0.0
}
