//! Loose-typed coercions applied to raw search input.
//!
//! Search input arrives from query strings and external payloads, so every
//! field may hold any JSON value. These helpers map such values to numbers
//! and strings the way a loosely typed client runtime would, which keeps
//! normalization total: no input is ever rejected.

use serde_json::Value;

/// Coerces a JSON value to a number. Unparseable input yields NaN.
pub(crate) fn to_number(value: &Value) -> f64 {
    match value {
        Value::Null => 0.0,
        Value::Bool(flag) => f64::from(u8::from(*flag)),
        Value::Number(number) => number.as_f64().unwrap_or(f64::NAN),
        Value::String(text) => parse_number(text),
        Value::Array(_) => parse_number(&to_text(value)),
        Value::Object(_) => f64::NAN,
    }
}

/// Renders a JSON value as text.
pub(crate) fn to_text(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => number_to_text(number),
        Value::String(text) => text.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => to_text(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// Returns `Some(n)` when `n` is a positive integer that can be carried
/// exactly by an `f64`.
pub(crate) fn positive_integer(value: f64) -> Option<u64> {
    const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

    (value.is_finite() && value > 0.0 && value.fract() == 0.0 && value <= MAX_SAFE_INTEGER)
        .then_some(value as u64)
}

fn number_to_text(number: &serde_json::Number) -> String {
    if number.is_i64() || number.is_u64() {
        return number.to_string();
    }
    match number.as_f64() {
        // -0 prints as "0"
        Some(float) if float == 0.0 => "0".to_string(),
        Some(float) => float_to_text(float),
        None => number.to_string(),
    }
}

/// Shortest round-trip digits; exponent form outside `[1e-6, 1e21)`.
fn float_to_text(float: f64) -> String {
    let magnitude = float.abs();
    if magnitude < 1e21 && magnitude >= 1e-6 {
        return float.to_string();
    }
    let exponential = format!("{float:e}");
    match exponential.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => exponential,
    }
}

/// Accumulates digits in `radix` into an `f64`, so long literals stay
/// finite instead of overflowing.
fn parse_radix(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }
    digits
        .chars()
        .try_fold(0.0_f64, |acc, c| {
            c.to_digit(radix).map(|digit| acc * f64::from(radix) + f64::from(digit))
        })
        .unwrap_or(f64::NAN)
}

fn parse_number(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    let radix = match trimmed.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return trimmed.get(2..).map_or(f64::NAN, |digits| parse_radix(digits, radix));
    }

    // `f64::from_str` also accepts "inf" and "nan", which are not numbers here.
    let numeric = trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'));
    if !numeric {
        return f64::NAN;
    }
    trimmed.parse().unwrap_or(f64::NAN)
}
