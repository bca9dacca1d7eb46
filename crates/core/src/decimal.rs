//! Decimal amounts as they cross the JSON boundary.
//!
//! Incoming amounts are read from the text of the JSON value, never through
//! `f64`, so `19.99` stays `19.99`. Outgoing amounts are rendered in their
//! shortest plain form with at least one fractional digit (`23` -> `"23.0"`).

use std::str::FromStr;

use bigdecimal::BigDecimal;
use serde_json::Value;

/// Parse a JSON number or numeric string. Anything else is `None`.
pub fn parse_decimal(value: &Value) -> Option<BigDecimal> {
    match value {
        Value::Number(number) => BigDecimal::from_str(&number.to_string()).ok(),
        Value::String(text) => BigDecimal::from_str(text.trim()).ok(),
        _ => None,
    }
}

/// `true` for `null` and for strings that are empty after trimming.
pub fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(text) => text.trim().is_empty(),
        _ => false,
    }
}

/// Render `value` without trailing zeros, keeping at least one fractional digit.
pub fn format_decimal(value: &BigDecimal) -> String {
    let value = value.normalized();
    let (_, scale) = value.as_bigint_and_exponent();
    if scale <= 0 {
        format!("{}.0", value.with_scale(0).to_plain_string())
    } else {
        value.to_plain_string()
    }
}
