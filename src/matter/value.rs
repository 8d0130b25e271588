//! Scalar coercion for metadata values.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

/// Date-shaped strings stay strings. Dates are compared and parsed lazily
/// at sort time, never eagerly turned into objects here.
///
/// ASCII classes only: the crate builds regex without the Unicode tables,
/// and accepted date shapes are ASCII anyway.
static DATE_SHAPED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}(T[0-9]{2}:[0-9]{2}:[0-9]{2}Z)?$").unwrap()
});

/// Coerce one metadata scalar into a JSON value.
///
/// Coercion order: boolean literal, numeric literal, date-shaped string
/// (left as a string), quoted-string unwrapping, raw string.
pub fn coerce_scalar(raw: &str) -> Value {
    let s = raw.trim();

    match s {
        "true" => return Value::Bool(true),
        "false" => return Value::Bool(false),
        _ => {}
    }

    if let Ok(i) = s.parse::<i64>() {
        return Value::from(i);
    }
    if let Ok(f) = s.parse::<f64>()
        && let Some(n) = serde_json::Number::from_f64(f)
    {
        return Value::Number(n);
    }

    if DATE_SHAPED.is_match(s) {
        return Value::String(s.to_string());
    }

    Value::String(unquote(s).to_string())
}

/// Strip one layer of matching single or double quotes.
pub fn unquote(s: &str) -> &str {
    let bytes = s.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if first == last && (first == b'"' || first == b'\'') {
            return &s[1..s.len() - 1];
        }
    }
    s
}
