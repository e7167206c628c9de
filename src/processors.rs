//! Value processors: coercions applied to parsed XML text scalars.

use serde_json::Value;

/// A coercion applied to a parsed text scalar. Returns `None` when the text
/// does not match, letting the next processor (or the plain string
/// fallback) take over.
pub type ValueProcessor = fn(&str) -> Option<Value>;

/// Coerce numeric text to a JSON number. Integral text stays integral;
/// text that only parses to a non-finite float stays a string.
pub fn parse_numbers(text: &str) -> Option<Value> {
    if let Ok(n) = text.parse::<i64>() {
        return Some(Value::from(n));
    }
    if let Ok(f) = text.parse::<f64>() {
        return serde_json::Number::from_f64(f).map(Value::Number);
    }
    None
}

/// Coerce `true`/`false` text (ASCII case-insensitive) to a JSON boolean.
pub fn parse_booleans(text: &str) -> Option<Value> {
    if text.eq_ignore_ascii_case("true") {
        Some(Value::Bool(true))
    } else if text.eq_ignore_ascii_case("false") {
        Some(Value::Bool(false))
    } else {
        None
    }
}

/// Run `text` through `processors` in order; the first match wins.
pub(crate) fn apply(processors: &[ValueProcessor], text: &str) -> Value {
    for processor in processors {
        if let Some(value) = processor(text) {
            return value;
        }
    }
    Value::String(text.to_string())
}
