//! Total coercions from arbitrary JSON values into UI-safe primitives.
//!
//! Nothing in here can fail or panic. The rules follow JavaScript truthiness
//! and `String()`/`Number()` conversion, because the documents being repaired
//! are produced by a JavaScript backend and were previously consumed by one.

use serde_json::{Map, Value};

/// JavaScript truthiness for a JSON value.
///
/// `null`, `false`, `0`, `NaN` and `""` are falsy; every array and object
/// (including empty ones) is truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Coerce any value into a list.
///
/// * falsy → `[]`
/// * array → the same elements with falsy ones removed
/// * string containing `,` → split, trimmed, empty segments dropped
/// * other string → one trimmed element, or `[]` when only whitespace
/// * anything else → `[]`
pub fn to_safe_array(value: &Value) -> Vec<Value> {
    if !is_truthy(value) {
        return Vec::new();
    }

    match value {
        Value::Array(items) => items.iter().filter(|item| is_truthy(item)).cloned().collect(),
        Value::String(s) if s.contains(',') => s
            .split(',')
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .map(|segment| Value::String(segment.to_string()))
            .collect(),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Vec::new()
            } else {
                vec![Value::String(trimmed.to_string())]
            }
        }
        _ => Vec::new(),
    }
}

/// [`to_safe_array`] followed by [`to_safe_string`] on every element.
///
/// Elements that stringify to `""` (e.g. an empty nested array) are dropped
/// so the result only ever holds non-empty strings.
pub fn to_string_list(value: &Value) -> Vec<String> {
    to_safe_array(value)
        .iter()
        .map(stringify)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Coerce an optional value into a string.
///
/// Absent and `null` values yield `fallback`; strings are returned untouched
/// (no trimming); everything else is stringified the way JavaScript's
/// `String()` would, except objects, which become their compact JSON text.
pub fn to_safe_string(value: Option<&Value>, fallback: &str) -> String {
    match value {
        None | Some(Value::Null) => fallback.to_string(),
        Some(value) => stringify(value),
    }
}

/// Pick a document identifier: `_id`, then `id`, then `"item-<index>"`.
pub fn to_safe_id(doc: &Value, index: usize) -> String {
    doc.as_object()
        .and_then(document_id)
        .unwrap_or_else(|| format!("item-{index}"))
}

/// The first truthy identifier of `_id` / `id`, if the document carries one.
///
/// MongoDB extended JSON (`{"$oid": "..."}`) is unwrapped to the inner hex
/// string.
pub fn document_id(doc: &Map<String, Value>) -> Option<String> {
    ["_id", "id"]
        .iter()
        .filter_map(|key| doc.get(*key))
        .filter(|value| is_truthy(value))
        .map(id_text)
        .find(|id| !id.is_empty())
}

/// JavaScript `Number()` for JSON values, with `NaN` and infinities as `None`.
///
/// An absent value is `undefined` and therefore `NaN`; `null` and the empty
/// string are `0`.
pub fn to_safe_number(value: Option<&Value>) -> Option<f64> {
    let number = match value? {
        Value::Null => 0.0,
        Value::Bool(b) => f64::from(u8::from(*b)),
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                0.0
            } else {
                trimmed.parse::<f64>().ok()?
            }
        }
        Value::Array(_) | Value::Object(_) => return None,
    };
    number.is_finite().then_some(number)
}

fn id_text(value: &Value) -> String {
    if let Value::Object(map) = value
        && let Some(Value::String(oid)) = map.get("$oid")
    {
        return oid.clone();
    }
    stringify(value)
}

fn stringify(value: &Value) -> String {
    match value {
        // Only reachable for array elements; `[null].join()` is "".
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => number_text(n),
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(stringify).collect::<Vec<_>>().join(","),
        Value::Object(_) => value.to_string(),
    }
}

// JavaScript prints integral floats without a fractional part.
fn number_text(n: &serde_json::Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
        _ => n.to_string(),
    }
}
