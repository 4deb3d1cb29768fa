//! Input sanitization.
//!
//! Trims leading and trailing whitespace from every string found anywhere in
//! a value, recursing through arrays and objects. Numbers, booleans, and
//! nulls pass through untouched, and element order is preserved.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Recursively trim every string inside `value`.
pub fn sanitize(value: Value) -> Value {
    match value {
        Value::String(s) => Value::String(s.trim().to_string()),
        Value::Array(items) => Value::Array(items.into_iter().map(sanitize).collect()),
        Value::Object(map) => map
            .into_iter()
            .map(|(key, inner)| (key, sanitize(inner)))
            .collect::<serde_json::Map<_, _>>()
            .into(),
        other => other,
    }
}

/// Apply [`sanitize`] to an already-typed request via a JSON round-trip.
///
/// Request types round-trip losslessly through JSON; if the impossible
/// happens the input is returned unchanged rather than dropped.
pub fn sanitized<T>(value: T) -> T
where
    T: Serialize + DeserializeOwned,
{
    match serde_json::to_value(&value).and_then(|raw| serde_json::from_value(sanitize(raw))) {
        Ok(clean) => clean,
        Err(_) => value,
    }
}
