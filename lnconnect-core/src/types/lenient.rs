//! Deserializers for persisted values other clients may have written in a looser shape.
//!
//! A value that only one field dislikes must not make the whole settings blob unreadable.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Selection that points at no profile.
pub(super) const UNRESOLVED_INDEX: i64 = -1;

/// Largest float that still converts to an exact integer index.
const MAX_EXACT_FLOAT: f64 = 9_007_199_254_740_991.0;

/// Scalar as text: strings as-is, numbers and booleans in their JSON form, `null` as absent.
pub(super) fn string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(other) => Err(D::Error::custom(format!(
            "expected a scalar, got {}",
            kind(&other)
        ))),
    }
}

/// Profile index. Negative, fractional or non-numeric values become [`UNRESOLVED_INDEX`].
pub(super) fn index<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(match raw {
        None | Some(Value::Null) => None,
        Some(Value::Number(n)) => Some(
            n.as_i64()
                .or_else(|| n.as_f64().and_then(exact_integer))
                .unwrap_or(UNRESOLVED_INDEX),
        ),
        Some(Value::String(s)) => Some(s.trim().parse().unwrap_or(UNRESOLVED_INDEX)),
        Some(_) => Some(UNRESOLVED_INDEX),
    })
}

/// List where `null` means empty.
pub(super) fn list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
fn exact_integer(value: f64) -> Option<i64> {
    (value.fract() == 0.0 && value.abs() <= MAX_EXACT_FLOAT).then_some(value as i64)
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
        _ => "a scalar",
    }
}
