//! Forgiving field deserializers for data bags assembled by upstream code.
//!
//! Names and identifiers are sometimes sent as numbers, scores as numeric
//! strings (with either decimal separator), and missing values as `null`.
//! These helpers coerce what can be coerced and reject the rest with a
//! descriptive message.

use serde::de::{self, Deserializer};
use serde::Deserialize;
use serde_json::Value;

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn value_to_text(value: Value) -> Result<String, String> {
    match value {
        Value::Null => Ok(String::new()),
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(format!("expected text, found {}", describe(&other))),
    }
}

fn value_to_number(value: &Value) -> Result<Option<f64>, String> {
    match value {
        Value::Null => Ok(None),
        Value::Number(n) => Ok(n.as_f64()),
        Value::String(s) if s.trim().is_empty() => Ok(None),
        Value::String(s) => s
            .trim()
            .replace(',', ".")
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .map(Some)
            .ok_or_else(|| format!("'{}' is not a number", s)),
        other => Err(format!("expected a number, found {}", describe(other))),
    }
}

/// Any scalar rendered as text; `null` becomes the empty string.
pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    value_to_text(Value::deserialize(deserializer)?).map_err(de::Error::custom)
}

pub fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let text = value_to_text(Value::deserialize(deserializer)?).map_err(de::Error::custom)?;
    Ok(Some(text).filter(|s| !s.trim().is_empty()))
}

/// A required number, accepting numeric strings.
pub fn number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    value_to_number(&Value::deserialize(deserializer)?)
        .map_err(de::Error::custom)?
        .ok_or_else(|| de::Error::custom("expected a number, found null"))
}

/// A score that may be absent: `null` or an empty string means ungraded.
pub fn optional_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    value_to_number(&Value::deserialize(deserializer)?).map_err(de::Error::custom)
}

fn value_to_whole(value: &Value) -> Result<Option<i64>, String> {
    match value_to_number(value)? {
        None => Ok(None),
        Some(n) if n.fract() == 0.0 && n.abs() < 1e15 => Ok(Some(n as i64)),
        Some(n) => Err(format!("expected a whole number, found {}", n)),
    }
}

/// A whole number such as a count or a rank; `null` means zero.
pub fn count<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<i64> + Default,
{
    match value_to_whole(&Value::deserialize(deserializer)?).map_err(de::Error::custom)? {
        None => Ok(T::default()),
        Some(n) => T::try_from(n).map_err(|_| de::Error::custom(format!("{} is out of range", n))),
    }
}

/// Any nested value where `null` stands for its default.
pub fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A list of optional scores, or a single scalar score.
pub fn scores<'de, D>(deserializer: D) -> Result<Vec<Option<f64>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(Vec::new()),
        Value::Array(items) => items
            .iter()
            .map(value_to_number)
            .collect::<Result<Vec<_>, _>>()
            .map_err(de::Error::custom),
        scalar => Ok(vec![value_to_number(&scalar).map_err(de::Error::custom)?]),
    }
}

/// A map of subject id to optional score.
pub fn score_map<'de, D>(
    deserializer: D,
) -> Result<std::collections::BTreeMap<String, Option<f64>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(Default::default()),
        Value::Object(entries) => entries
            .into_iter()
            .map(|(key, value)| {
                value_to_number(&value)
                    .map(|score| (key.clone(), score))
                    .map_err(|e| format!("grade '{}': {}", key, e))
            })
            .collect::<Result<_, _>>()
            .map_err(de::Error::custom),
        other => {
            Err(de::Error::custom(format!("expected a grade map, found {}", describe(&other))))
        }
    }
}
