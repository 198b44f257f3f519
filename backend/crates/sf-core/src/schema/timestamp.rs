//! Timestamp parsing for user documents.
//!
//! Current documents store RFC 3339 strings. Older documents may carry the
//! hosted store's native timestamp objects (`{seconds, nanoseconds}`, or the
//! underscored variant produced by its admin SDK) or epoch milliseconds.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Parse any supported timestamp encoding. `null` and unknown shapes yield `None`.
pub fn parse_timestamp(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(s) => DateTime::parse_from_rfc3339(s)
            .ok()
            .map(|dt| dt.with_timezone(&Utc)),
        Value::Number(n) => n.as_i64().and_then(DateTime::from_timestamp_millis),
        Value::Object(map) => {
            let seconds = map
                .get("seconds")
                .or_else(|| map.get("_seconds"))
                .and_then(Value::as_i64)?;
            let nanos = map
                .get("nanoseconds")
                .or_else(|| map.get("_nanoseconds"))
                .and_then(Value::as_u64)
                .unwrap_or(0);
            DateTime::from_timestamp(seconds, u32::try_from(nanos).ok()?)
        }
        _ => None,
    }
}

/// Canonical stored representation of a timestamp.
pub fn timestamp_value(ts: DateTime<Utc>) -> Value {
    Value::String(ts.to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// Rewrite a timestamp-like value into the canonical representation.
/// Values that do not parse are returned unchanged.
pub fn normalize_timestamp(value: &Value) -> Value {
    match value {
        Value::Null => Value::Null,
        other => parse_timestamp(other)
            .map(timestamp_value)
            .unwrap_or_else(|| other.clone()),
    }
}

/// Serde adapter accepting every encoding understood by [`parse_timestamp`].
pub fn deserialize_lenient<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(parse_timestamp))
}
