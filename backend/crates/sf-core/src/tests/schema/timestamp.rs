use crate::schema::timestamp::{normalize_timestamp, parse_timestamp, timestamp_value};

use chrono::{TimeZone, Utc};
use serde_json::{Value, json};

#[test]
fn test_parse_accepts_rfc3339_with_offset() {
    let parsed = parse_timestamp(&json!("2024-06-01T10:00:00+02:00"));

    assert_eq!(parsed, Some(Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap()));
}

#[test]
fn test_parse_accepts_native_timestamp_objects() {
    let expected = Some(Utc.timestamp_opt(1_600_000_000, 0).unwrap());

    assert_eq!(
        parse_timestamp(&json!({ "seconds": 1_600_000_000, "nanoseconds": 0 })),
        expected
    );
    assert_eq!(parse_timestamp(&json!({ "_seconds": 1_600_000_000 })), expected);
}

#[test]
fn test_parse_rejects_unknown_shapes() {
    assert_eq!(parse_timestamp(&json!("yesterday")), None);
    assert_eq!(parse_timestamp(&json!(true)), None);
    assert_eq!(parse_timestamp(&json!({ "when": 1 })), None);
    assert_eq!(parse_timestamp(&Value::Null), None);
}

#[test]
fn test_normalize_keeps_null_and_unparseable_values() {
    assert_eq!(normalize_timestamp(&Value::Null), Value::Null);
    assert_eq!(normalize_timestamp(&json!("n/a")), json!("n/a"));
}

#[test]
fn test_normalize_is_stable_on_canonical_values() {
    let canonical = timestamp_value(Utc.with_ymd_and_hms(2024, 2, 29, 23, 59, 59).unwrap());

    assert_eq!(canonical, json!("2024-02-29T23:59:59.000Z"));
    assert_eq!(normalize_timestamp(&canonical), canonical);
}
