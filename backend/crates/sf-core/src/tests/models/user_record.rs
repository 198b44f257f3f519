use crate::{Role, UserRecord};

use chrono::{TimeZone, Utc};
use serde_json::json;

#[test]
fn given_legacy_timestamp_objects_when_read_then_parsed() {
    let serde_json::Value::Object(doc) = json!({
        "category": "franchise",
        "email": "f@shop.test",
        "createdAt": { "seconds": 1_700_000_000, "nanoseconds": 0 },
        "lastLoginAt": null,
        "password": "secret-hash",
        "address": "1 Main St",
    }) else {
        unreachable!()
    };

    let record = UserRecord::from_document("f1", doc).unwrap();

    assert_eq!(record.id, "f1");
    assert_eq!(record.category, Role::Franchise);
    assert_eq!(
        record.created_at,
        Some(Utc.timestamp_opt(1_700_000_000, 0).unwrap())
    );
    assert_eq!(record.last_login_at, None);
    assert_eq!(record.extra.get("address"), Some(&json!("1 Main St")));
    assert!(!record.active());
}

#[test]
fn given_record_when_serialized_then_password_is_omitted() {
    let serde_json::Value::Object(doc) = json!({
        "category": "customer",
        "email": "c@shop.test",
        "password": "secret-hash",
    }) else {
        unreachable!()
    };
    let record = UserRecord::from_document("c1", doc).unwrap();

    let out = serde_json::to_value(&record).unwrap();

    assert!(out.get("password").is_none());
    assert_eq!(out.get("email"), Some(&json!("c@shop.test")));
}

#[test]
fn given_document_id_mismatch_when_read_then_store_key_wins() {
    let serde_json::Value::Object(doc) = json!({
        "id": "stale",
        "category": "customer",
        "email": "c@shop.test",
    }) else {
        unreachable!()
    };

    let record = UserRecord::from_document("fresh", doc).unwrap();

    assert_eq!(record.id, "fresh");
    assert_eq!(record.to_identity().id, "fresh");
}

#[test]
fn given_null_names_and_permissions_when_read_then_defaults_used() {
    let serde_json::Value::Object(doc) = json!({
        "category": "customer",
        "email": "c@shop.test",
        "firstName": null,
        "lastName": null,
        "password": null,
        "permissions": null,
    }) else {
        unreachable!()
    };

    let record = UserRecord::from_document("c1", doc).unwrap();

    assert_eq!(record.first_name, "");
    assert_eq!(record.last_name, "");
    assert_eq!(record.password, "");
    assert!(!record.permissions);
}
