use crate::{
    CURRENT_SCHEMA_VERSION, Document, SchemaGap, fields, inspect, needs_update,
    reconcile_document,
};

use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use serde_json::{Value, json};

fn doc(value: Value) -> Document {
    match value {
        Value::Object(map) => map,
        _ => panic!("test documents must be objects"),
    }
}

fn current_customer() -> Document {
    doc(json!({
        "id": "c1",
        "userId": "c1",
        "category": "customer",
        "email": "c@shop.test",
        "permissions": false,
        "phone": "",
        "isActive": true,
        "isOnline": false,
        "lastActiveAt": null,
        "lastLoginAt": null,
        "schemaVersion": 1,
        "createdAt": "2024-01-01T00:00:00.000Z",
        "updatedAt": "2024-01-01T00:00:00.000Z",
    }))
}

// =========================================================================
// Detection
// =========================================================================

#[test]
fn given_franchise_without_username_or_status_when_inspected_then_needs_update() {
    let record = doc(json!({ "id": "u1", "category": "franchise", "email": "a@b.com" }));

    let status = inspect(&record);

    assert!(status.needs_update());
    assert!(status.missing_username);
    assert_eq!(status.version, 0);
    for key in [
        fields::IS_ACTIVE,
        fields::IS_ONLINE,
        fields::LAST_ACTIVE_AT,
        fields::LAST_LOGIN_AT,
        fields::SCHEMA_VERSION,
    ] {
        assert!(status.missing_keys.contains(&key), "{key} should be reported");
    }
}

#[test]
fn given_tracked_keys_present_with_null_values_when_inspected_then_no_drift() {
    let mut record = current_customer();
    record.insert(fields::IS_ACTIVE.to_string(), Value::Null);

    assert!(!needs_update(&record));
}

#[test]
fn given_customer_without_username_when_inspected_then_username_not_required() {
    assert!(!inspect(&current_customer()).missing_username);
}

#[test]
fn given_record_without_category_when_inspected_then_username_required() {
    let mut record = current_customer();
    record.remove(fields::CATEGORY);

    assert!(inspect(&record).missing_username);
}

// =========================================================================
// Repair
// =========================================================================

#[test]
fn given_stale_franchise_when_reconciled_then_defaults_filled_and_username_gap_reported() {
    let record = doc(json!({ "id": "u1", "category": "franchise", "email": "a@b.com" }));
    let now = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();

    let result = reconcile_document("u1", &record, &Document::new(), now);

    let out = &result.document;
    assert!(result.changed);
    assert_eq!(out.get(fields::IS_ACTIVE), Some(&json!(true)));
    assert_eq!(out.get(fields::IS_ONLINE), Some(&json!(false)));
    assert_eq!(out.get(fields::LAST_ACTIVE_AT), Some(&Value::Null));
    assert_eq!(out.get(fields::LAST_LOGIN_AT), Some(&Value::Null));
    assert_eq!(out.get(fields::PERMISSIONS), Some(&json!(false)));
    assert_eq!(out.get(fields::PHONE), Some(&json!("")));
    assert_eq!(
        out.get(fields::SCHEMA_VERSION),
        Some(&json!(CURRENT_SCHEMA_VERSION))
    );
    assert_eq!(out.get(fields::USER_ID), Some(&json!("u1")));
    assert_eq!(out.get(fields::CREATED_AT), Some(&json!("2025-03-01T12:00:00.000Z")));
    assert_eq!(out.get(fields::UPDATED_AT), Some(&json!("2025-03-01T12:00:00.000Z")));
    assert_eq!(result.gaps, vec![SchemaGap::MissingUsername]);
    assert!(needs_update(out));
}

#[test]
fn given_stale_test_account_when_reconciled_then_phone_not_added() {
    let record = doc(json!({ "id": "t1", "category": "test", "email": "qa@shop.test", "username": "qa" }));

    let result = reconcile_document("t1", &record, &Document::new(), Utc::now());

    assert!(result.changed);
    assert!(!result.document.contains_key(fields::PHONE));
    assert!(!needs_update(&result.document));
}

#[test]
fn given_username_in_patch_when_reconciled_then_gap_closed() {
    let record = doc(json!({ "id": "u1", "category": "franchise", "email": "a@b.com" }));
    let patch = doc(json!({ "username": "north-store" }));

    let result = reconcile_document("u1", &record, &patch, Utc::now());

    assert!(result.gaps.is_empty());
    assert!(!needs_update(&result.document));
}

#[test]
fn given_patch_with_nulls_when_reconciled_then_stored_values_kept() {
    let mut record = current_customer();
    record.insert(fields::IS_ACTIVE.to_string(), json!(false));
    let patch = doc(json!({ "isActive": null, "isOnline": true }));

    let result = reconcile_document("c1", &record, &patch, Utc::now());

    assert_eq!(result.document.get(fields::IS_ACTIVE), Some(&json!(false)));
    assert_eq!(result.document.get(fields::IS_ONLINE), Some(&json!(true)));
}

#[test]
fn given_legacy_timestamps_when_reconciled_then_normalized() {
    let mut record = current_customer();
    record.insert(
        fields::CREATED_AT.to_string(),
        json!({ "_seconds": 1_700_000_000, "_nanoseconds": 5_000_000 }),
    );
    record.insert(fields::LAST_LOGIN_AT.to_string(), json!(1_700_000_000_000_i64));

    let result = reconcile_document("c1", &record, &Document::new(), Utc::now());

    assert_eq!(
        result.document.get(fields::CREATED_AT),
        Some(&json!("2023-11-14T22:13:20.005Z"))
    );
    assert_eq!(
        result.document.get(fields::LAST_LOGIN_AT),
        Some(&json!("2023-11-14T22:13:20.000Z"))
    );
}

#[test]
fn given_mismatched_user_id_when_reconciled_then_forced_to_id() {
    let mut record = current_customer();
    record.insert(fields::USER_ID.to_string(), json!("someone-else"));

    let result = reconcile_document("c1", &record, &Document::new(), Utc::now());

    assert!(result.changed);
    assert_eq!(result.document.get(fields::USER_ID), Some(&json!("c1")));
}

#[test]
fn given_current_record_when_reconciled_then_unchanged_and_updated_at_untouched() {
    let record = current_customer();

    let result = reconcile_document("c1", &record, &Document::new(), Utc::now());

    assert!(!result.changed);
    assert_eq!(result.document, record);
}

#[test]
fn given_unknown_attributes_when_reconciled_then_preserved() {
    let mut record = current_customer();
    record.insert("loyaltyTier".to_string(), json!("gold"));

    let result = reconcile_document("c1", &record, &Document::new(), Utc::now());

    assert_eq!(result.document.get("loyaltyTier"), Some(&json!("gold")));
}

// =========================================================================
// Property-Based Tests - Idempotence
// =========================================================================

const TRACKED: [&str; 5] = [
    fields::IS_ACTIVE,
    fields::IS_ONLINE,
    fields::LAST_ACTIVE_AT,
    fields::LAST_LOGIN_AT,
    fields::SCHEMA_VERSION,
];

proptest! {
    #[test]
    fn given_any_subset_of_tracked_keys_missing_when_reconciled_twice_then_stable(
        mask in 0u8..32,
        seconds in 0i64..4_000_000_000,
        with_username in any::<bool>(),
        category in prop_oneof![
            Just("customer"),
            Just("franchise"),
            Just("webmaster"),
            Just("test"),
        ],
    ) {
        let mut record = current_customer();
        record.insert(fields::CATEGORY.to_string(), json!(category));
        if with_username {
            record.insert(fields::USERNAME.to_string(), json!("handle"));
        }
        let username_gap = category != "customer" && !with_username;
        for (bit, key) in TRACKED.iter().enumerate() {
            if mask & (1 << bit) != 0 {
                record.remove(*key);
            }
        }
        let now = Utc.timestamp_opt(seconds, 0).unwrap();

        let first = reconcile_document("c1", &record, &Document::new(), now);
        let second = reconcile_document("c1", &first.document, &Document::new(), now);

        prop_assert_eq!(needs_update(&second.document), username_gap);
        prop_assert!(inspect(&second.document).missing_keys.is_empty());
        prop_assert!(!second.changed);
        prop_assert_eq!(&second.document, &first.document);
    }
}
