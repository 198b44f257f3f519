use crate::{
    CURRENT_SCHEMA_VERSION, ContactDetails, CoreError, Document, NewUser, Role, fields,
    needs_update, reconcile_document,
};

use chrono::Utc;
use serde_json::Value;

fn customer() -> NewUser {
    NewUser {
        id: "u1".to_string(),
        email: "ada@example.com".to_string(),
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        category: Role::Customer,
        password_hash: "$2b$04$hash".to_string(),
        username: None,
        permissions: false,
        contact: ContactDetails::default(),
    }
}

#[test]
fn given_valid_customer_when_converted_then_document_has_full_default_set() {
    let doc = customer().into_document(Utc::now()).unwrap();

    assert_eq!(doc.get(fields::USER_ID), Some(&Value::from("u1")));
    assert_eq!(doc.get(fields::IS_ACTIVE), Some(&Value::Bool(true)));
    assert_eq!(doc.get(fields::IS_ONLINE), Some(&Value::Bool(false)));
    assert_eq!(doc.get(fields::LAST_LOGIN_AT), Some(&Value::Null));
    assert_eq!(doc.get(fields::SCHEMA_VERSION), Some(&Value::from(CURRENT_SCHEMA_VERSION)));
    assert_eq!(doc.get(fields::PHONE), Some(&Value::from("")));
    assert!(!needs_update(&doc));
}

#[test]
fn given_new_document_when_reconciled_then_already_current() {
    let doc = customer().into_document(Utc::now()).unwrap();

    let result = reconcile_document("u1", &doc, &Document::new(), Utc::now());

    assert!(!result.changed);
}

#[test]
fn given_missing_first_name_when_validated_then_names_the_field() {
    let mut user = customer();
    user.first_name = "  ".to_string();

    let result = user.validate();

    assert!(matches!(
        result,
        Err(CoreError::Validation { field: Some(ref f), .. }) if f == "firstName"
    ));
}

#[test]
fn given_franchise_without_username_when_validated_then_error() {
    let mut user = customer();
    user.category = Role::Franchise;

    let result = user.validate();

    assert!(matches!(
        result,
        Err(CoreError::Validation { field: Some(ref f), .. }) if f == "username"
    ));
}

#[test]
fn given_card_details_on_franchise_when_validated_then_rejected() {
    let mut user = customer();
    user.category = Role::Franchise;
    user.username = Some("north-store".to_string());
    user.contact.card_number = Some("4111111111111111".to_string());

    let result = user.validate();

    assert!(matches!(
        result,
        Err(CoreError::Validation { field: Some(ref f), .. }) if f == "cardNumber"
    ));
}

#[test]
fn given_customer_contact_details_when_converted_then_kept() {
    let mut user = customer();
    user.contact.phone = Some("555-0100".to_string());
    user.contact.zip_code = Some("10001".to_string());

    let doc = user.into_document(Utc::now()).unwrap();

    assert_eq!(doc.get("phone"), Some(&Value::from("555-0100")));
    assert_eq!(doc.get("zipCode"), Some(&Value::from("10001")));
    assert_eq!(doc.get("city"), None);
}

#[test]
fn given_padded_username_when_converted_then_trimmed() {
    let mut user = customer();
    user.category = Role::Test;
    user.username = Some("  qa-bot ".to_string());

    let doc = user.into_document(Utc::now()).unwrap();

    assert_eq!(doc.get(fields::USERNAME), Some(&Value::from("qa-bot")));
}

#[test]
fn given_test_account_when_converted_then_no_contact_fields_written() {
    let mut user = customer();
    user.category = Role::Test;
    user.username = Some("qa".to_string());

    let doc = user.into_document(Utc::now()).unwrap();

    assert!(!doc.contains_key(fields::PHONE));
    assert!(!reconcile_document("u1", &doc, &Document::new(), Utc::now()).changed);
}
