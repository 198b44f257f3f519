#![allow(dead_code)]

use sf_core::{ContactDetails, Document, NewUser, Role};

use serde_json::Value;

pub fn doc(value: Value) -> Document {
    match value {
        Value::Object(map) => map,
        _ => panic!("fixture documents must be objects"),
    }
}

/// Creates a NewUser with sensible defaults
pub fn create_test_user(id: &str, category: Role) -> NewUser {
    NewUser {
        id: id.to_string(),
        email: format!("{id}@shop.test"),
        first_name: "Test".to_string(),
        last_name: "User".to_string(),
        category,
        password_hash: "hash".to_string(),
        username: category.requires_username().then(|| format!("{id}-handle")),
        permissions: false,
        contact: ContactDetails {
            phone: Some("555-0100".to_string()),
            ..ContactDetails::default()
        },
    }
}
