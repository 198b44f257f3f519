//! Schemaless document representation shared by the stores and the reconciler.
//!
//! User documents are kept as raw JSON objects rather than typed structs so
//! that attribute *presence* can be inspected: a key set to `null` and a key
//! that was never written are different things to the schema reconciler.

use serde_json::{Map, Value};

/// A stored document: a JSON object keyed by camelCase attribute names.
pub type Document = Map<String, Value>;

/// Attribute names of the `users` collection.
pub mod fields {
    pub const ID: &str = "id";
    pub const USER_ID: &str = "userId";
    pub const CATEGORY: &str = "category";
    pub const EMAIL: &str = "email";
    pub const FIRST_NAME: &str = "firstName";
    pub const LAST_NAME: &str = "lastName";
    pub const PASSWORD: &str = "password";
    pub const USERNAME: &str = "username";
    pub const PERMISSIONS: &str = "permissions";
    pub const IS_ACTIVE: &str = "isActive";
    pub const IS_ONLINE: &str = "isOnline";
    pub const CREATED_AT: &str = "createdAt";
    pub const UPDATED_AT: &str = "updatedAt";
    pub const LAST_ACTIVE_AT: &str = "lastActiveAt";
    pub const LAST_LOGIN_AT: &str = "lastLoginAt";
    pub const SCHEMA_VERSION: &str = "schemaVersion";
    pub const PHONE: &str = "phone";

    /// Fields holding timestamps, normalized on reconciliation.
    pub const TIMESTAMPS: [&str; 4] = [CREATED_AT, UPDATED_AT, LAST_ACTIVE_AT, LAST_LOGIN_AT];
}

/// Non-empty string value of `key`, if any.
pub fn str_field<'a>(doc: &'a Document, key: &str) -> Option<&'a str> {
    doc.get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

/// True when `key` is absent or explicitly `null`.
pub fn is_missing(doc: &Document, key: &str) -> bool {
    matches!(doc.get(key), None | Some(Value::Null))
}

/// Insert `value` under `key` unless a non-null value is already there.
pub fn fill_if_missing(doc: &mut Document, key: &str, value: Value) {
    if is_missing(doc, key) {
        doc.insert(key.to_string(), value);
    }
}

/// Shallow merge: every non-null entry of `patch` replaces the one in `base`.
pub fn merge_non_null(base: &mut Document, patch: &Document) {
    for (key, value) in patch {
        if !value.is_null() {
            base.insert(key.clone(), value.clone());
        }
    }
}
