
use sf_core::{ContactDetails, Document, NewUser, Role};

use serde_json::Value;

pub(crate) fn doc(value: Value) -> Document {
    match value {
        Value::Object(map) => map,
        _ => panic!("test documents must be objects"),
    }
}

pub(crate) fn new_user(id: &str, email: &str, category: Role, username: Option<&str>) -> NewUser {
    NewUser {
        id: id.to_string(),
        email: email.to_string(),
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        category,
        password_hash: "hash".to_string(),
        username: username.map(str::to_string),
        permissions: false,
        contact: ContactDetails::default(),
    }
}
