use crate::document::{Document, fields};
use crate::schema::migration::CURRENT_SCHEMA_VERSION;
use crate::schema::timestamp::timestamp_value;
use crate::{AttributeSet, ContactDetails, CoreError, Result as CoreErrorResult, Role};

use chrono::{DateTime, Utc};
use serde_json::Value;

/// Input of the administrative create-user operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub category: Role,
    /// Already hashed; hashing is the caller's concern.
    pub password_hash: String,
    pub username: Option<String>,
    pub permissions: bool,
    pub contact: ContactDetails,
}

impl NewUser {
    /// Check required fields and the role's attribute layout.
    /// Username uniqueness needs the store and is checked there.
    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<()> {
        let required = [
            (fields::EMAIL, &self.email),
            (fields::FIRST_NAME, &self.first_name),
            (fields::LAST_NAME, &self.last_name),
            (fields::ID, &self.id),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(CoreError::field(name, format!("{name} is required")));
            }
        }

        if self.category.requires_username() && self.username().is_none() {
            return Err(CoreError::field(
                fields::USERNAME,
                format!("username is required for {} accounts", self.category),
            ));
        }

        let attributes = AttributeSet::for_role(self.category);
        if let Value::Object(contact) = serde_json::to_value(&self.contact)? {
            if let Some(key) = contact.keys().find(|key| !attributes.allows(key)) {
                return Err(CoreError::field(
                    key.clone(),
                    format!("{key} is not allowed for {} accounts", self.category),
                ));
            }
        }

        Ok(())
    }

    /// Trimmed, non-empty username.
    pub fn username(&self) -> Option<&str> {
        self.username
            .as_deref()
            .map(str::trim)
            .filter(|u| !u.is_empty())
    }

    /// Full document as written by the create operation, default attributes included.
    #[track_caller]
    pub fn into_document(self, now: DateTime<Utc>) -> CoreErrorResult<Document> {
        self.validate()?;

        let mut doc = match serde_json::to_value(&self.contact)? {
            Value::Object(map) => map,
            _ => Document::new(),
        };

        let username = self.username().map(str::to_string);
        let entries = [
            (fields::ID, Value::String(self.id.clone())),
            (fields::USER_ID, Value::String(self.id)),
            (fields::CATEGORY, Value::String(self.category.as_str().to_string())),
            (fields::EMAIL, Value::String(self.email.trim().to_string())),
            (fields::FIRST_NAME, Value::String(self.first_name.trim().to_string())),
            (fields::LAST_NAME, Value::String(self.last_name.trim().to_string())),
            (fields::PASSWORD, Value::String(self.password_hash)),
            (fields::PERMISSIONS, Value::Bool(self.permissions)),
            (fields::IS_ACTIVE, Value::Bool(true)),
            (fields::IS_ONLINE, Value::Bool(false)),
            (fields::LAST_ACTIVE_AT, Value::Null),
            (fields::LAST_LOGIN_AT, Value::Null),
            (fields::SCHEMA_VERSION, Value::from(CURRENT_SCHEMA_VERSION)),
            (fields::CREATED_AT, timestamp_value(now)),
            (fields::UPDATED_AT, timestamp_value(now)),
        ];
        for (key, value) in entries {
            doc.insert(key.to_string(), value);
        }

        if AttributeSet::for_role(self.category).allows(fields::PHONE) {
            doc.entry(fields::PHONE.to_string())
                .or_insert_with(|| Value::String(String::new()));
        }

        if let Some(username) = username {
            doc.insert(fields::USERNAME.to_string(), Value::String(username));
        }

        Ok(doc)
    }
}
