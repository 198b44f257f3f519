//! Typed read view over a stored user document.

use crate::document::{Document, fields};
use crate::schema::timestamp::deserialize_lenient;
use crate::{Identity, Result as CoreErrorResult, Role};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: String,
    #[serde(default)]
    pub user_id: Option<String>,
    pub category: Role,
    pub email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub first_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub last_name: String,
    /// bcrypt hash (or a legacy plaintext value). Never serialized back out.
    #[serde(default, skip_serializing, deserialize_with = "null_as_default")]
    pub password: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub permissions: bool,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub is_online: Option<bool>,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub last_active_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub last_login_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub schema_version: Option<i64>,
    /// Role-specific contact/payment attributes and anything unrecognised.
    #[serde(flatten)]
    pub extra: Document,
}

impl UserRecord {
    /// Build from a stored document. The store key is authoritative for `id`.
    pub fn from_document(id: &str, mut doc: Document) -> CoreErrorResult<Self> {
        doc.insert(fields::ID.to_string(), Value::String(id.to_string()));
        Ok(serde_json::from_value(Value::Object(doc))?)
    }

    /// Documents written before `isActive` existed are reported inactive.
    pub fn active(&self) -> bool {
        self.is_active.unwrap_or(false)
    }

    pub fn phone(&self) -> Option<&str> {
        self.extra.get(fields::PHONE).and_then(Value::as_str)
    }

    pub fn to_identity(&self) -> Identity {
        Identity::new(self.id.clone(), self.email.clone(), self.category)
    }
}

/// Explicit `null` reads like an absent key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
