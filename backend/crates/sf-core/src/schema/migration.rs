//! Versioned migration table for user documents.
//!
//! Each entry declares the keys a document must carry once it has reached
//! that version and a filler that supplies defaults for any of them (and for
//! a few companion attributes) that are absent. Fillers only ever write
//! missing keys, so running the whole table over an up-to-date document is a
//! no-op.

use crate::document::fields::*;
use crate::document::{Document, fill_if_missing, str_field};
use crate::{AttributeSet, Role};
use crate::schema::timestamp::timestamp_value;

use chrono::{DateTime, Utc};
use serde_json::Value;

/// Version stamped on every reconciled or newly created user document.
pub const CURRENT_SCHEMA_VERSION: i64 = 1;

/// Inputs available to default fillers.
#[derive(Debug, Clone, Copy)]
pub struct MigrationContext {
    pub now: DateTime<Utc>,
}

pub struct SchemaMigration {
    pub version: i64,
    pub required_keys: &'static [&'static str],
    pub fill_defaults: fn(&mut Document, &MigrationContext),
}

impl SchemaMigration {
    /// Required keys of this version that `doc` lacks entirely.
    pub fn missing_keys(&self, doc: &Document) -> Vec<&'static str> {
        self.required_keys
            .iter()
            .copied()
            .filter(|key| !doc.contains_key(*key))
            .collect()
    }
}

pub static MIGRATIONS: &[SchemaMigration] = &[SchemaMigration {
    version: 1,
    required_keys: &[IS_ACTIVE, IS_ONLINE, LAST_ACTIVE_AT, LAST_LOGIN_AT, SCHEMA_VERSION],
    fill_defaults: fill_v1,
}];

fn fill_v1(doc: &mut Document, ctx: &MigrationContext) {
    fill_if_missing(doc, IS_ACTIVE, Value::Bool(true));
    fill_if_missing(doc, IS_ONLINE, Value::Bool(false));
    fill_if_missing(doc, PERMISSIONS, Value::Bool(false));
    if takes_phone(doc) {
        fill_if_missing(doc, PHONE, Value::String(String::new()));
    }
    fill_if_missing(doc, CREATED_AT, timestamp_value(ctx.now));
    for key in [LAST_ACTIVE_AT, LAST_LOGIN_AT] {
        doc.entry(key.to_string()).or_insert(Value::Null);
    }
}

/// Roles without contact details (test accounts) never get a `phone`.
fn takes_phone(doc: &Document) -> bool {
    str_field(doc, CATEGORY)
        .and_then(|category| category.parse::<Role>().ok())
        .is_none_or(|role| AttributeSet::for_role(role).allows(PHONE))
}

/// Version recorded on the document; absent or malformed counts as 0.
pub fn stored_version(doc: &Document) -> i64 {
    doc.get(SCHEMA_VERSION)
        .and_then(Value::as_i64)
        .unwrap_or(0)
}

/// Walk the table up to the current version, then stamp it.
///
/// Fillers of versions at or below the stored one still run: a stamped
/// document can lack keys after a hand edit or a partial write.
pub fn migrate(doc: &mut Document, ctx: &MigrationContext) {
    for migration in MIGRATIONS
        .iter()
        .filter(|m| m.version <= CURRENT_SCHEMA_VERSION)
    {
        (migration.fill_defaults)(doc, ctx);
    }
    doc.insert(
        SCHEMA_VERSION.to_string(),
        Value::from(CURRENT_SCHEMA_VERSION),
    );
}
