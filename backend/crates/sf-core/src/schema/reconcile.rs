use crate::document::fields::*;
use crate::document::{Document, merge_non_null, str_field};
use crate::schema::migration::{MIGRATIONS, MigrationContext, migrate, stored_version};
use crate::schema::timestamp::{normalize_timestamp, timestamp_value};

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

/// Defect that reconciliation cannot repair by itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemaGap {
    /// Non-customer document without a username. Needs operator input.
    MissingUsername,
}

/// Drift report for a single document.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaStatus {
    pub version: i64,
    pub missing_keys: Vec<&'static str>,
    pub missing_username: bool,
}

impl SchemaStatus {
    pub fn needs_update(&self) -> bool {
        self.missing_username || !self.missing_keys.is_empty()
    }
}

/// Inspect a document against the migration table.
///
/// Only key presence counts: a tracked key holding `null` is not drift.
pub fn inspect(doc: &Document) -> SchemaStatus {
    let mut missing_keys: Vec<&'static str> = Vec::new();
    for migration in MIGRATIONS {
        for key in migration.missing_keys(doc) {
            if !missing_keys.contains(&key) {
                missing_keys.push(key);
            }
        }
    }

    SchemaStatus {
        version: stored_version(doc),
        missing_keys,
        missing_username: lacks_required_username(doc),
    }
}

pub fn needs_update(doc: &Document) -> bool {
    inspect(doc).needs_update()
}

fn lacks_required_username(doc: &Document) -> bool {
    let is_customer = str_field(doc, CATEGORY) == Some("customer");
    !is_customer && str_field(doc, USERNAME).is_none()
}

/// Result of reconciling one document.
#[derive(Debug, Clone, PartialEq)]
pub struct Reconciliation {
    pub document: Document,
    /// False when the stored document was already current; nothing to write.
    pub changed: bool,
    pub gaps: Vec<SchemaGap>,
}

/// Bring `stored` up to the current schema, overlaying `patch`.
///
/// Patch entries win over stored ones, except `null` patch entries which
/// never erase a stored value. `updatedAt` is only bumped when something
/// else changed, which keeps the operation idempotent.
pub fn reconcile_document(
    id: &str,
    stored: &Document,
    patch: &Document,
    now: DateTime<Utc>,
) -> Reconciliation {
    let mut document = stored.clone();
    merge_non_null(&mut document, patch);

    migrate(&mut document, &MigrationContext { now });

    for key in TIMESTAMPS {
        if let Some(value) = document.get(key) {
            let normalized = normalize_timestamp(value);
            document.insert(key.to_string(), normalized);
        }
    }

    document.insert(ID.to_string(), Value::String(id.to_string()));
    document.insert(USER_ID.to_string(), Value::String(id.to_string()));

    let changed = document != *stored;
    if changed {
        document.insert(UPDATED_AT.to_string(), timestamp_value(now));
    }

    let gaps = if lacks_required_username(&document) {
        vec![SchemaGap::MissingUsername]
    } else {
        Vec::new()
    };

    Reconciliation {
        document,
        changed,
        gaps,
    }
}
