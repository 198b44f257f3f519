//! Port over the hosted key/value document database.
//!
//! Documents are JSON objects addressed by `(collection, id)`. Every
//! component above this layer talks to the store only through
//! [`DocumentStore`]; [`crate::MemoryDocumentStore`] and
//! [`crate::SqliteDocumentStore`] are the two environments.

use crate::Result as DbErrorResult;

use sf_core::Document;

use async_trait::async_trait;
use serde_json::Value;

/// A document together with the key it is stored under.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredDocument {
    pub id: String,
    pub data: Document,
}

#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn get(&self, collection: &str, id: &str) -> DbErrorResult<Option<Document>>;

    /// Documents whose fields equal every `(field, value)` pair.
    async fn query_eq(
        &self,
        collection: &str,
        conditions: &[(&str, Value)],
    ) -> DbErrorResult<Vec<StoredDocument>>;

    /// Create or replace.
    async fn set(&self, collection: &str, id: &str, document: Document) -> DbErrorResult<()>;

    /// Shallow merge of `patch` into an existing document. Missing document is `NotFound`.
    async fn update(&self, collection: &str, id: &str, patch: Document)
    -> DbErrorResult<Document>;

    /// Deleting an absent document is not an error.
    async fn delete(&self, collection: &str, id: &str) -> DbErrorResult<()>;

    /// All documents in the collection, ordered by id.
    async fn list(&self, collection: &str) -> DbErrorResult<Vec<StoredDocument>>;
}

pub(crate) fn matches_all(document: &Document, conditions: &[(&str, Value)]) -> bool {
    conditions
        .iter()
        .all(|(field, value)| document.get(*field) == Some(value))
}

pub(crate) fn merge_into(document: &mut Document, patch: Document) {
    for (key, value) in patch {
        document.insert(key, value);
    }
}
