use crate::document_store::{matches_all, merge_into};
use crate::{DbError, DocumentStore, Result as DbErrorResult, StoredDocument};

use sf_core::Document;

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

type Collection = BTreeMap<String, Document>;

/// In-process document store for tests and embedding.
#[derive(Default)]
pub struct MemoryDocumentStore {
    collections: RwLock<HashMap<String, Collection>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn get(&self, collection: &str, id: &str) -> DbErrorResult<Option<Document>> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .and_then(|docs| docs.get(id))
            .cloned())
    }

    async fn query_eq(
        &self,
        collection: &str,
        conditions: &[(&str, Value)],
    ) -> DbErrorResult<Vec<StoredDocument>> {
        let collections = self.collections.read().await;
        let Some(docs) = collections.get(collection) else {
            return Ok(Vec::new());
        };

        Ok(docs
            .iter()
            .filter(|(_, data)| matches_all(data, conditions))
            .map(|(id, data)| StoredDocument {
                id: id.clone(),
                data: data.clone(),
            })
            .collect())
    }

    async fn set(&self, collection: &str, id: &str, document: Document) -> DbErrorResult<()> {
        let mut collections = self.collections.write().await;
        collections
            .entry(collection.to_string())
            .or_default()
            .insert(id.to_string(), document);
        Ok(())
    }

    async fn update(
        &self,
        collection: &str,
        id: &str,
        patch: Document,
    ) -> DbErrorResult<Document> {
        // Write lock held across read-merge-write keeps the update atomic per document.
        let mut collections = self.collections.write().await;
        let document = collections
            .get_mut(collection)
            .and_then(|docs| docs.get_mut(id))
            .ok_or_else(|| DbError::not_found(collection, id))?;

        merge_into(document, patch);
        Ok(document.clone())
    }

    async fn delete(&self, collection: &str, id: &str) -> DbErrorResult<()> {
        let mut collections = self.collections.write().await;
        if let Some(docs) = collections.get_mut(collection) {
            docs.remove(id);
        }
        Ok(())
    }

    async fn list(&self, collection: &str) -> DbErrorResult<Vec<StoredDocument>> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .map(|(id, data)| StoredDocument {
                        id: id.clone(),
                        data: data.clone(),
                    })
                    .collect()
            })
            .unwrap_or_default())
    }
}
