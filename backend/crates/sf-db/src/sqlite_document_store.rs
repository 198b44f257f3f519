//! SQLite-backed document store.
//!
//! Each document is one row of the `documents` table with its JSON body as
//! text. Equality queries decode the collection and filter in process, so
//! field semantics match [`crate::MemoryDocumentStore`] exactly (JSON
//! booleans, nulls and numbers compare as JSON values).

use crate::document_store::{matches_all, merge_into};
use crate::{DbError, DocumentStore, Result as DbErrorResult, StoredDocument};

use sf_core::Document;

use std::panic::Location;
use std::path::Path;

use async_trait::async_trait;
use error_location::ErrorLocation;
use log::{debug, info};
use serde_json::Value;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub struct SqliteDocumentStore {
    pool: SqlitePool,
}

impl SqliteDocumentStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open (creating if needed) the database file and run migrations.
    pub async fn connect(path: &Path) -> DbErrorResult<Self> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| DbError::Initialization {
                    message: format!("Failed to create database directory: {e}"),
                    location: ErrorLocation::from(Location::caller()),
                })?;
        }

        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        Self::migrate(&pool).await?;
        info!("Document store opened at {}", path.display());

        Ok(Self::new(pool))
    }

    /// Single-connection in-memory database, migrated.
    pub async fn in_memory() -> DbErrorResult<Self> {
        let options = SqliteConnectOptions::new()
            .filename(":memory:")
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;

        Self::migrate(&pool).await?;

        Ok(Self::new(pool))
    }

    async fn migrate(pool: &SqlitePool) -> DbErrorResult<()> {
        sqlx::migrate!("./migrations").run(pool).await?;
        Ok(())
    }

    fn decode(collection: &str, id: &str, body: &str) -> DbErrorResult<Document> {
        match serde_json::from_str::<Value>(body) {
            Ok(Value::Object(document)) => Ok(document),
            Ok(_) => Err(DbError::corrupt(collection, id, "body is not a JSON object")),
            Err(e) => Err(DbError::corrupt(collection, id, e.to_string())),
        }
    }

    fn encode(collection: &str, id: &str, document: &Document) -> DbErrorResult<String> {
        serde_json::to_string(document).map_err(|e| DbError::corrupt(collection, id, e.to_string()))
    }
}

#[async_trait]
impl DocumentStore for SqliteDocumentStore {
    async fn get(&self, collection: &str, id: &str) -> DbErrorResult<Option<Document>> {
        let body: Option<String> =
            sqlx::query_scalar("SELECT body FROM documents WHERE collection = ? AND id = ?")
                .bind(collection)
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        body.map(|body| Self::decode(collection, id, &body))
            .transpose()
    }

    async fn query_eq(
        &self,
        collection: &str,
        conditions: &[(&str, Value)],
    ) -> DbErrorResult<Vec<StoredDocument>> {
        let documents = self.list(collection).await?;
        Ok(documents
            .into_iter()
            .filter(|doc| matches_all(&doc.data, conditions))
            .collect())
    }

    async fn set(&self, collection: &str, id: &str, document: Document) -> DbErrorResult<()> {
        let body = Self::encode(collection, id, &document)?;

        sqlx::query(
            r#"
                INSERT INTO documents (collection, id, body) VALUES (?, ?, ?)
                ON CONFLICT (collection, id) DO UPDATE SET body = excluded.body
            "#,
        )
        .bind(collection)
        .bind(id)
        .bind(body)
        .execute(&self.pool)
        .await?;

        debug!("set {collection}/{id}");
        Ok(())
    }

    async fn update(
        &self,
        collection: &str,
        id: &str,
        patch: Document,
    ) -> DbErrorResult<Document> {
        let mut tx = self.pool.begin().await?;

        let body: Option<String> =
            sqlx::query_scalar("SELECT body FROM documents WHERE collection = ? AND id = ?")
                .bind(collection)
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;

        let Some(body) = body else {
            return Err(DbError::not_found(collection, id));
        };

        let mut document = Self::decode(collection, id, &body)?;
        merge_into(&mut document, patch);
        let body = Self::encode(collection, id, &document)?;

        sqlx::query("UPDATE documents SET body = ? WHERE collection = ? AND id = ?")
            .bind(body)
            .bind(collection)
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        debug!("updated {collection}/{id}");
        Ok(document)
    }

    async fn delete(&self, collection: &str, id: &str) -> DbErrorResult<()> {
        sqlx::query("DELETE FROM documents WHERE collection = ? AND id = ?")
            .bind(collection)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn list(&self, collection: &str) -> DbErrorResult<Vec<StoredDocument>> {
        let rows: Vec<(String, String)> =
            sqlx::query_as("SELECT id, body FROM documents WHERE collection = ? ORDER BY id")
                .bind(collection)
                .fetch_all(&self.pool)
                .await?;

        rows.into_iter()
            .map(|(id, body)| {
                let data = Self::decode(collection, &id, &body)?;
                Ok(StoredDocument { id, data })
            })
            .collect()
    }
}
