use sf_db::SqliteDocumentStore;

use std::sync::Arc;

/// In-memory SQLite document store with migrations run
pub async fn create_test_store() -> Arc<SqliteDocumentStore> {
    Arc::new(
        SqliteDocumentStore::in_memory()
            .await
            .expect("Failed to create test store"),
    )
}
