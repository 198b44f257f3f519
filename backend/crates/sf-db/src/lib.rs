pub mod document_store;
pub mod error;
pub mod memory_document_store;
pub mod sqlite_document_store;
pub mod user_repository;

pub use document_store::{DocumentStore, StoredDocument};
pub use error::{DbError, Result};
pub use memory_document_store::MemoryDocumentStore;
pub use sqlite_document_store::SqliteDocumentStore;
pub use user_repository::{ReconcileOutcome, USERS_COLLECTION, UserRepository, UserSchemaReport};

#[cfg(test)]
mod tests;
