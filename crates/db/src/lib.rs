//! HiveMind persistence layer.
//!
//! Everything above this crate talks to storage through the [`DataStore`]
//! trait: a small document-store contract over three keyed collections
//! (`users`, `projects`, `tasks`) and one singleton (`session`). Four
//! adapters implement it, and the typed repositories in [`repositories`]
//! convert documents to and from `hivemind-core` entities.

pub mod config;
pub mod error;
pub mod repositories;
pub mod stores;

use async_trait::async_trait;
use hivemind_core::types::{new_id, EntityId};

pub use config::{open_store, StoreConfig, StoreKind};
pub use error::{StoreError, StoreResult};
pub use stores::http::HttpStore;
pub use stores::json_file::JsonFileStore;
pub use stores::memory::MemoryStore;
pub use stores::postgres::{create_pool, health_check, run_migrations, DbPool, PgStore};

/// A stored JSON object. Keyed documents carry their id in the `id` field.
pub type Document = serde_json::Value;

/// The collections known to every store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Users,
    Projects,
    Tasks,
    /// Singleton holding the signed-in user pointer.
    Session,
}

impl Collection {
    /// Collections addressed by document id.
    pub const KEYED: [Collection; 3] = [Collection::Users, Collection::Projects, Collection::Tasks];

    pub fn name(self) -> &'static str {
        match self {
            Collection::Users => "users",
            Collection::Projects => "projects",
            Collection::Tasks => "tasks",
            Collection::Session => "session",
        }
    }

    pub fn is_singleton(self) -> bool {
        self == Collection::Session
    }

    /// Fail unless this is a keyed collection.
    pub fn ensure_keyed(self) -> StoreResult<()> {
        if self.is_singleton() {
            return Err(StoreError::WrongCollectionKind {
                collection: self.name(),
                expected: "keyed",
            });
        }
        Ok(())
    }

    /// Fail unless this is the singleton collection.
    pub fn ensure_singleton(self) -> StoreResult<()> {
        if !self.is_singleton() {
            return Err(StoreError::WrongCollectionKind {
                collection: self.name(),
                expected: "singleton",
            });
        }
        Ok(())
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Read/write contract shared by all storage adapters.
///
/// Keyed operations on [`Collection::Session`], and singleton operations on
/// any other collection, fail with [`StoreError::WrongCollectionKind`].
#[async_trait]
pub trait DataStore: Send + Sync + 'static {
    /// Short adapter name used in logs and the health endpoint.
    fn backend_tag(&self) -> &'static str;

    /// Every document in the collection, in insertion order.
    async fn list_all(&self, collection: Collection) -> StoreResult<Vec<Document>>;

    async fn get_by_id(&self, collection: Collection, id: &str) -> StoreResult<Option<Document>>;

    /// Insert or replace a document by id, assigning a fresh id when the
    /// document has none. Returns the stored document.
    async fn upsert(&self, collection: Collection, document: Document) -> StoreResult<Document>;

    /// Remove a document. Returns `false` if no document had that id.
    async fn delete(&self, collection: Collection, id: &str) -> StoreResult<bool>;

    async fn get_singleton(&self, collection: Collection) -> StoreResult<Option<Document>>;

    async fn set_singleton(&self, collection: Collection, document: Document) -> StoreResult<()>;

    async fn clear_singleton(&self, collection: Collection) -> StoreResult<()>;

    /// Check that the backing storage is reachable.
    async fn health_check(&self) -> StoreResult<()> {
        Ok(())
    }
}

/// The `id` field of a document, if present and a string.
pub fn document_id(document: &Document) -> StoreResult<Option<EntityId>> {
    let object = document
        .as_object()
        .ok_or_else(|| StoreError::MalformedDocument("document is not a JSON object".into()))?;
    match object.get("id") {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::String(id)) if !id.is_empty() => Ok(Some(id.clone())),
        Some(other) => Err(StoreError::MalformedDocument(format!(
            "document id must be a non-empty string, got {other}"
        ))),
    }
}

/// Return the document's id, writing a freshly generated one if it has none.
pub fn ensure_document_id(document: &mut Document) -> StoreResult<EntityId> {
    if let Some(id) = document_id(document)? {
        return Ok(id);
    }
    let id = new_id();
    if let Some(object) = document.as_object_mut() {
        object.insert("id".into(), serde_json::Value::String(id.clone()));
    }
    Ok(id)
}
