//! Process-local store. Contents are lost when the process exits.

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::Collections;
use crate::{Collection, DataStore, Document, StoreResult};

/// In-memory [`DataStore`] behind a `tokio` read-write lock.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Collections>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DataStore for MemoryStore {
    fn backend_tag(&self) -> &'static str {
        "memory"
    }

    async fn list_all(&self, collection: Collection) -> StoreResult<Vec<Document>> {
        self.inner.read().await.list(collection)
    }

    async fn get_by_id(&self, collection: Collection, id: &str) -> StoreResult<Option<Document>> {
        self.inner.read().await.get(collection, id)
    }

    async fn upsert(&self, collection: Collection, document: Document) -> StoreResult<Document> {
        self.inner.write().await.upsert(collection, document)
    }

    async fn delete(&self, collection: Collection, id: &str) -> StoreResult<bool> {
        self.inner.write().await.delete(collection, id)
    }

    async fn get_singleton(&self, collection: Collection) -> StoreResult<Option<Document>> {
        self.inner.read().await.singleton(collection)
    }

    async fn set_singleton(&self, collection: Collection, document: Document) -> StoreResult<()> {
        self.inner.write().await.set_singleton(collection, document)
    }

    async fn clear_singleton(&self, collection: Collection) -> StoreResult<()> {
        self.inner.write().await.clear_singleton(collection)
    }
}
