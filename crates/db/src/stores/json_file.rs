//! Single-file JSON store.
//!
//! The whole store is one JSON object keyed by `hivemind_users`,
//! `hivemind_projects`, `hivemind_tasks`, and `hivemind_current_user`. It is
//! loaded once on open and rewritten after every mutation by writing a
//! sibling temp file and renaming it over the original, so readers never see
//! a half-written file.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::Collections;
use crate::{Collection, DataStore, Document, StoreResult};

/// [`DataStore`] persisted to a local JSON file.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    inner: Mutex<Collections>,
}

impl JsonFileStore {
    /// Open the store at `path`. A missing file is an empty store; the file
    /// and its parent directory are created on the first write.
    pub async fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();
        let collections = match tokio::fs::read(&path).await {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => Collections::default(),
            Ok(bytes) => serde_json::from_slice(&bytes)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "Data file missing, starting empty");
                Collections::default()
            }
            Err(e) => return Err(e.into()),
        };
        tracing::debug!(path = %path.display(), "Opened JSON file store");
        Ok(Self {
            path,
            inner: Mutex::new(collections),
        })
    }

    async fn persist(&self, collections: &Collections) -> StoreResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        let bytes = serde_json::to_vec_pretty(collections)?;
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);
        tokio::fs::write(&tmp, bytes).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl DataStore for JsonFileStore {
    fn backend_tag(&self) -> &'static str {
        "file"
    }

    async fn list_all(&self, collection: Collection) -> StoreResult<Vec<Document>> {
        self.inner.lock().await.list(collection)
    }

    async fn get_by_id(&self, collection: Collection, id: &str) -> StoreResult<Option<Document>> {
        self.inner.lock().await.get(collection, id)
    }

    async fn upsert(&self, collection: Collection, document: Document) -> StoreResult<Document> {
        let mut guard = self.inner.lock().await;
        let mut next = guard.clone();
        let stored = next.upsert(collection, document)?;
        self.persist(&next).await?;
        *guard = next;
        Ok(stored)
    }

    async fn delete(&self, collection: Collection, id: &str) -> StoreResult<bool> {
        let mut guard = self.inner.lock().await;
        let mut next = guard.clone();
        if !next.delete(collection, id)? {
            return Ok(false);
        }
        self.persist(&next).await?;
        *guard = next;
        Ok(true)
    }

    async fn get_singleton(&self, collection: Collection) -> StoreResult<Option<Document>> {
        self.inner.lock().await.singleton(collection)
    }

    async fn set_singleton(&self, collection: Collection, document: Document) -> StoreResult<()> {
        let mut guard = self.inner.lock().await;
        let mut next = guard.clone();
        next.set_singleton(collection, document)?;
        self.persist(&next).await?;
        *guard = next;
        Ok(())
    }

    async fn clear_singleton(&self, collection: Collection) -> StoreResult<()> {
        let mut guard = self.inner.lock().await;
        let mut next = guard.clone();
        next.clear_singleton(collection)?;
        self.persist(&next).await?;
        *guard = next;
        Ok(())
    }

    async fn health_check(&self) -> StoreResult<()> {
        match tokio::fs::metadata(&self.path).await {
            Ok(_) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
