//! Typed access to the store's collections.
//!
//! Each repository is a zero-sized struct whose associated functions take the
//! store as their first argument, converting between raw documents and
//! `hivemind-core` entities.

mod project_repo;
mod session_repo;
mod task_repo;
mod user_repo;

pub use project_repo::ProjectRepo;
pub use session_repo::SessionRepo;
pub use task_repo::TaskRepo;
pub use user_repo::UserRepo;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::{document_id, Collection, DataStore, Document, StoreError, StoreResult};

fn decode<T: DeserializeOwned>(collection: Collection, document: Document) -> StoreResult<T> {
    let id = document_id(&document).ok().flatten().unwrap_or_default();
    serde_json::from_value(document).map_err(|e| {
        StoreError::MalformedDocument(format!("{collection} document '{id}': {e}"))
    })
}

fn encode<T: Serialize>(entity: &T) -> StoreResult<Document> {
    Ok(serde_json::to_value(entity)?)
}

/// Decode every document in `collection`. Documents that do not match the
/// entity shape are skipped with a warning so one bad record cannot hide
/// the rest of the collection.
async fn list_as<T: DeserializeOwned>(
    store: &dyn DataStore,
    collection: Collection,
) -> StoreResult<Vec<T>> {
    let documents = store.list_all(collection).await?;
    let mut out = Vec::with_capacity(documents.len());
    for document in documents {
        match decode(collection, document) {
            Ok(entity) => out.push(entity),
            Err(e) => tracing::warn!(error = %e, "Skipping unreadable document"),
        }
    }
    Ok(out)
}

async fn find_as<T: DeserializeOwned>(
    store: &dyn DataStore,
    collection: Collection,
    id: &str,
) -> StoreResult<Option<T>> {
    match store.get_by_id(collection, id).await? {
        Some(document) => decode(collection, document).map(Some),
        None => Ok(None),
    }
}

async fn save_as<T: Serialize + DeserializeOwned>(
    store: &dyn DataStore,
    collection: Collection,
    entity: &T,
) -> StoreResult<T> {
    let stored = store.upsert(collection, encode(entity)?).await?;
    decode(collection, stored)
}
