//! Repository for the `session` singleton.

use hivemind_core::models::Session;

use super::{decode, encode};
use crate::{Collection, DataStore, StoreResult};

/// Reads and writes the single signed-in session record.
pub struct SessionRepo;

impl SessionRepo {
    pub async fn get(store: &dyn DataStore) -> StoreResult<Option<Session>> {
        match store.get_singleton(Collection::Session).await? {
            Some(document) => decode(Collection::Session, document).map(Some),
            None => Ok(None),
        }
    }

    /// Replace the session record.
    pub async fn set(store: &dyn DataStore, session: &Session) -> StoreResult<()> {
        store
            .set_singleton(Collection::Session, encode(session)?)
            .await
    }

    pub async fn clear(store: &dyn DataStore) -> StoreResult<()> {
        store.clear_singleton(Collection::Session).await
    }
}
