//! Repository for the `users` collection.

use hivemind_core::models::User;

use super::{find_as, list_as, save_as};
use crate::{Collection, DataStore, StoreResult};

/// Provides typed access to user documents.
pub struct UserRepo;

impl UserRepo {
    /// All users in insertion order.
    pub async fn list(store: &dyn DataStore) -> StoreResult<Vec<User>> {
        list_as(store, Collection::Users).await
    }

    pub async fn find_by_id(store: &dyn DataStore, id: &str) -> StoreResult<Option<User>> {
        find_as(store, Collection::Users, id).await
    }

    /// Case-insensitive lookup by email address.
    pub async fn find_by_email(store: &dyn DataStore, email: &str) -> StoreResult<Option<User>> {
        let email = email.trim();
        Ok(Self::list(store)
            .await?
            .into_iter()
            .find(|u| u.email.eq_ignore_ascii_case(email)))
    }

    /// Insert or replace a user, returning the stored document.
    pub async fn save(store: &dyn DataStore, user: &User) -> StoreResult<User> {
        save_as(store, Collection::Users, user).await
    }

    pub async fn is_empty(store: &dyn DataStore) -> StoreResult<bool> {
        Ok(store.list_all(Collection::Users).await?.is_empty())
    }
}
