//! Repository for the `projects` collection.

use hivemind_core::models::Project;

use super::{find_as, list_as, save_as};
use crate::{Collection, DataStore, StoreResult};

/// Provides typed access to project documents.
pub struct ProjectRepo;

impl ProjectRepo {
    pub async fn list(store: &dyn DataStore) -> StoreResult<Vec<Project>> {
        list_as(store, Collection::Projects).await
    }

    pub async fn find_by_id(store: &dyn DataStore, id: &str) -> StoreResult<Option<Project>> {
        find_as(store, Collection::Projects, id).await
    }

    /// Projects visible in the community feed.
    pub async fn list_public(store: &dyn DataStore) -> StoreResult<Vec<Project>> {
        Ok(Self::list(store)
            .await?
            .into_iter()
            .filter(|p| p.is_public)
            .collect())
    }

    /// Projects the user leads or is a team member of.
    pub async fn list_for_user(store: &dyn DataStore, user_id: &str) -> StoreResult<Vec<Project>> {
        Ok(Self::list(store)
            .await?
            .into_iter()
            .filter(|p| p.is_team_member(user_id))
            .collect())
    }

    pub async fn save(store: &dyn DataStore, project: &Project) -> StoreResult<Project> {
        save_as(store, Collection::Projects, project).await
    }

    /// Delete a project by id. Returns `true` if it existed.
    pub async fn delete(store: &dyn DataStore, id: &str) -> StoreResult<bool> {
        store.delete(Collection::Projects, id).await
    }
}
