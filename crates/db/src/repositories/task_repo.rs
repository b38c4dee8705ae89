//! Repository for the `tasks` collection.

use hivemind_core::models::Task;

use super::{find_as, list_as, save_as};
use crate::{Collection, DataStore, StoreResult};

/// Provides typed access to task documents.
pub struct TaskRepo;

impl TaskRepo {
    pub async fn list(store: &dyn DataStore) -> StoreResult<Vec<Task>> {
        list_as(store, Collection::Tasks).await
    }

    pub async fn find_by_id(store: &dyn DataStore, id: &str) -> StoreResult<Option<Task>> {
        find_as(store, Collection::Tasks, id).await
    }

    pub async fn list_by_project(store: &dyn DataStore, project_id: &str) -> StoreResult<Vec<Task>> {
        Ok(Self::list(store)
            .await?
            .into_iter()
            .filter(|t| t.project_id == project_id)
            .collect())
    }

    pub async fn list_by_assignee(store: &dyn DataStore, user_id: &str) -> StoreResult<Vec<Task>> {
        Ok(Self::list(store)
            .await?
            .into_iter()
            .filter(|t| t.assigned_to == user_id)
            .collect())
    }

    pub async fn save(store: &dyn DataStore, task: &Task) -> StoreResult<Task> {
        save_as(store, Collection::Tasks, task).await
    }

    pub async fn delete(store: &dyn DataStore, id: &str) -> StoreResult<bool> {
        store.delete(Collection::Tasks, id).await
    }
}
