//! HiveMind domain service.
//!
//! [`DomainService`] runs every project, task, and request operation as a
//! read-modify-write over a [`DataStore`]: it takes the entity locks, loads
//! the entities, applies the pure transitions from
//! [`hivemind_core::lifecycle`], and writes the results back. The acting user
//! is always an explicit argument; resolving it from the session is the
//! caller's job (see [`SessionManager`]).

pub mod accounts;
pub mod error;
pub mod locks;
pub mod password;
pub mod projects;
pub mod queries;
pub mod session;
pub mod tasks;

use std::sync::Arc;

use hivemind_core::error::CoreError;
use hivemind_core::models::{Project, Task, User};
use hivemind_db::repositories::{ProjectRepo, TaskRepo, UserRepo};
use hivemind_db::{Collection, DataStore};

pub use error::{ServiceError, ServiceResult};
pub use locks::{entity_key, EntityGuard, EntityLocks};
pub use session::SessionManager;

/// Orchestrates domain operations over a shared store.
///
/// Cheap to clone; clones share the store and the lock table.
#[derive(Clone)]
pub struct DomainService {
    store: Arc<dyn DataStore>,
    locks: Arc<EntityLocks>,
}

impl DomainService {
    pub fn new(store: Arc<dyn DataStore>) -> Self {
        Self {
            store,
            locks: Arc::new(EntityLocks::new()),
        }
    }

    pub fn store(&self) -> &dyn DataStore {
        self.store.as_ref()
    }

    /// A session manager over the same store.
    pub fn sessions(&self) -> SessionManager {
        SessionManager::new(Arc::clone(&self.store))
    }

    async fn lock<I>(&self, keys: I) -> EntityGuard
    where
        I: IntoIterator<Item = (Collection, String)>,
    {
        self.locks
            .acquire(keys.into_iter().map(|(c, id)| entity_key(c, &id)))
            .await
    }

    async fn load_user(&self, id: &str) -> ServiceResult<User> {
        UserRepo::find_by_id(self.store(), id)
            .await?
            .ok_or_else(|| CoreError::not_found("User", id).into())
    }

    async fn load_project(&self, id: &str) -> ServiceResult<Project> {
        ProjectRepo::find_by_id(self.store(), id)
            .await?
            .ok_or_else(|| CoreError::not_found("Project", id).into())
    }

    async fn load_task(&self, id: &str) -> ServiceResult<Task> {
        TaskRepo::find_by_id(self.store(), id)
            .await?
            .ok_or_else(|| CoreError::not_found("Task", id).into())
    }
}
