//! The single "current user" pointer.

use std::sync::Arc;

use chrono::Utc;
use hivemind_core::error::CoreError;
use hivemind_core::models::{Session, User};
use hivemind_db::repositories::{SessionRepo, UserRepo};
use hivemind_db::{DataStore, StoreError};

use crate::error::ServiceResult;

/// Signs users in and out of the store's one session slot.
#[derive(Clone)]
pub struct SessionManager {
    store: Arc<dyn DataStore>,
}

impl SessionManager {
    pub fn new(store: Arc<dyn DataStore>) -> Self {
        Self { store }
    }

    /// Point the session at `user_id`, replacing any previous sign-in.
    pub async fn sign_in(&self, user_id: &str) -> ServiceResult<User> {
        let user = UserRepo::find_by_id(self.store.as_ref(), user_id)
            .await?
            .ok_or_else(|| CoreError::not_found("User", user_id))?;
        let session = Session {
            user_id: user.id.clone(),
            signed_in_at: Some(Utc::now()),
        };
        SessionRepo::set(self.store.as_ref(), &session).await?;
        tracing::info!(user_id = %user.id, "Signed in");
        Ok(user)
    }

    /// The signed-in user, or `None` when signed out.
    ///
    /// A session pointing at a user that no longer exists, or a session
    /// record that cannot be read, reads as signed out.
    pub async fn current_user(&self) -> ServiceResult<Option<User>> {
        let session = match SessionRepo::get(self.store.as_ref()).await {
            Ok(Some(session)) => session,
            Ok(None) => return Ok(None),
            Err(StoreError::MalformedDocument(reason)) => {
                tracing::warn!(%reason, "Unreadable session record, treating as signed out");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };
        let user = UserRepo::find_by_id(self.store.as_ref(), &session.user_id).await?;
        if user.is_none() {
            tracing::warn!(user_id = %session.user_id, "Session points at a missing user");
        }
        Ok(user)
    }

    /// Clear the session. Signing out twice is harmless.
    pub async fn sign_out(&self) -> ServiceResult<()> {
        SessionRepo::clear(self.store.as_ref()).await?;
        tracing::info!("Signed out");
        Ok(())
    }
}
