//! Session-based authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use hivemind_core::error::CoreError;
use hivemind_core::models::User;

use crate::error::AppError;
use crate::state::AppState;

/// The user the store's session points at.
///
/// Handlers that act on behalf of a user take this extractor and pass
/// `user.id` to the service explicitly:
///
/// ```ignore
/// async fn start(CurrentUser(user): CurrentUser, ...) -> AppResult<...> {
///     state.service.start_task(&id, &user.id).await?;
/// }
/// ```
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = state.sessions.current_user().await?.ok_or_else(|| {
            AppError::Core(CoreError::Unauthenticated("Not signed in".into()))
        })?;
        Ok(CurrentUser(user))
    }
}
