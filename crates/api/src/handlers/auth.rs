//! Handlers for registration, login, and the current session.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use hivemind_core::models::UserProfile;
use hivemind_service::accounts::RegisterUser;
use serde::Deserialize;

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::middleware::auth::CurrentUser;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// POST /api/v1/auth/register
pub async fn register(
    State(state): State<AppState>,
    AppJson(input): AppJson<RegisterUser>,
) -> AppResult<(StatusCode, Json<DataResponse<UserProfile>>)> {
    let user = state.service.register(input).await?;
    Ok((
        StatusCode::CREATED,
        Json(DataResponse { data: user.into() }),
    ))
}

/// POST /api/v1/auth/login
pub async fn login(
    State(state): State<AppState>,
    AppJson(input): AppJson<LoginRequest>,
) -> AppResult<Json<DataResponse<UserProfile>>> {
    let user = state.service.login(&input.email, &input.password).await?;
    Ok(Json(DataResponse { data: user.into() }))
}

/// POST /api/v1/auth/logout
///
/// Succeeds when nobody is signed in.
pub async fn logout(State(state): State<AppState>) -> AppResult<StatusCode> {
    state.service.logout().await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/auth/me
pub async fn me(CurrentUser(user): CurrentUser) -> Json<DataResponse<UserProfile>> {
    Json(DataResponse { data: user.into() })
}
