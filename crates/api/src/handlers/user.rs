//! Handlers for the `/users` resource.

use axum::extract::{Path, State};
use axum::Json;
use hivemind_core::models::user::UpdateProfile;
use hivemind_core::models::{Task, UserProfile};
use hivemind_core::search::UserProjects;
use hivemind_core::types::EntityId;
use hivemind_service::queries::Dashboard;

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::middleware::auth::CurrentUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/users
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<UserProfile>>>> {
    let users = state.service.list_users().await?;
    Ok(Json(DataResponse { data: users }))
}

/// GET /api/v1/users/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<Json<DataResponse<UserProfile>>> {
    let user = state.service.get_user(&id).await?;
    Ok(Json(DataResponse { data: user }))
}

/// PUT /api/v1/users/me
pub async fn update_me(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    AppJson(input): AppJson<UpdateProfile>,
) -> AppResult<Json<DataResponse<UserProfile>>> {
    let user = state.service.update_profile(&user.id, input).await?;
    Ok(Json(DataResponse { data: user.into() }))
}

/// GET /api/v1/users/{id}/projects
pub async fn projects(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<Json<DataResponse<UserProjects>>> {
    let projects = state.service.projects_for_user(&id).await?;
    Ok(Json(DataResponse { data: projects }))
}

/// GET /api/v1/users/{id}/tasks
pub async fn tasks(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<Json<DataResponse<Vec<Task>>>> {
    let tasks = state.service.tasks_for_user(&id).await?;
    Ok(Json(DataResponse { data: tasks }))
}

/// GET /api/v1/users/{id}/dashboard
pub async fn dashboard(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<Json<DataResponse<Dashboard>>> {
    let dashboard = state.service.dashboard(&id).await?;
    Ok(Json(DataResponse { data: dashboard }))
}
