//! Handlers for the `/projects` resource and its nested requests.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use hivemind_core::models::project::{CreateProject, UpdateProject};
use hivemind_core::models::task::CreateTask;
use hivemind_core::models::{Project, Task};
use hivemind_core::status::ProjectStatus;
use hivemind_core::types::EntityId;
use hivemind_service::projects::LikeOutcome;
use serde::Deserialize;

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::middleware::auth::CurrentUser;
use crate::response::DataResponse;
use crate::state::AppState;

type ProjectResponse = AppResult<Json<DataResponse<Project>>>;

#[derive(Debug, Deserialize)]
pub struct PublicQuery {
    pub q: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SetStatusRequest {
    pub status: ProjectStatus,
}

#[derive(Debug, Deserialize)]
pub struct SetLikeRequest {
    pub liked: bool,
}

#[derive(Debug, Deserialize)]
pub struct CommentRequest {
    pub content: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct ContributionRequestBody {
    #[serde(default)]
    pub message: String,
}

/// POST /api/v1/projects
pub async fn create(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    AppJson(input): AppJson<CreateProject>,
) -> AppResult<(StatusCode, Json<DataResponse<Project>>)> {
    let project = state.service.create_project(&user.id, input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: project })))
}

/// GET /api/v1/projects
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Project>>>> {
    let projects = state.service.list_projects().await?;
    Ok(Json(DataResponse { data: projects }))
}

/// GET /api/v1/projects/public?q=
pub async fn list_public(
    State(state): State<AppState>,
    Query(params): Query<PublicQuery>,
) -> AppResult<Json<DataResponse<Vec<Project>>>> {
    let projects = state.service.public_projects(params.q.as_deref()).await?;
    Ok(Json(DataResponse { data: projects }))
}

/// GET /api/v1/projects/{id}
pub async fn get_by_id(State(state): State<AppState>, Path(id): Path<EntityId>) -> ProjectResponse {
    let project = state.service.get_project(&id).await?;
    Ok(Json(DataResponse { data: project }))
}

/// PUT /api/v1/projects/{id}
pub async fn update(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<EntityId>,
    AppJson(input): AppJson<UpdateProject>,
) -> ProjectResponse {
    let project = state.service.update_project(&id, &user.id, input).await?;
    Ok(Json(DataResponse { data: project }))
}

/// DELETE /api/v1/projects/{id}
pub async fn delete(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<EntityId>,
) -> AppResult<StatusCode> {
    state.service.delete_project(&id, &user.id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/v1/projects/{id}/status
pub async fn set_status(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<EntityId>,
    AppJson(input): AppJson<SetStatusRequest>,
) -> ProjectResponse {
    let project = state
        .service
        .set_project_status(&id, &user.id, input.status)
        .await?;
    Ok(Json(DataResponse { data: project }))
}

/// DELETE /api/v1/projects/{id}/members/{user_id}
pub async fn remove_member(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path((id, member_id)): Path<(EntityId, EntityId)>,
) -> ProjectResponse {
    let project = state
        .service
        .remove_team_member(&id, &user.id, &member_id)
        .await?;
    Ok(Json(DataResponse { data: project }))
}

/// POST /api/v1/projects/{id}/likes
pub async fn toggle_like(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<EntityId>,
) -> AppResult<Json<DataResponse<LikeOutcome>>> {
    let outcome = state.service.toggle_like(&id, &user.id).await?;
    Ok(Json(DataResponse { data: outcome }))
}

/// PUT /api/v1/projects/{id}/likes
pub async fn set_like(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<EntityId>,
    AppJson(input): AppJson<SetLikeRequest>,
) -> ProjectResponse {
    let project = state.service.set_like(&id, &user.id, input.liked).await?;
    Ok(Json(DataResponse { data: project }))
}

/// POST /api/v1/projects/{id}/comments
pub async fn add_comment(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<EntityId>,
    AppJson(input): AppJson<CommentRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<Project>>)> {
    let project = state
        .service
        .add_comment(&id, &user.id, &input.content)
        .await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: project })))
}

/// POST /api/v1/projects/{id}/contribution-requests
pub async fn request_contribution(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<EntityId>,
    AppJson(input): AppJson<ContributionRequestBody>,
) -> AppResult<(StatusCode, Json<DataResponse<Project>>)> {
    let project = state
        .service
        .request_contribution(&id, &user.id, &input.message)
        .await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: project })))
}

/// POST /api/v1/projects/{id}/contribution-requests/{request_id}/approve
pub async fn approve_contribution(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path((id, request_id)): Path<(EntityId, EntityId)>,
) -> ProjectResponse {
    let project = state
        .service
        .approve_contribution(&id, &request_id, &user.id)
        .await?;
    Ok(Json(DataResponse { data: project }))
}

/// POST /api/v1/projects/{id}/contribution-requests/{request_id}/reject
pub async fn reject_contribution(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path((id, request_id)): Path<(EntityId, EntityId)>,
) -> ProjectResponse {
    let project = state
        .service
        .reject_contribution(&id, &request_id, &user.id)
        .await?;
    Ok(Json(DataResponse { data: project }))
}

/// GET /api/v1/projects/{id}/tasks
pub async fn list_tasks(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<Json<DataResponse<Vec<Task>>>> {
    let tasks = state.service.tasks_for_project(&id).await?;
    Ok(Json(DataResponse { data: tasks }))
}

/// POST /api/v1/projects/{id}/tasks
pub async fn create_task(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<EntityId>,
    AppJson(input): AppJson<CreateTask>,
) -> AppResult<(StatusCode, Json<DataResponse<Task>>)> {
    let task = state.service.create_task(&id, &user.id, input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: task })))
}
