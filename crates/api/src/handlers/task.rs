//! Handlers for the `/tasks` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use hivemind_core::models::{Project, Task, UserProfile};
use hivemind_core::types::{Date, EntityId};
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::middleware::auth::CurrentUser;
use crate::response::DataResponse;
use crate::state::AppState;

type TaskResponse = AppResult<Json<DataResponse<Task>>>;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtensionRequestBody {
    pub new_deadline: Date,
    #[serde(default)]
    pub reason: String,
}

/// Everything a completion changed: the task, the credited assignee, and
/// the project with its new progress.
#[derive(Debug, Serialize)]
pub struct CompletionResponse {
    pub task: Task,
    pub user: UserProfile,
    pub project: Project,
}

/// GET /api/v1/tasks/{id}
pub async fn get_by_id(State(state): State<AppState>, Path(id): Path<EntityId>) -> TaskResponse {
    let task = state.service.get_task(&id).await?;
    Ok(Json(DataResponse { data: task }))
}

/// DELETE /api/v1/tasks/{id}
pub async fn delete(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<EntityId>,
) -> AppResult<StatusCode> {
    state.service.delete_task(&id, &user.id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/tasks/{id}/start
pub async fn start(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<EntityId>,
) -> TaskResponse {
    let task = state.service.start_task(&id, &user.id).await?;
    Ok(Json(DataResponse { data: task }))
}

/// POST /api/v1/tasks/{id}/complete
pub async fn complete(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<EntityId>,
) -> AppResult<Json<DataResponse<CompletionResponse>>> {
    let done = state.service.complete_task(&id, &user.id).await?;
    Ok(Json(DataResponse {
        data: CompletionResponse {
            task: done.task,
            user: done.user.into(),
            project: done.project,
        },
    }))
}

/// POST /api/v1/tasks/{id}/extension-requests
pub async fn request_extension(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<EntityId>,
    AppJson(input): AppJson<ExtensionRequestBody>,
) -> AppResult<(StatusCode, Json<DataResponse<Task>>)> {
    let task = state
        .service
        .request_extension(&id, &user.id, input.new_deadline, &input.reason)
        .await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: task })))
}

/// POST /api/v1/tasks/{id}/extension-requests/{request_id}/approve
pub async fn approve_extension(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path((id, request_id)): Path<(EntityId, EntityId)>,
) -> TaskResponse {
    let task = state
        .service
        .approve_extension(&id, &request_id, &user.id)
        .await?;
    Ok(Json(DataResponse { data: task }))
}

/// POST /api/v1/tasks/{id}/extension-requests/{request_id}/reject
pub async fn reject_extension(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path((id, request_id)): Path<(EntityId, EntityId)>,
) -> TaskResponse {
    let task = state
        .service
        .reject_extension(&id, &request_id, &user.id)
        .await?;
    Ok(Json(DataResponse { data: task }))
}
