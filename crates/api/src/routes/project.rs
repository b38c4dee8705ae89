//! Route definitions for the `/projects` resource.
//!
//! Also nests contribution requests and project tasks under
//! `/projects/{id}/...`.

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::project;
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /                                                   -> list
/// POST   /                                                   -> create
/// GET    /public                                             -> list_public
/// GET    /{id}                                               -> get_by_id
/// PUT    /{id}                                               -> update
/// DELETE /{id}                                               -> delete
/// PUT    /{id}/status                                        -> set_status
/// DELETE /{id}/members/{user_id}                             -> remove_member
/// POST   /{id}/likes                                         -> toggle_like
/// PUT    /{id}/likes                                         -> set_like
/// POST   /{id}/comments                                      -> add_comment
/// POST   /{id}/contribution-requests                         -> request_contribution
/// POST   /{id}/contribution-requests/{request_id}/approve    -> approve_contribution
/// POST   /{id}/contribution-requests/{request_id}/reject     -> reject_contribution
/// GET    /{id}/tasks                                         -> list_tasks
/// POST   /{id}/tasks                                         -> create_task
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(project::list).post(project::create))
        .route("/public", get(project::list_public))
        .route(
            "/{id}",
            get(project::get_by_id)
                .put(project::update)
                .delete(project::delete),
        )
        .route("/{id}/status", put(project::set_status))
        .route("/{id}/members/{user_id}", delete(project::remove_member))
        .route(
            "/{id}/likes",
            post(project::toggle_like).put(project::set_like),
        )
        .route("/{id}/comments", post(project::add_comment))
        .route(
            "/{id}/contribution-requests",
            post(project::request_contribution),
        )
        .route(
            "/{id}/contribution-requests/{request_id}/approve",
            post(project::approve_contribution),
        )
        .route(
            "/{id}/contribution-requests/{request_id}/reject",
            post(project::reject_contribution),
        )
        .route(
            "/{id}/tasks",
            get(project::list_tasks).post(project::create_task),
        )
}
