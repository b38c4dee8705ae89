//! Route definitions for the `/tasks` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::task;
use crate::state::AppState;

/// Routes mounted at `/tasks`.
///
/// ```text
/// GET    /{id}                                            -> get_by_id
/// DELETE /{id}                                            -> delete
/// POST   /{id}/start                                      -> start
/// POST   /{id}/complete                                   -> complete
/// POST   /{id}/extension-requests                         -> request_extension
/// POST   /{id}/extension-requests/{request_id}/approve    -> approve_extension
/// POST   /{id}/extension-requests/{request_id}/reject     -> reject_extension
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{id}", get(task::get_by_id).delete(task::delete))
        .route("/{id}/start", post(task::start))
        .route("/{id}/complete", post(task::complete))
        .route("/{id}/extension-requests", post(task::request_extension))
        .route(
            "/{id}/extension-requests/{request_id}/approve",
            post(task::approve_extension),
        )
        .route(
            "/{id}/extension-requests/{request_id}/reject",
            post(task::reject_extension),
        )
}
