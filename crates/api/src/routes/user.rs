//! Route definitions for the `/users` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::user;
use crate::state::AppState;

/// Routes mounted at `/users`.
///
/// ```text
/// GET    /                  -> list
/// PUT    /me                -> update_me
/// GET    /{id}              -> get_by_id
/// GET    /{id}/projects     -> projects
/// GET    /{id}/tasks        -> tasks
/// GET    /{id}/dashboard    -> dashboard
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(user::list))
        .route("/me", put(user::update_me))
        .route("/{id}", get(user::get_by_id))
        .route("/{id}/projects", get(user::projects))
        .route("/{id}/tasks", get(user::tasks))
        .route("/{id}/dashboard", get(user::dashboard))
}
