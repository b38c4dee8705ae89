pub mod auth;
pub mod health;
pub mod project;
pub mod task;
pub mod user;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                                   create account, sign in (public)
/// /auth/login                                      sign in (public)
/// /auth/logout                                     sign out (public)
/// /auth/me                                         current user
///
/// /users                                           list
/// /users/me                                        update own profile (PUT)
/// /users/{id}                                      get
/// /users/{id}/projects                             led and collaborating
/// /users/{id}/tasks                                assigned tasks
/// /users/{id}/dashboard                            summary counts
///
/// /projects                                        list, create
/// /projects/public                                 community feed (?q=)
/// /projects/{id}                                   get, update, delete
/// /projects/{id}/status                            set status (PUT)
/// /projects/{id}/members/{user_id}                 remove member (DELETE)
/// /projects/{id}/likes                             toggle (POST), set (PUT)
/// /projects/{id}/comments                          add comment (POST)
/// /projects/{id}/contribution-requests             request to join (POST)
/// /projects/{id}/contribution-requests/{rid}/...   approve, reject (POST)
/// /projects/{id}/tasks                             list, create
///
/// /tasks/{id}                                      get, delete
/// /tasks/{id}/start                                start (POST)
/// /tasks/{id}/complete                             complete (POST)
/// /tasks/{id}/extension-requests                   request extension (POST)
/// /tasks/{id}/extension-requests/{rid}/...         approve, reject (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/users", user::router())
        .nest("/projects", project::router())
        .nest("/tasks", task::router())
}
