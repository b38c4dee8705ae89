#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use hivemind_api::config::ServerConfig;
use hivemind_api::router::build_app_router;
use hivemind_api::state::AppState;
use hivemind_db::MemoryStore;
use hivemind_service::DomainService;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        seed_demo_data: false,
    }
}

/// Build the full application router over a fresh in-memory store.
///
/// The returned service shares the router's store, for setup and
/// assertions that bypass HTTP.
pub fn build_test_app() -> (Router, DomainService) {
    let service = DomainService::new(Arc::new(MemoryStore::new()));
    let config = test_config();
    let state = AppState::new(service.clone(), config.clone());
    let app = build_app_router(state, &config).unwrap();
    (app, service)
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.clone().oneshot(request).await.unwrap()
}

/// POST a body that is sent as-is, valid JSON or not.
pub async fn post_raw(app: &Router, uri: &str, body: &str) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_owned()))
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None).await
}

pub async fn post(app: &Router, uri: &str) -> Response {
    send(app, Method::POST, uri, None).await
}

pub async fn post_json(app: &Router, uri: &str, body: Value) -> Response {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: &Router, uri: &str, body: Value) -> Response {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: &Router, uri: &str) -> Response {
    send(app, Method::DELETE, uri, None).await
}

pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Assert the status and return the `data` field of the envelope.
pub async fn expect_data(response: Response, status: StatusCode) -> Value {
    assert_eq!(response.status(), status);
    let mut json = body_json(response).await;
    json["data"].take()
}

/// Assert an error response and return its `code`.
pub async fn expect_error(response: Response, status: StatusCode) -> String {
    assert_eq!(response.status(), status);
    let json = body_json(response).await;
    assert!(json["error"].is_string(), "missing error message: {json}");
    json["code"].as_str().unwrap().to_string()
}

/// Register an account (which signs it in) and return its id.
pub async fn register(app: &Router, email: &str, name: &str) -> String {
    let response = post_json(
        app,
        "/api/v1/auth/register",
        json!({ "email": email, "password": "hunter22", "name": name }),
    )
    .await;
    let user = expect_data(response, StatusCode::CREATED).await;
    user["id"].as_str().unwrap().to_string()
}

/// Sign an existing test account in.
pub async fn login(app: &Router, email: &str) {
    let response = post_json(
        app,
        "/api/v1/auth/login",
        json!({ "email": email, "password": "hunter22" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}

/// Create a project as the signed-in user with the given members.
pub async fn create_project(app: &Router, name: &str, members: &[&str]) -> Value {
    let team: Vec<Value> = members
        .iter()
        .map(|id| json!({ "userId": id, "role": "Developer" }))
        .collect();
    let response = post_json(
        app,
        "/api/v1/projects",
        json!({
            "name": name,
            "description": "Built in the open",
            "tags": ["rust", "web"],
            "teamMembers": team,
        }),
    )
    .await;
    expect_data(response, StatusCode::CREATED).await
}
