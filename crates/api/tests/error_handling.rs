//! `AppError` to HTTP response mapping.

use assert_matches::assert_matches;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use serde_json::Value;

use hivemind_api::error::AppError;
use hivemind_core::error::CoreError;
use hivemind_db::StoreError;
use hivemind_service::ServiceError;

async fn render(err: AppError) -> (StatusCode, Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn core_errors_map_to_status_codes() {
    let cases = [
        (CoreError::not_found("Project", "p1"), StatusCode::NOT_FOUND, "NOT_FOUND"),
        (CoreError::Validation("bad".into()), StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
        (CoreError::InvalidState("done".into()), StatusCode::CONFLICT, "INVALID_STATE"),
        (CoreError::Conflict("dup".into()), StatusCode::CONFLICT, "CONFLICT"),
        (CoreError::Unauthorized("leader".into()), StatusCode::FORBIDDEN, "FORBIDDEN"),
        (
            CoreError::Unauthenticated("who".into()),
            StatusCode::UNAUTHORIZED,
            "UNAUTHENTICATED",
        ),
    ];
    for (err, status, code) in cases {
        let (actual, body) = render(AppError::Core(err)).await;
        assert_eq!(actual, status);
        assert_eq!(body["code"], code);
        assert!(body["error"].is_string());
    }
}

#[tokio::test]
async fn not_found_message_names_the_entity() {
    let (_, body) = render(CoreError::not_found("Task", "t9").into()).await;
    assert_eq!(body["error"], "Task with id t9 not found");
}

#[tokio::test]
async fn internal_errors_are_sanitized() {
    let (status, body) = render(CoreError::Internal("argon2 exploded".into()).into()).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "An internal error occurred");
    assert_eq!(body["code"], "INTERNAL_ERROR");
}

#[tokio::test]
async fn store_errors_hide_details() {
    let (status, body) =
        render(StoreError::MalformedDocument("users/u1: missing email".into()).into()).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "An internal error occurred");

    let (status, body) = render(
        StoreError::UnexpectedStatus {
            status: 503,
            url: "http://localhost:3001/users".into(),
        }
        .into(),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["code"], "STORE_UNAVAILABLE");
    assert!(!body["error"].as_str().unwrap().contains("localhost"));
}

#[tokio::test]
async fn bad_request_passes_message_through() {
    let (status, body) = render(AppError::BadRequest("missing field".into())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "missing field");
}

#[test]
fn service_errors_unwrap_into_app_errors() {
    let core: AppError = ServiceError::Core(CoreError::Conflict("dup".into())).into();
    assert_matches!(core, AppError::Core(CoreError::Conflict(_)));

    let store: AppError = ServiceError::Store(StoreError::Config("bad".into())).into();
    assert_matches!(store, AppError::Store(StoreError::Config(_)));
}
