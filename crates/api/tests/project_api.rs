//! Project administration, community interactions, and contribution
//! requests over HTTP.

mod common;

use axum::http::StatusCode;
use common::{delete, expect_data, expect_error, get, post, post_json, put_json};
use serde_json::json;

#[tokio::test]
async fn creating_a_project_requires_a_session() {
    let (app, _) = common::build_test_app();
    let response = post_json(&app, "/api/v1/projects", json!({ "name": "Hive" })).await;
    assert_eq!(
        expect_error(response, StatusCode::UNAUTHORIZED).await,
        "UNAUTHENTICATED"
    );
}

#[tokio::test]
async fn create_and_fetch_project() {
    let (app, _) = common::build_test_app();
    let leader = common::register(&app, "lead@example.com", "Lead").await;

    let project = common::create_project(&app, "Hive", &[]).await;
    assert_eq!(project["leaderId"], leader.as_str());
    assert_eq!(project["status"], "planning");
    assert_eq!(project["progress"], 0);
    assert_eq!(project["isPublic"], true);
    assert_eq!(project["likes"]["count"], 0);

    let id = project["id"].as_str().unwrap();
    let fetched = expect_data(get(&app, &format!("/api/v1/projects/{id}")).await, StatusCode::OK).await;
    assert_eq!(fetched["name"], "Hive");

    let all = expect_data(get(&app, "/api/v1/projects").await, StatusCode::OK).await;
    assert_eq!(all.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn public_feed_hides_private_projects_and_filters() {
    let (app, _) = common::build_test_app();
    common::register(&app, "lead@example.com", "Lead").await;
    common::create_project(&app, "Open hive", &[]).await;
    let response = post_json(
        &app,
        "/api/v1/projects",
        json!({ "name": "Secret hive", "tags": ["rust"], "isPublic": false }),
    )
    .await;
    expect_data(response, StatusCode::CREATED).await;

    let feed = expect_data(get(&app, "/api/v1/projects/public").await, StatusCode::OK).await;
    assert_eq!(feed.as_array().unwrap().len(), 1);
    assert_eq!(feed[0]["name"], "Open hive");

    let hits = expect_data(get(&app, "/api/v1/projects/public?q=RUST").await, StatusCode::OK).await;
    assert_eq!(hits.as_array().unwrap().len(), 1);
    let misses =
        expect_data(get(&app, "/api/v1/projects/public?q=cobol").await, StatusCode::OK).await;
    assert!(misses.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn only_the_leader_administers_a_project() {
    let (app, _) = common::build_test_app();
    common::register(&app, "lead@example.com", "Lead").await;
    let dev = common::register(&app, "dev@example.com", "Dev").await;
    common::login(&app, "lead@example.com").await;
    let project = common::create_project(&app, "Hive", &[&dev]).await;
    let id = project["id"].as_str().unwrap().to_string();

    common::login(&app, "dev@example.com").await;
    let denied = put_json(&app, &format!("/api/v1/projects/{id}"), json!({ "name": "Mine" })).await;
    assert_eq!(expect_error(denied, StatusCode::FORBIDDEN).await, "FORBIDDEN");
    let denied = delete(&app, &format!("/api/v1/projects/{id}")).await;
    assert_eq!(denied.status(), StatusCode::FORBIDDEN);

    common::login(&app, "lead@example.com").await;
    let updated = expect_data(
        put_json(
            &app,
            &format!("/api/v1/projects/{id}"),
            json!({ "description": "Renewed" }),
        )
        .await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(updated["description"], "Renewed");

    let completed = expect_data(
        put_json(
            &app,
            &format!("/api/v1/projects/{id}/status"),
            json!({ "status": "completed" }),
        )
        .await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(completed["status"], "completed");
    assert!(completed["completedDate"].is_string());

    let again = put_json(
        &app,
        &format!("/api/v1/projects/{id}/status"),
        json!({ "status": "completed" }),
    )
    .await;
    assert_eq!(expect_error(again, StatusCode::CONFLICT).await, "INVALID_STATE");

    let removed = expect_data(
        delete(&app, &format!("/api/v1/projects/{id}/members/{dev}")).await,
        StatusCode::OK,
    )
    .await;
    assert!(removed["teamMembers"].as_array().unwrap().is_empty());

    assert_eq!(
        delete(&app, &format!("/api/v1/projects/{id}")).await.status(),
        StatusCode::NO_CONTENT
    );
    assert_eq!(
        get(&app, &format!("/api/v1/projects/{id}")).await.status(),
        StatusCode::NOT_FOUND
    );
}

#[tokio::test]
async fn likes_and_comments() {
    let (app, _) = common::build_test_app();
    common::register(&app, "lead@example.com", "Lead").await;
    let project = common::create_project(&app, "Hive", &[]).await;
    let id = project["id"].as_str().unwrap().to_string();
    common::register(&app, "fan@example.com", "Fan").await;

    let liked = expect_data(post(&app, &format!("/api/v1/projects/{id}/likes")).await, StatusCode::OK).await;
    assert_eq!(liked["liked"], true);
    assert_eq!(liked["project"]["likes"]["count"], 1);

    // Setting the current value is a no-op.
    let same = expect_data(
        put_json(&app, &format!("/api/v1/projects/{id}/likes"), json!({ "liked": true })).await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(same["likes"]["count"], 1);

    let unliked = expect_data(post(&app, &format!("/api/v1/projects/{id}/likes")).await, StatusCode::OK).await;
    assert_eq!(unliked["liked"], false);
    assert_eq!(unliked["project"]["likes"]["count"], 0);

    let commented = expect_data(
        post_json(
            &app,
            &format!("/api/v1/projects/{id}/comments"),
            json!({ "content": "  Love this  " }),
        )
        .await,
        StatusCode::CREATED,
    )
    .await;
    assert_eq!(commented["comments"][0]["content"], "Love this");

    let blank = post_json(
        &app,
        &format!("/api/v1/projects/{id}/comments"),
        json!({ "content": "   " }),
    )
    .await;
    assert_eq!(
        expect_error(blank, StatusCode::BAD_REQUEST).await,
        "VALIDATION_ERROR"
    );
}

#[tokio::test]
async fn contribution_request_flow() {
    let (app, _) = common::build_test_app();
    common::register(&app, "lead@example.com", "Lead").await;
    let project = common::create_project(&app, "Hive", &[]).await;
    let id = project["id"].as_str().unwrap().to_string();

    let dev = common::register(&app, "dev@example.com", "Dev").await;
    let requested = expect_data(
        post_json(
            &app,
            &format!("/api/v1/projects/{id}/contribution-requests"),
            json!({ "message": "I can help" }),
        )
        .await,
        StatusCode::CREATED,
    )
    .await;
    let request = &requested["contributionRequests"][0];
    assert_eq!(request["status"], "pending");
    assert_eq!(request["userId"], dev.as_str());
    let request_id = request["id"].as_str().unwrap().to_string();

    let duplicate = post_json(
        &app,
        &format!("/api/v1/projects/{id}/contribution-requests"),
        json!({ "message": "Please?" }),
    )
    .await;
    assert_eq!(
        expect_error(duplicate, StatusCode::CONFLICT).await,
        "INVALID_STATE"
    );

    let approve_uri = format!("/api/v1/projects/{id}/contribution-requests/{request_id}/approve");
    assert_eq!(
        expect_error(post(&app, &approve_uri).await, StatusCode::FORBIDDEN).await,
        "FORBIDDEN"
    );

    common::login(&app, "lead@example.com").await;
    let approved = expect_data(post(&app, &approve_uri).await, StatusCode::OK).await;
    assert_eq!(approved["contributionRequests"][0]["status"], "approved");
    assert_eq!(approved["teamMembers"][0]["userId"], dev.as_str());
    assert_eq!(approved["teamMembers"][0]["role"], "Contributor");

    let reject_uri = format!("/api/v1/projects/{id}/contribution-requests/{request_id}/reject");
    assert_eq!(
        expect_error(post(&app, &reject_uri).await, StatusCode::CONFLICT).await,
        "INVALID_STATE"
    );

    let unknown = post(
        &app,
        &format!("/api/v1/projects/{id}/contribution-requests/nope/approve"),
    )
    .await;
    assert_eq!(unknown.status(), StatusCode::NOT_FOUND);

    let split = expect_data(
        get(&app, &format!("/api/v1/users/{dev}/projects")).await,
        StatusCode::OK,
    )
    .await;
    assert!(split["leading"].as_array().unwrap().is_empty());
    assert_eq!(split["collaborating"][0]["id"], id.as_str());
}
