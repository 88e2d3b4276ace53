//! Router tests that need no database
//!
//! The pool points at an unreachable address, so any request that gets past
//! validation ends in `service_unavailable`. A 400 therefore also proves the
//! store was never touched.

mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

use common::{app, send, send_raw, unreachable_pool};

#[tokio::test]
async fn root_serves_welcome_text() {
    let app = app(unreachable_pool());
    let (status, body) = send(&app, Method::GET, "/", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.as_str().unwrap().contains("Fitness Tracker"));
}

#[tokio::test]
async fn health_is_ok_without_database() {
    let app = app(unreachable_pool());
    let (status, body) = send(&app, Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn create_member_reports_every_missing_field() {
    let app = app(unreachable_pool());
    let (status, body) = send(&app, Method::POST, "/members", Some(&json!({"name": "Alice"}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_error");
    let fields = body["fields"].as_object().unwrap();
    assert_eq!(fields.len(), 3);
    for field in ["email", "phone", "membership_type"] {
        assert_eq!(fields[field][0], "Missing data for required field.");
    }
}

#[tokio::test]
async fn update_member_validates_before_store() {
    let app = app(unreachable_pool());
    let body = json!({"name": 1, "email": "a@x.com", "phone": "555", "membership_type": "gold"});
    let (status, body) = send(&app, Method::PUT, "/members/3", Some(&body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["fields"]["name"][0], "Not a valid string.");
}

#[tokio::test]
async fn create_workout_rejects_bad_member_id() {
    let app = app(unreachable_pool());
    let body = json!({"date": "2024-05-01", "member_id": "abc", "workout_type": "legs"});
    let (status, body) = send(&app, Method::POST, "/dank_sesh", Some(&body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["fields"]["member_id"][0], "Not a valid integer.");
}

#[tokio::test]
async fn update_workout_rejects_unknown_fields() {
    let app = app(unreachable_pool());
    let body = json!({
        "date": "2024-05-01",
        "member_id": 1,
        "workout_type": "legs",
        "reps": 10
    });
    let (status, body) = send(&app, Method::PUT, "/workouts/1", Some(&body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["fields"]["reps"][0], "Unknown field.");
}

#[tokio::test]
async fn malformed_json_is_a_validation_error() {
    let app = app(unreachable_pool());
    let (status, body) = send_raw(&app, Method::POST, "/members", Some("{not json")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["fields"]["_schema"][0], "Invalid JSON body.");
}

#[tokio::test]
async fn non_object_body_is_rejected() {
    let app = app(unreachable_pool());
    let (status, body) = send(&app, Method::POST, "/dank_sesh", Some(&json!([1, 2]))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["fields"]["_schema"][0], "Invalid input type.");
}

#[tokio::test]
async fn non_integer_path_id_is_rejected() {
    let app = app(unreachable_pool());
    let (status, body) = send(&app, Method::DELETE, "/members/abc", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["fields"]["id"][0], "Not a valid integer.");
}

#[tokio::test]
async fn list_without_database_is_service_unavailable() {
    let app = app(unreachable_pool());

    for uri in ["/members", "/dank_sesh"] {
        let (status, body) = send(&app, Method::GET, uri, None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{uri}");
        assert_eq!(body["error"], "service_unavailable", "{uri}");
    }
}

#[tokio::test]
async fn valid_create_without_database_is_service_unavailable() {
    let app = app(unreachable_pool());
    let member = json!({"name": "Alice", "email": "a@x.com", "phone": "555", "membership_type": "gold"});
    let (status, body) = send(&app, Method::POST, "/members", Some(&member)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "service_unavailable");
}

#[tokio::test]
async fn delete_without_database_is_service_unavailable() {
    let app = app(unreachable_pool());
    let (status, body) = send(&app, Method::DELETE, "/members/1", None).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "service_unavailable");
}
