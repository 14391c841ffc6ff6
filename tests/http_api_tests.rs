#![cfg(feature = "http_api")]

use axum::{
    body::{self, Body},
    http::{Request, StatusCode},
};
use chrono::NaiveDate;
use course_planner::{ClassDay, CourseConfig, HourType, http_api};
use serde_json::json;
use tower::util::ServiceExt;

fn new_router() -> axum::Router {
    let state = http_api::AppState::new(CourseConfig::default());
    http_api::router(state)
}

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn scenario_config() -> CourseConfig {
    CourseConfig {
        course_name: "Curso HTTP".to_string(),
        start_date: Some(d(2026, 1, 5)),
        class_days: vec![ClassDay::Monday, ClassDay::Wednesday],
        total_hours: 4.0,
        hour_type: HourType::Chronological,
        hours_per_session: 2.0,
        ..CourseConfig::default()
    }
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_endpoint_responds() {
    let app = new_router();
    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["status"], json!("ok"));
}

#[tokio::test]
async fn config_update_then_schedule_generation() {
    let app = new_router();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri("/config")
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_vec(&scenario_config()).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/config")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["course_name"], json!("Curso HTTP"));
    assert_eq!(body["hour_type"], json!("chronological"));

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/schedule")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;

    let sessions = body["sessions"].as_array().unwrap();
    assert_eq!(sessions.len(), 2);
    assert_eq!(sessions[0]["date"], json!("2026-01-05"));
    assert_eq!(sessions[1]["date"], json!("2026-01-07"));
    assert_eq!(body["target_reached"], json!(true));
    assert_eq!(body["summary"]["total_sessions"], json!(2));
    assert_eq!(body["summary"]["end_date"], json!("2026-01-07"));
}

#[tokio::test]
async fn invalid_config_is_rejected() {
    let app = new_router();
    let mut config = scenario_config();
    config.hours_per_session = -1.0;

    let response = app
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri("/config")
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_vec(&config).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["error"], json!("invalid_request"));
}

#[tokio::test]
async fn empty_config_yields_empty_schedule() {
    // The default config has no start date: "not enough info yet".
    let app = new_router();
    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/schedule")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["sessions"].as_array().unwrap().len(), 0);
    assert_eq!(body["summary"], json!(null));
}

#[tokio::test]
async fn holiday_lookup_endpoints() {
    let app = new_router();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/holidays")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body.as_array().unwrap().len(), 16);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/holidays/2026-01-01")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["name"], json!("Año Nuevo"));

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/holidays/2026-01-02")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = json_body(response).await;
    assert_eq!(body["error"], json!("not_found"));
}
