//! HTTP-level tests for the setup wizard validation endpoints.
//!
//! These exercise the full router (middleware stack included) with
//! payloads whose validation outcome never touches the database, so
//! they run without a live Postgres instance.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, post_json};
use serde_json::json;

// ── POST /api/v1/competitions/setup/validate-step ────────────────────

#[tokio::test]
async fn out_of_range_step_number_is_a_bad_request() {
    let app = build_test_app();
    let response = post_json(
        app,
        "/api/v1/competitions/setup/validate-step",
        json!({ "step": 0, "data": {} }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn step_seven_is_also_rejected() {
    let app = build_test_app();
    let response = post_json(
        app,
        "/api/v1/competitions/setup/validate-step",
        json!({ "step": 7, "data": {} }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn missing_confirmation_is_reported_under_its_own_field() {
    let app = build_test_app();
    let response = post_json(
        app,
        "/api/v1/competitions/setup/validate-step",
        json!({
            "step": 6,
            "data": {
                "deploy_mode": "production",
                "terms_accepted": false,
                "data_reviewed": true,
                "ready_to_deploy": true,
            },
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let result = &body["data"];
    assert_eq!(result["valid"], false);

    let errors = result["errors"].as_object().expect("errors is an object");
    assert_eq!(errors.len(), 1);
    assert!(errors.contains_key("terms_accepted"));
}

#[tokio::test]
async fn overlapping_phases_are_reported_under_chronology() {
    let app = build_test_app();
    let response = post_json(
        app,
        "/api/v1/competitions/setup/validate-step",
        json!({
            "step": 2,
            "data": {
                "phases": {
                    "qualification": {
                        "enabled": true,
                        "name": "Phase A",
                        "start_date": "2025-06-01",
                        "end_date": "2025-06-20",
                    },
                    "final": {
                        "enabled": true,
                        "name": "Phase B",
                        "start_date": "2025-06-10",
                        "end_date": "2025-06-30",
                    },
                },
            },
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["valid"], false);

    let messages = body["data"]["errors"]["phases_chronology"]
        .as_array()
        .expect("chronology errors present");
    assert_eq!(messages.len(), 1);
    let message = messages[0].as_str().unwrap();
    assert!(message.contains("Phase A"));
    assert!(message.contains("Phase B"));
}

#[tokio::test]
async fn too_many_categories_are_rejected() {
    let categories: Vec<_> = (0..21)
        .map(|i| json!({ "name": format!("Category {i}"), "category_code": format!("C{i}") }))
        .collect();

    let app = build_test_app();
    let response = post_json(
        app,
        "/api/v1/competitions/setup/validate-step",
        json!({ "step": 3, "data": { "categories": categories } }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["valid"], false);

    let messages = body["data"]["errors"]["categories"]
        .as_array()
        .expect("categories errors present");
    assert!(messages[0].as_str().unwrap().contains("20"));
}

#[tokio::test]
async fn omitted_step_data_defaults_to_empty_and_fails_required_checks() {
    let app = build_test_app();
    let response = post_json(
        app,
        "/api/v1/competitions/setup/validate-step",
        json!({ "step": 2 }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["valid"], false);
    assert!(body["data"]["errors"]["phases"].is_array());
}

#[tokio::test]
async fn step_with_only_optional_fields_passes_when_empty() {
    let app = build_test_app();
    let response = post_json(
        app,
        "/api/v1/competitions/setup/validate-step",
        json!({ "step": 4, "data": {} }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["valid"], true);
    assert_eq!(body["data"]["errors"], json!({}));
}

// ── POST /api/v1/competitions/setup/validate ─────────────────────────

#[tokio::test]
async fn full_validation_prefixes_step_errors_and_keeps_cross_errors_flat() {
    let categories: Vec<_> = (0..6)
        .map(|i| json!({ "name": format!("Category {i}"), "category_code": format!("C{i}") }))
        .collect();

    let app = build_test_app();
    let response = post_json(
        app,
        "/api/v1/competitions/setup/validate",
        json!({
            "step_1": { "type": "pilot" },
            "step_3": { "categories": categories },
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["valid"], false);

    let errors = body["data"]["errors"].as_object().unwrap();
    // Per-step violations are scoped to their step key.
    assert!(errors.contains_key("step_1.name"));
    assert!(errors.contains_key("step_6.terms_accepted"));
    // Cross-step violations stay flat.
    let cross = errors["cross_validation"].as_array().unwrap();
    assert!(cross[0].as_str().unwrap().contains("5"));
}

#[tokio::test]
async fn full_validation_accepts_an_empty_submission_as_invalid_not_error() {
    let app = build_test_app();
    let response = post_json(app, "/api/v1/competitions/setup/validate", json!({})).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["valid"], false);
    assert!(body["data"]["errors"].as_object().unwrap().len() > 1);
}

// ── POST /api/v1/competitions ────────────────────────────────────────

#[tokio::test]
async fn creating_from_an_invalid_submission_returns_422_with_the_error_map() {
    let app = build_test_app();
    let response = post_json(
        app,
        "/api/v1/competitions",
        json!({
            "step_1": { "type": "pilot" },
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert_eq!(body["code"], "VALIDATION_FAILED");
    assert!(body["errors"].as_object().unwrap().contains_key("step_1.name"));
}
