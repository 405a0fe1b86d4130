//! Integration tests for call record endpoints.

mod common;

use axum::http::{Method, StatusCode};
use common::{empty_app, get_request, json_request, parse_response_body, seeded_app};
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn test_list_calls_for_campaign() {
    let (app, _) = seeded_app().await;

    let response = app
        .oneshot(get_request("/api/v1/calls?campaignId=renewals-q3"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = parse_response_body(response).await;
    assert_eq!(body["campaignId"], "renewals-q3");
    assert_eq!(body["total"], 3);
    let ids: Vec<&str> = body["records"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["call-2001", "call-2002", "call-2003"]);
}

#[tokio::test]
async fn test_list_calls_unknown_campaign_is_empty() {
    let (app, _) = seeded_app().await;

    let response = app
        .oneshot(get_request("/api/v1/calls?campaignId=nope"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_response_body(response).await;
    assert_eq!(body["total"], 0);
}

#[tokio::test]
async fn test_ingest_call_record() {
    let (app, stores) = seeded_app().await;
    let before = stores.call_records.count().await;

    let response = app
        .oneshot(json_request(
            Method::POST,
            "/api/v1/calls",
            json!({
                "campaignId": "spring-outreach",
                "id": "call-1006",
                "status": "in-progress",
                "duration": 42,
                "agent": "Mike Chen",
                "sentiment": "neutral",
                "overallScore": 77.5,
                "metrics": {"proper_greeting": {"score": 81, "explanation": "Polite"}},
                "startedAt": "2026-10-01T09:30:00Z"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = parse_response_body(response).await;
    assert_eq!(body["id"], "call-1006");
    assert_eq!(body["status"], "in-progress");
    assert_eq!(body["metrics"]["proper_greeting"]["score"], 81.0);

    assert_eq!(stores.call_records.count().await, before + 1);
    let records = stores.call_records.get_records(Some("spring-outreach")).await;
    assert_eq!(records.last().unwrap().id, "call-1006");
}

#[tokio::test]
async fn test_ingest_without_campaign_lands_in_all_bucket() {
    let (app, _) = empty_app().await;

    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/v1/calls",
            json!({"status": "completed", "duration": 30}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = parse_response_body(response).await;
    let generated_id = created["id"].as_str().unwrap().to_string();
    assert!(uuid::Uuid::parse_str(&generated_id).is_ok());

    let response = app
        .oneshot(get_request("/api/v1/calls?campaignId=all"))
        .await
        .unwrap();
    let body = parse_response_body(response).await;
    assert_eq!(body["total"], 1);
    assert_eq!(body["records"][0]["id"], generated_id.as_str());
}

#[tokio::test]
async fn test_ingest_score_out_of_range_rejected() {
    let (app, stores) = seeded_app().await;
    let before = stores.call_records.count().await;

    let response = app
        .oneshot(json_request(
            Method::POST,
            "/api/v1/calls",
            json!({"status": "completed", "duration": 10, "overallScore": 101}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = parse_response_body(response).await;
    assert_eq!(body["error"], "validation_error");
    assert!(body["message"].as_str().unwrap().contains("overall_score"));
    assert_eq!(stores.call_records.count().await, before);
}

#[tokio::test]
async fn test_ingest_metric_score_out_of_range_rejected() {
    let (app, _) = seeded_app().await;

    let response = app
        .oneshot(json_request(
            Method::POST,
            "/api/v1/calls",
            json!({
                "status": "completed",
                "duration": 10,
                "metrics": {"compliance": {"score": 140, "explanation": "?"}}
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = parse_response_body(response).await;
    assert!(body["message"].as_str().unwrap().contains("metrics"));
}

#[tokio::test]
async fn test_ingest_unknown_campaign_not_found() {
    let (app, _) = seeded_app().await;

    let response = app
        .oneshot(json_request(
            Method::POST,
            "/api/v1/calls",
            json!({"campaignId": "ghost", "status": "failed", "duration": 0}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = parse_response_body(response).await;
    assert_eq!(body["error"], "not_found");
}

#[tokio::test]
async fn test_ingest_duplicate_record_conflicts() {
    let (app, _) = seeded_app().await;

    let response = app
        .oneshot(json_request(
            Method::POST,
            "/api/v1/calls",
            json!({"campaignId": "winback", "id": "call-1001", "status": "completed", "duration": 5}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body = parse_response_body(response).await;
    assert_eq!(body["error"], "conflict");
}
