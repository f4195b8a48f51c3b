//! `POST /api/affirmation` against MockGenerator: status and body for every outcome.

use std::sync::Arc;

use affirm::{GenerateError, MockGenerator};
use serde_json::json;

use super::common;

#[tokio::test]
async fn e2e_valid_request_returns_generated_text() {
    let gen = Arc::new(MockGenerator::replying("You've got this, Alex."));
    let server = common::spawn_server(gen.clone()).await;

    let (status, body) = common::post_affirmation(
        &server,
        json!({"name": "Alex", "feeling": "anxious about an exam", "details": null}),
    )
    .await;

    assert_eq!(status, 200);
    assert_eq!(body, json!({"affirmation": "You've got this, Alex."}));
    assert_eq!(gen.calls(), 1);
    server.stop().await;
}

#[tokio::test]
async fn e2e_blank_fields_are_400_without_upstream_call() {
    let gen = Arc::new(MockGenerator::replying("unused"));
    let server = common::spawn_server(gen.clone()).await;

    for payload in [
        json!({"name": "   ", "feeling": "sad"}),
        json!({"name": "Alex", "feeling": "\n\t"}),
        json!({"name": "", "feeling": ""}),
        json!({"feeling": "sad"}),
    ] {
        let (status, body) = common::post_affirmation(&server, payload).await;
        assert_eq!(status, 400);
        assert_eq!(body["detail"], serve::DETAIL_REQUIRED);
    }
    assert_eq!(gen.calls(), 0);
    server.stop().await;
}

#[tokio::test]
async fn e2e_over_long_feeling_is_422() {
    let gen = Arc::new(MockGenerator::replying("unused"));
    let server = common::spawn_server(gen.clone()).await;

    let (status, body) = common::post_affirmation(
        &server,
        json!({"name": "Alex", "feeling": "a".repeat(281)}),
    )
    .await;
    assert_eq!(status, 422);
    assert_eq!(body["detail"], "feeling must be at most 280 characters.");
    assert_eq!(gen.calls(), 0);
    server.stop().await;
}

#[tokio::test]
async fn e2e_non_json_body_is_422() {
    let server = common::spawn_server(Arc::new(MockGenerator::replying("unused"))).await;
    let resp = reqwest::Client::new()
        .post(server.url("/api/affirmation"))
        .header("content-type", "application/json")
        .body("not valid json")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 422);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["detail"], serve::DETAIL_INVALID_BODY);
    server.stop().await;
}

#[tokio::test]
async fn e2e_self_harm_returns_template_without_upstream_call() {
    let gen = Arc::new(MockGenerator::replying("should not be used"));
    let server = common::spawn_server(gen.clone()).await;

    for payload in [
        json!({"name": "Riley", "feeling": "I want to kill myself"}),
        json!({"name": "Riley", "feeling": "low", "details": "I'm thinking about self-harm"}),
    ] {
        let (status, body) = common::post_affirmation(&server, payload).await;
        assert_eq!(status, 200);
        let text = body["affirmation"].as_str().unwrap();
        assert!(text.contains("Riley"), "{text}");
        assert_eq!(text, affirm::safety_message("Riley"));
    }
    assert_eq!(gen.calls(), 0);
    server.stop().await;
}

#[tokio::test]
async fn e2e_generator_failures_map_to_statuses() {
    let cases = [
        (GenerateError::Auth, 502, serve::DETAIL_MISCONFIGURED),
        (GenerateError::RateLimited, 429, serve::DETAIL_BUSY),
        (
            GenerateError::TimeoutOrConnection("timed out".into()),
            504,
            serve::DETAIL_TIMEOUT,
        ),
        (
            GenerateError::Unclassified("boom".into()),
            502,
            serve::DETAIL_GENERIC,
        ),
    ];
    for (failure, expected_status, expected_detail) in cases {
        let server = common::spawn_server(Arc::new(MockGenerator::failing(failure))).await;
        let (status, body) =
            common::post_affirmation(&server, json!({"name": "Alex", "feeling": "tired"})).await;
        assert_eq!(status, expected_status);
        assert_eq!(body["detail"], expected_detail);
        server.stop().await;
    }
}

#[tokio::test]
async fn e2e_auth_failure_never_mentions_key() {
    let server = common::spawn_server(Arc::new(MockGenerator::failing(GenerateError::Auth))).await;
    let (status, body) =
        common::post_affirmation(&server, json!({"name": "Alex", "feeling": "tired"})).await;
    assert_eq!(status, 502);
    assert!(!body.to_string().to_lowercase().contains("key"), "{body}");
    server.stop().await;
}

#[tokio::test]
async fn e2e_blank_generation_is_502() {
    let server = common::spawn_server(Arc::new(MockGenerator::replying("  \n"))).await;
    let (status, body) =
        common::post_affirmation(&server, json!({"name": "Alex", "feeling": "tired"})).await;
    assert_eq!(status, 502);
    assert_eq!(body["detail"], serve::DETAIL_EMPTY);
    server.stop().await;
}
