//! # Admin Endpoint Tests
//!
//! This file contains integration tests for the operational endpoints:
//! model discovery and the artifact bucket probe.

mod common;

use crate::common::TestApp;
use httpmock::Method;
use serde_json::{json, Value};
use textsmith::providers::catalog::FALLBACK_MODELS;

#[tokio::test]
async fn models_endpoint_lists_discovered_models() {
    let app = TestApp::spawn().await.expect("failed to spawn app");

    app.mock_server.mock(|when, then| {
        when.method(Method::GET).path("/foundation-models");
        then.status(200).json_body(json!({
            "modelSummaries": [
                {"modelId": "anthropic.claude-3-sonnet-20240229-v1"},
                {"modelId": "meta.llama2-13b-chat-v1"}
            ]
        }));
    });

    let response = app
        .client
        .get(format!("{}/models", app.address))
        .send()
        .await
        .expect("request failed");

    assert!(response.status().is_success());
    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body["result"]["models"],
        json!(["anthropic.claude-3-sonnet-20240229-v1", "meta.llama2-13b-chat-v1"])
    );
}

#[tokio::test]
async fn models_endpoint_falls_back_when_discovery_is_down() {
    // No /foundation-models mock is registered, so discovery gets a 404
    // and the static list is served.
    let app = TestApp::spawn().await.expect("failed to spawn app");

    let response = app
        .client
        .get(format!("{}/models", app.address))
        .send()
        .await
        .expect("request failed");

    assert!(response.status().is_success());
    let body: Value = response.json().await.unwrap();
    let models: Vec<String> = body["result"]["models"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m.as_str().unwrap().to_string())
        .collect();
    assert_eq!(models, FALLBACK_MODELS);
}

#[tokio::test]
async fn bucket_status_reports_the_probe_outcome() {
    let app = TestApp::spawn().await.expect("failed to spawn app");

    app.mock_server.mock(|when, then| {
        when.method(Method::HEAD).path("/textsmith-test");
        then.status(404);
    });

    let response = app
        .client
        .get(format!("{}/storage/bucket", app.address))
        .send()
        .await
        .expect("request failed");

    assert!(response.status().is_success());
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["result"]["bucket"], "textsmith-test");
    assert_eq!(body["result"]["status"], "missing");
}

#[tokio::test]
async fn bucket_create_sends_the_region_constraint() {
    let app = TestApp::spawn().await.expect("failed to spawn app");

    // The harness configures region eu-central-1, so creation must carry
    // the location constraint.
    let create_mock = app.mock_server.mock(|when, then| {
        when.method(Method::PUT)
            .path("/textsmith-test")
            .body_contains("eu-central-1");
        then.status(200);
    });

    let response = app
        .client
        .post(format!("{}/storage/bucket", app.address))
        .send()
        .await
        .expect("request failed");

    assert!(response.status().is_success());
    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body["result"]["message"],
        "Bucket `textsmith-test` created successfully"
    );
    create_mock.assert();
}

#[tokio::test]
async fn bucket_access_denied_is_reported_not_errored() {
    let app = TestApp::spawn().await.expect("failed to spawn app");

    app.mock_server.mock(|when, then| {
        when.method(Method::HEAD).path("/textsmith-test");
        then.status(403);
    });

    let response = app
        .client
        .get(format!("{}/storage/bucket", app.address))
        .send()
        .await
        .expect("request failed");

    assert!(response.status().is_success());
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["result"]["status"], "access_denied");
}
