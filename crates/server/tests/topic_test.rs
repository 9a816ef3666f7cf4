//! # Topic Explorer Endpoint Tests
//!
//! End-to-end tests for hypothesis generation and the briefing endpoint.

mod common;

use crate::common::TestApp;
use serde_json::{json, Value};

#[tokio::test]
async fn hypotheses_endpoint_returns_the_numbered_options() {
    let app = TestApp::spawn().await.expect("failed to spawn app");

    let chat_mock = app.mock_chat(
        "research hypothesis options for the topic: urban beekeeping",
        "1. Hives thrive on rooftops.\n2. Forage diversity drives yield.",
    );

    let response = app
        .client
        .post(format!("{}/topics/hypotheses", app.address))
        .json(&json!({ "topic": "urban beekeeping" }))
        .send()
        .await
        .expect("request failed");

    assert!(response.status().is_success());
    let body: Value = response.json().await.unwrap();
    assert!(body["result"]["text"]
        .as_str()
        .unwrap()
        .starts_with("1. Hives thrive"));
    chat_mock.assert();
}

#[tokio::test]
async fn briefing_runs_statistics_references_and_outline() {
    let app = TestApp::spawn().await.expect("failed to spawn app");

    let stats_mock = app.mock_chat("statistics and data points", "the stats");
    let refs_mock = app.mock_chat("academic references and sources", "the sources");
    let outline_mock = app.mock_chat("proposed outline", "the outline");

    let response = app
        .client
        .post(format!("{}/topics/briefing", app.address))
        .json(&json!({ "hypothesis": "Hives thrive on rooftops." }))
        .send()
        .await
        .expect("request failed");

    assert!(response.status().is_success());
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["result"]["statistics"], "the stats");
    assert_eq!(body["result"]["references"], "the sources");
    assert_eq!(body["result"]["outline"], "the outline");

    stats_mock.assert();
    refs_mock.assert();
    outline_mock.assert();
}

#[tokio::test]
async fn briefing_requires_a_hypothesis() {
    let app = TestApp::spawn().await.expect("failed to spawn app");

    let response = app
        .client
        .post(format!("{}/topics/briefing", app.address))
        .json(&json!({ "hypothesis": " " }))
        .send()
        .await
        .expect("request failed");

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Please select a hypothesis first.");
}
