//! # Tone Endpoint Tests
//!
//! End-to-end tests for the tone transform family of endpoints.

mod common;

use crate::common::TestApp;
use serde_json::{json, Value};

#[tokio::test]
async fn tone_transform_passes_the_selected_options_through() {
    let app = TestApp::spawn().await.expect("failed to spawn app");

    // The matcher pins the interpolated options, proving the form values
    // reached the prompt.
    let chat_mock = app.mock_chat("Style: Academic", "A formal rendition.");

    let response = app
        .client
        .post(format!("{}/tone", app.address))
        .json(&json!({
            "text": "quick notes from the lab",
            "tone": "academic",
            "kind": "report",
            "technical_level": "high",
            "formality_level": "very_high",
            "statistics_level": "moderate"
        }))
        .send()
        .await
        .expect("request failed");

    assert!(response.status().is_success(), "status: {}", response.status());
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["result"]["text"], "A formal rendition.");
    chat_mock.assert();
}

#[tokio::test]
async fn tone_section_regenerates_one_part() {
    let app = TestApp::spawn().await.expect("failed to spawn app");

    let chat_mock = app.mock_chat("Generate the conclusion section", "A sharper conclusion.");

    let response = app
        .client
        .post(format!("{}/tone/section", app.address))
        .json(&json!({
            "text": "quick notes from the lab",
            "part": "conclusion",
            "tone": "simple",
            "kind": "summary",
            "technical_level": "low",
            "formality_level": "low",
            "statistics_level": "very_low"
        }))
        .send()
        .await
        .expect("request failed");

    assert!(response.status().is_success());
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["result"]["text"], "A sharper conclusion.");
    chat_mock.assert();
}

#[tokio::test]
async fn tone_review_returns_the_free_form_analysis() {
    let app = TestApp::spawn().await.expect("failed to spawn app");

    app.mock_chat(
        "Analyze the following text for corrections",
        "COHERENCE: Fine.\nSTYLE: Tighten the opening.",
    );

    let response = app
        .client
        .post(format!("{}/tone/review", app.address))
        .json(&json!({ "text": "the transformed draft" }))
        .send()
        .await
        .expect("request failed");

    assert!(response.status().is_success());
    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body["result"]["text"],
        "COHERENCE: Fine.\nSTYLE: Tighten the opening."
    );
}

#[tokio::test]
async fn tone_rejects_blank_text() {
    let app = TestApp::spawn().await.expect("failed to spawn app");

    let response = app
        .client
        .post(format!("{}/tone", app.address))
        .json(&json!({
            "text": "",
            "tone": "narrative",
            "kind": "article",
            "technical_level": "moderate",
            "formality_level": "moderate",
            "statistics_level": "moderate"
        }))
        .send()
        .await
        .expect("request failed");

    assert_eq!(response.status(), 400);
}
