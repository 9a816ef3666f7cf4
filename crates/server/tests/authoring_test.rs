//! # Authoring Endpoint Tests
//!
//! End-to-end tests for LaTeX generation and reference formatting.

mod common;

use crate::common::TestApp;
use serde_json::{json, Value};

#[tokio::test]
async fn latex_endpoint_unwraps_fenced_output() {
    let app = TestApp::spawn().await.expect("failed to spawn app");

    app.mock_chat(
        "formatted LaTeX code",
        "```latex\n\\documentclass{article}\n```",
    );

    let response = app
        .client
        .post(format!("{}/latex", app.address))
        .json(&json!({ "text": "An essay on soil.", "kind": "academic_paper" }))
        .send()
        .await
        .expect("request failed");

    assert!(response.status().is_success());
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["result"]["text"], "\\documentclass{article}");
}

#[tokio::test]
async fn reference_endpoint_sends_only_populated_fields() {
    let app = TestApp::spawn().await.expect("failed to spawn app");

    // The matcher proves both the style/kind interpolation and the
    // label-value assembly of the populated form fields.
    let chat_mock = app.mock_server.mock(|when, then| {
        when.method(httpmock::Method::POST)
            .path("/v1/chat/completions")
            .body_contains("reference in MLA style for a book")
            .body_contains("Author(s): Carson, R.")
            .body_contains("Publisher: Houghton Mifflin");
        then.status(200).json_body(json!({
            "choices": [{"message": {"role": "assistant",
                "content": "Carson, Rachel. Silent Spring. Houghton Mifflin, 1962."}}]
        }));
    });

    let response = app
        .client
        .post(format!("{}/reference", app.address))
        .json(&json!({
            "style": "mla",
            "kind": "book",
            "author": "Carson, R.",
            "title": "Silent Spring",
            "year": "1962",
            "publisher": "Houghton Mifflin"
        }))
        .send()
        .await
        .expect("request failed");

    assert!(response.status().is_success(), "status: {}", response.status());
    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body["result"]["text"],
        "Carson, Rachel. Silent Spring. Houghton Mifflin, 1962."
    );
    chat_mock.assert();
}

#[tokio::test]
async fn reference_requires_author_and_title() {
    let app = TestApp::spawn().await.expect("failed to spawn app");

    let response = app
        .client
        .post(format!("{}/reference", app.address))
        .json(&json!({
            "style": "apa",
            "kind": "website",
            "author": "",
            "title": "Some page"
        }))
        .send()
        .await
        .expect("request failed");

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body["error"],
        "Please provide at least author and title information."
    );
}
