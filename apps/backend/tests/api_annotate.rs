//! Annotation API tests.

mod common;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use common::fixtures;
use common::TestContext;

/// Test health check responds.
#[tokio::test]
async fn test_health() {
    let server = TestContext::new().server();

    let response = server.get("/health").await;

    response.assert_status_ok();
    response.assert_text("OK");
}

/// Test the to-prefix is emphasized together with the verb.
#[tokio::test]
async fn test_annotate_to_prefix() {
    let server = TestContext::new().server();

    let response = server
        .post("/api/annotate")
        .json(&fixtures::annotate_request(
            "to commence",
            "We plan to commence work soon",
        ))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["markup"], "We plan <b>to commence</b> work soon");
    assert_eq!(body["format"], "html");

    let segments = body["segments"].as_array().unwrap();
    let bold: Vec<_> = segments
        .iter()
        .filter(|s| s["emphasized"] == true)
        .map(|s| s["text"].as_str().unwrap())
        .collect();
    assert_eq!(bold, vec!["to commence"]);
}

/// Test markdown output format.
#[tokio::test]
async fn test_annotate_markdown() {
    let server = TestContext::new().server();

    let response = server
        .post("/api/annotate")
        .json(&json!({
            "headword": "Drain",
            "hint": "we drained the swimming pool",
            "format": "markdown"
        }))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["markup"], "we **drained** the swimming pool");
    assert_eq!(body["format"], "markdown");
}

/// Test empty headword returns the hint unchanged.
#[tokio::test]
async fn test_annotate_empty_headword() {
    let server = TestContext::new().server();

    let response = server
        .post("/api/annotate")
        .json(&fixtures::annotate_request("", "anything <here>"))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(
        body["segments"],
        json!([{ "text": "anything <here>", "emphasized": false }])
    );
    assert_eq!(body["markup"], "anything &lt;here&gt;");
}

/// Test empty hint yields no segments.
#[tokio::test]
async fn test_annotate_empty_hint() {
    let server = TestContext::new().server();

    let response = server
        .post("/api/annotate")
        .json(&fixtures::annotate_request("word", ""))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert!(body["segments"].as_array().unwrap().is_empty());
    assert_eq!(body["markup"], "");
}

/// Test missing fields are rejected by the JSON extractor.
#[tokio::test]
async fn test_annotate_missing_hint() {
    let server = TestContext::new().server();

    let response = server
        .post("/api/annotate")
        .json(&json!({ "headword": "vex" }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}
