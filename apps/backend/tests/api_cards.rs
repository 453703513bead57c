//! Cards API tests.

mod common;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use common::TestContext;

/// Test listing cards with decorated hints.
#[tokio::test]
async fn test_list_cards() {
    let server = TestContext::new().server();

    let response = server.get("/api/cards").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    let cards = body["cards"].as_array().unwrap();
    assert_eq!(cards.len(), 3);

    assert_eq!(cards[0]["id"], "vex");
    assert_eq!(
        cards[0]["decorated_hint"]["markup"],
        "Don&#39;t <b>vex (to annoy)</b> your sister"
    );
    assert_eq!(cards[0]["svg"]["flatId"], "vex");

    // null hint and svg become "" and absent
    assert_eq!(cards[2]["hint"], "");
    assert!(cards[2].get("svg").is_none());
    assert!(cards[2]["decorated_hint"]["segments"]
        .as_array()
        .unwrap()
        .is_empty());
}

/// Test fetching a single card as markdown.
#[tokio::test]
async fn test_get_card_markdown() {
    let server = TestContext::new().server();

    let response = server
        .get("/api/cards/commence")
        .add_query_param("format", "markdown")
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["back"], "begin");
    assert_eq!(
        body["decorated_hint"]["markup"],
        "We plan **to commence** work soon"
    );
}

/// Test unknown card returns 404 with error body.
#[tokio::test]
async fn test_get_card_not_found() {
    let server = TestContext::new().server();

    let response = server.get("/api/cards/missing").await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "not_found");
    assert_eq!(body["message"], "Not found: Card missing");
}

/// Test unknown format is rejected.
#[tokio::test]
async fn test_list_cards_bad_format() {
    let server = TestContext::new().server();

    let response = server
        .get("/api/cards")
        .add_query_param("format", "latex")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}
