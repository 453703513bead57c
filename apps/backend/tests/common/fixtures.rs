//! Test fixtures and factory functions for creating test data.

use hint_core::{parse_deck, Deck};
use serde_json::json;

/// Deck JSON in the card file format.
pub fn sample_deck_json() -> String {
    json!({
        "cards": [
            {
                "id": "vex",
                "front": "To vex",
                "back": "irritate",
                "hint": "Don't vex (to annoy) your sister",
                "svg": { "flatId": "vex", "url": "/svg/vex.svg", "id": "svg-vex" }
            },
            {
                "id": "commence",
                "front": "to commence",
                "back": "begin",
                "hint": "We plan to commence work soon"
            },
            {
                "id": "tripe",
                "front": "tripe",
                "back": "stomach lining",
                "hint": null,
                "svg": null
            }
        ]
    })
    .to_string()
}

pub fn sample_deck() -> Deck {
    parse_deck(&sample_deck_json()).unwrap()
}

/// Body for POST /api/annotate.
pub fn annotate_request(headword: &str, hint: &str) -> serde_json::Value {
    json!({ "headword": headword, "hint": hint })
}
