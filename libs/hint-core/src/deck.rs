//! Card deck loading.
//!
//! # Format
//! ```json
//! {
//!   "cards": [
//!     { "id": "1", "front": "to vex", "back": "раздражать",
//!       "hint": "Don't vex (to annoy) your sister",
//!       "svg": { "flatId": "vex", "url": "/svg/vex.svg", "id": "vex" } }
//!   ]
//! }
//! ```
//!
//! Every card field is optional; missing or `null` text becomes `""`.

use crate::error::{DeckError, Result};
use crate::types::{CardItem, RawCardItem};
use serde_json::Value;
use std::path::Path;

/// Ordered collection of cards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<CardItem>,
}

impl Deck {
    pub fn new(cards: Vec<CardItem>) -> Self {
        Self { cards }
    }

    /// Read and parse a deck file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        parse_deck(&content)
    }

    pub fn cards(&self) -> &[CardItem] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&CardItem> {
        self.cards.get(index)
    }

    /// Find a card by its id.
    pub fn find(&self, id: &str) -> Option<&CardItem> {
        self.cards.iter().find(|card| card.id == id)
    }
}

/// Parse deck JSON content.
pub fn parse_deck(content: &str) -> Result<Deck> {
    let value: Value = serde_json::from_str(content)?;

    let object = value
        .as_object()
        .ok_or_else(|| DeckError::InvalidShape("expected a JSON object".to_string()))?;

    let items = match object.get("cards") {
        None | Some(Value::Null) => return Ok(Deck::default()),
        Some(Value::Array(items)) => items,
        Some(_) => {
            return Err(DeckError::InvalidShape(
                "\"cards\" must be an array".to_string(),
            ))
        }
    };

    let cards = items
        .iter()
        .map(|item| {
            let raw: RawCardItem = serde_json::from_value(item.clone())?;
            Ok(CardItem::from(raw))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Deck::new(cards))
}
