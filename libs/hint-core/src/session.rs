//! Flip-and-advance study session over a deck.

use crate::deck::Deck;
use crate::types::CardItem;
use serde::{Deserialize, Serialize};

/// Position in the deck and whether the current card shows its back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudySession {
    pub index: usize,
    pub flipped: bool,
}

impl StudySession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the current card, or move on if it is already flipped.
    pub fn activate(&mut self, len: usize) {
        if self.flipped {
            self.next(len);
        } else {
            self.flipped = true;
        }
    }

    /// Show the front of the next card, wrapping to the first.
    pub fn next(&mut self, len: usize) {
        self.flipped = false;
        if len > 0 {
            self.index = (self.index + 1) % len;
        }
    }

    pub fn current<'a>(&self, deck: &'a Deck) -> Option<&'a CardItem> {
        deck.get(self.index)
    }
}
