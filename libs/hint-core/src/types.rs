//! Core types for hint annotation and card decks.

use serde::{Deserialize, Serialize};

/// A contiguous run of hint text, tagged as emphasized or plain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub text: String,
    pub emphasized: bool,
}

impl Segment {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            emphasized: false,
        }
    }

    pub fn emphasized(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            emphasized: true,
        }
    }

    /// True when the text is non-empty and made only of whitespace.
    pub fn is_whitespace(&self) -> bool {
        !self.text.is_empty() && self.text.chars().all(char::is_whitespace)
    }
}

/// Concatenate segment texts back into the original hint.
pub fn join_segments(segments: &[Segment]) -> String {
    segments.iter().map(|s| s.text.as_str()).collect()
}

/// Image attached to the front of a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SvgInfo {
    pub flat_id: String,
    pub url: String,
    pub id: String,
}

/// Card as it appears in a deck file (any field may be missing or null).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawCardItem {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub front: Option<String>,
    #[serde(default)]
    pub back: Option<String>,
    #[serde(default)]
    pub hint: Option<String>,
    #[serde(default)]
    pub svg: Option<SvgInfo>,
}

/// Card with every text field resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardItem {
    pub id: String,
    pub front: String,
    pub back: String,
    pub hint: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub svg: Option<SvgInfo>,
}

impl From<RawCardItem> for CardItem {
    fn from(raw: RawCardItem) -> Self {
        Self {
            id: raw.id.unwrap_or_default(),
            front: raw.front.unwrap_or_default(),
            back: raw.back.unwrap_or_default(),
            hint: raw.hint.unwrap_or_default(),
            svg: raw.svg,
        }
    }
}

impl CardItem {
    /// Hint with occurrences of the front word emphasized.
    pub fn decorated_hint(&self) -> Vec<Segment> {
        crate::annotate::annotate(&self.front, &self.hint)
    }

    /// Image URL, if the card carries one.
    pub fn image_url(&self) -> Option<&str> {
        self.svg
            .as_ref()
            .map(|svg| svg.url.as_str())
            .filter(|url| !url.is_empty())
    }
}
