//! API request and response types

use serde::{Deserialize, Serialize};

// Re-export shared types from hint-core
pub use hint_core::{CardItem, Format, Segment, StudySession, SvgInfo};

// === Annotation Types ===

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnotateRequest {
    pub headword: String,
    pub hint: String,
    #[serde(default)]
    pub format: Format,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnotateResponse {
    pub segments: Vec<Segment>,
    pub markup: String,
    pub format: Format,
}

/// Optional `?format=` query parameter.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct FormatQuery {
    #[serde(default)]
    pub format: Format,
}

/// Segments plus their rendered markup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderedHint {
    pub segments: Vec<Segment>,
    pub markup: String,
}

impl RenderedHint {
    pub fn new(segments: Vec<Segment>, format: Format) -> Self {
        let markup = format.renderer().render(&segments);
        Self { segments, markup }
    }
}

// === Card Types ===

/// Card with its hint annotated for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardView {
    pub id: String,
    pub front: String,
    pub back: String,
    pub hint: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub svg: Option<SvgInfo>,
    pub decorated_hint: RenderedHint,
}

impl CardView {
    pub fn from_card(card: &CardItem, format: Format) -> Self {
        Self {
            id: card.id.clone(),
            front: card.front.clone(),
            back: card.back.clone(),
            hint: card.hint.clone(),
            svg: card.svg.clone(),
            decorated_hint: RenderedHint::new(card.decorated_hint(), format),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CardListResponse {
    pub cards: Vec<CardView>,
}

// === Session Types ===

/// The card under study; the back stays hidden until flipped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionCard {
    pub id: String,
    pub front: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Absent when the card has no hint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decorated_hint: Option<RenderedHint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub back: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionView {
    pub index: usize,
    pub flipped: bool,
    pub total: usize,
    pub card: SessionCard,
}

impl SessionView {
    pub fn new(session: &StudySession, card: &CardItem, total: usize, format: Format) -> Self {
        let decorated_hint = (!card.hint.is_empty())
            .then(|| RenderedHint::new(card.decorated_hint(), format));

        Self {
            index: session.index,
            flipped: session.flipped,
            total,
            card: SessionCard {
                id: card.id.clone(),
                front: card.front.clone(),
                image_url: card.image_url().map(str::to_string),
                decorated_hint,
                back: session.flipped.then(|| card.back.clone()),
            },
        }
    }
}
