//! Core hint library for the flashcard app.
//!
//! Provides:
//! - Hint annotation: emphasis of a headword and its variants inside a hint
//! - Segment renderers (HTML, Markdown)
//! - Card deck loading and study session state
//! - Shared types (Segment, CardItem, etc.)

pub mod annotate;
pub mod bases;
pub mod deck;
pub mod error;
pub mod render;
pub mod session;
pub mod tokenizer;
pub mod types;

pub use annotate::annotate;
pub use bases::{derive_bases, SearchBase};
pub use deck::{parse_deck, Deck};
pub use error::{DeckError, Result};
pub use render::{get_renderer, Format, HtmlRenderer, MarkdownRenderer, SegmentRenderer};
pub use session::StudySession;
pub use tokenizer::{tokenize, Token};
pub use types::{join_segments, CardItem, RawCardItem, Segment, SvgInfo};
