//! Error types for hint-core.

use thiserror::Error;

/// Result type alias using DeckError.
pub type Result<T> = std::result::Result<T, DeckError>;

/// Errors that can occur while loading a card deck.
#[derive(Debug, Error)]
pub enum DeckError {
    #[error("failed to read deck file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid deck JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid deck shape: {0}")]
    InvalidShape(String),
}
