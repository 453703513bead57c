//! Study session endpoints

use axum::{
    extract::{Query, State},
    Json,
};

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;

/// GET /api/session
pub async fn current(
    State(state): State<AppState>,
    Query(query): Query<FormatQuery>,
) -> Result<Json<SessionView>> {
    let session = state.session.lock().await;
    view(&state, &session, query.format)
}

/// POST /api/session/activate
pub async fn activate(
    State(state): State<AppState>,
    Query(query): Query<FormatQuery>,
) -> Result<Json<SessionView>> {
    let mut session = state.session.lock().await;
    session.activate(state.deck.len());
    tracing::debug!(index = session.index, flipped = session.flipped, "session activated");
    view(&state, &session, query.format)
}

/// POST /api/session/next
pub async fn next(
    State(state): State<AppState>,
    Query(query): Query<FormatQuery>,
) -> Result<Json<SessionView>> {
    let mut session = state.session.lock().await;
    session.next(state.deck.len());
    tracing::debug!(index = session.index, "session advanced");
    view(&state, &session, query.format)
}

fn view(state: &AppState, session: &StudySession, format: Format) -> Result<Json<SessionView>> {
    let card = session
        .current(&state.deck)
        .ok_or_else(|| ApiError::NotFound("Deck has no cards".to_string()))?;
    Ok(Json(SessionView::new(session, card, state.deck.len(), format)))
}
