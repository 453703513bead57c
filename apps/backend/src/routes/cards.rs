//! Card endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;

/// GET /api/cards
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<FormatQuery>,
) -> Json<CardListResponse> {
    let cards = state
        .deck
        .cards()
        .iter()
        .map(|card| CardView::from_card(card, query.format))
        .collect();
    Json(CardListResponse { cards })
}

/// GET /api/cards/:id
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<FormatQuery>,
) -> Result<Json<CardView>> {
    let card = state
        .deck
        .find(&id)
        .ok_or_else(|| ApiError::NotFound(format!("Card {}", id)))?;
    Ok(Json(CardView::from_card(card, query.format)))
}
