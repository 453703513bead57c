//! Annotation endpoint

use axum::Json;

use crate::models::*;

/// POST /api/annotate
pub async fn annotate(Json(payload): Json<AnnotateRequest>) -> Json<AnnotateResponse> {
    let segments = hint_core::annotate(&payload.headword, &payload.hint);

    tracing::debug!(
        headword = %payload.headword,
        segments = segments.len(),
        emphasized = segments.iter().filter(|s| s.emphasized).count(),
        "annotated hint"
    );

    let rendered = RenderedHint::new(segments, payload.format);
    Json(AnnotateResponse {
        segments: rendered.segments,
        markup: rendered.markup,
        format: payload.format,
    })
}
