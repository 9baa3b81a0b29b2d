//! Per-user card endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;

/// GET /api/users/:user_id/cards/:card_id
pub async fn get(
    State(state): State<AppState>,
    Path((user_id, card_id)): Path<(String, String)>,
) -> Result<Json<CardResponse>> {
    let card = state
        .store
        .get_card_state(&user_id, &card_id)?
        .ok_or_else(|| ApiError::NotFound(format!("Card {} not found", card_id)))?;

    Ok(Json(card.into()))
}

/// POST /api/users/:user_id/cards/:card_id
///
/// Registers a card the first time it is shown. Existing cards are returned unchanged.
pub async fn register(
    State(state): State<AppState>,
    Path((user_id, card_id)): Path<(String, String)>,
) -> Result<(StatusCode, Json<CardResponse>)> {
    if let Some(existing) = state.store.get_card_state(&user_id, &card_id)? {
        return Ok((StatusCode::OK, Json(existing.into())));
    }

    let card = state.store.save_card_state(
        &user_id,
        &card_id,
        &state.algorithm.initial_state(),
        0,
        state.clock.now(),
    )?;

    tracing::info!(%user_id, %card_id, "registered card");
    Ok((StatusCode::CREATED, Json(card.into())))
}

/// POST /api/users/:user_id/cards/:card_id/review
pub async fn review(
    State(state): State<AppState>,
    Path((user_id, card_id)): Path<(String, String)>,
    Json(payload): Json<SubmitReviewRequest>,
) -> Result<Json<SubmitReviewResponse>> {
    let quality = Quality::try_from(payload.quality)?;

    // Get current card state (or a new card if never stored)
    let (current, version) = match state.store.get_card_state(&user_id, &card_id)? {
        Some(card) => (card.state, card.version),
        None => (state.algorithm.initial_state(), 0),
    };
    let expected_version = payload.expected_version.unwrap_or(version);

    let now = state.clock.now();
    let result = state.algorithm.schedule(&current, quality, now)?;

    let record = ReviewRecord {
        id: Uuid::new_v4(),
        user_id: user_id.clone(),
        card_id: card_id.clone(),
        reviewed_at: now,
        quality,
        interval_before: current.interval,
        interval_after: result.new_state.interval,
        ease_before: current.easiness_factor,
        ease_after: result.new_state.easiness_factor,
        algorithm: state.algorithm.name().to_string(),
    };
    let saved = state
        .store
        .record_review(&result.new_state, expected_version, record)?;

    tracing::info!(
        %user_id,
        %card_id,
        quality = quality.to_value(),
        interval = result.new_state.interval,
        status = ?result.status,
        "review recorded"
    );

    Ok(Json(SubmitReviewResponse {
        card: saved.into(),
        next_due: result.next_due,
    }))
}

/// GET /api/users/:user_id/cards/:card_id/history
pub async fn history(
    State(state): State<AppState>,
    Path((user_id, card_id)): Path<(String, String)>,
) -> Result<Json<ReviewHistoryResponse>> {
    let reviews = state.store.list_reviews(&user_id, &card_id)?;
    Ok(Json(ReviewHistoryResponse { reviews }))
}
