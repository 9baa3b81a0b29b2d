//! Study endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};
use srs_core::{build_queue, QueueLimits};

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;

/// Upper bound accepted for either queue limit.
const MAX_QUEUE_LIMIT: usize = 1000;

/// GET /api/users/:user_id/queue
pub async fn queue(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Query(query): Query<StudyQueueQuery>,
) -> Result<Json<StudyQueueResponse>> {
    let defaults = QueueLimits::default();
    let limits = QueueLimits {
        new_limit: query.new_limit.unwrap_or(defaults.new_limit),
        review_limit: query.review_limit.unwrap_or(defaults.review_limit),
    };
    if limits.new_limit > MAX_QUEUE_LIMIT || limits.review_limit > MAX_QUEUE_LIMIT {
        return Err(ApiError::BadRequest(format!(
            "queue limits must not exceed {}",
            MAX_QUEUE_LIMIT
        )));
    }

    let cards = state.store.list_card_states(&user_id)?;
    let queue = build_queue(
        cards.into_iter().map(|c| (c.card_id, c.state)),
        state.clock.now(),
        limits,
    );

    Ok(Json(queue))
}

/// GET /api/users/:user_id/stats
pub async fn stats(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<ReviewStats>> {
    let cards = state.store.list_card_states(&user_id)?;
    let stats = ReviewStats::collect(cards.iter().map(|c| &c.state), state.clock.now());
    Ok(Json(stats))
}
