//! Stateless scheduling endpoints

use axum::{extract::State, Json};

use crate::error::Result;
use crate::models::*;
use crate::AppState;

/// GET /api/review/options
pub async fn options(State(state): State<AppState>) -> Json<&'static [QualityRatingOption]> {
    Json(state.algorithm.rating_options())
}

/// POST /api/review/next-state
pub async fn next_state(
    State(state): State<AppState>,
    Json(payload): Json<NextStateRequest>,
) -> Result<Json<NextStateResponse>> {
    let quality = Quality::try_from(payload.quality)?;
    let previous = match payload.previous_state {
        Some(raw) => CardMemoryState::try_from(raw)?,
        None => state.algorithm.initial_state(),
    };

    let result = state
        .algorithm
        .schedule(&previous, quality, state.clock.now())?;

    Ok(Json(NextStateResponse {
        state: result.new_state.into(),
        next_due: result.next_due,
    }))
}

/// POST /api/review/preview
pub async fn preview(
    State(state): State<AppState>,
    Json(payload): Json<PreviewRequest>,
) -> Result<Json<PreviewResponse>> {
    let current = match payload.state {
        Some(raw) => CardMemoryState::try_from(raw)?,
        None => state.algorithm.initial_state(),
    };

    let previews = state.algorithm.preview(&current, state.clock.now())?;
    Ok(Json(PreviewResponse { previews }))
}
