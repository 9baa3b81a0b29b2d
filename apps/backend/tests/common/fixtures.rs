//! Test fixtures and factory functions for request bodies.

use serde_json::json;

/// Create a stateless next-state request body.
pub fn next_state_request(previous_state: Option<serde_json::Value>, quality: i64) -> serde_json::Value {
    match previous_state {
        Some(state) => json!({ "previous_state": state, "quality": quality }),
        None => json!({ "quality": quality }),
    }
}

/// Create a stored-state body.
pub fn card_state(easiness_factor: f64, repetition_number: i64, interval: i64) -> serde_json::Value {
    json!({
        "easiness_factor": easiness_factor,
        "repetition_number": repetition_number,
        "interval": interval,
        "last_review_date": "2024-08-20T08:30:00Z"
    })
}

/// Create a preview request body.
pub fn preview_request(state: Option<serde_json::Value>) -> serde_json::Value {
    match state {
        Some(state) => json!({ "state": state }),
        None => json!({}),
    }
}

/// Create a submit review request body.
pub fn submit_review_request(quality: i64) -> serde_json::Value {
    json!({ "quality": quality })
}

/// Create a submit review request body pinned to a version.
pub fn submit_review_request_at(quality: i64, expected_version: u64) -> serde_json::Value {
    json!({ "quality": quality, "expected_version": expected_version })
}
