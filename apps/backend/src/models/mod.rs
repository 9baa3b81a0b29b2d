//! Stored records and API types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Re-export shared types from srs-core
pub use srs_core::{
    CardMemoryState, Quality, QualityRatingOption, RatingPreview, RawCardState, ReviewQueue,
    ReviewStats, ReviewStatus,
};

// === Stored Entity Types ===

/// Card state persisted for one user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredCard {
    pub user_id: String,
    pub card_id: String,
    pub state: CardMemoryState,
    pub version: u64,
    pub updated_at: DateTime<Utc>,
}

/// Review log entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewRecord {
    pub id: Uuid,
    pub user_id: String,
    pub card_id: String,
    pub reviewed_at: DateTime<Utc>,
    pub quality: Quality,
    pub interval_before: u32,
    pub interval_after: u32,
    pub ease_before: f64,
    pub ease_after: f64,
    pub algorithm: String,
}

// === API Request/Response Types ===

/// Card state together with the values derived from it
#[derive(Debug, Clone, Serialize)]
pub struct CardStateView {
    #[serde(flatten)]
    pub state: CardMemoryState,
    pub status: ReviewStatus,
    pub is_new: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_review_date: Option<DateTime<Utc>>,
}

impl From<CardMemoryState> for CardStateView {
    fn from(state: CardMemoryState) -> Self {
        Self {
            status: state.status(),
            is_new: state.is_new(),
            next_review_date: state.next_review_date(),
            state,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CardResponse {
    pub card_id: String,
    pub version: u64,
    pub updated_at: DateTime<Utc>,
    pub state: CardStateView,
}

impl From<StoredCard> for CardResponse {
    fn from(card: StoredCard) -> Self {
        Self {
            card_id: card.card_id,
            version: card.version,
            updated_at: card.updated_at,
            state: card.state.into(),
        }
    }
}

// Stateless scheduling types
#[derive(Debug, Serialize, Deserialize)]
pub struct NextStateRequest {
    #[serde(default)]
    pub previous_state: Option<RawCardState>,
    pub quality: i64,
}

#[derive(Debug, Serialize)]
pub struct NextStateResponse {
    pub state: CardStateView,
    pub next_due: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PreviewRequest {
    #[serde(default)]
    pub state: Option<RawCardState>,
}

#[derive(Debug, Serialize)]
pub struct PreviewResponse {
    pub previews: Vec<RatingPreview>,
}

// Card review types
#[derive(Debug, Serialize, Deserialize)]
pub struct SubmitReviewRequest {
    pub quality: i64,
    /// Version the client last read. Defaults to the version loaded by the server.
    #[serde(default)]
    pub expected_version: Option<u64>,
}

#[derive(Debug, Serialize)]
pub struct SubmitReviewResponse {
    pub card: CardResponse,
    pub next_due: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ReviewHistoryResponse {
    pub reviews: Vec<ReviewRecord>,
}

// Study types
#[derive(Debug, Serialize, Deserialize)]
pub struct StudyQueueQuery {
    pub new_limit: Option<usize>,
    pub review_limit: Option<usize>,
}

pub type StudyQueueResponse = ReviewQueue<String>;
