//! Error types for srs-core.

use thiserror::Error;

/// Result type alias using SchedulerError.
pub type Result<T> = std::result::Result<T, SchedulerError>;

/// Errors that can occur while scheduling a review.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SchedulerError {
    #[error("invalid quality {value}: expected an integer from 0 to 5")]
    InvalidQuality { value: i64 },

    #[error("invalid card state: {0}")]
    InvalidState(String),
}
