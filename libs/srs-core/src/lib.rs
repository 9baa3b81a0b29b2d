//! Review scheduling core for vocabulary flashcards.
//!
//! Provides:
//! - SM-2 spaced repetition scheduling behind the `SpacedRepetitionAlgorithm` trait
//! - Quality rating options shown to the learner
//! - Due date and status helpers, review queue and statistics
//! - Shared types (CardMemoryState, Quality, ReviewStatus)

pub mod algorithm;
pub mod clock;
pub mod error;
pub mod queue;
pub mod rating;
pub mod stats;
pub mod types;

pub use algorithm::{
    compute_next_state, get_algorithm, RatingPreview, SchedulingResult, SpacedRepetitionAlgorithm,
};
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{Result, SchedulerError};
pub use queue::{build_queue, QueueLimits, QueuedCard, ReviewQueue};
pub use rating::{get_quality_rating_options, QualityRatingOption};
pub use stats::ReviewStats;
pub use types::{
    CardMemoryState, Quality, RawCardState, ReviewStatus, DEFAULT_EASE, MAXIMUM_INTERVAL,
    MINIMUM_EASE,
};
