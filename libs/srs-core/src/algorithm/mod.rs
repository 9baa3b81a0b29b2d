//! Spaced repetition algorithm implementations.

pub mod sm2;

use crate::error::Result;
use crate::rating::{get_quality_rating_options, QualityRatingOption};
use crate::types::{CardMemoryState, Quality, ReviewStatus};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Result of scheduling a card after review.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchedulingResult {
    pub new_state: CardMemoryState,
    pub next_due: DateTime<Utc>,
    pub status: ReviewStatus,
}

/// What a single rating would do to a card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatingPreview {
    pub quality: Quality,
    pub label: &'static str,
    pub interval: u32,
    pub next_due: DateTime<Utc>,
}

/// Trait for spaced repetition algorithms.
pub trait SpacedRepetitionAlgorithm: Send + Sync {
    /// Algorithm identifier.
    fn name(&self) -> &'static str;

    /// Initial state for a new card.
    fn initial_state(&self) -> CardMemoryState;

    /// Calculate next review state after a review.
    ///
    /// Fails with `InvalidState` when `state` breaks the algorithm's
    /// invariants; nothing is produced in that case.
    fn schedule(
        &self,
        state: &CardMemoryState,
        quality: Quality,
        now: DateTime<Utc>,
    ) -> Result<SchedulingResult>;

    /// Ratings the learner may choose from.
    fn rating_options(&self) -> &'static [QualityRatingOption] {
        get_quality_rating_options()
    }

    /// Outcome of every rating option for `state`, in option order.
    fn preview(&self, state: &CardMemoryState, now: DateTime<Utc>) -> Result<Vec<RatingPreview>> {
        Quality::ALL
            .iter()
            .map(|&quality| -> Result<RatingPreview> {
                let result = self.schedule(state, quality, now)?;
                Ok(RatingPreview {
                    quality,
                    label: quality.label(),
                    interval: result.new_state.interval,
                    next_due: result.next_due,
                })
            })
            .collect()
    }
}

/// Get algorithm by name.
pub fn get_algorithm(name: &str) -> Option<Box<dyn SpacedRepetitionAlgorithm>> {
    match name {
        "sm2" => Some(Box::new(sm2::Sm2::default())),
        _ => None,
    }
}

/// Compute the state that follows a review with the default SM-2 parameters.
///
/// `previous` of `None` stands for a card that has never been reviewed.
/// `quality` is validated here, so raw input from the UI can be passed as-is.
pub fn compute_next_state(
    previous: Option<&CardMemoryState>,
    quality: i64,
    now: DateTime<Utc>,
) -> Result<CardMemoryState> {
    let quality = Quality::try_from(quality)?;
    let sm2 = sm2::Sm2::default();
    let initial = sm2.initial_state();
    let result = sm2.schedule(previous.unwrap_or(&initial), quality, now)?;
    Ok(result.new_state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SchedulerError;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn resolves_sm2_by_name() {
        let algorithm = get_algorithm("sm2").unwrap();
        assert_eq!(algorithm.name(), "sm2");
        assert!(get_algorithm("fsrs").is_none());
    }

    #[test]
    fn compute_next_state_treats_none_as_new_card() {
        let state = compute_next_state(None, 5, now()).unwrap();
        assert_eq!(state.repetition_number, 1);
        assert_eq!(state.interval, 1);
        assert!((state.easiness_factor - 2.6).abs() < 1e-9);
        assert_eq!(state.last_review_date, Some(now()));
        assert!(!state.is_new());
    }

    #[test]
    fn compute_next_state_rejects_invalid_quality() {
        let state = CardMemoryState::new_card();
        assert_eq!(
            compute_next_state(Some(&state), 7, now()),
            Err(SchedulerError::InvalidQuality { value: 7 })
        );
        assert_eq!(
            compute_next_state(Some(&state), -1, now()),
            Err(SchedulerError::InvalidQuality { value: -1 })
        );
    }

    #[test]
    fn preview_lists_every_option() {
        let algorithm = get_algorithm("sm2").unwrap();
        let state = CardMemoryState {
            easiness_factor: 2.5,
            repetition_number: 3,
            interval: 10,
            last_review_date: Some(now()),
        };
        let previews = algorithm.preview(&state, now()).unwrap();
        let intervals: Vec<u32> = previews.iter().map(|p| p.interval).collect();
        assert_eq!(intervals, vec![1, 1, 1, 24, 25, 26]);
        assert_eq!(previews[4].label, "Good");
    }

    #[test]
    fn rating_options_match_accepted_qualities() {
        let algorithm = get_algorithm("sm2").unwrap();
        assert_eq!(algorithm.rating_options().len(), Quality::ALL.len());
    }
}
