//! SM-2 spaced repetition algorithm.
//!
//! Classic SuperMemo 2 on the 0-5 quality scale:
//! - EF' = EF + (0.1 - (5 - q) * (0.08 + (5 - q) * 0.02)), floored at 1.3
//! - quality below 3 resets the repetition number and the interval
//! - passing reviews step through 1 day, 6 days, then previous interval * EF'

use super::{SchedulingResult, SpacedRepetitionAlgorithm};
use crate::error::{Result, SchedulerError};
use crate::types::{CardMemoryState, Quality, DEFAULT_EASE, MAXIMUM_INTERVAL, MINIMUM_EASE};
use chrono::{DateTime, Duration, Utc};

/// SM-2 algorithm with configurable parameters.
#[derive(Debug, Clone)]
pub struct Sm2 {
    pub initial_ease: f64,
    pub minimum_ease: f64,
    /// Lowest quality that counts as a successful review.
    pub passing_quality: Quality,
    pub first_interval: u32,
    pub second_interval: u32,
    pub lapse_interval: u32,
    pub maximum_interval: u32,
}

impl Default for Sm2 {
    fn default() -> Self {
        Self {
            initial_ease: DEFAULT_EASE,
            minimum_ease: MINIMUM_EASE,
            passing_quality: Quality::Hard,
            first_interval: 1,
            second_interval: 6,
            lapse_interval: 1,
            maximum_interval: MAXIMUM_INTERVAL,
        }
    }
}

impl SpacedRepetitionAlgorithm for Sm2 {
    fn name(&self) -> &'static str {
        "sm2"
    }

    fn initial_state(&self) -> CardMemoryState {
        CardMemoryState {
            easiness_factor: self.initial_ease,
            repetition_number: 0,
            interval: 0,
            last_review_date: None,
        }
    }

    fn schedule(
        &self,
        state: &CardMemoryState,
        quality: Quality,
        now: DateTime<Utc>,
    ) -> Result<SchedulingResult> {
        state.validate(self.minimum_ease, self.maximum_interval)?;

        let new_ease = self.next_ease(state.easiness_factor, quality);

        let (repetition_number, interval) = if quality >= self.passing_quality {
            let repetition_number = state.repetition_number.saturating_add(1);
            let interval = match repetition_number {
                1 => self.first_interval,
                2 => self.second_interval,
                _ => self.grown_interval(state.interval, new_ease),
            };
            (repetition_number, interval)
        } else {
            tracing::debug!(
                repetition_number = state.repetition_number,
                interval = state.interval,
                "card lapsed"
            );
            (0, self.lapse_interval)
        };

        let next_due = now
            .checked_add_signed(Duration::days(i64::from(interval)))
            .ok_or_else(|| {
                SchedulerError::InvalidState("next review date is out of range".to_string())
            })?;

        let new_state = CardMemoryState {
            easiness_factor: new_ease,
            repetition_number,
            interval,
            last_review_date: Some(now),
        };

        tracing::debug!(
            quality = quality.to_value(),
            easiness_factor = new_ease,
            repetition_number,
            interval,
            "scheduled review"
        );

        Ok(SchedulingResult {
            status: new_state.status(),
            new_state,
            next_due,
        })
    }
}

impl Sm2 {
    fn next_ease(&self, ease: f64, quality: Quality) -> f64 {
        let miss = 5.0 - f64::from(quality.to_value());
        let delta = 0.1 - miss * (0.08 + miss * 0.02);
        (ease + delta).max(self.minimum_ease)
    }

    fn grown_interval(&self, previous: u32, ease: f64) -> u32 {
        let grown = (f64::from(previous) * ease).round();
        grown.clamp(1.0, f64::from(self.maximum_interval)) as u32
    }
}
