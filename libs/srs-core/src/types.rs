//! Core types for review scheduling.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::SchedulerError;

/// Easiness factor assigned to a card that has never been reviewed.
pub const DEFAULT_EASE: f64 = 2.5;

/// Lowest easiness factor a card can reach.
pub const MINIMUM_EASE: f64 = 1.3;

/// Longest interval, in days, a card can be scheduled for.
pub const MAXIMUM_INTERVAL: u32 = 36500;

/// Recall quality reported by the learner after a review.
///
/// Values follow the SM-2 0-5 scale, where 0 is a complete blackout and 5 is
/// perfect recall. Anything below [`Quality::Hard`] counts as a lapse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub enum Quality {
    Blackout,
    Wrong,
    Almost,
    Hard,
    Good,
    Easy,
}

impl Quality {
    /// Every quality in ascending order.
    pub const ALL: [Quality; 6] = [
        Self::Blackout,
        Self::Wrong,
        Self::Almost,
        Self::Hard,
        Self::Good,
        Self::Easy,
    ];

    /// Numeric value on the 0-5 scale.
    pub fn to_value(self) -> u8 {
        match self {
            Self::Blackout => 0,
            Self::Wrong => 1,
            Self::Almost => 2,
            Self::Hard => 3,
            Self::Good => 4,
            Self::Easy => 5,
        }
    }

    /// Create from a 0-5 value.
    pub fn from_value(value: u8) -> Option<Self> {
        Self::ALL.get(value as usize).copied()
    }

    /// Whether the review counts as successful recall.
    pub fn is_passing(self) -> bool {
        self >= Self::Hard
    }
}

impl TryFrom<i64> for Quality {
    type Error = SchedulerError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .ok()
            .and_then(Self::from_value)
            .ok_or(SchedulerError::InvalidQuality { value })
    }
}

impl From<Quality> for u8 {
    fn from(quality: Quality) -> Self {
        quality.to_value()
    }
}

/// Where a card sits in its learning curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewStatus {
    /// Never reviewed.
    New,
    /// One or two passing reviews since the last lapse.
    Learning,
    /// More than two consecutive passing reviews.
    Reviewing,
    /// Last review failed; the learning curve restarts.
    Lapsed,
}

impl Default for ReviewStatus {
    fn default() -> Self {
        Self::New
    }
}

/// Memory state of a single vocabulary card.
///
/// Each review produces a fresh value; the scheduler never mutates a state in
/// place. Deserialization validates the record, so a corrupted persisted
/// state is rejected instead of being quietly repaired.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCardState")]
pub struct CardMemoryState {
    pub easiness_factor: f64,
    pub repetition_number: u32,
    /// Days until the next review. Zero only for a card that was never reviewed.
    pub interval: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_review_date: Option<DateTime<Utc>>,
}

impl Default for CardMemoryState {
    fn default() -> Self {
        Self {
            easiness_factor: DEFAULT_EASE,
            repetition_number: 0,
            interval: 0,
            last_review_date: None,
        }
    }
}

impl CardMemoryState {
    /// State for a card shown to the learner for the first time.
    pub fn new_card() -> Self {
        Self::default()
    }

    /// True when the card has no review history.
    pub fn is_new(&self) -> bool {
        self.repetition_number == 0 && self.last_review_date.is_none()
    }

    /// Date the card becomes due, `None` for a new card.
    pub fn next_review_date(&self) -> Option<DateTime<Utc>> {
        let last = self.last_review_date?;
        last.checked_add_signed(Duration::days(i64::from(self.interval)))
    }

    pub fn status(&self) -> ReviewStatus {
        match self.repetition_number {
            0 if self.is_new() => ReviewStatus::New,
            0 => ReviewStatus::Lapsed,
            1 | 2 => ReviewStatus::Learning,
            _ => ReviewStatus::Reviewing,
        }
    }

    /// Whether the card should be shown at `now`. New cards are always due.
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        if self.is_new() {
            return true;
        }
        self.next_review_date().is_some_and(|due| due <= now)
    }

    /// Whole days elapsed since the card became due, zero if it is not due yet.
    pub fn days_overdue(&self, now: DateTime<Utc>) -> i64 {
        match self.next_review_date() {
            Some(due) if due < now => (now - due).num_days(),
            _ => 0,
        }
    }

    /// Check the record against the invariants every scheduled state upholds.
    pub fn validate(&self, minimum_ease: f64, maximum_interval: u32) -> Result<(), SchedulerError> {
        if !self.easiness_factor.is_finite() {
            return Err(SchedulerError::InvalidState(format!(
                "easiness factor must be finite, got {}",
                self.easiness_factor
            )));
        }
        if self.easiness_factor < minimum_ease {
            return Err(SchedulerError::InvalidState(format!(
                "easiness factor {} is below the minimum of {}",
                self.easiness_factor, minimum_ease
            )));
        }
        if !self.is_new() && self.interval == 0 {
            return Err(SchedulerError::InvalidState(
                "a reviewed card must have an interval of at least one day".to_string(),
            ));
        }
        if self.interval > maximum_interval {
            return Err(SchedulerError::InvalidState(format!(
                "interval {} exceeds the maximum of {} days",
                self.interval, maximum_interval
            )));
        }
        // Without a review date the card could never become due again.
        if self.last_review_date.is_none() && (self.repetition_number > 0 || self.interval > 0) {
            return Err(SchedulerError::InvalidState(
                "a reviewed card must have a last review date".to_string(),
            ));
        }
        Ok(())
    }
}

/// Loosely typed card state as read from storage or a request body.
///
/// Converting it into a [`CardMemoryState`] checks every invariant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawCardState {
    pub easiness_factor: f64,
    pub repetition_number: i64,
    pub interval: i64,
    #[serde(default)]
    pub last_review_date: Option<DateTime<Utc>>,
}

impl TryFrom<RawCardState> for CardMemoryState {
    type Error = SchedulerError;

    fn try_from(raw: RawCardState) -> Result<Self, Self::Error> {
        let repetition_number = u32::try_from(raw.repetition_number).map_err(|_| {
            SchedulerError::InvalidState(format!(
                "repetition number must be a non-negative integer, got {}",
                raw.repetition_number
            ))
        })?;
        let interval = u32::try_from(raw.interval).map_err(|_| {
            SchedulerError::InvalidState(format!(
                "interval must be a non-negative number of days, got {}",
                raw.interval
            ))
        })?;

        let state = Self {
            easiness_factor: raw.easiness_factor,
            repetition_number,
            interval,
            last_review_date: raw.last_review_date,
        };
        state.validate(MINIMUM_EASE, MAXIMUM_INTERVAL)?;
        Ok(state)
    }
}
