//! Aggregate statistics over a learner's cards.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::types::{CardMemoryState, ReviewStatus};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReviewStats {
    pub total_cards: usize,
    pub new_cards: usize,
    pub learning_cards: usize,
    pub reviewing_cards: usize,
    pub lapsed_cards: usize,
    /// Reviewed cards that are due at the time of collection.
    pub due_cards: usize,
    /// Mean over reviewed cards, zero when nothing has been reviewed.
    pub average_ease: f64,
    pub average_interval: f64,
}

impl ReviewStats {
    pub fn collect<'a, I>(states: I, now: DateTime<Utc>) -> Self
    where
        I: IntoIterator<Item = &'a CardMemoryState>,
    {
        let mut stats = Self::default();
        let mut ease_sum = 0.0;
        let mut interval_sum = 0.0;

        for state in states {
            stats.total_cards += 1;
            match state.status() {
                ReviewStatus::New => {
                    stats.new_cards += 1;
                    continue;
                }
                ReviewStatus::Learning => stats.learning_cards += 1,
                ReviewStatus::Reviewing => stats.reviewing_cards += 1,
                ReviewStatus::Lapsed => stats.lapsed_cards += 1,
            }
            if state.is_due(now) {
                stats.due_cards += 1;
            }
            ease_sum += state.easiness_factor;
            interval_sum += f64::from(state.interval);
        }

        let reviewed = stats.total_cards - stats.new_cards;
        if reviewed > 0 {
            stats.average_ease = ease_sum / reviewed as f64;
            stats.average_interval = interval_sum / reviewed as f64;
        }
        stats
    }
}
