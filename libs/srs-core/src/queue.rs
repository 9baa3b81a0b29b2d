//! Review queue assembly.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{CardMemoryState, ReviewStatus};

/// Daily caps applied when building a queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueLimits {
    pub new_limit: usize,
    pub review_limit: usize,
}

impl Default for QueueLimits {
    fn default() -> Self {
        Self {
            new_limit: 20,
            review_limit: 200,
        }
    }
}

/// A card selected for the queue.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueuedCard<K> {
    pub key: K,
    pub state: CardMemoryState,
    pub status: ReviewStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_review_date: Option<DateTime<Utc>>,
    pub days_overdue: i64,
}

/// Cards to study now, split into never-seen and due cards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewQueue<K> {
    pub new_cards: Vec<QueuedCard<K>>,
    pub review_cards: Vec<QueuedCard<K>>,
    pub new_remaining: usize,
    pub review_remaining: usize,
}

/// Build the queue for `now`.
///
/// New cards keep the order they were supplied in. Due cards are ordered by
/// due date, earliest first, with ties broken by key.
pub fn build_queue<K, I>(items: I, now: DateTime<Utc>, limits: QueueLimits) -> ReviewQueue<K>
where
    K: Ord,
    I: IntoIterator<Item = (K, CardMemoryState)>,
{
    let mut new_cards = Vec::new();
    let mut due = Vec::new();

    for (key, state) in items {
        if state.is_new() {
            if new_cards.len() < limits.new_limit {
                new_cards.push(queued(key, state, now));
            }
        } else if state.is_due(now) {
            due.push(queued(key, state, now));
        }
    }

    due.sort_by(|a, b| {
        a.next_review_date
            .cmp(&b.next_review_date)
            .then_with(|| a.key.cmp(&b.key))
    });
    due.truncate(limits.review_limit);

    ReviewQueue {
        new_remaining: limits.new_limit.saturating_sub(new_cards.len()),
        review_remaining: limits.review_limit.saturating_sub(due.len()),
        new_cards,
        review_cards: due,
    }
}

fn queued<K>(key: K, state: CardMemoryState, now: DateTime<Utc>) -> QueuedCard<K> {
    QueuedCard {
        status: state.status(),
        next_review_date: state.next_review_date(),
        days_overdue: state.days_overdue(now),
        key,
        state,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use pretty_assertions::assert_eq;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 10, 8, 0, 0).unwrap()
    }

    fn reviewed(days_ago: i64, interval: u32) -> CardMemoryState {
        CardMemoryState {
            easiness_factor: 2.5,
            repetition_number: 3,
            interval,
            last_review_date: Some(now() - Duration::days(days_ago)),
        }
    }

    #[test]
    fn splits_new_and_due_cards() {
        let items = vec![
            ("hola", CardMemoryState::new_card()),
            ("gato", reviewed(10, 6)),
            ("perro", reviewed(1, 6)),
        ];
        let queue = build_queue(items, now(), QueueLimits::default());

        let new_keys: Vec<&str> = queue.new_cards.iter().map(|c| c.key).collect();
        let due_keys: Vec<&str> = queue.review_cards.iter().map(|c| c.key).collect();
        assert_eq!(new_keys, vec!["hola"]);
        assert_eq!(due_keys, vec!["gato"]);
        assert_eq!(queue.review_cards[0].days_overdue, 4);
        assert_eq!(queue.review_cards[0].status, ReviewStatus::Reviewing);
    }

    #[test]
    fn most_overdue_first() {
        let items = vec![
            ("b", reviewed(7, 6)),
            ("c", reviewed(30, 6)),
            ("a", reviewed(7, 6)),
        ];
        let queue = build_queue(items, now(), QueueLimits::default());
        let keys: Vec<&str> = queue.review_cards.iter().map(|c| c.key).collect();
        assert_eq!(keys, vec!["c", "a", "b"]);
    }

    #[test]
    fn respects_limits() {
        let mut items: Vec<(u32, CardMemoryState)> = (0..5)
            .map(|i| (i, CardMemoryState::new_card()))
            .collect();
        items.extend((10..14).map(|i| (i, reviewed(20, 1))));

        let limits = QueueLimits {
            new_limit: 3,
            review_limit: 2,
        };
        let queue = build_queue(items, now(), limits);
        assert_eq!(queue.new_cards.len(), 3);
        assert_eq!(queue.review_cards.len(), 2);
        assert_eq!(queue.new_remaining, 0);
        assert_eq!(queue.review_remaining, 0);
    }

    #[test]
    fn empty_queue_reports_full_capacity() {
        let queue = build_queue(Vec::<(u32, CardMemoryState)>::new(), now(), QueueLimits::default());
        assert!(queue.new_cards.is_empty());
        assert!(queue.review_cards.is_empty());
        assert_eq!(queue.new_remaining, 20);
        assert_eq!(queue.review_remaining, 200);
    }
}
