//! Card state persistence.

mod error;

pub use error::StoreError;

use std::collections::{BTreeMap, HashMap};
use std::sync::RwLock;

use chrono::{DateTime, Utc};

use crate::models::{ReviewRecord, StoredCard};
use srs_core::CardMemoryState;

pub type Result<T> = std::result::Result<T, StoreError>;

/// Storage for per-user card states and their review log.
///
/// Writes are versioned: `save_card_state` only succeeds when the caller
/// passes the version it read, so two reviews of the same card cannot
/// silently overwrite each other. Version 0 means "no stored state".
pub trait CardStateStore: Send + Sync {
    fn get_card_state(&self, user_id: &str, card_id: &str) -> Result<Option<StoredCard>>;

    fn save_card_state(
        &self,
        user_id: &str,
        card_id: &str,
        state: &CardMemoryState,
        expected_version: u64,
        now: DateTime<Utc>,
    ) -> Result<StoredCard>;

    /// All cards of a user, ordered by card id.
    fn list_card_states(&self, user_id: &str) -> Result<Vec<StoredCard>>;

    /// Save the state produced by a review and append its log entry.
    ///
    /// Both writes happen or neither does, under the same version check as
    /// `save_card_state`.
    fn record_review(
        &self,
        state: &CardMemoryState,
        expected_version: u64,
        review: ReviewRecord,
    ) -> Result<StoredCard>;

    /// Review log of one card, oldest first.
    fn list_reviews(&self, user_id: &str, card_id: &str) -> Result<Vec<ReviewRecord>>;
}

type UserCards = BTreeMap<String, StoredCard>;

/// Process-local store backed by locked maps.
#[derive(Default)]
pub struct InMemoryStore {
    cards: RwLock<HashMap<String, UserCards>>,
    reviews: RwLock<Vec<ReviewRecord>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CardStateStore for InMemoryStore {
    fn get_card_state(&self, user_id: &str, card_id: &str) -> Result<Option<StoredCard>> {
        let cards = self.cards.read().map_err(|_| StoreError::Poisoned)?;
        Ok(cards
            .get(user_id)
            .and_then(|user| user.get(card_id))
            .cloned())
    }

    fn save_card_state(
        &self,
        user_id: &str,
        card_id: &str,
        state: &CardMemoryState,
        expected_version: u64,
        now: DateTime<Utc>,
    ) -> Result<StoredCard> {
        let mut cards = self.cards.write().map_err(|_| StoreError::Poisoned)?;
        let user = cards.entry(user_id.to_string()).or_default();
        let stored = next_version(user, user_id, card_id, state, expected_version, now)?;
        user.insert(card_id.to_string(), stored.clone());
        Ok(stored)
    }

    fn list_card_states(&self, user_id: &str) -> Result<Vec<StoredCard>> {
        let cards = self.cards.read().map_err(|_| StoreError::Poisoned)?;
        Ok(cards
            .get(user_id)
            .map(|user| user.values().cloned().collect())
            .unwrap_or_default())
    }

    fn record_review(
        &self,
        state: &CardMemoryState,
        expected_version: u64,
        review: ReviewRecord,
    ) -> Result<StoredCard> {
        // Lock order: cards, then reviews.
        let mut cards = self.cards.write().map_err(|_| StoreError::Poisoned)?;
        let mut reviews = self.reviews.write().map_err(|_| StoreError::Poisoned)?;

        let user = cards.entry(review.user_id.clone()).or_default();
        let stored = next_version(
            user,
            &review.user_id,
            &review.card_id,
            state,
            expected_version,
            review.reviewed_at,
        )?;
        user.insert(review.card_id.clone(), stored.clone());
        reviews.push(review);
        Ok(stored)
    }

    fn list_reviews(&self, user_id: &str, card_id: &str) -> Result<Vec<ReviewRecord>> {
        let reviews = self.reviews.read().map_err(|_| StoreError::Poisoned)?;
        Ok(reviews
            .iter()
            .filter(|r| r.user_id == user_id && r.card_id == card_id)
            .cloned()
            .collect())
    }
}

/// Check the caller's version and build the record that replaces it.
fn next_version(
    user: &UserCards,
    user_id: &str,
    card_id: &str,
    state: &CardMemoryState,
    expected_version: u64,
    now: DateTime<Utc>,
) -> Result<StoredCard> {
    let actual = user.get(card_id).map_or(0, |card| card.version);
    if actual != expected_version {
        tracing::warn!(user_id, card_id, expected_version, actual, "card state version conflict");
        return Err(StoreError::Conflict {
            expected: expected_version,
            actual,
        });
    }

    Ok(StoredCard {
        user_id: user_id.to_string(),
        card_id: card_id.to_string(),
        state: state.clone(),
        version: actual + 1,
        updated_at: now,
    })
}
