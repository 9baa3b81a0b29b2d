//! Common test utilities and fixtures for integration tests.
//!
//! Tests run the real router against an in-memory store and a manually
//! advanced clock, so no external services are needed.

#![allow(dead_code)]

pub mod fixtures;

use std::sync::{Arc, RwLock};

use axum::Router;
use axum_test::TestServer;
use chrono::{DateTime, Duration, TimeZone, Utc};

use lingo_review_backend::db::{CardStateStore, InMemoryStore};
use lingo_review_backend::{app, AppState};
use srs_core::Clock;

/// Clock that only moves when a test advances it.
pub struct ManualClock {
    now: RwLock<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: RwLock::new(start),
        }
    }

    pub fn advance_days(&self, days: i64) {
        let mut now = self.now.write().unwrap();
        *now += Duration::days(days);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.read().unwrap()
    }
}

/// Test context holding the shared store and clock behind the router.
pub struct TestContext {
    pub store: Arc<InMemoryStore>,
    pub clock: Arc<ManualClock>,
    app: Router,
}

impl TestContext {
    /// Create a new test context starting at [`start_time`].
    pub fn new() -> Self {
        let store = Arc::new(InMemoryStore::new());
        let clock = Arc::new(ManualClock::new(start_time()));

        let state = AppState::new(
            "sm2",
            store.clone() as Arc<dyn CardStateStore>,
            clock.clone() as Arc<dyn Clock>,
        )
        .expect("sm2 should be available");

        Self {
            store,
            clock,
            app: app(state),
        }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }

    pub fn server(&self) -> TestServer {
        TestServer::new(self.router()).unwrap()
    }
}

/// Instant every test context starts at.
pub fn start_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 9, 2, 8, 30, 0).unwrap()
}

/// Path of a card endpoint.
pub fn card_path(user_id: &str, card_id: &str) -> String {
    format!("/api/users/{}/cards/{}", user_id, card_id)
}
