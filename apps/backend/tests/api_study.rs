//! Study queue and statistics API tests.

mod common;

use axum::http::StatusCode;
use axum_test::TestServer;

use common::fixtures;
use common::{card_path, TestContext};

async fn review(server: &TestServer, user_id: &str, card_id: &str, quality: i64) {
    server
        .post(&format!("{}/review", card_path(user_id, card_id)))
        .json(&fixtures::submit_review_request(quality))
        .await
        .assert_status_ok();
}

#[tokio::test]
async fn test_study_queue_empty() {
    let ctx = TestContext::new();
    let server = ctx.server();

    let response = server.get("/api/users/ana/queue").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["new_cards"].as_array().unwrap().len(), 0);
    assert_eq!(body["review_cards"].as_array().unwrap().len(), 0);
    assert_eq!(body["new_remaining"], 20);
    assert_eq!(body["review_remaining"], 200);
}

#[tokio::test]
async fn test_study_queue_with_new_and_due_cards() {
    let ctx = TestContext::new();
    let server = ctx.server();

    for card in ["uno", "dos", "tres"] {
        server.post(&card_path("ana", card)).await;
    }
    review(&server, "ana", "cuatro", 4).await;
    review(&server, "ana", "cinco", 4).await;
    review(&server, "ana", "cinco", 4).await;

    // "cuatro" is due after one day, "cinco" only after six.
    ctx.clock.advance_days(2);

    let response = server.get("/api/users/ana/queue").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    let new_keys: Vec<&str> = body["new_cards"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["key"].as_str().unwrap())
        .collect();
    assert_eq!(new_keys, vec!["dos", "tres", "uno"]);

    let review_cards = body["review_cards"].as_array().unwrap();
    assert_eq!(review_cards.len(), 1);
    assert_eq!(review_cards[0]["key"], "cuatro");
    assert_eq!(review_cards[0]["days_overdue"], 1);
    assert_eq!(review_cards[0]["status"], "learning");
}

#[tokio::test]
async fn test_study_queue_respects_limits() {
    let ctx = TestContext::new();
    let server = ctx.server();

    for card in ["a", "b", "c", "d"] {
        server.post(&card_path("ana", card)).await;
    }

    let response = server.get("/api/users/ana/queue?new_limit=2").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["new_cards"].as_array().unwrap().len(), 2);
    assert_eq!(body["new_remaining"], 0);
}

#[tokio::test]
async fn test_study_queue_rejects_huge_limit() {
    let ctx = TestContext::new();
    let server = ctx.server();

    let response = server.get("/api/users/ana/queue?review_limit=5000").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "bad_request");
}

#[tokio::test]
async fn test_stats_by_status() {
    let ctx = TestContext::new();
    let server = ctx.server();

    server.post(&card_path("ana", "nuevo")).await;
    review(&server, "ana", "aprendiendo", 5).await;
    for _ in 0..3 {
        review(&server, "ana", "maduro", 4).await;
    }
    review(&server, "ana", "olvidado", 4).await;
    review(&server, "ana", "olvidado", 0).await;

    let response = server.get("/api/users/ana/stats").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["total_cards"], 4);
    assert_eq!(body["new_cards"], 1);
    assert_eq!(body["learning_cards"], 1);
    assert_eq!(body["reviewing_cards"], 1);
    assert_eq!(body["lapsed_cards"], 1);
    assert_eq!(body["due_cards"], 0);
}
