//! Integration tests for the thread endpoints.

mod common;

use axum::http::StatusCode;
use serde_json::{json, Value};

use anonboard::{NewThread, ThreadStore};
use common::{assert_redacted, create_test_server, seed_thread};

// ============================================================================
// POST /api/threads/:board
// ============================================================================

#[tokio::test]
async fn test_post_thread_with_required_data() {
    let (server, _db) = create_test_server().await;

    let response = server
        .post("/api/threads/test")
        .json(&json!({ "text": "Test Thread", "delete_password": "123" }))
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/b/test");
}

#[tokio::test]
async fn test_post_thread_without_text() {
    let (server, _db) = create_test_server().await;

    let response = server
        .post("/api/threads/test")
        .json(&json!({ "delete_password": "123" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.text(), "need to specify text and delete password");
}

#[tokio::test]
async fn test_post_thread_without_delete_password() {
    let (server, _db) = create_test_server().await;

    let response = server
        .post("/api/threads/test")
        .json(&json!({ "text": "Test Thread" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.text(), "need to specify text and delete password");
}

// ============================================================================
// GET /api/threads/:board
// ============================================================================

#[tokio::test]
async fn test_get_threads_of_board() {
    let (server, db) = create_test_server().await;
    seed_thread(&db).await;

    let response = server.get("/api/threads/test").await;

    response.assert_status_ok();

    let body: Value = response.json();
    let threads = body.as_array().unwrap();
    assert_eq!(threads.len(), 1);

    let thread = &threads[0];
    assert_eq!(thread["text"], "Test Text");
    assert_eq!(thread["board"], "test");
    assert_eq!(thread["reply_count"], 1);
    assert!(thread["id"].is_i64());
    assert_eq!(thread["replies"].as_array().unwrap().len(), 1);

    assert_redacted(&body);
}

#[tokio::test]
async fn test_get_threads_empty_board() {
    let (server, _db) = create_test_server().await;

    let response = server.get("/api/threads/empty").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_get_threads_limit_and_reply_window() {
    let (server, db) = create_test_server().await;

    let store = ThreadStore::new(db.pool());
    for i in 0..12 {
        store
            .create_thread(&NewThread::new("test", format!("thread {i}"), "pw"))
            .await
            .unwrap();
    }
    let (thread_id, _) = seed_thread(&db).await;
    for i in 0..4 {
        server
            .post("/api/replies/test")
            .json(&json!({
                "thread_id": thread_id,
                "text": format!("reply {i}"),
                "delete_password": "pw"
            }))
            .await
            .assert_status(StatusCode::SEE_OTHER);
    }

    let response = server.get("/api/threads/test").await;
    response.assert_status_ok();

    let body: Value = response.json();
    let threads = body.as_array().unwrap();
    assert_eq!(threads.len(), 10);

    // The seeded thread was bumped most recently and leads the list,
    // trimmed to its three most recent replies in order.
    let busy = &threads[0];
    assert_eq!(busy["id"], thread_id);
    assert_eq!(busy["reply_count"], 5);
    let replies = busy["replies"].as_array().unwrap();
    assert_eq!(replies.len(), 3);
    assert_eq!(replies[0]["text"], "reply 1");
    assert_eq!(replies[2]["text"], "reply 3");

    assert_redacted(&body);
}

// ============================================================================
// DELETE /api/threads/:board
// ============================================================================

#[tokio::test]
async fn test_delete_thread_without_thread_id() {
    let (server, _db) = create_test_server().await;

    let response = server.delete("/api/threads/test").json(&json!({})).await;

    response.assert_status_ok();
    assert_eq!(response.text(), "thread not found");
}

#[tokio::test]
async fn test_delete_thread_without_delete_password() {
    let (server, db) = create_test_server().await;
    let (thread_id, _) = seed_thread(&db).await;

    let response = server
        .delete("/api/threads/test")
        .json(&json!({ "thread_id": thread_id }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.text(), "incorrect password");
}

#[tokio::test]
async fn test_delete_thread_wrong_password_leaves_thread() {
    let (server, db) = create_test_server().await;
    let (thread_id, _) = seed_thread(&db).await;

    let response = server
        .delete("/api/threads/test")
        .json(&json!({ "thread_id": thread_id, "delete_password": "wrong" }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.text(), "incorrect password");

    let body: Value = server.get("/api/threads/test").await.json();
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_delete_thread_with_correct_data() {
    let (server, db) = create_test_server().await;
    let (thread_id, _) = seed_thread(&db).await;

    let response = server
        .delete("/api/threads/test")
        .json(&json!({ "thread_id": thread_id, "delete_password": "123" }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.text(), "success");

    let body: Value = server.get("/api/threads/test").await.json();
    assert_eq!(body.as_array().unwrap().len(), 0);
}

// ============================================================================
// PUT /api/threads/:board
// ============================================================================

#[tokio::test]
async fn test_report_thread_without_thread_id() {
    let (server, _db) = create_test_server().await;

    let response = server.put("/api/threads/test").json(&json!({})).await;

    response.assert_status_ok();
    assert_eq!(response.text(), "thread not found");
}

#[tokio::test]
async fn test_report_thread_is_idempotent() {
    let (server, db) = create_test_server().await;
    let (thread_id, _) = seed_thread(&db).await;

    let response = server
        .put("/api/threads/test")
        .json(&json!({ "thread_id": thread_id }))
        .await;
    response.assert_status_ok();
    assert_eq!(response.text(), "success");

    // Reporting an already-reported thread is not an error
    let response = server
        .put("/api/threads/test")
        .json(&json!({ "thread_id": thread_id }))
        .await;
    response.assert_status_ok();
    assert_eq!(response.text(), "success");
}

// ============================================================================
// Misc routes
// ============================================================================

#[tokio::test]
async fn test_unmatched_route_is_404() {
    let (server, _db) = create_test_server().await;

    let response = server.get("/api/nope").await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.text(), "Not Found");
}

#[tokio::test]
async fn test_health_check() {
    let (server, _db) = create_test_server().await;

    let response = server.get("/health").await;

    response.assert_status_ok();
    assert_eq!(response.text(), "OK");
}
