//! Test helpers for board API integration tests.

use std::sync::Arc;

use axum_test::TestServer;
use serde_json::Value;

use anonboard::web::handlers::AppState;
use anonboard::web::router::{create_health_router, create_router};
use anonboard::{Database, NewReply, NewThread, ThreadStore};

/// Create a test server backed by a fresh in-memory database.
pub async fn create_test_server() -> (TestServer, Arc<Database>) {
    let db = Arc::new(
        Database::open_in_memory()
            .await
            .expect("Failed to create test database"),
    );

    let state = Arc::new(AppState::new(db.clone()));
    let router = create_router(state).merge(create_health_router());
    let server = TestServer::new(router).expect("Failed to create test server");

    (server, db)
}

/// Seed a thread with one reply on the "test" board.
///
/// Both use delete password "123". Returns (thread_id, reply_id).
pub async fn seed_thread(db: &Database) -> (i64, i64) {
    let store = ThreadStore::new(db.pool());
    let thread = store
        .create_thread(&NewThread::new("test", "Test Text", "123"))
        .await
        .expect("Failed to seed thread");
    let reply = store
        .append_reply(thread.id, &NewReply::new("Reply Text", "123"))
        .await
        .expect("Failed to seed reply");
    (thread.id, reply.id)
}

/// Assert that a JSON payload contains no moderation fields anywhere.
pub fn assert_redacted(value: &Value) {
    match value {
        Value::Object(map) => {
            assert!(
                !map.contains_key("delete_password"),
                "payload leaked delete_password: {value}"
            );
            assert!(
                !map.contains_key("reported"),
                "payload leaked reported: {value}"
            );
            for child in map.values() {
                assert_redacted(child);
            }
        }
        Value::Array(items) => {
            for item in items {
                assert_redacted(item);
            }
        }
        _ => {}
    }
}
