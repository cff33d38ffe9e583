//! Router configuration for the board API.

use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use super::handlers::{
    create_reply, create_thread, delete_reply, delete_thread, get_replies, list_threads,
    report_reply, report_thread, AppState,
};

/// Create the main API router.
pub fn create_router(state: Arc<AppState>) -> Router {
    let thread_routes = Router::new().route(
        "/:board",
        get(list_threads)
            .post(create_thread)
            .delete(delete_thread)
            .put(report_thread),
    );

    let reply_routes = Router::new().route(
        "/:board",
        get(get_replies)
            .post(create_reply)
            .delete(delete_reply)
            .put(report_reply),
    );

    Router::new()
        .nest("/api/threads", thread_routes)
        .nest("/api/replies", reply_routes)
        .fallback(not_found)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}

/// Create a health check router.
pub fn create_health_router() -> Router {
    Router::new().route("/health", get(health_check))
}

/// Health check handler.
async fn health_check() -> &'static str {
    "OK"
}

/// Fallback for unmatched routes.
async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not Found")
}
