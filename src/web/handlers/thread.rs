//! Thread handlers for the board API.

use axum::extract::{Path, State};
use axum::response::Redirect;
use axum::Json;
use std::sync::Arc;

use crate::board::{NewThread, ThreadStore};
use crate::web::dto::{
    CreateThreadRequest, DeleteThreadRequest, ReportThreadRequest, ThreadResponse,
};
use crate::web::error::ApiError;
use crate::web::handlers::AppState;
use crate::BoardError;

/// GET /api/threads/:board - List recent threads with a reply window.
pub async fn list_threads(
    State(state): State<Arc<AppState>>,
    Path(board): Path<String>,
) -> Result<Json<Vec<ThreadResponse>>, ApiError> {
    let store = ThreadStore::new(state.db.pool());
    let threads = store
        .list_recent(&board, state.thread_limit, state.reply_window)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list threads: {}", e);
            ApiError::internal()
        })?;

    Ok(Json(threads.into_iter().map(ThreadResponse::from).collect()))
}

/// POST /api/threads/:board - Create a thread, then redirect to the
/// board page.
pub async fn create_thread(
    State(state): State<Arc<AppState>>,
    Path(board): Path<String>,
    Json(req): Json<CreateThreadRequest>,
) -> Result<Redirect, ApiError> {
    let new_thread = NewThread::new(
        board.clone(),
        req.text.unwrap_or_default(),
        req.delete_password.unwrap_or_default(),
    );

    let store = ThreadStore::new(state.db.pool());
    match store.create_thread(&new_thread).await {
        Ok(_) => Ok(Redirect::to(&format!("/b/{board}"))),
        Err(BoardError::Validation(_)) => Err(ApiError::bad_request(
            "need to specify text and delete password",
        )),
        Err(e) => {
            tracing::error!("Failed to create thread: {}", e);
            Err(ApiError::internal())
        }
    }
}

/// DELETE /api/threads/:board - Permanently delete a thread.
///
/// Not-found and wrong-password outcomes are reported in the body with
/// status 200.
pub async fn delete_thread(
    State(state): State<Arc<AppState>>,
    Path(_board): Path<String>,
    Json(req): Json<DeleteThreadRequest>,
) -> Result<&'static str, ApiError> {
    // A missing id never matches a row, so the store reports the
    // not-found outcome.
    let thread_id = req.thread_id.unwrap_or(0);
    let password = req.delete_password.unwrap_or_default();

    let store = ThreadStore::new(state.db.pool());
    match store.delete_thread(thread_id, &password).await {
        Ok(()) => Ok("success"),
        Err(e @ (BoardError::NotFound(_) | BoardError::IncorrectPassword)) => {
            Err(ApiError::ok_text(e.to_string()))
        }
        Err(e) => {
            tracing::error!("Failed to delete thread: {}", e);
            Err(ApiError::internal())
        }
    }
}

/// PUT /api/threads/:board - Flag a thread for moderator review.
pub async fn report_thread(
    State(state): State<Arc<AppState>>,
    Path(_board): Path<String>,
    Json(req): Json<ReportThreadRequest>,
) -> Result<&'static str, ApiError> {
    let thread_id = req.thread_id.unwrap_or(0);

    let store = ThreadStore::new(state.db.pool());
    match store.report_thread(thread_id).await {
        Ok(()) => Ok("success"),
        Err(e @ BoardError::NotFound(_)) => Err(ApiError::ok_text(e.to_string())),
        Err(e) => {
            tracing::error!("Failed to report thread: {}", e);
            Err(ApiError::internal())
        }
    }
}
