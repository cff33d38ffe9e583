//! Reply handlers for the board API.
//!
//! Missing ids are passed through as id 0, which never matches a row;
//! the store then reports the thread/reply distinction in the same
//! order a real lookup would.

use axum::extract::{Path, Query, State};
use axum::response::Redirect;
use axum::Json;
use std::sync::Arc;

use crate::board::{NewReply, ThreadStore};
use crate::web::dto::{
    CreateReplyRequest, DeleteReplyRequest, ReportReplyRequest, ThreadQuery, ThreadResponse,
};
use crate::web::error::ApiError;
use crate::web::handlers::AppState;
use crate::BoardError;

/// POST /api/replies/:board - Append a reply, then redirect into the
/// thread.
///
/// Field presence is checked before the thread lookup, so a request
/// missing both text and thread id gets the validation message.
pub async fn create_reply(
    State(state): State<Arc<AppState>>,
    Path(board): Path<String>,
    Json(req): Json<CreateReplyRequest>,
) -> Result<Redirect, ApiError> {
    let new_reply = NewReply::new(
        req.text.unwrap_or_default(),
        req.delete_password.unwrap_or_default(),
    );
    if new_reply.text.is_empty() || new_reply.delete_password.is_empty() {
        return Err(ApiError::bad_request(
            "need to specify text and delete_password",
        ));
    }
    let thread_id = req.thread_id.unwrap_or(0);

    let store = ThreadStore::new(state.db.pool());
    match store.append_reply(thread_id, &new_reply).await {
        Ok(_) => Ok(Redirect::to(&format!("/b/{board}/{thread_id}"))),
        Err(BoardError::NotFound(_)) => Err(ApiError::bad_request("thread not found")),
        Err(BoardError::Validation(_)) => Err(ApiError::bad_request(
            "need to specify text and delete_password",
        )),
        Err(e) => {
            tracing::error!("Failed to append reply: {}", e);
            Err(ApiError::internal())
        }
    }
}

/// GET /api/replies/:board?thread_id= - Full thread with all replies.
pub async fn get_replies(
    State(state): State<Arc<AppState>>,
    Path(_board): Path<String>,
    Query(query): Query<ThreadQuery>,
) -> Result<Json<ThreadResponse>, ApiError> {
    let thread_id = query.thread_id.unwrap_or(0);

    let store = ThreadStore::new(state.db.pool());
    match store.get_thread_with_replies(thread_id).await {
        Ok(full) => Ok(Json(ThreadResponse::from(full))),
        Err(BoardError::NotFound(_)) => Err(ApiError::bad_request("thread not found")),
        Err(e) => {
            tracing::error!("Failed to get thread: {}", e);
            Err(ApiError::internal())
        }
    }
}

/// DELETE /api/replies/:board - Soft-delete a reply.
///
/// Not-found and wrong-password outcomes are reported in the body with
/// status 200.
pub async fn delete_reply(
    State(state): State<Arc<AppState>>,
    Path(_board): Path<String>,
    Json(req): Json<DeleteReplyRequest>,
) -> Result<&'static str, ApiError> {
    let thread_id = req.thread_id.unwrap_or(0);
    let reply_id = req.reply_id.unwrap_or(0);
    let password = req.delete_password.unwrap_or_default();

    let store = ThreadStore::new(state.db.pool());
    match store.delete_reply(thread_id, reply_id, &password).await {
        Ok(()) => Ok("success"),
        Err(e @ (BoardError::NotFound(_) | BoardError::IncorrectPassword)) => {
            Err(ApiError::ok_text(e.to_string()))
        }
        Err(e) => {
            tracing::error!("Failed to delete reply: {}", e);
            Err(ApiError::internal())
        }
    }
}

/// PUT /api/replies/:board - Flag a reply for moderator review.
pub async fn report_reply(
    State(state): State<Arc<AppState>>,
    Path(_board): Path<String>,
    Json(req): Json<ReportReplyRequest>,
) -> Result<&'static str, ApiError> {
    let thread_id = req.thread_id.unwrap_or(0);
    let reply_id = req.reply_id.unwrap_or(0);

    let store = ThreadStore::new(state.db.pool());
    match store.report_reply(thread_id, reply_id).await {
        Ok(()) => Ok("success"),
        Err(e @ BoardError::NotFound(_)) => Err(ApiError::ok_text(e.to_string())),
        Err(e) => {
            tracing::error!("Failed to report reply: {}", e);
            Err(ApiError::internal())
        }
    }
}
