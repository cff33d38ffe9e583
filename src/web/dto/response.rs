//! Response DTOs for the board API.
//!
//! Moderation fields (`delete_password`, `reported`) are redacted by
//! construction: the response types simply do not carry them, so no
//! serialization path can leak them.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::board::{Reply, ThreadWithReplies};

/// Reply as exposed to clients.
#[derive(Debug, Serialize)]
pub struct ReplyResponse {
    /// Reply ID.
    pub id: i64,
    /// Reply body (the soft-delete sentinel once redacted).
    pub text: String,
    /// Creation timestamp.
    pub created_on: DateTime<Utc>,
}

impl From<Reply> for ReplyResponse {
    fn from(reply: Reply) -> Self {
        Self {
            id: reply.id,
            text: reply.text,
            created_on: reply.created_on,
        }
    }
}

/// Thread with its reply window, as exposed to clients.
#[derive(Debug, Serialize)]
pub struct ThreadResponse {
    /// Thread ID.
    pub id: i64,
    /// Board the thread belongs to.
    pub board: String,
    /// Thread body.
    pub text: String,
    /// Creation timestamp.
    pub created_on: DateTime<Utc>,
    /// Recency timestamp.
    pub bumped_on: DateTime<Utc>,
    /// Number of replies ever appended.
    pub reply_count: i64,
    /// Replies in chronological order.
    pub replies: Vec<ReplyResponse>,
}

impl From<ThreadWithReplies> for ThreadResponse {
    fn from(full: ThreadWithReplies) -> Self {
        let thread = full.thread;
        Self {
            id: thread.id,
            board: thread.board,
            text: thread.text,
            created_on: thread.created_on,
            bumped_on: thread.bumped_on,
            reply_count: thread.reply_count,
            replies: full.replies.into_iter().map(ReplyResponse::from).collect(),
        }
    }
}
