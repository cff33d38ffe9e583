//! Thread model for anonboard.

use chrono::{DateTime, Utc};

use super::reply::Reply;

/// Thread entity: a top-level anonymous post on a named board.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Thread {
    /// Unique thread ID.
    pub id: i64,
    /// Board this thread belongs to.
    pub board: String,
    /// Thread body.
    pub text: String,
    /// Secret authorizing thread deletion.
    pub delete_password: String,
    /// Creation timestamp.
    pub created_on: DateTime<Utc>,
    /// Recency timestamp, advanced whenever a reply is appended.
    pub bumped_on: DateTime<Utc>,
    /// One-way moderation flag.
    pub reported: bool,
    /// Number of replies ever appended to this thread.
    pub reply_count: i64,
}

/// Data for creating a new thread.
#[derive(Debug, Clone)]
pub struct NewThread {
    /// Board to create the thread on.
    pub board: String,
    /// Thread body.
    pub text: String,
    /// Secret that will authorize deletion.
    pub delete_password: String,
}

impl NewThread {
    /// Create a new thread with required fields.
    pub fn new(
        board: impl Into<String>,
        text: impl Into<String>,
        delete_password: impl Into<String>,
    ) -> Self {
        Self {
            board: board.into(),
            text: text.into(),
            delete_password: delete_password.into(),
        }
    }
}

/// A thread together with a window of its replies, oldest first.
#[derive(Debug, Clone)]
pub struct ThreadWithReplies {
    /// The thread itself.
    pub thread: Thread,
    /// Replies in chronological order. May be truncated to the most
    /// recent window depending on the operation that produced it.
    pub replies: Vec<Reply>,
}
