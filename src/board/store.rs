//! Thread store for anonboard.
//!
//! All durable board state is mutated through this store. Operations
//! that touch a single thread are atomic: counters and timestamps are
//! updated with single-statement increments/sets, and the operations
//! that must locate an element first (thread delete, reply soft-delete
//! and report) run inside one transaction.

use chrono::Utc;

use super::reply::{NewReply, Reply, DELETED_TEXT};
use super::thread::{NewThread, Thread, ThreadWithReplies};
use crate::db::DbPool;
use crate::{BoardError, Result};

/// Default number of threads returned by [`ThreadStore::list_recent`].
pub const DEFAULT_THREAD_LIMIT: i64 = 10;

/// Default number of most recent replies included per listed thread.
pub const DEFAULT_REPLY_WINDOW: i64 = 3;

const THREAD_COLUMNS: &str =
    "id, board, text, delete_password, created_on, bumped_on, reported, reply_count";
const REPLY_COLUMNS: &str = "id, thread_id, text, delete_password, created_on, reported";

/// Store for thread and reply mutations.
pub struct ThreadStore<'a> {
    pool: &'a DbPool,
}

impl<'a> ThreadStore<'a> {
    /// Create a new ThreadStore with the given pool reference.
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    /// Create a new thread on a board.
    ///
    /// `created_on` and `bumped_on` start equal; `reply_count` starts
    /// at zero. Fails with a validation error if `text` or
    /// `delete_password` is empty.
    pub async fn create_thread(&self, new_thread: &NewThread) -> Result<Thread> {
        if new_thread.text.is_empty() || new_thread.delete_password.is_empty() {
            return Err(BoardError::Validation(
                "text and delete_password are required".to_string(),
            ));
        }

        let now = Utc::now();
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO threads (board, text, delete_password, created_on, bumped_on)
             VALUES ($1, $2, $3, $4, $5) RETURNING id",
        )
        .bind(&new_thread.board)
        .bind(&new_thread.text)
        .bind(&new_thread.delete_password)
        .bind(now)
        .bind(now)
        .fetch_one(self.pool)
        .await?;

        self.get_thread(id)
            .await?
            .ok_or_else(|| BoardError::NotFound("thread".to_string()))
    }

    /// Get a bare thread by ID.
    pub async fn get_thread(&self, id: i64) -> Result<Option<Thread>> {
        let query = format!("SELECT {THREAD_COLUMNS} FROM threads WHERE id = $1");
        let thread = sqlx::query_as::<_, Thread>(&query)
            .bind(id)
            .fetch_optional(self.pool)
            .await?;
        Ok(thread)
    }

    /// List the most recently bumped threads on a board.
    ///
    /// Returns up to `limit` threads sorted by `bumped_on` descending,
    /// each carrying its `reply_window` most recent replies in
    /// chronological order. An unknown board yields an empty list.
    pub async fn list_recent(
        &self,
        board: &str,
        limit: i64,
        reply_window: i64,
    ) -> Result<Vec<ThreadWithReplies>> {
        let query = format!(
            "SELECT {THREAD_COLUMNS} FROM threads
             WHERE board = $1 ORDER BY bumped_on DESC, id DESC LIMIT $2"
        );
        let threads = sqlx::query_as::<_, Thread>(&query)
            .bind(board)
            .bind(limit)
            .fetch_all(self.pool)
            .await?;

        let window_query = format!(
            "SELECT {REPLY_COLUMNS} FROM replies
             WHERE thread_id = $1 ORDER BY id DESC LIMIT $2"
        );
        let mut result = Vec::with_capacity(threads.len());
        for thread in threads {
            let mut replies = sqlx::query_as::<_, Reply>(&window_query)
                .bind(thread.id)
                .bind(reply_window)
                .fetch_all(self.pool)
                .await?;
            // Window selects newest-first; present oldest-first.
            replies.reverse();
            result.push(ThreadWithReplies { thread, replies });
        }

        Ok(result)
    }

    /// Get a thread with all of its replies in chronological order.
    pub async fn get_thread_with_replies(&self, thread_id: i64) -> Result<ThreadWithReplies> {
        let thread = self
            .get_thread(thread_id)
            .await?
            .ok_or_else(|| BoardError::NotFound("thread".to_string()))?;

        let query = format!(
            "SELECT {REPLY_COLUMNS} FROM replies WHERE thread_id = $1 ORDER BY id ASC"
        );
        let replies = sqlx::query_as::<_, Reply>(&query)
            .bind(thread_id)
            .fetch_all(self.pool)
            .await?;

        Ok(ThreadWithReplies { thread, replies })
    }

    /// Permanently delete a thread and its replies.
    ///
    /// The stored delete password must match exactly.
    pub async fn delete_thread(&self, thread_id: i64, password: &str) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        let stored: Option<String> =
            sqlx::query_scalar("SELECT delete_password FROM threads WHERE id = $1")
                .bind(thread_id)
                .fetch_optional(&mut *tx)
                .await?;
        let stored = stored.ok_or_else(|| BoardError::NotFound("thread".to_string()))?;

        if stored != password {
            return Err(BoardError::IncorrectPassword);
        }

        // Replies go with the thread via ON DELETE CASCADE.
        sqlx::query("DELETE FROM threads WHERE id = $1")
            .bind(thread_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(())
    }

    /// Flag a thread for moderator review. Idempotent.
    pub async fn report_thread(&self, thread_id: i64) -> Result<()> {
        let result = sqlx::query("UPDATE threads SET reported = 1 WHERE id = $1")
            .bind(thread_id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(BoardError::NotFound("thread".to_string()));
        }
        Ok(())
    }

    /// Append a reply to a thread.
    ///
    /// Bumps the thread and increments its reply counter in a single
    /// atomic update, then inserts the reply; both run in one
    /// transaction so a concurrent writer cannot observe the bump
    /// without the reply.
    pub async fn append_reply(&self, thread_id: i64, new_reply: &NewReply) -> Result<Reply> {
        if new_reply.text.is_empty() || new_reply.delete_password.is_empty() {
            return Err(BoardError::Validation(
                "text and delete_password are required".to_string(),
            ));
        }

        let now = Utc::now();
        let mut tx = self.pool.begin().await?;

        let bumped = sqlx::query(
            "UPDATE threads SET bumped_on = $1, reply_count = reply_count + 1 WHERE id = $2",
        )
        .bind(now)
        .bind(thread_id)
        .execute(&mut *tx)
        .await?;

        if bumped.rows_affected() == 0 {
            return Err(BoardError::NotFound("thread".to_string()));
        }

        let id: i64 = sqlx::query_scalar(
            "INSERT INTO replies (thread_id, text, delete_password, created_on)
             VALUES ($1, $2, $3, $4) RETURNING id",
        )
        .bind(thread_id)
        .bind(&new_reply.text)
        .bind(&new_reply.delete_password)
        .bind(now)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(Reply {
            id,
            thread_id,
            text: new_reply.text.clone(),
            delete_password: new_reply.delete_password.clone(),
            created_on: now,
            reported: false,
        })
    }

    /// Flag a reply for moderator review. Idempotent.
    ///
    /// A missing thread and a missing reply are reported as distinct
    /// not-found errors.
    pub async fn report_reply(&self, thread_id: i64, reply_id: i64) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        let thread_exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM threads WHERE id = $1)")
                .bind(thread_id)
                .fetch_one(&mut *tx)
                .await?;
        if !thread_exists {
            return Err(BoardError::NotFound("thread".to_string()));
        }

        let result = sqlx::query("UPDATE replies SET reported = 1 WHERE id = $1 AND thread_id = $2")
            .bind(reply_id)
            .bind(thread_id)
            .execute(&mut *tx)
            .await?;
        if result.rows_affected() == 0 {
            return Err(BoardError::NotFound("reply".to_string()));
        }

        tx.commit().await?;
        Ok(())
    }

    /// Soft-delete a reply: its text becomes [`DELETED_TEXT`].
    ///
    /// Everything else (id, timestamps, report flag, the thread's
    /// reply counter) is left untouched.
    pub async fn delete_reply(
        &self,
        thread_id: i64,
        reply_id: i64,
        password: &str,
    ) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        let thread_exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM threads WHERE id = $1)")
                .bind(thread_id)
                .fetch_one(&mut *tx)
                .await?;
        if !thread_exists {
            return Err(BoardError::NotFound("thread".to_string()));
        }

        let stored: Option<String> = sqlx::query_scalar(
            "SELECT delete_password FROM replies WHERE id = $1 AND thread_id = $2",
        )
        .bind(reply_id)
        .bind(thread_id)
        .fetch_optional(&mut *tx)
        .await?;
        let stored = stored.ok_or_else(|| BoardError::NotFound("reply".to_string()))?;

        if stored != password {
            return Err(BoardError::IncorrectPassword);
        }

        sqlx::query("UPDATE replies SET text = $1 WHERE id = $2")
            .bind(DELETED_TEXT)
            .bind(reply_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(())
    }
}
