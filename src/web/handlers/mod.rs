//! API handlers for the board.

pub mod reply;
pub mod thread;

pub use reply::*;
pub use thread::*;

use std::sync::Arc;

use crate::board::{DEFAULT_REPLY_WINDOW, DEFAULT_THREAD_LIMIT};
use crate::db::Database;

/// Shared state for API handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Database handle.
    pub db: Arc<Database>,
    /// Maximum number of threads returned per board listing.
    pub thread_limit: i64,
    /// Number of most recent replies included per listed thread.
    pub reply_window: i64,
}

impl AppState {
    /// Create application state with default listing windows.
    pub fn new(db: Arc<Database>) -> Self {
        Self {
            db,
            thread_limit: DEFAULT_THREAD_LIMIT,
            reply_window: DEFAULT_REPLY_WINDOW,
        }
    }

    /// Override the listing windows.
    pub fn with_windows(mut self, thread_limit: i64, reply_window: i64) -> Self {
        self.thread_limit = thread_limit;
        self.reply_window = reply_window;
        self
    }
}
