//! anonboard - Anonymous Message Board Backend
//!
//! A minimal message-board HTTP backend: anonymous threads and replies
//! scoped to named boards, with password-gated deletion, soft-delete of
//! replies, and one-way report flags for moderation.

pub mod board;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod web;

pub use board::{
    NewReply, NewThread, Reply, Thread, ThreadStore, ThreadWithReplies, DEFAULT_REPLY_WINDOW,
    DEFAULT_THREAD_LIMIT, DELETED_TEXT,
};
pub use config::Config;
pub use db::{Database, DbPool};
pub use error::{BoardError, Result};
pub use web::WebServer;
