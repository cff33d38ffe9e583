//! Board module for anonboard.
//!
//! Threads and replies with the board's mutation rules:
//! - recency-based ordering ("bumping") driven by reply appends
//! - reply counting
//! - one-way report flags
//! - password-gated deletion (hard for threads, soft for replies)

mod reply;
mod store;
mod thread;

pub use reply::{NewReply, Reply, DELETED_TEXT};
pub use store::{ThreadStore, DEFAULT_REPLY_WINDOW, DEFAULT_THREAD_LIMIT};
pub use thread::{NewThread, Thread, ThreadWithReplies};
