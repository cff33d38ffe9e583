//! Web API module for anonboard.
//!
//! HTTP surface over the thread store: board thread listings, thread
//! and reply creation, and the password-gated moderation operations.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod server;

pub use error::ApiError;
pub use router::create_router;
pub use server::WebServer;
