//! Reply model for anonboard.

use chrono::{DateTime, Utc};

/// Text that replaces a reply body on soft-delete.
pub const DELETED_TEXT: &str = "[deleted]";

/// Reply entity, owned by exactly one thread.
///
/// Replies are never removed from their thread; a soft-delete rewrites
/// the text to [`DELETED_TEXT`] and leaves everything else in place.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Reply {
    /// Unique reply ID.
    pub id: i64,
    /// ID of the owning thread.
    pub thread_id: i64,
    /// Reply body.
    pub text: String,
    /// Secret authorizing the soft-delete.
    pub delete_password: String,
    /// Creation timestamp.
    pub created_on: DateTime<Utc>,
    /// One-way moderation flag.
    pub reported: bool,
}

/// Data for appending a new reply to a thread.
#[derive(Debug, Clone)]
pub struct NewReply {
    /// Reply body.
    pub text: String,
    /// Secret that will authorize the soft-delete.
    pub delete_password: String,
}

impl NewReply {
    /// Create a new reply with required fields.
    pub fn new(text: impl Into<String>, delete_password: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            delete_password: delete_password.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_reply() {
        let reply = NewReply::new("me too", "secret");
        assert_eq!(reply.text, "me too");
        assert_eq!(reply.delete_password, "secret");
    }

    #[test]
    fn test_deleted_sentinel() {
        assert_eq!(DELETED_TEXT, "[deleted]");
    }
}
