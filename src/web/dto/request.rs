//! Request DTOs for the board API.
//!
//! Every field is optional so that presence checks happen in the
//! handlers and produce the board's literal error messages instead of
//! a deserialization rejection.

use serde::Deserialize;

/// Thread creation request (POST /api/threads/:board).
#[derive(Debug, Deserialize)]
pub struct CreateThreadRequest {
    /// Thread body.
    #[serde(default)]
    pub text: Option<String>,
    /// Secret authorizing later deletion.
    #[serde(default)]
    pub delete_password: Option<String>,
}

/// Thread deletion request (DELETE /api/threads/:board).
#[derive(Debug, Deserialize)]
pub struct DeleteThreadRequest {
    /// Target thread.
    #[serde(default)]
    pub thread_id: Option<i64>,
    /// Secret to compare against the stored one.
    #[serde(default)]
    pub delete_password: Option<String>,
}

/// Thread report request (PUT /api/threads/:board).
#[derive(Debug, Deserialize)]
pub struct ReportThreadRequest {
    /// Target thread.
    #[serde(default)]
    pub thread_id: Option<i64>,
}

/// Reply creation request (POST /api/replies/:board).
#[derive(Debug, Deserialize)]
pub struct CreateReplyRequest {
    /// Thread to reply to.
    #[serde(default)]
    pub thread_id: Option<i64>,
    /// Reply body.
    #[serde(default)]
    pub text: Option<String>,
    /// Secret authorizing a later soft-delete.
    #[serde(default)]
    pub delete_password: Option<String>,
}

/// Thread lookup query (GET /api/replies/:board?thread_id=...).
#[derive(Debug, Deserialize)]
pub struct ThreadQuery {
    /// Thread to fetch.
    #[serde(default)]
    pub thread_id: Option<i64>,
}

/// Reply soft-delete request (DELETE /api/replies/:board).
#[derive(Debug, Deserialize)]
pub struct DeleteReplyRequest {
    /// Owning thread.
    #[serde(default)]
    pub thread_id: Option<i64>,
    /// Target reply.
    #[serde(default)]
    pub reply_id: Option<i64>,
    /// Secret to compare against the stored one.
    #[serde(default)]
    pub delete_password: Option<String>,
}

/// Reply report request (PUT /api/replies/:board).
#[derive(Debug, Deserialize)]
pub struct ReportReplyRequest {
    /// Owning thread.
    #[serde(default)]
    pub thread_id: Option<i64>,
    /// Target reply.
    #[serde(default)]
    pub reply_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_deserialize_to_none() {
        let req: CreateThreadRequest = serde_json::from_str("{}").unwrap();
        assert!(req.text.is_none());
        assert!(req.delete_password.is_none());

        let req: DeleteReplyRequest = serde_json::from_str(r#"{"thread_id": 7}"#).unwrap();
        assert_eq!(req.thread_id, Some(7));
        assert!(req.reply_id.is_none());
        assert!(req.delete_password.is_none());
    }

    #[test]
    fn test_full_request_deserializes() {
        let req: CreateReplyRequest = serde_json::from_str(
            r#"{"thread_id": 3, "text": "hi", "delete_password": "pw"}"#,
        )
        .unwrap();
        assert_eq!(req.thread_id, Some(3));
        assert_eq!(req.text.as_deref(), Some("hi"));
        assert_eq!(req.delete_password.as_deref(), Some("pw"));
    }
}
