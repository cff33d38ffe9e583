//! API error handling for the board contract.
//!
//! Every failure is reported as a short plain-text body. Moderation
//! outcomes (not found, incorrect password) ship with status 200;
//! creation-validation failures and missing threads on the reply paths
//! use 400. The split is part of the observed contract and is kept
//! as-is.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Plain-text API error.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    /// Create an error with an explicit status.
    pub fn text(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Failure outcome reported inline with status 200.
    pub fn ok_text(message: impl Into<String>) -> Self {
        Self::text(StatusCode::OK, message)
    }

    /// Create a bad request (400) error.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::text(StatusCode::BAD_REQUEST, message)
    }

    /// Create a generic internal server error. Store connectivity
    /// failures end up here; details go to the log, not the client.
    pub fn internal() -> Self {
        Self::text(StatusCode::INTERNAL_SERVER_ERROR, "server error")
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, self.message).into_response()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.status, self.message)
    }
}

impl std::error::Error for ApiError {}
