//! Error types for the chat proxy
//!
//! Every failure maps to a fixed plain-text body; details only go to the log.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::{debug, error};

/// Body sent for unparseable requests
pub const INVALID_BODY_MESSAGE: &str = "Invalid request body";

/// Body sent for questions that are too long or not strings
pub const INVALID_QUERY_MESSAGE: &str = "Query too long or invalid";

/// Body sent when the twin could not answer
pub const UPSTREAM_FAILURE_MESSAGE: &str = "Error processing request";

/// Errors surfaced by `POST /api/chat`
#[derive(Debug, Error)]
pub enum ChatError {
    /// Body is not JSON, or has no messages
    #[error("invalid request body: {0}")]
    InvalidBody(String),

    /// Last message content is not a string or exceeds the length limit
    #[error("query too long or invalid")]
    InvalidQuery,

    /// The twin service failed to answer
    #[error("upstream failure: {0}")]
    Upstream(#[from] UpstreamError),
}

impl ChatError {
    /// HTTP status for this error
    pub fn status(&self) -> StatusCode {
        match self {
            ChatError::InvalidBody(_) | ChatError::InvalidQuery => StatusCode::BAD_REQUEST,
            ChatError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Fixed plain-text body for this error
    pub fn message(&self) -> &'static str {
        match self {
            ChatError::InvalidBody(_) => INVALID_BODY_MESSAGE,
            ChatError::InvalidQuery => INVALID_QUERY_MESSAGE,
            ChatError::Upstream(_) => UPSTREAM_FAILURE_MESSAGE,
        }
    }
}

impl IntoResponse for ChatError {
    fn into_response(self) -> Response {
        match &self {
            ChatError::Upstream(e) => error!(error = %e, "digital twin request failed"),
            other => debug!(error = %other, "rejected chat request"),
        }
        (self.status(), self.message()).into_response()
    }
}

/// Failures while talking to the twin service
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Twin answered with a non-success status
    #[error("twin returned status {0}")]
    Status(u16),

    /// Connection or protocol failure
    #[error("transport error: {0}")]
    Transport(String),

    /// The event stream could not be parsed
    #[error("stream error: {0}")]
    Stream(String),

    /// The twin reported an error event
    #[error("twin reported error: {0}")]
    Remote(String),

    /// The request did not finish within the configured deadline
    #[error("request timed out")]
    Timeout,
}

impl From<reqwest::Error> for UpstreamError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            UpstreamError::Timeout
        } else {
            UpstreamError::Transport(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_are_bad_request() {
        let err = ChatError::InvalidBody("missing field `messages`".to_string());
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message(), "Invalid request body");

        assert_eq!(ChatError::InvalidQuery.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ChatError::InvalidQuery.message(), "Query too long or invalid");
    }

    #[test]
    fn test_upstream_errors_share_one_body() {
        for upstream in [
            UpstreamError::Status(503),
            UpstreamError::Transport("connection refused".to_string()),
            UpstreamError::Stream("bad utf-8".to_string()),
            UpstreamError::Remote("model overloaded".to_string()),
            UpstreamError::Timeout,
        ] {
            let err = ChatError::from(upstream);
            assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(err.message(), "Error processing request");
        }
    }

    #[test]
    fn test_into_response_status() {
        let response = ChatError::InvalidQuery.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
