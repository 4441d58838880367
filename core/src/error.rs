//! Error types for the cloud API client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because callers frequently distinguish
//! "the resource does not exist" from "the server returned an unexpected
//! status." All other non-2xx responses land in `Http` with the status, the
//! provider's error code and message when the body carried its error
//! envelope, and the raw body for debugging.
//!
//! `Transport` is reserved for failures that never produced a response
//! (connection refused, timeouts). Its display is the bare message so that a
//! failure injected by a test harness surfaces with exactly the text it was
//! seeded with.

use thiserror::Error;

/// Result alias used throughout the client.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors returned by the client, its transports and its backends.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The server returned 404.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status} ({code}): {message}")]
    Http {
        status: u16,
        code: String,
        message: String,
        body: String,
    },

    /// The response body could not be decoded into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be encoded as JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// No response was received.
    #[error("{0}")]
    Transport(String),

    /// An operation that needs a parameter (usually `id`) was called without it.
    #[error("missing required parameter `{0}`")]
    MissingParameter(String),

    /// The resource does not expose the requested operation.
    #[error("`{resource}` does not support `{operation}`")]
    UnsupportedOperation { resource: String, operation: String },

    /// Client configuration could not be loaded.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl ApiError {
    /// Shorthand for a transport failure carrying `message` verbatim.
    pub fn transport(message: impl Into<String>) -> Self {
        ApiError::Transport(message.into())
    }

    /// True for errors that never reached the server.
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport(_))
    }

    /// The HTTP status behind this error, when there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::NotFound => Some(404),
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Deserialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_error_displays_bare_message() {
        let err = ApiError::transport("Network timeout");
        assert_eq!(err.to_string(), "Network timeout");
        assert!(err.is_transport());
        assert_eq!(err.status(), None);
    }

    #[test]
    fn http_error_reports_status_and_code() {
        let err = ApiError::Http {
            status: 422,
            code: "invalid_input".to_string(),
            message: "name is required".to_string(),
            body: String::new(),
        };
        assert_eq!(err.to_string(), "HTTP 422 (invalid_input): name is required");
        assert_eq!(err.status(), Some(422));
    }

    #[test]
    fn json_errors_become_deserialization_errors() {
        let err: ApiError = serde_json::from_str::<serde_json::Value>("{").unwrap_err().into();
        assert!(matches!(err, ApiError::Deserialization(_)));
    }
}
