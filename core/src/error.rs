//! Error types for the retail API client.
//!
//! # Design
//! Every rejected call ends up as an `ApiError`. Status-bearing variants keep
//! the raw status code and body so callers can pull the server's `message`
//! out for their own feedback. Transport failures (timeout, refused
//! connection) carry no status because no response was ever received.

use thiserror::Error;

/// Failures of the network round-trip itself.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The request did not complete within the configured timeout.
    #[error("request timed out")]
    Timeout,

    /// Connection refused, DNS failure, broken pipe and the like.
    #[error("network error: {0}")]
    Network(String),
}

/// Failure taxonomy as seen by callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    Unauthorized,
    Forbidden,
    NotFound,
    /// 5xx; `silent` when the path suppressed the notification.
    ServerError { silent: bool },
    /// No response at all: timeout, refused connection, broken pipe.
    NetworkOrTimeout,
    /// Other statuses and local failures (empty path, JSON errors).
    Other,
}

/// Errors returned by `ApiClient`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The descriptor carried an empty path.
    #[error("request path must not be empty")]
    InvalidPath,

    /// The server returned 401. The stored session has been cleared.
    #[error("HTTP 401: {body}")]
    Unauthorized { body: String },

    /// The server returned 403.
    #[error("HTTP 403: {body}")]
    Forbidden { body: String },

    /// The server returned 404.
    #[error("HTTP 404: {body}")]
    NotFound { body: String },

    /// The server returned a 5xx status. `silent` records whether the path was
    /// on the silent list, i.e. whether a notification was suppressed.
    #[error("HTTP {status}: {body}")]
    Server { status: u16, body: String, silent: bool },

    /// Any other non-2xx status.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),
}

impl ApiError {
    /// Status code of the response that caused the error, if there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized { .. } => Some(401),
            ApiError::Forbidden { .. } => Some(403),
            ApiError::NotFound { .. } => Some(404),
            ApiError::Server { status, .. } | ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Raw response body, untouched.
    pub fn body(&self) -> Option<&str> {
        match self {
            ApiError::Unauthorized { body }
            | ApiError::Forbidden { body }
            | ApiError::NotFound { body }
            | ApiError::Server { body, .. }
            | ApiError::Http { body, .. } => Some(body),
            _ => None,
        }
    }

    /// The `message` field of a JSON error body, when the server sent one.
    pub fn server_message(&self) -> Option<String> {
        let body = self.body()?;
        let value: serde_json::Value = serde_json::from_str(body).ok()?;
        value.get("message")?.as_str().map(str::to_string)
    }

    pub fn class(&self) -> ErrorClass {
        match self {
            ApiError::Unauthorized { .. } => ErrorClass::Unauthorized,
            ApiError::Forbidden { .. } => ErrorClass::Forbidden,
            ApiError::NotFound { .. } => ErrorClass::NotFound,
            ApiError::Server { silent, .. } => ErrorClass::ServerError { silent: *silent },
            ApiError::Transport(_) => ErrorClass::NetworkOrTimeout,
            ApiError::Http { .. }
            | ApiError::InvalidPath
            | ApiError::Serialization(_)
            | ApiError::Deserialization(_) => ErrorClass::Other,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, ApiError::Transport(TransportError::Timeout))
    }
}
