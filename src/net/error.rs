//! Error taxonomy for REST calls made by the chat client.
//!
//! DESIGN
//! ======
//! Transport and decoding are split: the browser layer only moves bytes,
//! while `decode_*` helpers in `api` turn `(status, body)` into typed results.
//! Every variant is therefore reachable from plain unit tests.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Errors produced by backend API calls.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, aborted).
    #[error("network error: {0}")]
    Network(String),

    /// The response body did not match the expected JSON shape.
    #[error("unexpected response: {0}")]
    Protocol(String),

    /// The backend answered with a non-success HTTP status.
    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },
}

impl ApiError {
    /// Stable machine-readable code, mirrored into log lines.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Network(_) => "E_NETWORK",
            Self::Protocol(_) => "E_PROTOCOL",
            Self::Status { .. } => "E_STATUS",
        }
    }

    /// Short text for inline error banners.
    ///
    /// Prefers the backend's own `error` string when it sent one.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Network(_) => "Could not reach the server".to_owned(),
            Self::Protocol(_) => "The server sent an unexpected response".to_owned(),
            Self::Status { message, .. } if !message.is_empty() => message.clone(),
            Self::Status { status, .. } => format!("Request failed ({status})"),
        }
    }
}
