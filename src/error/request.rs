//! Read-path error types.
//!
//! Failures from list/detail fetches and session sync land here. Policy:
//! stale data over blocking error — these are logged with `tracing::warn!`
//! and never reach the user-visible error slot.

use std::fmt;

use crate::traits::HttpError;

/// A failed read fetch or session sync. One attempt, no retry.
#[derive(Debug, Clone)]
pub enum RequestError {
    /// Transport-level failure (connection, timeout, bad URL).
    Transport(HttpError),

    /// The backend answered with a non-2xx status.
    Status { status: u16, body: String },

    /// The response body could not be decoded.
    Decode(String),
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::Transport(e) => write!(f, "Request transport error: {}", e),
            RequestError::Status { status, body } => {
                write!(f, "Request failed with status {}: {}", status, body)
            }
            RequestError::Decode(msg) => write!(f, "Request decode error: {}", msg),
        }
    }
}

impl std::error::Error for RequestError {}

impl From<HttpError> for RequestError {
    fn from(e: HttpError) -> Self {
        RequestError::Transport(e)
    }
}

impl From<serde_json::Error> for RequestError {
    fn from(e: serde_json::Error) -> Self {
        RequestError::Decode(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_status_and_body() {
        let err = RequestError::Status {
            status: 503,
            body: "maintenance".to_string(),
        };
        let s = err.to_string();
        assert!(s.contains("503"));
        assert!(s.contains("maintenance"));
    }

    #[test]
    fn converts_from_http_error() {
        let err: RequestError = HttpError::Timeout("30s".to_string()).into();
        assert!(matches!(err, RequestError::Transport(_)));
    }

    #[test]
    fn converts_from_serde_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("nope").unwrap_err();
        let err: RequestError = json_err.into();
        assert!(matches!(err, RequestError::Decode(_)));
    }
}
