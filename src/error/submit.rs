//! Write-path error types.
//!
//! A failed review POST is the one network failure the user is actively
//! waiting on, so unlike the read path it always surfaces inline on the
//! Style-detail screen.

use std::fmt;

/// A failed review submission.
#[derive(Debug, Clone)]
pub enum SubmitError {
    /// The backend rejected the review; `message` comes from the response
    /// body's `message` field when present, else the HTTP status line.
    Rejected { status: u16, message: String },

    /// The backend could not be reached.
    Transport { message: String },

    /// The success response could not be decoded.
    Decode { message: String },
}

impl SubmitError {
    /// Message for the Style-detail screen's inline error slot.
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::Rejected { message, .. } => message.clone(),
            SubmitError::Transport { message } => message.clone(),
            SubmitError::Decode { message } => format!("Unexpected response: {}", message),
        }
    }
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::Rejected { status, message } => {
                write!(f, "Review rejected ({}): {}", status, message)
            }
            SubmitError::Transport { message } => write!(f, "Submit transport error: {}", message),
            SubmitError::Decode { message } => write!(f, "Submit decode error: {}", message),
        }
    }
}

impl std::error::Error for SubmitError {}
