//! Client-local validation errors.
//!
//! These are raised before any network call is made; their `Display`
//! strings are the exact texts shown in the error slot.

use thiserror::Error;

/// A review submission rejected client-side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Submission attempted without a signed-in user.
    #[error("Sign in to post a review")]
    NotSignedIn,

    /// Submission attempted with an empty or whitespace-only comment.
    #[error("Comment required")]
    CommentRequired,
}
