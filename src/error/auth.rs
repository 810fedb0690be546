//! Authentication-related error types.

use std::fmt;

/// Errors from identity provider operations.
///
/// Provider-reported failures keep the provider's message untouched; that
/// message is what gets shown inline on the Auth screen.
#[derive(Debug, Clone)]
pub enum AuthError {
    /// The provider rejected the operation (weak password, malformed email,
    /// duplicate account, bad credentials, ...). Message shown verbatim.
    Provider { message: String },

    /// The provider could not be reached.
    Transport { message: String },

    /// The provider's response could not be decoded.
    Decode { message: String },

    /// Federated sign-in expired before the user completed it.
    FederatedExpired,

    /// Federated sign-in was denied or cancelled in the browser.
    FederatedDenied,

    /// A bearer token was requested with no signed-in session.
    NotSignedIn,
}

impl AuthError {
    /// Message for the Auth screen's inline error slot.
    pub fn user_message(&self) -> String {
        match self {
            AuthError::Provider { message } => message.clone(),
            AuthError::Transport { message } => format!("Could not reach sign-in service: {}", message),
            AuthError::Decode { message } => format!("Unexpected sign-in response: {}", message),
            AuthError::FederatedExpired => "Sign-in request expired. Try again.".to_string(),
            AuthError::FederatedDenied => "Sign-in was cancelled or denied.".to_string(),
            AuthError::NotSignedIn => "You are not signed in.".to_string(),
        }
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::Provider { message } => write!(f, "Provider error: {}", message),
            AuthError::Transport { message } => write!(f, "Identity transport error: {}", message),
            AuthError::Decode { message } => write!(f, "Identity decode error: {}", message),
            AuthError::FederatedExpired => write!(f, "Federated sign-in expired"),
            AuthError::FederatedDenied => write!(f, "Federated sign-in denied"),
            AuthError::NotSignedIn => write!(f, "Not signed in"),
        }
    }
}

impl std::error::Error for AuthError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_message_is_verbatim() {
        let err = AuthError::Provider {
            message: "WEAK_PASSWORD : Password should be at least 6 characters".to_string(),
        };
        assert_eq!(
            err.user_message(),
            "WEAK_PASSWORD : Password should be at least 6 characters"
        );
    }

    #[test]
    fn transport_message_names_the_service() {
        let err = AuthError::Transport {
            message: "connection refused".to_string(),
        };
        assert!(err.user_message().contains("sign-in service"));
        assert!(err.user_message().contains("connection refused"));
    }

    #[test]
    fn display_formats() {
        let err = AuthError::FederatedDenied;
        assert_eq!(err.to_string(), "Federated sign-in denied");
    }
}
