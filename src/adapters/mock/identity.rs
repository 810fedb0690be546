//! Mock identity provider for tests.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::error::AuthError;
use crate::traits::{AuthSession, FederatedChallenge, IdentityProvider, IssuedToken};

/// Counters for provider calls, for asserting call behaviour in tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProviderCalls {
    pub register: usize,
    pub sign_in: usize,
    pub federated_polls: usize,
    pub token_refreshes: usize,
    pub revokes: usize,
}

/// Scriptable in-memory implementation of [`IdentityProvider`].
///
/// By default every operation succeeds with a canned session; individual
/// operations can be scripted to fail with a given provider message.
#[derive(Clone, Default)]
pub struct MockIdentityProvider {
    calls: Arc<Mutex<ProviderCalls>>,
    fail_with: Arc<Mutex<Option<String>>>,
    revoke_fails: Arc<Mutex<bool>>,
    /// Federated polls return pending this many times before succeeding.
    federated_pending_polls: Arc<Mutex<usize>>,
    token_counter: Arc<Mutex<u64>>,
}

impl MockIdentityProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script every credentialled operation to fail with this message.
    pub fn fail_with(&self, message: &str) {
        *self.fail_with.lock().unwrap() = Some(message.to_string());
    }

    /// Script revoke to fail (sign-out must still succeed locally).
    pub fn fail_revoke(&self) {
        *self.revoke_fails.lock().unwrap() = true;
    }

    /// Script the federated flow to stay pending for `n` polls.
    pub fn set_federated_pending_polls(&self, n: usize) {
        *self.federated_pending_polls.lock().unwrap() = n;
    }

    pub fn calls(&self) -> ProviderCalls {
        *self.calls.lock().unwrap()
    }

    fn session_for(&self, email: &str) -> AuthSession {
        AuthSession {
            uid: format!("uid-{}", email),
            email: Some(email.to_string()),
            id_token: "token-0".to_string(),
            refresh_token: "refresh-0".to_string(),
        }
    }

    fn scripted_failure(&self) -> Option<AuthError> {
        self.fail_with
            .lock()
            .unwrap()
            .clone()
            .map(|message| AuthError::Provider { message })
    }
}

#[async_trait]
impl IdentityProvider for MockIdentityProvider {
    async fn register(&self, email: &str, _password: &str) -> Result<AuthSession, AuthError> {
        self.calls.lock().unwrap().register += 1;
        if let Some(err) = self.scripted_failure() {
            return Err(err);
        }
        Ok(self.session_for(email))
    }

    async fn sign_in(&self, email: &str, _password: &str) -> Result<AuthSession, AuthError> {
        self.calls.lock().unwrap().sign_in += 1;
        if let Some(err) = self.scripted_failure() {
            return Err(err);
        }
        Ok(self.session_for(email))
    }

    async fn begin_federated(&self) -> Result<FederatedChallenge, AuthError> {
        if let Some(err) = self.scripted_failure() {
            return Err(err);
        }
        Ok(FederatedChallenge {
            verification_url: "https://identity.example/consent".to_string(),
            session_id: "fed-session".to_string(),
            interval_secs: 0,
            expires_in_secs: 60,
        })
    }

    async fn poll_federated(
        &self,
        _challenge: &FederatedChallenge,
    ) -> Result<Option<AuthSession>, AuthError> {
        self.calls.lock().unwrap().federated_polls += 1;
        if let Some(err) = self.scripted_failure() {
            return Err(err);
        }
        let mut pending = self.federated_pending_polls.lock().unwrap();
        if *pending > 0 {
            *pending -= 1;
            return Ok(None);
        }
        Ok(Some(self.session_for("federated@example.com")))
    }

    async fn refresh_id_token(&self, session: &AuthSession) -> Result<IssuedToken, AuthError> {
        self.calls.lock().unwrap().token_refreshes += 1;
        if let Some(err) = self.scripted_failure() {
            return Err(err);
        }
        // Rotate on every call so tests can observe re-issuance.
        let mut counter = self.token_counter.lock().unwrap();
        *counter += 1;
        Ok(IssuedToken {
            id_token: format!("token-{}", *counter),
            refresh_token: session.refresh_token.clone(),
        })
    }

    async fn revoke(&self, _session: &AuthSession) -> Result<(), AuthError> {
        self.calls.lock().unwrap().revokes += 1;
        if *self.revoke_fails.lock().unwrap() {
            return Err(AuthError::Transport {
                message: "revoke endpoint unavailable".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn sign_in_succeeds_by_default() {
        let provider = MockIdentityProvider::new();
        let session = provider.sign_in("a@b.c", "pw").await.unwrap();
        assert_eq!(session.email.as_deref(), Some("a@b.c"));
        assert_eq!(provider.calls().sign_in, 1);
    }

    #[tokio::test]
    async fn scripted_failure_carries_message() {
        let provider = MockIdentityProvider::new();
        provider.fail_with("EMAIL_EXISTS");
        let err = provider.register("a@b.c", "pw").await.unwrap_err();
        assert_eq!(err.user_message(), "EMAIL_EXISTS");
    }

    #[tokio::test]
    async fn tokens_rotate_per_refresh() {
        let provider = MockIdentityProvider::new();
        let session = provider.sign_in("a@b.c", "pw").await.unwrap();
        let t1 = provider.refresh_id_token(&session).await.unwrap();
        let t2 = provider.refresh_id_token(&session).await.unwrap();
        assert_ne!(t1.id_token, t2.id_token);
        assert_eq!(provider.calls().token_refreshes, 2);
    }

    #[tokio::test]
    async fn federated_flow_honours_pending_polls() {
        let provider = MockIdentityProvider::new();
        provider.set_federated_pending_polls(2);
        let challenge = provider.begin_federated().await.unwrap();
        assert!(provider.poll_federated(&challenge).await.unwrap().is_none());
        assert!(provider.poll_federated(&challenge).await.unwrap().is_none());
        assert!(provider.poll_federated(&challenge).await.unwrap().is_some());
    }
}
