//! Identity provider trait abstraction.
//!
//! The external identity provider is an opaque capability: create accounts,
//! exchange credentials for a session, run a browser-based federated flow,
//! issue bearer tokens, revoke. This trait is what the rest of the
//! application programs against; implementations are the REST provider in
//! `crate::auth` and an in-memory mock for tests.

use async_trait::async_trait;

use crate::error::AuthError;

/// A provider-issued session: the identity handle plus the material needed
/// to mint bearer tokens. Owned by `IdentityService`, never handed to the
/// view layer.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthSession {
    pub uid: String,
    pub email: Option<String>,
    pub id_token: String,
    pub refresh_token: String,
}

/// A freshly minted bearer token. Tokens rotate, so callers must request
/// one per outgoing authenticated call rather than hold onto this.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub id_token: String,
    pub refresh_token: String,
}

/// Handle for an in-progress federated (browser) sign-in.
#[derive(Debug, Clone)]
pub struct FederatedChallenge {
    /// URL the user must visit to complete sign-in.
    pub verification_url: String,
    /// Opaque handle passed back on every poll.
    pub session_id: String,
    /// Provider-requested seconds between polls.
    pub interval_secs: u64,
    /// Seconds until the challenge expires.
    pub expires_in_secs: u64,
}

/// Trait for identity provider operations.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Create an account with email and password.
    ///
    /// Provider failures (weak password, malformed email, duplicate
    /// account) carry the provider's message verbatim.
    async fn register(&self, email: &str, password: &str) -> Result<AuthSession, AuthError>;

    /// Sign in with email and password.
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, AuthError>;

    /// Start a federated sign-in; the returned challenge carries the URL to
    /// open in the user's browser.
    async fn begin_federated(&self) -> Result<FederatedChallenge, AuthError>;

    /// Poll an in-progress federated sign-in. `Ok(None)` while the user has
    /// not completed the flow yet; an error on denial or expiry.
    async fn poll_federated(
        &self,
        challenge: &FederatedChallenge,
    ) -> Result<Option<AuthSession>, AuthError>;

    /// Mint a fresh bearer token for the session.
    async fn refresh_id_token(&self, session: &AuthSession) -> Result<IssuedToken, AuthError>;

    /// Provider-side sign-out. Best-effort: callers treat failure the same
    /// as success.
    async fn revoke(&self, session: &AuthSession) -> Result<(), AuthError>;
}
