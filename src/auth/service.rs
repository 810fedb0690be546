//! Session ownership and user-change notification.
//!
//! `IdentityService` wraps an [`IdentityProvider`] and is the only holder
//! of the provider session. Everyone else observes the user through a
//! `tokio::sync::watch` channel: a new subscriber sees the current value
//! immediately, then every sign-in/out transition after it.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::watch;
use tokio::time::{sleep, Instant};
use tracing::{info, warn};

use crate::error::AuthError;
use crate::models::AuthUser;
use crate::traits::{AuthSession, FederatedChallenge, IdentityProvider};

/// Owns the provider session and broadcasts user changes.
pub struct IdentityService {
    provider: Arc<dyn IdentityProvider>,
    session: Mutex<Option<AuthSession>>,
    user_tx: watch::Sender<Option<AuthUser>>,
}

impl IdentityService {
    pub fn new(provider: Arc<dyn IdentityProvider>) -> Self {
        let (user_tx, _) = watch::channel(None);
        Self {
            provider,
            session: Mutex::new(None),
            user_tx,
        }
    }

    /// Subscribe to user changes. The receiver's current value is the
    /// present user; `changed()` resolves on every transition after that.
    pub fn subscribe(&self) -> watch::Receiver<Option<AuthUser>> {
        self.user_tx.subscribe()
    }

    /// The user as of now, if any.
    pub fn current_user(&self) -> Option<AuthUser> {
        self.user_tx.borrow().clone()
    }

    /// Create an account and sign in as it.
    pub async fn register_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<(), AuthError> {
        let session = self.provider.register(email, password).await?;
        self.install(session);
        Ok(())
    }

    /// Sign in with email and password.
    pub async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<(), AuthError> {
        let session = self.provider.sign_in(email, password).await?;
        self.install(session);
        Ok(())
    }

    /// Start a federated sign-in. The caller is responsible for getting the
    /// challenge URL in front of the user (browser, on-screen display).
    pub async fn begin_federated(&self) -> Result<FederatedChallenge, AuthError> {
        self.provider.begin_federated().await
    }

    /// Poll a federated challenge until it completes, is denied, or
    /// expires. Polls at the provider-requested interval.
    pub async fn complete_federated(
        &self,
        challenge: &FederatedChallenge,
    ) -> Result<(), AuthError> {
        let deadline = Instant::now() + Duration::from_secs(challenge.expires_in_secs);
        loop {
            if Instant::now() >= deadline {
                return Err(AuthError::FederatedExpired);
            }
            match self.provider.poll_federated(challenge).await? {
                Some(session) => {
                    self.install(session);
                    return Ok(());
                }
                None => sleep(Duration::from_secs(challenge.interval_secs)).await,
            }
        }
    }

    /// Terminate the local session. Always succeeds locally: a provider
    /// failure during revoke is logged and otherwise indistinguishable
    /// from success. No retry.
    pub async fn sign_out(&self) {
        let session = self.session.lock().unwrap().take();
        if let Some(session) = session {
            if let Err(e) = self.provider.revoke(&session).await {
                warn!(error = %e, "provider-side sign-out failed; local session cleared anyway");
            }
        }
        self.user_tx.send_replace(None);
        info!("signed out");
    }

    /// Mint a bearer token for the current session. Requested fresh per
    /// outgoing authenticated call — tokens rotate, so the result must not
    /// be cached by callers.
    pub async fn id_token(&self) -> Result<String, AuthError> {
        let session = self
            .session
            .lock()
            .unwrap()
            .clone()
            .ok_or(AuthError::NotSignedIn)?;
        let issued = self.provider.refresh_id_token(&session).await?;
        if let Some(current) = self.session.lock().unwrap().as_mut() {
            current.id_token = issued.id_token.clone();
            current.refresh_token = issued.refresh_token.clone();
        }
        Ok(issued.id_token)
    }

    fn install(&self, session: AuthSession) {
        let user = AuthUser {
            uid: session.uid.clone(),
            email: session.email.clone(),
        };
        info!(uid = %user.uid, "signed in");
        *self.session.lock().unwrap() = Some(session);
        self.user_tx.send_replace(Some(user));
    }
}
