//! Controller actions: everything that spawns a detached task.
//!
//! Read fetches and session sync are fire-and-forget: initiated here,
//! errors logged in the task, results deliberately discarded unless a
//! success message is worth applying. Nothing on the critical path ever
//! awaits them.

use std::sync::Arc;

use tracing::warn;

use super::{App, AppMessage, AuthMode};
use crate::error::ValidationError;

impl App {
    /// Forward identity subscription events into the message channel. The
    /// current state is delivered immediately, then every transition.
    /// Established exactly once, at startup.
    pub(crate) fn spawn_user_watch(&self) {
        let identity = Arc::clone(&self.identity);
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let mut rx = identity.subscribe();
            let current = rx.borrow_and_update().clone();
            let _ = tx.send(AppMessage::UserChanged(current));
            while rx.changed().await.is_ok() {
                let user = rx.borrow_and_update().clone();
                let _ = tx.send(AppMessage::UserChanged(user));
            }
        });
    }

    /// Fetch the style list. On failure the previous list stands and the
    /// user sees nothing; one attempt only.
    pub(crate) fn spawn_styles_fetch(&self) {
        let api = Arc::clone(&self.api);
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            match api.list_styles().await {
                Ok(styles) => {
                    let _ = tx.send(AppMessage::StylesLoaded(styles));
                }
                Err(e) => warn!(error = %e, "style list fetch failed; keeping previous list"),
            }
        });
    }

    /// Fetch reviews and average for a style. On failure the detail screen
    /// stays up with empty reviews and a zero average.
    pub(crate) fn spawn_detail_fetch(&self, style_id: String) {
        let api = Arc::clone(&self.api);
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            match api.style_detail(&style_id).await {
                Ok(detail) => {
                    let _ = tx.send(AppMessage::DetailLoaded { style_id, detail });
                }
                Err(e) => warn!(error = %e, style_id, "style detail fetch failed"),
            }
        });
    }

    /// Let the backend establish a server-side session for the signed-in
    /// user. Best-effort; never blocks the UI.
    pub(crate) fn spawn_session_sync(&self) {
        let identity = Arc::clone(&self.identity);
        let api = Arc::clone(&self.api);
        tokio::spawn(async move {
            let token = match identity.id_token().await {
                Ok(token) => token,
                Err(e) => {
                    warn!(error = %e, "no token for session sync");
                    return;
                }
            };
            if let Err(e) = api.sync_session(&token).await {
                warn!(error = %e, "session sync failed");
            }
        });
    }

    /// Submit the Auth form in the current mode.
    pub fn submit_auth(&mut self) {
        self.error = None;
        let email = self.email.content().trim().to_string();
        let password = self.password.content().to_string();
        let mode = self.auth_mode;
        let identity = Arc::clone(&self.identity);
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let result = match mode {
                AuthMode::SignUp => identity.register_with_password(&email, &password).await,
                AuthMode::SignIn => identity.sign_in_with_password(&email, &password).await,
            };
            let message = match result {
                Ok(()) => AppMessage::AuthSucceeded,
                Err(e) => AppMessage::AuthFailed(e.user_message()),
            };
            let _ = tx.send(message);
        });
        self.mark_dirty();
    }

    /// Start the federated (browser) sign-in flow.
    pub fn federated_sign_in(&mut self) {
        self.error = None;
        let identity = Arc::clone(&self.identity);
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let challenge = match identity.begin_federated().await {
                Ok(challenge) => challenge,
                Err(e) => {
                    let _ = tx.send(AppMessage::AuthFailed(e.user_message()));
                    return;
                }
            };
            let _ = tx.send(AppMessage::FederatedStarted {
                verification_url: challenge.verification_url.clone(),
            });
            // The URL stays on screen either way; opening the browser is a
            // convenience that can fail on headless machines.
            if let Err(e) = webbrowser::open(&challenge.verification_url) {
                warn!(error = %e, "could not open browser for federated sign-in");
            }
            let message = match identity.complete_federated(&challenge).await {
                Ok(()) => AppMessage::AuthSucceeded,
                Err(e) => AppMessage::AuthFailed(e.user_message()),
            };
            let _ = tx.send(message);
        });
        self.mark_dirty();
    }

    /// Toggle between Sign up and Log in on the Auth screen.
    pub fn toggle_auth_mode(&mut self) {
        self.auth_mode = self.auth_mode.toggled();
        self.error = None;
        self.mark_dirty();
    }

    /// Sign out. The screen flips right away; the identity subscription
    /// then confirms the transition.
    pub fn logout(&mut self) {
        self.clear_selection();
        self.screen = super::Screen::Auth;
        let identity = Arc::clone(&self.identity);
        tokio::spawn(async move {
            identity.sign_out().await;
        });
        self.mark_dirty();
    }

    /// Submit the draft review for the selected style.
    ///
    /// Client-side validation happens before any network call: an absent
    /// user or a whitespace-only comment sets the error slot and stops.
    /// While a POST is outstanding further submits are ignored.
    pub fn submit_review(&mut self) {
        if self.submit_in_flight {
            return;
        }
        self.error = None;

        if self.user.is_none() {
            self.error = Some(ValidationError::NotSignedIn.to_string());
            self.mark_dirty();
            return;
        }
        if self.comment.content().trim().is_empty() {
            self.error = Some(ValidationError::CommentRequired.to_string());
            self.mark_dirty();
            return;
        }
        let Some(style) = self.selected.clone() else {
            return;
        };

        let rating = self.draft_rating;
        let comment = self.comment.content().to_string();
        let api = Arc::clone(&self.api);
        let identity = Arc::clone(&self.identity);
        let tx = self.message_tx.clone();
        self.submit_in_flight = true;
        tokio::spawn(async move {
            // A fresh token per call; the provider rotates them.
            let token = match identity.id_token().await {
                Ok(token) => token,
                Err(e) => {
                    let _ = tx.send(AppMessage::ReviewRejected(e.user_message()));
                    return;
                }
            };
            let message = match api.submit_review(&style.id, rating, &comment, &token).await {
                Ok(posted) => AppMessage::ReviewPosted {
                    review: posted.review,
                    avg_rating: posted.avg_rating,
                },
                Err(e) => AppMessage::ReviewRejected(e.user_message()),
            };
            let _ = tx.send(message);
        });
        self.mark_dirty();
    }

    /// Set the draft rating, clamped into 1..=5.
    pub fn set_draft_rating(&mut self, rating: u8) {
        self.draft_rating = rating.clamp(1, crate::ui::components::STAR_COUNT);
        self.mark_dirty();
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::{style, test_app};
    use super::*;
    use crate::models::AuthUser;

    fn signed_in(app: &mut App) {
        app.user = Some(AuthUser {
            uid: "u".to_string(),
            email: Some("a@b.c".to_string()),
        });
    }

    #[tokio::test]
    async fn unauthenticated_submit_sets_error_without_network_call() {
        let (mut app, http, _) = test_app();
        app.selected = Some(style("a", "Classic"));
        app.comment.insert_char('x');

        app.submit_review();
        tokio::task::yield_now().await;

        assert_eq!(app.error.as_deref(), Some("Sign in to post a review"));
        assert_eq!(http.request_count(), 0);
        assert!(!app.submit_in_flight);
    }

    #[tokio::test]
    async fn whitespace_comment_sets_error_without_network_call() {
        let (mut app, http, _) = test_app();
        signed_in(&mut app);
        app.selected = Some(style("a", "Classic"));
        for c in "   \t".chars() {
            app.comment.insert_char(c);
        }

        app.submit_review();
        tokio::task::yield_now().await;

        assert_eq!(app.error.as_deref(), Some("Comment required"));
        assert_eq!(http.request_count(), 0);
    }

    #[tokio::test]
    async fn in_flight_guard_swallows_repeat_submits() {
        let (mut app, http, _) = test_app();
        signed_in(&mut app);
        app.selected = Some(style("a", "Classic"));
        app.comment.insert_char('x');
        app.submit_in_flight = true;

        app.submit_review();
        tokio::task::yield_now().await;

        assert_eq!(http.request_count(), 0);
    }

    #[tokio::test]
    async fn set_draft_rating_clamps() {
        let (mut app, _, _) = test_app();
        app.set_draft_rating(0);
        assert_eq!(app.draft_rating, 1);
        app.set_draft_rating(9);
        assert_eq!(app.draft_rating, 5);
        app.set_draft_rating(3);
        assert_eq!(app.draft_rating, 3);
    }
}
