//! Application state and logic.
//!
//! [`App`] is the single source of truth: every screen renders from it and
//! every transition mutates it on the main loop. Async work happens in
//! detached tasks that report back through [`AppMessage`].

mod actions;
mod handlers;
mod messages;
mod navigation;
mod types;

pub use messages::AppMessage;
pub use types::{AuthField, AuthMode, Screen};

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::debug;

use crate::api::CatalogClient;
use crate::auth::IdentityService;
use crate::models::{AuthUser, Review, Style};
use crate::ui::components::StarPicker;
use crate::widgets::InputBox;

/// Main application state.
pub struct App {
    /// Current screen being displayed
    pub screen: Screen,
    /// Current user, as last reported by the identity subscription
    pub user: Option<AuthUser>,
    /// Loaded style list (backend order)
    pub styles: Vec<Style>,
    /// Selected index in the gallery
    pub gallery_index: usize,
    /// Selected style when on the Style-detail screen
    pub selected: Option<Style>,
    /// Reviews for the selected style, newest first
    pub reviews: Vec<Review>,
    /// Backend-computed average rating for the selected style
    pub avg_rating: f64,
    /// Draft review rating, always in 1..=5
    pub draft_rating: u8,
    /// Draft review comment
    pub comment: InputBox,
    /// Auth screen: email field
    pub email: InputBox,
    /// Auth screen: password field
    pub password: InputBox,
    /// Auth screen: sign-up vs sign-in
    pub auth_mode: AuthMode,
    /// Auth screen: focused field
    pub auth_focus: AuthField,
    /// Inline error slot (Auth and Style-detail screens)
    pub error: Option<String>,
    /// Verification URL while a federated sign-in is pending
    pub federated_url: Option<String>,
    /// True while a review POST is outstanding; further submits are ignored
    pub submit_in_flight: bool,
    /// Interactive star picker (owns its hover state)
    pub star_picker: StarPicker,
    /// Flag to track if the app should quit
    pub should_quit: bool,
    /// Draw on the next loop iteration
    pub needs_redraw: bool,
    /// Tick counter for animations
    pub tick_count: u64,
    /// Sender side of the message channel (cloned into async tasks)
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Receiver side; taken by the run loop
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Catalog API client (shared across async tasks)
    pub api: Arc<CatalogClient>,
    /// Identity service (shared across async tasks)
    pub identity: Arc<IdentityService>,
}

impl App {
    pub fn new(api: Arc<CatalogClient>, identity: Arc<IdentityService>) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        Self {
            screen: Screen::default(),
            user: None,
            styles: Vec::new(),
            gallery_index: 0,
            selected: None,
            reviews: Vec::new(),
            avg_rating: 0.0,
            draft_rating: 5,
            comment: InputBox::new(),
            email: InputBox::new(),
            password: InputBox::new(),
            auth_mode: AuthMode::default(),
            auth_focus: AuthField::default(),
            error: None,
            federated_url: None,
            submit_in_flight: false,
            star_picker: StarPicker::new(),
            should_quit: false,
            needs_redraw: true,
            tick_count: 0,
            message_tx,
            message_rx: Some(message_rx),
            api,
            identity,
        }
    }

    /// Startup side effects: the identity subscription forwarder and the
    /// one unconditional style-list fetch. The two are independent and may
    /// resolve in either order.
    pub fn start(&mut self) {
        self.spawn_user_watch();
        self.spawn_styles_fetch();
    }

    /// Apply an async result to the state. This is the only place
    /// [`AppMessage`]s are consumed.
    pub fn handle_message(&mut self, message: AppMessage) {
        debug!(?message, "applying message");
        match message {
            AppMessage::UserChanged(None) => {
                self.user = None;
                self.screen = Screen::Auth;
                self.clear_selection();
            }
            AppMessage::UserChanged(Some(user)) => {
                self.user = Some(user);
                self.screen = Screen::Gallery;
                self.spawn_session_sync();
            }
            AppMessage::AuthSucceeded => {
                self.email.clear();
                self.password.clear();
                self.error = None;
                self.federated_url = None;
            }
            AppMessage::AuthFailed(message) => {
                self.error = Some(message);
                self.federated_url = None;
            }
            AppMessage::FederatedStarted { verification_url } => {
                self.federated_url = Some(verification_url);
            }
            AppMessage::StylesLoaded(styles) => {
                self.styles = styles;
                if self.gallery_index >= self.styles.len() {
                    self.gallery_index = self.styles.len().saturating_sub(1);
                }
            }
            AppMessage::DetailLoaded { style_id, detail } => {
                // A response for a style that is no longer selected is stale.
                if self.selected.as_ref().map(|s| s.id.as_str()) == Some(style_id.as_str()) {
                    self.reviews = detail.reviews;
                    self.avg_rating = detail.avg_rating;
                }
            }
            AppMessage::ReviewPosted { review, avg_rating } => {
                self.reviews.insert(0, review);
                self.avg_rating = avg_rating;
                self.draft_rating = 5;
                self.comment.clear();
                self.error = None;
                self.submit_in_flight = false;
            }
            AppMessage::ReviewRejected(message) => {
                self.error = Some(message);
                self.submit_in_flight = false;
            }
        }
        self.mark_dirty();
    }

    /// Clear everything tied to the selected style.
    pub(crate) fn clear_selection(&mut self) {
        self.selected = None;
        self.reviews.clear();
        self.avg_rating = 0.0;
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
    }

    /// Mark the app to quit.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, MockIdentityProvider};
    use crate::api::StyleDetail;
    use chrono::Utc;

    pub(crate) fn test_app() -> (App, MockHttpClient, MockIdentityProvider) {
        let http = MockHttpClient::new();
        let provider = MockIdentityProvider::new();
        let api = Arc::new(CatalogClient::new(Arc::new(http.clone()), "http://api"));
        let identity = Arc::new(IdentityService::new(Arc::new(provider.clone())));
        (App::new(api, identity), http, provider)
    }

    pub(crate) fn style(id: &str, name: &str) -> Style {
        Style {
            id: id.to_string(),
            name: name.to_string(),
            description: "d".to_string(),
            image_url: "u".to_string(),
        }
    }

    pub(crate) fn review(id: &str, rating: u8) -> Review {
        Review {
            id: id.to_string(),
            rating,
            comment: "c".to_string(),
            user_email: None,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn user_signed_out_lands_on_auth_and_clears_selection() {
        let (mut app, _, _) = test_app();
        app.screen = Screen::StyleDetail;
        app.selected = Some(style("a", "Classic"));
        app.reviews.push(review("r", 4));
        app.avg_rating = 4.0;

        app.handle_message(AppMessage::UserChanged(None));

        assert_eq!(app.screen, Screen::Auth);
        assert!(app.selected.is_none());
        assert!(app.reviews.is_empty());
        assert_eq!(app.avg_rating, 0.0);
    }

    #[tokio::test]
    async fn user_signed_in_lands_on_gallery_from_any_screen() {
        let (mut app, _, _) = test_app();
        app.screen = Screen::StyleDetail;

        app.handle_message(AppMessage::UserChanged(Some(AuthUser {
            uid: "u".to_string(),
            email: Some("a@b.c".to_string()),
        })));

        assert_eq!(app.screen, Screen::Gallery);
        assert!(app.user.is_some());
    }

    #[tokio::test]
    async fn review_posted_prepends_and_resets_draft() {
        let (mut app, _, _) = test_app();
        app.selected = Some(style("a", "Classic"));
        app.reviews.push(review("old", 3));
        app.draft_rating = 2;
        app.comment.insert_char('x');
        app.submit_in_flight = true;
        app.error = Some("stale".to_string());

        app.handle_message(AppMessage::ReviewPosted {
            review: review("new", 4),
            avg_rating: 3.5,
        });

        assert_eq!(app.reviews[0].id, "new");
        assert_eq!(app.reviews.len(), 2);
        assert_eq!(app.avg_rating, 3.5);
        assert_eq!(app.draft_rating, 5);
        assert!(app.comment.is_empty());
        assert!(app.error.is_none());
        assert!(!app.submit_in_flight);
    }

    #[tokio::test]
    async fn stale_detail_for_deselected_style_is_dropped() {
        let (mut app, _, _) = test_app();
        app.selected = Some(style("b", "Other"));

        app.handle_message(AppMessage::DetailLoaded {
            style_id: "a".to_string(),
            detail: StyleDetail {
                reviews: vec![review("r", 5)],
                avg_rating: 5.0,
            },
        });

        assert!(app.reviews.is_empty());
        assert_eq!(app.avg_rating, 0.0);
    }

    #[tokio::test]
    async fn auth_success_clears_form_and_error() {
        let (mut app, _, _) = test_app();
        app.email.insert_char('a');
        app.password.insert_char('p');
        app.error = Some("bad".to_string());

        app.handle_message(AppMessage::AuthSucceeded);

        assert!(app.email.is_empty());
        assert!(app.password.is_empty());
        assert!(app.error.is_none());
    }

    #[tokio::test]
    async fn auth_failure_surfaces_message() {
        let (mut app, _, _) = test_app();
        app.handle_message(AppMessage::AuthFailed("INVALID_PASSWORD".to_string()));
        assert_eq!(app.error.as_deref(), Some("INVALID_PASSWORD"));
    }

    #[tokio::test]
    async fn styles_loaded_clamps_gallery_index() {
        let (mut app, _, _) = test_app();
        app.gallery_index = 7;
        app.handle_message(AppMessage::StylesLoaded(vec![style("a", "One")]));
        assert_eq!(app.gallery_index, 0);
    }
}
