//! Messages delivered to the controller from detached tasks.
//!
//! Every network outcome the controller cares about arrives through this
//! enum on the app's mpsc channel; read-path failures never produce a
//! message (they are logged at the task and the prior state stands).

use crate::api::StyleDetail;
use crate::models::{AuthUser, Review, Style};

#[derive(Debug, Clone)]
pub enum AppMessage {
    /// The identity subscription fired (once immediately at startup, then
    /// on every sign-in/out).
    UserChanged(Option<AuthUser>),
    /// A sign-up / sign-in / federated flow completed; clear the form.
    AuthSucceeded,
    /// An identity operation failed; message for the Auth screen.
    AuthFailed(String),
    /// Federated sign-in started; URL the user must visit.
    FederatedStarted { verification_url: String },
    /// The style list arrived.
    StylesLoaded(Vec<Style>),
    /// Reviews and average for a style arrived.
    DetailLoaded { style_id: String, detail: StyleDetail },
    /// A review was accepted by the backend.
    ReviewPosted { review: Review, avg_rating: f64 },
    /// A review was rejected; message for the Style-detail screen.
    ReviewRejected(String),
}
