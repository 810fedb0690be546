//! Domain models for the catalog.
//!
//! These are the shapes the rest of the application works with. The backend
//! is inconsistent about its identity field (`_id` from some deployments,
//! `id` from others); both spellings are accepted here via serde aliases so
//! that nothing past the deserialization boundary ever sees `_id`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A catalog entry: a style with an image, a name and a description.
///
/// Immutable from the client's perspective; fetched in bulk for the gallery
/// or individually (with reviews attached) for the detail screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Style {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "imageURL", default)]
    pub image_url: String,
}

/// A user-submitted rating plus comment attached to a [`Style`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    #[serde(alias = "_id")]
    pub id: String,
    pub rating: u8,
    pub comment: String,
    /// Absent for accounts without a visible email; rendered as "Anonymous".
    #[serde(rename = "userEmail", default)]
    pub user_email: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl Review {
    /// Display name for the review author.
    pub fn author(&self) -> &str {
        self.user_email.as_deref().unwrap_or("Anonymous")
    }
}

/// The authenticated user as observed by the view state controller.
///
/// Created and destroyed entirely by the identity provider; the controller
/// only watches transitions.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthUser {
    pub uid: String,
    pub email: Option<String>,
}

impl AuthUser {
    /// Display label for the gallery header.
    pub fn display_email(&self) -> &str {
        self.email.as_deref().unwrap_or("(no email)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_deserializes_with_plain_id() {
        let s: Style = serde_json::from_str(
            r#"{"id":"a","name":"Classic","description":"d","imageURL":"u"}"#,
        )
        .unwrap();
        assert_eq!(s.id, "a");
        assert_eq!(s.name, "Classic");
        assert_eq!(s.image_url, "u");
    }

    #[test]
    fn style_deserializes_with_mongo_id() {
        let s: Style = serde_json::from_str(
            r#"{"_id":"6543","name":"Chiffon","description":"d","imageURL":"u"}"#,
        )
        .unwrap();
        assert_eq!(s.id, "6543");
    }

    #[test]
    fn style_tolerates_missing_image_url() {
        let s: Style =
            serde_json::from_str(r#"{"id":"a","name":"Classic","description":"d"}"#).unwrap();
        assert_eq!(s.image_url, "");
    }

    #[test]
    fn review_deserializes_both_id_spellings() {
        let json = r#"{"_id":"r1","rating":4,"comment":"nice","userEmail":"a@b.c","createdAt":"2026-01-05T12:00:00Z"}"#;
        let r: Review = serde_json::from_str(json).unwrap();
        assert_eq!(r.id, "r1");
        assert_eq!(r.rating, 4);
        assert_eq!(r.author(), "a@b.c");

        let json = r#"{"id":"r2","rating":5,"comment":"great","createdAt":"2026-01-05T12:00:00Z"}"#;
        let r: Review = serde_json::from_str(json).unwrap();
        assert_eq!(r.id, "r2");
    }

    #[test]
    fn review_without_email_is_anonymous() {
        let json = r#"{"id":"r","rating":3,"comment":"ok","createdAt":"2026-01-05T12:00:00Z"}"#;
        let r: Review = serde_json::from_str(json).unwrap();
        assert_eq!(r.author(), "Anonymous");
    }

    #[test]
    fn auth_user_display_email_falls_back() {
        let u = AuthUser {
            uid: "u1".to_string(),
            email: None,
        };
        assert_eq!(u.display_email(), "(no email)");
    }
}
