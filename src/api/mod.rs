//! HTTP client for the catalog backend.
//!
//! Four operations: list styles, fetch one style's reviews and average,
//! create a review, sync an authenticated session. Every call is a single
//! attempt — no retry, no timeout beyond transport defaults; what the
//! caller does with a failure is the caller's policy (see `crate::error`).

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{RequestError, SubmitError};
use crate::models::{Review, Style};
use crate::traits::{Headers, HttpClient, Response};

#[derive(Debug, Deserialize)]
struct StylesEnvelope {
    #[serde(default)]
    styles: Vec<Style>,
}

#[derive(Debug, Deserialize)]
struct DetailEnvelope {
    #[serde(default)]
    reviews: Vec<Review>,
    #[serde(rename = "avgRating", default)]
    avg_rating: f64,
}

#[derive(Debug, Deserialize)]
struct PostedEnvelope {
    review: Review,
    #[serde(rename = "avgRating", default)]
    avg_rating: f64,
}

#[derive(Debug, Serialize)]
struct ReviewBody<'a> {
    rating: u8,
    comment: &'a str,
}

#[derive(Debug, Serialize)]
struct SessionBody<'a> {
    #[serde(rename = "idToken")]
    id_token: &'a str,
}

/// Error bodies may carry a human-readable `message`; anything else in
/// them is ignored.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// One style's reviews plus the backend-computed average rating.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleDetail {
    /// Newest first, by backend convention.
    pub reviews: Vec<Review>,
    /// 0 when the style has no reviews.
    pub avg_rating: f64,
}

/// The created review plus the recomputed average.
#[derive(Debug, Clone, PartialEq)]
pub struct PostedReview {
    pub review: Review,
    pub avg_rating: f64,
}

/// Client for the catalog backend.
pub struct CatalogClient {
    http: Arc<dyn HttpClient>,
    base_url: String,
}

impl CatalogClient {
    pub fn new(http: Arc<dyn HttpClient>, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    /// `GET /styles` — the full catalog, in backend order.
    pub async fn list_styles(&self) -> Result<Vec<Style>, RequestError> {
        let url = format!("{}/styles", self.base_url);
        debug!(%url, "listing styles");
        let response = self.http.get(&url, &Headers::new()).await?;
        let envelope: StylesEnvelope = decode_read(&response)?;
        Ok(envelope.styles)
    }

    /// `GET /styles/{id}` — reviews and average for one style.
    pub async fn style_detail(&self, style_id: &str) -> Result<StyleDetail, RequestError> {
        let url = format!("{}/styles/{}", self.base_url, style_id);
        debug!(%url, "fetching style detail");
        let response = self.http.get(&url, &Headers::new()).await?;
        let envelope: DetailEnvelope = decode_read(&response)?;
        Ok(StyleDetail {
            reviews: envelope.reviews,
            avg_rating: envelope.avg_rating,
        })
    }

    /// `POST /styles/{id}/reviews` — create a review. Requires a bearer
    /// token; the token must be freshly issued by the caller, not cached.
    pub async fn submit_review(
        &self,
        style_id: &str,
        rating: u8,
        comment: &str,
        bearer_token: &str,
    ) -> Result<PostedReview, SubmitError> {
        let url = format!("{}/styles/{}/reviews", self.base_url, style_id);
        let body = serde_json::to_string(&ReviewBody { rating, comment }).map_err(|e| {
            SubmitError::Decode {
                message: e.to_string(),
            }
        })?;

        let mut headers = Headers::new();
        headers.insert(
            "Authorization".to_string(),
            format!("Bearer {}", bearer_token),
        );

        debug!(%url, rating, "submitting review");
        let response = self
            .http
            .post(&url, &body, &headers)
            .await
            .map_err(|e| SubmitError::Transport {
                message: e.to_string(),
            })?;

        if !response.is_success() {
            return Err(SubmitError::Rejected {
                status: response.status,
                message: rejection_message(&response),
            });
        }

        let envelope: PostedEnvelope =
            response.json().map_err(|e| SubmitError::Decode {
                message: e.to_string(),
            })?;
        Ok(PostedReview {
            review: envelope.review,
            avg_rating: envelope.avg_rating,
        })
    }

    /// `POST /auth/session` — let the backend establish a server-side
    /// session for this identity token. Best-effort; the response body is
    /// deliberately unused.
    pub async fn sync_session(&self, id_token: &str) -> Result<(), RequestError> {
        let url = format!("{}/auth/session", self.base_url);
        let body = serde_json::to_string(&SessionBody { id_token })
            .map_err(|e| RequestError::Decode(e.to_string()))?;
        debug!(%url, "syncing session");
        let response = self.http.post(&url, &body, &Headers::new()).await?;
        if !response.is_success() {
            return Err(RequestError::Status {
                status: response.status,
                body: response.text().unwrap_or_default(),
            });
        }
        Ok(())
    }
}

fn decode_read<T: serde::de::DeserializeOwned>(response: &Response) -> Result<T, RequestError> {
    if !response.is_success() {
        return Err(RequestError::Status {
            status: response.status,
            body: response.text().unwrap_or_default(),
        });
    }
    Ok(response.json()?)
}

/// The backend's `message` field when present, else the status line.
fn rejection_message(response: &Response) -> String {
    response
        .json::<ErrorBody>()
        .ok()
        .and_then(|b| b.message)
        .unwrap_or_else(|| format!("Request failed with status {}", response.status))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::MockHttpClient;

    fn client_with(mock: &MockHttpClient) -> CatalogClient {
        CatalogClient::new(Arc::new(mock.clone()), "http://api")
    }

    #[tokio::test]
    async fn list_styles_unwraps_envelope() {
        let mock = MockHttpClient::new();
        mock.set_json(
            "http://api/styles",
            200,
            r#"{"styles":[{"id":"a","name":"Classic","description":"d","imageURL":"u"}]}"#,
        );

        let styles = client_with(&mock).list_styles().await.unwrap();
        assert_eq!(styles.len(), 1);
        assert_eq!(styles[0].name, "Classic");
    }

    #[tokio::test]
    async fn list_styles_non_2xx_is_a_request_error() {
        let mock = MockHttpClient::new();
        mock.set_json("http://api/styles", 500, "oops");

        let err = client_with(&mock).list_styles().await.unwrap_err();
        assert!(matches!(err, RequestError::Status { status: 500, .. }));
    }

    #[tokio::test]
    async fn detail_defaults_missing_average_to_zero() {
        let mock = MockHttpClient::new();
        mock.set_json("http://api/styles/a", 200, r#"{"reviews":[]}"#);

        let detail = client_with(&mock).style_detail("a").await.unwrap();
        assert_eq!(detail.avg_rating, 0.0);
        assert!(detail.reviews.is_empty());
    }

    #[tokio::test]
    async fn submit_review_sends_bearer_header_and_json_body() {
        let mock = MockHttpClient::new();
        mock.set_json(
            "http://api/styles/a/reviews",
            201,
            r#"{"review":{"id":"r","rating":4,"comment":"nice","createdAt":"2026-01-05T12:00:00Z"},"avgRating":4.0}"#,
        );

        let posted = client_with(&mock)
            .submit_review("a", 4, "nice", "tok-123")
            .await
            .unwrap();
        assert_eq!(posted.avg_rating, 4.0);

        let requests = mock.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(
            requests[0].headers.get("Authorization"),
            Some(&"Bearer tok-123".to_string())
        );
        let body: serde_json::Value =
            serde_json::from_str(requests[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({"rating": 4, "comment": "nice"}));
    }

    #[tokio::test]
    async fn submit_review_surfaces_backend_message() {
        let mock = MockHttpClient::new();
        mock.set_json(
            "http://api/styles/a/reviews",
            401,
            r#"{"message":"Invalid token"}"#,
        );

        let err = client_with(&mock)
            .submit_review("a", 4, "nice", "bad")
            .await
            .unwrap_err();
        assert_eq!(err.user_message(), "Invalid token");
    }

    #[tokio::test]
    async fn submit_review_falls_back_to_status_line() {
        let mock = MockHttpClient::new();
        mock.set_json("http://api/styles/a/reviews", 502, "<html>bad gateway</html>");

        let err = client_with(&mock)
            .submit_review("a", 4, "nice", "tok")
            .await
            .unwrap_err();
        assert_eq!(err.user_message(), "Request failed with status 502");
    }

    #[tokio::test]
    async fn sync_session_posts_id_token() {
        let mock = MockHttpClient::new();
        mock.set_json("http://api/auth/session", 200, "{}");

        client_with(&mock).sync_session("tok").await.unwrap();

        let requests = mock.requests();
        let body: serde_json::Value =
            serde_json::from_str(requests[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({"idToken": "tok"}));
    }
}
