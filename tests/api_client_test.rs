//! HTTP-level tests for the catalog client, against a wiremock server and
//! the production reqwest adapter.

use std::sync::Arc;

use lookbook::adapters::ReqwestHttpClient;
use lookbook::api::CatalogClient;
use lookbook::error::{RequestError, SubmitError};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn client_for(server: &MockServer) -> CatalogClient {
    CatalogClient::new(Arc::new(ReqwestHttpClient::new()), server.uri())
}

#[tokio::test]
async fn list_styles_returns_backend_order_and_normalizes_ids() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/styles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "styles": [
                {"_id": "m1", "name": "Chiffon", "description": "d1", "imageURL": "u1"},
                {"id": "p2", "name": "Classic", "description": "d2", "imageURL": "u2"}
            ]
        })))
        .mount(&server)
        .await;

    let styles = client_for(&server).await.list_styles().await.unwrap();
    assert_eq!(styles.len(), 2);
    assert_eq!(styles[0].id, "m1");
    assert_eq!(styles[1].id, "p2");
    assert_eq!(styles[0].name, "Chiffon");
}

#[tokio::test]
async fn list_styles_server_error_is_a_request_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/styles"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = client_for(&server).await.list_styles().await.unwrap_err();
    assert!(matches!(err, RequestError::Status { status: 500, .. }));
}

#[tokio::test]
async fn style_detail_parses_reviews_and_average() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/styles/a"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "reviews": [
                {"_id": "r1", "rating": 5, "comment": "great",
                 "userEmail": "a@b.c", "createdAt": "2026-02-01T10:00:00Z"},
                {"id": "r2", "rating": 3, "comment": "ok",
                 "createdAt": "2026-01-01T10:00:00Z"}
            ],
            "avgRating": 4.0
        })))
        .mount(&server)
        .await;

    let detail = client_for(&server).await.style_detail("a").await.unwrap();
    assert_eq!(detail.avg_rating, 4.0);
    assert_eq!(detail.reviews.len(), 2);
    assert_eq!(detail.reviews[0].id, "r1");
    assert_eq!(detail.reviews[1].author(), "Anonymous");
}

#[tokio::test]
async fn style_detail_with_no_reviews_defaults_average_to_zero() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/styles/a"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"reviews": []})),
        )
        .mount(&server)
        .await;

    let detail = client_for(&server).await.style_detail("a").await.unwrap();
    assert_eq!(detail.avg_rating, 0.0);
    assert!(detail.reviews.is_empty());
}

#[tokio::test]
async fn submit_review_sends_bearer_header_and_exact_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/styles/a/reviews"))
        .and(header("Authorization", "Bearer tok-123"))
        .and(body_json(serde_json::json!({"rating": 4, "comment": "nice"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "review": {"_id": "r9", "rating": 4, "comment": "nice",
                       "userEmail": "a@b.c", "createdAt": "2026-02-01T10:00:00Z"},
            "avgRating": 4.0
        })))
        .expect(1)
        .mount(&server)
        .await;

    let posted = client_for(&server)
        .await
        .submit_review("a", 4, "nice", "tok-123")
        .await
        .unwrap();
    assert_eq!(posted.review.id, "r9");
    assert_eq!(posted.avg_rating, 4.0);
}

#[tokio::test]
async fn submit_review_surfaces_backend_message_field() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/styles/a/reviews"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(serde_json::json!({"message": "Invalid token"})),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .await
        .submit_review("a", 4, "nice", "bad")
        .await
        .unwrap_err();
    assert!(matches!(err, SubmitError::Rejected { status: 401, .. }));
    assert_eq!(err.user_message(), "Invalid token");
}

#[tokio::test]
async fn submit_review_without_message_field_reports_the_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/styles/a/reviews"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .await
        .submit_review("a", 4, "nice", "tok")
        .await
        .unwrap_err();
    assert_eq!(err.user_message(), "Request failed with status 500");
}

#[tokio::test]
async fn submit_review_transport_failure_uses_the_transport_message() {
    // No server listening on this port.
    let client = CatalogClient::new(
        Arc::new(ReqwestHttpClient::new()),
        "http://127.0.0.1:59998",
    );
    let err = client.submit_review("a", 4, "nice", "tok").await.unwrap_err();
    assert!(matches!(err, SubmitError::Transport { .. }));
    assert!(!err.user_message().is_empty());
}

#[tokio::test]
async fn sync_session_posts_the_id_token_and_ignores_the_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/session"))
        .and(body_json(serde_json::json!({"idToken": "tok"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"whatever": true})),
        )
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server).await.sync_session("tok").await.unwrap();
}
