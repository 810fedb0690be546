//! Mock HTTP client for tests.
//!
//! Returns canned responses keyed by URL and records every request so tests
//! can assert on exactly what went over the wire — including that nothing
//! did.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::traits::{Headers, HttpClient, HttpError, Response};

/// A recorded HTTP request.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// "GET" or "POST"
    pub method: String,
    pub url: String,
    pub headers: Headers,
    /// Body for POST requests
    pub body: Option<String>,
}

/// Canned behaviour for a URL.
#[derive(Debug, Clone)]
pub enum MockResponse {
    Success(Response),
    Error(HttpError),
}

/// Recording mock implementation of [`HttpClient`].
#[derive(Debug, Clone, Default)]
pub struct MockHttpClient {
    responses: Arc<Mutex<HashMap<String, MockResponse>>>,
    default_response: Arc<Mutex<Option<MockResponse>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the response for an exact URL.
    pub fn set_response(&self, url: &str, response: MockResponse) {
        self.responses
            .lock()
            .unwrap()
            .insert(url.to_string(), response);
    }

    /// Shorthand: a 2xx JSON body for an exact URL.
    pub fn set_json(&self, url: &str, status: u16, json: &str) {
        self.set_response(
            url,
            MockResponse::Success(Response::new(status, bytes::Bytes::from(json.to_string()))),
        );
    }

    /// Set the response used when no exact URL matches.
    pub fn set_default_response(&self, response: MockResponse) {
        *self.default_response.lock().unwrap() = Some(response);
    }

    /// All requests made so far, in order.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Number of requests made so far.
    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn clear_requests(&self) {
        self.requests.lock().unwrap().clear();
    }

    fn record(&self, method: &str, url: &str, headers: &Headers, body: Option<String>) {
        self.requests.lock().unwrap().push(RecordedRequest {
            method: method.to_string(),
            url: url.to_string(),
            headers: headers.clone(),
            body,
        });
    }

    fn lookup(&self, url: &str) -> Result<Response, HttpError> {
        let canned = {
            let responses = self.responses.lock().unwrap();
            responses
                .get(url)
                .cloned()
                .or_else(|| self.default_response.lock().unwrap().clone())
        };
        match canned {
            Some(MockResponse::Success(response)) => Ok(response),
            Some(MockResponse::Error(err)) => Err(err),
            None => Err(HttpError::Other(format!("no mock response for {}", url))),
        }
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.record("GET", url, headers, None);
        self.lookup(url)
    }

    async fn post(&self, url: &str, body: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.record("POST", url, headers, Some(body.to_string()));
        self.lookup(url)
    }
}
