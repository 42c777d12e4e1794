//! Mock HTTP client for testing.
//!
//! Responses are scripted up front: queued responses are served in order,
//! then the default response (if any) is served for every further request.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::traits::{HttpClient, HttpError, Response};

/// Configuration for a mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Return a response (any status)
    Success(Response),
    /// Return an error
    Error(HttpError),
}

impl MockResponse {
    /// A 200 response carrying `body`.
    pub fn ok(body: &str) -> Self {
        MockResponse::Success(Response::new(200, body.to_string()))
    }

    /// A response with the given status and an empty body.
    pub fn status(status: u16) -> Self {
        MockResponse::Success(Response::new(status, bytes::Bytes::new()))
    }

    /// A connection failure.
    pub fn refused() -> Self {
        MockResponse::Error(HttpError::ConnectionFailed("connection refused".to_string()))
    }
}

/// Mock HTTP client for testing.
///
/// # Example
///
/// ```ignore
/// use statmon::adapters::mock::{MockHttpClient, MockResponse};
///
/// let client = MockHttpClient::new();
/// client.push_response(MockResponse::refused());
/// client.push_response(MockResponse::ok("1,100,50,100,10,100,1"));
///
/// assert!(client.get("http://host/_stats").await.is_err());
/// assert_eq!(client.get("http://host/_stats").await?.status, 200);
/// assert_eq!(client.get_requests().len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockHttpClient {
    /// Responses served in order
    queue: Arc<Mutex<VecDeque<MockResponse>>>,
    /// Response once the queue is empty
    default_response: Arc<Mutex<Option<MockResponse>>>,
    /// Requested URLs, in order
    requests: Arc<Mutex<Vec<String>>>,
}

impl MockHttpClient {
    /// Create a new mock HTTP client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response for the next unanswered request.
    pub fn push_response(&self, response: MockResponse) {
        self.queue.lock().unwrap().push_back(response);
    }

    /// Set the response served once the queue is exhausted.
    pub fn set_default_response(&self, response: MockResponse) {
        *self.default_response.lock().unwrap() = Some(response);
    }

    /// Get all requested URLs.
    pub fn get_requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    fn next_response(&self) -> Option<MockResponse> {
        if let Some(response) = self.queue.lock().unwrap().pop_front() {
            return Some(response);
        }
        self.default_response.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn get(&self, url: &str) -> Result<Response, HttpError> {
        self.requests.lock().unwrap().push(url.to_string());

        match self.next_response() {
            Some(MockResponse::Success(response)) => Ok(response),
            Some(MockResponse::Error(err)) => Err(err),
            None => Err(HttpError::Other(format!("No mock response for URL: {}", url))),
        }
    }
}
