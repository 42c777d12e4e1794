//! Reqwest-based HTTP client adapter.
//!
//! Production implementation of the [`HttpClient`] trait from `crate::traits`.

use std::time::Duration;

use async_trait::async_trait;
use bytes::{Bytes, BytesMut};

use crate::traits::{HttpClient, HttpError, Response};

/// Largest response body buffered unless overridden.
pub const DEFAULT_MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

/// HTTP client implementation using reqwest.
///
/// # Example
///
/// ```ignore
/// use std::time::Duration;
/// use statmon::adapters::ReqwestHttpClient;
/// use statmon::traits::HttpClient;
///
/// let client = ReqwestHttpClient::with_timeout(Duration::from_secs(5))?;
/// let response = client.get("http://localhost/_stats").await?;
/// println!("Status: {}", response.status);
/// ```
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
    max_body_bytes: usize,
}

impl ReqwestHttpClient {
    /// Create a client whose requests fail after `timeout`.
    ///
    /// The timeout covers the whole request, from connect to the last body
    /// byte.
    pub fn with_timeout(timeout: Duration) -> Result<Self, HttpError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(Self::convert_error)?;
        Ok(Self {
            client,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        })
    }

    /// Set the largest response body this client will buffer.
    pub fn with_max_body_bytes(mut self, limit: usize) -> Self {
        self.max_body_bytes = limit;
        self
    }

    pub fn max_body_bytes(&self) -> usize {
        self.max_body_bytes
    }

    /// Read the body chunk by chunk, giving up once it passes the limit.
    async fn read_body(&self, mut response: reqwest::Response) -> Result<Bytes, HttpError> {
        let limit = self.max_body_bytes;
        if response.content_length().is_some_and(|len| len > limit as u64) {
            return Err(HttpError::BodyTooLarge(limit));
        }

        let mut body = BytesMut::new();
        while let Some(chunk) = response.chunk().await.map_err(Self::convert_error)? {
            if body.len() + chunk.len() > limit {
                return Err(HttpError::BodyTooLarge(limit));
            }
            body.extend_from_slice(&chunk);
        }
        Ok(body.freeze())
    }

    /// Convert reqwest error to HttpError.
    fn convert_error(err: reqwest::Error) -> HttpError {
        if err.is_timeout() {
            HttpError::Timeout(err.to_string())
        } else if err.is_connect() {
            HttpError::ConnectionFailed(err.to_string())
        } else if err.is_builder() {
            HttpError::InvalidUrl(err.to_string())
        } else {
            HttpError::Other(err.to_string())
        }
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn get(&self, url: &str) -> Result<Response, HttpError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(Self::convert_error)?;

        let status = response.status().as_u16();
        let body = self.read_body(response).await?;

        Ok(Response::new(status, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_timeout() {
        let client = ReqwestHttpClient::with_timeout(Duration::from_secs(5));
        assert!(client.is_ok());
    }

    #[test]
    fn test_body_limit() {
        let client = ReqwestHttpClient::with_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(client.max_body_bytes(), DEFAULT_MAX_BODY_BYTES);

        let client = client.with_max_body_bytes(64);
        assert_eq!(client.max_body_bytes(), 64);
    }

    #[tokio::test]
    async fn test_get_invalid_url() {
        let client = ReqwestHttpClient::with_timeout(Duration::from_secs(1)).unwrap();
        let result = client.get("not-a-valid-url").await;
        assert!(matches!(result, Err(HttpError::InvalidUrl(_))));
    }

    #[tokio::test]
    async fn test_get_connection_refused() {
        let client = ReqwestHttpClient::with_timeout(Duration::from_secs(1)).unwrap();
        // Use a port that's unlikely to be in use
        let result = client.get("http://127.0.0.1:59999/_stats").await;
        assert!(result.is_err());
        if let Err(e) = result {
            assert!(matches!(
                e,
                HttpError::ConnectionFailed(_) | HttpError::Timeout(_) | HttpError::Other(_)
            ));
        }
    }
}
