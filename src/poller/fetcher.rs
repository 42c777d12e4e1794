//! Fetching the raw report from the statistics endpoint.

use crate::error::FetchError;
use crate::traits::HttpClient;

/// Longest accepted line in a report body.
///
/// This is a format check on the decoded body. Memory is bounded by the
/// client's own body limit
/// ([`ReqwestHttpClient::with_max_body_bytes`](crate::adapters::ReqwestHttpClient::with_max_body_bytes)).
pub const MAX_REPORT_LINE_BYTES: usize = 10 * 1024 * 1024;

/// Fetches raw report text from a single endpoint.
#[derive(Debug, Clone)]
pub struct StatsFetcher<C> {
    client: C,
    url: String,
}

impl<C: HttpClient> StatsFetcher<C> {
    pub fn new(client: C, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// GET the endpoint and return its body as one logical string.
    ///
    /// Any non-2xx status is a failure. Body lines are re-joined with `\n`
    /// with trailing `\r` removed.
    pub async fn fetch(&self) -> Result<String, FetchError> {
        let response = self.client.get(&self.url).await?;
        if !response.is_success() {
            return Err(FetchError::Status {
                status: response.status,
            });
        }

        let body = response.text().map_err(|_| FetchError::InvalidBody)?;
        normalize_body(&body)
    }
}

fn normalize_body(body: &str) -> Result<String, FetchError> {
    let mut lines = Vec::new();
    for line in body.lines() {
        if line.len() > MAX_REPORT_LINE_BYTES {
            return Err(FetchError::BodyTooLarge {
                limit: MAX_REPORT_LINE_BYTES,
            });
        }
        lines.push(line);
    }
    Ok(lines.join("\n"))
}
