//! Report fetch errors.

use thiserror::Error;

use crate::traits::HttpError;

/// Failure to obtain a report body from the statistics endpoint.
#[derive(Debug, Clone, Error)]
pub enum FetchError {
    /// The request itself failed (connect, timeout, bad URL, ...).
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The server answered with a non-success status.
    #[error("bad status: {status}")]
    Status { status: u16 },

    /// The body is not valid UTF-8.
    #[error("response body is not valid UTF-8")]
    InvalidBody,

    /// A body line exceeds the report line limit.
    #[error("response line exceeds {limit} bytes")]
    BodyTooLarge { limit: usize },
}

impl FetchError {
    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            FetchError::Http(HttpError::Timeout(_)) => "E_FETCH_TIMEOUT",
            FetchError::Http(HttpError::ConnectionFailed(_)) => "E_FETCH_CONN",
            FetchError::Http(HttpError::InvalidUrl(_)) => "E_FETCH_URL",
            FetchError::Http(HttpError::BodyTooLarge(_)) => "E_FETCH_TOO_LARGE",
            FetchError::Http(_) => "E_FETCH_HTTP",
            FetchError::Status { .. } => "E_FETCH_STATUS",
            FetchError::InvalidBody => "E_FETCH_BODY",
            FetchError::BodyTooLarge { .. } => "E_FETCH_TOO_LARGE",
        }
    }
}
