//! Trait abstractions for dependency injection and testability.
//!
//! - [`HttpClient`] - fetching the statistics endpoint

pub mod http;

pub use http::{HttpClient, HttpError, Response};
