//! Poller configuration.

use std::time::Duration;

/// Statistics endpoint polled when no URL is given.
pub const DEFAULT_URL: &str = "http://srv.msk01.gigacorp.local/_stats";

/// Pause between poll cycles when no interval is given.
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(1);

/// Upper bound on a single fetch.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Consecutive fetch failures after which the diagnostic is printed.
pub const DEFAULT_FAILURE_THRESHOLD: u32 = 3;

/// Configuration for a [`Poller`](super::Poller).
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use statmon::poller::PollerConfig;
///
/// let config = PollerConfig::default()
///     .with_url("http://10.0.0.5/_stats")
///     .with_interval(Duration::from_millis(500));
/// assert_eq!(config.url, "http://10.0.0.5/_stats");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollerConfig {
    /// Statistics endpoint (GET)
    pub url: String,
    /// Pause between cycles
    pub interval: Duration,
    /// Request timeout
    pub timeout: Duration,
    /// Consecutive failures before the diagnostic
    pub failure_threshold: u32,
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            interval: DEFAULT_INTERVAL,
            timeout: DEFAULT_TIMEOUT,
            failure_threshold: DEFAULT_FAILURE_THRESHOLD,
        }
    }
}

impl PollerConfig {
    /// Set the statistics endpoint.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Set the pause between cycles.
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PollerConfig::default();
        assert_eq!(config.url, "http://srv.msk01.gigacorp.local/_stats");
        assert_eq!(config.interval, Duration::from_secs(1));
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.failure_threshold, 3);
    }

    #[test]
    fn test_builder() {
        let config = PollerConfig::default()
            .with_url("http://localhost:8080/_stats")
            .with_interval(Duration::from_millis(250))
            .with_timeout(Duration::from_secs(2));
        assert_eq!(config.url, "http://localhost:8080/_stats");
        assert_eq!(config.interval, Duration::from_millis(250));
        assert_eq!(config.timeout, Duration::from_secs(2));
        assert_eq!(config.failure_threshold, 3);
    }
}
