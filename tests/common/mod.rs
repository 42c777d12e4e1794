//! Common test utilities for integration tests.

use std::time::Duration;

use statmon::adapters::ReqwestHttpClient;
use statmon::poller::{Poller, PollerConfig};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Path the mock statistics server answers on.
pub const STATS_PATH: &str = "/_stats";

/// A report that stays below every threshold.
pub const QUIET_REPORT: &str = "1.5,1000,100,1000000000,100000000,100000000,1000000";

/// A report that crosses every threshold.
pub const LOUD_REPORT: &str = "31,100,81,1000000000,950000000,100000000,95000000";

/// Poller pointed at `server` with a short interval and timeout.
pub fn poller_for(server: &MockServer) -> Poller<ReqwestHttpClient> {
    let config = PollerConfig::default()
        .with_url(format!("{}{}", server.uri(), STATS_PATH))
        .with_interval(Duration::from_millis(5))
        .with_timeout(Duration::from_millis(200));
    let client = ReqwestHttpClient::with_timeout(config.timeout).unwrap();
    Poller::new(client, &config)
}

/// Answer the next `times` requests with `template`.
pub async fn respond_n(server: &MockServer, template: ResponseTemplate, times: u64) {
    Mock::given(method("GET"))
        .and(path(STATS_PATH))
        .respond_with(template)
        .up_to_n_times(times)
        .mount(server)
        .await;
}

/// Answer every remaining request with `template`.
pub async fn respond_always(server: &MockServer, template: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(STATS_PATH))
        .respond_with(template)
        .mount(server)
        .await;
}

/// Run `cycles` cycles and return what was printed.
pub async fn printed(poller: &mut Poller<ReqwestHttpClient>, cycles: usize) -> String {
    let mut out = Vec::new();
    poller.run_cycles(cycles, &mut out).await;
    String::from_utf8(out).unwrap()
}
