//! Poll driver.
//!
//! One cycle is: fetch the report, track fetch failures, parse and evaluate
//! the report, print the alerts. [`Poller::run`] repeats cycles forever with
//! a fixed pause in between. Cycles never overlap and no error leaves the
//! loop.

pub mod config;
pub mod failures;
pub mod fetcher;

pub use config::PollerConfig;
pub use failures::FailureTracker;
pub use fetcher::StatsFetcher;

use std::io::{self, Write};
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::error::CycleError;
use crate::report::{
    check_total, disk_alert, load_alert, memory_alert, network_alert, parse_fields, Alert,
    ReportField,
};
use crate::traits::HttpClient;

/// Printed when the fetch-failure streak reaches the threshold.
pub const FETCH_DIAGNOSTIC: &str = "Unable to fetch server statistic.";

/// Result of one poll cycle: the alerts of a fully evaluated report, or why
/// the cycle fell short.
pub type CycleResult = Result<Vec<Alert>, CycleError>;

/// A threshold rule over `(used, total)` with `total` already validated.
type TotalRule = fn(i64, i64) -> Option<Alert>;

/// Parse a raw report and evaluate it.
///
/// Each rule runs as soon as the fields it reads are valid: load first, then
/// memory, disk and network, each right after its total is checked. A
/// non-positive total stops evaluation there, and the alerts raised before
/// it travel in [`CycleError::Parse`].
pub fn check_report(raw: &str) -> CycleResult {
    let fields = parse_fields(raw).map_err(|source| CycleError::Parse {
        source,
        alerts: Vec::new(),
    })?;
    let mut alerts: Vec<Alert> = load_alert(fields.load).into_iter().collect();

    let rules: [(ReportField, i64, i64, TotalRule); 3] = [
        (
            ReportField::TotalMemory,
            fields.total_memory,
            fields.used_memory,
            memory_alert,
        ),
        (
            ReportField::TotalDisk,
            fields.total_disk,
            fields.used_disk,
            disk_alert,
        ),
        (
            ReportField::TotalNetBandwidth,
            fields.total_net_bandwidth,
            fields.used_net_bandwidth,
            network_alert,
        ),
    ];
    for (field, total, used, rule) in rules {
        if let Err(source) = check_total(field, total) {
            return Err(CycleError::Parse { source, alerts });
        }
        alerts.extend(rule(used, total));
    }
    Ok(alerts)
}

/// Write the user-visible lines of a cycle: one per alert, plus the fetch
/// diagnostic when it is due.
pub fn emit<W: Write>(result: &CycleResult, out: &mut W) -> io::Result<()> {
    match result {
        Ok(alerts) => {
            for alert in alerts {
                writeln!(out, "{}", alert)?;
            }
        }
        Err(err) => {
            for alert in err.alerts() {
                writeln!(out, "{}", alert)?;
            }
            if let CycleError::Fetch {
                diagnostic: true, ..
            } = err
            {
                writeln!(out, "{}", FETCH_DIAGNOSTIC)?;
            }
        }
    }
    out.flush()
}

/// Sequential statistics poller.
pub struct Poller<C> {
    fetcher: StatsFetcher<C>,
    interval: Duration,
    failures: FailureTracker,
}

impl<C: HttpClient> Poller<C> {
    /// Build a poller from an HTTP client and configuration.
    ///
    /// The client is expected to enforce `config.timeout` itself.
    pub fn new(client: C, config: &PollerConfig) -> Self {
        Self {
            fetcher: StatsFetcher::new(client, config.url.clone()),
            interval: config.interval,
            failures: FailureTracker::new(config.failure_threshold),
        }
    }

    pub fn fetcher(&self) -> &StatsFetcher<C> {
        &self.fetcher
    }

    /// Current fetch-failure streak.
    pub fn consecutive_failures(&self) -> u32 {
        self.failures.consecutive()
    }

    /// Run one cycle without printing anything.
    ///
    /// A successful fetch resets the failure streak before the report is
    /// parsed, so a rejected report never counts toward the streak.
    pub async fn poll_once(&mut self) -> CycleResult {
        let raw = match self.fetcher.fetch().await {
            Ok(raw) => raw,
            Err(source) => {
                let diagnostic = self.failures.record_failure();
                let streak = self.failures.consecutive();
                warn!(
                    code = source.error_code(),
                    streak,
                    "Failed to fetch statistics: {}",
                    source
                );
                return Err(CycleError::Fetch {
                    source,
                    streak,
                    diagnostic,
                });
            }
        };
        self.failures.record_success();

        let result = check_report(&raw);
        match &result {
            Ok(alerts) => debug!(alerts = alerts.len(), "Report evaluated"),
            Err(CycleError::Parse { source, alerts }) => warn!(
                code = source.error_code(),
                field = ?source.field(),
                alerts = alerts.len(),
                "Rejected statistics report: {}",
                source
            ),
            Err(err) => warn!(code = err.error_code(), "Cycle failed: {}", err),
        }
        result
    }

    /// Run one cycle and print its lines to `out`.
    pub async fn cycle<W: Write>(&mut self, out: &mut W) -> CycleResult {
        let result = self.poll_once().await;
        if let Err(e) = emit(&result, out) {
            warn!("Failed to write alerts: {}", e);
        }
        result
    }

    /// Run `count` cycles, pausing the configured interval after each one.
    pub async fn run_cycles<W: Write>(&mut self, count: usize, out: &mut W) -> Vec<CycleResult> {
        let mut results = Vec::with_capacity(count);
        for _ in 0..count {
            results.push(self.cycle(out).await);
            tokio::time::sleep(self.interval).await;
        }
        results
    }

    /// Poll forever, printing to stdout.
    pub async fn run(mut self) {
        info!(
            url = self.fetcher.url(),
            interval = ?self.interval,
            "Polling statistics endpoint"
        );
        let mut stdout = io::stdout();
        loop {
            let _ = self.cycle(&mut stdout).await;
            tokio::time::sleep(self.interval).await;
        }
    }
}
