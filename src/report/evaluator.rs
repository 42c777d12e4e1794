//! Threshold rules over a parsed report.
//!
//! Each rule is independent and recomputed from the report it is given;
//! nothing is carried over between polls.

use std::fmt;

use super::ParsedReport;

/// Load average above which an alert fires.
pub const LOAD_THRESHOLD: f64 = 30.0;

/// Memory usage percentage above which an alert fires.
pub const MEMORY_PERCENT_THRESHOLD: i64 = 80;

/// Fraction of total disk space above which an alert fires.
pub const DISK_USAGE_THRESHOLD: f64 = 0.9;

/// Fraction of total network bandwidth above which an alert fires.
pub const NETWORK_USAGE_THRESHOLD: f64 = 0.9;

/// Bytes per megabyte for free disk space (binary).
const BYTES_PER_MB: i64 = 1024 * 1024;

/// Bytes/sec per reported Mbit/s for available bandwidth (decimal).
const BYTES_PER_MBIT: i64 = 1_000_000;

/// Resource dimension an alert belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlertKind {
    Load,
    Memory,
    Disk,
    Network,
}

/// A threshold violation, rendered through [`fmt::Display`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Alert {
    /// Load average is above [`LOAD_THRESHOLD`].
    HighLoad { load: f64 },
    /// Memory usage percentage is above [`MEMORY_PERCENT_THRESHOLD`].
    HighMemory { percent: i64 },
    /// Disk usage is above [`DISK_USAGE_THRESHOLD`] of the total.
    LowDiskSpace { free_mb: i64 },
    /// Network usage is above [`NETWORK_USAGE_THRESHOLD`] of the total.
    HighNetworkUsage { available_mbit: i64 },
}

impl Alert {
    pub fn kind(&self) -> AlertKind {
        match self {
            Alert::HighLoad { .. } => AlertKind::Load,
            Alert::HighMemory { .. } => AlertKind::Memory,
            Alert::LowDiskSpace { .. } => AlertKind::Disk,
            Alert::HighNetworkUsage { .. } => AlertKind::Network,
        }
    }
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Alert::HighLoad { load } => {
                // Whole numbers print without decimals, everything else with two.
                if load.fract() == 0.0 {
                    write!(f, "Load Average is too high: {:.0}", load)
                } else {
                    write!(f, "Load Average is too high: {:.2}", load)
                }
            }
            Alert::HighMemory { percent } => write!(f, "Memory usage too high: {}%", percent),
            Alert::LowDiskSpace { free_mb } => {
                write!(f, "Free disk space is too low: {} Mb left", free_mb)
            }
            Alert::HighNetworkUsage { available_mbit } => write!(
                f,
                "Network bandwidth usage high: {} Mbit/s available",
                available_mbit
            ),
        }
    }
}

/// Run every rule against a report, in load, memory, disk, network order.
pub fn evaluate(report: &ParsedReport) -> Vec<Alert> {
    [
        load_alert(report.load),
        memory_alert(report.used_memory, report.total_memory),
        disk_alert(report.used_disk, report.total_disk),
        network_alert(report.used_net_bandwidth, report.total_net_bandwidth),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Load rule. Depends on no total, so it can run before totals are validated.
pub fn load_alert(load: f64) -> Option<Alert> {
    (load > LOAD_THRESHOLD).then_some(Alert::HighLoad { load })
}

/// Memory rule: truncating integer percentage, strictly above 80.
///
/// `total` must be positive.
pub fn memory_alert(used: i64, total: i64) -> Option<Alert> {
    let percent = i128::from(used) * 100 / i128::from(total);
    let percent = i64::try_from(percent).unwrap_or(if percent > 0 { i64::MAX } else { i64::MIN });
    (percent > MEMORY_PERCENT_THRESHOLD).then_some(Alert::HighMemory { percent })
}

/// Disk rule: fires above 90% usage, reports free space in binary megabytes.
///
/// `total` must be positive.
pub fn disk_alert(used: i64, total: i64) -> Option<Alert> {
    if (used as f64) <= (total as f64) * DISK_USAGE_THRESHOLD {
        return None;
    }
    let free_mb = total.saturating_sub(used).max(0) / BYTES_PER_MB;
    Some(Alert::LowDiskSpace { free_mb })
}

/// Network rule: fires above 90% usage, reports headroom in decimal Mbit/s.
///
/// `total` must be positive.
pub fn network_alert(used: i64, total: i64) -> Option<Alert> {
    if (used as f64) <= (total as f64) * NETWORK_USAGE_THRESHOLD {
        return None;
    }
    let available_mbit = total.saturating_sub(used).max(0) / BYTES_PER_MBIT;
    Some(Alert::HighNetworkUsage { available_mbit })
}
