//! Statistics report model, parsing, and threshold evaluation.
//!
//! A monitored host answers with a single comma-separated line:
//!
//! ```text
//! load,totalMemory,usedMemory,totalDisk,usedDisk,totalNet,usedNet
//! ```
//!
//! [`parser`] turns that line into a [`ParsedReport`], and [`evaluator`]
//! turns a report into zero or more [`Alert`]s.

pub mod evaluator;
pub mod parser;

pub use evaluator::{disk_alert, evaluate, load_alert, memory_alert, network_alert, Alert, AlertKind};
pub use parser::{check_total, parse, parse_fields, ReportFields};

use std::fmt;

/// Number of comma-separated fields in a report line.
pub const FIELD_COUNT: usize = 7;

/// Positional fields of a report line, in wire order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportField {
    Load,
    TotalMemory,
    UsedMemory,
    TotalDisk,
    UsedDisk,
    TotalNetBandwidth,
    UsedNetBandwidth,
}

impl ReportField {
    /// All fields in wire order.
    pub const ALL: [ReportField; FIELD_COUNT] = [
        ReportField::Load,
        ReportField::TotalMemory,
        ReportField::UsedMemory,
        ReportField::TotalDisk,
        ReportField::UsedDisk,
        ReportField::TotalNetBandwidth,
        ReportField::UsedNetBandwidth,
    ];

    /// Zero-based position of the field in the report line.
    pub fn index(&self) -> usize {
        match self {
            ReportField::Load => 0,
            ReportField::TotalMemory => 1,
            ReportField::UsedMemory => 2,
            ReportField::TotalDisk => 3,
            ReportField::UsedDisk => 4,
            ReportField::TotalNetBandwidth => 5,
            ReportField::UsedNetBandwidth => 6,
        }
    }

    /// Field name as used in the report format description.
    pub fn name(&self) -> &'static str {
        match self {
            ReportField::Load => "load",
            ReportField::TotalMemory => "totalMemory",
            ReportField::UsedMemory => "usedMemory",
            ReportField::TotalDisk => "totalDisk",
            ReportField::UsedDisk => "usedDisk",
            ReportField::TotalNetBandwidth => "totalNetBandwidth",
            ReportField::UsedNetBandwidth => "usedNetBandwidth",
        }
    }
}

impl fmt::Display for ReportField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (field {})", self.name(), self.index())
    }
}

/// A validated statistics report.
///
/// Every total is strictly positive. Used values are not range-checked and
/// may exceed their totals or be negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParsedReport {
    /// Load average
    pub load: f64,
    /// Total memory in bytes
    pub total_memory: i64,
    /// Used memory in bytes
    pub used_memory: i64,
    /// Total disk space in bytes
    pub total_disk: i64,
    /// Used disk space in bytes
    pub used_disk: i64,
    /// Total network bandwidth in bytes/sec
    pub total_net_bandwidth: i64,
    /// Used network bandwidth in bytes/sec
    pub used_net_bandwidth: i64,
}
