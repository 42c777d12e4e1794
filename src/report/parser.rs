//! Report line parsing.
//!
//! Parsing happens in two stages so the driver can run the load rule on
//! numerically valid input before the totals are checked:
//!
//! 1. [`parse_fields`] splits the line and converts every field.
//! 2. [`ReportFields::validate`] rejects non-positive totals.
//!
//! [`parse`] runs both stages. [`check_total`] checks a single total, for
//! callers that run each rule as soon as its total is known to be valid.

use std::str::FromStr;

use super::{ParsedReport, ReportField, FIELD_COUNT};
use crate::error::ParseError;

/// Numerically converted report fields whose totals have not been checked yet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReportFields {
    pub load: f64,
    pub total_memory: i64,
    pub used_memory: i64,
    pub total_disk: i64,
    pub used_disk: i64,
    pub total_net_bandwidth: i64,
    pub used_net_bandwidth: i64,
}

impl ReportFields {
    /// Check that every total is strictly positive.
    ///
    /// Totals are checked in memory, disk, network order and the first
    /// violation is reported.
    pub fn validate(self) -> Result<ParsedReport, ParseError> {
        check_total(ReportField::TotalMemory, self.total_memory)?;
        check_total(ReportField::TotalDisk, self.total_disk)?;
        check_total(ReportField::TotalNetBandwidth, self.total_net_bandwidth)?;

        Ok(ParsedReport {
            load: self.load,
            total_memory: self.total_memory,
            used_memory: self.used_memory,
            total_disk: self.total_disk,
            used_disk: self.used_disk,
            total_net_bandwidth: self.total_net_bandwidth,
            used_net_bandwidth: self.used_net_bandwidth,
        })
    }
}

/// Split a raw report into its seven fields and convert each one.
///
/// Whitespace around the whole line and around each field is ignored.
pub fn parse_fields(raw: &str) -> Result<ReportFields, ParseError> {
    let parts: Vec<&str> = raw.trim().split(',').collect();
    if parts.len() != FIELD_COUNT {
        return Err(ParseError::WrongFieldCount { found: parts.len() });
    }

    Ok(ReportFields {
        load: convert(&parts, ReportField::Load)?,
        total_memory: convert(&parts, ReportField::TotalMemory)?,
        used_memory: convert(&parts, ReportField::UsedMemory)?,
        total_disk: convert(&parts, ReportField::TotalDisk)?,
        used_disk: convert(&parts, ReportField::UsedDisk)?,
        total_net_bandwidth: convert(&parts, ReportField::TotalNetBandwidth)?,
        used_net_bandwidth: convert(&parts, ReportField::UsedNetBandwidth)?,
    })
}

/// Parse and validate a raw report.
pub fn parse(raw: &str) -> Result<ParsedReport, ParseError> {
    parse_fields(raw)?.validate()
}

/// Reject a non-positive total.
pub fn check_total(field: ReportField, value: i64) -> Result<i64, ParseError> {
    if value <= 0 {
        return Err(ParseError::InvalidTotal { field, value });
    }
    Ok(value)
}

fn convert<T: FromStr>(parts: &[&str], field: ReportField) -> Result<T, ParseError> {
    let text = parts[field.index()].trim();
    text.parse().map_err(|_| ParseError::BadField {
        field,
        value: text.to_string(),
    })
}
