//! Report parsing errors.

use thiserror::Error;

use crate::report::{ReportField, FIELD_COUNT};

/// A report body that could not be turned into a valid report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The line did not split into exactly seven comma-separated parts.
    #[error("bad format: expected {} fields, got {found}", FIELD_COUNT)]
    WrongFieldCount { found: usize },

    /// A field did not convert to its numeric type.
    #[error("cannot parse {field}: {value:?}")]
    BadField { field: ReportField, value: String },

    /// A total was zero or negative.
    #[error("invalid {field}: {value}, must be positive")]
    InvalidTotal { field: ReportField, value: i64 },
}

impl ParseError {
    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            ParseError::WrongFieldCount { .. } => "E_REPORT_FIELD_COUNT",
            ParseError::BadField { .. } => "E_REPORT_BAD_FIELD",
            ParseError::InvalidTotal { .. } => "E_REPORT_INVALID_TOTAL",
        }
    }

    /// The offending field, if the error is about a single field.
    pub fn field(&self) -> Option<ReportField> {
        match self {
            ParseError::WrongFieldCount { .. } => None,
            ParseError::BadField { field, .. } | ParseError::InvalidTotal { field, .. } => {
                Some(*field)
            }
        }
    }
}
