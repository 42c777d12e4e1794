//! Outcome of a failed poll cycle.

use thiserror::Error;

use super::{FetchError, ParseError};
use crate::report::Alert;

/// Why a poll cycle did not produce a fully evaluated report.
///
/// Neither variant is fatal; the driver logs it and moves on to the next
/// cycle.
#[derive(Debug, Clone, Error)]
pub enum CycleError {
    /// The report could not be fetched.
    #[error("fetch failed ({streak} in a row): {source}")]
    Fetch {
        source: FetchError,
        /// Consecutive fetch failures including this one
        streak: u32,
        /// Whether this failure crossed the diagnostic threshold
        diagnostic: bool,
    },

    /// The report was fetched but rejected.
    #[error("report rejected: {source}")]
    Parse {
        source: ParseError,
        /// Alerts that were still raised before the report was rejected
        alerts: Vec<Alert>,
    },
}

impl CycleError {
    /// Alerts that must still be printed for this cycle.
    pub fn alerts(&self) -> &[Alert] {
        match self {
            CycleError::Fetch { .. } => &[],
            CycleError::Parse { alerts, .. } => alerts,
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            CycleError::Fetch { source, .. } => source.error_code(),
            CycleError::Parse { source, .. } => source.error_code(),
        }
    }
}
