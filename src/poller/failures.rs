//! Consecutive fetch-failure tracking.

/// Counts consecutive fetch failures and decides when the diagnostic fires.
///
/// The diagnostic fires once per streak, on the failure that brings the
/// count to the threshold. Only a success resets the count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureTracker {
    threshold: u32,
    consecutive: u32,
}

impl FailureTracker {
    pub fn new(threshold: u32) -> Self {
        Self {
            threshold,
            consecutive: 0,
        }
    }

    /// Record a failure. Returns `true` if the diagnostic should be shown.
    pub fn record_failure(&mut self) -> bool {
        self.consecutive = self.consecutive.saturating_add(1);
        self.consecutive == self.threshold
    }

    pub fn record_success(&mut self) {
        self.consecutive = 0;
    }

    /// Current streak length.
    pub fn consecutive(&self) -> u32 {
        self.consecutive
    }
}
