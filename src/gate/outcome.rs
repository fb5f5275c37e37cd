//! Per-check outcomes and the aggregate report.

use std::time::Duration;

/// Terminal result of polling one check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    /// An attempt succeeded before the timeout.
    Ready { attempts: u32, elapsed: Duration },
    /// The timeout passed without a successful attempt.
    TimedOut { attempts: u32, elapsed: Duration },
    /// The poller was stopped before reaching a verdict.
    Cancelled,
}

impl PollOutcome {
    pub fn is_ready(&self) -> bool {
        matches!(self, PollOutcome::Ready { .. })
    }
}

/// Outcome of one check, tagged with its address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub address: String,
    pub timeout: Duration,
    pub outcome: PollOutcome,
}

/// Every check's outcome, in the order the checks were given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GateReport {
    pub results: Vec<CheckResult>,
    pub elapsed: Duration,
}

impl GateReport {
    /// Logical AND over all outcomes. An empty report is ready.
    pub fn all_ready(&self) -> bool {
        self.results.iter().all(|r| r.outcome.is_ready())
    }

    pub fn ready_count(&self) -> usize {
        self.results.iter().filter(|r| r.outcome.is_ready()).count()
    }

    /// Checks that timed out or were cancelled.
    pub fn failures(&self) -> impl Iterator<Item = &CheckResult> {
        self.results.iter().filter(|r| !r.outcome.is_ready())
    }
}
