//! Readiness gate: the concurrent polling engine.
//!
//! # Data Flow
//! ```text
//! Vec<Box<dyn DependencyCheck>> + RunConfig
//!     → orchestrator.rs ("Trying to connect" line per check)
//!     → poller.rs (one tokio task per check, fixed-interval retries)
//!     → outcome.rs (PollOutcome per check, joined back in the orchestrator)
//!     → GateReport / aggregate bool
//! ```
//!
//! # Design Decisions
//! - Checks are independent; total wait is bounded by the slowest timeout
//! - Each poller owns its own deadline; there is no global deadline
//! - The aggregate is a pure AND, so completion order does not matter

pub mod orchestrator;
pub mod outcome;
pub mod poller;

#[cfg(test)]
pub(crate) mod mock;

pub use orchestrator::{wait_for_deps, wait_for_deps_blocking, wait_for_deps_report};
pub use outcome::{CheckResult, GateReport, PollOutcome};
pub use poller::poll_until_ready;
