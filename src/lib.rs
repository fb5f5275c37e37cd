//! Readiness gate: block until network dependencies are reachable.

pub mod check;
pub mod config;
pub mod error;
pub mod gate;
pub mod observability;
pub mod targets;

pub use check::{http_check, https_check, tcp_check, DependencyCheck};
pub use config::{GateConfig, OutputSink, RunConfig};
pub use error::GateError;
pub use gate::{wait_for_deps, wait_for_deps_blocking, wait_for_deps_report, GateReport, PollOutcome};
