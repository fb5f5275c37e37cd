//! Dependency checks.
//!
//! # Data Flow
//! ```text
//! targets (parsed input) / library caller
//!     → tcp_check / http_check / https_check
//!     → Box<dyn DependencyCheck>
//!     → owned by one poller task until the wait returns
//! ```
//!
//! # Design Decisions
//! - A check is immutable once built; timeout and address never change
//! - `attempt` never errors; transport failures read as "not ready yet"
//! - Variants share a `NetTarget` value instead of a base type

pub mod http;
pub mod target;
pub mod tcp;

use std::time::Duration;

use futures_util::future::BoxFuture;

pub use http::{HttpCheck, Scheme};
pub use target::NetTarget;
pub use tcp::TcpCheck;

/// A single network endpoint check.
pub trait DependencyCheck: Send + Sync {
    /// Perform exactly one reachability attempt.
    fn attempt(&self) -> BoxFuture<'_, bool>;

    /// How long the poller keeps retrying this check.
    fn timeout(&self) -> Duration;

    /// Human readable identifier, e.g. `tcp://db:5432`.
    fn address(&self) -> String;
}

/// Build a TCP connect check.
pub fn tcp_check(host: impl Into<String>, port: u16, timeout: Duration) -> Box<dyn DependencyCheck> {
    Box::new(TcpCheck::new(host, port, timeout))
}

/// Build a plain HTTP GET check. Empty `success_codes` accepts any status.
pub fn http_check(
    host: impl Into<String>,
    port: u16,
    timeout: Duration,
    path: impl Into<String>,
    success_codes: Vec<u16>,
) -> Box<dyn DependencyCheck> {
    Box::new(HttpCheck::new(Scheme::Http, host, port, timeout, path, success_codes))
}

/// Build an HTTPS GET check. Empty `success_codes` accepts any status.
pub fn https_check(
    host: impl Into<String>,
    port: u16,
    timeout: Duration,
    path: impl Into<String>,
    success_codes: Vec<u16>,
) -> Box<dyn DependencyCheck> {
    Box::new(HttpCheck::new(Scheme::Https, host, port, timeout, path, success_codes))
}
