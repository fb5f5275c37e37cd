//! Network target shared by every check variant.

use std::time::Duration;

/// Host, port and per-target timeout of a dependency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetTarget {
    /// Host name or IP address.
    pub host: String,
    /// TCP port.
    pub port: u16,
    /// How long the poller keeps trying before giving up.
    pub timeout: Duration,
}

impl NetTarget {
    pub fn new(host: impl Into<String>, port: u16, timeout: Duration) -> Self {
        Self {
            host: host.into(),
            port,
            timeout,
        }
    }

    /// `host:port`, suitable for a socket connect.
    pub fn authority(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
