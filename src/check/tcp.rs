//! TCP reachability check.

use std::time::Duration;

use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use tokio::net::TcpStream;
use tokio::time::timeout;

use super::{DependencyCheck, NetTarget};

/// Succeeds once a TCP connection to `host:port` can be established.
///
/// No data is exchanged; the stream is dropped as soon as the connect
/// returns. A single connect is bounded by the check's timeout so a
/// black-holed address cannot stall the poller indefinitely.
#[derive(Debug, Clone)]
pub struct TcpCheck {
    target: NetTarget,
}

impl TcpCheck {
    pub fn new(host: impl Into<String>, port: u16, timeout: Duration) -> Self {
        Self {
            target: NetTarget::new(host, port, timeout),
        }
    }

    async fn connect_once(&self) -> bool {
        let authority = self.target.authority();
        match timeout(self.target.timeout, TcpStream::connect(&authority)).await {
            Ok(Ok(_stream)) => {
                tracing::debug!(address = %authority, "TCP connect succeeded");
                true
            }
            Ok(Err(e)) => {
                tracing::debug!(address = %authority, error = %e, "TCP connect failed");
                false
            }
            Err(_) => {
                tracing::debug!(
                    address = %authority,
                    timeout = ?self.target.timeout,
                    "TCP connect timed out"
                );
                false
            }
        }
    }
}

impl DependencyCheck for TcpCheck {
    fn attempt(&self) -> BoxFuture<'_, bool> {
        self.connect_once().boxed()
    }

    fn timeout(&self) -> Duration {
        self.target.timeout
    }

    fn address(&self) -> String {
        format!("tcp://{}", self.target.authority())
    }
}
