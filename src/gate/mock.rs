//! Scriptable check for poller and orchestrator tests.

use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use futures_util::future::{self, BoxFuture};
use futures_util::FutureExt;

use crate::check::DependencyCheck;

enum Behaviour {
    ReadyAfter(u32),
    Never,
    SlowReady(Duration),
}

pub(crate) struct MockCheck {
    address: String,
    timeout: Duration,
    behaviour: Behaviour,
    attempts: AtomicU32,
}

impl MockCheck {
    /// Succeeds on the `n`th attempt.
    pub(crate) fn ready_after(n: u32, timeout: Duration) -> Self {
        Self::new(format!("mock://ready-after-{n}"), timeout, Behaviour::ReadyAfter(n))
    }

    pub(crate) fn never_ready(timeout: Duration) -> Self {
        Self::new("mock://never".to_string(), timeout, Behaviour::Never)
    }

    /// Every attempt takes `delay` and then succeeds.
    pub(crate) fn slow_ready(delay: Duration, timeout: Duration) -> Self {
        Self::new("mock://slow".to_string(), timeout, Behaviour::SlowReady(delay))
    }

    pub(crate) fn named(mut self, address: &str) -> Self {
        self.address = address.to_string();
        self
    }

    pub(crate) fn attempts(&self) -> u32 {
        self.attempts.load(Ordering::SeqCst)
    }

    fn new(address: String, timeout: Duration, behaviour: Behaviour) -> Self {
        Self {
            address,
            timeout,
            behaviour,
            attempts: AtomicU32::new(0),
        }
    }
}

impl DependencyCheck for MockCheck {
    fn attempt(&self) -> BoxFuture<'_, bool> {
        let n = self.attempts.fetch_add(1, Ordering::SeqCst) + 1;
        match self.behaviour {
            Behaviour::ReadyAfter(k) => future::ready(n >= k).boxed(),
            Behaviour::Never => future::ready(false).boxed(),
            Behaviour::SlowReady(delay) => async move {
                tokio::time::sleep(delay).await;
                true
            }
            .boxed(),
        }
    }

    fn timeout(&self) -> Duration {
        self.timeout
    }

    fn address(&self) -> String {
        self.address.clone()
    }
}
