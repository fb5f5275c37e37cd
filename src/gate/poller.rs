//! Fixed-interval poll loop for a single check.
//!
//! # Responsibilities
//! - Call `attempt` until it succeeds or the check's timeout has passed
//! - Sleep the poll interval between attempts
//!
//! # Design Decisions
//! - No backoff, no jitter, no attempt cap; only wall-clock timeout ends the loop
//! - Failed attempts are never reported individually
//! - A successful attempt is always Ready, however long it took; bounding a
//!   single attempt is the transport's job (see `check::tcp`, `check::http`)

use std::time::Duration;

use tokio::time::{self, Instant};

use super::outcome::PollOutcome;
use crate::check::DependencyCheck;

/// Drive one check to a terminal outcome.
pub async fn poll_until_ready(check: &dyn DependencyCheck, poll_interval: Duration) -> PollOutcome {
    let start = Instant::now();
    let timeout = check.timeout();
    let mut attempts: u32 = 0;

    loop {
        attempts += 1;

        if check.attempt().await {
            return PollOutcome::Ready {
                attempts,
                elapsed: start.elapsed(),
            };
        }

        let elapsed = start.elapsed();
        if elapsed > timeout {
            return PollOutcome::TimedOut { attempts, elapsed };
        }

        tracing::trace!(address = %check.address(), attempts, "Not ready, retrying");
        time::sleep(poll_interval).await;
    }
}
