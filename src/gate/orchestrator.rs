//! Fan-out / fan-in over all dependency checks.
//!
//! # Responsibilities
//! - Announce every check before polling starts
//! - Spawn one poller task per check
//! - Collect each terminal outcome exactly once and reduce them to one verdict
//!
//! # Design Decisions
//! - Outcomes come back through the `JoinSet`, never through a shared flag
//! - Only this loop writes to the output sink, so lines never interleave
//! - Siblings keep running after a timeout unless `fail_fast` is set

use tokio::task::JoinSet;
use tokio::time::Instant;

use super::outcome::{CheckResult, GateReport, PollOutcome};
use super::poller::poll_until_ready;
use crate::check::DependencyCheck;
use crate::config::RunConfig;

/// Block until every check is ready or has timed out.
///
/// Returns `true` only if every check became ready.
pub async fn wait_for_deps(checks: Vec<Box<dyn DependencyCheck>>, config: &RunConfig) -> bool {
    wait_for_deps_report(checks, config).await.all_ready()
}

/// Same as [`wait_for_deps`], keeping the per-check outcomes.
pub async fn wait_for_deps_report(
    checks: Vec<Box<dyn DependencyCheck>>,
    config: &RunConfig,
) -> GateReport {
    let started = Instant::now();

    let mut results: Vec<CheckResult> = checks
        .iter()
        .map(|check| {
            let address = check.address();
            let timeout = check.timeout();
            config.write(&format!(
                "Trying to connect: {} - timeout = {:?}",
                address, timeout
            ));
            CheckResult {
                address,
                timeout,
                outcome: PollOutcome::Cancelled,
            }
        })
        .collect();
    let mut settled = vec![false; results.len()];

    let mut pollers = JoinSet::new();
    for (index, check) in checks.into_iter().enumerate() {
        let poll_interval = config.poll_interval;
        pollers.spawn(async move {
            let outcome = poll_until_ready(check.as_ref(), poll_interval).await;
            (index, outcome)
        });
    }

    while let Some(joined) = pollers.join_next().await {
        let (index, outcome) = match joined {
            Ok(done) => done,
            Err(e) => {
                if !e.is_cancelled() {
                    tracing::error!(error = %e, "Poller task failed");
                }
                continue;
            }
        };

        let result = &mut results[index];
        match outcome {
            PollOutcome::Ready { attempts, elapsed } => {
                tracing::info!(
                    address = %result.address,
                    attempts,
                    elapsed_ms = elapsed.as_millis() as u64,
                    "Dependency ready"
                );
            }
            PollOutcome::TimedOut { attempts, elapsed } => {
                tracing::warn!(
                    address = %result.address,
                    attempts,
                    elapsed_ms = elapsed.as_millis() as u64,
                    "Dependency timed out"
                );
                config.write(&format!("Timeout : {}", result.address));
                if config.fail_fast {
                    pollers.abort_all();
                }
            }
            PollOutcome::Cancelled => {}
        }
        result.outcome = outcome;
        settled[index] = true;
    }

    for (result, _) in results.iter().zip(&settled).filter(|(_, done)| !**done) {
        config.write(&format!("Cancelled : {}", result.address));
    }

    GateReport {
        results,
        elapsed: started.elapsed(),
    }
}

/// Run [`wait_for_deps`] on a fresh multi-threaded runtime.
///
/// For callers that are not already inside a tokio runtime.
pub fn wait_for_deps_blocking(
    checks: Vec<Box<dyn DependencyCheck>>,
    config: &RunConfig,
) -> std::io::Result<bool> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    Ok(runtime.block_on(wait_for_deps(checks, config)))
}
