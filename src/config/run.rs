//! Per-call run configuration consumed by the gate.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::config::schema::GateConfig;

/// Destination for the user-facing progress lines.
pub type OutputSink = Arc<dyn Fn(&str) + Send + Sync>;

/// Settings for one `wait_for_deps` call.
///
/// There is no global instance; `RunConfig::default()` gives the stock
/// values and every call can pass its own.
#[derive(Clone)]
pub struct RunConfig {
    /// Delay between attempts of the same check.
    pub poll_interval: Duration,
    /// Suppress every sink line.
    pub quiet: bool,
    /// Abort the remaining pollers as soon as one check times out.
    pub fail_fast: bool,
    /// Process exit code when every dependency is ready.
    pub exit_code_on_ok: i32,
    /// Process exit code when any dependency timed out.
    pub exit_code_on_fail: i32,
    /// Where progress lines go.
    pub output: OutputSink,
}

impl RunConfig {
    /// Send a line to the sink unless running quiet.
    pub fn write(&self, message: &str) {
        if !self.quiet {
            (self.output)(message);
        }
    }

    /// Replace the output sink.
    pub fn with_output<F>(mut self, sink: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.output = Arc::new(sink);
        self
    }

    /// Map the aggregate result to a process exit code.
    pub fn exit_code(&self, all_ready: bool) -> i32 {
        if all_ready {
            self.exit_code_on_ok
        } else {
            self.exit_code_on_fail
        }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_millis(250),
            quiet: false,
            fail_fast: false,
            exit_code_on_ok: 0,
            exit_code_on_fail: 1,
            output: Arc::new(|message: &str| println!("{}", message)),
        }
    }
}

impl From<&GateConfig> for RunConfig {
    fn from(config: &GateConfig) -> Self {
        Self {
            poll_interval: Duration::from_millis(config.poll_interval_ms),
            quiet: config.quiet,
            fail_fast: config.fail_fast,
            exit_code_on_ok: config.exit_code_on_ok,
            exit_code_on_fail: config.exit_code_on_fail,
            ..Self::default()
        }
    }
}

impl fmt::Debug for RunConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RunConfig")
            .field("poll_interval", &self.poll_interval)
            .field("quiet", &self.quiet)
            .field("fail_fast", &self.fail_fast)
            .field("exit_code_on_ok", &self.exit_code_on_ok)
            .field("exit_code_on_fail", &self.exit_code_on_fail)
            .finish_non_exhaustive()
    }
}
