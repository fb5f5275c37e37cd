//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber for the binary
//! - Pick the log level from `RUST_LOG`, then configuration
//!
//! # Design Decisions
//! - Diagnostics go to stderr; stdout belongs to the progress sink
//! - Quiet mode silences diagnostics too, unless `RUST_LOG` asks otherwise

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;

/// Filter directive used when `RUST_LOG` is not set.
pub fn default_directive(config: &LoggingConfig, quiet: bool) -> String {
    if quiet {
        "off".to_string()
    } else {
        format!("depwait={}", config.level)
    }
}

/// Install the global subscriber. Safe to call more than once; later calls are ignored.
pub fn init_logging(config: &LoggingConfig, quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(config, quiet)));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
