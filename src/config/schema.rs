//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from a TOML file.
//! Every field has a default, so an empty file is a valid configuration.

use serde::{Deserialize, Serialize};

/// Root configuration for a gate run.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct GateConfig {
    /// Delay between attempts of the same check, in milliseconds.
    pub poll_interval_ms: u64,

    /// Timeout applied to targets that do not carry their own, in milliseconds.
    pub default_timeout_ms: u64,

    /// Suppress all progress output.
    pub quiet: bool,

    /// Stop waiting on the remaining targets once one has timed out.
    pub fail_fast: bool,

    /// Exit code when every dependency became ready.
    pub exit_code_on_ok: i32,

    /// Exit code when any dependency timed out or the input was invalid.
    pub exit_code_on_fail: i32,

    /// Target strings, e.g. `tcp:localhost:5432:2000`.
    pub targets: Vec<String>,

    /// Diagnostic logging settings.
    pub logging: LoggingConfig,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: 250,
            default_timeout_ms: 30_000,
            quiet: false,
            fail_fast: false,
            exit_code_on_ok: 0,
            exit_code_on_fail: 1,
            targets: Vec::new(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error, off).
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config: GateConfig = toml::from_str("").unwrap();
        assert_eq!(config, GateConfig::default());
    }

    #[test]
    fn test_partial_document() {
        let config: GateConfig = toml::from_str(
            r#"
            poll_interval_ms = 100
            targets = ["tcp:db:5432:2000"]

            [logging]
            level = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.poll_interval_ms, 100);
        assert_eq!(config.default_timeout_ms, 30_000);
        assert_eq!(config.targets, vec!["tcp:db:5432:2000".to_string()]);
        assert_eq!(config.logging.level, "debug");
    }
}
