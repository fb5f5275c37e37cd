//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (poll interval > 0)
//! - Reject log levels the subscriber would not understand
//! - Decode every target string
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is a pure function: GateConfig → Result<Vec<TargetSpec>, Vec<ValidationError>>

use std::time::Duration;

use thiserror::Error;
use tracing_subscriber::filter::LevelFilter;

use crate::config::schema::GateConfig;
use crate::targets::{TargetError, TargetSpec};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("poll interval must be greater than zero")]
    ZeroPollInterval,

    #[error("no targets configured")]
    NoTargets,

    #[error("unknown log level {0:?}")]
    InvalidLogLevel(String),

    #[error("target #{index} ({raw:?}): {source}")]
    Target {
        index: usize,
        raw: String,
        #[source]
        source: TargetError,
    },
}

/// Check a configuration and decode its targets.
pub fn validate_config(config: &GateConfig) -> Result<Vec<TargetSpec>, Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.poll_interval_ms == 0 {
        errors.push(ValidationError::ZeroPollInterval);
    }

    if config.logging.level.parse::<LevelFilter>().is_err() {
        errors.push(ValidationError::InvalidLogLevel(config.logging.level.clone()));
    }

    let default_timeout = Duration::from_millis(config.default_timeout_ms);
    let mut specs = Vec::with_capacity(config.targets.len());
    for (index, raw) in config.targets.iter().enumerate() {
        match TargetSpec::parse(raw, default_timeout) {
            Ok(spec) => specs.push(spec),
            Err(source) => errors.push(ValidationError::Target {
                index,
                raw: raw.clone(),
                source,
            }),
        }
    }

    if config.targets.is_empty() {
        errors.push(ValidationError::NoTargets);
    }

    if errors.is_empty() {
        Ok(specs)
    } else {
        Err(errors)
    }
}
