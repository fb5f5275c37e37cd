//! Crate-level error type.

use thiserror::Error;

use crate::config::{ConfigError, ValidationError};

/// Anything that stops a gate run from starting.
///
/// Waiting itself never fails; a dependency that does not come up is a
/// `false` result, not an error.
#[derive(Error, Debug)]
pub enum GateError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to start runtime: {0}")]
    Runtime(#[from] std::io::Error),
}

impl From<Vec<ValidationError>> for GateError {
    fn from(errors: Vec<ValidationError>) -> Self {
        GateError::Config(ConfigError::Validation(errors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_surface_as_config() {
        let err = GateError::from(vec![ValidationError::NoTargets]);
        assert!(matches!(err, GateError::Config(ConfigError::Validation(_))));
        assert_eq!(err.to_string(), "validation failed: no targets configured");
    }
}
