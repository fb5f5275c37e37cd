//! Errors raised while decoding target strings.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TargetError {
    #[error("unrecognised protocol {0:?} (expected tcp, http or https)")]
    UnknownProtocol(String),

    #[error("missing host in target {0:?}")]
    MissingHost(String),

    #[error("missing port in target {0:?}")]
    MissingPort(String),

    #[error("unable to parse port {0:?}")]
    InvalidPort(String),

    #[error("unable to parse timeout {0:?} as milliseconds")]
    InvalidTimeout(String),

    #[error("cannot parse success codes {0:?}")]
    InvalidStatusCode(String),
}
