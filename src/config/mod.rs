//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → CLI flags merged on top (main.rs)
//!     → validation.rs (semantic checks, target decoding)
//!     → run.rs RunConfig (per-call settings for the gate)
//! ```
//!
//! # Design Decisions
//! - All file fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks
//! - RunConfig is passed explicitly to every call; no global state

pub mod loader;
pub mod run;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use run::{OutputSink, RunConfig};
pub use schema::{GateConfig, LoggingConfig};
pub use validation::{validate_config, ValidationError};
