//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! check/, gate/ produce:
//!     → tracing events (attempt results, ready, timed out)
//!
//! Consumers:
//!     → logging.rs subscriber (stderr, filtered)
//! ```
//!
//! # Design Decisions
//! - User-facing progress lines go through RunConfig's sink, not tracing
//! - Per-attempt events stay at debug/trace so the default output is quiet

pub mod logging;
