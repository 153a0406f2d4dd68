//! Error handling and processing statistics.
//!
//! This module provides:
//! - Error type definitions for initialization and pipeline failures
//! - Lookup kinds that DNS failures are attributed to
//! - Processing statistics tracking
//!
//! Only input and output faults are errors. A failed DNS lookup is classified
//! as an absent record and merely counted.

mod stats;
mod types;

// Re-export public API
pub use stats::ProcessingStats;
pub use types::{InitializationError, LookupKind, PipelineError};
