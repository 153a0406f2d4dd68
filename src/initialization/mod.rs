//! Application initialization and resource setup.
//!
//! This module provides functions to initialize the shared resources:
//! - Logger (stderr, plain or JSON)
//! - DNS resolver

mod logger;
mod resolver;

// Re-export public API
pub use logger::init_logger_with;
pub use resolver::init_resolver;
