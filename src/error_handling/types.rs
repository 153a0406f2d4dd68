//! Error type definitions.
//!
//! This module defines the error types used throughout the application and the
//! lookup kinds failures are attributed to.

use std::io;

use log::SetLoggerError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Fatal failures of the verification pipeline.
///
/// DNS problems never show up here: they are folded into the per-domain
/// classification. Only the input and output streams can end a run.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Reading the input stream failed (anything other than a clean end of stream).
    #[error("Error reading input: {0}")]
    Input(#[source] io::Error),

    /// Writing a result to the output stream failed.
    #[error("Error writing output: {0}")]
    Output(#[source] io::Error),
}

/// The three lookups performed for every syntactically valid domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum LookupKind {
    /// MX records of the domain
    Mx,
    /// TXT records of the domain, scanned for SPF
    Spf,
    /// TXT records of `_dmarc.<domain>`
    Dmarc,
}

impl std::fmt::Display for LookupKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl LookupKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LookupKind::Mx => "MX lookup",
            LookupKind::Spf => "SPF (TXT) lookup",
            LookupKind::Dmarc => "DMARC (TXT) lookup",
        }
    }
}
