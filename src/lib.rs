//! domain_mailcheck library: bulk MX/SPF/DMARC presence checks for domains
//!
//! This library reads candidate email domains (one per line), looks up each
//! domain's MX records, its SPF record and its DMARC record, and writes one
//! row per domain in input order. No mail is ever sent.
//!
//! DNS failures never stop a run: a lookup that fails for any reason counts
//! as "record absent". Only an unreadable input or an unwritable output does.
//!
//! # Example
//!
//! ```no_run
//! use domain_mailcheck::{check_stream, CheckOptions, HickoryResolver};
//! use hickory_resolver::TokioAsyncResolver;
//! use tokio_util::sync::CancellationToken;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let resolver = HickoryResolver::new(TokioAsyncResolver::tokio(
//!     Default::default(),
//!     Default::default(),
//! ));
//! let input: &[u8] = b"google.com\nnotadomain\n";
//! let (report, csv) = check_stream(
//!     input,
//!     Vec::new(),
//!     resolver,
//!     &CheckOptions::default(),
//!     CancellationToken::new(),
//! )
//! .await?;
//! print!("{}", String::from_utf8(csv)?);
//! eprintln!("{} domains checked", report.total_domains);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime.

pub mod config;
pub mod dns;
pub mod domain;
mod error_handling;
pub mod export;
pub mod initialization;
pub mod input;
mod run;
pub mod verify;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel, OutputFormat, ResolverChoice};
pub use dns::{DnsError, DomainResolver, HickoryResolver, MxTarget, TxtRecord};
pub use domain::Domain;
pub use error_handling::{InitializationError, LookupKind, PipelineError, ProcessingStats};
pub use export::ResultEmitter;
pub use run::{check_stream, run_check, spawn_interrupt_listener, CheckOptions, CheckReport};
pub use verify::{VerificationResult, Verifier};
