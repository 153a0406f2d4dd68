//! DNS resolution and record classification.
//!
//! This module provides:
//! - The [`DomainResolver`] capability (MX and TXT lookups)
//! - A production implementation over `hickory-resolver`
//! - SPF/DMARC extraction from TXT answers
//!
//! All lookups are async and fallible; callers decide what a failure means.

mod extract;
mod records;
mod resolver;

// Re-export public API
pub use extract::{extract_dmarc_record, extract_spf_record, first_with_prefix};
pub use records::HickoryResolver;
pub use resolver::{DnsError, DomainResolver, MxTarget, TxtRecord};
