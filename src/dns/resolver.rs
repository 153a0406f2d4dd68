//! The resolver capability the verifier depends on.

use std::borrow::Cow;
use std::future::Future;
use std::sync::Arc;

use thiserror::Error;

/// Why a lookup produced no answer.
///
/// The verifier treats every variant the same way (record absent); the
/// distinction only shows up in logs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DnsError {
    #[error("NXDOMAIN: domain does not exist")]
    NxDomain,
    #[error("no records found")]
    NoRecords,
    #[error("timeout")]
    Timeout,
    #[error("DNS error: {0}")]
    Other(String),
}

/// One mail exchanger of a domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MxTarget {
    /// Lower is preferred
    pub preference: u16,
    pub exchange: String,
}

/// One TXT record with its character-strings concatenated.
///
/// Kept as the bytes the nameserver sent: TXT data is not required to be
/// UTF-8, and the quoted output escapes invalid bytes instead of replacing them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxtRecord(Vec<u8>);

impl TxtRecord {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Byte-wise prefix match, case-sensitive.
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.0.starts_with(prefix.as_bytes())
    }

    /// The record as text, invalid UTF-8 replaced with U+FFFD.
    pub fn to_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.0)
    }
}

impl From<&str> for TxtRecord {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for TxtRecord {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

/// Read-only DNS lookups used for domain verification.
///
/// Implementations must be shareable across concurrent verifications. Record
/// order is whatever the upstream answer had; callers rely on it for
/// first-match selection and must not expect it to be stable.
pub trait DomainResolver: Send + Sync {
    /// Looks up the MX records of `name`.
    fn resolve_mx(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Vec<MxTarget>, DnsError>> + Send;

    /// Looks up the TXT records of `name`, one entry per record.
    fn resolve_txt(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Vec<TxtRecord>, DnsError>> + Send;
}

impl<R: DomainResolver> DomainResolver for Arc<R> {
    fn resolve_mx(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Vec<MxTarget>, DnsError>> + Send {
        (**self).resolve_mx(name)
    }

    fn resolve_txt(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Vec<TxtRecord>, DnsError>> + Send {
        (**self).resolve_txt(name)
    }
}
