//! Domain verification: syntax gate, the three lookups, classification.
//!
//! A [`Verifier`] never fails. Every DNS problem, from NXDOMAIN to a hung
//! nameserver, is reported as "record absent" for that lookup only; the other
//! lookups of the same domain are unaffected.

use std::borrow::Cow;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use crate::dns::{extract_dmarc_record, extract_spf_record, DnsError, DomainResolver, TxtRecord};
use crate::domain::Domain;
use crate::error_handling::{LookupKind, ProcessingStats};

/// Outcome of verifying one domain.
///
/// `has_spf` and `has_dmarc` are derived from whether a record was found, so
/// a flag and its record can never disagree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationResult {
    pub domain: Domain,
    pub has_mx: bool,
    pub spf_record: Option<TxtRecord>,
    pub dmarc_record: Option<TxtRecord>,
}

impl VerificationResult {
    /// The all-negative result used for names failing the syntax gate.
    pub fn rejected(domain: Domain) -> Self {
        Self {
            domain,
            has_mx: false,
            spf_record: None,
            dmarc_record: None,
        }
    }

    pub fn has_spf(&self) -> bool {
        self.spf_record.is_some()
    }

    pub fn has_dmarc(&self) -> bool {
        self.dmarc_record.is_some()
    }

    /// SPF record text, empty when absent.
    pub fn spf_text(&self) -> Cow<'_, str> {
        record_text(self.spf_record.as_ref())
    }

    /// DMARC record text, empty when absent.
    pub fn dmarc_text(&self) -> Cow<'_, str> {
        record_text(self.dmarc_record.as_ref())
    }

    pub fn spf_bytes(&self) -> &[u8] {
        self.spf_record.as_ref().map(TxtRecord::as_bytes).unwrap_or_default()
    }

    pub fn dmarc_bytes(&self) -> &[u8] {
        self.dmarc_record.as_ref().map(TxtRecord::as_bytes).unwrap_or_default()
    }
}

fn record_text(record: Option<&TxtRecord>) -> Cow<'_, str> {
    record.map_or(Cow::Borrowed(""), TxtRecord::to_text)
}

/// Verifies domains against an injected resolver.
pub struct Verifier<R> {
    resolver: R,
    lookup_timeout: Option<Duration>,
    stats: Arc<ProcessingStats>,
}

impl<R: DomainResolver> Verifier<R> {
    pub fn new(resolver: R, stats: Arc<ProcessingStats>) -> Self {
        Self {
            resolver,
            lookup_timeout: None,
            stats,
        }
    }

    /// Caps every individual lookup; an expired lookup counts as a timeout.
    pub fn with_lookup_timeout(mut self, timeout: Duration) -> Self {
        self.lookup_timeout = Some(timeout);
        self
    }

    pub fn stats(&self) -> &Arc<ProcessingStats> {
        &self.stats
    }

    /// Verifies one domain.
    ///
    /// Names without a `.` are rejected without touching the resolver.
    /// Otherwise MX, SPF and DMARC are looked up one after another. With
    /// several qualifying TXT records the first in answer order is reported;
    /// that order comes from the nameserver and may differ between runs.
    pub async fn verify(&self, domain: Domain) -> VerificationResult {
        if !domain.has_label_separator() {
            log::debug!("Rejecting {domain}: no '.' in name, skipping DNS");
            self.stats.increment_rejected_syntax();
            return VerificationResult::rejected(domain);
        }

        let has_mx = self
            .lookup(LookupKind::Mx, &domain, self.resolver.resolve_mx(domain.as_str()))
            .await
            .is_some_and(|targets| !targets.is_empty());

        let spf_record = self
            .lookup(LookupKind::Spf, &domain, self.resolver.resolve_txt(domain.as_str()))
            .await
            .and_then(|txt| extract_spf_record(&txt));

        let dmarc_name = domain.dmarc_name();
        let dmarc_record = self
            .lookup(LookupKind::Dmarc, &domain, self.resolver.resolve_txt(&dmarc_name))
            .await
            .and_then(|txt| extract_dmarc_record(&txt));

        log::debug!(
            "{domain}: mx={has_mx} spf={} dmarc={}",
            spf_record.is_some(),
            dmarc_record.is_some()
        );

        VerificationResult {
            domain,
            has_mx,
            spf_record,
            dmarc_record,
        }
    }

    /// Runs one lookup, folding every failure into `None`.
    async fn lookup<T>(
        &self,
        kind: LookupKind,
        domain: &Domain,
        query: impl Future<Output = Result<T, DnsError>>,
    ) -> Option<T> {
        let outcome = match self.lookup_timeout {
            Some(limit) => tokio::time::timeout(limit, query)
                .await
                .unwrap_or(Err(DnsError::Timeout)),
            None => query.await,
        };

        match outcome {
            Ok(answer) => Some(answer),
            Err(e) => {
                log::debug!("{kind} failed for {domain}: {e}");
                self.stats.increment_lookup_failure(kind);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests;
