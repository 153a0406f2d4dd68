//! DNS record queries (MX, TXT) over `hickory-resolver`.

use hickory_resolver::error::{ResolveError, ResolveErrorKind};
use hickory_resolver::proto::op::ResponseCode;
use hickory_resolver::TokioAsyncResolver;

use super::resolver::{DnsError, DomainResolver, MxTarget, TxtRecord};

/// Production resolver backed by a shared `TokioAsyncResolver`.
///
/// Cloning is cheap; clones share the same connection pool and cache.
#[derive(Clone)]
pub struct HickoryResolver {
    resolver: TokioAsyncResolver,
}

impl HickoryResolver {
    pub fn new(resolver: TokioAsyncResolver) -> Self {
        Self { resolver }
    }

    pub(super) fn classify_error(e: &ResolveError) -> DnsError {
        match e.kind() {
            ResolveErrorKind::NoRecordsFound { response_code, .. } => {
                if *response_code == ResponseCode::NXDomain {
                    DnsError::NxDomain
                } else {
                    DnsError::NoRecords
                }
            }
            ResolveErrorKind::Timeout => DnsError::Timeout,
            _ => DnsError::Other(e.to_string()),
        }
    }
}

impl DomainResolver for HickoryResolver {
    async fn resolve_mx(&self, name: &str) -> Result<Vec<MxTarget>, DnsError> {
        match self.resolver.mx_lookup(name).await {
            Ok(lookup) => Ok(lookup
                .iter()
                .map(|mx| MxTarget {
                    preference: mx.preference(),
                    exchange: mx.exchange().to_utf8(),
                })
                .collect()),
            Err(e) => Err(Self::classify_error(&e)),
        }
    }

    async fn resolve_txt(&self, name: &str) -> Result<Vec<TxtRecord>, DnsError> {
        match self.resolver.txt_lookup(name).await {
            Ok(lookup) => Ok(lookup
                .iter()
                .map(|txt| {
                    // TXT records can be split across multiple character-strings, join them
                    let bytes: Vec<u8> = txt.iter().flat_map(|part| part.iter().copied()).collect();
                    TxtRecord::new(bytes)
                })
                .collect()),
            Err(e) => Err(Self::classify_error(&e)),
        }
    }
}
