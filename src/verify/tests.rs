//! Verifier tests against stub resolvers.

use super::*;
use crate::dns::MxTarget;
use std::collections::HashMap;
use std::sync::Mutex;

/// Answers from fixed tables; unknown names are NXDOMAIN.
#[derive(Default)]
struct StubResolver {
    mx: HashMap<String, Result<Vec<MxTarget>, DnsError>>,
    txt: HashMap<String, Result<Vec<TxtRecord>, DnsError>>,
    calls: Mutex<Vec<String>>,
}

impl StubResolver {
    fn with_mx(mut self, name: &str, answer: Result<Vec<MxTarget>, DnsError>) -> Self {
        self.mx.insert(name.to_string(), answer);
        self
    }

    fn with_txt(mut self, name: &str, answer: Result<Vec<&str>, DnsError>) -> Self {
        let answer = answer.map(|records| records.into_iter().map(TxtRecord::from).collect());
        self.txt.insert(name.to_string(), answer);
        self
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("calls lock").clone()
    }
}

impl DomainResolver for StubResolver {
    async fn resolve_mx(&self, name: &str) -> Result<Vec<MxTarget>, DnsError> {
        self.calls.lock().expect("calls lock").push(format!("MX {name}"));
        self.mx.get(name).cloned().unwrap_or(Err(DnsError::NxDomain))
    }

    async fn resolve_txt(&self, name: &str) -> Result<Vec<TxtRecord>, DnsError> {
        self.calls.lock().expect("calls lock").push(format!("TXT {name}"));
        self.txt.get(name).cloned().unwrap_or(Err(DnsError::NxDomain))
    }
}

/// Fails the test if any lookup is issued.
struct UnreachableResolver;

impl DomainResolver for UnreachableResolver {
    async fn resolve_mx(&self, name: &str) -> Result<Vec<MxTarget>, DnsError> {
        panic!("unexpected MX lookup for {name}");
    }

    async fn resolve_txt(&self, name: &str) -> Result<Vec<TxtRecord>, DnsError> {
        panic!("unexpected TXT lookup for {name}");
    }
}

/// Never answers.
struct HangingResolver;

impl DomainResolver for HangingResolver {
    async fn resolve_mx(&self, _name: &str) -> Result<Vec<MxTarget>, DnsError> {
        std::future::pending().await
    }

    async fn resolve_txt(&self, _name: &str) -> Result<Vec<TxtRecord>, DnsError> {
        std::future::pending().await
    }
}

fn mx(exchange: &str) -> MxTarget {
    MxTarget {
        preference: 10,
        exchange: exchange.to_string(),
    }
}

fn domain(name: &str) -> Domain {
    Domain::from_line(name).expect("non-blank test domain")
}

fn verifier<R: DomainResolver>(resolver: R) -> Verifier<R> {
    Verifier::new(resolver, Arc::new(ProcessingStats::new()))
}

#[tokio::test]
async fn test_syntax_gate_makes_no_lookups() {
    let verifier = verifier(UnreachableResolver);
    for name in ["notadomain", "localhost", "com"] {
        let result = verifier.verify(domain(name)).await;
        assert_eq!(result, VerificationResult::rejected(domain(name)));
        assert!(!result.has_mx);
        assert!(!result.has_spf());
        assert!(!result.has_dmarc());
        assert_eq!(result.spf_text(), "");
        assert_eq!(result.dmarc_text(), "");
    }
    assert_eq!(verifier.stats().rejected_syntax(), 3);
    assert_eq!(verifier.stats().total_lookup_failures(), 0);
}

#[tokio::test]
async fn test_full_positive_scenario() {
    let stub = StubResolver::default()
        .with_mx("google.com", Ok(vec![mx("smtp.google.com.")]))
        .with_txt("google.com", Ok(vec!["v=spf1 include:_spf.google.com ~all"]))
        .with_txt("_dmarc.google.com", Ok(vec!["v=DMARC1; p=reject"]));
    let verifier = verifier(stub);

    let result = verifier.verify(domain("google.com")).await;
    assert_eq!(result.domain.as_str(), "google.com");
    assert!(result.has_mx);
    assert_eq!(
        result.spf_record,
        Some("v=spf1 include:_spf.google.com ~all".into())
    );
    assert_eq!(result.dmarc_record, Some("v=DMARC1; p=reject".into()));
}

#[tokio::test]
async fn test_lookup_order_and_names() {
    let stub = Arc::new(StubResolver::default());
    let verifier = verifier(Arc::clone(&stub));
    verifier.verify(domain("example.com")).await;

    assert_eq!(
        stub.calls(),
        vec![
            "MX example.com".to_string(),
            "TXT example.com".to_string(),
            "TXT _dmarc.example.com".to_string(),
        ]
    );
}

#[tokio::test]
async fn test_first_spf_match_wins() {
    let stub = StubResolver::default()
        .with_txt("example.com", Ok(vec!["v=spf1 include:a", "v=spf1 include:b"]));
    let result = verifier(stub).verify(domain("example.com")).await;
    assert_eq!(result.spf_record, Some("v=spf1 include:a".into()));
}

#[tokio::test]
async fn test_first_dmarc_match_wins() {
    let stub = StubResolver::default().with_txt(
        "_dmarc.example.com",
        Ok(vec!["unrelated", "v=DMARC1; p=none", "v=DMARC1; p=reject"]),
    );
    let result = verifier(stub).verify(domain("example.com")).await;
    assert_eq!(result.dmarc_record, Some("v=DMARC1; p=none".into()));
}

#[tokio::test]
async fn test_dmarc_record_on_apex_is_ignored() {
    // A DMARC record published on the domain itself is not at _dmarc.
    let stub = StubResolver::default().with_txt("example.com", Ok(vec!["v=DMARC1; p=reject"]));
    let result = verifier(stub).verify(domain("example.com")).await;
    assert!(!result.has_dmarc());
    assert!(!result.has_spf());
}

#[tokio::test]
async fn test_mx_failure_does_not_affect_txt() {
    let stub = StubResolver::default()
        .with_mx("example.com", Err(DnsError::Other("SERVFAIL".into())))
        .with_txt("example.com", Ok(vec!["v=spf1 -all"]))
        .with_txt("_dmarc.example.com", Ok(vec!["v=DMARC1; p=quarantine"]));
    let verifier = verifier(stub);

    let result = verifier.verify(domain("example.com")).await;
    assert!(!result.has_mx);
    assert_eq!(result.spf_record, Some("v=spf1 -all".into()));
    assert_eq!(result.dmarc_record, Some("v=DMARC1; p=quarantine".into()));
    assert_eq!(verifier.stats().get_lookup_failure_count(LookupKind::Mx), 1);
    assert_eq!(verifier.stats().get_lookup_failure_count(LookupKind::Spf), 0);
}

#[tokio::test]
async fn test_txt_failure_does_not_affect_dmarc() {
    let stub = StubResolver::default()
        .with_mx("example.com", Ok(vec![mx("mx.example.com.")]))
        .with_txt("example.com", Err(DnsError::Timeout))
        .with_txt("_dmarc.example.com", Ok(vec!["v=DMARC1; p=none"]));
    let result = verifier(stub).verify(domain("example.com")).await;
    assert!(result.has_mx);
    assert!(!result.has_spf());
    assert!(result.has_dmarc());
}

#[tokio::test]
async fn test_empty_mx_answer_is_absent() {
    let stub = StubResolver::default().with_mx("example.com", Ok(vec![]));
    let result = verifier(stub).verify(domain("example.com")).await;
    assert!(!result.has_mx);
}

#[tokio::test]
async fn test_nonexistent_domain_looks_unconfigured() {
    let verifier = verifier(StubResolver::default());
    let result = verifier.verify(domain("does-not-exist.example")).await;
    assert_eq!(
        result,
        VerificationResult::rejected(domain("does-not-exist.example"))
    );
    assert_eq!(verifier.stats().total_lookup_failures(), 3);
}

#[tokio::test]
async fn test_lookup_timeout_collapses_to_absent() {
    let verifier =
        verifier(HangingResolver).with_lookup_timeout(Duration::from_millis(20));
    let result = verifier.verify(domain("slow.example")).await;
    assert!(!result.has_mx);
    assert!(!result.has_spf());
    assert!(!result.has_dmarc());
    assert_eq!(verifier.stats().total_lookup_failures(), 3);
}
