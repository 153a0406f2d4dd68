// Shared test helpers: stub resolvers, failing readers and shared output buffers.
//
// Nothing here touches the network; every answer comes from a table.

#![allow(dead_code)] // Each test file uses a different subset

use std::collections::HashMap;
use std::io::{self, Write};
use std::pin::Pin;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use std::time::Duration;

use domain_mailcheck::{DnsError, DomainResolver, MxTarget, TxtRecord};
use tokio::io::{AsyncRead, ReadBuf};

/// Table-driven resolver. Unknown names answer NXDOMAIN.
#[derive(Default)]
pub struct StubResolver {
    mx: HashMap<String, Result<Vec<MxTarget>, DnsError>>,
    txt: HashMap<String, Result<Vec<TxtRecord>, DnsError>>,
    delays: HashMap<String, Duration>,
    hang: Vec<String>,
    calls: AtomicUsize,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl StubResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mx(mut self, name: &str, exchanges: &[&str]) -> Self {
        let targets = exchanges
            .iter()
            .map(|exchange| MxTarget {
                preference: 10,
                exchange: exchange.to_string(),
            })
            .collect();
        self.mx.insert(name.to_string(), Ok(targets));
        self
    }

    pub fn with_mx_error(mut self, name: &str, error: DnsError) -> Self {
        self.mx.insert(name.to_string(), Err(error));
        self
    }

    pub fn with_txt(mut self, name: &str, records: &[&str]) -> Self {
        let records = records.iter().map(|r| TxtRecord::from(*r)).collect();
        self.txt.insert(name.to_string(), Ok(records));
        self
    }

    /// TXT answer with raw, possibly non-UTF-8 record data.
    pub fn with_txt_bytes(mut self, name: &str, records: &[&[u8]]) -> Self {
        let records = records.iter().map(|r| TxtRecord::new(r.to_vec())).collect();
        self.txt.insert(name.to_string(), Ok(records));
        self
    }

    pub fn with_txt_error(mut self, name: &str, error: DnsError) -> Self {
        self.txt.insert(name.to_string(), Err(error));
        self
    }

    /// Every lookup for `name` (and `_dmarc.<name>`) sleeps first.
    pub fn with_delay(mut self, name: &str, delay: Duration) -> Self {
        self.delays.insert(name.to_string(), delay);
        self
    }

    /// Lookups for `name` never complete.
    pub fn with_hang(mut self, name: &str) -> Self {
        self.hang.push(name.to_string());
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    async fn before_lookup(&self, name: &str) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let base = name.strip_prefix("_dmarc.").unwrap_or(name);
        if self.hang.iter().any(|h| h == base) {
            std::future::pending::<()>().await;
        }
        if let Some(delay) = self.delays.get(base) {
            let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.max_in_flight.fetch_max(now, Ordering::SeqCst);
            tokio::time::sleep(*delay).await;
            self.in_flight.fetch_sub(1, Ordering::SeqCst);
        }
    }
}

impl DomainResolver for StubResolver {
    async fn resolve_mx(&self, name: &str) -> Result<Vec<MxTarget>, DnsError> {
        self.before_lookup(name).await;
        self.mx.get(name).cloned().unwrap_or(Err(DnsError::NxDomain))
    }

    async fn resolve_txt(&self, name: &str) -> Result<Vec<TxtRecord>, DnsError> {
        self.before_lookup(name).await;
        self.txt.get(name).cloned().unwrap_or(Err(DnsError::NxDomain))
    }
}

/// Errors on every read.
pub struct FailingReader;

impl AsyncRead for FailingReader {
    fn poll_read(
        self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
        _buf: &mut ReadBuf<'_>,
    ) -> Poll<io::Result<()>> {
        Poll::Ready(Err(io::Error::new(
            io::ErrorKind::Other,
            "simulated read failure",
        )))
    }
}

/// Writer whose contents stay readable after it has been moved into the pipeline.
#[derive(Clone, Default)]
pub struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl SharedBuf {
    pub fn contents(&self) -> String {
        let bytes = self.0.lock().expect("buffer lock").clone();
        String::from_utf8(bytes).expect("utf-8 output")
    }
}

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("buffer lock").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

pub const HEADER: &str = "domain,hasMX,hasSPF,spfRecord,hasDMARC,dmarcRecord";
