//! Processing statistics tracking.
//!
//! Thread-safe counters for lookup failures and classification outcomes.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use super::types::LookupKind;

/// Thread-safe processing statistics tracker.
///
/// Lookup failures are counted per [`LookupKind`] using atomic counters, so the
/// tracker can be shared across concurrent verifications behind an `Arc`.
/// A failure here never changes the output; it only feeds the final summary.
pub struct ProcessingStats {
    lookup_failures: HashMap<LookupKind, AtomicUsize>,
    rejected_syntax: AtomicUsize,
}

impl ProcessingStats {
    pub fn new() -> Self {
        let mut lookup_failures = HashMap::new();
        for kind in LookupKind::iter() {
            lookup_failures.insert(kind, AtomicUsize::new(0));
        }

        ProcessingStats {
            lookup_failures,
            rejected_syntax: AtomicUsize::new(0),
        }
    }

    /// Increment the failure counter for one lookup kind.
    pub fn increment_lookup_failure(&self, kind: LookupKind) {
        if let Some(counter) = self.lookup_failures.get(&kind) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment lookup failure counter for {:?} which is not in the map. \
                 This indicates a bug in ProcessingStats initialization.",
                kind
            );
        }
    }

    /// Record a domain rejected by the syntax gate.
    pub fn increment_rejected_syntax(&self) {
        self.rejected_syntax.fetch_add(1, Ordering::Relaxed);
    }

    pub fn get_lookup_failure_count(&self, kind: LookupKind) -> usize {
        self.lookup_failures
            .get(&kind)
            .map(|c| c.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    pub fn rejected_syntax(&self) -> usize {
        self.rejected_syntax.load(Ordering::Relaxed)
    }

    pub fn total_lookup_failures(&self) -> usize {
        self.lookup_failures
            .values()
            .map(|c| c.load(Ordering::Relaxed))
            .sum()
    }

    /// Logs non-zero failure counters at info level.
    pub fn log_summary(&self) {
        let total = self.total_lookup_failures();
        if total == 0 {
            log::info!("No DNS lookup failures");
            return;
        }
        log::info!("DNS lookup failures (reported as absent records): {total}");
        for kind in LookupKind::iter() {
            let count = self.get_lookup_failure_count(kind);
            if count > 0 {
                log::info!("   {}: {}", kind, count);
            }
        }
    }
}

impl Default for ProcessingStats {
    fn default() -> Self {
        Self::new()
    }
}
