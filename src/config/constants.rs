//! Configuration constants.
//!
//! This module defines the constants used throughout the application,
//! including DNS timeouts, input limits and the output header.

/// DNS query timeout in seconds.
/// Most DNS queries complete in <1s, 3s provides good buffer while failing fast.
pub const DNS_TIMEOUT_SECS: u64 = 3;

/// Number of attempts the resolver makes per query before giving up.
pub const DNS_ATTEMPTS: usize = 2;

/// Default number of domains verified at once.
/// 1 keeps the classic one-domain-at-a-time behavior.
pub const DEFAULT_MAX_CONCURRENCY: usize = 1;

/// Input line length limit in bytes (64 KiB); a line must be shorter.
/// Lines reaching it are treated as a corrupted input stream.
pub const MAX_LINE_BYTES: usize = 64 * 1024;

/// Log a progress line every this many emitted domains.
pub const LOGGING_INTERVAL: usize = 500;

/// Prefix a TXT record must start with to count as SPF.
pub const SPF_PREFIX: &str = "v=spf1";

/// Prefix a TXT record must start with to count as DMARC.
pub const DMARC_PREFIX: &str = "v=DMARC1";

/// Label prepended to a domain to find its DMARC policy.
pub const DMARC_LABEL: &str = "_dmarc.";

/// Column names in output order.
pub const OUTPUT_COLUMNS: [&str; 6] = [
    "domain",
    "hasMX",
    "hasSPF",
    "spfRecord",
    "hasDMARC",
    "dmarcRecord",
];

/// Exit code used when the run is stopped by an interrupt (128 + SIGINT).
pub const EXIT_INTERRUPTED: i32 = 130;
