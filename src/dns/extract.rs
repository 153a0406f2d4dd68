//! SPF/DMARC record selection from TXT answers.

use super::resolver::TxtRecord;
use crate::config::{DMARC_PREFIX, SPF_PREFIX};

/// Returns the first record starting with `prefix`, in answer order.
///
/// The match is case-sensitive and the record is neither trimmed before the
/// comparison nor in the returned value. Later matches are ignored.
pub fn first_with_prefix(txt_records: &[TxtRecord], prefix: &str) -> Option<TxtRecord> {
    txt_records
        .iter()
        .find(|txt| txt.starts_with(prefix))
        .cloned()
}

/// Extracts the SPF record (first TXT record starting with `v=spf1`).
pub fn extract_spf_record(txt_records: &[TxtRecord]) -> Option<TxtRecord> {
    first_with_prefix(txt_records, SPF_PREFIX)
}

/// Extracts the DMARC record (first TXT record starting with `v=DMARC1`).
///
/// The records should come from `_dmarc.<domain>`, not from the domain itself.
pub fn extract_dmarc_record(txt_records: &[TxtRecord]) -> Option<TxtRecord> {
    first_with_prefix(txt_records, DMARC_PREFIX)
}
