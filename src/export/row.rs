//! Flat row view of a verification result.

use std::borrow::Cow;

use serde::Serialize;

use crate::verify::VerificationResult;

/// One output row, in column order.
///
/// Field names serialize to the same names as the CSV header. Record text
/// has invalid UTF-8 replaced, since CSV and JSON output must be text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultRow<'a> {
    pub domain: &'a str,
    #[serde(rename = "hasMX")]
    pub has_mx: bool,
    #[serde(rename = "hasSPF")]
    pub has_spf: bool,
    #[serde(rename = "spfRecord")]
    pub spf_record: Cow<'a, str>,
    #[serde(rename = "hasDMARC")]
    pub has_dmarc: bool,
    #[serde(rename = "dmarcRecord")]
    pub dmarc_record: Cow<'a, str>,
}

impl<'a> From<&'a VerificationResult> for ResultRow<'a> {
    fn from(result: &'a VerificationResult) -> Self {
        Self {
            domain: result.domain.as_str(),
            has_mx: result.has_mx,
            has_spf: result.has_spf(),
            spf_record: result.spf_text(),
            has_dmarc: result.has_dmarc(),
            dmarc_record: result.dmarc_text(),
        }
    }
}

/// Renders a boolean the way every format writes it.
pub(crate) fn bool_field(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
