//! Domain normalization and the syntax gate.
//!
//! A [`Domain`] is what one non-blank input line becomes: trimmed and
//! lower-cased. The only syntax check is [`Domain::has_label_separator`]; it
//! deliberately accepts strings like `a..b` or `example.com.` and rejects
//! single-label names, so anything it rejects never reaches the resolver.

use std::fmt;

use crate::config::DMARC_LABEL;

/// A normalized, non-empty domain name read from input.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Domain(String);

impl Domain {
    /// Normalizes one input line.
    ///
    /// Surrounding whitespace is trimmed and the rest lower-cased. Returns
    /// `None` for a line that is blank after trimming.
    pub fn from_line(line: &str) -> Option<Self> {
        let normalized = line.trim().to_lowercase();
        if normalized.is_empty() {
            None
        } else {
            Some(Domain(normalized))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Cheap syntax gate: true iff the name contains at least one `.`.
    pub fn has_label_separator(&self) -> bool {
        self.0.contains('.')
    }

    /// Name holding the domain's DMARC policy (`_dmarc.<domain>`).
    ///
    /// Plain concatenation; label-length limits are not checked.
    pub fn dmarc_name(&self) -> String {
        format!("{DMARC_LABEL}{}", self.0)
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Domain {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
