//! Default output: every string field quoted, booleans bare.
//!
//! Strings are wrapped in double quotes with backslash escapes, so a record
//! containing commas, quotes or newlines still fits on one line:
//! `"example.com",true,true,"v=spf1 -all",false,""`.

use std::fmt::Write as _;
use std::io::{self, Write};

use super::row::bool_field;
use crate::config::OUTPUT_COLUMNS;
use crate::verify::VerificationResult;

/// Format characters (general category Cf).
const FORMAT_CHARS: &[(u32, u32)] = &[
    (0x00AD, 0x00AD),
    (0x0600, 0x0605),
    (0x061C, 0x061C),
    (0x06DD, 0x06DD),
    (0x070F, 0x070F),
    (0x0890, 0x0891),
    (0x08E2, 0x08E2),
    (0x180E, 0x180E),
    (0x200B, 0x200F),
    (0x202A, 0x202E),
    (0x2060, 0x2064),
    (0x2066, 0x206F),
    (0xFEFF, 0xFEFF),
    (0xFFF9, 0xFFFB),
    (0x110BD, 0x110BD),
    (0x110CD, 0x110CD),
    (0x13430, 0x1343F),
    (0x1BCA0, 0x1BCA3),
    (0x1D173, 0x1D17A),
    (0xE0001, 0xE0001),
    (0xE0020, 0xE007F),
];

/// Private use areas (general category Co).
const PRIVATE_USE: &[(u32, u32)] = &[
    (0xE000, 0xF8FF),
    (0xF0000, 0xFFFFD),
    (0x100000, 0x10FFFD),
];

fn in_ranges(code: u32, ranges: &[(u32, u32)]) -> bool {
    ranges.iter().any(|&(lo, hi)| (lo..=hi).contains(&code))
}

fn is_noncharacter(code: u32) -> bool {
    (0xFDD0..=0xFDEF).contains(&code) || code & 0xFFFE == 0xFFFE
}

/// Whether `c` is written as-is: a visible character or the ASCII space.
///
/// Controls, separators other than `' '`, format characters, private use
/// characters and noncharacters are not.
fn is_printable(c: char) -> bool {
    if c == ' ' {
        return true;
    }
    let code = c as u32;
    !(c.is_control()
        || c.is_whitespace()
        || in_ranges(code, FORMAT_CHARS)
        || in_ranges(code, PRIVATE_USE)
        || is_noncharacter(code))
}

fn push_escaped(quoted: &mut String, value: &str) {
    for c in value.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\u{07}' => quoted.push_str("\\a"),
            '\u{08}' => quoted.push_str("\\b"),
            '\u{0c}' => quoted.push_str("\\f"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            '\u{0b}' => quoted.push_str("\\v"),
            c if !is_printable(c) => {
                let code = c as u32;
                // Writing to a String cannot fail
                let _ = if code < 0x80 {
                    write!(quoted, "\\x{code:02x}")
                } else if code <= 0xFFFF {
                    write!(quoted, "\\u{code:04x}")
                } else {
                    write!(quoted, "\\U{code:08x}")
                };
            }
            c => quoted.push(c),
        }
    }
}

/// Quotes `value` with C-style backslash escapes.
///
/// `"` and `\` are escaped, common control characters use their short
/// escapes (`\n`, `\t`, ...), any other character that is not printable
/// becomes `\xNN`, `\uNNNN` or `\UNNNNNNNN`.
pub fn quote_field(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    push_escaped(&mut quoted, value);
    quoted.push('"');
    quoted
}

/// Like [`quote_field`], for data that may not be valid UTF-8.
///
/// Each byte that is not part of a valid UTF-8 sequence is written as `\xNN`.
pub fn quote_bytes(value: &[u8]) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    let mut rest = value;
    loop {
        match std::str::from_utf8(rest) {
            Ok(valid) => {
                push_escaped(&mut quoted, valid);
                break;
            }
            Err(e) => {
                let (valid, after) = rest.split_at(e.valid_up_to());
                push_escaped(&mut quoted, std::str::from_utf8(valid).unwrap_or_default());
                let invalid_len = e.error_len().unwrap_or(after.len());
                for byte in &after[..invalid_len] {
                    let _ = write!(quoted, "\\x{byte:02x}");
                }
                rest = &after[invalid_len..];
            }
        }
    }
    quoted.push('"');
    quoted
}

pub(super) struct QuotedWriter<W: Write> {
    out: W,
}

impl<W: Write> QuotedWriter<W> {
    pub(super) fn new(out: W) -> Self {
        Self { out }
    }

    pub(super) fn write_header(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}", OUTPUT_COLUMNS.join(","))
    }

    /// Record fields are quoted from the raw TXT bytes.
    pub(super) fn write_row(&mut self, result: &VerificationResult) -> io::Result<()> {
        let line = format!(
            "{},{},{},{},{},{}\n",
            quote_field(result.domain.as_str()),
            bool_field(result.has_mx),
            bool_field(result.has_spf()),
            quote_bytes(result.spf_bytes()),
            bool_field(result.has_dmarc()),
            quote_bytes(result.dmarc_bytes()),
        );
        // One write per row so a line is never split between writes we control
        self.out.write_all(line.as_bytes())
    }

    pub(super) fn into_inner(mut self) -> io::Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}
