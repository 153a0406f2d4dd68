//! Result output.
//!
//! [`ResultEmitter`] renders verification results in one of the
//! [`OutputFormat`]s, one line per result, header first. Output is append-only:
//! a row is written as soon as it is emitted and never revisited.

mod jsonl;
mod quoted;
mod rfc4180;
mod row;

use std::io::{self, Write};

use crate::config::OutputFormat;
use crate::verify::VerificationResult;

pub use quoted::{quote_bytes, quote_field};
pub use row::ResultRow;

enum Sink<W: Write> {
    Quoted(quoted::QuotedWriter<W>),
    Csv(rfc4180::CsvWriter<W>),
    Jsonl(jsonl::JsonlWriter<W>),
}

/// Single writer for the output stream.
pub struct ResultEmitter<W: Write> {
    sink: Sink<W>,
    rows_written: usize,
}

impl<W: Write> ResultEmitter<W> {
    /// Creates the emitter and writes the header line.
    ///
    /// The header is written here, exactly once, so it is present even when
    /// no result follows. JSON Lines output has no header.
    ///
    /// # Errors
    ///
    /// Returns an error if writing the header fails.
    pub fn new(out: W, format: OutputFormat) -> io::Result<Self> {
        let sink = match format {
            OutputFormat::Quoted => {
                let mut writer = quoted::QuotedWriter::new(out);
                writer.write_header()?;
                Sink::Quoted(writer)
            }
            OutputFormat::Csv => {
                let mut writer = rfc4180::CsvWriter::new(out);
                writer.write_header()?;
                Sink::Csv(writer)
            }
            OutputFormat::Jsonl => Sink::Jsonl(jsonl::JsonlWriter::new(out)),
        };
        Ok(Self {
            sink,
            rows_written: 0,
        })
    }

    /// Writes one result as one line.
    pub fn emit(&mut self, result: &VerificationResult) -> io::Result<()> {
        match &mut self.sink {
            Sink::Quoted(writer) => writer.write_row(result)?,
            Sink::Csv(writer) => writer.write_row(&ResultRow::from(result))?,
            Sink::Jsonl(writer) => writer.write_row(&ResultRow::from(result))?,
        }
        self.rows_written += 1;
        Ok(())
    }

    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    /// Flushes and hands back the underlying writer.
    pub fn finish(self) -> io::Result<W> {
        match self.sink {
            Sink::Quoted(writer) => writer.into_inner(),
            Sink::Csv(writer) => writer.into_inner(),
            Sink::Jsonl(writer) => writer.into_inner(),
        }
    }
}
