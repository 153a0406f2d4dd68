//! Standard CSV output through the `csv` crate.

use std::io::{self, Write};

use csv::{Terminator, Writer, WriterBuilder};

use super::row::{bool_field, ResultRow};
use crate::config::OUTPUT_COLUMNS;

pub(super) struct CsvWriter<W: Write> {
    writer: Writer<W>,
}

impl<W: Write> CsvWriter<W> {
    pub(super) fn new(out: W) -> Self {
        let writer = WriterBuilder::new()
            .has_headers(false)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(out);
        Self { writer }
    }

    pub(super) fn write_header(&mut self) -> io::Result<()> {
        self.writer.write_record(OUTPUT_COLUMNS)?;
        self.writer.flush()
    }

    pub(super) fn write_row(&mut self, row: &ResultRow<'_>) -> io::Result<()> {
        self.writer.write_record([
            row.domain,
            bool_field(row.has_mx),
            bool_field(row.has_spf),
            &*row.spf_record,
            bool_field(row.has_dmarc),
            &*row.dmarc_record,
        ])?;
        // The csv writer buffers internally; push each row out as it is produced
        self.writer.flush()
    }

    pub(super) fn into_inner(self) -> io::Result<W> {
        self.writer.into_inner().map_err(|e| e.into_error())
    }
}
