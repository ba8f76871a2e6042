//! CSV output handler
//!
//! Rows use minimal quoting and CRLF terminators. The writer is flushed after
//! every record so a failed run still leaves all completed rows in the output.

use crate::output::traits::OutputHandler;
use crate::records::{OutputRow, FIELD_NAMES};
use crate::ScrapeError;
use csv::{QuoteStyle, Terminator, Writer, WriterBuilder};
use std::io::Write;

/// Writes rows as CSV to any writer
pub struct CsvOutputHandler<W: Write> {
    writer: Writer<W>,
}

impl<W: Write> CsvOutputHandler<W> {
    /// Wraps `inner`; the header is written by [`OutputHandler::write_header`]
    pub fn new(inner: W) -> Self {
        let writer = WriterBuilder::new()
            .has_headers(false)
            .quote_style(QuoteStyle::Necessary)
            .terminator(Terminator::CRLF)
            .from_writer(inner);

        Self { writer }
    }

    /// Flushes and returns the underlying writer
    pub fn into_inner(self) -> Result<W, ScrapeError> {
        self.writer
            .into_inner()
            .map_err(|e| ScrapeError::Io(e.into_error()))
    }
}

impl<W: Write> OutputHandler for CsvOutputHandler<W> {
    fn write_header(&mut self) -> Result<(), ScrapeError> {
        self.writer.write_record(FIELD_NAMES)?;
        self.writer.flush()?;
        Ok(())
    }

    fn write_row(&mut self, row: &OutputRow) -> Result<(), ScrapeError> {
        self.writer.serialize(row)?;
        self.writer.flush()?;
        Ok(())
    }
}
