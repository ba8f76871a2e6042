//! Output handler trait

use crate::records::OutputRow;
use crate::ScrapeError;

/// Destination for joined school/course rows
pub trait OutputHandler {
    /// Writes the column header; called once before any row
    fn write_header(&mut self) -> Result<(), ScrapeError>;

    /// Writes one row and makes it visible to the consumer immediately
    fn write_row(&mut self, row: &OutputRow) -> Result<(), ScrapeError>;
}
