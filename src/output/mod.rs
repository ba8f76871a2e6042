//! Output module for writing scraped rows
//!
//! This module handles:
//! - Writing joined school/course rows as CSV
//! - Recording per-run statistics

mod csv_output;
pub mod stats;
mod traits;

pub use csv_output::CsvOutputHandler;
pub use stats::{log_statistics, RunStatistics};
pub use traits::OutputHandler;
