//! Crawler module for portal fetching and run coordination
//!
//! This module contains the core scrape logic, including:
//! - HTTP POST searches against the portal
//! - Cache-or-fetch handling of portal pages
//! - Overall run coordination

mod coordinator;
mod fetcher;

pub use coordinator::{load_or_fetch, Coordinator};
pub use fetcher::{build_http_client, Fetcher};

use crate::config::Config;
use crate::output::{CsvOutputHandler, RunStatistics};
use crate::storage::FileCache;
use crate::ScrapeError;
use std::io::Write;
use std::path::Path;

/// Runs a complete scrape for one state
///
/// This is the main entry point for a run. It will:
/// 1. Create the cache directory if needed
/// 2. Build the portal client
/// 3. Write the CSV header and one row per denied course to `writer`
///
/// # Arguments
///
/// * `config` - The scraper configuration
/// * `state` - State abbreviation to search for
/// * `cache_root` - Directory holding cached pages
/// * `writer` - Destination of the CSV output
///
/// # Returns
///
/// * `Ok(RunStatistics)` - Run completed successfully
/// * `Err(ScrapeError)` - Run aborted; rows written before the failure remain
pub async fn scrape_state<W: Write>(
    config: &Config,
    state: &str,
    cache_root: &Path,
    writer: W,
) -> Result<RunStatistics, ScrapeError> {
    let cache = FileCache::open(cache_root)?;
    tracing::debug!("Using cache directory {}", cache.root().display());

    let fetcher = Fetcher::new(&config.portal)?;
    let mut coordinator = Coordinator::new(fetcher, cache, CsvOutputHandler::new(writer));

    coordinator.run(state).await
}
