//! Pipeline coordinator - main scrape orchestration logic
//!
//! This module drives a run from start to finish:
//! - Loading or fetching the state school list
//! - Loading or fetching each school's detail page
//! - Parsing denied courses and streaming joined rows to the output
//!
//! Schools are processed one at a time, in list order. Any error aborts the
//! run; rows already written stay written.

use crate::crawler::Fetcher;
use crate::output::{OutputHandler, RunStatistics};
use crate::parser::{decode_body, parse_denied_courses, parse_state_schools};
use crate::records::{OutputRow, SchoolRecord};
use crate::storage::{Cache, CacheKey};
use crate::ScrapeError;
use std::future::Future;

/// Serves `key` from the cache, or fetches it and stores the result
///
/// Only a missing entry triggers a fetch. Cache read errors propagate.
pub async fn load_or_fetch<C, F, Fut>(
    cache: &C,
    key: &CacheKey,
    stats: &mut RunStatistics,
    fetch: F,
) -> Result<Vec<u8>, ScrapeError>
where
    C: Cache + ?Sized,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<Vec<u8>, ScrapeError>>,
{
    if let Some(bytes) = cache.load(key)? {
        tracing::debug!("Cache hit for {}", key);
        stats.cache_hits += 1;
        return Ok(bytes);
    }

    tracing::debug!("Cache miss for {}", key);
    let bytes = fetch().await?;
    stats.fetches += 1;

    cache.save(key, &bytes)?;
    tracing::debug!("Cached {} ({} bytes)", key, bytes.len());

    Ok(bytes)
}

/// Main pipeline coordinator structure
pub struct Coordinator<C: Cache, O: OutputHandler> {
    fetcher: Fetcher,
    cache: C,
    output: O,
    stats: RunStatistics,
}

impl<C: Cache, O: OutputHandler> Coordinator<C, O> {
    /// Creates a new coordinator instance
    ///
    /// # Arguments
    ///
    /// * `fetcher` - Portal client used on cache misses
    /// * `cache` - Page cache, whose root must already exist
    /// * `output` - Destination of the CSV rows
    pub fn new(fetcher: Fetcher, cache: C, output: O) -> Self {
        Self {
            fetcher,
            cache,
            output,
            stats: RunStatistics::default(),
        }
    }

    /// Statistics collected so far
    pub fn stats(&self) -> RunStatistics {
        self.stats
    }

    /// Consumes the coordinator and returns its output handler
    pub fn into_output(self) -> O {
        self.output
    }

    /// Runs the pipeline for one state
    ///
    /// This is the core scrape logic that:
    /// 1. Loads or fetches the state school list
    /// 2. Parses the schools and writes the CSV header
    /// 3. For each school, loads or fetches its page and writes one row per
    ///    denied course
    pub async fn run(&mut self, state: &str) -> Result<RunStatistics, ScrapeError> {
        tracing::info!("Starting scrape for state {}", state);

        let schools = self.load_schools(state).await?;
        self.stats.schools = schools.len();
        tracing::info!("Found {} schools in {}", schools.len(), state);

        self.output.write_header()?;

        for (index, school) in schools.iter().enumerate() {
            tracing::debug!(
                "Processing school {}/{}: {} ({})",
                index + 1,
                schools.len(),
                school.high_school_name,
                school.hs_code
            );

            self.process_school(school).await?;

            if (index + 1) % 25 == 0 {
                tracing::info!(
                    "Progress: {}/{} schools, {} rows",
                    index + 1,
                    schools.len(),
                    self.stats.rows_written
                );
            }
        }

        tracing::info!(
            "Scrape completed: {} rows from {} schools",
            self.stats.rows_written,
            self.stats.schools_processed
        );

        Ok(self.stats)
    }

    /// Obtains and parses the school list for a state
    async fn load_schools(&mut self, state: &str) -> Result<Vec<SchoolRecord>, ScrapeError> {
        let key = CacheKey::state_list(state);
        let html = load_or_fetch(&self.cache, &key, &mut self.stats, || {
            self.fetcher.fetch_schools_by_state(state)
        })
        .await?;

        Ok(parse_state_schools(&decode_body(&html))?)
    }

    /// Obtains a school's page and writes its denied courses
    async fn process_school(&mut self, school: &SchoolRecord) -> Result<(), ScrapeError> {
        let key = CacheKey::school_detail(&school.hs_code);
        let html = load_or_fetch(&self.cache, &key, &mut self.stats, || {
            self.fetcher.fetch_school_detail(&school.hs_code)
        })
        .await?;

        let courses = parse_denied_courses(&decode_body(&html)).map_err(|e| {
            tracing::error!("Unexpected page for school {}: {}", school.hs_code, e);
            e
        })?;

        for course in courses {
            self.output.write_row(&OutputRow::join(school, course))?;
            self.stats.rows_written += 1;
        }

        self.stats.schools_processed += 1;
        Ok(())
    }
}
