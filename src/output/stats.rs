//! Per-run statistics

/// Counters collected while a pipeline run progresses
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStatistics {
    /// Schools listed for the state
    pub schools: usize,

    /// Schools whose detail page was parsed
    pub schools_processed: usize,

    /// CSV rows written, excluding the header
    pub rows_written: usize,

    /// Documents served from the cache
    pub cache_hits: usize,

    /// Documents fetched from the portal
    pub fetches: usize,
}

/// Logs a run summary
pub fn log_statistics(stats: &RunStatistics) {
    tracing::info!(
        "Processed {}/{} schools, wrote {} rows",
        stats.schools_processed,
        stats.schools,
        stats.rows_written
    );
    tracing::info!(
        "Pages: {} from cache, {} fetched",
        stats.cache_hits,
        stats.fetches
    );
}
