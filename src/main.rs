//! NCAA denied courses scraper entry point
//!
//! This is the command-line interface. CSV goes to stdout; logs go to stderr.

use anyhow::Context;
use clap::Parser;
use ncaa_denied_courses::config::{load_config_from_env, resolve_cache_path, CONFIG_ENV_VAR};
use ncaa_denied_courses::crawler::scrape_state;
use ncaa_denied_courses::output::log_statistics;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Scrape denied courses for every high school in a state
///
/// Writes one CSV row per (school, denied course) to standard output. Pages
/// are cached on disk and never re-fetched while the cache file exists.
#[derive(Parser, Debug)]
#[command(name = "ncaa-denied-courses")]
#[command(version)]
#[command(about = "Scrape denied courses", long_about = None)]
struct Cli {
    /// State abbreviation
    #[arg(value_name = "STATE")]
    state: String,

    /// Cache directory [default: ./_ncaa_courses_cache]
    #[arg(long, value_name = "DIR")]
    cache_path: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging();

    let config = load_config_from_env()
        .with_context(|| format!("Failed to load configuration from ${}", CONFIG_ENV_VAR))?;
    let cache_path = resolve_cache_path(cli.cache_path.as_deref(), &config)
        .context("Failed to resolve cache directory")?;

    tracing::info!("Cache directory: {}", cache_path.display());

    let stdout = std::io::stdout();
    let stats = scrape_state(&config, &cli.state, &cache_path, stdout.lock())
        .await
        .with_context(|| format!("Scrape for state {} failed", cli.state))?;

    log_statistics(&stats);

    Ok(())
}

/// Sets up the tracing subscriber, writing to stderr
///
/// `RUST_LOG` overrides the default filter.
fn setup_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("ncaa_denied_courses=info,warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
