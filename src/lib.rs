//! NCAA denied courses scraper
//!
//! This crate scrapes the NCAA high school portal for the schools of a state
//! and the courses each school has had denied, writing the joined result as CSV.
//! Fetched pages are kept in an on-disk cache so repeated runs stay offline.

pub mod config;
pub mod crawler;
pub mod output;
pub mod parser;
pub mod records;
pub mod storage;

use thiserror::Error;

/// Main error type for scraper operations
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Cache error: {0}")]
    Cache(#[from] storage::CacheError),

    #[error("HTML parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Structural errors raised when a page does not have the expected shape
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Invalid CSS selector: {0}")]
    InvalidSelector(String),

    #[error("Required element not found: {selector}")]
    MissingElement { selector: String },

    #[error("Missing cell {index} in {context} row")]
    MissingCell { context: &'static str, index: usize },

    #[error("Subject '{subject}' has no course table")]
    MissingCourseTable { subject: String },
}

/// Result type alias for scraper operations
pub type Result<T> = std::result::Result<T, ScrapeError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for HTML parsing
pub type ParseResult<T> = std::result::Result<T, ParseError>;

// Re-export commonly used types
pub use config::Config;
pub use records::{CourseRecord, OutputRow, SchoolRecord};
