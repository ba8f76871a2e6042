//! Cache traits and error types
//!
//! This module defines the trait interface for page cache backends and
//! associated error types.

use crate::storage::CacheKey;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during cache operations
///
/// A missing entry is not an error; [`Cache::load`] reports it as `Ok(None)`.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Failed to create cache directory {path}: {source}")]
    CreateRoot {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read cache entry {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write cache entry {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Result type for cache operations
pub type CacheResult<T> = Result<T, CacheError>;

/// Trait for page cache backends
///
/// Entries never expire: once present, an entry is served as-is until it is
/// removed out of band.
pub trait Cache {
    /// Loads a cached document
    ///
    /// # Returns
    ///
    /// * `Ok(Some(bytes))` - The stored document, byte for byte
    /// * `Ok(None)` - No entry exists for this key
    /// * `Err(CacheError)` - The entry exists but could not be read
    fn load(&self, key: &CacheKey) -> CacheResult<Option<Vec<u8>>>;

    /// Stores a document, overwriting any existing entry
    fn save(&self, key: &CacheKey, bytes: &[u8]) -> CacheResult<()>;
}
