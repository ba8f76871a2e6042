//! Flat-file cache backend
//!
//! Each entry is one file directly under the cache root, holding the raw
//! response body. Writes are plain overwrites, so a crash mid-save can leave a
//! truncated entry behind.

use crate::storage::traits::{Cache, CacheError, CacheResult};
use crate::storage::CacheKey;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Cache backed by a directory of HTML files
#[derive(Debug, Clone)]
pub struct FileCache {
    root: PathBuf,
}

impl FileCache {
    /// Creates a cache rooted at `root`
    ///
    /// The directory is not touched until [`FileCache::ensure_root`] is called.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Opens a cache, creating the root directory if needed
    pub fn open(root: impl Into<PathBuf>) -> CacheResult<Self> {
        let cache = Self::new(root);
        cache.ensure_root()?;
        Ok(cache)
    }

    /// Creates the root directory and any missing parents
    ///
    /// An existing directory is not an error.
    pub fn ensure_root(&self) -> CacheResult<()> {
        std::fs::create_dir_all(&self.root).map_err(|source| CacheError::CreateRoot {
            path: self.root.clone(),
            source,
        })
    }

    /// Returns the cache root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the file that holds the entry for `key`
    pub fn entry_path(&self, key: &CacheKey) -> PathBuf {
        self.root.join(key.file_name())
    }
}

impl Cache for FileCache {
    fn load(&self, key: &CacheKey) -> CacheResult<Option<Vec<u8>>> {
        let path = self.entry_path(key);
        match std::fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(CacheError::Read { path, source }),
        }
    }

    fn save(&self, key: &CacheKey, bytes: &[u8]) -> CacheResult<()> {
        let path = self.entry_path(key);
        std::fs::write(&path, bytes).map_err(|source| CacheError::Write { path, source })
    }
}
