//! Storage module for the on-disk page cache
//!
//! Fetched portal pages are cached under a root directory so that later runs
//! can be served without touching the network. Keys live in two namespaces,
//! state school lists and school detail pages, which map to distinct file
//! name prefixes.

mod file_cache;
mod traits;

pub use file_cache::FileCache;
pub use traits::{Cache, CacheError, CacheResult};

/// Namespace of a cache entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheKind {
    /// Search results listing the schools of one state
    StateList,
    /// Detail page of one school
    SchoolDetail,
}

impl CacheKind {
    /// File name prefix for entries of this kind
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::StateList => "schools_",
            Self::SchoolDetail => "school_",
        }
    }
}

/// Key of a cached document
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub kind: CacheKind,
    pub key: String,
}

impl CacheKey {
    /// Key for the school list of a state
    pub fn state_list(state: &str) -> Self {
        Self {
            kind: CacheKind::StateList,
            key: state.to_string(),
        }
    }

    /// Key for the detail page of a school
    pub fn school_detail(hs_code: &str) -> Self {
        Self {
            kind: CacheKind::SchoolDetail,
            key: hs_code.to_string(),
        }
    }

    /// Deterministic file name, e.g. `schools_TX.html` or `school_441234.html`
    pub fn file_name(&self) -> String {
        format!("{}{}.html", self.kind.prefix(), self.key)
    }
}

impl std::fmt::Display for CacheKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.file_name())
    }
}
