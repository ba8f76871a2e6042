//! Configuration module
//!
//! Every setting has a built-in default, so a configuration file is optional.
//! When `NCAA_COURSES_CONFIG` names a TOML file it is loaded and validated.
//!
//! # Example
//!
//! ```no_run
//! use ncaa_denied_courses::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("scraper.toml")).unwrap();
//! println!("Posting searches to: {}", config.portal.endpoint);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    CacheConfig, Config, PortalConfig, CACHE_DIR_NAME, DEFAULT_ENDPOINT, DEFAULT_USER_AGENT,
};

// Re-export parser functions
pub use parser::{load_config, load_config_from_env, resolve_cache_path, CONFIG_ENV_VAR};
pub use validation::validate;
