use crate::config::types::{Config, CACHE_DIR_NAME};
use crate::config::validation::validate;
use crate::ConfigError;
use std::path::{Path, PathBuf};

/// Environment variable naming an optional TOML configuration file
pub const CONFIG_ENV_VAR: &str = "NCAA_COURSES_CONFIG";

/// Loads and parses a configuration file from the given path
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(Config)` - Successfully loaded and validated configuration
/// * `Err(ConfigError)` - Failed to load, parse, or validate the configuration
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use ncaa_denied_courses::config::load_config;
///
/// let config = load_config(Path::new("scraper.toml")).unwrap();
/// println!("Endpoint: {}", config.portal.endpoint);
/// ```
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    validate(&config)?;
    Ok(config)
}

/// Loads the file named by `NCAA_COURSES_CONFIG`, or the built-in defaults
/// when the variable is unset
pub fn load_config_from_env() -> Result<Config, ConfigError> {
    match std::env::var_os(CONFIG_ENV_VAR) {
        Some(path) => load_config(Path::new(&path)),
        None => Ok(Config::default()),
    }
}

/// Picks the cache root: explicit path, then configured path, then
/// `_ncaa_courses_cache` under the current directory
pub fn resolve_cache_path(
    explicit: Option<&Path>,
    config: &Config,
) -> Result<PathBuf, ConfigError> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }

    if let Some(path) = &config.cache.path {
        return Ok(PathBuf::from(path));
    }

    Ok(std::env::current_dir()?.join(CACHE_DIR_NAME))
}
