use serde::Deserialize;

/// Search endpoint of the NCAA high school portal
pub const DEFAULT_ENDPOINT: &str = "https://web3.ncaa.org/hsportal/exec/hsAction";

/// Browser user agent sent with every request; the portal may gate on it
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_11_6) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/53.0.2785.116 Safari/537.36";

/// Name of the cache directory created under the working directory
pub const CACHE_DIR_NAME: &str = "_ncaa_courses_cache";

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub portal: PortalConfig,
    #[serde(default)]
    pub cache: CacheConfig,
}

/// Portal request configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PortalConfig {
    /// URL every search form is POSTed to
    pub endpoint: String,

    /// User-Agent header value
    #[serde(rename = "user-agent")]
    pub user_agent: String,

    /// Whole-request timeout in seconds; unset means no timeout
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: Option<u64>,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: None,
        }
    }
}

/// Page cache configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CacheConfig {
    /// Cache root used when `--cache-path` is not given
    #[serde(default)]
    pub path: Option<String>,
}
