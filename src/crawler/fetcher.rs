//! HTTP fetcher implementation
//!
//! Every portal page is obtained by POSTing the same search form to a single
//! endpoint. A state search fills `state`; a school lookup fills `hsCode`.
//! Response status is logged but never acted on: the body is returned as-is
//! and the parsers decide whether it has the expected shape.

use crate::config::PortalConfig;
use crate::{ConfigError, ScrapeError};
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;
use url::Url;

/// Value of the submit button the portal expects with every search
const SEARCH_ACTION: &str = "Search";

/// Search form body, serialized in field order as
/// `application/x-www-form-urlencoded`
#[derive(Debug, Serialize)]
struct SearchForm<'a> {
    #[serde(rename = "hsCode")]
    hs_code: &'a str,
    #[serde(rename = "ceebCode")]
    ceeb_code: &'a str,
    state: &'a str,
    city: &'a str,
    name: &'a str,
    #[serde(rename = "hsActionSubmit")]
    action: &'a str,
}

impl<'a> SearchForm<'a> {
    fn by_state(state: &'a str) -> Self {
        Self {
            hs_code: "",
            ceeb_code: "",
            state,
            city: "",
            name: "",
            action: SEARCH_ACTION,
        }
    }

    fn by_hs_code(hs_code: &'a str) -> Self {
        Self {
            hs_code,
            ceeb_code: "",
            state: "",
            city: "",
            name: "",
            action: SEARCH_ACTION,
        }
    }
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The portal configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use ncaa_denied_courses::config::PortalConfig;
/// use ncaa_denied_courses::crawler::build_http_client;
///
/// let client = build_http_client(&PortalConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &PortalConfig) -> Result<Client, reqwest::Error> {
    let mut builder = Client::builder()
        .user_agent(config.user_agent.as_str())
        .gzip(true)
        .brotli(true);

    if let Some(secs) = config.timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }

    builder.build()
}

/// Issues portal searches and returns raw response bodies
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
    endpoint: Url,
}

impl Fetcher {
    /// Creates a fetcher for the configured endpoint
    pub fn new(config: &PortalConfig) -> Result<Self, ScrapeError> {
        let endpoint = Url::parse(&config.endpoint)
            .map_err(|e| ConfigError::InvalidUrl(format!("Invalid endpoint: {}", e)))?;
        let client = build_http_client(config)?;

        Ok(Self { client, endpoint })
    }

    /// Returns the endpoint searches are posted to
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Fetches the school list page for a state
    pub async fn fetch_schools_by_state(&self, state: &str) -> Result<Vec<u8>, ScrapeError> {
        tracing::info!("Fetching school list for state {}", state);
        self.post_search(&SearchForm::by_state(state)).await
    }

    /// Fetches the detail page of a school
    pub async fn fetch_school_detail(&self, hs_code: &str) -> Result<Vec<u8>, ScrapeError> {
        tracing::info!("Fetching school detail for {}", hs_code);
        self.post_search(&SearchForm::by_hs_code(hs_code)).await
    }

    async fn post_search(&self, form: &SearchForm<'_>) -> Result<Vec<u8>, ScrapeError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .form(form)
            .send()
            .await
            .map_err(|source| ScrapeError::Http {
                url: self.endpoint.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Portal returned HTTP {} for {:?}", status.as_u16(), form);
        }

        let body = response.bytes().await.map_err(|source| ScrapeError::Http {
            url: self.endpoint.to_string(),
            source,
        })?;

        tracing::debug!("Received {} bytes (HTTP {})", body.len(), status.as_u16());
        Ok(body.to_vec())
    }
}
