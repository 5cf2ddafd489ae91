//! Notion REST API client.
//!
//! Provides sync HTTP client for the Notion public API with bearer token
//! authentication.

mod blocks;

use std::time::Duration;

use qalog_config::NotionConfig;
use ureq::Agent;

/// Default HTTP timeout in seconds.
const DEFAULT_TIMEOUT: u64 = 30;

/// Notion REST API client.
pub struct NotionClient {
    agent: Agent,
    base_url: String,
    api_key: String,
    version: String,
}

impl NotionClient {
    /// Create client from config values.
    ///
    /// # Arguments
    /// * `base_url` - API base URL (e.g. `https://api.notion.com/v1`)
    /// * `api_key` - Integration token
    /// * `version` - Value of the `Notion-Version` header
    #[must_use]
    pub fn new(base_url: &str, api_key: &str, version: &str) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(DEFAULT_TIMEOUT)))
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_owned(),
            api_key: api_key.to_owned(),
            version: version.to_owned(),
        }
    }

    /// Create client from validated Notion configuration.
    #[must_use]
    pub fn from_config(config: &NotionConfig) -> Self {
        Self::new(&config.base_url, &config.api_key, &config.version)
    }

    /// Browser URL of a page, for operator output.
    pub fn page_url(page_id: &str) -> String {
        format!("https://www.notion.so/{}", page_id.replace('-', ""))
    }

    fn auth_header(&self) -> String {
        format!("Bearer {}", self.api_key)
    }
}

impl std::fmt::Debug for NotionClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotionClient")
            .field("base_url", &self.base_url)
            .field("version", &self.version)
            .finish_non_exhaustive()
    }
}
