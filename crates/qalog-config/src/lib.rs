//! Configuration management for qalog.
//!
//! Parses `qalog.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! Environment overrides are applied during load via [`EnvOverrides`]:
//!
//! - `NOTION_API_KEY` - Notion integration token
//! - `NOTION_PAGE_ID` - destination page (block container) ID
//! - `QALOG_REFORMAT_COMMAND` - shell command of the reformatting tool
//!
//! ## Environment Variable Expansion
//!
//! String values read from the config file support expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `notion.api_key`
//! - `notion.page_id`
//! - `notion.base_url`
//! - `reformatter.command`

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "qalog.toml";

/// Environment variable holding the Notion integration token.
pub const ENV_API_KEY: &str = "NOTION_API_KEY";
/// Environment variable holding the destination page ID.
pub const ENV_PAGE_ID: &str = "NOTION_PAGE_ID";
/// Environment variable overriding the reformatter command.
pub const ENV_REFORMAT_COMMAND: &str = "QALOG_REFORMAT_COMMAND";

/// Largest number of children the Notion API accepts per append call.
pub const MAX_BATCH_SIZE: usize = 100;

/// Values taken from the process environment that override the config file.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct EnvOverrides {
    /// Override `notion.api_key`.
    pub api_key: Option<String>,
    /// Override `notion.page_id`.
    pub page_id: Option<String>,
    /// Override `reformatter.command`.
    pub reformat_command: Option<String>,
}

impl EnvOverrides {
    /// Read overrides from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read overrides through an arbitrary lookup function.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|value| !value.is_empty());
        Self {
            api_key: get(ENV_API_KEY),
            page_id: get(ENV_PAGE_ID),
            reformat_command: get(ENV_REFORMAT_COMMAND),
        }
    }
}

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Notion destination configuration.
    pub notion: NotionConfig,
    /// Reformatting tool configuration.
    pub reformatter: ReformatterConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Notion API configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NotionConfig {
    /// Integration token sent as a bearer credential.
    pub api_key: String,
    /// ID of the page that blocks are appended to.
    pub page_id: String,
    /// REST API base URL.
    pub base_url: String,
    /// Value of the `Notion-Version` header.
    pub version: String,
    /// Children per append call.
    pub batch_size: usize,
}

impl Default for NotionConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            page_id: String::new(),
            base_url: "https://api.notion.com/v1".to_owned(),
            version: "2022-06-28".to_owned(),
            batch_size: MAX_BATCH_SIZE,
        }
    }
}

impl NotionConfig {
    /// Validate that all required fields are properly set.
    ///
    /// The page ID is checked first so a missing destination is always
    /// reported as such.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any field is empty or has invalid format.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_id.is_empty() {
            return Err(ConfigError::Validation(format!(
                "{ENV_PAGE_ID} (or notion.page_id) must be set"
            )));
        }
        if self.api_key.is_empty() {
            return Err(ConfigError::Validation(format!(
                "{ENV_API_KEY} (or notion.api_key) must be set"
            )));
        }
        require_non_empty(&self.base_url, "notion.base_url")?;
        require_http_url(&self.base_url, "notion.base_url")?;
        require_non_empty(&self.version, "notion.version")?;
        if !(1..=MAX_BATCH_SIZE).contains(&self.batch_size) {
            return Err(ConfigError::Validation(format!(
                "notion.batch_size must be between 1 and {MAX_BATCH_SIZE}"
            )));
        }
        Ok(())
    }
}

/// Reformatting tool configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReformatterConfig {
    /// Shell command that reads the prompt on stdin and writes markdown to stdout.
    pub command: String,
}

impl Default for ReformatterConfig {
    fn default() -> Self {
        Self {
            command: "gemini".to_owned(),
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`notion.api_key`").
        field: String,
        /// Error message (e.g., "${`NOTION_API_KEY`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional environment overrides.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `qalog.toml` in current directory and parents,
    /// falling back to defaults when none is found.
    ///
    /// Overrides are applied after loading so environment values take
    /// precedence over the file.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        overrides: Option<&EnvOverrides>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(overrides) = overrides {
            config.apply_overrides(overrides);
        }

        Ok(config)
    }

    /// Apply environment overrides to the configuration.
    fn apply_overrides(&mut self, overrides: &EnvOverrides) {
        if let Some(api_key) = &overrides.api_key {
            self.notion.api_key.clone_from(api_key);
        }
        if let Some(page_id) = &overrides.page_id {
            self.notion.page_id.clone_from(page_id);
        }
        if let Some(command) = &overrides.reformat_command {
            self.reformatter.command.clone_from(command);
        }
    }

    /// Get validated Notion configuration.
    ///
    /// Use this instead of accessing the `notion` field directly when the
    /// command is about to talk to the API.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if the page ID or token is missing,
    /// or any other field is invalid.
    pub fn require_notion(&self) -> Result<&NotionConfig, ConfigError> {
        self.notion.validate()?;
        Ok(&self.notion)
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate values that must hold even before credentials are supplied.
    ///
    /// Credentials and page ID are checked later by [`Config::require_notion`],
    /// since they usually come from the environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_http_url(&self.notion.base_url, "notion.base_url")?;
        require_non_empty(&self.reformatter.command, "reformatter.command")?;
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.notion.api_key = expand::expand_env(&self.notion.api_key, "notion.api_key")?;
        self.notion.page_id = expand::expand_env(&self.notion.page_id, "notion.page_id")?;
        self.notion.base_url = expand::expand_env(&self.notion.base_url, "notion.base_url")?;
        self.reformatter.command =
            expand::expand_env(&self.reformatter.command, "reformatter.command")?;
        Ok(())
    }
}
