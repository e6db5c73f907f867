//! Client configuration

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Default API address
pub const DEFAULT_ADDRESS: &str = "https://app.terraform.io";

/// Default API path prefix
pub const DEFAULT_BASE_PATH: &str = "/api/v2/";

/// Environment variable overriding the address
pub const ADDRESS_ENV: &str = "TFE_ADDRESS";

/// Environment variable carrying the API token
pub const TOKEN_ENV: &str = "TFE_TOKEN";

/// Client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Scheme and host of the service
    #[serde(default = "default_address")]
    pub address: String,

    /// API path prefix appended to the address
    #[serde(default = "default_base_path")]
    pub base_path: String,

    /// Bearer token
    #[serde(default)]
    pub token: String,

    /// Extra headers sent with every request
    #[serde(default)]
    pub headers: BTreeMap<String, String>,

    /// Retry 5xx responses in addition to 429
    #[serde(default)]
    pub retry_server_errors: bool,

    /// Maximum number of re-attempts for a retryable response
    #[serde(default = "default_retry_max")]
    pub retry_max: u32,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Page size used by the `list_all` helpers
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_address() -> String {
    DEFAULT_ADDRESS.to_string()
}

fn default_base_path() -> String {
    DEFAULT_BASE_PATH.to_string()
}

fn default_retry_max() -> u32 {
    3
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_page_size() -> usize {
    100
}

impl Default for Config {
    fn default() -> Self {
        Self {
            address: default_address(),
            base_path: default_base_path(),
            token: String::new(),
            headers: BTreeMap::new(),
            retry_server_errors: false,
            retry_max: default_retry_max(),
            timeout_secs: default_timeout_secs(),
            page_size: default_page_size(),
        }
    }
}

impl Config {
    /// Build a configuration for the given address and token.
    pub fn new(address: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            token: token.into(),
            ..Self::default()
        }
    }

    /// Defaults overridden by `TFE_ADDRESS` and `TFE_TOKEN`.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(address) = std::env::var(ADDRESS_ENV).ok().filter(|v| !v.is_empty()) {
            config.address = address;
        }
        if let Ok(token) = std::env::var(TOKEN_ENV) {
            config.token = token;
        }
        config
    }

    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".tfe").join("config.yaml"))
    }

    /// Load configuration from the default path
    pub fn load() -> Result<Self> {
        Self::load_from(Self::default_path()?)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::NotFound.into());
        }

        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;

        Ok(config)
    }

    /// Check that the configuration can be used to build a client
    pub fn validate(&self) -> Result<()> {
        if self.token.trim().is_empty() {
            return Err(ConfigError::MissingToken.into());
        }
        reqwest::Url::parse(&self.base_url())
            .map_err(|e| ConfigError::InvalidAddress(format!("{}: {}", self.address, e)))?;
        if self.page_size == 0 {
            return Err(ConfigError::Invalid("page_size must be greater than zero".to_string()).into());
        }
        Ok(())
    }

    /// Address and base path joined, always ending in `/`.
    pub fn base_url(&self) -> String {
        let address = self.address.trim_end_matches('/');
        let base_path = self.base_path.trim_matches('/');
        if base_path.is_empty() {
            format!("{}/", address)
        } else {
            format!("{}/{}/", address, base_path)
        }
    }
}
