//! HTTP implementation of the API traits

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client as HttpClient;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderName, HeaderValue};

use super::rate_limit::ReactiveRateLimiter;
use crate::config::Config;
use crate::error::{ApiError, ConfigError, Result};
use crate::jsonapi::MEDIA_TYPE;
use crate::validation::require_id;

mod http;
mod no_code_modules;
mod oauth_clients;
mod organizations;
mod policies;
mod projects;
mod registry_modules;
mod tags;
mod teams;
mod users;
mod workspaces;

/// User agent sent with every request
const USER_AGENT: &str = concat!("tfe-client/", env!("CARGO_PKG_VERSION"));

/// Terraform Cloud / Enterprise API client.
///
/// Cheap to clone; clones share the connection pool and the rate limiter.
/// Dropping a returned future cancels its request.
#[derive(Clone)]
pub struct TfeClient {
    http: HttpClient,
    base_url: String,
    retry_server_errors: bool,
    retry_max: u32,
    page_size: usize,
    rate_limiter: Arc<ReactiveRateLimiter>,
}

impl std::fmt::Debug for TfeClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TfeClient")
            .field("base_url", &self.base_url)
            .field("retry_server_errors", &self.retry_server_errors)
            .field("retry_max", &self.retry_max)
            .finish_non_exhaustive()
    }
}

fn default_headers(config: &Config) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();

    let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.token.trim()))
        .map_err(|_| ConfigError::Invalid("token contains invalid header characters".to_string()))?;
    auth.set_sensitive(true);
    headers.insert(AUTHORIZATION, auth);
    headers.insert(ACCEPT, HeaderValue::from_static(MEDIA_TYPE));

    for (name, value) in &config.headers {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|_| ConfigError::Invalid(format!("invalid header name: {}", name)))?;
        let value = HeaderValue::from_str(value)
            .map_err(|_| ConfigError::Invalid(format!("invalid value for header {}", name)))?;
        headers.insert(name, value);
    }

    Ok(headers)
}

impl TfeClient {
    /// Build a client from a validated configuration.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;

        let http = HttpClient::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(USER_AGENT)
            .default_headers(default_headers(&config)?)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url(),
            retry_server_errors: config.retry_server_errors,
            retry_max: config.retry_max,
            page_size: config.page_size,
            rate_limiter: Arc::new(ReactiveRateLimiter::new()),
        })
    }

    /// Build a client from `TFE_ADDRESS` and `TFE_TOKEN`.
    pub fn from_env() -> Result<Self> {
        Self::new(Config::from_env())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Requests per second currently enforced, 0 until the first 429.
    pub fn rate_limit(&self) -> u32 {
        self.rate_limiter.limit()
    }
}

/// Validated path segment for an organization name.
fn organization_segment(organization: &str) -> Result<&str> {
    require_id(organization, "organization")?;
    Ok(organization)
}
