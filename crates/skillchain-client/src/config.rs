//! Submission client configuration.
//!
//! Endpoints are tried in order. An explicitly configured endpoint goes
//! first; the local API default is appended after it unless already
//! present.

use url::Url;

/// Endpoint appended after any configured ones.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8080";

/// Default request timeout.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for submitting calls to SkillChain API endpoints.
///
/// Custom `Debug` implementation redacts the `api_token` field
/// to prevent credential leakage in log output.
#[derive(Clone)]
pub struct ClientConfig {
    /// Endpoints in failover order. Never empty once built by a constructor.
    pub endpoints: Vec<Url>,
    /// Bearer token `{account}:{secret}`. Anonymous when `None`.
    pub api_token: Option<String>,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("endpoints", &self.endpoints)
            .field("api_token", &self.api_token.as_ref().map(|_| "[REDACTED]"))
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `SKILLCHAIN_ENDPOINT` (optional, tried before the default)
    /// - `SKILLCHAIN_API_TOKEN` (optional)
    /// - `SKILLCHAIN_TIMEOUT_SECS` (default: 30)
    pub fn from_env() -> Result<Self, ConfigError> {
        let configured: Vec<String> = std::env::var("SKILLCHAIN_ENDPOINT")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .into_iter()
            .collect();

        Ok(Self {
            endpoints: endpoint_list(&configured)?,
            api_token: std::env::var("SKILLCHAIN_API_TOKEN")
                .ok()
                .filter(|s| !s.is_empty()),
            timeout_secs: std::env::var("SKILLCHAIN_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
        })
    }

    /// Replace the endpoint list. The default endpoint is still appended.
    pub fn with_endpoints(mut self, endpoints: &[String]) -> Result<Self, ConfigError> {
        self.endpoints = endpoint_list(endpoints)?;
        Ok(self)
    }

    /// Use exactly the given endpoints, in order, with no default appended.
    pub fn exact(endpoints: Vec<Url>, api_token: Option<String>) -> Result<Self, ConfigError> {
        if endpoints.is_empty() {
            return Err(ConfigError::NoEndpoints);
        }
        Ok(Self {
            endpoints: endpoints.into_iter().map(with_trailing_slash).collect(),
            api_token,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        })
    }
}

/// Parse `configured` in order, then append the default, dropping duplicates.
fn endpoint_list(configured: &[String]) -> Result<Vec<Url>, ConfigError> {
    let mut out: Vec<Url> = Vec::new();
    for raw in configured
        .iter()
        .map(String::as_str)
        .chain(std::iter::once(DEFAULT_ENDPOINT))
    {
        let url = parse_endpoint(raw)?;
        if !out.contains(&url) {
            out.push(url);
        }
    }
    Ok(out)
}

fn parse_endpoint(raw: &str) -> Result<Url, ConfigError> {
    Url::parse(raw.trim())
        .map(with_trailing_slash)
        .map_err(|e| ConfigError::InvalidUrl(raw.to_string(), e.to_string()))
}

/// Request paths are appended to the endpoint, so its path must end in `/`.
fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid endpoint URL {0}: {1}")]
    InvalidUrl(String, String),
    #[error("at least one endpoint is required")]
    NoEndpoints,
    #[error("API token contains characters not allowed in an HTTP header")]
    InvalidToken,
}
