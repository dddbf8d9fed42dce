//! # skillchain-client — Call Submission with Endpoint Failover
//!
//! Submits named ledger calls to one or more SkillChain API endpoints.
//!
//! ## Failover
//!
//! Endpoints are tried in configured order. On each endpoint:
//!
//! - transport failures, 429 and 5xx back off and retry (see [`RetryPolicy`]);
//! - two consecutive failures move on to the next endpoint;
//! - a 403 without a ledger error code moves on immediately;
//! - any other 4xx is the ledger's answer and is returned at once.
//!
//! When every endpoint has been abandoned the last observed error is
//! returned.
//!
//! ## API Path Convention
//!
//! | Method | Path           | Body / Response                     |
//! |--------|----------------|-------------------------------------|
//! | POST   | `/v1/call`     | `Call` JSON → `{"output": "..."}`   |
//! | GET    | `/v1/registry` | → `Registry` JSON                   |

pub mod config;
pub mod error;
pub mod retry;

pub use config::{ClientConfig, ConfigError, DEFAULT_ENDPOINT};
pub use error::{Disposition, SubmitError};
pub use retry::RetryPolicy;

use std::future::Future;
use std::time::Duration;

use serde::Deserialize;
use url::Url;

use skillchain_state::{Call, Registry};

/// Successful `/v1/call` response.
#[derive(Debug, Deserialize)]
struct CallResponse {
    output: String,
}

/// `{"error": {...}}` body returned by the API on failure.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    code: String,
    message: String,
}

/// Client that submits calls with backoff and endpoint failover.
#[derive(Debug, Clone)]
pub struct SubmissionClient {
    http: reqwest::Client,
    endpoints: Vec<Url>,
    policy: RetryPolicy,
}

impl SubmissionClient {
    /// Create a client from configuration with the default retry policy.
    pub fn new(config: ClientConfig) -> Result<Self, SubmitError> {
        if config.endpoints.is_empty() {
            return Err(ConfigError::NoEndpoints.into());
        }

        let mut headers = reqwest::header::HeaderMap::new();
        if let Some(token) = &config.api_token {
            headers.insert(
                reqwest::header::AUTHORIZATION,
                reqwest::header::HeaderValue::from_str(&format!("Bearer {token}"))
                    .map_err(|_| ConfigError::InvalidToken)?,
            );
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(headers)
            .build()
            .map_err(|e| SubmitError::Http {
                endpoint: "client_init".into(),
                source: e,
            })?;

        Ok(Self {
            http,
            endpoints: config.endpoints,
            policy: RetryPolicy::default(),
        })
    }

    /// Replace the retry policy.
    pub fn with_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Endpoints in failover order.
    pub fn endpoints(&self) -> &[Url] {
        &self.endpoints
    }

    /// Submit a call and return the ledger's output string.
    ///
    /// Calls `POST {endpoint}/v1/call`.
    pub async fn submit(&self, call: &Call) -> Result<String, SubmitError> {
        self.with_failover(call.method(), |endpoint| self.post_call(endpoint, call))
            .await
    }

    /// Fetch the ledger registry.
    ///
    /// Calls `GET {endpoint}/v1/registry`.
    pub async fn registry(&self) -> Result<Registry, SubmitError> {
        self.with_failover("registry", |endpoint| self.get_registry(endpoint))
            .await
    }

    async fn with_failover<T, F, Fut>(&self, operation: &str, f: F) -> Result<T, SubmitError>
    where
        F: Fn(Url) -> Fut,
        Fut: Future<Output = Result<T, SubmitError>>,
    {
        let mut last_err: Option<SubmitError> = None;

        for endpoint in &self.endpoints {
            tracing::info!(%endpoint, operation, "trying endpoint");
            let mut consecutive_failures = 0u32;

            for attempt in 0..self.policy.max_attempts_per_endpoint {
                let err = match f(endpoint.clone()).await {
                    Ok(value) => return Ok(value),
                    Err(e) => e,
                };
                consecutive_failures += 1;
                tracing::warn!(
                    %endpoint,
                    operation,
                    attempt = attempt + 1,
                    max_attempts = self.policy.max_attempts_per_endpoint,
                    "attempt failed: {err}"
                );

                match err.disposition() {
                    Disposition::Fatal => return Err(err),
                    Disposition::SwitchEndpoint => {
                        tracing::warn!(%endpoint, "authorization failure, switching endpoint");
                        last_err = Some(err);
                        break;
                    }
                    Disposition::Retry => {
                        last_err = Some(err);
                        if consecutive_failures >= self.policy.max_consecutive_failures {
                            tracing::warn!(
                                %endpoint,
                                consecutive_failures,
                                "switching endpoint after consecutive failures"
                            );
                            break;
                        }
                        let delay = self.policy.delay_for(attempt);
                        tracing::warn!(%endpoint, "waiting {delay:?} before retry");
                        tokio::time::sleep(delay).await;
                    }
                }
            }
        }

        tracing::error!(
            operation,
            endpoints = self.endpoints.len(),
            "all endpoints exhausted"
        );
        Err(last_err.unwrap_or(SubmitError::Config(ConfigError::NoEndpoints)))
    }

    async fn post_call(&self, endpoint: Url, call: &Call) -> Result<String, SubmitError> {
        let url = format!("{endpoint}v1/call");
        let resp = self
            .http
            .post(&url)
            .json(call)
            .send()
            .await
            .map_err(|e| SubmitError::Http {
                endpoint: url.clone(),
                source: e,
            })?;

        let resp = check_status(&url, resp).await?;
        let body: CallResponse = resp
            .json()
            .await
            .map_err(|e| SubmitError::Deserialization {
                endpoint: url,
                source: e,
            })?;
        Ok(body.output)
    }

    async fn get_registry(&self, endpoint: Url) -> Result<Registry, SubmitError> {
        let url = format!("{endpoint}v1/registry");
        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| SubmitError::Http {
                endpoint: url.clone(),
                source: e,
            })?;

        let resp = check_status(&url, resp).await?;
        resp.json().await.map_err(|e| SubmitError::Deserialization {
            endpoint: url,
            source: e,
        })
    }
}

/// Pass a 2xx response through; turn anything else into [`SubmitError::Api`].
async fn check_status(url: &str, resp: reqwest::Response) -> Result<reqwest::Response, SubmitError> {
    if resp.status().is_success() {
        return Ok(resp);
    }
    let status = resp.status().as_u16();
    let body = resp.text().await.unwrap_or_default();
    let (code, message) = match serde_json::from_str::<ErrorEnvelope>(&body) {
        Ok(env) => (Some(env.error.code), env.error.message),
        Err(_) => (None, body),
    };
    Err(SubmitError::Api {
        endpoint: url.to_string(),
        status,
        code,
        message,
    })
}
