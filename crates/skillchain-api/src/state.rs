//! # Application State
//!
//! The ledger sits behind one `parking_lot::RwLock`. Mutating calls take
//! the write guard for their whole duration, so every issuance or
//! revocation is applied atomically and in a single global order.
//! Read-only calls share the read guard.

use std::sync::Arc;

use parking_lot::RwLock;

use skillchain_core::Account;
use skillchain_state::Ledger;

/// Application configuration.
///
/// Custom `Debug` redacts the auth token.
#[derive(Clone)]
pub struct AppConfig {
    /// Port to bind the HTTP server to.
    pub port: u16,
    /// Issuer authority, fixed for the life of the process.
    pub issuer: Account,
    /// Free-text institution metadata stored in the registry.
    pub institution_registry: String,
    /// Shared secret checked in `{account}:{secret}` bearer tokens.
    /// If `None`, the token is taken to be just the caller account.
    pub auth_token: Option<String>,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("port", &self.port)
            .field("issuer", &self.issuer)
            .field("institution_registry", &self.institution_registry)
            .field("auth_token", &self.auth_token.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl AppConfig {
    /// Configuration with default port and no auth secret.
    pub fn new(issuer: Account) -> Self {
        Self {
            port: 8080,
            issuer,
            institution_registry: String::new(),
            auth_token: None,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `ISSUER_ADDRESS` (required)
    /// - `PORT` (default: 8080)
    /// - `INSTITUTION_REGISTRY` (default: empty)
    /// - `AUTH_TOKEN` (optional)
    pub fn from_env() -> Result<Self, ConfigError> {
        let issuer = std::env::var("ISSUER_ADDRESS")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::MissingIssuer)?;
        let issuer = Account::new(issuer);
        if issuer.is_zero() {
            return Err(ConfigError::NullIssuer);
        }

        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            Err(_) => 8080,
        };

        Ok(Self {
            port,
            issuer,
            institution_registry: std::env::var("INSTITUTION_REGISTRY").unwrap_or_default(),
            auth_token: std::env::var("AUTH_TOKEN").ok().filter(|s| !s.is_empty()),
        })
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("ISSUER_ADDRESS environment variable is required")]
    MissingIssuer,
    #[error("ISSUER_ADDRESS must not be the null account")]
    NullIssuer,
    #[error("PORT must be a valid port number, got {0:?}")]
    InvalidPort(String),
}

/// Shared application state passed to all route handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub ledger: Arc<RwLock<Ledger>>,
    pub config: AppConfig,
}

impl AppState {
    /// Create the ledger for `config.issuer` and wrap it for sharing.
    pub fn new(config: AppConfig) -> Self {
        let ledger = Ledger::create(config.issuer.clone(), config.institution_registry.clone());
        Self::with_ledger(config, ledger)
    }

    /// Wrap an existing ledger.
    pub fn with_ledger(config: AppConfig, ledger: Ledger) -> Self {
        Self {
            ledger: Arc::new(RwLock::new(ledger)),
            config,
        }
    }
}
