//! # Caller Identity
//!
//! Bearer token middleware. The ledger needs to know who is calling,
//! not what role they hold: the issuer check happens inside the ledger.
//!
//! ## Token Format
//!
//! ```text
//! Bearer {account}:{secret}     AUTH_TOKEN configured
//! Bearer {account}              development mode (no AUTH_TOKEN)
//! ```
//!
//! A request without an `Authorization` header is anonymous. Anonymous
//! callers may perform read-only calls; the ledger rejects their
//! mutating calls. A header that is present but malformed or carries the
//! wrong secret is rejected here with 401.

use axum::extract::{FromRequestParts, Request};
use axum::http::header;
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use subtle::ConstantTimeEq;

use skillchain_core::Account;

use crate::error::AppError;

// ── CallerIdentity ──────────────────────────────────────────────────────────

/// Identity of the caller, injected into request extensions by
/// [`auth_middleware`]. `None` means anonymous.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallerIdentity(pub Option<Account>);

impl CallerIdentity {
    /// The authenticated account, if any.
    pub fn account(&self) -> Option<&Account> {
        self.0.as_ref()
    }
}

impl<S: Send + Sync> FromRequestParts<S> for CallerIdentity {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CallerIdentity>()
            .cloned()
            .ok_or_else(|| AppError::Unauthorized("no caller identity in request context".into()))
    }
}

// ── Auth Configuration ──────────────────────────────────────────────────────

/// Auth configuration injected into request extensions.
///
/// Custom `Debug` redacts the token value.
#[derive(Clone)]
pub struct AuthConfig {
    pub token: Option<String>,
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

// ── Token Validation ────────────────────────────────────────────────────────

/// Constant-time comparison of secrets.
///
/// When lengths differ, performs a dummy comparison so the early return
/// does not depend on where the strings diverge.
fn constant_time_token_eq(provided: &str, expected: &str) -> bool {
    let provided = provided.as_bytes();
    let expected = expected.as_bytes();
    if provided.len() != expected.len() {
        let _ = expected.ct_eq(expected);
        return false;
    }
    provided.ct_eq(expected).into()
}

/// Parse a bearer token into the caller account.
///
/// With `expected_secret` set the token must be `{account}:{secret}`.
/// Without it, anything after the first `:` is ignored.
pub fn parse_bearer_token(provided: &str, expected_secret: Option<&str>) -> Result<Account, String> {
    let (account, secret) = match provided.split_once(':') {
        Some((account, secret)) => (account, Some(secret)),
        None => (provided, None),
    };

    if account.is_empty() {
        return Err("bearer token names no account".into());
    }

    if let Some(expected) = expected_secret {
        let secret = secret.ok_or("invalid token format, expected {account}:{secret}")?;
        if !constant_time_token_eq(secret, expected) {
            return Err("invalid bearer token".into());
        }
    }

    Ok(Account::new(account))
}

// ── Middleware ───────────────────────────────────────────────────────────────

/// Resolve the caller from the `Authorization` header and inject a
/// [`CallerIdentity`] into request extensions.
pub async fn auth_middleware(mut request: Request, next: Next) -> Response {
    let expected = request
        .extensions()
        .get::<AuthConfig>()
        .and_then(|c| c.token.clone());

    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .map(|v| v.to_str().unwrap_or_default().to_string());

    let identity = match auth_header {
        None => CallerIdentity(None),
        Some(value) => match value.strip_prefix("Bearer ") {
            Some(token) => match parse_bearer_token(token.trim(), expected.as_deref()) {
                Ok(account) => CallerIdentity(Some(account)),
                Err(msg) => {
                    tracing::warn!(reason = %msg, "authentication failed: invalid bearer token");
                    return AppError::Unauthorized(msg).into_response();
                }
            },
            None => {
                tracing::warn!("authentication failed: non-Bearer authorization scheme");
                return AppError::Unauthorized(
                    "authorization header must use Bearer scheme".into(),
                )
                .into_response();
            }
        },
    };

    tracing::debug!(caller = ?identity.account(), "caller resolved");
    request.extensions_mut().insert(identity);
    next.run(request).await
}
