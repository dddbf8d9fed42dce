//! # skillchain-api — HTTP Host for the Certificate Ledger
//!
//! Serves one in-process [`skillchain_state::Ledger`] over HTTP. The
//! single `RwLock` around the ledger is the transaction substrate: each
//! call is applied atomically and concurrent calls are serialized.
//!
//! ## Routes
//!
//! - `POST /v1/call`: apply a named call (`Call` JSON)
//! - `GET /v1/registry`: issuance counter and institution metadata
//! - `/health/*`: liveness/readiness probes
//!
//! ## Middleware Stack (Tower)
//!
//! TraceLayer → auth (caller identity) → handler
//!
//! ## Crate Policy
//!
//! - No business logic in route handlers: delegates to `skillchain-state`.
//! - All errors map to structured HTTP responses via `AppError`.

pub mod auth;
pub mod error;
pub mod extractors;
pub mod routes;
pub mod state;

pub use error::AppError;
pub use state::{AppConfig, AppState};

use axum::middleware::from_fn;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::auth::AuthConfig;

/// Assemble the full application router with all routes and middleware.
pub fn app(state: AppState) -> Router {
    let auth_config = AuthConfig {
        token: state.config.auth_token.clone(),
    };

    let api = Router::new()
        .merge(routes::ledger::router())
        .layer(from_fn(auth::auth_middleware))
        .layer(axum::Extension(auth_config))
        .with_state(state);

    let health = Router::new()
        .route("/health/liveness", axum::routing::get(liveness))
        .route("/health/readiness", axum::routing::get(readiness));

    Router::new()
        .merge(health)
        .merge(api)
        .layer(TraceLayer::new_for_http())
}

/// Liveness probe: always returns 200 if the process is running.
async fn liveness() -> &'static str {
    "ok"
}

/// Readiness probe: returns 200 when the application is ready to serve.
async fn readiness() -> &'static str {
    "ready"
}
