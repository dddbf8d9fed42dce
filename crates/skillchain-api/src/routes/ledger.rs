//! # Ledger Routes
//!
//! | Method | Path           | Operation                                  |
//! |--------|----------------|--------------------------------------------|
//! | POST   | `/v1/call`     | apply a named call, return `{"output"}`    |
//! | GET    | `/v1/registry` | issuance counter and institution metadata  |
//!
//! Read-only calls run under the shared read guard; mutating calls take
//! the write guard.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use skillchain_state::{Call, Registry};

use crate::auth::CallerIdentity;
use crate::error::AppError;
use crate::extractors::extract_json;
use crate::state::AppState;

/// Successful call response.
#[derive(Debug, Serialize, Deserialize)]
pub struct CallResponse {
    pub output: String,
}

/// Build the ledger router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/v1/call", post(submit_call))
        .route("/v1/registry", get(registry))
}

/// POST /v1/call: Apply a named ledger call.
async fn submit_call(
    State(state): State<AppState>,
    caller: CallerIdentity,
    body: Result<Json<Call>, JsonRejection>,
) -> Result<Json<CallResponse>, AppError> {
    let call = extract_json(body)?;
    let method = call.method();

    // The read guard must be released before a write guard is taken.
    let answered = state.ledger.read().query(&call);
    let output = match answered {
        Some(result) => result,
        None => state.ledger.write().apply(call, caller.account()),
    };

    match output {
        Ok(output) => Ok(Json(CallResponse { output })),
        Err(err) => {
            tracing::debug!(method, code = err.code(), "call rejected");
            Err(err.into())
        }
    }
}

/// GET /v1/registry: Registry snapshot.
async fn registry(State(state): State<AppState>) -> Json<Registry> {
    Json(state.ledger.read().registry().clone())
}
