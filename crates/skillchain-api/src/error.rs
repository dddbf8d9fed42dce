//! # API Error Types
//!
//! Structured error type implementing `axum::response::IntoResponse`.
//! Ledger failures keep their machine code from `CallError::code()`;
//! request-level failures use a generic code.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use skillchain_state::CallError;

/// Structured JSON error response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

/// Inner error detail.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code (e.g., "NOT_ACTIVE", "BAD_REQUEST").
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

/// Application-level error type that implements [`IntoResponse`] for Axum.
#[derive(Error, Debug)]
pub enum AppError {
    /// The ledger rejected the call.
    #[error(transparent)]
    Ledger(#[from] CallError),

    /// Request body could not be parsed (400).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Missing or invalid credentials (401).
    #[error("unauthorized: {0}")]
    Unauthorized(String),
}

impl AppError {
    /// Return the HTTP status code and machine-readable error code for this error.
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            Self::Ledger(err) => (ledger_status(err), err.code()),
            Self::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            Self::Unauthorized(_) => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED"),
        }
    }
}

fn ledger_status(err: &CallError) -> StatusCode {
    match err {
        CallError::Unauthorized { caller: None } => StatusCode::UNAUTHORIZED,
        CallError::Unauthorized { caller: Some(_) } => StatusCode::FORBIDDEN,
        CallError::EmptyCertificateId | CallError::InvalidAccount => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        CallError::NotActive { .. } | CallError::HashMismatch { .. } => StatusCode::NOT_FOUND,
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        tracing::debug!(%status, code, "request rejected: {self}");

        let body = ErrorBody {
            error: ErrorDetail {
                code: code.to_string(),
                message: self.to_string(),
            },
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn render(err: AppError) -> (StatusCode, serde_json::Value) {
        let resp = err.into_response();
        let status = resp.status();
        let body = resp.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[test]
    fn anonymous_mutation_is_401() {
        let err = AppError::from(CallError::Unauthorized { caller: None });
        assert_eq!(
            err.status_and_code(),
            (StatusCode::UNAUTHORIZED, "UNAUTHORIZED")
        );
    }

    #[test]
    fn wrong_caller_is_403_with_core_code() {
        let err = AppError::from(CallError::Unauthorized {
            caller: Some("MALLORY".into()),
        });
        assert_eq!(err.status_and_code(), (StatusCode::FORBIDDEN, "UNAUTHORIZED"));
    }

    #[test]
    fn input_validation_is_422() {
        assert_eq!(
            AppError::from(CallError::EmptyCertificateId).status_and_code(),
            (StatusCode::UNPROCESSABLE_ENTITY, "EMPTY_CERTIFICATE_ID")
        );
        assert_eq!(
            AppError::from(CallError::InvalidAccount).status_and_code(),
            (StatusCode::UNPROCESSABLE_ENTITY, "INVALID_ACCOUNT")
        );
    }

    #[test]
    fn read_failures_are_404() {
        assert_eq!(
            AppError::from(CallError::NotActive { account: "A".into() }).status_and_code(),
            (StatusCode::NOT_FOUND, "NOT_ACTIVE")
        );
        assert_eq!(
            AppError::from(CallError::HashMismatch { account: "A".into() }).status_and_code(),
            (StatusCode::NOT_FOUND, "HASH_MISMATCH")
        );
    }

    #[tokio::test]
    async fn body_carries_code_and_message() {
        let (status, body) =
            render(AppError::from(CallError::NotActive { account: "A".into() })).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_ACTIVE");
        assert_eq!(body["error"]["message"], "no active certificate for account A");
        assert_eq!(body["error"].as_object().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn bad_request_body() {
        let (status, body) = render(AppError::BadRequest("missing field `method`".into())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "BAD_REQUEST");
        assert_eq!(body["error"]["message"], "bad request: missing field `method`");
    }
}
