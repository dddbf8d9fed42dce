//! Submission error types.

use reqwest::StatusCode;

/// How the failover loop treats a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Back off and retry the same endpoint.
    Retry,
    /// Move to the next endpoint without waiting.
    SwitchEndpoint,
    /// Definitive answer. Return it to the caller.
    Fatal,
}

/// Errors from submitting a call.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// HTTP transport error.
    #[error("HTTP error calling {endpoint}: {source}")]
    Http {
        endpoint: String,
        source: reqwest::Error,
    },
    /// The endpoint returned a non-2xx status.
    ///
    /// `code` and `message` come from the `{"error": {...}}` body when the
    /// endpoint is a SkillChain API; otherwise `message` is the raw body.
    #[error("{endpoint} returned {status}: {message}")]
    Api {
        endpoint: String,
        status: u16,
        code: Option<String>,
        message: String,
    },
    /// Response deserialization failed.
    #[error("failed to deserialize response from {endpoint}: {source}")]
    Deserialization {
        endpoint: String,
        source: reqwest::Error,
    },
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

impl SubmitError {
    /// Classify for the failover loop.
    ///
    /// Transport failures, 429 and 5xx are transient. A bare 403 is an
    /// authorization failure on that endpoint. A 403 carrying a ledger
    /// code is the ledger refusing the caller, and like every other
    /// status it is the definitive answer.
    pub fn disposition(&self) -> Disposition {
        match self {
            Self::Http { .. } => Disposition::Retry,
            Self::Api { status, code, .. } => match StatusCode::from_u16(*status) {
                Ok(StatusCode::FORBIDDEN) if code.is_none() => Disposition::SwitchEndpoint,
                Ok(StatusCode::TOO_MANY_REQUESTS) => Disposition::Retry,
                Ok(s) if s.is_server_error() => Disposition::Retry,
                _ => Disposition::Fatal,
            },
            Self::Deserialization { .. } | Self::Config(_) => Disposition::Fatal,
        }
    }

    /// The ledger error code, when the endpoint reported one.
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Api { code, .. } => code.as_deref(),
            _ => None,
        }
    }

    /// HTTP status, when the endpoint answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(status: u16) -> SubmitError {
        SubmitError::Api {
            endpoint: "http://x/".into(),
            status,
            code: None,
            message: String::new(),
        }
    }

    #[test]
    fn server_errors_and_throttling_retry() {
        assert_eq!(api(500).disposition(), Disposition::Retry);
        assert_eq!(api(503).disposition(), Disposition::Retry);
        assert_eq!(api(429).disposition(), Disposition::Retry);
    }

    #[test]
    fn forbidden_switches_endpoint() {
        assert_eq!(api(403).disposition(), Disposition::SwitchEndpoint);
    }

    #[test]
    fn ledger_refusal_is_fatal() {
        let err = SubmitError::Api {
            endpoint: "http://x/".into(),
            status: 403,
            code: Some("UNAUTHORIZED".into()),
            message: "Only issuer can revoke certificates".into(),
        };
        assert_eq!(err.disposition(), Disposition::Fatal);
    }

    #[test]
    fn other_client_errors_are_fatal() {
        for status in [400, 401, 404, 422] {
            assert_eq!(api(status).disposition(), Disposition::Fatal, "{status}");
        }
    }

    #[test]
    fn code_exposed() {
        let err = SubmitError::Api {
            endpoint: "e".into(),
            status: 404,
            code: Some("NOT_ACTIVE".into()),
            message: "no active certificate".into(),
        };
        assert_eq!(err.code(), Some("NOT_ACTIVE"));
        assert_eq!(err.status(), Some(404));
    }
}
