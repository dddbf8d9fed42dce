//! # Named Calls
//!
//! A request submitted to the ledger is an operation name plus arguments.
//! [`Call`] is that request as a serde value, tagged by `method` with the
//! wire operation names:
//!
//! | `method`                          | Operation          | Caller      |
//! |-----------------------------------|--------------------|-------------|
//! | `bulk_issue_certificates`         | [`Ledger::issue`]  | issuer only |
//! | `verify_certificate`              | [`Ledger::verify`] | any         |
//! | `revoke_certificate`              | [`Ledger::revoke`] | issuer only |
//! | `get_certificate_by_aadhar_hash`  | [`Ledger::lookup_by_hash`] | any |
//! | `get_certificate_details`         | [`Ledger::get_details`]    | any |
//!
//! [`CallError`] flattens the per-operation error enums into one type
//! with a stable machine-readable code per failure kind.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use skillchain_core::{AadharHash, Account, CertificateId};

use crate::details::DetailsError;
use crate::issuance::IssueError;
use crate::ledger::Ledger;
use crate::lookup::LookupError;
use crate::record::IssueRequest;
use crate::revocation::RevokeError;
use crate::verification::VerifyError;

/// Confirmation returned by a successful issuance.
pub const ISSUED_CONFIRMATION: &str = "Certificate issued successfully";

/// Confirmation returned by a successful revocation.
pub const REVOKED_CONFIRMATION: &str = "Certificate revoked";

// ─── Call ────────────────────────────────────────────────────────────

/// A ledger operation with its arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "method")]
pub enum Call {
    #[serde(rename = "bulk_issue_certificates")]
    Issue(IssueRequest),
    #[serde(rename = "verify_certificate")]
    Verify { account: Account },
    #[serde(rename = "revoke_certificate")]
    Revoke { account: Account },
    #[serde(rename = "get_certificate_by_aadhar_hash")]
    LookupByHash { hash: AadharHash, account: Account },
    #[serde(rename = "get_certificate_details")]
    Details { account: Account },
}

impl Call {
    /// The wire name of the operation.
    pub fn method(&self) -> &'static str {
        match self {
            Self::Issue(_) => "bulk_issue_certificates",
            Self::Verify { .. } => "verify_certificate",
            Self::Revoke { .. } => "revoke_certificate",
            Self::LookupByHash { .. } => "get_certificate_by_aadhar_hash",
            Self::Details { .. } => "get_certificate_details",
        }
    }

    /// Whether the call writes ledger state (and so needs the issuer).
    pub fn is_mutating(&self) -> bool {
        matches!(self, Self::Issue(_) | Self::Revoke { .. })
    }

    /// The account the call is scoped to.
    pub fn account(&self) -> &Account {
        match self {
            Self::Issue(req) => &req.student_account,
            Self::Verify { account }
            | Self::Revoke { account }
            | Self::LookupByHash { account, .. }
            | Self::Details { account } => account,
        }
    }
}

// ─── Errors ──────────────────────────────────────────────────────────

/// Any operation failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CallError {
    /// The caller is not the issuer authority, or made a mutating call
    /// without identifying itself.
    #[error("{}", describe_unauthorized(.caller.as_ref()))]
    Unauthorized {
        /// The rejected caller; `None` for an anonymous request.
        caller: Option<Account>,
    },

    /// Issuance with an empty certificate id.
    #[error("certificate id must not be empty")]
    EmptyCertificateId,

    /// Issuance to the null account.
    #[error("student account must not be the null account")]
    InvalidAccount,

    /// Missing or revoked certificate.
    #[error("no active certificate for account {account}")]
    NotActive {
        /// The queried account.
        account: Account,
    },

    /// Privacy hash did not match.
    #[error("identifier hash does not match the certificate held by {account}")]
    HashMismatch {
        /// The queried account.
        account: Account,
    },
}

fn describe_unauthorized(caller: Option<&Account>) -> String {
    match caller {
        Some(c) => format!("caller {c} is not the issuer authority"),
        None => "anonymous caller is not the issuer authority".to_string(),
    }
}

impl CallError {
    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Unauthorized { .. } => "UNAUTHORIZED",
            Self::EmptyCertificateId => "EMPTY_CERTIFICATE_ID",
            Self::InvalidAccount => "INVALID_ACCOUNT",
            Self::NotActive { .. } => "NOT_ACTIVE",
            Self::HashMismatch { .. } => "HASH_MISMATCH",
        }
    }
}

impl From<IssueError> for CallError {
    fn from(err: IssueError) -> Self {
        match err {
            IssueError::Unauthorized { caller } => Self::Unauthorized {
                caller: Some(caller),
            },
            IssueError::EmptyCertificateId => Self::EmptyCertificateId,
            IssueError::InvalidAccount => Self::InvalidAccount,
        }
    }
}

impl From<RevokeError> for CallError {
    fn from(err: RevokeError) -> Self {
        match err {
            RevokeError::Unauthorized { caller } => Self::Unauthorized {
                caller: Some(caller),
            },
        }
    }
}

impl From<VerifyError> for CallError {
    fn from(err: VerifyError) -> Self {
        match err {
            VerifyError::NotActive { account } => Self::NotActive { account },
        }
    }
}

impl From<DetailsError> for CallError {
    fn from(err: DetailsError) -> Self {
        match err {
            DetailsError::NotActive { account } => Self::NotActive { account },
        }
    }
}

impl From<LookupError> for CallError {
    fn from(err: LookupError) -> Self {
        match err {
            LookupError::HashMismatch { account } => Self::HashMismatch { account },
        }
    }
}

// ─── Dispatch ────────────────────────────────────────────────────────

impl Ledger {
    /// Apply any call. `caller` is `None` for an unauthenticated request.
    pub fn apply(&mut self, call: Call, caller: Option<&Account>) -> Result<String, CallError> {
        tracing::debug!(method = call.method(), account = %call.account(), "applying call");
        match call {
            Call::Issue(req) => {
                let caller = caller.ok_or(CallError::Unauthorized { caller: None })?;
                self.issue(req, caller)?;
                Ok(ISSUED_CONFIRMATION.to_string())
            }
            Call::Revoke { account } => {
                let caller = caller.ok_or(CallError::Unauthorized { caller: None })?;
                self.revoke(&account, caller)?;
                Ok(REVOKED_CONFIRMATION.to_string())
            }
            Call::Verify { account } => Ok(self.verify(&account)?.into_inner()),
            Call::LookupByHash { hash, account } => {
                Ok(self.lookup_by_hash(&hash, &account)?.into_inner())
            }
            Call::Details { account } => Ok(self.get_details(&account)?),
        }
    }

    /// Answer a read-only call. Returns `None` for a mutating call.
    pub fn query(&self, call: &Call) -> Option<Result<String, CallError>> {
        let result = match call {
            Call::Verify { account } => self
                .verify(account)
                .map(CertificateId::into_inner)
                .map_err(CallError::from),
            Call::LookupByHash { hash, account } => self
                .lookup_by_hash(hash, account)
                .map(CertificateId::into_inner)
                .map_err(CallError::from),
            Call::Details { account } => self.get_details(account).map_err(CallError::from),
            Call::Issue(_) | Call::Revoke { .. } => return None,
        };
        Some(result)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
