//! # Issuance
//!
//! Writes a new Active record for the subject account, replacing any
//! record already there, and advances the issuance counter.
//!
//! Preconditions, checked in order:
//!
//! 1. caller is the issuer authority
//! 2. certificate id is non-empty
//! 3. subject account is not the null account

use thiserror::Error;

use skillchain_core::Account;

use crate::access::AccessError;
use crate::ledger::Ledger;
use crate::record::{CertificateRecord, IssueRequest};

/// Issuance failure. Nothing is written when any of these is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IssueError {
    /// The caller is not the issuer authority.
    #[error("caller {caller} is not the issuer authority")]
    Unauthorized {
        /// The rejected caller.
        caller: Account,
    },

    /// The certificate id is the empty string.
    #[error("certificate id must not be empty")]
    EmptyCertificateId,

    /// The subject account is the null account.
    #[error("student account must not be the null account")]
    InvalidAccount,
}

impl From<AccessError> for IssueError {
    fn from(err: AccessError) -> Self {
        match err {
            AccessError::Unauthorized { caller } => Self::Unauthorized { caller },
        }
    }
}

impl Ledger {
    /// Issue (or re-issue) a certificate to `req.student_account`.
    ///
    /// Re-issuing overwrites every field of an existing record, including
    /// resetting a Revoked status to Active, and still increments the
    /// counter.
    pub fn issue(&mut self, req: IssueRequest, caller: &Account) -> Result<(), IssueError> {
        if let Err(err) = self.check_issue(&req, caller) {
            tracing::warn!(
                caller = %caller,
                account = %req.student_account,
                error = %err,
                "issuance rejected"
            );
            return Err(err);
        }

        let at = self.clock.now();
        let account = req.student_account.clone();
        let replaced = self.records.get(&account).map(|r| r.status);
        let record = CertificateRecord::issued(req, caller.clone(), at);

        tracing::info!(
            account = %account,
            certificate_id = %record.certificate_id,
            aadhar_hash = record.aadhar_hash.short(),
            replaced = ?replaced,
            "certificate issued"
        );

        self.records.put(account, record);
        self.registry.increment_total();
        Ok(())
    }

    fn check_issue(&self, req: &IssueRequest, caller: &Account) -> Result<(), IssueError> {
        self.access.require_issuer(caller)?;
        if req.cert_id.is_empty() {
            return Err(IssueError::EmptyCertificateId);
        }
        if req.student_account.is_zero() {
            return Err(IssueError::InvalidAccount);
        }
        Ok(())
    }
}
