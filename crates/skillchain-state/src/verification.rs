//! # Verification
//!
//! Read-only status check. Open to any caller.

use thiserror::Error;

use skillchain_core::{Account, CertificateId};

use crate::ledger::Ledger;

/// Verification failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VerifyError {
    /// No record exists for the account, or it has been revoked.
    #[error("no active certificate for account {account}")]
    NotActive {
        /// The queried account.
        account: Account,
    },
}

impl Ledger {
    /// Return the certificate id for `account` if its certificate is Active.
    pub fn verify(&self, account: &Account) -> Result<CertificateId, VerifyError> {
        self.active_record(account)
            .map(|r| r.certificate_id.clone())
            .ok_or_else(|| VerifyError::NotActive {
                account: account.clone(),
            })
    }
}
