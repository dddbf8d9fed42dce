//! # Revocation
//!
//! Moves an account's record to Revoked. Issuer only.
//!
//! There is no existence check. Revoking an account that never held a
//! certificate stores a Revoked placeholder record for it; revoking an
//! already-revoked record is a no-op that still succeeds.

use thiserror::Error;

use skillchain_core::Account;

use crate::access::AccessError;
use crate::ledger::Ledger;
use crate::record::CertificateRecord;

/// Revocation failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RevokeError {
    /// The caller is not the issuer authority.
    #[error("caller {caller} is not the issuer authority")]
    Unauthorized {
        /// The rejected caller.
        caller: Account,
    },
}

impl From<AccessError> for RevokeError {
    fn from(err: AccessError) -> Self {
        match err {
            AccessError::Unauthorized { caller } => Self::Unauthorized { caller },
        }
    }
}

impl Ledger {
    /// Revoke the certificate held by `account`.
    pub fn revoke(&mut self, account: &Account, caller: &Account) -> Result<(), RevokeError> {
        if let Err(err) = self.access.require_issuer(caller) {
            tracing::warn!(caller = %caller, account = %account, "revocation rejected");
            return Err(err.into());
        }

        let record = match self.records.get(account) {
            Some(existing) => {
                let mut r = existing.clone();
                r.revoke();
                r
            }
            None => {
                tracing::warn!(account = %account, "revoking account with no certificate");
                CertificateRecord::revoked_placeholder(account.clone())
            }
        };

        tracing::info!(
            account = %account,
            certificate_id = %record.certificate_id,
            "certificate revoked"
        );
        self.records.put(account.clone(), record);
        Ok(())
    }
}
