//! # Privacy-Preserving Lookup
//!
//! A caller who knows the hashed personal identifier of a subject can
//! retrieve the certificate id. The check is exact string equality on the
//! stored hash and, unlike [`Ledger::verify`], ignores the record status:
//! a revoked certificate still matches.

use thiserror::Error;

use skillchain_core::{AadharHash, Account, CertificateId};

use crate::ledger::Ledger;

/// Lookup failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// No record exists for the account, or the stored hash differs.
    #[error("identifier hash does not match the certificate held by {account}")]
    HashMismatch {
        /// The queried account.
        account: Account,
    },
}

impl Ledger {
    /// Return the certificate id for `account` if `claimed` equals its stored hash.
    pub fn lookup_by_hash(
        &self,
        claimed: &AadharHash,
        account: &Account,
    ) -> Result<CertificateId, LookupError> {
        self.records
            .get(account)
            .filter(|r| &r.aadhar_hash == claimed)
            .map(|r| r.certificate_id.clone())
            .ok_or_else(|| LookupError::HashMismatch {
                account: account.clone(),
            })
    }
}
