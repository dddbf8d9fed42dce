//! # Access Control
//!
//! A single issuer authority, fixed when the ledger is created. Mutating
//! operations pass the caller identity explicitly and are gated here;
//! read operations are open to any caller.

use thiserror::Error;

use skillchain_core::Account;

/// Capability check failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccessError {
    /// The caller is not the issuer authority.
    #[error("caller {caller} is not the issuer authority")]
    Unauthorized {
        /// The rejected caller.
        caller: Account,
    },
}

/// Holds the issuer authority and compares callers against it by value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessControl {
    issuer: Account,
}

impl AccessControl {
    /// Fix the issuer authority.
    pub fn new(issuer: Account) -> Self {
        Self { issuer }
    }

    /// The configured issuer authority.
    pub fn issuer(&self) -> &Account {
        &self.issuer
    }

    /// Fail unless `caller` is the issuer authority.
    pub fn require_issuer(&self, caller: &Account) -> Result<(), AccessError> {
        if caller == &self.issuer {
            Ok(())
        } else {
            Err(AccessError::Unauthorized {
                caller: caller.clone(),
            })
        }
    }
}
