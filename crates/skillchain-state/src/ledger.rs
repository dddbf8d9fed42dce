//! # Ledger
//!
//! Composes the record store, the registry and access control into one
//! application. Each public operation is a single call that either
//! commits all of its writes or returns an error having written nothing:
//! preconditions are checked against `&self` first, and writes happen
//! only after every check has passed.
//!
//! The ledger holds no locks and spawns nothing. Serializing concurrent
//! calls is the host's job (see `skillchain-api`, which wraps the ledger
//! in a single `RwLock`).
//!
//! Operations are implemented in sibling modules:
//! [`crate::issuance`], [`crate::verification`], [`crate::revocation`],
//! [`crate::lookup`] and [`crate::details`].

use skillchain_core::Account;

use crate::access::AccessControl;
use crate::clock::{Clock, SystemClock};
use crate::record::CertificateRecord;
use crate::registry::Registry;
use crate::store::RecordStore;

/// The certificate ledger.
#[derive(Debug)]
pub struct Ledger {
    pub(crate) records: RecordStore,
    pub(crate) registry: Registry,
    pub(crate) access: AccessControl,
    pub(crate) clock: Box<dyn Clock>,
}

impl Ledger {
    /// Create a ledger whose issuer authority is `issuer`, timed by the
    /// system clock.
    pub fn create(issuer: Account, institution_registry: impl Into<String>) -> Self {
        Self::with_clock(issuer, institution_registry, Box::new(SystemClock))
    }

    /// Create a ledger with an explicit time source.
    pub fn with_clock(
        issuer: Account,
        institution_registry: impl Into<String>,
        clock: Box<dyn Clock>,
    ) -> Self {
        tracing::info!(issuer = %issuer, "certificate ledger created");
        Self {
            records: RecordStore::new(),
            registry: Registry::new(institution_registry),
            access: AccessControl::new(issuer),
            clock,
        }
    }

    /// The issuer authority fixed at creation.
    pub fn issuer(&self) -> &Account {
        self.access.issuer()
    }

    /// Global counters and metadata.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// The full record stored for `account`, whatever its status.
    pub fn record(&self, account: &Account) -> Option<&CertificateRecord> {
        self.records.get(account)
    }

    /// Number of accounts holding a record.
    pub fn holder_count(&self) -> usize {
        self.records.len()
    }

    /// The record for `account` if one exists and is Active.
    pub(crate) fn active_record(&self, account: &Account) -> Option<&CertificateRecord> {
        self.records.get(account).filter(|r| r.is_active())
    }
}
