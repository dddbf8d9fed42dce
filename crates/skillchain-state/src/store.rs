//! # Record Store
//!
//! One slot per subject account. Writes replace the whole record; there is
//! no partial-field update at this layer. Atomicity across `get`/`put` is
//! the caller's concern (the enclosing `Ledger` call holds `&mut self`).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use skillchain_core::Account;

use crate::record::CertificateRecord;

/// Keyed collection of certificate records.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecordStore {
    records: HashMap<Account, CertificateRecord>,
}

impl RecordStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the record for `account`.
    pub fn get(&self, account: &Account) -> Option<&CertificateRecord> {
        self.records.get(account)
    }

    /// Write `record` under `account`, overwriting any existing record.
    ///
    /// The stored `student_address` is forced to `account` so the record
    /// always agrees with its key.
    pub fn put(&mut self, account: Account, mut record: CertificateRecord) {
        record.student_address = account.clone();
        self.records.insert(account, record);
    }

    /// Number of accounts holding a record.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
