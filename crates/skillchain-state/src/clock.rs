//! # Ledger Clock
//!
//! Source of the issuance timestamp. Callers never supply it.

use skillchain_core::Timestamp;

/// Time source consulted once per issuance.
pub trait Clock: Send + Sync + std::fmt::Debug {
    /// The current ledger time.
    fn now(&self) -> Timestamp;
}

/// Wall-clock UTC time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub Timestamp);

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        self.0
    }
}
