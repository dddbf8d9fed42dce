//! # Registry
//!
//! Process-wide counters and metadata.

use serde::{Deserialize, Serialize};

/// Global ledger state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registry {
    total_certificates: u64,
    institution_registry: String,
}

impl Registry {
    /// Create a registry with a zero counter.
    pub fn new(institution_registry: impl Into<String>) -> Self {
        Self {
            total_certificates: 0,
            institution_registry: institution_registry.into(),
        }
    }

    /// Count one successful issuance call.
    ///
    /// Called for re-issuance to an account that already holds a record
    /// as well, so the total counts calls, not distinct holders.
    pub fn increment_total(&mut self) {
        self.total_certificates = self.total_certificates.saturating_add(1);
    }

    /// Number of successful issuance calls.
    pub fn total(&self) -> u64 {
        self.total_certificates
    }

    /// Free-text institution metadata.
    pub fn institution_registry(&self) -> &str {
        &self.institution_registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero() {
        let reg = Registry::new("");
        assert_eq!(reg.total(), 0);
        assert_eq!(reg.institution_registry(), "");
    }

    #[test]
    fn increments_by_one() {
        let mut reg = Registry::new("IIT Delhi");
        reg.increment_total();
        reg.increment_total();
        assert_eq!(reg.total(), 2);
        assert_eq!(reg.institution_registry(), "IIT Delhi");
    }

    #[test]
    fn serializes_field_names() {
        let json = serde_json::to_value(Registry::new("x")).unwrap();
        assert_eq!(json["total_certificates"], 0);
        assert_eq!(json["institution_registry"], "x");
    }
}
