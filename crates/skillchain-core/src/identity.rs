//! # Identifier Newtypes
//!
//! Newtype wrappers for the identifiers that flow through the ledger.
//! Address format validation is the signer's concern, not ours: an
//! `Account` is an opaque string, compared byte-for-byte.
//!
//! ## Security Invariant
//!
//! Type-level distinction between accounts, certificate ids and privacy
//! hashes prevents one being substituted for another at a call site.

use serde::{Deserialize, Serialize};

/// The all-zero account address of the reference ledger.
///
/// Issuing to this address is rejected.
pub const ZERO_ADDRESS: &str = "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAY5HFKQ";

/// An account identifier: the key a certificate record is stored under,
/// and the identity of an authenticated caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Account(String);

impl Account {
    /// Wrap an account address.
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    /// The null account sentinel.
    pub fn zero() -> Self {
        Self(ZERO_ADDRESS.to_string())
    }

    /// Whether this is the null account: the zero address or an empty string.
    pub fn is_zero(&self) -> bool {
        self.0.is_empty() || self.0 == ZERO_ADDRESS
    }

    /// Access the address string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Account {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Account {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Account {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Issuer-chosen certificate identifier (e.g. `CERT-001`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CertificateId(String);

impl CertificateId {
    /// Wrap a certificate identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Whether the identifier is the empty string.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Access the identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into the inner string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for CertificateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CertificateId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for CertificateId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// One-way hash of a personal identifier, as supplied by the issuer.
///
/// The ledger compares these by exact string equality and never inspects
/// their format. See [`crate::privacy::hash_identifier`] for how clients
/// produce them.
#[derive(Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AadharHash(String);

impl AadharHash {
    /// Wrap a hash string.
    pub fn new(hash: impl Into<String>) -> Self {
        Self(hash.into())
    }

    /// Access the hash string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First eight characters, for log lines.
    pub fn short(&self) -> &str {
        self.0.get(..8).unwrap_or(&self.0)
    }
}

// Only the prefix appears in debug output.
impl std::fmt::Debug for AadharHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "AadharHash({}…)", self.short())
    }
}

impl From<&str> for AadharHash {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_address_is_zero() {
        assert!(Account::zero().is_zero());
        assert!(Account::new(ZERO_ADDRESS).is_zero());
    }

    #[test]
    fn empty_account_is_zero() {
        assert!(Account::new("").is_zero());
    }

    #[test]
    fn ordinary_account_is_not_zero() {
        let acct = Account::new("AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAY5HVY");
        assert!(!acct.is_zero());
    }

    #[test]
    fn zero_address_has_reference_length() {
        assert_eq!(ZERO_ADDRESS.len(), 58);
    }

    #[test]
    fn certificate_id_emptiness() {
        assert!(CertificateId::new("").is_empty());
        assert!(!CertificateId::new("CERT-001").is_empty());
    }

    #[test]
    fn aadhar_hash_short_prefix() {
        let h = AadharHash::new("0123456789abcdef");
        assert_eq!(h.short(), "01234567");
        assert_eq!(AadharHash::new("abc").short(), "abc");
    }

    #[test]
    fn aadhar_hash_debug_redacts_tail() {
        let h = AadharHash::new("0123456789abcdef");
        let dbg = format!("{h:?}");
        assert!(dbg.contains("01234567"));
        assert!(!dbg.contains("89abcdef"));
    }

    #[test]
    fn newtypes_serialize_transparently() {
        let json = serde_json::to_string(&Account::new("ADDR")).unwrap();
        assert_eq!(json, "\"ADDR\"");
        let id: CertificateId = serde_json::from_str("\"CERT-9\"").unwrap();
        assert_eq!(id.as_str(), "CERT-9");
    }
}
