//! # skillchain-core — Foundational Types for SkillChain
//!
//! Every other crate in the workspace depends on `skillchain-core`; it
//! depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for identifiers.** `Account`, `CertificateId` and
//!    `AadharHash` are distinct types. A certificate id cannot be passed
//!    where an account is expected.
//!
//! 2. **One null-account sentinel.** `Account::is_zero()` is the single
//!    definition of "no account" used by issuance validation.
//!
//! 3. **UTC-only timestamps.** `Timestamp` serializes with a `Z` suffix
//!    and seconds precision.
//!
//! 4. **Raw personal identifiers never cross the wire.** `privacy` hashes
//!    them client-side; the ledger only ever stores `AadharHash`.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `skillchain-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod identity;
pub mod privacy;
pub mod temporal;

pub use error::ValidationError;
pub use identity::{AadharHash, Account, CertificateId, ZERO_ADDRESS};
pub use privacy::{hash_identifier, validate_aadhar, validate_hash_hex, AADHAR_DIGITS, HASH_HEX_LEN};
pub use temporal::Timestamp;
