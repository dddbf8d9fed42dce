//! # skillchain-state — Certificate Ledger
//!
//! The ledger keeps at most one certificate record per subject account,
//! a counter of successful issuance calls, and a single issuer authority
//! fixed at creation.
//!
//! ## Operations
//!
//! | Operation                     | Caller      | Effect                              |
//! |-------------------------------|-------------|-------------------------------------|
//! | [`Ledger::issue`]             | issuer only | write Active record, counter += 1   |
//! | [`Ledger::verify`]            | any         | certificate id if Active            |
//! | [`Ledger::revoke`]            | issuer only | set record Revoked                  |
//! | [`Ledger::lookup_by_hash`]    | any         | certificate id if hash matches      |
//! | [`Ledger::get_details`]       | any         | display projection if Active        |
//!
//! [`Call`] names each operation the way it appears on the wire and
//! [`Ledger::apply`] dispatches it.
//!
//! ## Crate Policy
//!
//! - Depends only on `skillchain-core` internally.
//! - No I/O, no locks, no async. Hosts serialize access.

pub mod access;
pub mod call;
pub mod clock;
pub mod details;
pub mod issuance;
pub mod ledger;
pub mod lookup;
pub mod record;
pub mod registry;
pub mod revocation;
pub mod store;
pub mod verification;

pub use access::{AccessControl, AccessError};
pub use call::{Call, CallError, ISSUED_CONFIRMATION, REVOKED_CONFIRMATION};
pub use clock::{Clock, FixedClock, SystemClock};
pub use details::{format_details, DetailsError, DETAILS_DELIMITER};
pub use issuance::IssueError;
pub use ledger::Ledger;
pub use lookup::LookupError;
pub use record::{CertificateRecord, CertificateStatus, IssueRequest};
pub use registry::Registry;
pub use revocation::RevokeError;
pub use store::RecordStore;
pub use verification::VerifyError;
