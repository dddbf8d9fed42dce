//! # Error Types
//!
//! Validation failures for client-side input checks. Ledger operation
//! failures live next to the operations in `skillchain-state`.

use thiserror::Error;

/// Input rejected before it is hashed or submitted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The personal identifier is not exactly 12 ASCII digits.
    #[error("aadhar number must be exactly {expected} digits, got {actual} characters")]
    InvalidAadhar {
        /// Required digit count.
        expected: usize,
        /// Length of the trimmed input.
        actual: usize,
    },

    /// The personal identifier contains a non-digit character.
    #[error("aadhar number must contain digits only")]
    NonDigitAadhar,

    /// A hex digest has the wrong length.
    #[error("invalid hash length: expected {expected} hex characters, got {actual}")]
    InvalidHashLength {
        /// Required length.
        expected: usize,
        /// Supplied length.
        actual: usize,
    },

    /// A required field is empty.
    #[error("{0} is required")]
    MissingField(&'static str),
}
