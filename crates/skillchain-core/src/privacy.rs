//! # Privacy-Preserving Identifier Hash
//!
//! Issuers and verifiers hash the personal identifier on their own side
//! and only ever send the digest. The ledger stores the digest and
//! compares it by exact string equality.
//!
//! Digest: lowercase hex SHA-256 of the trimmed identifier, UTF-8 encoded.

use sha2::{Digest, Sha256};

use crate::error::ValidationError;
use crate::identity::AadharHash;

/// Number of digits in a well-formed identifier.
pub const AADHAR_DIGITS: usize = 12;

/// Length of a hex-encoded SHA-256 digest.
pub const HASH_HEX_LEN: usize = 64;

/// Hash a personal identifier for privacy-preserving lookup.
///
/// Leading and trailing whitespace is ignored. No format check is made;
/// call [`validate_aadhar`] first when the input comes from a user.
pub fn hash_identifier(raw: &str) -> AadharHash {
    let digest = Sha256::digest(raw.trim().as_bytes());
    AadharHash::new(digest.iter().map(|b| format!("{b:02x}")).collect::<String>())
}

/// Check that `raw` (after trimming) is exactly 12 ASCII digits.
pub fn validate_aadhar(raw: &str) -> Result<(), ValidationError> {
    let trimmed = raw.trim();
    if trimmed.len() != AADHAR_DIGITS {
        return Err(ValidationError::InvalidAadhar {
            expected: AADHAR_DIGITS,
            actual: trimmed.chars().count(),
        });
    }
    if !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::NonDigitAadhar);
    }
    Ok(())
}

/// Check that a supplied hash has the length of a hex SHA-256 digest.
pub fn validate_hash_hex(hash: &str) -> Result<(), ValidationError> {
    if hash.len() != HASH_HEX_LEN {
        return Err(ValidationError::InvalidHashLength {
            expected: HASH_HEX_LEN,
            actual: hash.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn known_digest() {
        let h = hash_identifier("123456789012");
        assert_eq!(
            h.as_str(),
            "2a33349e7e606a8ad2e30e3c84521f9377450cf09083e162e0a9b1480ce0f972"
        );
    }

    #[test]
    fn whitespace_is_trimmed() {
        assert_eq!(hash_identifier("  123456789012\n"), hash_identifier("123456789012"));
    }

    #[test]
    fn valid_aadhar_accepted() {
        assert!(validate_aadhar("123456789012").is_ok());
        assert!(validate_aadhar(" 123456789012 ").is_ok());
    }

    #[test]
    fn short_aadhar_rejected() {
        let err = validate_aadhar("12345").unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidAadhar {
                expected: 12,
                actual: 5
            }
        );
    }

    #[test]
    fn non_digit_aadhar_rejected() {
        assert_eq!(
            validate_aadhar("12345678901a").unwrap_err(),
            ValidationError::NonDigitAadhar
        );
    }

    #[test]
    fn hash_hex_length_checked() {
        assert!(validate_hash_hex(hash_identifier("987654321098").as_str()).is_ok());
        assert!(validate_hash_hex("abc").is_err());
    }

    proptest! {
        #[test]
        fn digest_is_always_64_lowercase_hex(raw in ".*") {
            let h = hash_identifier(&raw);
            prop_assert_eq!(h.as_str().len(), HASH_HEX_LEN);
            prop_assert!(h.as_str().bytes().all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b)));
        }

        #[test]
        fn twelve_digits_always_validate(n in 0u64..1_000_000_000_000u64) {
            let raw = format!("{n:012}");
            prop_assert!(validate_aadhar(&raw).is_ok());
        }
    }
}
