//! # Certificate Subcommands
//!
//! One ledger call per invocation, submitted through the failover client.
//!
//! - `issue`: issue a certificate to a student account.
//! - `verify`: print the certificate id if the certificate is active.
//! - `revoke`: revoke the certificate held by an account.
//! - `lookup`: prove knowledge of the identifier for an account.
//! - `details`: print the certificate summary line.
//! - `registry`: print the issuance counter and institution metadata.
//!
//! A ledger rejection (not active, hash mismatch, unauthorized) is
//! printed and exits 1. Transport failures propagate as errors.

use anyhow::Result;
use clap::{ArgGroup, Args};

use skillchain_client::{SubmissionClient, SubmitError};
use skillchain_core::{
    hash_identifier, validate_aadhar, validate_hash_hex, AadharHash, ValidationError,
};
use skillchain_state::{Call, IssueRequest};

/// Arguments for `skillchain issue`.
#[derive(Args, Debug)]
#[command(group(ArgGroup::new("identifier").required(true).args(["aadhar", "aadhar_hash"])))]
pub struct IssueArgs {
    /// Certificate identifier (e.g., "CERT-001").
    #[arg(long)]
    pub cert_id: String,
    /// Student account the certificate is bound to.
    #[arg(long)]
    pub student: String,
    /// 12-digit personal identifier. Hashed locally; never sent.
    #[arg(long)]
    pub aadhar: Option<String>,
    /// Precomputed SHA-256 hex of the identifier.
    #[arg(long)]
    pub aadhar_hash: Option<String>,
    /// Degree type (e.g., "B.Tech").
    #[arg(long)]
    pub degree: String,
    /// CGPA or percentage.
    #[arg(long)]
    pub cgpa: String,
    /// Comma-separated skills.
    #[arg(long)]
    pub skillset: String,
    /// Certification type.
    #[arg(long, default_value = "degree")]
    pub cert_type: String,
    /// Issuing institution name.
    #[arg(long)]
    pub institution: String,
}

/// Arguments for `skillchain lookup`.
#[derive(Args, Debug)]
#[command(group(ArgGroup::new("identifier").required(true).args(["aadhar", "aadhar_hash"])))]
pub struct LookupArgs {
    /// Account to look up.
    pub account: String,
    /// 12-digit personal identifier. Hashed locally; never sent.
    #[arg(long)]
    pub aadhar: Option<String>,
    /// Precomputed SHA-256 hex of the identifier.
    #[arg(long)]
    pub aadhar_hash: Option<String>,
}

/// Hash a raw identifier, or check a precomputed hash.
pub fn resolve_hash(
    aadhar: Option<&str>,
    aadhar_hash: Option<&str>,
) -> Result<AadharHash, ValidationError> {
    match (aadhar, aadhar_hash) {
        (Some(raw), _) => {
            validate_aadhar(raw)?;
            Ok(hash_identifier(raw))
        }
        (None, Some(hash)) => {
            validate_hash_hex(hash)?;
            Ok(AadharHash::new(hash))
        }
        (None, None) => Err(ValidationError::MissingField("aadhar")),
    }
}

/// Execute `skillchain issue`.
pub async fn run_issue(args: &IssueArgs, client: &SubmissionClient) -> Result<u8> {
    let aadhar_hash = resolve_hash(args.aadhar.as_deref(), args.aadhar_hash.as_deref())?;
    let req = IssueRequest {
        cert_id: args.cert_id.as_str().into(),
        student_account: args.student.as_str().into(),
        aadhar_hash,
        degree_type: args.degree.clone(),
        cgpa: args.cgpa.clone(),
        skillset: args.skillset.clone(),
        cert_type: args.cert_type.clone(),
        institution: args.institution.clone(),
    };
    submit_and_print(client, Call::Issue(req)).await
}

/// Execute `skillchain lookup`.
pub async fn run_lookup(args: &LookupArgs, client: &SubmissionClient) -> Result<u8> {
    let hash = resolve_hash(args.aadhar.as_deref(), args.aadhar_hash.as_deref())?;
    let call = Call::LookupByHash {
        hash,
        account: args.account.as_str().into(),
    };
    submit_and_print(client, call).await
}

/// Execute `skillchain registry`.
pub async fn run_registry(client: &SubmissionClient) -> Result<u8> {
    let registry = client.registry().await?;
    println!("{}", serde_json::to_string_pretty(&registry)?);
    Ok(0)
}

/// Submit `call` and print the ledger's answer.
pub async fn submit_and_print(client: &SubmissionClient, call: Call) -> Result<u8> {
    tracing::debug!(method = call.method(), account = %call.account(), "submitting");
    match client.submit(&call).await {
        Ok(output) => {
            println!("{output}");
            Ok(0)
        }
        Err(err @ SubmitError::Api { code: Some(_), .. }) => {
            eprintln!("{err}");
            Ok(1)
        }
        Err(err) => Err(err.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_identifier_is_hashed() {
        let hash = resolve_hash(Some("123456789012"), None).unwrap();
        assert_eq!(
            hash.as_str(),
            "2a33349e7e606a8ad2e30e3c84521f9377450cf09083e162e0a9b1480ce0f972"
        );
    }

    #[test]
    fn raw_identifier_must_be_twelve_digits() {
        assert!(resolve_hash(Some("12345"), None).is_err());
        assert!(resolve_hash(Some("12345678901a"), None).is_err());
    }

    #[test]
    fn precomputed_hash_length_checked() {
        assert!(resolve_hash(None, Some(&"f".repeat(64))).is_ok());
        assert!(matches!(
            resolve_hash(None, Some("abc")),
            Err(ValidationError::InvalidHashLength { .. })
        ));
    }

    #[test]
    fn identifier_required() {
        assert_eq!(
            resolve_hash(None, None).unwrap_err(),
            ValidationError::MissingField("aadhar")
        );
    }
}
