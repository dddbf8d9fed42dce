//! # Bulk Issuance
//!
//! Reads an upload file of certificate entries, checks every entry
//! against the upload rules, and submits one issuance call per entry.
//!
//! ## File Format
//!
//! A JSON array, or YAML when the extension is `.yaml` / `.yml`. Entry
//! fields use the upload column names:
//!
//! ```yaml
//! - certificate_id: CERT-001        # optional
//!   student_address: STUDENTA...
//!   aadhar_hash: 2a33349e...        # 64 characters
//!   degree_type: B.Tech
//!   cgpa: "8.50"                    # quoted; kept exactly as written
//!   skillset: Python,React,SQL
//!   certification_type: degree
//!   institution_name: IIT Delhi
//! ```
//!
//! Entries with every field blank are skipped. A missing `certificate_id`
//! becomes `CERT-<row>` with the row number zero-padded to three digits.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use serde::de::{Error as _, IgnoredAny};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use skillchain_client::SubmissionClient;
use skillchain_core::{validate_hash_hex, ValidationError};
use skillchain_state::{Call, IssueRequest};

/// Maximum entries accepted per upload.
pub const MAX_BULK_UPLOAD: usize = 1000;

/// Arguments for the `skillchain bulk-issue` subcommand.
#[derive(Args, Debug)]
pub struct BulkIssueArgs {
    /// Upload file (JSON array, or YAML for .yaml/.yml).
    pub file: PathBuf,

    /// Check the file and print what would be issued without submitting.
    #[arg(long)]
    pub dry_run: bool,
}

// ── Entry ────────────────────────────────────────────────────────────

/// One row of an upload file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkEntry {
    #[serde(default)]
    pub certificate_id: Option<String>,
    #[serde(default)]
    pub student_address: String,
    #[serde(default)]
    pub aadhar_hash: String,
    #[serde(default)]
    pub degree_type: String,
    #[serde(default, deserialize_with = "quoted_string")]
    pub cgpa: String,
    #[serde(default)]
    pub skillset: String,
    #[serde(default)]
    pub certification_type: String,
    #[serde(default)]
    pub institution_name: String,
}

/// Grades are free text stored as given. An unquoted `8.50` would arrive
/// as the number 8.5, so only strings are accepted.
fn quoted_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Field {
        Text(String),
        Other(IgnoredAny),
    }
    match Field::deserialize(deserializer)? {
        Field::Text(s) => Ok(s),
        Field::Other(_) => Err(D::Error::custom(
            "cgpa must be a quoted string (e.g. \"8.50\") so it is stored exactly as written",
        )),
    }
}

impl BulkEntry {
    fn is_blank(&self) -> bool {
        self.certificate_id.as_deref().unwrap_or_default().is_empty()
            && [
                &self.student_address,
                &self.aadhar_hash,
                &self.degree_type,
                &self.cgpa,
                &self.skillset,
                &self.certification_type,
                &self.institution_name,
            ]
            .iter()
            .all(|v| v.is_empty())
    }

    /// Check the upload rules and build the issuance request for row `row` (1-based).
    pub fn into_request(self, row: usize) -> Result<IssueRequest, ValidationError> {
        let required = [
            ("student_address", &self.student_address),
            ("degree_type", &self.degree_type),
            ("cgpa", &self.cgpa),
            ("skillset", &self.skillset),
            ("certification_type", &self.certification_type),
            ("institution_name", &self.institution_name),
        ];
        if let Some((field, _)) = required.iter().find(|(_, v)| v.is_empty()) {
            return Err(ValidationError::MissingField(*field));
        }
        validate_hash_hex(&self.aadhar_hash)?;

        let cert_id = match self.certificate_id.filter(|id| !id.is_empty()) {
            Some(id) => id,
            None => generated_certificate_id(row),
        };

        Ok(IssueRequest {
            cert_id: cert_id.into(),
            student_account: self.student_address.as_str().into(),
            aadhar_hash: self.aadhar_hash.as_str().into(),
            degree_type: self.degree_type,
            cgpa: self.cgpa,
            skillset: self.skillset,
            cert_type: self.certification_type,
            institution: self.institution_name,
        })
    }
}

/// `CERT-001`, `CERT-002`, ... for 1-based row numbers.
pub fn generated_certificate_id(row: usize) -> String {
    format!("CERT-{row:03}")
}

// ── Loading ──────────────────────────────────────────────────────────

/// Upload file failures.
#[derive(Error, Debug)]
pub enum BulkError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    #[error("upload contains no certificate entries")]
    Empty,

    #[error("upload has {actual} entries, at most {max} are allowed")]
    TooMany { max: usize, actual: usize },

    #[error("row {row}: {source}")]
    InvalidEntry {
        row: usize,
        source: ValidationError,
    },
}

/// Read and parse an upload file. Blank entries are dropped.
pub fn load_entries(path: &Path) -> Result<Vec<BulkEntry>, BulkError> {
    let content = std::fs::read_to_string(path).map_err(|e| BulkError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let is_yaml = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    );
    let entries: Vec<BulkEntry> = if is_yaml {
        serde_yaml::from_str(&content).map_err(|e| BulkError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
    } else {
        serde_json::from_str(&content).map_err(|e| BulkError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
    };

    Ok(entries.into_iter().filter(|e| !e.is_blank()).collect())
}

/// Check every entry and build the issuance requests, in file order.
///
/// Fails on the first invalid row so nothing is submitted from a file
/// that would be partially rejected.
pub fn prepare(entries: Vec<BulkEntry>) -> Result<Vec<IssueRequest>, BulkError> {
    if entries.is_empty() {
        return Err(BulkError::Empty);
    }
    if entries.len() > MAX_BULK_UPLOAD {
        return Err(BulkError::TooMany {
            max: MAX_BULK_UPLOAD,
            actual: entries.len(),
        });
    }
    entries
        .into_iter()
        .enumerate()
        .map(|(i, entry)| {
            let row = i + 1;
            entry
                .into_request(row)
                .map_err(|source| BulkError::InvalidEntry { row, source })
        })
        .collect()
}

// ── Submission ───────────────────────────────────────────────────────

/// Execute the bulk-issue subcommand. Returns exit code 1 if any entry failed.
pub async fn run_bulk_issue(args: &BulkIssueArgs, client: &SubmissionClient) -> Result<u8> {
    let entries = load_entries(&args.file)?;
    let requests = prepare(entries).with_context(|| format!("checking {}", args.file.display()))?;
    tracing::info!(count = requests.len(), file = %args.file.display(), "upload checked");

    if args.dry_run {
        for req in &requests {
            println!(
                "would issue {} to {} | {} | {}",
                req.cert_id, req.student_account, req.degree_type, req.institution
            );
        }
        return Ok(0);
    }

    let total = requests.len();
    let mut failed = 0usize;
    for req in requests {
        let cert_id = req.cert_id.clone();
        let account = req.student_account.clone();
        match client.submit(&Call::Issue(req)).await {
            Ok(output) => println!("✓ {cert_id} → {account}: {output}"),
            Err(e) => {
                failed += 1;
                println!("✗ {cert_id} → {account}: {e}");
            }
        }
    }

    println!("{} issued, {failed} failed", total - failed);
    Ok(if failed == 0 { 0 } else { 1 })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> BulkEntry {
        BulkEntry {
            certificate_id: None,
            student_address: "STUDENTA".into(),
            aadhar_hash: "a".repeat(64),
            degree_type: "B.Tech".into(),
            cgpa: "8.5".into(),
            skillset: "Python,React,SQL".into(),
            certification_type: "degree".into(),
            institution_name: "IIT Delhi".into(),
        }
    }

    #[test]
    fn generated_ids_are_zero_padded() {
        assert_eq!(generated_certificate_id(1), "CERT-001");
        assert_eq!(generated_certificate_id(42), "CERT-042");
        assert_eq!(generated_certificate_id(1000), "CERT-1000");
    }

    #[test]
    fn entry_maps_upload_columns() {
        let req = entry().into_request(7).unwrap();
        assert_eq!(req.cert_id.as_str(), "CERT-007");
        assert_eq!(req.student_account.as_str(), "STUDENTA");
        assert_eq!(req.cert_type, "degree");
        assert_eq!(req.institution, "IIT Delhi");
    }

    #[test]
    fn explicit_certificate_id_kept() {
        let mut e = entry();
        e.certificate_id = Some("CERT-XYZ".into());
        assert_eq!(e.into_request(1).unwrap().cert_id.as_str(), "CERT-XYZ");
    }

    #[test]
    fn missing_field_rejected() {
        let mut e = entry();
        e.skillset.clear();
        assert_eq!(
            e.into_request(1).unwrap_err(),
            ValidationError::MissingField("skillset")
        );
    }

    #[test]
    fn short_hash_rejected() {
        let mut e = entry();
        e.aadhar_hash = "abc".into();
        assert!(matches!(
            e.into_request(1).unwrap_err(),
            ValidationError::InvalidHashLength { actual: 3, .. }
        ));
    }

    #[test]
    fn blank_entry_detected() {
        assert!(BulkEntry::default().is_blank());
        assert!(!entry().is_blank());
    }

    #[test]
    fn prepare_rejects_empty_and_oversized() {
        assert!(matches!(prepare(vec![]), Err(BulkError::Empty)));
        let too_many = vec![entry(); MAX_BULK_UPLOAD + 1];
        assert!(matches!(
            prepare(too_many),
            Err(BulkError::TooMany { actual: 1001, .. })
        ));
    }

    #[test]
    fn prepare_reports_row_number() {
        let mut bad = entry();
        bad.degree_type.clear();
        let err = prepare(vec![entry(), bad]).unwrap_err();
        assert!(matches!(err, BulkError::InvalidEntry { row: 2, .. }));
        assert!(err.to_string().starts_with("row 2:"));
    }

    #[test]
    fn prepare_numbers_generated_ids_by_row() {
        let reqs = prepare(vec![entry(), entry(), entry()]).unwrap();
        let ids: Vec<&str> = reqs.iter().map(|r| r.cert_id.as_str()).collect();
        assert_eq!(ids, vec!["CERT-001", "CERT-002", "CERT-003"]);
    }
}
