//! # Certificate Record
//!
//! One record per subject account. The lifecycle is two-state:
//!
//! ```text
//! (none) ──issue──▶ Active ──revoke──▶ Revoked
//!                     ▲                   │
//!                     └──── re-issue ─────┘
//! ```
//!
//! Revocation is terminal for the record it is applied to: no field
//! update moves a record from Revoked back to Active. Re-issuance does not
//! update the old record; it replaces it with a new one.

use serde::{Deserialize, Serialize};

use skillchain_core::{AadharHash, Account, CertificateId, Timestamp};

// ─── Status ──────────────────────────────────────────────────────────

/// Lifecycle status of a certificate record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CertificateStatus {
    /// Certificate is valid.
    #[default]
    Active,
    /// Certificate has been revoked (terminal).
    Revoked,
}

impl CertificateStatus {
    /// Whether this state is terminal.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Revoked)
    }

    /// Whether the certificate currently verifies.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }
}

impl std::fmt::Display for CertificateStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Active => "active",
            Self::Revoked => "revoked",
        };
        f.write_str(s)
    }
}

// ─── Issue Request ───────────────────────────────────────────────────

/// Caller-supplied arguments of an issuance call.
///
/// Field names on the wire follow the reference call interface
/// (`cert_id`, `student_addr`, `cgpa`, `cert_type`, `institution`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueRequest {
    /// Issuer-chosen identifier. Must be non-empty.
    pub cert_id: CertificateId,
    /// Subject account the record is stored under. Must not be the null account.
    #[serde(rename = "student_addr")]
    pub student_account: Account,
    /// Hash of the subject's personal identifier.
    pub aadhar_hash: AadharHash,
    pub degree_type: String,
    pub cgpa: String,
    pub skillset: String,
    pub cert_type: String,
    pub institution: String,
}

// ─── Record ──────────────────────────────────────────────────────────

/// A certificate bound to a subject account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificateRecord {
    pub certificate_id: CertificateId,
    /// The authenticated caller that performed issuance.
    pub issuer_address: Account,
    /// Always equal to the key the record is stored under.
    pub student_address: Account,
    pub aadhar_hash: AadharHash,
    pub degree_type: String,
    pub cgpa_or_percentage: String,
    pub skillset: String,
    pub certification_type: String,
    pub institution_name: String,
    /// Ledger-assigned issuance time. `None` only for a record that was
    /// revoked without ever being issued.
    pub issue_timestamp: Option<Timestamp>,
    pub status: CertificateStatus,
}

impl CertificateRecord {
    /// Build a fresh Active record from an issuance request.
    pub fn issued(req: IssueRequest, issuer: Account, at: Timestamp) -> Self {
        Self {
            certificate_id: req.cert_id,
            issuer_address: issuer,
            student_address: req.student_account,
            aadhar_hash: req.aadhar_hash,
            degree_type: req.degree_type,
            cgpa_or_percentage: req.cgpa,
            skillset: req.skillset,
            certification_type: req.cert_type,
            institution_name: req.institution,
            issue_timestamp: Some(at),
            status: CertificateStatus::Active,
        }
    }

    /// An otherwise-empty record in the Revoked state.
    ///
    /// Produced when an account that never held a certificate is revoked.
    pub fn revoked_placeholder(account: Account) -> Self {
        Self {
            certificate_id: CertificateId::default(),
            issuer_address: Account::new(""),
            student_address: account,
            aadhar_hash: AadharHash::default(),
            degree_type: String::new(),
            cgpa_or_percentage: String::new(),
            skillset: String::new(),
            certification_type: String::new(),
            institution_name: String::new(),
            issue_timestamp: None,
            status: CertificateStatus::Revoked,
        }
    }

    /// Mark the record revoked. Idempotent.
    pub fn revoke(&mut self) {
        self.status = CertificateStatus::Revoked;
    }

    /// Whether the certificate currently verifies.
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
