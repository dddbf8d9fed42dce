//! # Certificate Details
//!
//! Display projection of an Active certificate:
//!
//! ```text
//! {certificate_id} | {degree_type} | {cgpa_or_percentage} | {institution_name}
//! ```
//!
//! Field order and delimiter are part of the external contract.

use thiserror::Error;

use skillchain_core::Account;

use crate::ledger::Ledger;
use crate::record::CertificateRecord;

/// Separator between projected fields.
pub const DETAILS_DELIMITER: &str = " | ";

/// Details failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DetailsError {
    /// No record exists for the account, or it has been revoked.
    #[error("no active certificate for account {account}")]
    NotActive {
        /// The queried account.
        account: Account,
    },
}

/// Render the display projection of a record.
pub fn format_details(record: &CertificateRecord) -> String {
    [
        record.certificate_id.as_str(),
        record.degree_type.as_str(),
        record.cgpa_or_percentage.as_str(),
        record.institution_name.as_str(),
    ]
    .join(DETAILS_DELIMITER)
}

impl Ledger {
    /// Return the display projection for `account` if its certificate is Active.
    pub fn get_details(&self, account: &Account) -> Result<String, DetailsError> {
        self.active_record(account)
            .map(format_details)
            .ok_or_else(|| DetailsError::NotActive {
                account: account.clone(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::IssueRequest;

    fn ledger() -> Ledger {
        let mut l = Ledger::create("ISSUER".into(), "");
        l.issue(
            IssueRequest {
                cert_id: "CERT-001".into(),
                student_account: "S".into(),
                aadhar_hash: "h".into(),
                degree_type: "B.Tech".into(),
                cgpa: "8.5".into(),
                skillset: "Python,React,SQL".into(),
                cert_type: "degree".into(),
                institution: "IIT Delhi".into(),
            },
            &"ISSUER".into(),
        )
        .unwrap();
        l
    }

    #[test]
    fn projection_order_and_delimiter() {
        let l = ledger();
        assert_eq!(
            l.get_details(&"S".into()).unwrap(),
            "CERT-001 | B.Tech | 8.5 | IIT Delhi"
        );
    }

    #[test]
    fn skillset_and_type_not_projected() {
        let details = ledger().get_details(&"S".into()).unwrap();
        assert!(!details.contains("Python"));
        assert!(!details.contains("degree"));
    }

    #[test]
    fn revoked_not_active() {
        let mut l = ledger();
        l.revoke(&"S".into(), &"ISSUER".into()).unwrap();
        assert_eq!(
            l.get_details(&"S".into()).unwrap_err(),
            DetailsError::NotActive { account: "S".into() }
        );
    }

    #[test]
    fn missing_not_active() {
        assert!(ledger().get_details(&"X".into()).is_err());
    }
}
