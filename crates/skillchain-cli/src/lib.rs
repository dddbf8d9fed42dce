//! # skillchain-cli — CLI Tool for SkillChain
//!
//! Provides the `skillchain` command-line interface.
//!
//! ## Subcommands
//!
//! - `skillchain hash`: Privacy hash of a personal identifier.
//! - `skillchain issue`: Issue one certificate.
//! - `skillchain bulk-issue`: Issue certificates from a JSON/YAML upload file.
//! - `skillchain verify` / `revoke` / `lookup` / `details`: Single ledger calls.
//! - `skillchain registry`: Issuance counter and institution metadata.
//!
//! ```bash
//! skillchain hash 123456789012
//! skillchain --token ISSUER:secret issue --cert-id CERT-001 --student STUDENTA \
//!     --aadhar 123456789012 --degree B.Tech --cgpa 8.5 \
//!     --skillset Python,React,SQL --institution "IIT Delhi"
//! skillchain verify STUDENTA
//! ```

pub mod bulk;
pub mod certificate;
pub mod hash;

use anyhow::{Context, Result};

use skillchain_client::{ClientConfig, SubmissionClient};

/// Build the submission client from the environment, with command-line
/// endpoints and token taking precedence.
pub fn build_client(endpoints: &[String], token: Option<&str>) -> Result<SubmissionClient> {
    let mut config = ClientConfig::from_env().context("loading client configuration")?;
    if !endpoints.is_empty() {
        config = config.with_endpoints(endpoints)?;
    }
    if let Some(token) = token {
        config.api_token = Some(token.to_string());
    }
    tracing::debug!(?config, "client configured");
    Ok(SubmissionClient::new(config)?)
}
