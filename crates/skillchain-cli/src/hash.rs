//! # Hash Subcommand
//!
//! Prints the privacy hash of a personal identifier, computed locally.
//! The raw identifier never leaves the process.

use anyhow::Result;
use clap::Args;

use skillchain_core::{hash_identifier, validate_aadhar};

/// Arguments for `skillchain hash`.
#[derive(Args, Debug)]
pub struct HashArgs {
    /// 12-digit personal identifier.
    pub aadhar: String,
}

/// Execute `skillchain hash`.
pub fn run_hash(args: &HashArgs) -> Result<u8> {
    validate_aadhar(&args.aadhar)?;
    println!("{}", hash_identifier(&args.aadhar).as_str());
    Ok(0)
}
