//! # Route Modules
//!
//! - [`ledger`]: `/v1/call` and `/v1/registry`

pub mod ledger;
