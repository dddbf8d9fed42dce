//! # skillchain CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use skillchain_cli::bulk::{run_bulk_issue, BulkIssueArgs};
use skillchain_cli::certificate::{
    run_issue, run_lookup, run_registry, submit_and_print, IssueArgs, LookupArgs,
};
use skillchain_cli::hash::{run_hash, HashArgs};
use skillchain_state::Call;

/// SkillChain certificate ledger CLI.
///
/// Hashes personal identifiers locally and submits certificate calls to
/// SkillChain API endpoints with automatic failover.
#[derive(Parser, Debug)]
#[command(name = "skillchain", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// API endpoint, tried in the order given. Repeatable.
    #[arg(long = "endpoint", global = true)]
    endpoints: Vec<String>,

    /// Bearer token `{account}:{secret}`. Overrides SKILLCHAIN_API_TOKEN.
    #[arg(long, global = true)]
    token: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the privacy hash of a 12-digit identifier.
    Hash(HashArgs),

    /// Issue a certificate (issuer only).
    Issue(IssueArgs),

    /// Issue certificates from a JSON or YAML upload file (issuer only).
    BulkIssue(BulkIssueArgs),

    /// Print the certificate id if the account holds an active certificate.
    Verify {
        /// Student account.
        account: String,
    },

    /// Revoke the certificate held by an account (issuer only).
    Revoke {
        /// Student account.
        account: String,
    },

    /// Look up a certificate id by identifier hash.
    Lookup(LookupArgs),

    /// Print "id | degree | cgpa | institution" for an active certificate.
    Details {
        /// Student account.
        account: String,
    },

    /// Print the issuance counter and institution metadata.
    Registry,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match run(cli).await {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("error: {e:#}");
            ExitCode::from(1)
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<u8> {
    if let Commands::Hash(args) = &cli.command {
        return run_hash(args);
    }

    let client = skillchain_cli::build_client(&cli.endpoints, cli.token.as_deref())?;

    match cli.command {
        Commands::Hash(_) => Ok(0),
        Commands::Issue(args) => run_issue(&args, &client).await,
        Commands::BulkIssue(args) => run_bulk_issue(&args, &client).await,
        Commands::Verify { account } => {
            submit_and_print(&client, Call::Verify { account: account.into() }).await
        }
        Commands::Revoke { account } => {
            submit_and_print(&client, Call::Revoke { account: account.into() }).await
        }
        Commands::Lookup(args) => run_lookup(&args, &client).await,
        Commands::Details { account } => {
            submit_and_print(&client, Call::Details { account: account.into() }).await
        }
        Commands::Registry => run_registry(&client).await,
    }
}
