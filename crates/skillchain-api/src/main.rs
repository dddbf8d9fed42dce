//! # skillchain-api — Binary Entry Point
//!
//! Starts the Axum HTTP server for the certificate ledger.
//! Binds to configurable port (default 8080).

use anyhow::Context;

use skillchain_api::{AppConfig, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    if std::env::var("LOG_FORMAT").is_ok_and(|v| v == "json") {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    let config = AppConfig::from_env().context("loading configuration")?;
    tracing::info!(?config, "configuration loaded");
    let port = config.port;

    let app = skillchain_api::app(AppState::new(config));

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("SkillChain API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    axum::serve(listener, app).await?;

    Ok(())
}
