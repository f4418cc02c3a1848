mod adapters;
mod config;
mod errors;
mod extraction;
mod matching;
mod models;
mod state;
mod text;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::state::MatchEngine;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Structured logging on stderr; stdout carries only the report
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting skillmatch v{}", env!("CARGO_PKG_VERSION"));
    info!("Resume directory: {}", config.resume_dir.display());

    let engine = MatchEngine::from_config(config).context("Invalid matcher configuration")?;

    let report = engine.run().await.context("Ranking run failed")?;
    info!(
        run_id = %report.run_id,
        candidates = report.candidates.len(),
        "Report generated"
    );

    let json = MatchEngine::render_report(&report).context("Could not serialize report")?;
    println!("{json}");

    Ok(())
}
