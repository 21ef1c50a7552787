mod config;
mod content;
mod errors;
mod models;
mod render;
mod routes;
mod state;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::content::{portfolio_catalog, validate_catalog};
use crate::models::Catalog;
use crate::routes::build_router;
use crate::state::AppState;

/// Single-page portfolio site.
#[derive(Parser)]
#[command(name = "portfolio")]
#[command(about = "Serves the portfolio page and checks its content", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the page over HTTP (default).
    Serve,

    /// Validate the content catalog.
    ///
    /// Checks nav anchors, outbound links and required fields. Exits non-zero
    /// when any authoring issue is found.
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration first (fails on malformed numeric env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let catalog = portfolio_catalog();

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(config, catalog).await,
        Command::Check => check(&catalog),
    }
}

async fn serve(config: Config, catalog: Catalog) -> Result<()> {
    info!("Starting portfolio v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Catalog loaded: {} education, {} experience, {} projects, {} certifications",
        catalog.education.len(),
        catalog.experience.len(),
        catalog.projects.len(),
        catalog.certifications.len()
    );
    info!(
        "Nav breakpoint {}px, swipe threshold {}px / {}px/ms",
        config.nav_breakpoint_px, config.swipe.distance_px, config.swipe.velocity
    );

    let port = config.port;
    let app = build_router(AppState::new(config, catalog)).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("0.0.0.0:{port}").parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn check(catalog: &Catalog) -> Result<()> {
    let result = validate_catalog(catalog);
    for issue in &result.issues {
        warn!(kind = ?issue.kind, location = %issue.location, "{}", issue.detail);
    }

    if !result.passed {
        bail!("{} authoring issue(s) in the content catalog", result.issues.len());
    }

    info!(
        "Catalog OK: {} nav items, {} projects, {} certifications",
        catalog.nav.len(),
        catalog.projects.len(),
        catalog.certifications.len()
    );
    Ok(())
}
