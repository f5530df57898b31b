// ABOUTME: HTTP server binary for the Epic Run journey tracker
// ABOUTME: Loads configuration, opens the profile store, and serves the axum router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Epic Run Contributors

//! # Epic Run Server Binary
//!
//! Serves the journey, profile, and map token endpoints until interrupted.

use anyhow::{Context, Result};
use clap::Parser;
use epic_run_server::{
    config::ServerConfig, database::Database, logging, resources::ServerResources, routes,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "epic-run-server")]
#[command(about = "Epic Run - map real-world running distance onto fantasy journeys")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override listen address
    #[arg(long)]
    host: Option<String>,

    /// Override database URL
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(database_url) = args.database_url {
        config.database_url = database_url;
    }

    logging::init_from_env()?;
    info!("{}", config.summary());

    let database = Database::new(&config.database_url)
        .await
        .with_context(|| format!("Failed to open database {}", config.database_url))?;

    let bind_address = config.bind_address();
    display_available_endpoints(&config);

    let resources = Arc::new(ServerResources::new(database, config));
    let app = routes::router(&resources);

    let listener = TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {bind_address}"))?;
    info!(address = %bind_address, "Epic Run server listening");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("Server error: {}", e);
        return Err(e.into());
    }

    info!("Epic Run server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

/// Display all available API endpoints
#[allow(clippy::cognitive_complexity)]
fn display_available_endpoints(config: &ServerConfig) {
    let base = format!("http://{}", config.bind_address());

    info!("=== Available API Endpoints ===");
    info!("Monitoring:");
    info!("   Health Check:      GET  {base}/health");
    info!("   Readiness:         GET  {base}/ready");
    info!("Catalog & Journey:");
    info!("   Map Token:         GET  {base}/api/map-token");
    info!("   Destinations:      GET  {base}/api/destinations");
    info!("   Journey Path:      GET  {base}/api/journey/path?destination={{id}}&covered={{km}}");
    info!("   Journey Map:       GET  {base}/api/journey/map?destination={{id}}&covered={{km}}");
    info!("   Onboarding:        GET  {base}/api/onboarding/options");
    info!("Profiles:");
    info!("   Create Profile:    POST {base}/api/profiles");
    info!("   Get/Update:        GET|PATCH {base}/api/profiles/{{id}}");
    info!("   Start Journey:     POST {base}/api/profiles/{{id}}/journey");
    info!("   Health Snapshot:   POST {base}/api/profiles/{{id}}/activity");
    info!("   Manual Run:        POST {base}/api/profiles/{{id}}/runs");
    info!("   Stats:             GET  {base}/api/profiles/{{id}}/stats");
    info!("   Achievements:      GET  {base}/api/profiles/{{id}}/achievements");
    info!("=== End of Endpoint List ===");
}
