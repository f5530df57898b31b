// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides database, profile, config, and router helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Epic Run Contributors
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `epic_run_server`

use anyhow::Result;
use axum::Router;
use epic_run_server::{
    config::ServerConfig,
    database::Database,
    models::{NewProfile, Profile},
    resources::ServerResources,
    routes,
};
use std::sync::{Arc, Once};
use uuid::Uuid;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Fresh in-memory profile store
pub async fn create_test_database() -> Result<Database> {
    init_test_logging();
    Ok(Database::new("sqlite::memory:").await?)
}

/// Create a profile with a random id
pub async fn create_test_profile(database: &Database) -> Result<Profile> {
    create_test_profile_named(database, "Test Runner").await
}

/// Create a profile with a random id and the given display name
pub async fn create_test_profile_named(database: &Database, name: &str) -> Result<Profile> {
    let id = Uuid::new_v4();
    Ok(database
        .create_profile(NewProfile {
            id,
            email: Some(format!("runner_{id}@example.com")),
            full_name: Some(name.to_owned()),
            avatar_url: None,
        })
        .await?)
}

/// Config suitable for router tests
pub fn test_config(mapbox_public_token: Option<&str>) -> ServerConfig {
    ServerConfig {
        database_url: "sqlite::memory:".into(),
        mapbox_public_token: mapbox_public_token.map(str::to_owned),
        ..ServerConfig::default()
    }
}

/// Server resources over a fresh in-memory store
pub async fn create_test_server_resources(
    mapbox_public_token: Option<&str>,
) -> Result<Arc<ServerResources>> {
    let database = create_test_database().await?;
    Ok(Arc::new(ServerResources::new(
        database,
        test_config(mapbox_public_token),
    )))
}

/// Full application router plus the resources backing it
pub async fn setup_test_app(
    mapbox_public_token: Option<&str>,
) -> Result<(Router, Arc<ServerResources>)> {
    let resources = create_test_server_resources(mapbox_public_token).await?;
    Ok((routes::router(&resources), resources))
}
