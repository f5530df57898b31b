// ABOUTME: Shared server resources handed to every route as axum state
// ABOUTME: Bundles the profile store with the loaded server configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Epic Run Contributors

use crate::config::ServerConfig;
use crate::database::Database;
use std::sync::Arc;

/// Dependencies shared across request handlers
#[derive(Clone)]
pub struct ServerResources {
    /// Profile store
    pub database: Database,
    /// Loaded configuration
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Bundle resources for the router
    #[must_use]
    pub fn new(database: Database, config: ServerConfig) -> Self {
        Self {
            database,
            config: Arc::new(config),
        }
    }
}
