// ABOUTME: Read-only catalog routes for journey destinations and onboarding options
// ABOUTME: Serves the static destination list, single lookups, and onboarding choices
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Epic Run Contributors

use crate::journey::catalog::{destination, DESTINATIONS, START_LOCATION, START_NAME};
use crate::services::onboarding;
use axum::{extract::Path, routing::get, Json, Router};
use epic_run_core::errors::AppResult;
use epic_run_core::models::{Coordinate, Destination};
use serde::Serialize;

/// Catalog listing with the shared starting point
#[derive(Debug, Serialize)]
pub struct DestinationListResponse {
    /// Name of the starting point
    pub start_name: &'static str,
    /// Coordinate every journey starts from
    pub start_location: Coordinate,
    /// All destinations
    pub destinations: &'static [Destination],
    /// Number of destinations
    pub total: usize,
}

/// Destination catalog routes
pub struct DestinationRoutes;

impl DestinationRoutes {
    /// Create catalog routes
    pub fn routes() -> Router {
        Router::new()
            .route("/api/destinations", get(Self::handle_list))
            .route("/api/destinations/:id", get(Self::handle_get))
            .route("/api/onboarding/options", get(Self::handle_onboarding_options))
    }

    async fn handle_list() -> Json<DestinationListResponse> {
        Json(DestinationListResponse {
            start_name: START_NAME,
            start_location: START_LOCATION,
            destinations: &DESTINATIONS,
            total: DESTINATIONS.len(),
        })
    }

    async fn handle_get(Path(id): Path<String>) -> AppResult<Json<Destination>> {
        Ok(Json(*destination(&id)?))
    }

    async fn handle_onboarding_options() -> Json<onboarding::OnboardingOptions> {
        Json(onboarding::options())
    }
}
