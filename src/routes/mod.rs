// ABOUTME: Route module organization for Epic Run HTTP endpoints
// ABOUTME: Assembles domain routers with CORS and request tracing layers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Epic Run Contributors

//! Route module for the Epic Run server
//!
//! Each domain module holds route definitions and thin handlers that delegate
//! to the journey model, the profile store, or the service layer.

/// Destination catalog and onboarding option routes
pub mod destinations;
/// Health check routes
pub mod health;
/// Journey path and map overlay routes
pub mod journey;
/// Map token route
pub mod map_token;
/// Profile, progress, stats, and achievement routes
pub mod profiles;

pub use destinations::DestinationRoutes;
pub use health::HealthRoutes;
pub use journey::JourneyRoutes;
pub use map_token::MapTokenRoutes;
pub use profiles::ProfileRoutes;

use crate::middleware::setup_cors;
use crate::resources::ServerResources;
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Build the full application router
///
/// The map token route is merged after the CORS layer so it keeps its own
/// fixed wildcard headers regardless of the configured origin list.
pub fn router(resources: &Arc<ServerResources>) -> Router {
    let api = Router::new()
        .merge(DestinationRoutes::routes())
        .merge(JourneyRoutes::routes())
        .merge(ProfileRoutes::routes(Arc::clone(resources)))
        .layer(setup_cors(&resources.config));

    Router::new()
        .merge(api)
        .merge(MapTokenRoutes::routes(Arc::clone(resources)))
        .merge(HealthRoutes::routes(Arc::clone(resources)))
        .layer(TraceLayer::new_for_http())
}
