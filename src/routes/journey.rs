// ABOUTME: Journey computation routes returning paths, positions, and map overlays
// ABOUTME: Pure functions of destination and covered distance; nothing is stored
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Epic Run Contributors

//! Journey routes
//!
//! `GET /api/journey/path` and `GET /api/journey/map` take the destination id
//! and the covered distance as query parameters.

use crate::journey::catalog::{destination, START_LOCATION};
use crate::journey::path::DEFAULT_SEGMENTS;
use crate::journey::{JourneyPath, JourneyProgress, MapOverlay};
use axum::{extract::Query, routing::get, Json, Router};
use epic_run_core::constants::journey::MAX_PATH_SEGMENTS;
use epic_run_core::errors::{AppError, AppResult};
use epic_run_core::models::{Coordinate, Destination};
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;

/// Query parameters shared by the journey routes
#[derive(Debug, Deserialize)]
pub struct JourneyQuery {
    /// Destination id
    pub destination: String,
    /// Kilometers covered so far
    #[serde(default)]
    pub covered: f64,
    /// Path segment count (path routes only), at most `MAX_PATH_SEGMENTS`
    pub segments: Option<NonZeroUsize>,
}

/// Path and current position for a journey
#[derive(Debug, Serialize)]
pub struct JourneyPathResponse {
    /// Destination being travelled to
    pub destination: Destination,
    /// Start coordinate
    pub start: Coordinate,
    /// Progress figures
    pub progress: JourneyProgress,
    /// Number of segments
    pub segments: usize,
    /// Index of the current position in `path`
    pub current_index: usize,
    /// Current position
    pub current_position: Coordinate,
    /// Interpolated path, start to destination
    pub path: Vec<Coordinate>,
}

impl JourneyPathResponse {
    /// Compute the path response for `covered_km` towards `target`
    #[must_use]
    pub fn build(target: &Destination, covered_km: f64, segments: NonZeroUsize) -> Self {
        let progress = JourneyProgress::new(target.distance_km, covered_km);
        let path =
            JourneyPath::with_segments(START_LOCATION, target.coordinate, progress.percent, segments);
        Self {
            destination: *target,
            start: START_LOCATION,
            progress,
            segments: path.segments(),
            current_index: path.current_index(),
            current_position: path.current_position(),
            path: path.coordinates().to_vec(),
        }
    }
}

/// Journey computation routes
pub struct JourneyRoutes;

impl JourneyRoutes {
    /// Create journey routes
    pub fn routes() -> Router {
        Router::new()
            .route("/api/journey/path", get(Self::handle_path))
            .route("/api/journey/map", get(Self::handle_map))
    }

    async fn handle_path(Query(query): Query<JourneyQuery>) -> AppResult<Json<JourneyPathResponse>> {
        let target = destination(&query.destination)?;
        let segments = query.segments.unwrap_or(DEFAULT_SEGMENTS);
        if segments.get() > MAX_PATH_SEGMENTS {
            return Err(AppError::invalid_input(format!(
                "segments must be at most {MAX_PATH_SEGMENTS}"
            )));
        }
        Ok(Json(JourneyPathResponse::build(
            target,
            query.covered,
            segments,
        )))
    }

    async fn handle_map(Query(query): Query<JourneyQuery>) -> AppResult<Json<MapOverlay>> {
        let target = destination(&query.destination)?;
        Ok(Json(MapOverlay::build(target, query.covered)))
    }
}
