// ABOUTME: Profile routes: create, read, partial update, onboarding, journeys, and activity
// ABOUTME: Thin handlers over the profile store and the progress/stats/achievement services
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Epic Run Contributors

//! Profile routes
//!
//! Identity comes from the path; there is no authentication layer.

use crate::journey::catalog::find_destination;
use crate::journey::path::DEFAULT_SEGMENTS;
use crate::resources::ServerResources;
use crate::routes::journey::JourneyPathResponse;
use crate::services::achievements::{self, Achievement};
use crate::services::onboarding::{self, OnboardingRequest};
use crate::services::progress::{self, ProgressOutcome};
use crate::services::stats::{self, StatsSummary};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::{Local, NaiveDate, Utc};
use epic_run_core::constants::health_sync::STEPS_PER_ACTIVE_MINUTE;
use epic_run_core::errors::{AppError, AppResult};
use epic_run_core::models::{DailyActivity, HealthData, NewProfile, Profile, ProfileUpdate};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

/// Body for `POST /api/profiles/:id/journey`
#[derive(Debug, Deserialize)]
pub struct StartJourneyBody {
    /// Destination to travel to
    pub destination_id: String,
}

/// Body for `POST /api/profiles/:id/activity`
#[derive(Debug, Deserialize)]
pub struct ActivitySnapshotBody {
    /// Day the totals belong to (today when absent)
    pub day: Option<NaiveDate>,
    /// Steps that day
    pub steps: u64,
    /// Kilometers that day
    pub distance_km: f64,
    /// Calories that day
    #[serde(default)]
    pub calories: u64,
    /// Active minutes (estimated from steps when absent)
    pub active_minutes: Option<u64>,
}

impl ActivitySnapshotBody {
    fn into_health_data(self) -> AppResult<(NaiveDate, HealthData)> {
        if !self.distance_km.is_finite() || self.distance_km < 0.0 {
            return Err(AppError::invalid_input(
                "distance_km must be a non-negative number",
            ));
        }
        let active_minutes = self
            .active_minutes
            .unwrap_or_else(|| (self.steps as f64 / STEPS_PER_ACTIVE_MINUTE).round() as u64);
        Ok((
            self.day.unwrap_or_else(|| Local::now().date_naive()),
            HealthData {
                steps: self.steps,
                distance_km: self.distance_km,
                calories: self.calories,
                active_minutes,
                last_sync_time: Utc::now(),
            },
        ))
    }
}

/// Body for `POST /api/profiles/:id/runs`
#[derive(Debug, Deserialize)]
pub struct ManualRunBody {
    /// Day of the run (today when absent)
    pub day: Option<NaiveDate>,
    /// Kilometers run
    pub distance_km: f64,
}

/// Query for `GET /api/profiles/:id/activity`
#[derive(Debug, Deserialize)]
pub struct ActivityRangeQuery {
    /// First day, inclusive
    pub from: NaiveDate,
    /// Last day, inclusive
    pub to: NaiveDate,
}

/// Profile routes implementation
pub struct ProfileRoutes;

impl ProfileRoutes {
    /// Create profile routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/profiles", post(Self::handle_create))
            .route(
                "/api/profiles/:id",
                get(Self::handle_get).patch(Self::handle_update),
            )
            .route("/api/profiles/:id/onboarding", post(Self::handle_onboarding))
            .route(
                "/api/profiles/:id/journey",
                get(Self::handle_current_journey).post(Self::handle_start_journey),
            )
            .route(
                "/api/profiles/:id/activity",
                get(Self::handle_list_activity).post(Self::handle_activity_snapshot),
            )
            .route("/api/profiles/:id/runs", post(Self::handle_manual_run))
            .route("/api/profiles/:id/stats", get(Self::handle_stats))
            .route("/api/profiles/:id/achievements", get(Self::handle_achievements))
            .with_state(resources)
    }

    /// Handle POST /api/profiles
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        Json(body): Json<NewProfile>,
    ) -> Result<Response, AppError> {
        let profile = resources.database.create_profile(body).await?;
        Ok((StatusCode::CREATED, Json(profile)).into_response())
    }

    /// Handle GET /api/profiles/:id
    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        Path(user_id): Path<Uuid>,
    ) -> AppResult<Json<Profile>> {
        Ok(Json(resources.database.get_profile_required(user_id).await?))
    }

    /// Handle PATCH /api/profiles/:id
    async fn handle_update(
        State(resources): State<Arc<ServerResources>>,
        Path(user_id): Path<Uuid>,
        Json(update): Json<ProfileUpdate>,
    ) -> AppResult<Json<Profile>> {
        if let Some(Some(destination_id)) = &update.current_destination_id {
            if find_destination(destination_id).is_none() {
                return Err(AppError::not_found("Destination").with_resource_id(destination_id));
            }
        }
        Ok(Json(
            resources.database.update_profile(user_id, &update).await?,
        ))
    }

    /// Handle POST /api/profiles/:id/onboarding
    async fn handle_onboarding(
        State(resources): State<Arc<ServerResources>>,
        Path(user_id): Path<Uuid>,
        Json(body): Json<OnboardingRequest>,
    ) -> AppResult<Json<Profile>> {
        Ok(Json(
            onboarding::complete_onboarding(&resources.database, user_id, &body).await?,
        ))
    }

    /// Handle GET /api/profiles/:id/journey
    ///
    /// Returns `null` when no journey is active.
    async fn handle_current_journey(
        State(resources): State<Arc<ServerResources>>,
        Path(user_id): Path<Uuid>,
    ) -> AppResult<Json<Option<JourneyPathResponse>>> {
        let profile = resources.database.get_profile_required(user_id).await?;
        let response = profile
            .current_destination_id
            .as_deref()
            .and_then(find_destination)
            .map(|target| {
                JourneyPathResponse::build(target, profile.distance_covered, DEFAULT_SEGMENTS)
            });
        Ok(Json(response))
    }

    /// Handle POST /api/profiles/:id/journey
    async fn handle_start_journey(
        State(resources): State<Arc<ServerResources>>,
        Path(user_id): Path<Uuid>,
        Json(body): Json<StartJourneyBody>,
    ) -> AppResult<Json<Profile>> {
        Ok(Json(
            progress::start_journey(&resources.database, user_id, &body.destination_id).await?,
        ))
    }

    /// Handle GET /api/profiles/:id/activity
    async fn handle_list_activity(
        State(resources): State<Arc<ServerResources>>,
        Path(user_id): Path<Uuid>,
        Query(range): Query<ActivityRangeQuery>,
    ) -> AppResult<Json<Vec<DailyActivity>>> {
        if range.from > range.to {
            return Err(AppError::invalid_input("'from' must not be after 'to'"));
        }
        resources.database.get_profile_required(user_id).await?;
        Ok(Json(
            resources
                .database
                .list_daily_activity(user_id, range.from, range.to)
                .await?,
        ))
    }

    /// Handle POST /api/profiles/:id/activity
    async fn handle_activity_snapshot(
        State(resources): State<Arc<ServerResources>>,
        Path(user_id): Path<Uuid>,
        Json(body): Json<ActivitySnapshotBody>,
    ) -> AppResult<Json<ProgressOutcome>> {
        let (day, data) = body.into_health_data()?;
        Ok(Json(
            progress::apply_health_snapshot(&resources.database, user_id, day, &data).await?,
        ))
    }

    /// Handle POST /api/profiles/:id/runs
    async fn handle_manual_run(
        State(resources): State<Arc<ServerResources>>,
        Path(user_id): Path<Uuid>,
        Json(body): Json<ManualRunBody>,
    ) -> AppResult<Json<ProgressOutcome>> {
        let day = body.day.unwrap_or_else(|| Local::now().date_naive());
        Ok(Json(
            progress::log_manual_run(&resources.database, user_id, day, body.distance_km).await?,
        ))
    }

    /// Handle GET /api/profiles/:id/stats
    async fn handle_stats(
        State(resources): State<Arc<ServerResources>>,
        Path(user_id): Path<Uuid>,
    ) -> AppResult<Json<StatsSummary>> {
        Ok(Json(stats::stats_for(&resources.database, user_id).await?))
    }

    /// Handle GET /api/profiles/:id/achievements
    async fn handle_achievements(
        State(resources): State<Arc<ServerResources>>,
        Path(user_id): Path<Uuid>,
    ) -> AppResult<Json<Vec<Achievement>>> {
        Ok(Json(
            achievements::achievements_for(&resources.database, user_id).await?,
        ))
    }
}
