// ABOUTME: Profile table operations: create, full-row read, and partial-field update
// ABOUTME: Partial updates touch only provided columns and bump updated_at
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Epic Run Contributors

use super::{from_db_u32, from_db_u64, parse_timestamp, to_db_int, Database};
use chrono::Utc;
use epic_run_core::errors::{AppError, AppResult, ErrorCode};
use epic_run_core::models::{NewProfile, Profile, ProfileUpdate};
use sqlx::sqlite::SqliteRow;
use sqlx::{QueryBuilder, Row, Sqlite};
use tracing::debug;
use uuid::Uuid;

const PROFILE_COLUMNS: &str = r"
    id, email, full_name, avatar_url, fitness_level, weekly_goal, daily_step_goal,
    apple_health_connected, onboarding_completed, current_destination_id, distance_covered,
    total_steps, total_calories, total_active_minutes, journeys_completed,
    current_streak, longest_streak, created_at, updated_at
";

impl Database {
    /// Insert a new profile with default goals and zeroed statistics
    ///
    /// # Errors
    ///
    /// Returns `ResourceAlreadyExists` if the id is taken, or a database error
    pub async fn create_profile(&self, new_profile: NewProfile) -> AppResult<Profile> {
        let profile = Profile::new(new_profile, Utc::now());

        sqlx::query(
            r"
            INSERT INTO profiles (
                id, email, full_name, avatar_url, daily_step_goal, apple_health_connected,
                onboarding_completed, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ",
        )
        .bind(profile.id.to_string())
        .bind(&profile.email)
        .bind(&profile.full_name)
        .bind(&profile.avatar_url)
        .bind(i64::from(profile.daily_step_goal))
        .bind(profile.apple_health_connected)
        .bind(profile.onboarding_completed)
        .bind(profile.created_at.to_rfc3339())
        .bind(profile.updated_at.to_rfc3339())
        .execute(self.pool())
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db) if db.is_unique_violation() => AppError::new(
                ErrorCode::ResourceAlreadyExists,
                format!("Profile {} already exists", profile.id),
            ),
            other => AppError::database(format!("Failed to create profile: {other}")),
        })?;

        debug!(user_id = %profile.id, "Profile created");
        Ok(profile)
    }

    /// Read the full profile row
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a column cannot be decoded
    pub async fn get_profile(&self, user_id: Uuid) -> AppResult<Option<Profile>> {
        let query = format!("SELECT {PROFILE_COLUMNS} FROM profiles WHERE id = $1");
        let row = sqlx::query(&query)
            .bind(user_id.to_string())
            .fetch_optional(self.pool())
            .await
            .map_err(|e| AppError::database(format!("Failed to get profile: {e}")))?;

        row.map(|r| Self::row_to_profile(&r)).transpose()
    }

    /// Read the full profile row, failing when it does not exist
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if no profile exists for `user_id`
    pub async fn get_profile_required(&self, user_id: Uuid) -> AppResult<Profile> {
        self.get_profile(user_id)
            .await?
            .ok_or_else(|| AppError::not_found("Profile").with_user_id(user_id))
    }

    /// Write the provided fields and return the updated row
    ///
    /// Fields left as `None` keep their stored value. There is no version
    /// check: the last writer wins per column.
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if no profile exists for `user_id`
    pub async fn update_profile(&self, user_id: Uuid, update: &ProfileUpdate) -> AppResult<Profile> {
        let mut builder: QueryBuilder<'_, Sqlite> = QueryBuilder::new("UPDATE profiles SET ");
        let mut set = builder.separated(", ");

        if let Some(email) = &update.email {
            set.push("email = ").push_bind_unseparated(email.clone());
        }
        if let Some(full_name) = &update.full_name {
            set.push("full_name = ").push_bind_unseparated(full_name.clone());
        }
        if let Some(avatar_url) = &update.avatar_url {
            set.push("avatar_url = ").push_bind_unseparated(avatar_url.clone());
        }
        if let Some(level) = update.fitness_level {
            set.push("fitness_level = ").push_bind_unseparated(level.as_str());
        }
        if let Some(goal) = update.weekly_goal {
            set.push("weekly_goal = ").push_bind_unseparated(goal.as_str());
        }
        if let Some(steps) = update.daily_step_goal {
            set.push("daily_step_goal = ").push_bind_unseparated(i64::from(steps));
        }
        if let Some(connected) = update.apple_health_connected {
            set.push("apple_health_connected = ").push_bind_unseparated(connected);
        }
        if let Some(completed) = update.onboarding_completed {
            set.push("onboarding_completed = ").push_bind_unseparated(completed);
        }
        if let Some(destination) = &update.current_destination_id {
            set.push("current_destination_id = ").push_bind_unseparated(destination.clone());
        }
        if let Some(covered) = update.distance_covered {
            set.push("distance_covered = ").push_bind_unseparated(covered);
        }
        if let Some(steps) = update.total_steps {
            set.push("total_steps = ").push_bind_unseparated(to_db_int(steps));
        }
        if let Some(calories) = update.total_calories {
            set.push("total_calories = ").push_bind_unseparated(to_db_int(calories));
        }
        if let Some(minutes) = update.total_active_minutes {
            set.push("total_active_minutes = ").push_bind_unseparated(to_db_int(minutes));
        }
        if let Some(count) = update.journeys_completed {
            set.push("journeys_completed = ").push_bind_unseparated(i64::from(count));
        }
        if let Some(streak) = update.current_streak {
            set.push("current_streak = ").push_bind_unseparated(i64::from(streak));
        }
        if let Some(streak) = update.longest_streak {
            set.push("longest_streak = ").push_bind_unseparated(i64::from(streak));
        }
        set.push("updated_at = ").push_bind_unseparated(Utc::now().to_rfc3339());

        builder.push(" WHERE id = ").push_bind(user_id.to_string());

        let result = builder
            .build()
            .execute(self.pool())
            .await
            .map_err(|e| AppError::database(format!("Failed to update profile: {e}")))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Profile").with_user_id(user_id));
        }

        self.get_profile_required(user_id).await
    }

    /// Add activity to the lifetime totals and the active journey in one statement
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if no profile exists for `user_id`
    pub async fn add_activity_totals(
        &self,
        user_id: Uuid,
        steps: u64,
        distance_km: f64,
        calories: u64,
        active_minutes: u64,
    ) -> AppResult<Profile> {
        let result = sqlx::query(
            r"
            UPDATE profiles
            SET total_steps = total_steps + $1,
                distance_covered = distance_covered + $2,
                total_calories = total_calories + $3,
                total_active_minutes = total_active_minutes + $4,
                updated_at = $5
            WHERE id = $6
            ",
        )
        .bind(to_db_int(steps))
        .bind(distance_km)
        .bind(to_db_int(calories))
        .bind(to_db_int(active_minutes))
        .bind(Utc::now().to_rfc3339())
        .bind(user_id.to_string())
        .execute(self.pool())
        .await
        .map_err(|e| AppError::database(format!("Failed to add activity totals: {e}")))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Profile").with_user_id(user_id));
        }

        self.get_profile_required(user_id).await
    }

    fn row_to_profile(row: &SqliteRow) -> AppResult<Profile> {
        let id: String = row.try_get("id")?;
        let fitness_level: Option<String> = row.try_get("fitness_level")?;
        let weekly_goal: Option<String> = row.try_get("weekly_goal")?;
        let created_at: String = row.try_get("created_at")?;
        let updated_at: String = row.try_get("updated_at")?;

        Ok(Profile {
            id: Uuid::parse_str(&id)
                .map_err(|e| AppError::database(format!("Invalid UUID: {e}")))?,
            email: row.try_get("email")?,
            full_name: row.try_get("full_name")?,
            avatar_url: row.try_get("avatar_url")?,
            fitness_level: fitness_level
                .map(|s| s.parse())
                .transpose()
                .map_err(|e: AppError| AppError::database(e.to_string()))?,
            weekly_goal: weekly_goal
                .map(|s| s.parse())
                .transpose()
                .map_err(|e: AppError| AppError::database(e.to_string()))?,
            daily_step_goal: from_db_u32(row.try_get("daily_step_goal")?),
            apple_health_connected: row.try_get("apple_health_connected")?,
            onboarding_completed: row.try_get("onboarding_completed")?,
            current_destination_id: row.try_get("current_destination_id")?,
            distance_covered: row.try_get("distance_covered")?,
            total_steps: from_db_u64(row.try_get("total_steps")?),
            total_calories: from_db_u64(row.try_get("total_calories")?),
            total_active_minutes: from_db_u64(row.try_get("total_active_minutes")?),
            journeys_completed: from_db_u32(row.try_get("journeys_completed")?),
            current_streak: from_db_u32(row.try_get("current_streak")?),
            longest_streak: from_db_u32(row.try_get("longest_streak")?),
            created_at: parse_timestamp(&created_at)?,
            updated_at: parse_timestamp(&updated_at)?,
        })
    }
}
