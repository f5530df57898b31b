// ABOUTME: Daily activity ledger and completed journey history operations
// ABOUTME: Snapshots replace a day's synced figures; journeys are append-only
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Epic Run Contributors

use super::{from_db_u64, parse_timestamp, to_db_int, Database};
use chrono::{NaiveDate, Utc};
use epic_run_core::errors::{AppError, AppResult};
use epic_run_core::models::{CompletedJourney, DailyActivity};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, Sqlite, Transaction};
use uuid::Uuid;

const DAY_FORMAT: &str = "%Y-%m-%d";

impl Database {
    /// Insert or fully replace the row for `(user_id, day)`
    ///
    /// # Errors
    ///
    /// Returns an error if the statement fails
    pub async fn upsert_daily_activity(&self, activity: &DailyActivity) -> AppResult<()> {
        let mut tx = self.begin().await?;
        Self::upsert_activity_in(&mut tx, activity).await?;
        tx.commit()
            .await
            .map_err(|e| AppError::database(format!("Failed to commit activity: {e}")))
    }

    /// Replace the synced figures for `(user_id, day)` and return the previous row
    ///
    /// Manual kilometers already on the row are kept and added to the stored
    /// distance. Read and write run in one transaction so the returned row is
    /// the one that was overwritten.
    ///
    /// # Errors
    ///
    /// Returns an error if a statement fails
    pub async fn replace_daily_activity(
        &self,
        activity: &DailyActivity,
    ) -> AppResult<Option<DailyActivity>> {
        let mut tx = self.begin().await?;

        let previous = sqlx::query(
            r"
            SELECT user_id, day, steps, distance_km, manual_distance_km, calories, active_minutes
            FROM daily_activity
            WHERE user_id = $1 AND day = $2
            ",
        )
        .bind(activity.user_id.to_string())
        .bind(activity.day.format(DAY_FORMAT).to_string())
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| AppError::database(format!("Failed to read daily activity: {e}")))?
        .map(|row| Self::row_to_daily_activity(&row))
        .transpose()?;

        let stored = activity.with_manual_from(previous.as_ref());
        Self::upsert_activity_in(&mut tx, &stored).await?;
        tx.commit()
            .await
            .map_err(|e| AppError::database(format!("Failed to commit activity: {e}")))?;

        Ok(previous)
    }

    /// Read the row for one day
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn get_daily_activity(
        &self,
        user_id: Uuid,
        day: NaiveDate,
    ) -> AppResult<Option<DailyActivity>> {
        let row = sqlx::query(
            r"
            SELECT user_id, day, steps, distance_km, manual_distance_km, calories, active_minutes
            FROM daily_activity
            WHERE user_id = $1 AND day = $2
            ",
        )
        .bind(user_id.to_string())
        .bind(day.format(DAY_FORMAT).to_string())
        .fetch_optional(self.pool())
        .await
        .map_err(|e| AppError::database(format!("Failed to get daily activity: {e}")))?;

        row.map(|r| Self::row_to_daily_activity(&r)).transpose()
    }

    /// Rows for `from..=to`, oldest first
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn list_daily_activity(
        &self,
        user_id: Uuid,
        from: NaiveDate,
        to: NaiveDate,
    ) -> AppResult<Vec<DailyActivity>> {
        let rows = sqlx::query(
            r"
            SELECT user_id, day, steps, distance_km, manual_distance_km, calories, active_minutes
            FROM daily_activity
            WHERE user_id = $1 AND day >= $2 AND day <= $3
            ORDER BY day ASC
            ",
        )
        .bind(user_id.to_string())
        .bind(from.format(DAY_FORMAT).to_string())
        .bind(to.format(DAY_FORMAT).to_string())
        .fetch_all(self.pool())
        .await
        .map_err(|e| AppError::database(format!("Failed to list daily activity: {e}")))?;

        rows.iter().map(Self::row_to_daily_activity).collect()
    }

    /// Every row for a user, oldest first
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn list_all_daily_activity(&self, user_id: Uuid) -> AppResult<Vec<DailyActivity>> {
        let rows = sqlx::query(
            r"
            SELECT user_id, day, steps, distance_km, manual_distance_km, calories, active_minutes
            FROM daily_activity
            WHERE user_id = $1
            ORDER BY day ASC
            ",
        )
        .bind(user_id.to_string())
        .fetch_all(self.pool())
        .await
        .map_err(|e| AppError::database(format!("Failed to list daily activity: {e}")))?;

        rows.iter().map(Self::row_to_daily_activity).collect()
    }

    /// Append a finished journey
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails
    pub async fn record_completed_journey(&self, journey: &CompletedJourney) -> AppResult<()> {
        sqlx::query(
            r"
            INSERT INTO completed_journeys (user_id, destination_id, completed_at)
            VALUES ($1, $2, $3)
            ",
        )
        .bind(journey.user_id.to_string())
        .bind(&journey.destination_id)
        .bind(journey.completed_at.to_rfc3339())
        .execute(self.pool())
        .await
        .map_err(|e| AppError::database(format!("Failed to record completed journey: {e}")))?;

        Ok(())
    }

    /// Finished journeys, oldest first
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn list_completed_journeys(&self, user_id: Uuid) -> AppResult<Vec<CompletedJourney>> {
        let rows = sqlx::query(
            r"
            SELECT user_id, destination_id, completed_at
            FROM completed_journeys
            WHERE user_id = $1
            ORDER BY completed_at ASC, id ASC
            ",
        )
        .bind(user_id.to_string())
        .fetch_all(self.pool())
        .await
        .map_err(|e| AppError::database(format!("Failed to list completed journeys: {e}")))?;

        rows.iter()
            .map(|row| {
                let user_id: String = row.try_get("user_id")?;
                let completed_at: String = row.try_get("completed_at")?;
                Ok(CompletedJourney {
                    user_id: parse_user_id(&user_id)?,
                    destination_id: row.try_get("destination_id")?,
                    completed_at: parse_timestamp(&completed_at)?,
                })
            })
            .collect()
    }

    async fn begin(&self) -> AppResult<Transaction<'static, Sqlite>> {
        self.pool()
            .begin()
            .await
            .map_err(|e| AppError::database(format!("Failed to begin transaction: {e}")))
    }

    async fn upsert_activity_in(
        tx: &mut Transaction<'static, Sqlite>,
        activity: &DailyActivity,
    ) -> AppResult<()> {
        sqlx::query(
            r"
            INSERT INTO daily_activity (
                user_id, day, steps, distance_km, manual_distance_km,
                calories, active_minutes, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT(user_id, day) DO UPDATE SET
                steps = excluded.steps,
                distance_km = excluded.distance_km,
                manual_distance_km = excluded.manual_distance_km,
                calories = excluded.calories,
                active_minutes = excluded.active_minutes,
                updated_at = excluded.updated_at
            ",
        )
        .bind(activity.user_id.to_string())
        .bind(activity.day.format(DAY_FORMAT).to_string())
        .bind(to_db_int(activity.steps))
        .bind(activity.distance_km)
        .bind(activity.manual_distance_km)
        .bind(to_db_int(activity.calories))
        .bind(to_db_int(activity.active_minutes))
        .bind(Utc::now().to_rfc3339())
        .execute(&mut **tx)
        .await
        .map_err(|e| AppError::database(format!("Failed to upsert daily activity: {e}")))?;

        Ok(())
    }

    fn row_to_daily_activity(row: &SqliteRow) -> AppResult<DailyActivity> {
        let user_id: String = row.try_get("user_id")?;
        let day: String = row.try_get("day")?;

        Ok(DailyActivity {
            user_id: parse_user_id(&user_id)?,
            day: NaiveDate::parse_from_str(&day, DAY_FORMAT)
                .map_err(|e| AppError::database(format!("Invalid day: {e}")))?,
            steps: from_db_u64(row.try_get("steps")?),
            distance_km: row.try_get("distance_km")?,
            manual_distance_km: row.try_get("manual_distance_km")?,
            calories: from_db_u64(row.try_get("calories")?),
            active_minutes: from_db_u64(row.try_get("active_minutes")?),
        })
    }
}

fn parse_user_id(value: &str) -> AppResult<Uuid> {
    Uuid::parse_str(value).map_err(|e| AppError::database(format!("Invalid UUID: {e}")))
}
