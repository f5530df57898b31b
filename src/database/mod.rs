// ABOUTME: SQLite-backed profile store with per-day activity ledger and journey history
// ABOUTME: Connection setup, schema migration, and shared row conversion helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Epic Run Contributors

//! # Database Management
//!
//! One `profiles` row per user identity, a `daily_activity` ledger keyed by
//! `(user_id, day)`, and a `completed_journeys` history. Rows carry no version
//! column, so concurrent writers follow last-write-wins.

mod activity;
mod profiles;

use chrono::{DateTime, Utc};
use epic_run_core::errors::{AppError, AppResult};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use tracing::{debug, info};

/// Database manager for profiles and activity
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Connect and run migrations
    ///
    /// In-memory databases are pinned to a single long-lived connection so
    /// every query sees the same data.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection or a migration fails
    pub async fn new(database_url: &str) -> AppResult<Self> {
        let is_memory = database_url.contains(":memory:");

        // Ensure SQLite creates the database file if it doesn't exist
        let connection_url = if database_url.starts_with("sqlite:") && !is_memory {
            if database_url.contains('?') {
                database_url.to_owned()
            } else {
                format!("{database_url}?mode=rwc")
            }
        } else {
            database_url.to_owned()
        };

        let options = if is_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new()
        };

        let pool = options
            .connect(&connection_url)
            .await
            .map_err(|e| AppError::database(format!("Failed to connect to database: {e}")))?;

        let db = Self { pool };
        db.migrate().await?;
        info!(memory = is_memory, "Database initialized");
        Ok(db)
    }

    /// Get a reference to the database pool for advanced operations
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create tables and indexes if they do not exist
    ///
    /// # Errors
    ///
    /// Returns an error if a statement fails
    pub async fn migrate(&self) -> AppResult<()> {
        let statements = [
            r"
            CREATE TABLE IF NOT EXISTS profiles (
                id TEXT PRIMARY KEY,
                email TEXT,
                full_name TEXT,
                avatar_url TEXT,
                fitness_level TEXT CHECK (fitness_level IN ('beginner', 'intermediate', 'advanced', 'athlete')),
                weekly_goal TEXT CHECK (weekly_goal IN ('light', 'moderate', 'active', 'intense')),
                daily_step_goal INTEGER NOT NULL DEFAULT 10000,
                apple_health_connected BOOLEAN NOT NULL DEFAULT false,
                onboarding_completed BOOLEAN NOT NULL DEFAULT false,
                current_destination_id TEXT,
                distance_covered REAL NOT NULL DEFAULT 0,
                total_steps INTEGER NOT NULL DEFAULT 0,
                total_calories INTEGER NOT NULL DEFAULT 0,
                total_active_minutes INTEGER NOT NULL DEFAULT 0,
                journeys_completed INTEGER NOT NULL DEFAULT 0,
                current_streak INTEGER NOT NULL DEFAULT 0,
                longest_streak INTEGER NOT NULL DEFAULT 0,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            ",
            r"
            CREATE TABLE IF NOT EXISTS daily_activity (
                user_id TEXT NOT NULL REFERENCES profiles(id) ON DELETE CASCADE,
                day TEXT NOT NULL,
                steps INTEGER NOT NULL DEFAULT 0,
                distance_km REAL NOT NULL DEFAULT 0,
                manual_distance_km REAL NOT NULL DEFAULT 0,
                calories INTEGER NOT NULL DEFAULT 0,
                active_minutes INTEGER NOT NULL DEFAULT 0,
                updated_at TEXT NOT NULL,
                PRIMARY KEY (user_id, day)
            )
            ",
            r"
            CREATE TABLE IF NOT EXISTS completed_journeys (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id TEXT NOT NULL REFERENCES profiles(id) ON DELETE CASCADE,
                destination_id TEXT NOT NULL,
                completed_at TEXT NOT NULL
            )
            ",
            "CREATE INDEX IF NOT EXISTS idx_completed_journeys_user ON completed_journeys(user_id)",
        ];

        for statement in statements {
            sqlx::query(statement)
                .execute(&self.pool)
                .await
                .map_err(|e| AppError::database(format!("Migration failed: {e}")))?;
        }

        debug!("Database migrations complete");
        Ok(())
    }
}

/// Integers are stored as SQLite `INTEGER` (i64)
fn to_db_int(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

fn from_db_u64(value: i64) -> u64 {
    u64::try_from(value).unwrap_or_default()
}

fn from_db_u32(value: i64) -> u32 {
    u32::try_from(value).unwrap_or_default()
}

fn parse_timestamp(value: &str) -> AppResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| AppError::database(format!("Invalid date: {e}")))
}
