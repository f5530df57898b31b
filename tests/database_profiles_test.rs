// ABOUTME: Integration tests for the profile store and daily activity ledger
// ABOUTME: Covers creation, partial updates, atomic totals, and ledger range queries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Epic Run Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::{NaiveDate, Utc};
use epic_run_server::database::Database;
use epic_run_server::errors::ErrorCode;
use epic_run_server::models::{
    CompletedJourney, DailyActivity, FitnessLevel, NewProfile, ProfileUpdate, WeeklyGoal,
};
use uuid::Uuid;

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 5, d).unwrap()
}

fn activity(user_id: Uuid, on: NaiveDate, steps: u64, km: f64) -> DailyActivity {
    DailyActivity {
        user_id,
        day: on,
        steps,
        distance_km: km,
        manual_distance_km: 0.0,
        calories: steps / 20,
        active_minutes: steps / 100,
    }
}

#[tokio::test]
async fn test_new_profile_has_defaults() {
    let db = common::create_test_database().await.unwrap();
    let profile = common::create_test_profile(&db).await.unwrap();

    assert_eq!(profile.full_name.as_deref(), Some("Test Runner"));
    assert_eq!(profile.fitness_level, None);
    assert_eq!(profile.weekly_goal, None);
    assert_eq!(profile.daily_step_goal, 10_000);
    assert!(!profile.onboarding_completed);
    assert!(!profile.apple_health_connected);
    assert_eq!(profile.current_destination_id, None);
    assert_eq!(profile.total_steps, 0);
    assert_eq!(profile.journeys_completed, 0);

    let fetched = db.get_profile(profile.id).await.unwrap().unwrap();
    assert_eq!(fetched, profile);
}

#[tokio::test]
async fn test_duplicate_profile_is_rejected() {
    let db = common::create_test_database().await.unwrap();
    let profile = common::create_test_profile(&db).await.unwrap();

    let err = db
        .create_profile(NewProfile {
            id: profile.id,
            email: None,
            full_name: None,
            avatar_url: None,
        })
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceAlreadyExists);
}

#[tokio::test]
async fn test_missing_profile() {
    let db = common::create_test_database().await.unwrap();
    let id = Uuid::new_v4();

    assert!(db.get_profile(id).await.unwrap().is_none());
    let err = db.get_profile_required(id).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);

    let err = db
        .update_profile(
            id,
            &ProfileUpdate {
                daily_step_goal: Some(8_000),
                ..ProfileUpdate::default()
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
}

#[tokio::test]
async fn test_partial_update_leaves_other_fields() {
    let db = common::create_test_database().await.unwrap();
    let profile = common::create_test_profile(&db).await.unwrap();

    let updated = db
        .update_profile(
            profile.id,
            &ProfileUpdate {
                fitness_level: Some(FitnessLevel::Advanced),
                weekly_goal: Some(WeeklyGoal::Intense),
                ..ProfileUpdate::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.fitness_level, Some(FitnessLevel::Advanced));
    assert_eq!(updated.weekly_goal, Some(WeeklyGoal::Intense));
    assert_eq!(updated.full_name, profile.full_name);
    assert_eq!(updated.email, profile.email);
    assert_eq!(updated.daily_step_goal, profile.daily_step_goal);
    assert!(updated.updated_at >= profile.updated_at);
    assert_eq!(updated.created_at, profile.created_at);
}

#[tokio::test]
async fn test_nullable_fields_can_be_cleared() {
    let db = common::create_test_database().await.unwrap();
    let profile = common::create_test_profile(&db).await.unwrap();

    let updated = db
        .update_profile(
            profile.id,
            &ProfileUpdate {
                full_name: Some(None),
                current_destination_id: Some(Some("narnia".to_owned())),
                ..ProfileUpdate::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.full_name, None);
    assert_eq!(updated.current_destination_id.as_deref(), Some("narnia"));

    let cleared = db
        .update_profile(
            profile.id,
            &ProfileUpdate {
                current_destination_id: Some(None),
                ..ProfileUpdate::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(cleared.current_destination_id, None);
}

#[tokio::test]
async fn test_last_write_wins() {
    let db = common::create_test_database().await.unwrap();
    let profile = common::create_test_profile(&db).await.unwrap();

    for goal in [6_000, 12_000, 9_000] {
        db.update_profile(
            profile.id,
            &ProfileUpdate {
                daily_step_goal: Some(goal),
                ..ProfileUpdate::default()
            },
        )
        .await
        .unwrap();
    }

    let fetched = db.get_profile_required(profile.id).await.unwrap();
    assert_eq!(fetched.daily_step_goal, 9_000);
}

#[tokio::test]
async fn test_activity_totals_accumulate() {
    let db = common::create_test_database().await.unwrap();
    let profile = common::create_test_profile(&db).await.unwrap();

    db.add_activity_totals(profile.id, 4_000, 3.0, 150, 40)
        .await
        .unwrap();
    let after = db
        .add_activity_totals(profile.id, 1_000, 0.5, 50, 10)
        .await
        .unwrap();

    assert_eq!(after.total_steps, 5_000);
    assert!((after.distance_covered - 3.5).abs() < 1e-9);
    assert_eq!(after.total_calories, 200);
    assert_eq!(after.total_active_minutes, 50);
}

#[tokio::test]
async fn test_concurrent_increments_are_not_lost() {
    let db = common::create_test_database().await.unwrap();
    let profile = common::create_test_profile(&db).await.unwrap();

    let tasks: Vec<_> = (0..10)
        .map(|_| {
            let db: Database = db.clone();
            let id = profile.id;
            tokio::spawn(async move { db.add_activity_totals(id, 100, 0.1, 5, 1).await })
        })
        .collect();
    for task in tasks {
        task.await.unwrap().unwrap();
    }

    let fetched = db.get_profile_required(profile.id).await.unwrap();
    assert_eq!(fetched.total_steps, 1_000);
    assert_eq!(fetched.total_active_minutes, 10);
}

#[tokio::test]
async fn test_replace_daily_activity_returns_previous_row() {
    let db = common::create_test_database().await.unwrap();
    let profile = common::create_test_profile(&db).await.unwrap();

    let first = activity(profile.id, day(3), 3_000, 2.2);
    assert!(db.replace_daily_activity(&first).await.unwrap().is_none());

    let second = activity(profile.id, day(3), 7_000, 5.1);
    let previous = db.replace_daily_activity(&second).await.unwrap().unwrap();
    assert_eq!(previous, first);

    let stored = db
        .get_daily_activity(profile.id, day(3))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored, second);
}

#[tokio::test]
async fn test_activity_range_is_inclusive_and_ordered() {
    let db = common::create_test_database().await.unwrap();
    let profile = common::create_test_profile(&db).await.unwrap();
    let other = common::create_test_profile_named(&db, "Other").await.unwrap();

    for d in [7, 2, 5, 9] {
        db.upsert_daily_activity(&activity(profile.id, day(d), 1_000, 1.0))
            .await
            .unwrap();
    }
    db.upsert_daily_activity(&activity(other.id, day(5), 9_999, 9.0))
        .await
        .unwrap();

    let rows = db
        .list_daily_activity(profile.id, day(2), day(7))
        .await
        .unwrap();
    let days: Vec<NaiveDate> = rows.iter().map(|r| r.day).collect();
    assert_eq!(days, vec![day(2), day(5), day(7)]);
    assert!(rows.iter().all(|r| r.user_id == profile.id));

    assert_eq!(db.list_all_daily_activity(profile.id).await.unwrap().len(), 4);
}

#[tokio::test]
async fn test_completed_journeys_are_listed_per_user() {
    let db = common::create_test_database().await.unwrap();
    let profile = common::create_test_profile(&db).await.unwrap();

    for destination_id in ["hogwarts", "narnia"] {
        db.record_completed_journey(&CompletedJourney {
            user_id: profile.id,
            destination_id: destination_id.to_owned(),
            completed_at: Utc::now(),
        })
        .await
        .unwrap();
    }

    let journeys = db.list_completed_journeys(profile.id).await.unwrap();
    let ids: Vec<&str> = journeys.iter().map(|j| j.destination_id.as_str()).collect();
    assert_eq!(ids, vec!["hogwarts", "narnia"]);
    assert!(db
        .list_completed_journeys(Uuid::new_v4())
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn test_file_database_persists_across_connections() {
    common::init_test_logging();
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite:{}", dir.path().join("epic_run.db").display());

    let id = {
        let db = Database::new(&url).await.unwrap();
        common::create_test_profile(&db).await.unwrap().id
    };

    let reopened = Database::new(&url).await.unwrap();
    assert!(reopened.get_profile(id).await.unwrap().is_some());
}
