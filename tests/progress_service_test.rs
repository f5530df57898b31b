// ABOUTME: Integration tests for journey progress, stats, achievements, and onboarding services
// ABOUTME: Exercises snapshot crediting, journey completion, streaks, and derived summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Epic Run Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::{Days, Local, NaiveDate, Utc};
use epic_run_server::errors::ErrorCode;
use epic_run_server::models::{FitnessLevel, HealthData, WeeklyGoal};
use epic_run_server::services::onboarding::{self, OnboardingRequest};
use epic_run_server::services::{achievements, progress, stats};

fn snapshot(steps: u64, km: f64) -> HealthData {
    HealthData {
        steps,
        distance_km: km,
        calories: steps / 20,
        active_minutes: steps / 100,
        last_sync_time: Utc::now(),
    }
}

fn days_ago(n: u64) -> NaiveDate {
    Local::now()
        .date_naive()
        .checked_sub_days(Days::new(n))
        .unwrap()
}

#[tokio::test]
async fn test_start_journey_resets_distance() {
    let db = common::create_test_database().await.unwrap();
    let profile = common::create_test_profile(&db).await.unwrap();
    db.add_activity_totals(profile.id, 0, 12.0, 0, 0).await.unwrap();

    let started = progress::start_journey(&db, profile.id, "narnia").await.unwrap();
    assert_eq!(started.current_destination_id.as_deref(), Some("narnia"));
    assert!(started.distance_covered.abs() < 1e-9);
}

#[tokio::test]
async fn test_restarting_active_journey_keeps_progress() {
    let db = common::create_test_database().await.unwrap();
    let profile = common::create_test_profile(&db).await.unwrap();
    progress::start_journey(&db, profile.id, "rivendell").await.unwrap();
    progress::log_manual_run(&db, profile.id, days_ago(0), 8.0)
        .await
        .unwrap();

    let again = progress::start_journey(&db, profile.id, "rivendell").await.unwrap();
    assert!((again.distance_covered - 8.0).abs() < 1e-9);

    let switched = progress::start_journey(&db, profile.id, "mordor").await.unwrap();
    assert!(switched.distance_covered.abs() < 1e-9);
}

#[tokio::test]
async fn test_start_journey_rejects_unknown_ids() {
    let db = common::create_test_database().await.unwrap();
    let profile = common::create_test_profile(&db).await.unwrap();

    let err = progress::start_journey(&db, profile.id, "atlantis")
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);

    let err = progress::start_journey(&db, uuid::Uuid::new_v4(), "narnia")
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
}

#[tokio::test]
async fn test_repeated_snapshots_credit_only_the_increase() {
    let db = common::create_test_database().await.unwrap();
    let profile = common::create_test_profile(&db).await.unwrap();
    progress::start_journey(&db, profile.id, "mordor").await.unwrap();
    let today = days_ago(0);

    progress::apply_health_snapshot(&db, profile.id, today, &snapshot(6_000, 5.0))
        .await
        .unwrap();
    let outcome = progress::apply_health_snapshot(&db, profile.id, today, &snapshot(9_000, 7.0))
        .await
        .unwrap();
    assert!((outcome.profile.distance_covered - 7.0).abs() < 1e-9);
    assert_eq!(outcome.profile.total_steps, 9_000);

    // A lower reading replaces the ledger row without taking progress back
    let outcome = progress::apply_health_snapshot(&db, profile.id, today, &snapshot(4_000, 3.0))
        .await
        .unwrap();
    assert!((outcome.profile.distance_covered - 7.0).abs() < 1e-9);
    assert_eq!(outcome.profile.total_steps, 9_000);

    let row = db.get_daily_activity(profile.id, today).await.unwrap().unwrap();
    assert_eq!(row.steps, 4_000);
}

#[tokio::test]
async fn test_manual_run_survives_later_snapshots_on_same_day() {
    let db = common::create_test_database().await.unwrap();
    let profile = common::create_test_profile(&db).await.unwrap();
    progress::start_journey(&db, profile.id, "mordor").await.unwrap();
    let today = days_ago(0);

    progress::log_manual_run(&db, profile.id, today, 5.0)
        .await
        .unwrap();
    let outcome = progress::apply_health_snapshot(&db, profile.id, today, &snapshot(4_000, 3.0))
        .await
        .unwrap();
    assert!((outcome.profile.distance_covered - 8.0).abs() < 1e-9);

    let outcome = progress::apply_health_snapshot(&db, profile.id, today, &snapshot(8_000, 6.0))
        .await
        .unwrap();
    assert!((outcome.profile.distance_covered - 11.0).abs() < 1e-9);

    let row = db.get_daily_activity(profile.id, today).await.unwrap().unwrap();
    assert!((row.distance_km - 11.0).abs() < 1e-9);
    assert!((row.manual_distance_km - 5.0).abs() < 1e-9);

    let summary = stats::stats_for(&db, profile.id).await.unwrap();
    assert!((summary.total_distance_km - 11.0).abs() < 1e-9);
}

#[tokio::test]
async fn test_reaching_destination_completes_journey() {
    let db = common::create_test_database().await.unwrap();
    let profile = common::create_test_profile(&db).await.unwrap();
    progress::start_journey(&db, profile.id, "hogwarts").await.unwrap();

    let halfway = progress::log_manual_run(&db, profile.id, days_ago(1), 30.0)
        .await
        .unwrap();
    assert!(halfway.completed_journey.is_none());

    let outcome = progress::log_manual_run(&db, profile.id, days_ago(0), 21.5)
        .await
        .unwrap();
    let journey = outcome.completed_journey.unwrap();
    assert_eq!(journey.destination_id, "hogwarts");
    assert_eq!(outcome.profile.journeys_completed, 1);
    assert_eq!(outcome.profile.current_destination_id, None);
    assert!(outcome.profile.distance_covered.abs() < 1e-9);

    let history = db.list_completed_journeys(profile.id).await.unwrap();
    assert_eq!(history.len(), 1);
}

#[tokio::test]
async fn test_manual_run_validation_and_ledger() {
    let db = common::create_test_database().await.unwrap();
    let profile = common::create_test_profile(&db).await.unwrap();
    let today = days_ago(0);

    for bad in [0.0, -2.0, f64::NAN, f64::INFINITY] {
        let err = progress::log_manual_run(&db, profile.id, today, bad)
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
    }

    progress::log_manual_run(&db, profile.id, today, 3.0)
        .await
        .unwrap();
    progress::log_manual_run(&db, profile.id, today, 2.5)
        .await
        .unwrap();
    let row = db.get_daily_activity(profile.id, today).await.unwrap().unwrap();
    assert!((row.distance_km - 5.5).abs() < 1e-9);
}

#[tokio::test]
async fn test_streaks_follow_consecutive_active_days() {
    let db = common::create_test_database().await.unwrap();
    let profile = common::create_test_profile(&db).await.unwrap();

    for n in [5, 2, 1] {
        progress::log_manual_run(&db, profile.id, days_ago(n), 4.0)
            .await
            .unwrap();
    }
    let outcome = progress::log_manual_run(&db, profile.id, days_ago(0), 4.0)
        .await
        .unwrap();
    assert_eq!(outcome.profile.current_streak, 3);
    assert_eq!(outcome.profile.longest_streak, 3);
}

#[tokio::test]
async fn test_stats_and_achievements_reflect_activity() {
    let db = common::create_test_database().await.unwrap();
    let profile = common::create_test_profile(&db).await.unwrap();
    progress::start_journey(&db, profile.id, "hogwarts").await.unwrap();
    progress::apply_health_snapshot(&db, profile.id, days_ago(0), &snapshot(60_000, 50.0))
        .await
        .unwrap();

    let summary = stats::stats_for(&db, profile.id).await.unwrap();
    assert!((summary.total_distance_km - 50.0).abs() < 1e-9);
    assert_eq!(summary.total_steps, 60_000);
    assert_eq!(summary.journeys_completed, 1);
    assert_eq!(summary.week.len(), 7);

    let badges = achievements::achievements_for(&db, profile.id).await.unwrap();
    let unlocked: Vec<&str> = badges
        .iter()
        .filter(|a| a.unlocked)
        .map(|a| a.id)
        .collect();
    assert!(unlocked.contains(&"first-steps"));
    assert!(unlocked.contains(&"marathon-hero"));
    assert!(unlocked.contains(&"fantasy-explorer"));
    assert!(unlocked.contains(&"lightning-runner"));
    assert!(!unlocked.contains(&"century-club"));
    assert!(!unlocked.contains(&"fellowship"));
}

#[tokio::test]
async fn test_onboarding_marks_profile_complete() {
    let db = common::create_test_database().await.unwrap();
    let profile = common::create_test_profile(&db).await.unwrap();

    let request = OnboardingRequest {
        fitness_level: FitnessLevel::Beginner,
        weekly_goal: WeeklyGoal::Light,
        daily_step_goal: 7_500,
        apple_health_connected: false,
    };
    let updated = onboarding::complete_onboarding(&db, profile.id, &request)
        .await
        .unwrap();
    assert!(updated.onboarding_completed);
    assert_eq!(updated.fitness_level, Some(FitnessLevel::Beginner));
    assert_eq!(updated.weekly_goal, Some(WeeklyGoal::Light));
    assert_eq!(updated.daily_step_goal, 7_500);

    let bad = OnboardingRequest {
        daily_step_goal: 8_000,
        ..request
    };
    let err = onboarding::complete_onboarding(&db, profile.id, &bad)
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}
