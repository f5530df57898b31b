// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Epic Run Contributors
// ABOUTME: Profile commands for epic-run-cli
// ABOUTME: Creates, inspects, and updates runner profiles, and seeds demo data

use crate::helpers::display;
use anyhow::Result;
use chrono::{Days, Local};
use epic_run_server::database::Database;
use epic_run_server::models::{FitnessLevel, HealthData, NewProfile, WeeklyGoal};
use epic_run_server::services::onboarding::{self, OnboardingRequest};
use epic_run_server::services::{achievements, progress, stats};
use uuid::Uuid;

/// Demo week, oldest day first
const DEMO_WEEK_KM: [f64; 7] = [5.2, 3.1, 8.4, 6.0, 4.5, 10.3, 7.7];
const DEMO_STEPS_PER_KM: f64 = 1_300.0;
const DEMO_KCAL_PER_KM: f64 = 62.0;

pub async fn create(db: &Database, email: Option<String>, name: Option<String>) -> Result<()> {
    let profile = db
        .create_profile(NewProfile {
            id: Uuid::new_v4(),
            email,
            full_name: name,
            avatar_url: None,
        })
        .await?;
    println!("Created profile {}", profile.id);
    Ok(())
}

pub async fn show(db: &Database, user_id: Uuid) -> Result<()> {
    let profile = db.get_profile_required(user_id).await?;
    display::profile(&profile);
    display::stats(&stats::stats_for(db, user_id).await?);
    display::achievements(&achievements::achievements_for(db, user_id).await?);
    Ok(())
}

pub async fn start_journey(db: &Database, user_id: Uuid, destination_id: &str) -> Result<()> {
    let profile = progress::start_journey(db, user_id, destination_id).await?;
    display::profile(&profile);
    Ok(())
}

pub async fn log_run(db: &Database, user_id: Uuid, km: f64) -> Result<()> {
    let outcome = progress::log_manual_run(db, user_id, Local::now().date_naive(), km).await?;
    display::outcome(&outcome);
    Ok(())
}

pub async fn seed_demo(db: &Database, destination_id: &str) -> Result<()> {
    let profile = db
        .create_profile(NewProfile {
            id: Uuid::new_v4(),
            email: Some("demo.runner@epic-run.example".to_owned()),
            full_name: Some("Demo Runner".to_owned()),
            avatar_url: None,
        })
        .await?;
    let user_id = profile.id;

    onboarding::complete_onboarding(
        db,
        user_id,
        &OnboardingRequest {
            fitness_level: FitnessLevel::Intermediate,
            weekly_goal: WeeklyGoal::Moderate,
            daily_step_goal: 10_000,
            apple_health_connected: true,
        },
    )
    .await?;
    progress::start_journey(db, user_id, destination_id).await?;

    let today = Local::now().date_naive();
    let mut last = None;
    for (days_ago, km) in (0..DEMO_WEEK_KM.len()).rev().zip(DEMO_WEEK_KM) {
        let Some(day) = today.checked_sub_days(Days::new(days_ago as u64)) else {
            continue;
        };
        let snapshot = HealthData {
            steps: (km * DEMO_STEPS_PER_KM).round() as u64,
            distance_km: km,
            calories: (km * DEMO_KCAL_PER_KM).round() as u64,
            active_minutes: (km * 6.0).round() as u64,
            last_sync_time: chrono::Utc::now(),
        };
        last = Some(progress::apply_health_snapshot(db, user_id, day, &snapshot).await?);
    }

    println!("Seeded demo runner {user_id}");
    if let Some(outcome) = last {
        display::outcome(&outcome);
    }
    display::stats(&stats::stats_for(db, user_id).await?);
    Ok(())
}
