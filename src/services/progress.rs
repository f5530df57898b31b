// ABOUTME: Applies health snapshots and manual runs to the active journey and lifetime totals
// ABOUTME: Handles journey start, completion bookkeeping, and streak recomputation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Epic Run Contributors

use crate::database::Database;
use crate::journey::catalog::{destination, find_destination};
use crate::journey::JourneyProgress;
use chrono::{Local, NaiveDate, Utc};
use epic_run_core::errors::{AppError, AppResult};
use epic_run_core::models::{CompletedJourney, DailyActivity, HealthData, Profile, ProfileUpdate};
use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

/// Profile after progress was applied, plus the journey it finished (if any)
#[derive(Debug, Clone, Serialize)]
pub struct ProgressOutcome {
    /// Updated profile row
    pub profile: Profile,
    /// Journey that this update completed
    pub completed_journey: Option<CompletedJourney>,
}

/// Activity added by a new snapshot relative to the row it replaces
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActivityDelta {
    /// Additional steps
    pub steps: u64,
    /// Additional kilometers
    pub distance_km: f64,
    /// Additional calories
    pub calories: u64,
    /// Additional active minutes
    pub active_minutes: u64,
}

impl ActivityDelta {
    /// Non-negative difference between `current` and `previous`
    ///
    /// Distance compares synced kilometers only; manual runs are credited
    /// when logged. A snapshot lower than the stored row contributes nothing.
    #[must_use]
    pub fn between(previous: Option<&DailyActivity>, current: &DailyActivity) -> Self {
        previous.map_or(
            Self {
                steps: current.steps,
                distance_km: current.synced_distance_km(),
                calories: current.calories,
                active_minutes: current.active_minutes,
            },
            |prev| Self {
                steps: current.steps.saturating_sub(prev.steps),
                distance_km: (current.synced_distance_km() - prev.synced_distance_km()).max(0.0),
                calories: current.calories.saturating_sub(prev.calories),
                active_minutes: current.active_minutes.saturating_sub(prev.active_minutes),
            },
        )
    }
}

/// Point the profile at `destination_id` and reset journey distance
///
/// Starting the destination that is already active leaves progress untouched.
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown destination or profile
pub async fn start_journey(db: &Database, user_id: Uuid, destination_id: &str) -> AppResult<Profile> {
    let target = destination(destination_id)?;
    let profile = db.get_profile_required(user_id).await?;

    if profile.current_destination_id.as_deref() == Some(target.id) {
        debug!(%user_id, destination = target.id, "Journey already active");
        return Ok(profile);
    }

    let update = ProfileUpdate {
        current_destination_id: Some(Some(target.id.to_owned())),
        distance_covered: Some(0.0),
        ..ProfileUpdate::default()
    };
    let profile = db.update_profile(user_id, &update).await?;
    info!(%user_id, destination = target.id, "Journey started");
    Ok(profile)
}

/// Replace the ledger row for `day` with `data` and credit the increase
///
/// # Errors
///
/// Returns `ResourceNotFound` if the profile does not exist, or a database error
pub async fn apply_health_snapshot(
    db: &Database,
    user_id: Uuid,
    day: NaiveDate,
    data: &HealthData,
) -> AppResult<ProgressOutcome> {
    db.get_profile_required(user_id).await?;

    let row = DailyActivity::from_health_data(user_id, day, data);
    let previous = db.replace_daily_activity(&row).await?;
    let delta = ActivityDelta::between(previous.as_ref(), &row);
    debug!(%user_id, %day, ?delta, "Health snapshot applied");

    let profile = db
        .add_activity_totals(
            user_id,
            delta.steps,
            delta.distance_km,
            delta.calories,
            delta.active_minutes,
        )
        .await?;

    settle(db, profile).await
}

/// Add a manually entered run of `distance_km` on `day`
///
/// # Errors
///
/// Returns `InvalidInput` for a non-positive or non-finite distance and
/// `ResourceNotFound` if the profile does not exist
pub async fn log_manual_run(
    db: &Database,
    user_id: Uuid,
    day: NaiveDate,
    distance_km: f64,
) -> AppResult<ProgressOutcome> {
    if !distance_km.is_finite() || distance_km <= 0.0 {
        return Err(AppError::invalid_input(
            "Run distance must be a positive number of kilometers",
        ));
    }
    db.get_profile_required(user_id).await?;

    let mut row = db
        .get_daily_activity(user_id, day)
        .await?
        .unwrap_or_else(|| DailyActivity::empty(user_id, day));
    row.distance_km += distance_km;
    row.manual_distance_km += distance_km;
    db.upsert_daily_activity(&row).await?;

    let profile = db
        .add_activity_totals(user_id, 0, distance_km, 0, 0)
        .await?;
    info!(%user_id, %day, distance_km, "Manual run logged");

    settle(db, profile).await
}

/// Complete the journey if its distance is reached and refresh streaks
async fn settle(db: &Database, profile: Profile) -> AppResult<ProgressOutcome> {
    let user_id = profile.id;
    let mut update = ProfileUpdate::default();
    let mut completed_journey = None;

    if let Some(target) = profile
        .current_destination_id
        .as_deref()
        .and_then(find_destination)
    {
        let progress = JourneyProgress::new(target.distance_km, profile.distance_covered);
        if progress.is_complete {
            let journey = CompletedJourney {
                user_id,
                destination_id: target.id.to_owned(),
                completed_at: Utc::now(),
            };
            db.record_completed_journey(&journey).await?;
            info!(%user_id, destination = target.id, "Journey completed");

            update.journeys_completed = Some(profile.journeys_completed.saturating_add(1));
            update.current_destination_id = Some(None);
            update.distance_covered = Some(0.0);
            completed_journey = Some(journey);
        }
    }

    let active_days: Vec<NaiveDate> = db
        .list_all_daily_activity(user_id)
        .await?
        .into_iter()
        .filter(|row| row.distance_km > 0.0)
        .map(|row| row.day)
        .collect();
    let current = current_streak(&active_days, Local::now().date_naive());
    if current != profile.current_streak {
        update.current_streak = Some(current);
    }
    if current > profile.longest_streak {
        update.longest_streak = Some(current);
    }

    let profile = if update.is_empty() {
        profile
    } else {
        db.update_profile(user_id, &update).await?
    };

    Ok(ProgressOutcome {
        profile,
        completed_journey,
    })
}

/// Consecutive active days ending at `today`, or at yesterday when today has no activity yet
///
/// `active_days` must be sorted ascending.
#[must_use]
pub fn current_streak(active_days: &[NaiveDate], today: NaiveDate) -> u32 {
    let Some(&last) = active_days.last() else {
        return 0;
    };
    let gap = (today - last).num_days();
    if !(0..=1).contains(&gap) {
        return 0;
    }

    let mut streak = 1;
    let mut expected = last;
    for &day in active_days.iter().rev().skip(1) {
        let Some(previous) = expected.pred_opt() else {
            break;
        };
        if day == expected {
            continue;
        }
        if day != previous {
            break;
        }
        streak += 1;
        expected = day;
    }
    streak
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, d).unwrap()
    }

    fn row(steps: u64, km: f64) -> DailyActivity {
        DailyActivity {
            steps,
            distance_km: km,
            calories: steps / 20,
            active_minutes: steps / 100,
            ..DailyActivity::empty(Uuid::nil(), day(1))
        }
    }

    #[test]
    fn test_delta_without_previous_row_is_full_row() {
        let delta = ActivityDelta::between(None, &row(4000, 3.1));
        assert_eq!(delta.steps, 4000);
        assert!((delta.distance_km - 3.1).abs() < f64::EPSILON);
    }

    #[test]
    fn test_delta_counts_only_increase() {
        let delta = ActivityDelta::between(Some(&row(4000, 3.0)), &row(6500, 5.0));
        assert_eq!(delta.steps, 2500);
        assert!((delta.distance_km - 2.0).abs() < 1e-9);
        assert_eq!(delta.active_minutes, 25);
    }

    #[test]
    fn test_delta_ignores_manual_kilometers() {
        let previous = DailyActivity {
            manual_distance_km: 5.0,
            ..row(4000, 8.0)
        };
        let delta = ActivityDelta::between(Some(&previous), &row(5000, 6.0));
        assert!((delta.distance_km - 3.0).abs() < 1e-9);
        assert_eq!(delta.steps, 1000);
    }

    #[test]
    fn test_delta_never_negative() {
        let delta = ActivityDelta::between(Some(&row(6500, 5.0)), &row(100, 0.1));
        assert_eq!(delta.steps, 0);
        assert!(delta.distance_km.abs() < f64::EPSILON);
        assert_eq!(delta.calories, 0);
    }

    #[test]
    fn test_streak_counts_consecutive_days() {
        assert_eq!(current_streak(&[day(3), day(4), day(5)], day(5)), 3);
        assert_eq!(current_streak(&[day(1), day(3), day(4)], day(4)), 2);
    }

    #[test]
    fn test_streak_survives_until_end_of_next_day() {
        assert_eq!(current_streak(&[day(4), day(5)], day(6)), 2);
        assert_eq!(current_streak(&[day(4), day(5)], day(7)), 0);
    }

    #[test]
    fn test_streak_empty() {
        assert_eq!(current_streak(&[], day(7)), 0);
    }
}
