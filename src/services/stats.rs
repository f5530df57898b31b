// ABOUTME: Statistics summary derived from a profile and its daily activity ledger
// ABOUTME: Lifetime totals, active time split, streaks, and the current Monday-to-Sunday week
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Epic Run Contributors

use crate::database::Database;
use chrono::{Datelike, Days, Local, NaiveDate};
use epic_run_core::errors::AppResult;
use epic_run_core::models::{DailyActivity, Profile};
use serde::Serialize;
use uuid::Uuid;

/// Minutes expressed as hours and minutes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActiveTime {
    /// Whole hours
    pub hours: u64,
    /// Remaining minutes
    pub minutes: u64,
}

impl ActiveTime {
    /// Split a minute count
    #[must_use]
    pub const fn from_minutes(total: u64) -> Self {
        Self {
            hours: total / 60,
            minutes: total % 60,
        }
    }
}

/// Distance for one day of the current week
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekDay {
    /// Calendar day
    pub day: NaiveDate,
    /// Short weekday label ("Mon".."Sun")
    pub label: String,
    /// Kilometers that day
    pub distance_km: f64,
}

/// Aggregate statistics for one user
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsSummary {
    /// Kilometers across the whole ledger
    pub total_distance_km: f64,
    /// Lifetime steps
    pub total_steps: u64,
    /// Lifetime calories
    pub total_calories: u64,
    /// Lifetime active minutes
    pub total_active_minutes: u64,
    /// Lifetime active minutes as hours and minutes
    pub active_time: ActiveTime,
    /// Finished journeys
    pub journeys_completed: u32,
    /// Current run of active days
    pub current_streak: u32,
    /// Best run of active days
    pub longest_streak: u32,
    /// Monday through Sunday of the week containing `today`
    pub week: Vec<WeekDay>,
    /// Kilometers this week
    pub week_total_km: f64,
    /// Kilometers per day this week
    pub daily_average_km: f64,
}

/// Build the summary for the week containing `today`
#[must_use]
pub fn summarize(profile: &Profile, ledger: &[DailyActivity], today: NaiveDate) -> StatsSummary {
    let monday = week_start(today);
    let week: Vec<WeekDay> = (0..7)
        .filter_map(|offset| monday.checked_add_days(Days::new(offset)))
        .map(|day| WeekDay {
            day,
            label: day.format("%a").to_string(),
            distance_km: round2(
                ledger
                    .iter()
                    .filter(|row| row.day == day)
                    .map(|row| row.distance_km)
                    .sum(),
            ),
        })
        .collect();

    let week_total_km = round2(week.iter().map(|d| d.distance_km).sum());

    StatsSummary {
        total_distance_km: round2(ledger.iter().map(|row| row.distance_km).sum()),
        total_steps: profile.total_steps,
        total_calories: profile.total_calories,
        total_active_minutes: profile.total_active_minutes,
        active_time: ActiveTime::from_minutes(profile.total_active_minutes),
        journeys_completed: profile.journeys_completed,
        current_streak: profile.current_streak,
        longest_streak: profile.longest_streak,
        daily_average_km: round2(week_total_km / 7.0),
        week_total_km,
        week,
    }
}

/// Load the profile and ledger and summarize them for the current local week
///
/// # Errors
///
/// Returns `ResourceNotFound` if the profile does not exist, or a database error
pub async fn stats_for(db: &Database, user_id: Uuid) -> AppResult<StatsSummary> {
    let profile = db.get_profile_required(user_id).await?;
    let ledger = db.list_all_daily_activity(user_id).await?;
    Ok(summarize(&profile, &ledger, Local::now().date_naive()))
}

/// Monday of the week containing `day`
#[must_use]
pub fn week_start(day: NaiveDate) -> NaiveDate {
    let offset = u64::from(day.weekday().num_days_from_monday());
    day.checked_sub_days(Days::new(offset)).unwrap_or(day)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use epic_run_core::models::NewProfile;

    fn ledger_row(day: NaiveDate, km: f64) -> DailyActivity {
        DailyActivity {
            distance_km: km,
            ..DailyActivity::empty(Uuid::nil(), day)
        }
    }

    #[test]
    fn test_week_start_is_monday() {
        // 2025-06-12 is a Thursday
        let thursday = NaiveDate::from_ymd_opt(2025, 6, 12).unwrap();
        assert_eq!(week_start(thursday), NaiveDate::from_ymd_opt(2025, 6, 9).unwrap());
        let monday = NaiveDate::from_ymd_opt(2025, 6, 9).unwrap();
        assert_eq!(week_start(monday), monday);
    }

    #[test]
    fn test_active_time_split() {
        assert_eq!(
            ActiveTime::from_minutes(125),
            ActiveTime {
                hours: 2,
                minutes: 5
            }
        );
    }

    #[test]
    fn test_summary_week_and_totals() {
        let mut profile = Profile::new(NewProfile {
            id: Uuid::nil(),
            email: None,
            full_name: None,
            avatar_url: None,
        }, Utc::now());
        profile.total_steps = 12_000;
        profile.total_active_minutes = 90;

        let today = NaiveDate::from_ymd_opt(2025, 6, 12).unwrap();
        let ledger = vec![
            ledger_row(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(), 5.0),
            ledger_row(NaiveDate::from_ymd_opt(2025, 6, 9).unwrap(), 3.5),
            ledger_row(NaiveDate::from_ymd_opt(2025, 6, 11).unwrap(), 3.5),
        ];

        let summary = summarize(&profile, &ledger, today);
        assert_eq!(summary.week.len(), 7);
        assert_eq!(summary.week[0].label, "Mon");
        assert_eq!(summary.week[6].label, "Sun");
        assert!((summary.week_total_km - 7.0).abs() < f64::EPSILON);
        assert!((summary.daily_average_km - 1.0).abs() < f64::EPSILON);
        assert!((summary.total_distance_km - 12.0).abs() < f64::EPSILON);
        assert_eq!(summary.total_steps, 12_000);
        assert_eq!(summary.active_time.hours, 1);
        assert_eq!(summary.active_time.minutes, 30);
    }
}
