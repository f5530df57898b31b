// ABOUTME: User profile models for preferences, goals, and cumulative journey statistics
// ABOUTME: Profile row, creation payload, partial update, and completed journey record
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Epic Run Contributors

use crate::constants::onboarding::DEFAULT_DAILY_STEP_GOAL;
use crate::errors::AppError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;
use uuid::Uuid;

/// Self-reported running experience
#[non_exhaustive]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FitnessLevel {
    /// New to running or returning after a break
    Beginner,
    /// Runs regularly, 2-3 times per week
    Intermediate,
    /// Experienced runner with consistent training
    Advanced,
    /// Competitive runner or fitness professional
    Athlete,
}

impl Display for FitnessLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for FitnessLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            "athlete" => Ok(Self::Athlete),
            _ => Err(AppError::invalid_input(format!("Invalid fitness level: {s}"))),
        }
    }
}

impl FitnessLevel {
    /// Every level in ascending order of experience
    pub const ALL: [Self; 4] = [
        Self::Beginner,
        Self::Intermediate,
        Self::Advanced,
        Self::Athlete,
    ];

    /// Database string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
            Self::Athlete => "athlete",
        }
    }
}

/// Weekly running volume the user is aiming for
#[non_exhaustive]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WeeklyGoal {
    /// 10-20 km per week
    Light,
    /// 20-40 km per week
    Moderate,
    /// 40-60 km per week
    Active,
    /// 60+ km per week
    Intense,
}

impl Display for WeeklyGoal {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for WeeklyGoal {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "moderate" => Ok(Self::Moderate),
            "active" => Ok(Self::Active),
            "intense" => Ok(Self::Intense),
            _ => Err(AppError::invalid_input(format!("Invalid weekly goal: {s}"))),
        }
    }
}

impl WeeklyGoal {
    /// Every goal in ascending order of volume
    pub const ALL: [Self; 4] = [Self::Light, Self::Moderate, Self::Active, Self::Intense];

    /// Database string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Moderate => "moderate",
            Self::Active => "active",
            Self::Intense => "intense",
        }
    }

    /// Weekly kilometer range (`None` upper bound means open-ended)
    #[must_use]
    pub const fn km_range(&self) -> (u32, Option<u32>) {
        match self {
            Self::Light => (10, Some(20)),
            Self::Moderate => (20, Some(40)),
            Self::Active => (40, Some(60)),
            Self::Intense => (60, None),
        }
    }
}

/// One row of the profile store, keyed by user identity
///
/// Reads always return the full row. Cumulative totals are only ever
/// increased by the progress service; the destination pointer is cleared
/// when a journey completes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    /// User identity
    pub id: Uuid,
    /// Contact email
    pub email: Option<String>,
    /// Display name
    pub full_name: Option<String>,
    /// Avatar image URL
    pub avatar_url: Option<String>,
    /// Self-reported fitness level (set during onboarding)
    pub fitness_level: Option<FitnessLevel>,
    /// Weekly volume goal (set during onboarding)
    pub weekly_goal: Option<WeeklyGoal>,
    /// Daily step target
    pub daily_step_goal: u32,
    /// Whether the user connected the on-device health platform
    pub apple_health_connected: bool,
    /// Whether the onboarding flow has been completed
    pub onboarding_completed: bool,
    /// Active journey destination, if any
    pub current_destination_id: Option<String>,
    /// Kilometers covered on the active journey
    pub distance_covered: f64,
    /// Lifetime step count
    pub total_steps: u64,
    /// Lifetime active calories
    pub total_calories: u64,
    /// Lifetime active minutes
    pub total_active_minutes: u64,
    /// Number of journeys finished
    pub journeys_completed: u32,
    /// Consecutive active days ending today or yesterday
    pub current_streak: u32,
    /// Best streak ever reached
    pub longest_streak: u32,
    /// Row creation time
    pub created_at: DateTime<Utc>,
    /// Last modification time
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    /// Build a fresh profile with default goals and zeroed statistics
    #[must_use]
    pub fn new(new_profile: NewProfile, now: DateTime<Utc>) -> Self {
        Self {
            id: new_profile.id,
            email: new_profile.email,
            full_name: new_profile.full_name,
            avatar_url: new_profile.avatar_url,
            fitness_level: None,
            weekly_goal: None,
            daily_step_goal: DEFAULT_DAILY_STEP_GOAL,
            apple_health_connected: false,
            onboarding_completed: false,
            current_destination_id: None,
            distance_covered: 0.0,
            total_steps: 0,
            total_calories: 0,
            total_active_minutes: 0,
            journeys_completed: 0,
            current_streak: 0,
            longest_streak: 0,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Payload for creating a profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProfile {
    /// User identity (generated when absent)
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    /// Contact email
    #[serde(default)]
    pub email: Option<String>,
    /// Display name
    #[serde(default)]
    pub full_name: Option<String>,
    /// Avatar image URL
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// Partial profile update
///
/// Only fields that are `Some` are written. Nullable columns use a nested
/// option so that `{"current_destination_id": null}` clears the column while
/// an absent key leaves it untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProfileUpdate {
    /// New email (`Some(None)` clears it)
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub email: Option<Option<String>>,
    /// New display name (`Some(None)` clears it)
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub full_name: Option<Option<String>>,
    /// New avatar URL (`Some(None)` clears it)
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<Option<String>>,
    /// New fitness level
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fitness_level: Option<FitnessLevel>,
    /// New weekly goal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weekly_goal: Option<WeeklyGoal>,
    /// New daily step goal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_step_goal: Option<u32>,
    /// Health platform connection flag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apple_health_connected: Option<bool>,
    /// Onboarding completion flag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub onboarding_completed: Option<bool>,
    /// New destination pointer (`Some(None)` clears it)
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub current_destination_id: Option<Option<String>>,
    /// New covered distance on the active journey
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_covered: Option<f64>,
    /// New lifetime step count
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_steps: Option<u64>,
    /// New lifetime calories
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_calories: Option<u64>,
    /// New lifetime active minutes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_active_minutes: Option<u64>,
    /// New completed journey count
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub journeys_completed: Option<u32>,
    /// New current streak
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_streak: Option<u32>,
    /// New longest streak
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longest_streak: Option<u32>,
}

impl ProfileUpdate {
    /// True when no field would change
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Apply the provided fields to an in-memory profile
    pub fn apply_to(&self, profile: &mut Profile) {
        if let Some(email) = &self.email {
            profile.email.clone_from(email);
        }
        if let Some(full_name) = &self.full_name {
            profile.full_name.clone_from(full_name);
        }
        if let Some(avatar_url) = &self.avatar_url {
            profile.avatar_url.clone_from(avatar_url);
        }
        if let Some(level) = self.fitness_level {
            profile.fitness_level = Some(level);
        }
        if let Some(goal) = self.weekly_goal {
            profile.weekly_goal = Some(goal);
        }
        if let Some(steps) = self.daily_step_goal {
            profile.daily_step_goal = steps;
        }
        if let Some(connected) = self.apple_health_connected {
            profile.apple_health_connected = connected;
        }
        if let Some(completed) = self.onboarding_completed {
            profile.onboarding_completed = completed;
        }
        if let Some(destination) = &self.current_destination_id {
            profile.current_destination_id.clone_from(destination);
        }
        if let Some(covered) = self.distance_covered {
            profile.distance_covered = covered;
        }
        if let Some(steps) = self.total_steps {
            profile.total_steps = steps;
        }
        if let Some(calories) = self.total_calories {
            profile.total_calories = calories;
        }
        if let Some(minutes) = self.total_active_minutes {
            profile.total_active_minutes = minutes;
        }
        if let Some(count) = self.journeys_completed {
            profile.journeys_completed = count;
        }
        if let Some(streak) = self.current_streak {
            profile.current_streak = streak;
        }
        if let Some(streak) = self.longest_streak {
            profile.longest_streak = streak;
        }
    }
}

/// Distinguishes an explicit `null` from an absent key
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// A finished journey
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CompletedJourney {
    /// Owner of the journey
    pub user_id: Uuid,
    /// Destination that was reached
    pub destination_id: String,
    /// Completion time
    pub completed_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_profile() -> Profile {
        Profile::new(
            NewProfile {
                id: Uuid::new_v4(),
                email: Some("frodo@shire.example".to_owned()),
                full_name: Some("Frodo Baggins".to_owned()),
                avatar_url: None,
            },
            Utc::now(),
        )
    }

    #[test]
    fn test_absent_and_null_fields_are_distinct() {
        let update: ProfileUpdate =
            serde_json::from_str(r#"{"current_destination_id": null, "daily_step_goal": 7500}"#)
                .unwrap();

        assert_eq!(update.current_destination_id, Some(None));
        assert_eq!(update.full_name, None);
        assert_eq!(update.daily_step_goal, Some(7500));
    }

    #[test]
    fn test_apply_only_touches_provided_fields() {
        let mut profile = sample_profile();
        profile.current_destination_id = Some("mordor".to_owned());

        let update = ProfileUpdate {
            weekly_goal: Some(WeeklyGoal::Active),
            ..ProfileUpdate::default()
        };
        update.apply_to(&mut profile);

        assert_eq!(profile.weekly_goal, Some(WeeklyGoal::Active));
        assert_eq!(profile.current_destination_id.as_deref(), Some("mordor"));
        assert_eq!(profile.full_name.as_deref(), Some("Frodo Baggins"));
    }

    #[test]
    fn test_empty_update() {
        assert!(ProfileUpdate::default().is_empty());
        let update: ProfileUpdate = serde_json::from_str("{}").unwrap();
        assert!(update.is_empty());
    }

    #[test]
    fn test_enum_round_trip_through_database_strings() {
        for level in FitnessLevel::ALL {
            assert_eq!(level.as_str().parse::<FitnessLevel>().unwrap(), level);
        }
        assert!("couch".parse::<WeeklyGoal>().is_err());
    }
}
