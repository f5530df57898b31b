// ABOUTME: Onboarding option lists and the onboarding completion update
// ABOUTME: Validates the chosen daily step goal against the offered values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Epic Run Contributors

use crate::database::Database;
use epic_run_core::constants::onboarding::DAILY_STEP_GOALS;
use epic_run_core::errors::{AppError, AppResult};
use epic_run_core::models::{FitnessLevel, Profile, ProfileUpdate, WeeklyGoal};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

/// Weekly goal with its distance range
#[derive(Debug, Clone, Serialize)]
pub struct WeeklyGoalOption {
    /// Goal value
    pub value: WeeklyGoal,
    /// Lower bound in km per week
    pub min_km: u32,
    /// Upper bound in km per week, open-ended when absent
    pub max_km: Option<u32>,
}

/// Everything the onboarding flow offers
#[derive(Debug, Clone, Serialize)]
pub struct OnboardingOptions {
    /// Selectable fitness levels
    pub fitness_levels: Vec<FitnessLevel>,
    /// Selectable weekly goals
    pub weekly_goals: Vec<WeeklyGoalOption>,
    /// Selectable daily step goals
    pub daily_step_goals: Vec<u32>,
}

/// Answers collected by the onboarding flow
#[derive(Debug, Clone, Deserialize)]
pub struct OnboardingRequest {
    /// Self-assessed level
    pub fitness_level: FitnessLevel,
    /// Weekly distance target
    pub weekly_goal: WeeklyGoal,
    /// Daily step target
    pub daily_step_goal: u32,
    /// Whether health data sync was enabled
    #[serde(default)]
    pub apple_health_connected: bool,
}

/// Static option lists
#[must_use]
pub fn options() -> OnboardingOptions {
    OnboardingOptions {
        fitness_levels: FitnessLevel::ALL.to_vec(),
        weekly_goals: WeeklyGoal::ALL
            .iter()
            .map(|&value| {
                let (min_km, max_km) = value.km_range();
                WeeklyGoalOption {
                    value,
                    min_km,
                    max_km,
                }
            })
            .collect(),
        daily_step_goals: DAILY_STEP_GOALS.to_vec(),
    }
}

/// Convert onboarding answers into a partial profile update
///
/// # Errors
///
/// Returns `InvalidInput` when the step goal is not one of the offered values
pub fn onboarding_update(request: &OnboardingRequest) -> AppResult<ProfileUpdate> {
    if !DAILY_STEP_GOALS.contains(&request.daily_step_goal) {
        return Err(AppError::invalid_input(format!(
            "Daily step goal {} is not one of the offered values",
            request.daily_step_goal
        ))
        .with_details(serde_json::json!({ "allowed": DAILY_STEP_GOALS })));
    }

    Ok(ProfileUpdate {
        fitness_level: Some(request.fitness_level),
        weekly_goal: Some(request.weekly_goal),
        daily_step_goal: Some(request.daily_step_goal),
        apple_health_connected: Some(request.apple_health_connected),
        onboarding_completed: Some(true),
        ..ProfileUpdate::default()
    })
}

/// Store onboarding answers and mark onboarding complete
///
/// # Errors
///
/// Returns `InvalidInput` for an unlisted step goal and `ResourceNotFound` if
/// the profile does not exist
pub async fn complete_onboarding(
    db: &Database,
    user_id: Uuid,
    request: &OnboardingRequest,
) -> AppResult<Profile> {
    let update = onboarding_update(request)?;
    let profile = db.update_profile(user_id, &update).await?;
    info!(%user_id, fitness_level = %request.fitness_level, "Onboarding completed");
    Ok(profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use epic_run_core::errors::ErrorCode;

    fn request(goal: u32) -> OnboardingRequest {
        OnboardingRequest {
            fitness_level: FitnessLevel::Intermediate,
            weekly_goal: WeeklyGoal::Moderate,
            daily_step_goal: goal,
            apple_health_connected: true,
        }
    }

    #[test]
    fn test_options_lists() {
        let opts = options();
        assert_eq!(opts.fitness_levels.len(), 4);
        assert_eq!(opts.weekly_goals.len(), 4);
        assert_eq!(opts.daily_step_goals, vec![5000, 7500, 10_000, 12_500, 15_000]);
        assert_eq!(opts.weekly_goals[3].max_km, None);
    }

    #[test]
    fn test_update_marks_onboarding_complete() {
        let update = onboarding_update(&request(7500)).unwrap();
        assert_eq!(update.onboarding_completed, Some(true));
        assert_eq!(update.daily_step_goal, Some(7500));
        assert_eq!(update.apple_health_connected, Some(true));
        assert_eq!(update.current_destination_id, None);
    }

    #[test]
    fn test_unlisted_step_goal_rejected() {
        let err = onboarding_update(&request(8000)).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
    }
}
