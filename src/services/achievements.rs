// ABOUTME: Achievement definitions and unlock evaluation from ledger and journey history
// ABOUTME: Eight badges across four rarity tiers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Epic Run Contributors

use crate::database::Database;
use crate::journey::DESTINATIONS;
use chrono::{DateTime, Utc};
use epic_run_core::errors::AppResult;
use epic_run_core::models::{CompletedJourney, DailyActivity, Profile};
use serde::Serialize;
use std::collections::HashSet;
use uuid::Uuid;

/// Badge tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    /// Reached early by most runners
    Common,
    /// Takes sustained effort
    Rare,
    /// Demanding
    Epic,
    /// Long-term goals
    Legendary,
}

/// An achievement and whether it is unlocked
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Achievement {
    /// Stable identifier
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// Unlock condition
    pub description: &'static str,
    /// Icon name
    pub icon: &'static str,
    /// Tier
    pub rarity: Rarity,
    /// Whether the condition is met
    pub unlocked: bool,
    /// Known unlock time for journey-based badges
    pub unlocked_at: Option<DateTime<Utc>>,
}

/// Facts the unlock conditions are evaluated against
#[derive(Debug, Clone, Default)]
pub struct AchievementFacts<'a> {
    /// Kilometers across the ledger
    pub total_distance_km: f64,
    /// Best single-day distance
    pub best_day_km: f64,
    /// Best streak
    pub longest_streak: u32,
    /// Journey history, oldest first
    pub completed: &'a [CompletedJourney],
}

impl<'a> AchievementFacts<'a> {
    /// Collect facts from stored rows
    #[must_use]
    pub fn from_records(
        profile: &Profile,
        ledger: &[DailyActivity],
        completed: &'a [CompletedJourney],
    ) -> Self {
        Self {
            total_distance_km: ledger.iter().map(|row| row.distance_km).sum(),
            best_day_km: ledger.iter().map(|row| row.distance_km).fold(0.0, f64::max),
            longest_streak: profile.longest_streak.max(profile.current_streak),
            completed,
        }
    }

    fn first_completion(&self, destination_id: &str) -> Option<DateTime<Utc>> {
        self.completed
            .iter()
            .find(|j| j.destination_id == destination_id)
            .map(|j| j.completed_at)
    }

    /// Time the last not-yet-seen destination was completed, once all are done
    fn all_destinations_completed_at(&self) -> Option<DateTime<Utc>> {
        let mut remaining: HashSet<&str> = DESTINATIONS.iter().map(|d| d.id).collect();
        for journey in self.completed {
            remaining.remove(journey.destination_id.as_str());
            if remaining.is_empty() {
                return Some(journey.completed_at);
            }
        }
        None
    }
}

/// Evaluate every achievement
#[must_use]
pub fn evaluate(facts: &AchievementFacts<'_>) -> Vec<Achievement> {
    let first_journey = facts.completed.first().map(|j| j.completed_at);
    let mordor = facts.first_completion("mordor");
    let all_realms = facts.all_destinations_completed_at();

    vec![
        badge(
            "first-steps",
            "First Steps",
            "Complete your first 1 km",
            "footprints",
            Rarity::Common,
            facts.total_distance_km >= 1.0,
            None,
        ),
        badge(
            "marathon-hero",
            "Marathon Hero",
            "Run a total of 42.2 km",
            "medal",
            Rarity::Rare,
            facts.total_distance_km >= 42.2,
            None,
        ),
        badge(
            "week-warrior",
            "Week Warrior",
            "Maintain a 7-day streak",
            "flame",
            Rarity::Common,
            facts.longest_streak >= 7,
            None,
        ),
        badge(
            "fantasy-explorer",
            "Fantasy Explorer",
            "Complete your first journey",
            "map",
            Rarity::Rare,
            first_journey.is_some(),
            first_journey,
        ),
        badge(
            "lightning-runner",
            "Lightning Runner",
            "Run 10 km in a single day",
            "zap",
            Rarity::Epic,
            facts.best_day_km >= 10.0,
            None,
        ),
        badge(
            "century-club",
            "Century Club",
            "Run a total of 100 km",
            "star",
            Rarity::Epic,
            facts.total_distance_km >= 100.0,
            None,
        ),
        badge(
            "fellowship",
            "The Fellowship",
            "Complete the journey to Mordor",
            "crown",
            Rarity::Legendary,
            mordor.is_some(),
            mordor,
        ),
        badge(
            "realm-walker",
            "Realm Walker",
            "Complete all available journeys",
            "trophy",
            Rarity::Legendary,
            all_realms.is_some(),
            all_realms,
        ),
    ]
}

/// Load a user's records and evaluate their achievements
///
/// # Errors
///
/// Returns `ResourceNotFound` if the profile does not exist, or a database error
pub async fn achievements_for(db: &Database, user_id: Uuid) -> AppResult<Vec<Achievement>> {
    let profile = db.get_profile_required(user_id).await?;
    let ledger = db.list_all_daily_activity(user_id).await?;
    let completed = db.list_completed_journeys(user_id).await?;
    Ok(evaluate(&AchievementFacts::from_records(
        &profile, &ledger, &completed,
    )))
}

const fn badge(
    id: &'static str,
    name: &'static str,
    description: &'static str,
    icon: &'static str,
    rarity: Rarity,
    unlocked: bool,
    unlocked_at: Option<DateTime<Utc>>,
) -> Achievement {
    Achievement {
        id,
        name,
        description,
        icon,
        rarity,
        unlocked,
        unlocked_at,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn completed(ids: &[&str]) -> Vec<CompletedJourney> {
        ids.iter()
            .map(|id| CompletedJourney {
                user_id: Uuid::nil(),
                destination_id: (*id).to_owned(),
                completed_at: Utc::now(),
            })
            .collect()
    }

    fn unlocked_ids(achievements: &[Achievement]) -> Vec<&'static str> {
        achievements
            .iter()
            .filter(|a| a.unlocked)
            .map(|a| a.id)
            .collect()
    }

    #[test]
    fn test_nothing_unlocked_for_new_runner() {
        let achievements = evaluate(&AchievementFacts::default());
        assert_eq!(achievements.len(), 8);
        assert!(unlocked_ids(&achievements).is_empty());
    }

    #[test]
    fn test_distance_badges() {
        let facts = AchievementFacts {
            total_distance_km: 50.0,
            best_day_km: 12.0,
            ..AchievementFacts::default()
        };
        assert_eq!(
            unlocked_ids(&evaluate(&facts)),
            vec!["first-steps", "marathon-hero", "lightning-runner"]
        );
    }

    #[test]
    fn test_journey_badges() {
        let history = completed(&["hogwarts", "mordor"]);
        let facts = AchievementFacts {
            completed: &history,
            ..AchievementFacts::default()
        };
        let achievements = evaluate(&facts);
        let ids = unlocked_ids(&achievements);
        assert!(ids.contains(&"fantasy-explorer"));
        assert!(ids.contains(&"fellowship"));
        assert!(!ids.contains(&"realm-walker"));

        let fellowship = achievements.iter().find(|a| a.id == "fellowship").unwrap();
        assert_eq!(fellowship.unlocked_at, Some(history[1].completed_at));
    }

    #[test]
    fn test_realm_walker_requires_every_destination() {
        let all: Vec<&str> = DESTINATIONS.iter().map(|d| d.id).collect();
        let history = completed(&all);
        let facts = AchievementFacts {
            completed: &history,
            ..AchievementFacts::default()
        };
        assert!(unlocked_ids(&evaluate(&facts)).contains(&"realm-walker"));
    }

    #[test]
    fn test_rarity_ordering() {
        assert!(Rarity::Common < Rarity::Legendary);
        assert_eq!(serde_json::to_string(&Rarity::Epic).unwrap(), "\"epic\"");
    }
}
