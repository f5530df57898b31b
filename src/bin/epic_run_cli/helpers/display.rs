// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Epic Run Contributors
// ABOUTME: Output formatting helpers for epic-run-cli
// ABOUTME: Consistent display of profiles, progress, stats, achievements, and sync state

use epic_run_server::health_sync::SyncStatus;
use epic_run_server::journey::{find_destination, JourneyProgress};
use epic_run_server::models::{Coordinate, HealthData, Profile};
use epic_run_server::services::achievements::Achievement;
use epic_run_server::services::progress::ProgressOutcome;
use epic_run_server::services::stats::StatsSummary;

pub fn coordinate(point: Coordinate) -> String {
    format!("{:.4}, {:.4}", point.lat, point.lng)
}

pub fn progress(progress: &JourneyProgress) {
    println!(
        "Progress: {:.1}% ({:.1} of {:.0} km, {:.1} km to go){}",
        progress.percent,
        progress.covered_km,
        progress.total_km,
        progress.remaining_km,
        if progress.is_complete { " - complete!" } else { "" }
    );
}

pub fn profile(profile: &Profile) {
    println!("\nProfile {}", profile.id);
    println!("{}", "=".repeat(50));
    println!(
        "   Name: {}",
        profile.full_name.as_deref().unwrap_or("(not set)")
    );
    if let Some(level) = profile.fitness_level {
        println!("   Fitness Level: {level}");
    }
    println!("   Daily Step Goal: {}", profile.daily_step_goal);
    match profile
        .current_destination_id
        .as_deref()
        .and_then(find_destination)
    {
        Some(target) => {
            println!("   Journey: {} ({})", target.name, target.franchise);
            progress(&JourneyProgress::new(
                target.distance_km,
                profile.distance_covered,
            ));
        }
        None => println!("   Journey: none active"),
    }
    println!(
        "   Journeys Completed: {}  Streak: {} (best {})",
        profile.journeys_completed, profile.current_streak, profile.longest_streak
    );
}

pub fn outcome(outcome: &ProgressOutcome) {
    profile(&outcome.profile);
    if let Some(journey) = &outcome.completed_journey {
        println!(
            "\nJourney to {} completed at {}!",
            journey.destination_id,
            journey.completed_at.format("%Y-%m-%d %H:%M UTC")
        );
    }
}

pub fn stats(summary: &StatsSummary) {
    println!("\nStats");
    println!("{}", "=".repeat(50));
    println!("   Total Distance: {:.1} km", summary.total_distance_km);
    println!("   Total Steps: {}", summary.total_steps);
    println!("   Calories: {}", summary.total_calories);
    println!(
        "   Active Time: {}h {}m",
        summary.active_time.hours, summary.active_time.minutes
    );
    println!("   This Week:");
    for day in &summary.week {
        println!("      {} {:>6.1} km", day.label, day.distance_km);
    }
    println!(
        "   Week Total: {:.1} km (avg {:.1} km/day)",
        summary.week_total_km, summary.daily_average_km
    );
}

pub fn achievements(achievements: &[Achievement]) {
    let unlocked = achievements.iter().filter(|a| a.unlocked).count();
    println!("\nAchievements ({unlocked} of {} unlocked)", achievements.len());
    println!("{}", "=".repeat(50));
    for a in achievements {
        println!(
            "   [{}] {:<18} {:?}  {}",
            if a.unlocked { "x" } else { " " },
            a.name,
            a.rarity,
            a.description
        );
    }
}

pub fn health_data(data: &HealthData) {
    println!(
        "   {} steps, {:.2} km, {} kcal, {} active min (synced {})",
        data.steps,
        data.distance_km,
        data.calories,
        data.active_minutes,
        data.last_sync_time.format("%H:%M:%S UTC")
    );
}

pub fn sync_status(status: &SyncStatus) {
    println!("\nHealth sync status");
    println!("   Available: {}", status.is_available);
    println!("   Authorized: {}", status.is_authorized);
    if let Some(error) = &status.last_error {
        println!("   Last Error: {error}");
    }
}
