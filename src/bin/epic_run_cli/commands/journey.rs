// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Epic Run Contributors
// ABOUTME: Offline journey commands for epic-run-cli
// ABOUTME: Lists destinations and computes progress, positions, and map overlays

use crate::helpers::display;
use anyhow::Result;
use epic_run_server::journey::{
    destination, JourneyPath, JourneyProgress, MapOverlay, DESTINATIONS, START_LOCATION,
    START_NAME,
};

pub fn list_destinations() {
    println!("Journeys start in {START_NAME} ({})", display::coordinate(START_LOCATION));
    println!("{}", "=".repeat(72));
    for d in &DESTINATIONS {
        println!(
            "{:<10} {:<24} {:>6.0} km  {:<6} ~{} days  ({})",
            d.id,
            d.name,
            d.distance_km,
            d.difficulty,
            d.estimated_days,
            d.franchise
        );
    }
}

pub fn show_progress(destination_id: &str, covered_km: f64, show_path: bool) -> Result<()> {
    let target = destination(destination_id)?;
    let progress = JourneyProgress::new(target.distance_km, covered_km);
    let path = JourneyPath::new(START_LOCATION, target.coordinate, progress.percent);

    println!("{START_NAME} -> {} ({})", target.name, target.franchise);
    display::progress(&progress);
    println!(
        "Position: point {}/{} at {}",
        path.current_index(),
        path.segments(),
        display::coordinate(path.current_position())
    );

    if show_path {
        for (index, point) in path.coordinates().iter().enumerate() {
            let marker = if index == path.current_index() { "*" } else { " " };
            println!("{marker} {index:>3}  {}", display::coordinate(*point));
        }
    }
    Ok(())
}

pub fn print_map_overlay(destination_id: &str, covered_km: f64) -> Result<()> {
    let target = destination(destination_id)?;
    let overlay = MapOverlay::build(target, covered_km);
    println!("{}", serde_json::to_string_pretty(&overlay)?);
    Ok(())
}
