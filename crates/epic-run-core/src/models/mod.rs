// ABOUTME: Core data models shared by the journey model, health sync, and profile store
// ABOUTME: Re-exports coordinate, destination, profile, and health data types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Epic Run Contributors

//! # Data Models
//!
//! - **Coordinate**: immutable latitude/longitude pair
//! - **Destination**: a fantasy destination and the real-world distance needed to reach it
//! - **Profile**: the per-user row of preferences, goals, and cumulative stats
//! - **HealthData**: the aggregate returned by a health data sync

mod destination;
mod geo;
mod health;
mod profile;

pub use destination::{Destination, Difficulty};
pub use geo::Coordinate;
pub use health::{DailyActivity, HealthData, HealthDataType, HealthSample};
pub use profile::{CompletedJourney, FitnessLevel, NewProfile, Profile, ProfileUpdate, WeeklyGoal};
