// ABOUTME: Unit conversion constants for distance and time
// ABOUTME: Provides named constants to eliminate magic numbers in calculations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Epic Run Contributors

/// Meters per kilometer conversion factor
pub const METERS_PER_KM: f64 = 1000.0;

/// Minutes per hour
pub const MINUTES_PER_HOUR: u64 = 60;

/// Days per week
pub const DAYS_PER_WEEK: usize = 7;
