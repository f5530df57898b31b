// ABOUTME: Fantasy destination model with real-world distance and difficulty rating
// ABOUTME: Destinations are static catalog entries referenced by id from profiles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Epic Run Contributors

use super::Coordinate;
use crate::errors::AppError;
use serde::Serialize;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

/// Difficulty rating of a destination
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum Difficulty {
    /// Up to a couple of weeks of casual running
    Easy,
    /// A few weeks of regular running
    Medium,
    /// Two months of consistent training
    Hard,
    /// Multi-month commitment
    Epic,
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.pad(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            "epic" => Ok(Self::Epic),
            _ => Err(AppError::invalid_input(format!("Invalid difficulty: {s}"))),
        }
    }
}

impl Difficulty {
    /// Display label
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
            Self::Epic => "Epic",
        }
    }
}

/// A fantasy destination reachable by accumulating real-world running distance
///
/// The distance is a property of the destination itself and is not derived from
/// the great-circle distance between the start and the destination coordinate.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct Destination {
    /// Stable identifier (e.g. `mordor`)
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// Franchise the destination belongs to
    pub franchise: &'static str,
    /// Total journey distance in kilometers
    pub distance_km: f64,
    /// Short flavor text
    pub description: &'static str,
    /// Relative path of the destination artwork
    pub image: &'static str,
    /// Difficulty rating
    pub difficulty: Difficulty,
    /// Expected number of days at a typical pace
    pub estimated_days: u32,
    /// Map coordinate of the destination marker
    pub coordinate: Coordinate,
}
