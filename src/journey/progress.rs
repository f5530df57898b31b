// ABOUTME: Progress computation for a journey from total and covered distance
// ABOUTME: Percentage capped at 100, remaining distance floored at 0, completion flag
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Epic Run Contributors

use super::path::clamp_percent;
use epic_run_core::constants::journey::MAX_PROGRESS_PERCENT;
use serde::Serialize;

/// Progress of a traveler along a journey
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct JourneyProgress {
    /// Total journey distance in kilometers
    pub total_km: f64,
    /// Distance covered in kilometers, as reported
    pub covered_km: f64,
    /// Completion percentage in `[0, 100]`
    pub percent: f64,
    /// Kilometers left, never negative
    pub remaining_km: f64,
    /// Whether the covered distance reaches the total
    pub is_complete: bool,
}

impl JourneyProgress {
    /// Compute progress for `covered_km` out of `total_km`
    ///
    /// A non-positive total counts as already complete.
    #[must_use]
    pub fn new(total_km: f64, covered_km: f64) -> Self {
        let covered = if covered_km.is_nan() {
            0.0
        } else {
            covered_km.max(0.0)
        };

        if total_km <= 0.0 || total_km.is_nan() {
            return Self {
                total_km,
                covered_km: covered,
                percent: MAX_PROGRESS_PERCENT,
                remaining_km: 0.0,
                is_complete: true,
            };
        }

        Self {
            total_km,
            covered_km: covered,
            percent: clamp_percent(covered / total_km * MAX_PROGRESS_PERCENT),
            remaining_km: (total_km - covered).max(0.0),
            is_complete: covered >= total_km,
        }
    }

    /// Progress as a fraction in `[0, 1]`
    #[must_use]
    pub fn fraction(&self) -> f64 {
        self.percent / MAX_PROGRESS_PERCENT
    }
}
