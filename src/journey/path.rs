// ABOUTME: Journey position model turning start, end, and progress into a discrete path
// ABOUTME: Linear lat/lng interpolation plus current-position lookup by progress percent
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Epic Run Contributors

//! # Journey Position Model
//!
//! A journey path is `N + 1` coordinates evenly spaced between the start and
//! the destination by straight-line interpolation in latitude/longitude space
//! (no great-circle or antimeridian handling). The current position is the path
//! point at `floor(percent / 100 * N)`, clamped to `N`, so it is always one of
//! the discrete points.
//!
//! Paths are derived on demand and never persisted.

use epic_run_core::constants::journey::{MAX_PROGRESS_PERCENT, PATH_SEGMENTS};
use epic_run_core::models::Coordinate;
use serde::Serialize;
use std::num::NonZeroUsize;

/// Default segment count as a `NonZeroUsize`
pub const DEFAULT_SEGMENTS: NonZeroUsize = match NonZeroUsize::new(PATH_SEGMENTS) {
    Some(n) => n,
    None => unreachable!(),
};

/// An interpolated journey path with the traveler's current position
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JourneyPath {
    coordinates: Vec<Coordinate>,
    current_index: usize,
}

impl JourneyPath {
    /// Build the default 50-segment path for a progress percentage
    #[must_use]
    pub fn new(start: Coordinate, end: Coordinate, progress_percent: f64) -> Self {
        Self::with_segments(start, end, progress_percent, DEFAULT_SEGMENTS)
    }

    /// Build a path with a custom segment count
    ///
    /// `progress_percent` is clamped into `[0, 100]`; NaN is treated as 0.
    #[must_use]
    pub fn with_segments(
        start: Coordinate,
        end: Coordinate,
        progress_percent: f64,
        segments: NonZeroUsize,
    ) -> Self {
        let n = segments.get();
        let coordinates = (0..=n)
            .map(|i| {
                if i == 0 {
                    start
                } else if i == n {
                    end
                } else {
                    start.lerp(end, i as f64 / n as f64)
                }
            })
            .collect();

        Self {
            coordinates,
            current_index: position_index(progress_percent, segments),
        }
    }

    /// All path points, start first
    #[must_use]
    pub fn coordinates(&self) -> &[Coordinate] {
        &self.coordinates
    }

    /// Number of segments (one less than the number of points)
    #[must_use]
    pub fn segments(&self) -> usize {
        self.coordinates.len() - 1
    }

    /// Index of the current position within [`Self::coordinates`]
    #[must_use]
    pub const fn current_index(&self) -> usize {
        self.current_index
    }

    /// The traveler's current position
    #[must_use]
    pub fn current_position(&self) -> Coordinate {
        self.coordinates[self.current_index]
    }

    /// Path points already travelled, start through current position inclusive
    #[must_use]
    pub fn completed(&self) -> &[Coordinate] {
        &self.coordinates[..=self.current_index]
    }

    /// Path points in GeoJSON `[lng, lat]` order
    #[must_use]
    pub fn to_lng_lat(&self) -> Vec<[f64; 2]> {
        self.coordinates.iter().map(|c| c.to_lng_lat()).collect()
    }
}

/// Path index for a progress percentage over `segments` segments
///
/// Always in `0..=segments`.
#[must_use]
pub fn position_index(progress_percent: f64, segments: NonZeroUsize) -> usize {
    let n = segments.get();
    let percent = clamp_percent(progress_percent);
    let index = (percent / MAX_PROGRESS_PERCENT * n as f64).floor() as usize;
    index.min(n)
}

/// Clamp a percentage into `[0, 100]`, mapping NaN to 0
#[must_use]
pub fn clamp_percent(percent: f64) -> f64 {
    if percent.is_nan() {
        0.0
    } else {
        percent.clamp(0.0, MAX_PROGRESS_PERCENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LONDON: Coordinate = Coordinate::new(51.5074, -0.1278);
    const HOGWARTS: Coordinate = Coordinate::new(56.4907, -5.6076);

    #[test]
    fn test_path_has_segments_plus_one_points() {
        let path = JourneyPath::new(LONDON, HOGWARTS, 0.0);
        assert_eq!(path.coordinates().len(), 51);
        assert_eq!(path.segments(), 50);
        assert_eq!(path.coordinates()[0], LONDON);
        assert_eq!(path.coordinates()[50], HOGWARTS);
    }

    #[test]
    fn test_zero_progress_is_start() {
        let path = JourneyPath::new(LONDON, HOGWARTS, 0.0);
        assert_eq!(path.current_index(), 0);
        assert_eq!(path.current_position(), LONDON);
        assert_eq!(path.completed(), &[LONDON]);
    }

    #[test]
    fn test_full_progress_is_destination() {
        let path = JourneyPath::new(LONDON, HOGWARTS, 100.0);
        assert_eq!(path.current_index(), 50);
        assert_eq!(path.current_position(), HOGWARTS);
        assert_eq!(path.completed().len(), 51);
    }

    #[test]
    fn test_half_progress_is_midpoint() {
        let path = JourneyPath::new(LONDON, HOGWARTS, 50.0);
        assert_eq!(path.current_index(), 25);

        let current = path.current_position();
        let mid_lat = (LONDON.lat + HOGWARTS.lat) / 2.0;
        let mid_lng = (LONDON.lng + HOGWARTS.lng) / 2.0;
        assert!((current.lat - mid_lat).abs() < 1e-9);
        assert!((current.lng - mid_lng).abs() < 1e-9);
    }

    #[test]
    fn test_out_of_range_progress_is_clamped() {
        assert_eq!(position_index(-20.0, DEFAULT_SEGMENTS), 0);
        assert_eq!(position_index(250.0, DEFAULT_SEGMENTS), 50);
        assert_eq!(position_index(f64::NAN, DEFAULT_SEGMENTS), 0);
        assert_eq!(position_index(f64::INFINITY, DEFAULT_SEGMENTS), 50);
    }

    #[test]
    fn test_index_is_monotonic_in_progress() {
        let mut previous = 0;
        for step in 0..=1000 {
            let index = position_index(f64::from(step) / 10.0, DEFAULT_SEGMENTS);
            assert!(index >= previous);
            previous = index;
        }
        assert_eq!(previous, 50);
    }

    #[test]
    fn test_single_segment_path() {
        let one = NonZeroUsize::MIN;
        let path = JourneyPath::with_segments(LONDON, HOGWARTS, 99.9, one);
        assert_eq!(path.coordinates(), &[LONDON, HOGWARTS]);
        assert_eq!(path.current_position(), LONDON);
    }

    #[test]
    fn test_geojson_order() {
        let path = JourneyPath::new(LONDON, HOGWARTS, 0.0);
        assert_eq!(path.to_lng_lat()[0], [-0.1278, 51.5074]);
    }
}
