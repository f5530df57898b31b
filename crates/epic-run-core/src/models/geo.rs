// ABOUTME: Geographic coordinate value type used for journey paths and markers
// ABOUTME: Latitude/longitude in degrees with GeoJSON position conversion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Epic Run Contributors

use serde::{Deserialize, Serialize};

/// A latitude/longitude pair in floating point degrees
///
/// # Examples
///
/// ```rust
/// use epic_run_core::models::Coordinate;
///
/// let london = Coordinate::new(51.5074, -0.1278);
/// assert_eq!(london.to_lng_lat(), [-0.1278, 51.5074]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lng: f64,
}

impl Coordinate {
    /// Create a coordinate from latitude and longitude
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Linear interpolation towards `other` at parameter `t` in `[0, 1]`
    ///
    /// Computed as `self + (other - self) * t` on each axis. Callers that need
    /// an exact endpoint at `t == 1` should use `other` directly.
    #[must_use]
    #[allow(clippy::suboptimal_flops)]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self {
            lat: self.lat + (other.lat - self.lat) * t,
            lng: self.lng + (other.lng - self.lng) * t,
        }
    }

    /// GeoJSON position order (`[lng, lat]`)
    #[must_use]
    pub const fn to_lng_lat(self) -> [f64; 2] {
        [self.lng, self.lat]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[allow(clippy::float_cmp)]
    fn test_lerp_matches_plain_formula() {
        let london = Coordinate::new(51.5074, -0.1278);
        let far = Coordinate::new(-33.8688, 151.2093);

        for t in [0.02, 0.5, 0.74, 0.98] {
            let point = london.lerp(far, t);
            assert_eq!(point.lat, london.lat + (far.lat - london.lat) * t);
            assert_eq!(point.lng, london.lng + (far.lng - london.lng) * t);
        }
        assert_eq!(london.lerp(far, 0.0), london);
    }
}
