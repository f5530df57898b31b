// ABOUTME: Map overlay payload describing a journey for a map-rendering surface
// ABOUTME: Builds GeoJSON line sources, styled line layers, markers, and fit bounds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Epic Run Contributors

//! # Map Overlay
//!
//! Two GeoJSON line sources are produced for a journey: `journey-full` with the
//! whole path and `journey-completed` with the travelled prefix. Three line
//! layers style them (dashed grey remaining path, solid gold completed path and
//! a blurred gold glow). Markers are placed at the start, the current position
//! and the destination, and the view is fitted around all three.

use super::catalog::{START_LOCATION, START_NAME};
use super::path::JourneyPath;
use super::progress::JourneyProgress;
use epic_run_core::models::{Coordinate, Destination};
use serde::Serialize;
use serde_json::{json, Value};

/// Source id of the whole path
pub const FULL_SOURCE_ID: &str = "journey-full";
/// Source id of the travelled prefix
pub const COMPLETED_SOURCE_ID: &str = "journey-completed";

const REMAINING_COLOR: &str = "#4a5568";
const COMPLETED_COLOR: &str = "#d69e2e";
const FIT_PADDING: u32 = 60;
const FIT_MAX_ZOOM: u32 = 6;
const INITIAL_ZOOM: u32 = 3;
const INITIAL_PITCH: u32 = 30;

/// A GeoJSON source registered with the map
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverlaySource {
    /// Source id referenced by layers
    pub id: &'static str,
    /// GeoJSON `Feature` with a `LineString` geometry
    pub data: Value,
}

/// Paint properties of a line layer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinePaint {
    /// Line color as a hex string
    pub color: &'static str,
    /// Line width in pixels
    pub width: f64,
    /// Dash pattern, when dashed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dasharray: Option<[f64; 2]>,
    /// Blur radius in pixels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blur: Option<f64>,
    /// Opacity in `[0, 1]`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
}

/// A rendered line layer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineLayer {
    /// Layer id
    pub id: &'static str,
    /// Source id the layer draws
    pub source: &'static str,
    /// Paint properties
    pub paint: LinePaint,
}

/// Which point of the journey a marker represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerKind {
    /// Departure point
    Start,
    /// Traveler's current position
    Current,
    /// Journey destination
    Destination,
}

/// A point marker with popup text
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    /// Marker role
    pub kind: MarkerKind,
    /// Position in `[lng, lat]` order
    pub position: [f64; 2],
    /// Popup heading
    pub title: String,
    /// Popup body
    pub subtitle: String,
    /// Emoji drawn inside the marker
    pub icon: &'static str,
}

/// Camera placement for the overlay
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CameraFit {
    /// South-west corner in `[lng, lat]` order
    pub south_west: [f64; 2],
    /// North-east corner in `[lng, lat]` order
    pub north_east: [f64; 2],
    /// Padding around the bounds in pixels
    pub padding: u32,
    /// Maximum zoom level when fitting
    pub max_zoom: u32,
    /// Initial center before fitting, `[lng, lat]`
    pub initial_center: [f64; 2],
    /// Initial zoom before fitting
    pub initial_zoom: u32,
    /// Initial camera pitch in degrees
    pub initial_pitch: u32,
}

/// Everything a map surface needs to draw a journey
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapOverlay {
    /// Destination id
    pub destination_id: &'static str,
    /// Progress along the journey
    pub progress: JourneyProgress,
    /// GeoJSON sources
    pub sources: Vec<OverlaySource>,
    /// Line layers, bottom first
    pub layers: Vec<LineLayer>,
    /// Start, current, and destination markers
    pub markers: Vec<Marker>,
    /// Camera placement
    pub camera: CameraFit,
}

impl MapOverlay {
    /// Build the overlay for `covered_km` travelled towards `destination`
    #[must_use]
    pub fn build(destination: &Destination, covered_km: f64) -> Self {
        let progress = JourneyProgress::new(destination.distance_km, covered_km);
        let path = JourneyPath::new(START_LOCATION, destination.coordinate, progress.percent);
        let current = path.current_position();

        Self {
            destination_id: destination.id,
            progress,
            sources: vec![
                OverlaySource {
                    id: FULL_SOURCE_ID,
                    data: line_feature(path.coordinates()),
                },
                OverlaySource {
                    id: COMPLETED_SOURCE_ID,
                    data: line_feature(path.completed()),
                },
            ],
            layers: line_layers(),
            markers: vec![
                Marker {
                    kind: MarkerKind::Start,
                    position: START_LOCATION.to_lng_lat(),
                    title: "Starting Point".to_owned(),
                    subtitle: START_NAME.to_owned(),
                    icon: "",
                },
                Marker {
                    kind: MarkerKind::Current,
                    position: current.to_lng_lat(),
                    title: "You are here!".to_owned(),
                    subtitle: format!("{:.1}% complete", progress.percent),
                    icon: "🏃",
                },
                Marker {
                    kind: MarkerKind::Destination,
                    position: destination.coordinate.to_lng_lat(),
                    title: destination.name.to_owned(),
                    subtitle: destination.franchise.to_owned(),
                    icon: destination_icon(destination.id),
                },
            ],
            camera: camera_fit(&[START_LOCATION, destination.coordinate, current]),
        }
    }
}

fn line_feature(points: &[Coordinate]) -> Value {
    let coordinates: Vec<[f64; 2]> = points.iter().map(|c| c.to_lng_lat()).collect();
    json!({
        "type": "Feature",
        "properties": {},
        "geometry": {
            "type": "LineString",
            "coordinates": coordinates,
        }
    })
}

fn line_layers() -> Vec<LineLayer> {
    vec![
        LineLayer {
            id: "journey-full-line",
            source: FULL_SOURCE_ID,
            paint: LinePaint {
                color: REMAINING_COLOR,
                width: 3.0,
                dasharray: Some([2.0, 2.0]),
                blur: None,
                opacity: None,
            },
        },
        LineLayer {
            id: "journey-completed-line",
            source: COMPLETED_SOURCE_ID,
            paint: LinePaint {
                color: COMPLETED_COLOR,
                width: 4.0,
                dasharray: None,
                blur: None,
                opacity: None,
            },
        },
        LineLayer {
            id: "journey-completed-glow",
            source: COMPLETED_SOURCE_ID,
            paint: LinePaint {
                color: COMPLETED_COLOR,
                width: 12.0,
                dasharray: None,
                blur: Some(8.0),
                opacity: Some(0.4),
            },
        },
    ]
}

fn camera_fit(points: &[Coordinate]) -> CameraFit {
    let (mut min_lng, mut min_lat) = (f64::INFINITY, f64::INFINITY);
    let (mut max_lng, mut max_lat) = (f64::NEG_INFINITY, f64::NEG_INFINITY);
    for point in points {
        min_lng = min_lng.min(point.lng);
        min_lat = min_lat.min(point.lat);
        max_lng = max_lng.max(point.lng);
        max_lat = max_lat.max(point.lat);
    }

    CameraFit {
        south_west: [min_lng, min_lat],
        north_east: [max_lng, max_lat],
        padding: FIT_PADDING,
        max_zoom: FIT_MAX_ZOOM,
        initial_center: START_LOCATION.to_lng_lat(),
        initial_zoom: INITIAL_ZOOM,
        initial_pitch: INITIAL_PITCH,
    }
}

/// Marker emoji for a destination
#[must_use]
pub fn destination_icon(destination_id: &str) -> &'static str {
    match destination_id {
        "mordor" => "🌋",
        "narnia" => "🦁",
        "rivendell" => "🧝",
        "asgard" => "⚡",
        "wakanda" => "🐆",
        _ => "🏰",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journey::catalog::find_destination;

    fn line_len(source: &OverlaySource) -> usize {
        source.data["geometry"]["coordinates"]
            .as_array()
            .map_or(0, Vec::len)
    }

    #[test]
    fn test_overlay_sources_and_markers() {
        let hogwarts = find_destination("hogwarts").unwrap();
        let overlay = MapOverlay::build(hogwarts, 25.0);

        assert_eq!(overlay.sources.len(), 2);
        assert_eq!(line_len(&overlay.sources[0]), 51);
        assert_eq!(line_len(&overlay.sources[1]), 26);

        let current = &overlay.markers[1];
        assert_eq!(current.kind, MarkerKind::Current);
        assert_eq!(current.subtitle, "50.0% complete");
        assert_eq!(overlay.markers[2].title, "Hogwarts");
        assert_eq!(overlay.markers[2].subtitle, "Harry Potter");
    }

    #[test]
    fn test_fresh_journey_completed_line_is_start_only() {
        let mordor = find_destination("mordor").unwrap();
        let overlay = MapOverlay::build(mordor, 0.0);
        assert_eq!(line_len(&overlay.sources[1]), 1);
        assert_eq!(overlay.markers[1].position, START_LOCATION.to_lng_lat());
    }

    #[test]
    fn test_bounds_cover_start_and_destination() {
        let mordor = find_destination("mordor").unwrap();
        let overlay = MapOverlay::build(mordor, 100.0);

        assert!((overlay.camera.south_west[0] - START_LOCATION.lng).abs() < f64::EPSILON);
        assert!((overlay.camera.south_west[1] - mordor.coordinate.lat).abs() < f64::EPSILON);
        assert!((overlay.camera.north_east[0] - mordor.coordinate.lng).abs() < f64::EPSILON);
        assert!((overlay.camera.north_east[1] - START_LOCATION.lat).abs() < f64::EPSILON);
        assert_eq!(overlay.camera.max_zoom, 6);
    }

    #[test]
    fn test_dashed_remaining_layer() {
        let layers = line_layers();
        assert_eq!(layers[0].paint.dasharray, Some([2.0, 2.0]));
        assert_eq!(layers[2].paint.opacity, Some(0.4));
    }
}
