// ABOUTME: Journey domain: position model, progress, destination catalog, and map overlay
// ABOUTME: Pure computations with no I/O, shared by routes, services, and the CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Epic Run Contributors

/// Static destination catalog and starting point
pub mod catalog;
/// Map overlay payload for rendering surfaces
pub mod map_overlay;
/// Path interpolation and current position
pub mod path;
/// Progress percentage and remaining distance
pub mod progress;

pub use catalog::{destination, find_destination, DESTINATIONS, START_LOCATION, START_NAME};
pub use map_overlay::MapOverlay;
pub use path::JourneyPath;
pub use progress::JourneyProgress;
