// ABOUTME: Main library entry point for the Epic Run journey tracker backend
// ABOUTME: Journey model, health sync adapter, profile store, services, and HTTP routes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Epic Run Contributors

#![deny(unsafe_code)]

//! # Epic Run Server
//!
//! Maps real-world running distance onto fantasy journeys: 470 km of running
//! takes you from London to Mordor.
//!
//! ## Architecture
//!
//! - **journey**: pure path interpolation, progress, destination catalog, map overlay
//! - **`health_sync`**: health platform trait, sync service, background refresh
//! - **database**: `SQLite` profile store with a per-day activity ledger
//! - **services**: progress application, statistics, achievements, onboarding
//! - **routes**: axum HTTP surface, including the map token endpoint
//! - **config** / **logging**: environment configuration and tracing setup
//!
//! ## Example Usage
//!
//! ```rust
//! use epic_run_server::journey::{destination, JourneyPath, JourneyProgress, START_LOCATION};
//!
//! let mordor = destination("mordor").unwrap();
//! let progress = JourneyProgress::new(mordor.distance_km, 235.0);
//! let path = JourneyPath::new(START_LOCATION, mordor.coordinate, progress.percent);
//!
//! assert_eq!(path.coordinates().len(), 51);
//! assert_eq!(path.current_index(), 25);
//! ```

/// Environment configuration
pub mod config;

/// `SQLite` profile store
pub mod database;

/// Health data sync adapter
pub mod health_sync;

/// Journey position model and catalog
pub mod journey;

/// Tracing subscriber setup
pub mod logging;

/// HTTP middleware
pub mod middleware;

/// Shared route state
pub mod resources;

/// HTTP routes
pub mod routes;

/// Domain services
pub mod services;

/// Error types shared with the core crate
pub use epic_run_core::errors;

/// Constants shared with the core crate
pub use epic_run_core::constants;

/// Domain models shared with the core crate
pub use epic_run_core::models;
