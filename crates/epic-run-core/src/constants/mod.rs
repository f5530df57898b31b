// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants organized by domain for the Epic Run platform
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Epic Run Contributors

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.

/// Unit conversion and measurement constants
pub mod units;

/// Journey path and progress constants
pub mod journey {
    /// Number of segments in a rendered journey path (the path has one more point)
    pub const PATH_SEGMENTS: usize = 50;
    /// Largest segment count a caller may request
    pub const MAX_PATH_SEGMENTS: usize = 1_000;
    /// Upper bound of a progress percentage
    pub const MAX_PROGRESS_PERCENT: f64 = 100.0;
}

/// Health data sync constants
pub mod health_sync {
    /// Rough conversion used to estimate active minutes from a step count
    pub const STEPS_PER_ACTIVE_MINUTE: f64 = 100.0;
    /// Default background refresh interval (5 minutes)
    pub const DEFAULT_SYNC_INTERVAL_SECS: u64 = 300;
    /// Number of decimals kept when reporting distance in kilometers
    pub const DISTANCE_DECIMALS: i32 = 2;
}

/// Onboarding option values
pub mod onboarding {
    /// Daily step goals a user may pick during onboarding
    pub const DAILY_STEP_GOALS: [u32; 5] = [5_000, 7_500, 10_000, 12_500, 15_000];
    /// Daily step goal assumed until onboarding is completed
    pub const DEFAULT_DAILY_STEP_GOAL: u32 = 10_000;
}

/// Network ports
pub mod ports {
    /// Default HTTP port
    pub const DEFAULT_HTTP_PORT: u16 = 8081;
}

/// Service identification used in logs
pub mod service_names {
    /// Name of the HTTP backend
    pub const EPIC_RUN_SERVER: &str = "epic-run-server";
}

/// Environment variable names
pub mod env_config {
    /// HTTP listen port
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// HTTP listen address
    pub const HOST: &str = "HOST";
    /// Database connection string
    pub const DATABASE_URL: &str = "DATABASE_URL";
    /// Public map-rendering access token handed out by the token endpoint
    pub const MAPBOX_PUBLIC_TOKEN: &str = "MAPBOX_PUBLIC_TOKEN";
    /// Comma-separated allowed CORS origins, or `*`
    pub const CORS_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
    /// Background health sync interval in seconds
    pub const HEALTH_SYNC_INTERVAL_SECS: &str = "HEALTH_SYNC_INTERVAL_SECS";
    /// Deployment environment (development, production, testing)
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
}
