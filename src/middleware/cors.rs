// ABOUTME: CORS middleware configuration for HTTP API endpoints
// ABOUTME: Builds the tower-http CORS layer from the configured origin list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Epic Run Contributors

use crate::config::ServerConfig;
use http::{header::HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Configure CORS for the JSON API
///
/// `CORS_ALLOWED_ORIGINS` set to `*` (or left empty) allows any origin;
/// otherwise it is a comma-separated list. Entries that are not valid header
/// values are skipped, and a list with no valid entries falls back to any.
///
/// ```bash
/// export CORS_ALLOWED_ORIGINS="https://epic-run.example.com,http://localhost:5173"
/// ```
#[must_use]
pub fn setup_cors(config: &ServerConfig) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(allow_origin(&config.cors.allowed_origins))
        .allow_headers([
            HeaderName::from_static("authorization"),
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
            HeaderName::from_static("content-type"),
        ])
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::OPTIONS,
        ])
}

fn allow_origin(allowed_origins: &str) -> AllowOrigin {
    let allowed_origins = allowed_origins.trim();
    if allowed_origins.is_empty() || allowed_origins == "*" {
        return AllowOrigin::any();
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .filter_map(|s| HeaderValue::from_str(s).ok())
        .collect();

    if origins.is_empty() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(origins)
    }
}
