// ABOUTME: Stateless endpoint handing the public map-rendering token to clients
// ABOUTME: Answers CORS preflight itself and reports a fixed error when no token is configured
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Epic Run Contributors

//! Map token route
//!
//! Every response, including errors and preflight, carries a wildcard origin
//! and the fixed allowed-header list.

use crate::resources::ServerResources;
use axum::{
    extract::State,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use std::sync::Arc;
use tracing::{error, info};

/// Value of `Access-Control-Allow-Headers`
pub const ALLOWED_HEADERS: &str = "authorization, x-client-info, apikey, content-type";

/// Error message when no token is configured
pub const NOT_CONFIGURED: &str = "Mapbox token not configured";

/// Map token routes implementation
pub struct MapTokenRoutes;

impl MapTokenRoutes {
    /// Create the token route
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/map-token",
                get(Self::handle_get_token).options(Self::handle_preflight),
            )
            .with_state(resources)
    }

    async fn handle_preflight() -> Response {
        with_cors_headers(StatusCode::OK.into_response())
    }

    async fn handle_get_token(State(resources): State<Arc<ServerResources>>) -> Response {
        let response = match resources.config.mapbox_public_token.as_deref() {
            Some(token) => {
                info!("Map token retrieved");
                (StatusCode::OK, Json(json!({ "token": token }))).into_response()
            }
            None => {
                error!("Map token requested but not configured");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": NOT_CONFIGURED })),
                )
                    .into_response()
            }
        };
        with_cors_headers(response)
    }
}

fn with_cors_headers(mut response: Response) -> Response {
    let headers = response.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOWED_HEADERS),
    );
    response
}
