// ABOUTME: Structured error types for health platform operations
// ABOUTME: Distinguishes unavailable platforms, denied authorization, and unexpected failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Epic Run Contributors

use super::ErrorCode;
use thiserror::Error;

/// Failure modes of the on-device health data platform
///
/// The sync adapter never propagates these to callers; they are logged and
/// recorded as the service's last error while the caller receives "no data".
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HealthPlatformError {
    /// The platform capability is missing (web build, unsupported device)
    #[error("Health platform unavailable: {reason}")]
    Unavailable {
        /// Reason reported by the platform
        reason: String,
    },

    /// The user denied read access to every requested data type
    #[error("Health data authorization denied for: {data_types}")]
    Denied {
        /// Comma-separated data types that were requested
        data_types: String,
    },

    /// The platform reported a failure while answering a query
    #[error("Health platform query failed: {details}")]
    Unexpected {
        /// Details reported by the platform
        details: String,
    },
}

impl HealthPlatformError {
    /// Map to the application-wide error code
    #[must_use]
    pub const fn error_code(&self) -> ErrorCode {
        match self {
            Self::Unavailable { .. } => ErrorCode::ExternalServiceUnavailable,
            Self::Denied { .. } => ErrorCode::ExternalAuthFailed,
            Self::Unexpected { .. } => ErrorCode::ExternalServiceError,
        }
    }
}
