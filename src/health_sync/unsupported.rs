// ABOUTME: Health platform stand-in for environments without native health data
// ABOUTME: Always reports unavailable so the sync adapter returns no data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Epic Run Contributors

use super::platform::{AuthorizationResult, Availability, HealthPlatform};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use epic_run_core::errors::HealthPlatformError;
use epic_run_core::models::{HealthDataType, HealthSample};

const REASON: &str = "Health data requires a native iOS or Android build";

/// Platform used by web and server builds
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedPlatform;

#[async_trait]
impl HealthPlatform for UnsupportedPlatform {
    fn name(&self) -> &'static str {
        "unsupported"
    }

    async fn is_available(&self) -> Result<Availability, HealthPlatformError> {
        Ok(Availability::unavailable(REASON))
    }

    async fn request_authorization(
        &self,
        _read: &[HealthDataType],
        _write: &[HealthDataType],
    ) -> Result<AuthorizationResult, HealthPlatformError> {
        Err(HealthPlatformError::Unavailable {
            reason: REASON.to_owned(),
        })
    }

    async fn read_samples(
        &self,
        _data_type: HealthDataType,
        _start: DateTime<Utc>,
        _end: DateTime<Utc>,
    ) -> Result<Vec<HealthSample>, HealthPlatformError> {
        Err(HealthPlatformError::Unavailable {
            reason: REASON.to_owned(),
        })
    }
}
