// ABOUTME: Health platform abstraction implemented by native bindings and test doubles
// ABOUTME: Availability probe, authorization request, and per-type sample queries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Epic Run Contributors

//! # Health Platform Contract
//!
//! A health platform is the on-device store of step, distance and energy
//! samples (Apple Health, Health Connect). Implementations report failures as
//! [`HealthPlatformError`]; the sync service turns every failure into "no data".
//!
//! ## Example: Adding a Platform
//!
//! ```rust,no_run
//! use async_trait::async_trait;
//! use chrono::{DateTime, Utc};
//! use epic_run_core::errors::HealthPlatformError;
//! use epic_run_core::models::{HealthDataType, HealthSample};
//! use epic_run_server::health_sync::{AuthorizationResult, Availability, HealthPlatform};
//!
//! struct WatchPlatform;
//!
//! #[async_trait]
//! impl HealthPlatform for WatchPlatform {
//!     fn name(&self) -> &'static str {
//!         "watch"
//!     }
//!
//!     async fn is_available(&self) -> Result<Availability, HealthPlatformError> {
//!         Ok(Availability::available("watch"))
//!     }
//!
//!     async fn request_authorization(
//!         &self,
//!         read: &[HealthDataType],
//!         _write: &[HealthDataType],
//!     ) -> Result<AuthorizationResult, HealthPlatformError> {
//!         Ok(AuthorizationResult::granted(read))
//!     }
//!
//!     async fn read_samples(
//!         &self,
//!         _data_type: HealthDataType,
//!         _start: DateTime<Utc>,
//!         _end: DateTime<Utc>,
//!     ) -> Result<Vec<HealthSample>, HealthPlatformError> {
//!         Ok(Vec::new())
//!     }
//! }
//! ```

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use epic_run_core::errors::HealthPlatformError;
use epic_run_core::models::{HealthDataType, HealthSample};
use serde::{Deserialize, Serialize};

/// Data types the sync adapter asks to read
pub const READ_SCOPE: [HealthDataType; 3] = [
    HealthDataType::Steps,
    HealthDataType::Distance,
    HealthDataType::Calories,
];

/// Data types the sync adapter asks to write (none)
pub const WRITE_SCOPE: [HealthDataType; 0] = [];

/// Result of an availability probe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Availability {
    /// Whether health data can be queried at all
    pub available: bool,
    /// Platform identifier, when known
    pub platform: Option<String>,
    /// Why the platform is unavailable, when it is
    pub reason: Option<String>,
}

impl Availability {
    /// An available platform
    #[must_use]
    pub fn available(platform: impl Into<String>) -> Self {
        Self {
            available: true,
            platform: Some(platform.into()),
            reason: None,
        }
    }

    /// An unavailable platform with a reason
    #[must_use]
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            available: false,
            platform: None,
            reason: Some(reason.into()),
        }
    }
}

/// Outcome of an authorization request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizationResult {
    /// Read types the user granted
    pub read_authorized: Vec<HealthDataType>,
    /// Read types the user denied
    pub read_denied: Vec<HealthDataType>,
}

impl AuthorizationResult {
    /// Every requested read type granted
    #[must_use]
    pub fn granted(read: &[HealthDataType]) -> Self {
        Self {
            read_authorized: read.to_vec(),
            read_denied: Vec::new(),
        }
    }

    /// At least one read type was granted
    #[must_use]
    pub fn is_authorized(&self) -> bool {
        !self.read_authorized.is_empty()
    }
}

/// On-device health data store
#[async_trait]
pub trait HealthPlatform: Send + Sync {
    /// Platform identifier used in logs
    fn name(&self) -> &'static str;

    /// Probe whether the platform can be used
    async fn is_available(&self) -> Result<Availability, HealthPlatformError>;

    /// Ask the user for read and write access
    async fn request_authorization(
        &self,
        read: &[HealthDataType],
        write: &[HealthDataType],
    ) -> Result<AuthorizationResult, HealthPlatformError>;

    /// Samples of `data_type` inside `[start, end]`
    async fn read_samples(
        &self,
        data_type: HealthDataType,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<HealthSample>, HealthPlatformError>;
}
