// ABOUTME: Health sync service aggregating platform samples into daily health data
// ABOUTME: Tracks availability, authorization, and last error; failures yield no data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Epic Run Contributors

//! # Health Sync Service
//!
//! An explicit service object over a [`HealthPlatform`]. Construct one per
//! platform and share it behind an `Arc`; there is no global instance.
//!
//! Every platform failure is caught here, logged, stored as the last error and
//! turned into `false` or `None` for the caller. Nothing is retried.

use super::background::{BackgroundSync, SyncCallback};
use super::platform::{HealthPlatform, READ_SCOPE, WRITE_SCOPE};
use chrono::{DateTime, Local, TimeZone, Utc};
use epic_run_core::errors::{AppError, AppResult, ErrorCode, HealthPlatformError};
use epic_run_core::models::{HealthData, HealthDataType, HealthSample};
use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, error, info, warn};

/// Snapshot of the service state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SyncStatus {
    /// Platform reported itself usable
    pub is_available: bool,
    /// At least one read type is granted
    pub is_authorized: bool,
    /// Most recent failure, if any
    pub last_error: Option<String>,
    /// Time of the most recent successful read
    pub last_sync_time: Option<DateTime<Utc>>,
}

/// Health data sync adapter
pub struct HealthSyncService {
    platform: Arc<dyn HealthPlatform>,
    status: RwLock<SyncStatus>,
    background_active: Arc<AtomicBool>,
}

impl HealthSyncService {
    /// Create a service over `platform`; call [`Self::initialize`] before use
    #[must_use]
    pub fn new(platform: Arc<dyn HealthPlatform>) -> Self {
        Self {
            platform,
            status: RwLock::new(SyncStatus::default()),
            background_active: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Probe the platform and record whether it is available
    pub async fn initialize(&self) -> bool {
        let outcome = self.platform.is_available().await;
        let mut status = self.status.write().await;
        match outcome {
            Ok(availability) => {
                status.is_available = availability.available;
                if !availability.available {
                    let reason = availability
                        .reason
                        .unwrap_or_else(|| "unknown reason".to_owned());
                    info!(platform = self.platform.name(), %reason, "Health platform unavailable");
                    status.last_error = Some(
                        HealthPlatformError::Unavailable { reason }.to_string(),
                    );
                }
            }
            Err(e) => {
                error!(platform = self.platform.name(), error = %e, "Error checking health platform availability");
                status.is_available = false;
                status.last_error = Some(e.to_string());
            }
        }
        status.is_available
    }

    /// Ask for read access to steps, distance, and calories
    ///
    /// Returns whether at least one read type was granted.
    pub async fn request_authorization(&self) -> bool {
        if !self.status.read().await.is_available {
            warn!(
                platform = self.platform.name(),
                "Health platform is not available on this device"
            );
            return false;
        }

        let outcome = self
            .platform
            .request_authorization(&READ_SCOPE, &WRITE_SCOPE)
            .await;

        let mut status = self.status.write().await;
        match outcome {
            Ok(result) => {
                status.is_authorized = result.is_authorized();
                if status.is_authorized {
                    debug!(granted = ?result.read_authorized, denied = ?result.read_denied, "Health data authorization granted");
                } else {
                    let denied = HealthPlatformError::Denied {
                        data_types: join_types(&READ_SCOPE),
                    };
                    warn!(error = %denied, "Health data authorization denied");
                    status.last_error = Some(denied.to_string());
                }
            }
            Err(e) => {
                error!(error = %e, "Error requesting health data authorization");
                status.is_authorized = false;
                status.last_error = Some(e.to_string());
            }
        }
        status.is_authorized
    }

    /// Whether the platform is usable
    pub async fn is_available(&self) -> bool {
        self.status.read().await.is_available
    }

    /// Whether read access was granted
    pub async fn is_authorized(&self) -> bool {
        self.status.read().await.is_authorized
    }

    /// Current state snapshot
    pub async fn status(&self) -> SyncStatus {
        self.status.read().await.clone()
    }

    /// Activity from local midnight until now
    pub async fn get_today_data(&self) -> Option<HealthData> {
        let (start, end) = today_window(Local::now());
        self.get_data_for_date_range(start, end).await
    }

    /// Activity summed over `[start, end]`
    ///
    /// `None` when the platform is unavailable, unauthorized, or a query fails.
    pub async fn get_data_for_date_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Option<HealthData> {
        {
            let status = self.status.read().await;
            if !status.is_available || !status.is_authorized {
                return None;
            }
        }

        let platform = &self.platform;
        let reads = tokio::try_join!(
            platform.read_samples(HealthDataType::Steps, start, end),
            platform.read_samples(HealthDataType::Distance, start, end),
            platform.read_samples(HealthDataType::Calories, start, end),
        );

        match reads {
            Ok((steps, distance, calories)) => {
                let data = HealthData::from_raw_totals(
                    sum_values(&steps),
                    sum_values(&distance),
                    sum_values(&calories),
                    Utc::now(),
                );
                self.status.write().await.last_sync_time = Some(data.last_sync_time);
                debug!(steps = data.steps, distance_km = data.distance_km, "Health data read");
                Some(data)
            }
            Err(e) => {
                error!(error = %e, "Error fetching health data");
                self.status.write().await.last_error = Some(e.to_string());
                None
            }
        }
    }

    /// Refresh today's data every `interval`, delivering each result to `callback`
    ///
    /// The first refresh runs immediately. Ticks that yield no data skip the
    /// callback.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a zero interval and `ResourceLocked` if a
    /// background sync is already running for this service
    pub fn start_background_sync(
        self: &Arc<Self>,
        interval: Duration,
        callback: SyncCallback,
    ) -> AppResult<BackgroundSync> {
        if interval.is_zero() {
            return Err(AppError::invalid_input(
                "Background sync interval must be greater than zero",
            ));
        }
        if self
            .background_active
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(AppError::new(
                ErrorCode::ResourceLocked,
                "Background health sync is already running",
            ));
        }

        info!(interval_secs = interval.as_secs(), "Starting background health sync");
        Ok(BackgroundSync::spawn(
            Arc::clone(self),
            interval,
            callback,
            Arc::clone(&self.background_active),
        ))
    }

    /// Whether a background sync is currently running
    #[must_use]
    pub fn is_background_sync_active(&self) -> bool {
        self.background_active.load(Ordering::Acquire)
    }
}

/// Local midnight through `now`, in UTC
#[must_use]
pub fn today_window<Tz: TimeZone>(now: DateTime<Tz>) -> (DateTime<Utc>, DateTime<Utc>) {
    let timezone = now.timezone();
    let start = now
        .date_naive()
        .and_hms_opt(0, 0, 0)
        .and_then(|midnight| timezone.from_local_datetime(&midnight).earliest())
        .map_or_else(|| now.with_timezone(&Utc), |start| start.with_timezone(&Utc));
    (start, now.with_timezone(&Utc))
}

fn sum_values(samples: &[HealthSample]) -> f64 {
    samples.iter().map(|s| s.value).sum()
}

fn join_types(types: &[HealthDataType]) -> String {
    types
        .iter()
        .map(HealthDataType::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
