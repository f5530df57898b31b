// ABOUTME: In-memory health platform for development, demos, and tests
// ABOUTME: Configurable availability, per-type denial, and failure injection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Epic Run Contributors

//! # Synthetic Health Platform
//!
//! Behaves like a native health store without a device:
//!
//! - Samples are injected with [`SyntheticHealthPlatform::record`]
//! - Read access can be denied per data type
//! - The next queries can be forced to fail
//! - Reads can be slowed down to keep several fetches in flight
//!
//! All state sits behind an `RwLock` so a shared instance can be reconfigured
//! while a sync service is using it.

use super::platform::{AuthorizationResult, Availability, HealthPlatform};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use epic_run_core::errors::HealthPlatformError;
use epic_run_core::models::{HealthDataType, HealthSample};
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};
use std::time::Duration;

#[derive(Debug, Default)]
struct SyntheticState {
    unavailable_reason: Option<String>,
    denied: HashSet<HealthDataType>,
    failure: Option<String>,
    read_delay: Duration,
    samples: Vec<HealthSample>,
}

#[derive(Debug, Default)]
struct ReadCounters {
    started: AtomicUsize,
    in_flight: AtomicUsize,
    peak_in_flight: AtomicUsize,
}

/// Decrements the in-flight count when a read finishes or is dropped
struct InFlightRead<'a>(&'a ReadCounters);

impl<'a> InFlightRead<'a> {
    fn enter(counters: &'a ReadCounters) -> Self {
        counters.started.fetch_add(1, Ordering::SeqCst);
        let now = counters.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        counters.peak_in_flight.fetch_max(now, Ordering::SeqCst);
        Self(counters)
    }
}

impl Drop for InFlightRead<'_> {
    fn drop(&mut self) {
        self.0.in_flight.fetch_sub(1, Ordering::SeqCst);
    }
}

/// In-memory health platform
#[derive(Debug, Clone, Default)]
pub struct SyntheticHealthPlatform {
    state: Arc<RwLock<SyntheticState>>,
    reads: Arc<ReadCounters>,
}

impl SyntheticHealthPlatform {
    /// An available platform with no samples and nothing denied
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A platform that reports itself unavailable
    #[must_use]
    pub fn unavailable(reason: impl Into<String>) -> Self {
        let platform = Self::new();
        platform.set_unavailable(Some(reason.into()));
        platform
    }

    /// Toggle availability (`None` makes the platform available)
    pub fn set_unavailable(&self, reason: Option<String>) {
        if let Ok(mut state) = self.state.write() {
            state.unavailable_reason = reason;
        }
    }

    /// Deny read access to a data type
    pub fn deny(&self, data_type: HealthDataType) {
        if let Ok(mut state) = self.state.write() {
            state.denied.insert(data_type);
        }
    }

    /// Make every query fail with `details` until cleared with `None`
    pub fn set_failure(&self, details: Option<String>) {
        if let Ok(mut state) = self.state.write() {
            state.failure = details;
        }
    }

    /// Hold every sample read for `delay` before answering
    pub fn set_read_delay(&self, delay: Duration) {
        if let Ok(mut state) = self.state.write() {
            state.read_delay = delay;
        }
    }

    /// Sample reads started so far (a fetch reads each data type once)
    #[must_use]
    pub fn reads_started(&self) -> usize {
        self.reads.started.load(Ordering::SeqCst)
    }

    /// Highest number of sample reads that were running at the same time
    #[must_use]
    pub fn peak_concurrent_reads(&self) -> usize {
        self.reads.peak_in_flight.load(Ordering::SeqCst)
    }

    /// Record a sample measured at `at`
    pub fn record(&self, data_type: HealthDataType, value: f64, at: DateTime<Utc>) {
        let sample = HealthSample {
            data_type,
            value,
            unit: unit_for(data_type).to_owned(),
            start_date: at,
            end_date: at,
        };
        if let Ok(mut state) = self.state.write() {
            state.samples.push(sample);
        }
    }

    /// Record one walk or run as steps, meters, and kilocalories at `at`
    pub fn record_activity(&self, steps: f64, meters: f64, calories: f64, at: DateTime<Utc>) {
        self.record(HealthDataType::Steps, steps, at);
        self.record(HealthDataType::Distance, meters, at);
        self.record(HealthDataType::Calories, calories, at);
    }

    /// Number of stored samples
    #[must_use]
    pub fn sample_count(&self) -> usize {
        self.state.read().map_or(0, |state| state.samples.len())
    }

    fn check_failure(state: &SyntheticState) -> Result<(), HealthPlatformError> {
        if let Some(reason) = &state.unavailable_reason {
            return Err(HealthPlatformError::Unavailable {
                reason: reason.clone(),
            });
        }
        if let Some(details) = &state.failure {
            return Err(HealthPlatformError::Unexpected {
                details: details.clone(),
            });
        }
        Ok(())
    }
}

const fn unit_for(data_type: HealthDataType) -> &'static str {
    match data_type {
        HealthDataType::Steps => "count",
        HealthDataType::Distance => "m",
        HealthDataType::Calories => "kcal",
        HealthDataType::HeartRate => "bpm",
        HealthDataType::Weight => "kg",
    }
}

fn poisoned() -> HealthPlatformError {
    HealthPlatformError::Unexpected {
        details: "synthetic platform state lock poisoned".to_owned(),
    }
}

#[async_trait]
impl HealthPlatform for SyntheticHealthPlatform {
    fn name(&self) -> &'static str {
        "synthetic"
    }

    async fn is_available(&self) -> Result<Availability, HealthPlatformError> {
        let state = self.state.read().map_err(|_| poisoned())?;
        Ok(state
            .unavailable_reason
            .as_ref()
            .map_or_else(|| Availability::available("synthetic"), Availability::unavailable))
    }

    async fn request_authorization(
        &self,
        read: &[HealthDataType],
        _write: &[HealthDataType],
    ) -> Result<AuthorizationResult, HealthPlatformError> {
        let state = self.state.read().map_err(|_| poisoned())?;
        Self::check_failure(&state)?;

        let (read_denied, read_authorized): (Vec<_>, Vec<_>) = read
            .iter()
            .copied()
            .partition(|data_type| state.denied.contains(data_type));
        Ok(AuthorizationResult {
            read_authorized,
            read_denied,
        })
    }

    async fn read_samples(
        &self,
        data_type: HealthDataType,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<HealthSample>, HealthPlatformError> {
        let _read = InFlightRead::enter(&self.reads);
        let delay = self.state.read().map_err(|_| poisoned())?.read_delay;
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        let state = self.state.read().map_err(|_| poisoned())?;
        Self::check_failure(&state)?;

        // Denied types read as empty, like the native stores
        if state.denied.contains(&data_type) {
            return Ok(Vec::new());
        }

        Ok(state
            .samples
            .iter()
            .filter(|s| s.data_type == data_type && s.start_date >= start && s.end_date <= end)
            .cloned()
            .collect())
    }
}
