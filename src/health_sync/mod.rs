// ABOUTME: Health data sync adapter over a pluggable on-device health platform
// ABOUTME: Platform trait, unsupported and synthetic platforms, service, and background sync
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Epic Run Contributors

//! # Health Data Sync
//!
//! - **platform**: the [`HealthPlatform`] contract
//! - **unsupported**: stand-in for builds without a native health store
//! - **synthetic**: in-memory platform for development and tests
//! - **service**: [`HealthSyncService`], aggregation into [`HealthData`](epic_run_core::models::HealthData)
//! - **background**: [`BackgroundSync`] interval refresh handle

/// Cancellable interval refresh
pub mod background;
/// Platform contract and authorization types
pub mod platform;
/// Sync service
pub mod service;
/// In-memory platform
pub mod synthetic;
/// Platform for non-native builds
pub mod unsupported;

pub use background::{BackgroundSync, SyncCallback};
pub use platform::{AuthorizationResult, Availability, HealthPlatform, READ_SCOPE, WRITE_SCOPE};
pub use service::{HealthSyncService, SyncStatus};
pub use synthetic::SyntheticHealthPlatform;
pub use unsupported::UnsupportedPlatform;
