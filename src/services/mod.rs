// ABOUTME: Domain service layer for journey progress, statistics, achievements, and onboarding
// ABOUTME: Protocol-agnostic operations shared by the HTTP routes and the CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Epic Run Contributors

//! Domain service layer
//!
//! Business rules that combine the profile store with the journey model live
//! here rather than in route handlers, so the server and the CLI apply them
//! identically.

/// Achievement definitions and evaluation
pub mod achievements;

/// Onboarding option lists and completion
pub mod onboarding;

/// Journey start, health snapshots, manual runs, completion, and streaks
pub mod progress;

/// Statistics summary
pub mod stats;
