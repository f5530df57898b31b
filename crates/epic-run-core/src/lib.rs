// ABOUTME: Core types and constants for the Epic Run journey platform
// ABOUTME: Foundation crate with error handling, unit constants, and domain models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Epic Run Contributors

#![deny(unsafe_code)]

//! # Epic Run Core
//!
//! Foundation crate providing shared types and constants for the Epic Run
//! journey tracker. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and the health platform error
//! - **constants**: Unit conversions, journey defaults, and health sync constants
//! - **models**: Coordinates, destinations, profiles, and health aggregates

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (Coordinate, Destination, Profile, HealthData, etc.)
pub mod models;
