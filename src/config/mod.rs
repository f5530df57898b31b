// ABOUTME: Configuration management module for centralized server settings
// ABOUTME: Environment-driven server configuration consumed by the binaries and router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Epic Run Contributors

//! Configuration module
//!
//! - **Environment**: server configuration from environment variables

/// Environment and server configuration
pub mod environment;

pub use environment::{CorsConfig, Environment, LogLevel, ServerConfig};
