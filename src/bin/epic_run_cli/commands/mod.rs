// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Epic Run Contributors
// ABOUTME: Re-exports command modules for epic-run-cli
// ABOUTME: Provides journey, profile, and health sync commands

pub mod health;
pub mod journey;
pub mod profile;
