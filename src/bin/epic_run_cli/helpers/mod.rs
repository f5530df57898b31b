// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Epic Run Contributors
// ABOUTME: Helper modules for epic-run-cli
// ABOUTME: Output formatting shared by the commands

pub mod display;
