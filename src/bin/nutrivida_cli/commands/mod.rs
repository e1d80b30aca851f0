// ABOUTME: Re-exports command modules for nutrivida-cli
// ABOUTME: Provides access to content and metrics commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriVida Contributors

pub mod content;
pub mod metrics;
