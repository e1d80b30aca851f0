// ABOUTME: Re-exports helper modules for nutrivida-cli
// ABOUTME: Provides access to display formatting and instant parsing utilities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriVida Contributors

pub mod display;
pub mod time;
