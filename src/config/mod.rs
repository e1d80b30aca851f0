// ABOUTME: Configuration management module for centralized service settings
// ABOUTME: Environment-only configuration for storage, cooldowns, and generation strategy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriVida Contributors

//! Configuration module
//!
//! All settings come from environment variables; there is no configuration file.

/// Environment and service configuration
pub mod environment;

pub use environment::{
    CooldownConfig, DatabaseUrl, Environment, GeneratorKind, LogLevel, ServerConfig,
};
