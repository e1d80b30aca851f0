// ABOUTME: Core types and constants for the NutriVida content engine
// ABOUTME: Foundation crate with error handling, content models, and cooldown constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriVida Contributors

#![deny(unsafe_code)]

//! # NutriVida Core
//!
//! Foundation crate providing shared types and constants for the NutriVida
//! weight-management content engine. This crate is designed to change infrequently,
//! enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and domain-specific errors
//! - **constants**: Cooldowns, calorie limits, and fallback notices
//! - **models**: Content kinds and slots, generation records, user profiles

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (content kinds, slots, generation records, profiles)
pub mod models;
