// ABOUTME: Deterministic content selection, cooldown gating, rendering, and metabolic math
// ABOUTME: Pure synchronous algorithms consumed by the NutriVida content service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriVida Contributors

#![deny(unsafe_code)]

//! # NutriVida Intelligence
//!
//! Everything in this crate is synchronous and free of I/O. The service layer in the
//! main crate wires these pieces to a clock and a generation store.
//!
//! Leaf-first:
//!
//! - [`seed`]: string to catalog index
//! - [`catalog`]: immutable per-slot variant tables
//! - [`selector`]: per-slot deterministic selection and plan assembly
//! - [`availability`]: cooldown state machine over generation records
//! - [`formatter`]: Portuguese text templates
//! - [`generator`]: strategy trait composing selector and formatter
//! - [`metrics`]: BMI, BMR and calorie targets

/// Cooldown-based regeneration gate
pub mod availability;
/// Immutable content catalog
pub mod catalog;
/// Text rendering of assembled content
pub mod formatter;
/// Content generation strategies
pub mod generator;
/// Metabolic profile calculations
pub mod metrics;
/// Seed hashing
pub mod seed;
/// Deterministic per-slot selection
pub mod selector;

pub use availability::{AvailabilityGate, AvailabilityState, CooldownPolicy};
pub use catalog::{CatalogBuilder, ContentCatalog, ContentVariant, RecipeCard, VariantBody};
pub use formatter::{fallback_text, render, RenderParameters};
pub use generator::{ContentGenerator, GenerationError, GenerationRequest, LocalContentGenerator};
pub use selector::{AssembledContent, DailyPlan, PlanSelector};
