// ABOUTME: Core data models and types for the NutriVida content engine
// ABOUTME: Re-exports content kinds, slots, generation records, and profile types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriVida Contributors

//! # Data Models
//!
//! - `ContentKind` / `ContentSlot`: what is generated and which catalog tables feed it
//! - `ContextToken`: the temporal bucket appended to selection seeds
//! - `GenerationRecord`: last generation per (user, kind), owned by the store
//! - `UserProfile` / `UserMetrics`: inputs for calorie targets

mod content;
mod generation;
mod profile;

pub use content::{ContentKind, ContentSlot, ContextToken};
pub use generation::{
    CooldownViolation, GenerationHistoryEntry, GenerationRecord, GenerationSource,
    RegenerationAuthority,
};
pub use profile::{ActivityLevel, Gender, UserMetrics, UserProfile, WeightRecord};
