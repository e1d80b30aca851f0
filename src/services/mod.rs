// ABOUTME: Domain service layer composing stores and content intelligence
// ABOUTME: Entry point used by the CLI and any future protocol surface
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriVida Contributors

/// Cooldown-gated content generation
pub mod content;

pub use content::{ContentOrigin, ContentService, GeneratedContent, RegenerationOutcome};
