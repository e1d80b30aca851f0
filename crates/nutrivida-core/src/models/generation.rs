// ABOUTME: Generation records, history entries, and cooldown rejection types
// ABOUTME: Persisted state of the availability gate plus the typed forced-regeneration outcome
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriVida Contributors

use super::ContentKind;
use crate::errors::{AppError, ErrorCode};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Last successful generation for one (user, kind) pair
///
/// Created on the first generation and overwritten by every later one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRecord {
    /// Opaque user identifier
    pub user_id: String,
    /// Content kind
    pub kind: ContentKind,
    /// When the stored text was generated
    pub last_generated_at: DateTime<Utc>,
    /// Text served until the cooldown elapses
    pub rendered_text: String,
}

impl GenerationRecord {
    /// Create a new record
    pub fn new(
        user_id: impl Into<String>,
        kind: ContentKind,
        last_generated_at: DateTime<Utc>,
        rendered_text: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            kind,
            last_generated_at,
            rendered_text: rendered_text.into(),
        }
    }
}

/// How a history entry came to be
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum GenerationSource {
    /// Natural generation after the cooldown elapsed (or the first one)
    Fresh,
    /// User-requested regeneration once eligible
    Forced,
    /// Administrative bypass of an active cooldown
    AdminOverride,
}

impl GenerationSource {
    /// Stable storage key
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fresh => "fresh",
            Self::Forced => "forced",
            Self::AdminOverride => "admin_override",
        }
    }

    /// Parse the storage key
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s {
            "forced" => Self::Forced,
            "admin_override" => Self::AdminOverride,
            _ => Self::Fresh,
        }
    }
}

impl fmt::Display for GenerationSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Append-only log of every generated text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationHistoryEntry {
    /// Entry identifier
    pub id: Uuid,
    /// Opaque user identifier
    pub user_id: String,
    /// Content kind
    pub kind: ContentKind,
    /// Context token used for the selection seed
    pub context_token: String,
    /// Rendered text
    pub rendered_text: String,
    /// Generation instant
    pub created_at: DateTime<Utc>,
    /// Generation path
    pub source: GenerationSource,
}

impl GenerationHistoryEntry {
    /// Create an entry with a fresh identifier
    pub fn new(
        record: &GenerationRecord,
        context_token: impl Into<String>,
        source: GenerationSource,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: record.user_id.clone(),
            kind: record.kind,
            context_token: context_token.into(),
            rendered_text: record.rendered_text.clone(),
            created_at: record.last_generated_at,
            source,
        }
    }
}

/// Who is asking for a regeneration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegenerationAuthority {
    /// The user themself, bound by the cooldown
    User,
    /// Administrative path allowed to bypass an active cooldown
    Administrator {
        /// Justification recorded in the logs
        reason: String,
    },
}

impl RegenerationAuthority {
    /// Whether the caller may bypass an active cooldown
    #[must_use]
    pub const fn can_bypass_cooldown(&self) -> bool {
        matches!(self, Self::Administrator { .. })
    }

    /// Justification given for a bypass, if any
    #[must_use]
    pub fn bypass_reason(&self) -> Option<&str> {
        match self {
            Self::User => None,
            Self::Administrator { reason } => Some(reason),
        }
    }
}

/// Typed rejection of a regeneration requested before eligibility
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CooldownViolation {
    /// Content kind
    pub kind: ContentKind,
    /// When regeneration becomes possible
    pub next_eligible_at: DateTime<Utc>,
    /// Remaining wait, in whole seconds
    pub remaining_secs: i64,
}

impl CooldownViolation {
    /// Build a rejection for the given instants
    #[must_use]
    pub fn new(kind: ContentKind, next_eligible_at: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        Self {
            kind,
            next_eligible_at,
            remaining_secs: (next_eligible_at - now).num_seconds().max(0),
        }
    }

    /// Remaining wait
    #[must_use]
    pub fn remaining(&self) -> Duration {
        Duration::seconds(self.remaining_secs)
    }

    /// Remaining wait rounded up to whole hours
    #[must_use]
    pub const fn remaining_hours(&self) -> i64 {
        (self.remaining_secs + 3599) / 3600
    }
}

impl fmt::Display for CooldownViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} available again at {}",
            self.kind,
            self.next_eligible_at.to_rfc3339()
        )
    }
}

impl From<CooldownViolation> for AppError {
    fn from(violation: CooldownViolation) -> Self {
        Self::new(ErrorCode::CooldownActive, violation.to_string())
            .with_resource_id(violation.kind.as_str())
            .with_details(serde_json::json!({
                "next_eligible_at": violation.next_eligible_at.to_rfc3339(),
                "remaining_secs": violation.remaining_secs,
            }))
    }
}
