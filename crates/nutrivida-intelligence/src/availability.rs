// ABOUTME: Cooldown-based availability gate deciding when content may be regenerated
// ABOUTME: Pure state machine over the last generation record and the current instant
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriVida Contributors

//! # Availability Gate
//!
//! ```text
//! NeverGenerated --generate--> Fresh --(now >= next_eligible_at)--> Eligible
//!                                ^                                      |
//!                                +---------------generate---------------+
//! ```
//!
//! The boundary is inclusive: at exactly `next_eligible_at` the record is eligible.
//! The gate never shortens a cooldown for regular users. Only an administrator
//! authority may bypass it, and every bypass is logged.

use chrono::{DateTime, Duration, Utc};
use nutrivida_core::constants::cooldowns::{
    DIET_PLAN_COOLDOWN_DAYS, MOTIVATIONAL_TIPS_COOLDOWN_DAYS, RECIPE_COOLDOWN_HOURS,
};
use nutrivida_core::models::{
    ContentKind, CooldownViolation, GenerationRecord, RegenerationAuthority,
};
use serde::Serialize;
use tracing::warn;

/// Minimum interval between generations, per kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CooldownPolicy {
    diet_plan: Duration,
    recipe: Duration,
    motivational_tips: Duration,
}

impl CooldownPolicy {
    /// Policy with explicit intervals
    #[must_use]
    pub const fn new(diet_plan: Duration, recipe: Duration, motivational_tips: Duration) -> Self {
        Self {
            diet_plan,
            recipe,
            motivational_tips,
        }
    }

    /// Interval for a kind
    #[must_use]
    pub const fn cooldown(&self, kind: ContentKind) -> Duration {
        match kind {
            ContentKind::DietPlan => self.diet_plan,
            ContentKind::Recipe => self.recipe,
            ContentKind::MotivationalTips => self.motivational_tips,
        }
    }
}

impl Default for CooldownPolicy {
    fn default() -> Self {
        Self::new(
            Duration::days(DIET_PLAN_COOLDOWN_DAYS),
            Duration::hours(RECIPE_COOLDOWN_HOURS),
            Duration::days(MOTIVATIONAL_TIPS_COOLDOWN_DAYS),
        )
    }
}

/// Availability of a (user, kind) pair at a given instant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum AvailabilityState {
    /// No record exists yet
    NeverGenerated,
    /// Persisted text must be served until `next_eligible_at`
    Fresh {
        /// When regeneration becomes possible
        next_eligible_at: DateTime<Utc>,
    },
    /// Cooldown elapsed
    Eligible {
        /// When the cooldown elapsed
        since: DateTime<Utc>,
    },
}

impl AvailabilityState {
    /// Whether new content may be generated
    #[must_use]
    pub const fn can_generate(&self) -> bool {
        !matches!(self, Self::Fresh { .. })
    }
}

/// Evaluates generation records against a cooldown policy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AvailabilityGate {
    policy: CooldownPolicy,
}

impl AvailabilityGate {
    /// Gate using the given policy
    #[must_use]
    pub const fn new(policy: CooldownPolicy) -> Self {
        Self { policy }
    }

    /// Policy in effect
    #[must_use]
    pub const fn policy(&self) -> &CooldownPolicy {
        &self.policy
    }

    /// Instant a generation at `last_generated_at` stops being fresh
    ///
    /// Saturates at the latest representable instant.
    #[must_use]
    pub fn next_eligible_at(
        &self,
        kind: ContentKind,
        last_generated_at: DateTime<Utc>,
    ) -> DateTime<Utc> {
        last_generated_at
            .checked_add_signed(self.policy.cooldown(kind))
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }

    /// State of a record at `now`
    #[must_use]
    pub fn evaluate(
        &self,
        record: Option<&GenerationRecord>,
        now: DateTime<Utc>,
    ) -> AvailabilityState {
        let Some(record) = record else {
            return AvailabilityState::NeverGenerated;
        };
        let next_eligible_at = self.next_eligible_at(record.kind, record.last_generated_at);
        if now >= next_eligible_at {
            AvailabilityState::Eligible {
                since: next_eligible_at,
            }
        } else {
            AvailabilityState::Fresh { next_eligible_at }
        }
    }

    /// Whether new content may be generated at `now`
    #[must_use]
    pub fn can_generate(&self, record: Option<&GenerationRecord>, now: DateTime<Utc>) -> bool {
        self.evaluate(record, now).can_generate()
    }

    /// Wait until eligibility; zero when never generated, zero or negative once eligible
    #[must_use]
    pub fn time_until_eligible(
        &self,
        record: Option<&GenerationRecord>,
        now: DateTime<Utc>,
    ) -> Duration {
        record.map_or_else(Duration::zero, |record| {
            self.next_eligible_at(record.kind, record.last_generated_at) - now
        })
    }

    /// Decide whether a forced regeneration may proceed
    ///
    /// # Errors
    ///
    /// Returns a [`CooldownViolation`] when the record is still fresh and the
    /// authority cannot bypass cooldowns
    pub fn check_forced(
        &self,
        record: Option<&GenerationRecord>,
        now: DateTime<Utc>,
        authority: &RegenerationAuthority,
    ) -> Result<(), CooldownViolation> {
        let (Some(record), AvailabilityState::Fresh { next_eligible_at }) =
            (record, self.evaluate(record, now))
        else {
            return Ok(());
        };

        if !authority.can_bypass_cooldown() {
            return Err(CooldownViolation::new(record.kind, next_eligible_at, now));
        }
        warn!(
            user.id = %record.user_id,
            content.kind = %record.kind,
            next_eligible_at = %next_eligible_at,
            reason = authority.bypass_reason().unwrap_or_default(),
            "Administrator bypassing regeneration cooldown"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn record_at(kind: ContentKind, at: DateTime<Utc>) -> GenerationRecord {
        GenerationRecord::new("u", kind, at, "text")
    }

    #[test]
    fn test_time_until_eligible_goes_negative() {
        let gate = AvailabilityGate::default();
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap();
        let record = record_at(ContentKind::Recipe, at);
        assert_eq!(
            gate.time_until_eligible(Some(&record), at + Duration::hours(30)),
            Duration::hours(-6)
        );
        assert_eq!(gate.time_until_eligible(None, at), Duration::zero());
    }

    #[test]
    fn test_state_reports_generation_permission() {
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap();
        assert!(AvailabilityState::NeverGenerated.can_generate());
        assert!(AvailabilityState::Eligible { since: at }.can_generate());
        assert!(!AvailabilityState::Fresh {
            next_eligible_at: at
        }
        .can_generate());
    }
}
