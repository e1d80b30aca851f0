// ABOUTME: Cooldown-gated content service composing store, gate, and generator
// ABOUTME: get_or_generate, force_regenerate, eligibility queries, fallback policy, and history
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriVida Contributors

//! # Content Service
//!
//! Store failures never block a user: a failed read is treated as "never
//! generated" and a failed write still returns the fresh text. Generation
//! failures surface as errors in strict mode and as the fallback notice
//! otherwise. Fallback notices are never persisted.

use crate::clock::{Clock, SystemClock};
use crate::config::environment::{GeneratorKind, ServerConfig};
use crate::logging::AppLogger;
use crate::store::{create_store, GenerationStore};
use chrono::{DateTime, Duration, Utc};
use nutrivida_core::constants::limits::{DEFAULT_HISTORY_LIMIT, MAX_HISTORY_LIMIT};
use nutrivida_core::errors::{AppError, AppResult};
use nutrivida_core::models::{
    ContentKind, CooldownViolation, GenerationHistoryEntry, GenerationRecord, GenerationSource,
    RegenerationAuthority,
};
use nutrivida_intelligence::availability::{AvailabilityGate, AvailabilityState};
use nutrivida_intelligence::formatter::{fallback_text, RenderParameters};
use nutrivida_intelligence::generator::{
    ContentGenerator, GenerationError, GenerationRequest, LocalContentGenerator,
};
use serde::Serialize;
use std::sync::Arc;

/// Where served text came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentOrigin {
    /// Persisted text still inside its cooldown
    Cached,
    /// Generated by this call
    Fresh,
    /// Hardcoded notice after a generation failure
    Fallback,
}

/// Text served to the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedContent {
    /// Content kind
    pub kind: ContentKind,
    /// Rendered text
    pub text: String,
    /// When the text was generated
    pub generated_at: DateTime<Utc>,
    /// When regeneration becomes possible; `None` for fallback notices
    pub next_eligible_at: Option<DateTime<Utc>>,
    /// Where the text came from
    pub origin: ContentOrigin,
}

/// Result of a forced regeneration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegenerationOutcome {
    /// New content was generated
    Generated(GeneratedContent),
    /// Cooldown still active
    Rejected(CooldownViolation),
}

/// Composition of store, availability gate, and generator
#[derive(Clone)]
pub struct ContentService {
    store: Arc<dyn GenerationStore>,
    generator: Arc<dyn ContentGenerator>,
    gate: AvailabilityGate,
    strict_generation: bool,
    clock: Arc<dyn Clock>,
}

impl ContentService {
    /// Service over explicit collaborators, strict generation, system clock
    #[must_use]
    pub fn new(
        store: Arc<dyn GenerationStore>,
        generator: Arc<dyn ContentGenerator>,
        gate: AvailabilityGate,
    ) -> Self {
        Self {
            store,
            generator,
            gate,
            strict_generation: true,
            clock: Arc::new(SystemClock),
        }
    }

    /// Build every collaborator from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be opened, the catalog is invalid, or a
    /// cooldown cannot be represented
    pub async fn from_config(config: &ServerConfig) -> AppResult<Self> {
        let store = create_store(&config.database).await?;
        let generator: Arc<dyn ContentGenerator> = match config.generator {
            GeneratorKind::Local => Arc::new(LocalContentGenerator::builtin()?),
        };
        let policy = config
            .cooldowns
            .to_policy()
            .map_err(|e| AppError::config(format!("{e:#}")))?;
        let gate = AvailabilityGate::new(policy);
        Ok(Self::new(store, generator, gate).with_strict_generation(config.strict_generation))
    }

    /// Return generation errors (`true`) or serve fallback notices (`false`)
    #[must_use]
    pub const fn with_strict_generation(mut self, strict: bool) -> Self {
        self.strict_generation = strict;
        self
    }

    /// Replace the clock
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Current instant according to the configured clock
    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Availability gate in use
    #[must_use]
    pub const fn gate(&self) -> &AvailabilityGate {
        &self.gate
    }

    /// Store in use
    #[must_use]
    pub fn store(&self) -> &Arc<dyn GenerationStore> {
        &self.store
    }

    /// Serve the persisted text while fresh, otherwise generate and persist new text
    ///
    /// # Errors
    ///
    /// Returns an error only in strict mode, when generation fails
    pub async fn get_or_generate(
        &self,
        user_id: &str,
        kind: ContentKind,
        now: DateTime<Utc>,
        params: &RenderParameters,
    ) -> AppResult<GeneratedContent> {
        let record = self.load_record(user_id, kind).await;

        if let (Some(record), AvailabilityState::Fresh { next_eligible_at }) =
            (&record, self.gate.evaluate(record.as_ref(), now))
        {
            AppLogger::log_cache_hit(user_id, kind, next_eligible_at);
            return Ok(GeneratedContent {
                kind,
                text: record.rendered_text.clone(),
                generated_at: record.last_generated_at,
                next_eligible_at: Some(next_eligible_at),
                origin: ContentOrigin::Cached,
            });
        }

        let request = GenerationRequest::natural(user_id, kind, now, *params);
        self.generate_and_store(&request, now, GenerationSource::Fresh)
            .await
    }

    /// Regenerate with a forced token, honoring the cooldown unless an
    /// administrator bypasses it
    ///
    /// # Errors
    ///
    /// Returns an error only in strict mode, when generation fails
    pub async fn force_regenerate(
        &self,
        user_id: &str,
        kind: ContentKind,
        now: DateTime<Utc>,
        params: &RenderParameters,
        authority: &RegenerationAuthority,
    ) -> AppResult<RegenerationOutcome> {
        let record = self.load_record(user_id, kind).await;

        if let Err(violation) = self.gate.check_forced(record.as_ref(), now, authority) {
            AppLogger::log_rejection(user_id, kind, violation.next_eligible_at);
            return Ok(RegenerationOutcome::Rejected(violation));
        }

        let bypassed = !self.gate.can_generate(record.as_ref(), now);
        let source = if bypassed {
            GenerationSource::AdminOverride
        } else {
            GenerationSource::Forced
        };
        let request = GenerationRequest::forced(user_id, kind, now, *params);
        self.generate_and_store(&request, now, source)
            .await
            .map(RegenerationOutcome::Generated)
    }

    /// Whether new content may be generated at `now`
    pub async fn can_generate(&self, user_id: &str, kind: ContentKind, now: DateTime<Utc>) -> bool {
        let record = self.load_record(user_id, kind).await;
        self.gate.can_generate(record.as_ref(), now)
    }

    /// Wait until eligibility; zero when never generated, zero or negative once eligible
    pub async fn time_until_eligible(
        &self,
        user_id: &str,
        kind: ContentKind,
        now: DateTime<Utc>,
    ) -> Duration {
        let record = self.load_record(user_id, kind).await;
        self.gate.time_until_eligible(record.as_ref(), now)
    }

    /// Full availability state
    pub async fn availability(
        &self,
        user_id: &str,
        kind: ContentKind,
        now: DateTime<Utc>,
    ) -> AvailabilityState {
        let record = self.load_record(user_id, kind).await;
        self.gate.evaluate(record.as_ref(), now)
    }

    /// Generated texts for a user, newest first
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read
    pub async fn history(
        &self,
        user_id: &str,
        kind: Option<ContentKind>,
        limit: Option<u32>,
    ) -> AppResult<Vec<GenerationHistoryEntry>> {
        let limit = limit
            .unwrap_or(DEFAULT_HISTORY_LIMIT)
            .clamp(1, MAX_HISTORY_LIMIT);
        self.store
            .history(user_id, kind, limit)
            .await
            .map_err(|e| AppError::from(e).with_user_id(user_id))
    }

    async fn load_record(&self, user_id: &str, kind: ContentKind) -> Option<GenerationRecord> {
        match self.store.get(user_id, kind).await {
            Ok(record) => record,
            Err(e) => {
                AppLogger::log_store_degradation("get", user_id, kind, &e.to_string());
                None
            }
        }
    }

    async fn generate_and_store(
        &self,
        request: &GenerationRequest<'_>,
        now: DateTime<Utc>,
        source: GenerationSource,
    ) -> AppResult<GeneratedContent> {
        let (user_id, kind) = (request.user_id, request.kind);
        let text = match self.generator.generate(request) {
            Ok(text) => text,
            Err(error) => return self.handle_generation_failure(user_id, kind, now, error),
        };

        let record = GenerationRecord::new(user_id, kind, now, text);
        if let Err(e) = self.store.put(&record).await {
            AppLogger::log_store_degradation("put", user_id, kind, &e.to_string());
        }
        let entry = GenerationHistoryEntry::new(&record, request.token.to_string(), source);
        if let Err(e) = self.store.append_history(&entry).await {
            AppLogger::log_store_degradation("append_history", user_id, kind, &e.to_string());
        }
        AppLogger::log_generation(user_id, kind, &entry.context_token, source.as_str());

        Ok(GeneratedContent {
            kind,
            next_eligible_at: Some(self.gate.next_eligible_at(kind, now)),
            generated_at: now,
            text: record.rendered_text,
            origin: ContentOrigin::Fresh,
        })
    }

    fn handle_generation_failure(
        &self,
        user_id: &str,
        kind: ContentKind,
        now: DateTime<Utc>,
        error: GenerationError,
    ) -> AppResult<GeneratedContent> {
        if self.strict_generation {
            return Err(AppError::from(error).with_user_id(user_id));
        }
        AppLogger::log_fallback(user_id, kind, &error.to_string());
        Ok(GeneratedContent {
            kind,
            text: fallback_text(kind).to_owned(),
            generated_at: now,
            next_eligible_at: None,
            origin: ContentOrigin::Fallback,
        })
    }
}
