// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides logging, fixed clocks, service builders, and failing collaborators
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriVida Contributors
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `nutrivida`

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use nutrivida::clock::FixedClock;
use nutrivida::services::ContentService;
use nutrivida::store::{GenerationStore, InMemoryGenerationStore, StoreError};
use nutrivida_core::models::{ContentKind, GenerationHistoryEntry, GenerationRecord};
use nutrivida_intelligence::availability::AvailabilityGate;
use nutrivida_intelligence::generator::{
    ContentGenerator, GenerationError, GenerationRequest, LocalContentGenerator,
};
use std::env;
use std::sync::{Arc, Once};
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Midnight UTC on the given day
pub fn day(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
        .and_utc()
}

/// Parse an RFC 3339 instant
pub fn at(rfc3339: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(rfc3339)
        .unwrap()
        .with_timezone(&Utc)
}

/// Catalog-backed generator over the built-in catalog
pub fn local_generator() -> Arc<dyn ContentGenerator> {
    Arc::new(LocalContentGenerator::builtin().unwrap())
}

/// Service over a fresh in-memory store with default cooldowns
pub fn create_test_service() -> (ContentService, Arc<InMemoryGenerationStore>) {
    init_test_logging();
    let store = Arc::new(InMemoryGenerationStore::new());
    let service = ContentService::new(store.clone(), local_generator(), AvailabilityGate::default());
    (service, store)
}

/// Service whose clock is frozen at `now`
pub fn create_test_service_at(now: DateTime<Utc>) -> (ContentService, Arc<FixedClock>) {
    let (service, _) = create_test_service();
    let clock = Arc::new(FixedClock::new(now));
    (service.with_clock(clock.clone()), clock)
}

/// Store whose every operation fails
#[derive(Debug, Default)]
pub struct FailingStore;

#[async_trait]
impl GenerationStore for FailingStore {
    fn backend_name(&self) -> &'static str {
        "failing"
    }

    async fn get(
        &self,
        _user_id: &str,
        _kind: ContentKind,
    ) -> Result<Option<GenerationRecord>, StoreError> {
        Err(StoreError::Unavailable("connection refused".into()))
    }

    async fn put(&self, _record: &GenerationRecord) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("connection refused".into()))
    }

    async fn append_history(&self, _entry: &GenerationHistoryEntry) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("connection refused".into()))
    }

    async fn history(
        &self,
        _user_id: &str,
        _kind: Option<ContentKind>,
        _limit: u32,
    ) -> Result<Vec<GenerationHistoryEntry>, StoreError> {
        Err(StoreError::Unavailable("connection refused".into()))
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("connection refused".into()))
    }
}

/// Generator that always reports itself unavailable
#[derive(Debug, Default)]
pub struct UnavailableGenerator;

impl ContentGenerator for UnavailableGenerator {
    fn name(&self) -> &'static str {
        "unavailable"
    }

    fn generate(&self, _request: &GenerationRequest<'_>) -> Result<String, GenerationError> {
        Err(GenerationError::Unavailable {
            generator: self.name().to_owned(),
            reason: "quota exhausted".to_owned(),
        })
    }
}
