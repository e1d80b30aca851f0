// ABOUTME: Contract tests for the in-memory and SQLite generation stores
// ABOUTME: Validates upserts, history ordering and filtering, persistence, and the factory
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriVida Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::Duration;
use common::{at, day};
use nutrivida::config::environment::DatabaseUrl;
use nutrivida::store::{
    create_store, GenerationStore, InMemoryGenerationStore, SqliteGenerationStore,
};
use nutrivida_core::models::{
    ContentKind, GenerationHistoryEntry, GenerationRecord, GenerationSource,
};
use tempfile::TempDir;

async fn stores() -> Vec<Box<dyn GenerationStore>> {
    common::init_test_logging();
    vec![
        Box::new(InMemoryGenerationStore::new()),
        Box::new(SqliteGenerationStore::in_memory().await.unwrap()),
    ]
}

#[tokio::test]
async fn test_get_missing_record() {
    for store in stores().await {
        let record = store.get("nobody", ContentKind::DietPlan).await.unwrap();
        assert!(record.is_none(), "{}", store.backend_name());
    }
}

#[tokio::test]
async fn test_put_overwrites_per_user_and_kind() {
    for store in stores().await {
        let first = GenerationRecord::new("abc123", ContentKind::Recipe, day(2024, 1, 1), "A");
        let second = GenerationRecord::new("abc123", ContentKind::Recipe, day(2024, 1, 2), "B");
        let plan = GenerationRecord::new("abc123", ContentKind::DietPlan, day(2024, 1, 1), "P");

        store.put(&first).await.unwrap();
        store.put(&plan).await.unwrap();
        store.put(&second).await.unwrap();

        let name = store.backend_name();
        assert_eq!(
            store.get("abc123", ContentKind::Recipe).await.unwrap(),
            Some(second.clone()),
            "{name}"
        );
        assert_eq!(
            store.get("abc123", ContentKind::DietPlan).await.unwrap(),
            Some(plan.clone()),
            "{name}"
        );
        assert!(store
            .get("other", ContentKind::Recipe)
            .await
            .unwrap()
            .is_none());
    }
}

#[tokio::test]
async fn test_timestamps_round_trip_with_subsecond_precision() {
    for store in stores().await {
        let instant = at("2024-02-29T23:59:59.123456Z");
        let record = GenerationRecord::new("abc123", ContentKind::MotivationalTips, instant, "T");
        store.put(&record).await.unwrap();
        let loaded = store
            .get("abc123", ContentKind::MotivationalTips)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(loaded.last_generated_at, instant, "{}", store.backend_name());
    }
}

#[tokio::test]
async fn test_history_ordering_filtering_and_limit() {
    for store in stores().await {
        let name = store.backend_name();
        for (offset, kind) in [
            (0, ContentKind::Recipe),
            (1, ContentKind::DietPlan),
            (2, ContentKind::Recipe),
            (3, ContentKind::Recipe),
        ] {
            let created = day(2024, 1, 1) + Duration::days(offset);
            let record = GenerationRecord::new("abc123", kind, created, format!("text-{offset}"));
            let token = created.format("%Y-%m-%d").to_string();
            let entry = GenerationHistoryEntry::new(&record, token, GenerationSource::Fresh);
            store.append_history(&entry).await.unwrap();
        }
        let other = GenerationRecord::new("zzz", ContentKind::Recipe, day(2024, 1, 9), "x");
        let forced = GenerationHistoryEntry::new(&other, "2024-01-09", GenerationSource::Forced);
        store.append_history(&forced).await.unwrap();

        let all = store.history("abc123", None, 10).await.unwrap();
        let texts: Vec<&str> = all.iter().map(|e| e.rendered_text.as_str()).collect();
        assert_eq!(texts, ["text-3", "text-2", "text-1", "text-0"], "{name}");

        let recipes = store
            .history("abc123", Some(ContentKind::Recipe), 2)
            .await
            .unwrap();
        let texts: Vec<&str> = recipes.iter().map(|e| e.rendered_text.as_str()).collect();
        assert_eq!(texts, ["text-3", "text-2"], "{name}");

        let theirs = store.history("zzz", None, 10).await.unwrap();
        assert_eq!(theirs.len(), 1, "{name}");
        assert_eq!(theirs[0].source, GenerationSource::Forced, "{name}");
        assert_eq!(theirs[0].context_token, "2024-01-09", "{name}");
    }
}

#[tokio::test]
async fn test_history_entries_round_trip() {
    for store in stores().await {
        let record = GenerationRecord::new("abc123", ContentKind::DietPlan, day(2024, 1, 1), "P");
        let entry = GenerationHistoryEntry::new(&record, "force-1", GenerationSource::AdminOverride);
        store.append_history(&entry).await.unwrap();
        let loaded = store.history("abc123", None, 1).await.unwrap();
        assert_eq!(loaded, vec![entry], "{}", store.backend_name());
    }
}

#[tokio::test]
async fn test_health_check() {
    for store in stores().await {
        assert!(store.health_check().await.is_ok(), "{}", store.backend_name());
    }
}

#[tokio::test]
async fn test_sqlite_file_persists_across_reopen() {
    common::init_test_logging();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("nutrivida.db");
    let record = GenerationRecord::new("abc123", ContentKind::DietPlan, day(2024, 1, 1), "P");

    {
        let store = SqliteGenerationStore::open(&path).await.unwrap();
        store.put(&record).await.unwrap();
        store.pool().close().await;
    }

    let reopened = SqliteGenerationStore::open(&path).await.unwrap();
    assert_eq!(
        reopened.get("abc123", ContentKind::DietPlan).await.unwrap(),
        Some(record)
    );
}

#[tokio::test]
async fn test_factory_selects_backend() {
    common::init_test_logging();
    let dir = TempDir::new().unwrap();
    let cases = [
        (DatabaseUrl::Memory, "memory"),
        (DatabaseUrl::SQLiteMemory, "sqlite"),
        (
            DatabaseUrl::SQLite {
                path: dir.path().join("factory.db"),
            },
            "sqlite",
        ),
    ];
    for (url, backend) in cases {
        let store = create_store(&url).await.unwrap();
        assert_eq!(store.backend_name(), backend, "{url}");
        assert!(store.health_check().await.is_ok());
    }
}
