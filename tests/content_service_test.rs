// ABOUTME: Integration tests for the cooldown-gated content service
// ABOUTME: Covers caching within cooldowns, forced regeneration, store outages, fallbacks, and history
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriVida Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::{Duration, NaiveDate};
use common::{at, create_test_service, day, local_generator, FailingStore, UnavailableGenerator};
use nutrivida::config::environment::{CooldownConfig, DatabaseUrl, ServerConfig};
use nutrivida::services::{ContentOrigin, ContentService, RegenerationOutcome};
use nutrivida::store::{GenerationStore, InMemoryGenerationStore};
use nutrivida_core::errors::ErrorCode;
use nutrivida_core::models::{
    ContentKind, ContextToken, GenerationRecord, GenerationSource, RegenerationAuthority,
};
use nutrivida_intelligence::availability::{AvailabilityGate, AvailabilityState};
use nutrivida_intelligence::catalog::ContentCatalog;
use nutrivida_intelligence::formatter::{fallback_text, render, RenderParameters};
use nutrivida_intelligence::selector::PlanSelector;
use std::sync::Arc;

fn params() -> RenderParameters {
    RenderParameters::default()
}

fn expected_plan(user_id: &str, date: NaiveDate, params: &RenderParameters) -> String {
    let catalog = ContentCatalog::builtin().unwrap();
    let content = PlanSelector::new(&catalog)
        .select(ContentKind::DietPlan, user_id, &ContextToken::Day(date))
        .unwrap();
    render(ContentKind::DietPlan, &content, params).unwrap()
}

#[tokio::test]
async fn test_diet_plan_is_cached_for_a_week() {
    let (service, _) = create_test_service();
    let monday = at("2024-01-01T09:00:00Z");

    let first = service
        .get_or_generate("abc123", ContentKind::DietPlan, monday, &params())
        .await
        .unwrap();
    assert_eq!(first.origin, ContentOrigin::Fresh);
    assert_eq!(first.generated_at, monday);
    assert_eq!(first.next_eligible_at, Some(at("2024-01-08T09:00:00Z")));
    assert_eq!(
        first.text,
        expected_plan("abc123", NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), &params())
    );

    let friday = at("2024-01-05T18:00:00Z");
    let cached = service
        .get_or_generate("abc123", ContentKind::DietPlan, friday, &params())
        .await
        .unwrap();
    assert_eq!(cached.origin, ContentOrigin::Cached);
    assert_eq!(cached.text, first.text);
    assert_eq!(cached.generated_at, monday);
    assert_eq!(cached.next_eligible_at, first.next_eligible_at);

    let next_monday = at("2024-01-08T09:00:00Z");
    let renewed = service
        .get_or_generate("abc123", ContentKind::DietPlan, next_monday, &params())
        .await
        .unwrap();
    assert_eq!(renewed.origin, ContentOrigin::Fresh);
    assert_eq!(renewed.next_eligible_at, Some(at("2024-01-15T09:00:00Z")));
    assert_eq!(
        renewed.text,
        expected_plan("abc123", NaiveDate::from_ymd_opt(2024, 1, 8).unwrap(), &params())
    );
    assert_ne!(renewed.text, first.text);
}

#[tokio::test]
async fn test_cached_text_ignores_new_parameters() {
    let (service, _) = create_test_service();
    let now = day(2024, 1, 1);
    service
        .get_or_generate("abc123", ContentKind::DietPlan, now, &params())
        .await
        .unwrap();

    let later = service
        .get_or_generate(
            "abc123",
            ContentKind::DietPlan,
            now + Duration::hours(1),
            &RenderParameters::with_target_calories(2000),
        )
        .await
        .unwrap();
    assert!(later.text.starts_with("# Plano Alimentar Personalizado (1500 kcal)"));
}

#[tokio::test]
async fn test_recipe_cooldown_is_a_day() {
    let (service, _) = create_test_service();
    let morning = at("2024-01-01T08:00:00Z");
    let first = service
        .get_or_generate("abc123", ContentKind::Recipe, morning, &params())
        .await
        .unwrap();
    assert_eq!(first.next_eligible_at, Some(at("2024-01-02T08:00:00Z")));

    assert!(
        !service
            .can_generate("abc123", ContentKind::Recipe, at("2024-01-02T07:59:59Z"))
            .await
    );
    assert!(
        service
            .can_generate("abc123", ContentKind::Recipe, at("2024-01-02T08:00:00Z"))
            .await
    );
    assert_eq!(
        service
            .time_until_eligible("abc123", ContentKind::Recipe, at("2024-01-01T20:00:00Z"))
            .await,
        Duration::hours(12)
    );

    let second = service
        .get_or_generate("abc123", ContentKind::Recipe, at("2024-01-02T08:00:00Z"), &params())
        .await
        .unwrap();
    assert_eq!(second.origin, ContentOrigin::Fresh);
    assert_ne!(second.text, first.text);
}

#[tokio::test]
async fn test_kinds_and_users_are_independent() {
    let (service, _) = create_test_service();
    let now = day(2024, 1, 1);
    service
        .get_or_generate("abc123", ContentKind::DietPlan, now, &params())
        .await
        .unwrap();

    assert!(
        service
            .can_generate("abc123", ContentKind::Recipe, now)
            .await
    );
    assert!(
        service
            .can_generate("someone-else", ContentKind::DietPlan, now)
            .await
    );
    assert_eq!(
        service
            .availability("someone-else", ContentKind::DietPlan, now)
            .await,
        AvailabilityState::NeverGenerated
    );
}

#[tokio::test]
async fn test_motivational_tips_use_weeks_on_diet() {
    let (service, _) = create_test_service();
    let tips = service
        .get_or_generate(
            "user1",
            ContentKind::MotivationalTips,
            day(2024, 3, 10),
            &RenderParameters::default().weeks_on_diet(1),
        )
        .await
        .unwrap();

    let catalog = ContentCatalog::builtin().unwrap();
    let content = PlanSelector::new(&catalog)
        .select(ContentKind::MotivationalTips, "user1", &ContextToken::Week(1))
        .unwrap();
    let expected = render(ContentKind::MotivationalTips, &content, &params()).unwrap();
    assert_eq!(tips.text, expected);
}

#[tokio::test]
async fn test_forced_regeneration_rejected_during_cooldown() {
    let (service, store) = create_test_service();
    let start = at("2024-01-01T08:00:00Z");
    let original = service
        .get_or_generate("abc123", ContentKind::Recipe, start, &params())
        .await
        .unwrap();

    let outcome = service
        .force_regenerate(
            "abc123",
            ContentKind::Recipe,
            at("2024-01-01T12:00:00Z"),
            &params(),
            &RegenerationAuthority::User,
        )
        .await
        .unwrap();
    let RegenerationOutcome::Rejected(violation) = outcome else {
        panic!("expected rejection, got {outcome:?}");
    };
    assert_eq!(violation.next_eligible_at, at("2024-01-02T08:00:00Z"));
    assert_eq!(violation.remaining_hours(), 20);

    let stored = store.get("abc123", ContentKind::Recipe).await.unwrap().unwrap();
    assert_eq!(stored.rendered_text, original.text);
    assert_eq!(stored.last_generated_at, start);
}

#[tokio::test]
async fn test_forced_regeneration_after_cooldown_uses_forced_token() {
    let (service, _) = create_test_service();
    let now = at("2024-01-03T08:00:00Z");
    service
        .get_or_generate("abc123", ContentKind::Recipe, day(2024, 1, 1), &params())
        .await
        .unwrap();

    let outcome = service
        .force_regenerate(
            "abc123",
            ContentKind::Recipe,
            now,
            &params(),
            &RegenerationAuthority::User,
        )
        .await
        .unwrap();
    let RegenerationOutcome::Generated(content) = outcome else {
        panic!("expected generation, got {outcome:?}");
    };
    assert_eq!(content.origin, ContentOrigin::Fresh);
    assert_eq!(content.generated_at, now);

    let history = service
        .history("abc123", Some(ContentKind::Recipe), None)
        .await
        .unwrap();
    assert_eq!(history[0].source, GenerationSource::Forced);
    assert_eq!(
        history[0].context_token,
        format!("force-{}", now.timestamp_millis())
    );
}

#[tokio::test]
async fn test_administrator_override_during_cooldown() {
    let (service, store) = create_test_service();
    service
        .get_or_generate("abc123", ContentKind::DietPlan, day(2024, 1, 1), &params())
        .await
        .unwrap();

    let now = at("2024-01-02T10:00:00Z");
    let outcome = service
        .force_regenerate(
            "abc123",
            ContentKind::DietPlan,
            now,
            &params(),
            &RegenerationAuthority::Administrator {
                reason: "nutritionist adjusted the plan".into(),
            },
        )
        .await
        .unwrap();
    let RegenerationOutcome::Generated(content) = outcome else {
        panic!("expected generation, got {outcome:?}");
    };
    assert_eq!(content.next_eligible_at, Some(at("2024-01-09T10:00:00Z")));

    let stored = store.get("abc123", ContentKind::DietPlan).await.unwrap().unwrap();
    assert_eq!(stored.last_generated_at, now);

    let history = service.history("abc123", None, None).await.unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].source, GenerationSource::AdminOverride);
    assert_eq!(history[1].source, GenerationSource::Fresh);
    assert_eq!(history[1].context_token, "2024-01-01");
}

#[tokio::test]
async fn test_store_outage_does_not_block_generation() {
    common::init_test_logging();
    let service = ContentService::new(
        Arc::new(FailingStore),
        local_generator(),
        AvailabilityGate::default(),
    );
    let now = day(2024, 1, 1);

    let first = service
        .get_or_generate("abc123", ContentKind::DietPlan, now, &params())
        .await
        .unwrap();
    assert_eq!(first.origin, ContentOrigin::Fresh);
    assert_eq!(
        first.text,
        expected_plan("abc123", NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), &params())
    );

    // Nothing persisted: every call behaves like the first one
    let again = service
        .get_or_generate("abc123", ContentKind::DietPlan, now + Duration::hours(1), &params())
        .await
        .unwrap();
    assert_eq!(again.origin, ContentOrigin::Fresh);
    assert_eq!(again.text, first.text);
    assert!(service.can_generate("abc123", ContentKind::DietPlan, now).await);

    let error = service.history("abc123", None, None).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::StorageError);
}

#[tokio::test]
async fn test_generation_failure_in_strict_mode_is_an_error() {
    common::init_test_logging();
    let service = ContentService::new(
        Arc::new(InMemoryGenerationStore::new()),
        Arc::new(UnavailableGenerator),
        AvailabilityGate::default(),
    );
    let error = service
        .get_or_generate("abc123", ContentKind::Recipe, day(2024, 1, 1), &params())
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::ResourceUnavailable);
    assert_eq!(error.context.user_id.as_deref(), Some("abc123"));
}

#[tokio::test]
async fn test_generation_failure_serves_unpersisted_fallback() {
    common::init_test_logging();
    let store = Arc::new(InMemoryGenerationStore::new());
    let service = ContentService::new(
        store.clone(),
        Arc::new(UnavailableGenerator),
        AvailabilityGate::default(),
    )
    .with_strict_generation(false);

    let content = service
        .get_or_generate("abc123", ContentKind::MotivationalTips, day(2024, 1, 1), &params())
        .await
        .unwrap();
    assert_eq!(content.origin, ContentOrigin::Fallback);
    assert_eq!(content.text, fallback_text(ContentKind::MotivationalTips));
    assert_eq!(content.next_eligible_at, None);

    assert!(store.is_empty().await);
    assert!(
        service
            .can_generate("abc123", ContentKind::MotivationalTips, day(2024, 1, 1))
            .await
    );
}

#[tokio::test]
async fn test_history_is_newest_first_and_limited() {
    let (service, _) = create_test_service();
    for offset in 0..3 {
        service
            .get_or_generate(
                "abc123",
                ContentKind::Recipe,
                day(2024, 1, 1) + Duration::days(offset),
                &params(),
            )
            .await
            .unwrap();
    }
    service
        .get_or_generate("abc123", ContentKind::DietPlan, day(2024, 1, 1), &params())
        .await
        .unwrap();

    let recipes = service
        .history("abc123", Some(ContentKind::Recipe), None)
        .await
        .unwrap();
    let tokens: Vec<&str> = recipes.iter().map(|e| e.context_token.as_str()).collect();
    assert_eq!(tokens, ["2024-01-03", "2024-01-02", "2024-01-01"]);

    let limited = service.history("abc123", None, Some(2)).await.unwrap();
    assert_eq!(limited.len(), 2);
    assert_eq!(limited[0].created_at, day(2024, 1, 3));

    let clamped = service.history("abc123", None, Some(0)).await.unwrap();
    assert_eq!(clamped.len(), 1);
}

#[tokio::test]
async fn test_service_clock() {
    let (service, clock) = common::create_test_service_at(day(2024, 1, 1));
    assert_eq!(service.now(), day(2024, 1, 1));
    clock.advance(Duration::days(7));
    assert_eq!(service.now(), day(2024, 1, 8));
}

#[tokio::test]
async fn test_records_written_by_another_process_are_honored() {
    let (service, store) = create_test_service();
    let written = at("2024-01-01T06:00:00Z");
    store
        .put(&GenerationRecord::new(
            "abc123",
            ContentKind::Recipe,
            written,
            "Receita gravada",
        ))
        .await
        .unwrap();

    let content = service
        .get_or_generate("abc123", ContentKind::Recipe, at("2024-01-01T12:00:00Z"), &params())
        .await
        .unwrap();
    assert_eq!(content.origin, ContentOrigin::Cached);
    assert_eq!(content.text, "Receita gravada");
}

#[tokio::test]
async fn test_unrepresentable_cooldown_is_a_configuration_error() {
    common::init_test_logging();
    let config = ServerConfig {
        database: DatabaseUrl::Memory,
        cooldowns: CooldownConfig {
            recipe_hours: i64::MAX,
            ..CooldownConfig::default()
        },
        ..ServerConfig::default()
    };
    let error = ContentService::from_config(&config).await.err().unwrap();
    assert_eq!(error.code, ErrorCode::ConfigInvalid);
    assert!(error.message.contains("RECIPE_COOLDOWN_HOURS"));
}
