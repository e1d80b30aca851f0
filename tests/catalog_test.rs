// ABOUTME: Tests for the built-in content catalog and custom catalog assembly
// ABOUTME: Validates table shapes, global initialization, and configuration defects
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriVida Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use nutrivida_core::errors::{AppError, CatalogError, ErrorCode};
use nutrivida_core::models::{ContentKind, ContentSlot};
use nutrivida_intelligence::catalog::{ContentCatalog, VariantBody};
use std::sync::Arc;

#[test]
fn test_builtin_catalog_covers_every_slot() {
    let catalog = ContentCatalog::builtin().unwrap();
    let slots: Vec<ContentSlot> = catalog.slots().collect();
    assert_eq!(slots.len(), ContentSlot::ALL.len());
    for slot in ContentSlot::ALL {
        assert!(catalog.len(slot) > 0, "{slot} is empty");
    }
    assert!(catalog.validate().is_ok());
    for kind in ContentKind::ALL {
        assert!(catalog.validate_kind(kind).is_ok());
    }
}

#[test]
fn test_global_catalog_is_shared() {
    let first = ContentCatalog::global().unwrap();
    let second = ContentCatalog::global().unwrap();
    assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn test_meal_items_have_no_list_markers() {
    let catalog = ContentCatalog::builtin().unwrap();
    for slot in ContentSlot::DIET_PLAN {
        for index in 0..catalog.len(slot) {
            let VariantBody::Items(items) = catalog.variant_at(slot, index).unwrap().body else {
                panic!("{slot}[{index}] is not an item list");
            };
            assert!(!items.is_empty());
            for item in items {
                assert!(!item.starts_with("- "), "{slot}[{index}]: {item}");
                assert!(!item.trim().is_empty());
            }
        }
    }
}

#[test]
fn test_recipes_are_complete() {
    let catalog = ContentCatalog::builtin().unwrap();
    for index in 0..catalog.len(ContentSlot::Recipe) {
        let VariantBody::Recipe(card) = catalog.variant_at(ContentSlot::Recipe, index).unwrap().body
        else {
            panic!("recipe[{index}] is not a recipe card");
        };
        assert!(!card.name.is_empty());
        assert!(!card.ingredients.is_empty());
        assert!(!card.instructions.is_empty());
        assert!(card.servings >= 1);
        assert!(card.nutrition.calories > 0);
    }
}

#[test]
fn test_variant_out_of_range() {
    let catalog = ContentCatalog::builtin().unwrap();
    let error = catalog.variant_at(ContentSlot::Lunch, 10).unwrap_err();
    assert_eq!(
        error,
        CatalogError::IndexOutOfRange {
            slot: ContentSlot::Lunch,
            index: 10,
            len: 10
        }
    );
}

#[test]
fn test_custom_catalog_missing_slot() {
    static TIPS: &[&[&str]] = &[&["Beba água"]];
    let catalog = ContentCatalog::builder()
        .items(ContentSlot::MotivationalTips, TIPS)
        .build()
        .unwrap();

    assert!(catalog.validate_kind(ContentKind::MotivationalTips).is_ok());
    assert_eq!(
        catalog.validate_kind(ContentKind::DietPlan),
        Err(CatalogError::MissingSlot {
            slot: ContentSlot::Breakfast
        })
    );
    assert_eq!(
        catalog.validate(),
        Err(CatalogError::MissingSlot {
            slot: ContentSlot::Breakfast
        })
    );
}

#[test]
fn test_custom_catalog_text_variants() {
    static GREETINGS: &[&str] = &["Bom dia!", "Boa tarde!"];
    let catalog = ContentCatalog::builder()
        .texts(ContentSlot::MotivationalTips, GREETINGS)
        .build()
        .unwrap();
    assert_eq!(catalog.len(ContentSlot::MotivationalTips), 2);
    assert_eq!(
        catalog.variant_at(ContentSlot::MotivationalTips, 1).unwrap().body,
        VariantBody::Text("Boa tarde!")
    );
}

#[test]
fn test_catalog_error_maps_to_config_error() {
    let error: AppError = CatalogError::EmptySlot {
        slot: ContentSlot::Dinner,
    }
    .into();
    assert_eq!(error.code, ErrorCode::ConfigInvalid);
    assert_eq!(error.context.resource_id.as_deref(), Some("dinner"));
}
