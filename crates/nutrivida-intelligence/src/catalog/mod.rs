// ABOUTME: Immutable per-slot variant tables indexed by the selection hash
// ABOUTME: Built-in Portuguese catalog, custom catalogs via CatalogBuilder, startup validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriVida Contributors

//! # Content Catalog
//!
//! Each [`ContentSlot`] owns an ordered table of variants. The position of a
//! variant inside its table is part of the persisted contract: a selection made
//! yesterday must still resolve to the same text today, so tables are append-only.
//!
//! The built-in catalog is process-wide and initialized once through
//! [`ContentCatalog::global`]. Alternative content packs are assembled with
//! [`CatalogBuilder`].

mod meals;
mod recipes;
mod tips;

use nutrivida_core::errors::CatalogError;
use nutrivida_core::models::{ContentKind, ContentSlot};
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::{Arc, OnceLock};

/// Per-serving nutrition numbers of a recipe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NutritionFacts {
    /// Energy (kcal)
    pub calories: u32,
    /// Protein (g)
    pub protein_g: u32,
    /// Carbohydrates (g)
    pub carbs_g: u32,
    /// Fat (g)
    pub fat_g: u32,
}

/// Structured recipe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RecipeCard {
    /// Recipe title
    pub name: &'static str,
    /// Ingredient lines
    pub ingredients: &'static [&'static str],
    /// Preparation steps, in order
    pub instructions: &'static [&'static str],
    /// Per-serving nutrition
    pub nutrition: NutritionFacts,
    /// Human-readable preparation time
    pub prep_time: &'static str,
    /// Number of servings
    pub servings: u32,
    /// Variation tip
    pub variation: &'static str,
}

/// Payload of a catalog variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum VariantBody {
    /// Preformatted text block
    Text(&'static str),
    /// List of items (meal components or tips)
    Items(&'static [&'static str]),
    /// Structured recipe
    Recipe(&'static RecipeCard),
}

impl VariantBody {
    /// Number of list items, if this is a list
    #[must_use]
    pub const fn item_count(&self) -> Option<usize> {
        match self {
            Self::Items(items) => Some(items.len()),
            Self::Text(_) | Self::Recipe(_) => None,
        }
    }
}

/// One selectable entry of a slot table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContentVariant {
    /// Owning slot
    pub slot: ContentSlot,
    /// Stable position within the slot table
    pub index: usize,
    /// Payload
    pub body: VariantBody,
}

/// Immutable collection of slot tables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentCatalog {
    tables: BTreeMap<ContentSlot, Vec<VariantBody>>,
}

static BUILTIN: OnceLock<Result<Arc<ContentCatalog>, CatalogError>> = OnceLock::new();

impl ContentCatalog {
    /// Start an empty builder
    #[must_use]
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    /// Build and validate the built-in catalog
    ///
    /// # Errors
    ///
    /// Returns an error if any slot table is missing or empty
    pub fn builtin() -> Result<Self, CatalogError> {
        let catalog = Self::builder()
            .items(ContentSlot::Breakfast, meals::BREAKFAST)
            .items(ContentSlot::MorningSnack, meals::MORNING_SNACK)
            .items(ContentSlot::Lunch, meals::LUNCH)
            .items(ContentSlot::AfternoonSnack, meals::AFTERNOON_SNACK)
            .items(ContentSlot::Dinner, meals::DINNER)
            .items(ContentSlot::EveningSnack, meals::EVENING_SNACK)
            .items(ContentSlot::NutritionTips, meals::NUTRITION_TIPS)
            .recipes(ContentSlot::Recipe, &recipes::RECIPES)
            .items(ContentSlot::MotivationalTips, tips::MOTIVATIONAL_TIPS)
            .build()?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Process-wide built-in catalog, initialized on first use
    ///
    /// # Errors
    ///
    /// Returns the validation error of the built-in tables, if any
    pub fn global() -> Result<Arc<Self>, CatalogError> {
        BUILTIN
            .get_or_init(|| Self::builtin().map(Arc::new))
            .clone()
    }

    /// Check that every slot has a non-empty table
    ///
    /// # Errors
    ///
    /// Returns the first missing or empty slot
    pub fn validate(&self) -> Result<(), CatalogError> {
        ContentSlot::ALL
            .iter()
            .try_for_each(|slot| self.require(*slot))
    }

    /// Check the slots a single kind needs
    ///
    /// # Errors
    ///
    /// Returns the first missing or empty slot of the kind
    pub fn validate_kind(&self, kind: ContentKind) -> Result<(), CatalogError> {
        kind.slots().iter().try_for_each(|slot| self.require(*slot))
    }

    fn require(&self, slot: ContentSlot) -> Result<(), CatalogError> {
        match self.tables.get(&slot) {
            None => Err(CatalogError::MissingSlot { slot }),
            Some(table) if table.is_empty() => Err(CatalogError::EmptySlot { slot }),
            Some(_) => Ok(()),
        }
    }

    /// Number of variants in a slot (0 when the slot is absent)
    #[must_use]
    pub fn len(&self, slot: ContentSlot) -> usize {
        self.tables.get(&slot).map_or(0, Vec::len)
    }

    /// Whether the catalog has no slot tables at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Variant at a stable index
    ///
    /// # Errors
    ///
    /// Returns an error if the slot is absent or the index is out of range
    pub fn variant_at(&self, slot: ContentSlot, index: usize) -> Result<ContentVariant, CatalogError> {
        let table = self
            .tables
            .get(&slot)
            .ok_or(CatalogError::MissingSlot { slot })?;
        let body = table.get(index).ok_or(CatalogError::IndexOutOfRange {
            slot,
            index,
            len: table.len(),
        })?;
        Ok(ContentVariant {
            slot,
            index,
            body: *body,
        })
    }

    /// Slots present in the catalog
    pub fn slots(&self) -> impl Iterator<Item = ContentSlot> + '_ {
        self.tables.keys().copied()
    }
}

/// Assembles a [`ContentCatalog`] slot by slot
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    tables: BTreeMap<ContentSlot, Vec<VariantBody>>,
}

impl CatalogBuilder {
    /// Append variants to a slot table
    #[must_use]
    pub fn slot(mut self, slot: ContentSlot, variants: impl IntoIterator<Item = VariantBody>) -> Self {
        self.tables.entry(slot).or_default().extend(variants);
        self
    }

    /// Append list variants
    #[must_use]
    pub fn items(self, slot: ContentSlot, table: &'static [&'static [&'static str]]) -> Self {
        self.slot(slot, table.iter().map(|items| VariantBody::Items(*items)))
    }

    /// Append text variants
    #[must_use]
    pub fn texts(self, slot: ContentSlot, table: &'static [&'static str]) -> Self {
        self.slot(slot, table.iter().map(|text| VariantBody::Text(*text)))
    }

    /// Append recipe variants
    #[must_use]
    pub fn recipes(self, slot: ContentSlot, table: &'static [RecipeCard]) -> Self {
        self.slot(slot, table.iter().map(VariantBody::Recipe))
    }

    /// Freeze the tables
    ///
    /// # Errors
    ///
    /// Returns an error if a declared slot has no variants
    pub fn build(self) -> Result<ContentCatalog, CatalogError> {
        if let Some((slot, _)) = self.tables.iter().find(|(_, table)| table.is_empty()) {
            return Err(CatalogError::EmptySlot { slot: *slot });
        }
        Ok(ContentCatalog {
            tables: self.tables,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table_sizes() {
        let catalog = ContentCatalog::builtin().unwrap();
        for slot in ContentSlot::DIET_PLAN {
            let expected = if slot == ContentSlot::NutritionTips { 5 } else { 10 };
            assert_eq!(catalog.len(slot), expected, "{slot}");
        }
        assert_eq!(catalog.len(ContentSlot::Recipe), 10);
        assert_eq!(catalog.len(ContentSlot::MotivationalTips), 10);
    }

    #[test]
    fn test_builtin_tip_sets_are_complete() {
        let catalog = ContentCatalog::builtin().unwrap();
        for index in 0..catalog.len(ContentSlot::NutritionTips) {
            let variant = catalog.variant_at(ContentSlot::NutritionTips, index).unwrap();
            assert_eq!(variant.body.item_count(), Some(3));
        }
        for index in 0..catalog.len(ContentSlot::MotivationalTips) {
            let variant = catalog.variant_at(ContentSlot::MotivationalTips, index).unwrap();
            assert_eq!(variant.body.item_count(), Some(5));
        }
    }

    #[test]
    fn test_empty_slot_is_rejected() {
        let result = ContentCatalog::builder()
            .slot(ContentSlot::Breakfast, Vec::new())
            .build();
        assert_eq!(
            result,
            Err(CatalogError::EmptySlot {
                slot: ContentSlot::Breakfast
            })
        );
    }
}
