// ABOUTME: Deterministic per-slot selection from the content catalog
// ABOUTME: Seeds each slot independently from user id, slot discriminator, and context token
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriVida Contributors

use crate::catalog::{ContentCatalog, ContentVariant};
use crate::seed::{index_for, selection_seed};
use chrono::NaiveDate;
use nutrivida_core::errors::CatalogError;
use nutrivida_core::models::{ContentKind, ContentSlot, ContextToken};
use serde::Serialize;
use std::collections::BTreeMap;

/// One variant per diet-plan slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyPlan {
    variants: BTreeMap<ContentSlot, ContentVariant>,
}

impl DailyPlan {
    /// Assemble a plan from already selected variants
    pub fn from_variants(variants: impl IntoIterator<Item = ContentVariant>) -> Self {
        Self {
            variants: variants.into_iter().map(|v| (v.slot, v)).collect(),
        }
    }

    /// Variant chosen for a slot
    #[must_use]
    pub fn get(&self, slot: ContentSlot) -> Option<&ContentVariant> {
        self.variants.get(&slot)
    }

    /// Chosen variants in rendering order
    pub fn iter(&self) -> impl Iterator<Item = &ContentVariant> {
        self.variants.values()
    }

    /// Chosen index per slot
    #[must_use]
    pub fn indices(&self) -> BTreeMap<ContentSlot, usize> {
        self.variants.iter().map(|(slot, v)| (*slot, v.index)).collect()
    }
}

/// Selected content ready for rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "content", rename_all = "snake_case")]
pub enum AssembledContent {
    /// Full daily plan
    DietPlan(DailyPlan),
    /// Single recipe variant
    Recipe(ContentVariant),
    /// Single tip-set variant
    MotivationalTips(ContentVariant),
}

impl AssembledContent {
    /// Kind this content renders as
    #[must_use]
    pub const fn kind(&self) -> ContentKind {
        match self {
            Self::DietPlan(_) => ContentKind::DietPlan,
            Self::Recipe(_) => ContentKind::Recipe,
            Self::MotivationalTips(_) => ContentKind::MotivationalTips,
        }
    }
}

/// Deterministic selector over a catalog
///
/// Same (user, slot, token) always yields the same variant. No attempt is made to
/// avoid repeating the previous selection.
#[derive(Debug, Clone, Copy)]
pub struct PlanSelector<'a> {
    catalog: &'a ContentCatalog,
}

impl<'a> PlanSelector<'a> {
    /// Create a selector over the given catalog
    #[must_use]
    pub const fn new(catalog: &'a ContentCatalog) -> Self {
        Self { catalog }
    }

    /// Catalog being selected from
    #[must_use]
    pub const fn catalog(&self) -> &'a ContentCatalog {
        self.catalog
    }

    /// Pick one variant for a slot
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog has no table for the slot
    pub fn select_single_variant(
        &self,
        user_id: &str,
        slot: ContentSlot,
        token: &ContextToken,
    ) -> Result<ContentVariant, CatalogError> {
        let len = self.catalog.len(slot);
        if len == 0 {
            return Err(CatalogError::MissingSlot { slot });
        }
        let seed = selection_seed(user_id, slot, token);
        self.catalog.variant_at(slot, index_for(&seed, len))
    }

    /// Pick one variant per diet-plan slot for an arbitrary token
    ///
    /// # Errors
    ///
    /// Returns an error if any diet-plan slot is missing from the catalog
    pub fn select_plan(
        &self,
        user_id: &str,
        token: &ContextToken,
    ) -> Result<DailyPlan, CatalogError> {
        let variants = ContentSlot::DIET_PLAN
            .iter()
            .map(|slot| self.select_single_variant(user_id, *slot, token))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(DailyPlan::from_variants(variants))
    }

    /// Pick the plan for a calendar day
    ///
    /// # Errors
    ///
    /// Returns an error if any diet-plan slot is missing from the catalog
    pub fn select_daily_plan(
        &self,
        user_id: &str,
        date: NaiveDate,
    ) -> Result<DailyPlan, CatalogError> {
        self.select_plan(user_id, &ContextToken::Day(date))
    }

    /// Select everything a content kind needs
    ///
    /// # Errors
    ///
    /// Returns an error if a slot of the kind is missing from the catalog
    pub fn select(
        &self,
        kind: ContentKind,
        user_id: &str,
        token: &ContextToken,
    ) -> Result<AssembledContent, CatalogError> {
        Ok(match kind {
            ContentKind::DietPlan => AssembledContent::DietPlan(self.select_plan(user_id, token)?),
            ContentKind::Recipe => AssembledContent::Recipe(self.select_single_variant(
                user_id,
                ContentSlot::Recipe,
                token,
            )?),
            ContentKind::MotivationalTips => {
                AssembledContent::MotivationalTips(self.select_single_variant(
                    user_id,
                    ContentSlot::MotivationalTips,
                    token,
                )?)
            }
        })
    }
}
