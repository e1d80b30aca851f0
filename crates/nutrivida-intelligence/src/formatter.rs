// ABOUTME: Portuguese markdown templates for diet plans, recipes, and motivational tips
// ABOUTME: Pure rendering of assembled content plus the hardcoded fallback notices
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriVida Contributors

//! Formatter
//!
//! Rendering is byte-stable: the same assembled content and parameters always
//! produce the same text. Every output ends with a single newline.

use crate::catalog::{ContentVariant, RecipeCard, VariantBody};
use crate::selector::{AssembledContent, DailyPlan};
use nutrivida_core::constants::calories::DEFAULT_TARGET_CALORIES;
use nutrivida_core::constants::fallback;
use nutrivida_core::errors::FormatError;
use nutrivida_core::models::{ContentKind, ContentSlot};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Minimum number of tips in a diet plan tip set
const PLAN_TIP_COUNT: usize = 3;

/// Values interpolated into templates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderParameters {
    /// Daily calorie target shown in the diet plan title
    pub target_calories: u32,
    /// Weeks on the diet, when known; selects the motivational bucket
    pub weeks_on_diet: Option<u32>,
}

impl RenderParameters {
    /// Parameters with an explicit calorie target
    #[must_use]
    pub const fn with_target_calories(target_calories: u32) -> Self {
        Self {
            target_calories,
            weeks_on_diet: None,
        }
    }

    /// Attach the weeks-on-diet count
    #[must_use]
    pub const fn weeks_on_diet(mut self, weeks: u32) -> Self {
        self.weeks_on_diet = Some(weeks);
        self
    }
}

impl Default for RenderParameters {
    fn default() -> Self {
        Self::with_target_calories(DEFAULT_TARGET_CALORIES)
    }
}

/// Minimal notice served when generation fails
#[must_use]
pub const fn fallback_text(kind: ContentKind) -> &'static str {
    match kind {
        ContentKind::DietPlan => fallback::DIET_PLAN_NOTICE,
        ContentKind::Recipe => fallback::RECIPE_NOTICE,
        ContentKind::MotivationalTips => fallback::MOTIVATIONAL_TIPS_NOTICE,
    }
}

/// Render assembled content with the template of `kind`
///
/// # Errors
///
/// Returns an error if the content belongs to another kind or a required field
/// is missing
pub fn render(
    kind: ContentKind,
    content: &AssembledContent,
    params: &RenderParameters,
) -> Result<String, FormatError> {
    if content.kind() != kind {
        return Err(FormatError::KindMismatch {
            expected: kind,
            found: content.kind(),
        });
    }
    match content {
        AssembledContent::DietPlan(plan) => render_diet_plan(plan, params.target_calories),
        AssembledContent::Recipe(variant) => render_recipe(variant),
        AssembledContent::MotivationalTips(variant) => render_motivational_tips(variant),
    }
}

/// Section title and calorie band per meal slot
const fn meal_heading(slot: ContentSlot) -> &'static str {
    match slot {
        ContentSlot::Breakfast => "Café da Manhã (300-350 kcal)",
        ContentSlot::MorningSnack => "Lanche da Manhã (150-200 kcal)",
        ContentSlot::Lunch => "Almoço (400-450 kcal)",
        ContentSlot::AfternoonSnack => "Lanche da Tarde (150-200 kcal)",
        ContentSlot::Dinner => "Jantar (350-400 kcal)",
        ContentSlot::EveningSnack => "Ceia (opcional, 100-150 kcal)",
        ContentSlot::NutritionTips | ContentSlot::Recipe | ContentSlot::MotivationalTips => "",
    }
}

fn render_diet_plan(plan: &DailyPlan, target_calories: u32) -> Result<String, FormatError> {
    let mut out = format!("# Plano Alimentar Personalizado ({target_calories} kcal)\n");

    for slot in ContentSlot::DIET_PLAN {
        if slot == ContentSlot::NutritionTips {
            continue;
        }
        let Some(variant) = plan.get(slot) else {
            if slot.is_optional() {
                continue;
            }
            return Err(FormatError::missing_field(
                ContentKind::DietPlan,
                slot.discriminator(),
            ));
        };
        let _ = write!(out, "\n## {}\n", meal_heading(slot));
        push_meal_body(&mut out, &variant.body);
    }

    let tips = plan
        .get(ContentSlot::NutritionTips)
        .map(|variant| lines_of(&variant.body))
        .unwrap_or_default();
    if tips.len() < PLAN_TIP_COUNT {
        return Err(FormatError::missing_field(
            ContentKind::DietPlan,
            format!("tips[{}]", tips.len()),
        ));
    }
    out.push_str("\n## Dicas para manter o plano alimentar:\n");
    for (n, tip) in tips.iter().take(PLAN_TIP_COUNT).enumerate() {
        let _ = writeln!(out, "{}. {tip}", n + 1);
    }
    Ok(out)
}

fn push_meal_body(out: &mut String, body: &VariantBody) {
    match body {
        VariantBody::Text(text) => {
            out.push_str(text.trim_end());
            out.push('\n');
        }
        VariantBody::Items(items) => {
            for item in *items {
                let _ = writeln!(out, "- {item}");
            }
        }
        VariantBody::Recipe(card) => {
            let _ = writeln!(out, "- {}", card.name);
        }
    }
}

fn lines_of(body: &VariantBody) -> Vec<&'static str> {
    match *body {
        VariantBody::Text(text) => text.lines().filter(|l| !l.trim().is_empty()).collect(),
        VariantBody::Items(items) => items.to_vec(),
        VariantBody::Recipe(card) => vec![card.name],
    }
}

fn render_recipe(variant: &ContentVariant) -> Result<String, FormatError> {
    let VariantBody::Recipe(card) = variant.body else {
        return Err(FormatError::missing_field(ContentKind::Recipe, "recipe"));
    };
    Ok(recipe_text(card))
}

fn recipe_text(card: &RecipeCard) -> String {
    let mut out = format!("# {}\n\n## Ingredientes:\n", card.name);
    for ingredient in card.ingredients {
        let _ = writeln!(out, "- {ingredient}");
    }

    out.push_str("\n## Modo de Preparo:\n");
    for (n, step) in card.instructions.iter().enumerate() {
        let _ = writeln!(out, "{}. {step}", n + 1);
    }

    let facts = card.nutrition;
    let _ = write!(
        out,
        "\n## Informações Nutricionais (por porção):\n\
         - Calorias: {} kcal\n\
         - Proteínas: {}g\n\
         - Carboidratos: {}g\n\
         - Gorduras: {}g\n",
        facts.calories, facts.protein_g, facts.carbs_g, facts.fat_g
    );

    let portions = if card.servings > 1 { "porções" } else { "porção" };
    let _ = write!(
        out,
        "\n## Tempo de Preparo: {}\n## Rendimento: {} {portions}\n\n## Dica de Variação:\n{}\n",
        card.prep_time, card.servings, card.variation
    );
    out
}

fn render_motivational_tips(variant: &ContentVariant) -> Result<String, FormatError> {
    let tips = lines_of(&variant.body);
    if tips.is_empty() {
        return Err(FormatError::missing_field(
            ContentKind::MotivationalTips,
            "tips",
        ));
    }
    let body = tips
        .iter()
        .enumerate()
        .map(|(n, tip)| format!("{}. {tip}", n + 1))
        .collect::<Vec<_>>()
        .join("\n\n");
    Ok(body + "\n")
}
