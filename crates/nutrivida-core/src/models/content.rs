// ABOUTME: Content kinds, catalog slots, and selection context tokens
// ABOUTME: ContentKind, ContentSlot, and ContextToken definitions shared by selector and store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriVida Contributors

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unit of cooldown-gated generation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    /// Multi-slot daily meal plan
    DietPlan,
    /// Single healthy recipe
    Recipe,
    /// Set of motivational tips
    MotivationalTips,
}

impl ContentKind {
    /// All kinds, in display order
    pub const ALL: [Self; 3] = [Self::DietPlan, Self::Recipe, Self::MotivationalTips];

    /// Stable storage key
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::DietPlan => "diet_plan",
            Self::Recipe => "recipe",
            Self::MotivationalTips => "motivational_tips",
        }
    }

    /// Catalog slots selected when this kind is generated
    #[must_use]
    pub const fn slots(&self) -> &'static [ContentSlot] {
        match self {
            Self::DietPlan => &ContentSlot::DIET_PLAN,
            Self::Recipe => &[ContentSlot::Recipe],
            Self::MotivationalTips => &[ContentSlot::MotivationalTips],
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "diet_plan" | "plan" => Ok(Self::DietPlan),
            "recipe" => Ok(Self::Recipe),
            "motivational_tips" | "tips" => Ok(Self::MotivationalTips),
            other => Err(format!("unknown content kind '{other}'")),
        }
    }
}

/// Catalog category selected independently of the others
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum ContentSlot {
    /// Café da manhã
    Breakfast,
    /// Lanche da manhã
    MorningSnack,
    /// Almoço
    Lunch,
    /// Lanche da tarde
    AfternoonSnack,
    /// Jantar
    Dinner,
    /// Ceia
    EveningSnack,
    /// Tip set appended to a diet plan
    NutritionTips,
    /// Structured recipe
    Recipe,
    /// Motivational tip set
    MotivationalTips,
}

impl ContentSlot {
    /// Slots that make up a diet plan, in rendering order
    pub const DIET_PLAN: [Self; 7] = [
        Self::Breakfast,
        Self::MorningSnack,
        Self::Lunch,
        Self::AfternoonSnack,
        Self::Dinner,
        Self::EveningSnack,
        Self::NutritionTips,
    ];

    /// Every slot the built-in catalog defines
    pub const ALL: [Self; 9] = [
        Self::Breakfast,
        Self::MorningSnack,
        Self::Lunch,
        Self::AfternoonSnack,
        Self::Dinner,
        Self::EveningSnack,
        Self::NutritionTips,
        Self::Recipe,
        Self::MotivationalTips,
    ];

    /// Seed discriminator. Changing any of these changes every historical selection.
    #[must_use]
    pub const fn discriminator(&self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::MorningSnack => "morningSnack",
            Self::Lunch => "lunch",
            Self::AfternoonSnack => "afternoonSnack",
            Self::Dinner => "dinner",
            Self::EveningSnack => "eveningSnack",
            Self::NutritionTips => "tips",
            Self::Recipe => "recipe",
            Self::MotivationalTips => "motivationalTips",
        }
    }

    /// Slot may be left out of a diet plan
    #[must_use]
    pub const fn is_optional(&self) -> bool {
        matches!(self, Self::EveningSnack)
    }
}

impl fmt::Display for ContentSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.discriminator())
    }
}

/// Temporal bucket (or explicit perturbation) appended to a selection seed
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum ContextToken {
    /// Calendar-day bucket, rendered as `YYYY-MM-DD`
    Day(NaiveDate),
    /// Weeks on the diet, rendered as the bare number
    Week(u32),
    /// Caller-requested regeneration, rendered as `force-<token>`
    Forced(String),
}

impl ContextToken {
    /// Forced token derived from a millisecond timestamp
    #[must_use]
    pub fn forced_at(timestamp_millis: i64) -> Self {
        Self::Forced(timestamp_millis.to_string())
    }
}

impl fmt::Display for ContextToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Day(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            Self::Week(weeks) => write!(f, "{weeks}"),
            Self::Forced(token) => write!(f, "force-{token}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_token_rendering() {
        let day = ContextToken::Day(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(day.to_string(), "2024-01-01");
        assert_eq!(ContextToken::Week(3).to_string(), "3");
        assert_eq!(
            ContextToken::forced_at(1_704_067_200_000).to_string(),
            "force-1704067200000"
        );
    }

    #[test]
    fn test_content_kind_parsing() {
        assert_eq!("diet-plan".parse::<ContentKind>(), Ok(ContentKind::DietPlan));
        assert_eq!("Recipe".parse::<ContentKind>(), Ok(ContentKind::Recipe));
        assert_eq!("tips".parse::<ContentKind>(), Ok(ContentKind::MotivationalTips));
        assert!("dessert".parse::<ContentKind>().is_err());
    }

    #[test]
    fn test_diet_plan_slots_are_distinct_discriminators() {
        let mut names: Vec<&str> = ContentSlot::ALL.iter().map(ContentSlot::discriminator).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), ContentSlot::ALL.len());
    }
}
