// ABOUTME: User profile, weight history, and metabolic metrics models
// ABOUTME: Inputs for calorie targets and the weeks-on-diet motivational bucket
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriVida Contributors

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Gender used by the BMR equation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male constant (+5)
    Male,
    /// Female constant (-161)
    Female,
    /// Not specified; uses the female constant
    Other,
}

/// Self-reported activity level
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days per week
    Light,
    /// Moderate exercise 3-5 days per week
    Moderate,
    /// Hard exercise 6-7 days per week
    Active,
    /// Very hard exercise or physical job
    VeryActive,
}

impl ActivityLevel {
    /// Parse from string with fallback to sedentary
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "light" | "leve" => Self::Light,
            "moderate" | "moderado" => Self::Moderate,
            "active" | "ativo" => Self::Active,
            "very_active" | "muito_ativo" => Self::VeryActive,
            _ => Self::Sedentary,
        }
    }
}

/// Single weigh-in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightRecord {
    /// When the weight was recorded
    pub date: DateTime<Utc>,
    /// Weight in kilograms
    pub weight_kg: f64,
}

/// Profile owned by the persistence collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Age in years
    pub age: u32,
    /// Gender
    pub gender: Gender,
    /// Height in centimeters
    pub height_cm: f64,
    /// Current weight in kilograms
    pub current_weight_kg: f64,
    /// Goal weight in kilograms
    pub goal_weight_kg: f64,
    /// Activity level
    pub activity_level: ActivityLevel,
    /// Weigh-ins, oldest first
    #[serde(default)]
    pub weight_history: Vec<WeightRecord>,
}

impl UserProfile {
    /// Weeks on the diet, approximated by the number of weigh-ins (at least one)
    #[must_use]
    pub fn weeks_on_diet(&self) -> u32 {
        u32::try_from(self.weight_history.len())
            .unwrap_or(u32::MAX)
            .max(1)
    }
}

/// Computed metabolic profile
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UserMetrics {
    /// Body mass index, one decimal
    pub bmi: f64,
    /// Basal metabolic rate (kcal/day)
    pub bmr: u32,
    /// Maintenance calories for the activity level (kcal/day)
    pub daily_calories: u32,
    /// Recommended weekly loss (kg)
    pub weekly_goal_kg: f64,
}
