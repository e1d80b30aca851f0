// ABOUTME: Metabolic profile calculations: BMI, Mifflin-St Jeor BMR, and calorie targets
// ABOUTME: Feeds the diet plan calorie target and the weight-loss time estimate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriVida Contributors

//! Metabolic Calculator
//!
//! # References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>

use crate::formatter::RenderParameters;
use nutrivida_core::constants::calories::{MINIMUM_DAILY_CALORIES, WEIGHT_LOSS_DEFICIT};
use nutrivida_core::constants::metabolism::{
    ACTIVE_FACTOR, DEFAULT_WEEKLY_GOAL_KG, LIGHT_FACTOR, MODERATE_FACTOR, MSJ_AGE_COEF,
    MSJ_FEMALE_CONSTANT, MSJ_HEIGHT_COEF, MSJ_MALE_CONSTANT, MSJ_WEIGHT_COEF,
    OBESITY_GOAL_BMI, OBESITY_WEEKLY_GOAL_KG, OVERWEIGHT_GOAL_BMI, OVERWEIGHT_WEEKLY_GOAL_KG,
    SEDENTARY_FACTOR, VERY_ACTIVE_FACTOR,
};
use nutrivida_core::errors::{AppError, AppResult};
use nutrivida_core::models::{ActivityLevel, Gender, UserMetrics, UserProfile};
use serde::{Deserialize, Serialize};
use std::fmt;

/// BMI classification
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    /// BMI below 18.5
    Underweight,
    /// BMI below 24.9
    Normal,
    /// BMI below 29.9
    Overweight,
    /// BMI below 34.9
    ObesityClass1,
    /// BMI below 39.9
    ObesityClass2,
    /// Anything above
    ObesityClass3,
}

impl BmiCategory {
    /// Classify a BMI value
    #[must_use]
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            Self::Underweight
        } else if bmi < 24.9 {
            Self::Normal
        } else if bmi < 29.9 {
            Self::Overweight
        } else if bmi < 34.9 {
            Self::ObesityClass1
        } else if bmi < 39.9 {
            Self::ObesityClass2
        } else {
            Self::ObesityClass3
        }
    }

    /// Label shown to users
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Underweight => "Abaixo do peso",
            Self::Normal => "Peso normal",
            Self::Overweight => "Sobrepeso",
            Self::ObesityClass1 => "Obesidade Grau 1",
            Self::ObesityClass2 => "Obesidade Grau 2",
            Self::ObesityClass3 => "Obesidade Grau 3",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn validate_weight(weight_kg: f64) -> AppResult<()> {
    if !weight_kg.is_finite() || weight_kg <= 0.0 || weight_kg > 300.0 {
        return Err(AppError::invalid_input(
            "Weight must be between 0 and 300 kg",
        ));
    }
    Ok(())
}

fn validate_height(height_cm: f64) -> AppResult<()> {
    if !height_cm.is_finite() || height_cm <= 0.0 || height_cm > 300.0 {
        return Err(AppError::invalid_input(
            "Height must be between 0 and 300 cm",
        ));
    }
    Ok(())
}

/// Body mass index rounded to one decimal
///
/// # Errors
///
/// Returns an error if height or weight are out of range
pub fn calculate_bmi(height_cm: f64, weight_kg: f64) -> AppResult<f64> {
    validate_height(height_cm)?;
    validate_weight(weight_kg)?;
    let height_m = height_cm / 100.0;
    Ok((weight_kg / (height_m * height_m) * 10.0).round() / 10.0)
}

/// Basal metabolic rate (Mifflin-St Jeor), rounded to whole kcal
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `gender_constant`
///
/// # Errors
///
/// Returns an error if weight, height or age are out of range
pub fn calculate_bmr(profile: &UserProfile) -> AppResult<u32> {
    validate_weight(profile.current_weight_kg)?;
    validate_height(profile.height_cm)?;
    if !(10..=120).contains(&profile.age) {
        return Err(AppError::invalid_input(
            "Age must be between 10 and 120 years (Mifflin-St Jeor formula validated for ages 10+)",
        ));
    }

    let gender_constant = match profile.gender {
        Gender::Male => MSJ_MALE_CONSTANT,
        Gender::Female | Gender::Other => MSJ_FEMALE_CONSTANT,
    };
    let bmr = MSJ_HEIGHT_COEF.mul_add(
        profile.height_cm,
        MSJ_WEIGHT_COEF.mul_add(
            profile.current_weight_kg,
            MSJ_AGE_COEF.mul_add(f64::from(profile.age), gender_constant),
        ),
    );
    Ok(bmr.round().max(0.0) as u32)
}

/// Multiplier applied to BMR for an activity level
#[must_use]
pub const fn activity_factor(level: ActivityLevel) -> f64 {
    match level {
        ActivityLevel::Sedentary => SEDENTARY_FACTOR,
        ActivityLevel::Light => LIGHT_FACTOR,
        ActivityLevel::Moderate => MODERATE_FACTOR,
        ActivityLevel::Active => ACTIVE_FACTOR,
        ActivityLevel::VeryActive => VERY_ACTIVE_FACTOR,
    }
}

/// Maintenance calories for the activity level
#[must_use]
pub fn calculate_daily_calories(bmr: u32, level: ActivityLevel) -> u32 {
    (f64::from(bmr) * activity_factor(level)).round() as u32
}

/// Daily target for roughly 0.5 kg/week of loss, never below the safe minimum
#[must_use]
pub fn calories_for_weight_loss(daily_calories: u32) -> u32 {
    daily_calories
        .saturating_sub(WEIGHT_LOSS_DEFICIT)
        .max(MINIMUM_DAILY_CALORIES)
}

/// Recommended weekly loss for a BMI
#[must_use]
pub fn weekly_goal_kg(bmi: f64) -> f64 {
    if bmi > OBESITY_GOAL_BMI {
        OBESITY_WEEKLY_GOAL_KG
    } else if bmi > OVERWEIGHT_GOAL_BMI {
        OVERWEIGHT_WEEKLY_GOAL_KG
    } else {
        DEFAULT_WEEKLY_GOAL_KG
    }
}

/// Weeks needed to reach the goal weight, 0 when already there
///
/// # Errors
///
/// Returns an error if the weekly goal is not positive or a weight is NaN
pub fn calculate_time_to_goal(
    current_weight_kg: f64,
    goal_weight_kg: f64,
    weekly_goal_kg: f64,
) -> AppResult<u32> {
    if weekly_goal_kg.is_nan() || weekly_goal_kg <= 0.0 {
        return Err(AppError::invalid_input("Weekly goal must be positive"));
    }
    if current_weight_kg.is_nan() || goal_weight_kg.is_nan() {
        return Err(AppError::invalid_input("Weights must be numbers"));
    }
    if current_weight_kg <= goal_weight_kg {
        return Ok(0);
    }
    Ok(((current_weight_kg - goal_weight_kg) / weekly_goal_kg).ceil() as u32)
}

/// Full metabolic profile
///
/// # Errors
///
/// Returns an error if any profile value is out of range
pub fn calculate_user_metrics(profile: &UserProfile) -> AppResult<UserMetrics> {
    let bmi = calculate_bmi(profile.height_cm, profile.current_weight_kg)?;
    let bmr = calculate_bmr(profile)?;
    Ok(UserMetrics {
        bmi,
        bmr,
        daily_calories: calculate_daily_calories(bmr, profile.activity_level),
        weekly_goal_kg: weekly_goal_kg(bmi),
    })
}

/// Template parameters derived from a profile
///
/// # Errors
///
/// Returns an error if any profile value is out of range
pub fn render_parameters(profile: &UserProfile) -> AppResult<RenderParameters> {
    let metrics = calculate_user_metrics(profile)?;
    Ok(
        RenderParameters::with_target_calories(calories_for_weight_loss(metrics.daily_calories))
            .weeks_on_diet(profile.weeks_on_diet()),
    )
}
