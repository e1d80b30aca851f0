// ABOUTME: Metabolic profile command for nutrivida-cli
// ABOUTME: Computes BMI, BMR, calorie targets, and weeks to goal from profile flags
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriVida Contributors

use anyhow::Result;
use nutrivida_core::models::{ActivityLevel, UserProfile};
use nutrivida_intelligence::metrics::{
    calculate_time_to_goal, calculate_user_metrics, calories_for_weight_loss,
};

use crate::helpers::display::display_metrics;
use crate::ProfileArgs;

/// Print the metabolic profile for the given flags
pub fn show(args: &ProfileArgs) -> Result<()> {
    let profile = UserProfile {
        age: args.age,
        gender: args.gender.into(),
        height_cm: args.height,
        current_weight_kg: args.weight,
        goal_weight_kg: args.goal,
        activity_level: ActivityLevel::from_str_lossy(&args.activity),
        weight_history: Vec::new(),
    };

    let metrics = calculate_user_metrics(&profile)?;
    let weeks_to_goal = calculate_time_to_goal(
        profile.current_weight_kg,
        profile.goal_weight_kg,
        metrics.weekly_goal_kg,
    )?;
    display_metrics(
        &metrics,
        calories_for_weight_loss(metrics.daily_calories),
        weeks_to_goal,
    );

    Ok(())
}
