// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Cooldowns, calorie limits, metabolic coefficients, and fallback notices
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriVida Contributors

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large list.

/// Regeneration cooldowns per content kind
pub mod cooldowns {
    /// Diet plans can be regenerated once a week
    pub const DIET_PLAN_COOLDOWN_DAYS: i64 = 7;
    /// Recipes can be regenerated once a day
    pub const RECIPE_COOLDOWN_HOURS: i64 = 24;
    /// Motivational tips follow the weekly diet rhythm
    pub const MOTIVATIONAL_TIPS_COOLDOWN_DAYS: i64 = 7;
    /// Longest configurable cooldown expressed in days (ten years)
    pub const MAX_COOLDOWN_DAYS: i64 = 3650;
    /// Longest configurable cooldown expressed in hours (ten years)
    pub const MAX_COOLDOWN_HOURS: i64 = MAX_COOLDOWN_DAYS * 24;
}

/// Calorie targets used when rendering diet plans
pub mod calories {
    /// Target used when no profile metrics are available
    pub const DEFAULT_TARGET_CALORIES: u32 = 1500;
    /// Daily deficit for roughly 0.5 kg of weight loss per week
    pub const WEIGHT_LOSS_DEFICIT: u32 = 500;
    /// Lowest daily intake ever recommended
    pub const MINIMUM_DAILY_CALORIES: u32 = 1200;
}

/// Mifflin-St Jeor coefficients and activity multipliers
pub mod metabolism {
    /// Weight coefficient (per kg)
    pub const MSJ_WEIGHT_COEF: f64 = 10.0;
    /// Height coefficient (per cm)
    pub const MSJ_HEIGHT_COEF: f64 = 6.25;
    /// Age coefficient (per year)
    pub const MSJ_AGE_COEF: f64 = -5.0;
    /// Male constant
    pub const MSJ_MALE_CONSTANT: f64 = 5.0;
    /// Female constant, also used for unspecified gender
    pub const MSJ_FEMALE_CONSTANT: f64 = -161.0;

    /// Sedentary multiplier (little or no exercise)
    pub const SEDENTARY_FACTOR: f64 = 1.2;
    /// Light activity multiplier (1-3 days/week)
    pub const LIGHT_FACTOR: f64 = 1.375;
    /// Moderate activity multiplier (3-5 days/week)
    pub const MODERATE_FACTOR: f64 = 1.55;
    /// Active multiplier (6-7 days/week)
    pub const ACTIVE_FACTOR: f64 = 1.725;
    /// Very active multiplier (physical job or twice-daily training)
    pub const VERY_ACTIVE_FACTOR: f64 = 1.9;

    /// Default weekly loss goal (kg)
    pub const DEFAULT_WEEKLY_GOAL_KG: f64 = 0.5;
    /// Weekly loss goal for considerable overweight (kg)
    pub const OVERWEIGHT_WEEKLY_GOAL_KG: f64 = 0.7;
    /// Weekly loss goal for obesity (kg)
    pub const OBESITY_WEEKLY_GOAL_KG: f64 = 1.0;
    /// BMI above which the overweight goal applies
    pub const OVERWEIGHT_GOAL_BMI: f64 = 27.0;
    /// BMI above which the obesity goal applies
    pub const OBESITY_GOAL_BMI: f64 = 30.0;
}

/// Service identity used by logging
pub mod service_names {
    /// Main service name
    pub const NUTRIVIDA: &str = "nutrivida";
}

/// Notices served when content cannot be generated
pub mod fallback {
    /// Diet plan notice
    pub const DIET_PLAN_NOTICE: &str =
        "Não foi possível gerar o plano de dieta no momento. Por favor, tente novamente mais tarde.";
    /// Recipe notice
    pub const RECIPE_NOTICE: &str =
        "Não foi possível gerar uma receita no momento. Por favor, tente novamente.";
    /// Motivational tips notice
    pub const MOTIVATIONAL_TIPS_NOTICE: &str = "1. Cada pequeno passo é uma vitória na sua jornada.\n\
        2. Seu corpo está mudando, mesmo quando a balança não mostra.\n\
        3. Consistência supera perfeição - mantenha o foco diário.\n\
        4. Visualize seu objetivo e porque ele é importante para você.\n\
        5. Celebre cada escolha saudável que você faz.";
}

/// Limits for history queries
pub mod limits {
    /// Default number of history entries returned
    pub const DEFAULT_HISTORY_LIMIT: u32 = 20;
    /// Maximum number of history entries returned
    pub const MAX_HISTORY_LIMIT: u32 = 200;
}
