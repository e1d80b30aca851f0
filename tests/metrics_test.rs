// ABOUTME: Tests for BMI, BMR, calorie targets, and time-to-goal calculations
// ABOUTME: Validates Mifflin-St Jeor results, safety floors, and input validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriVida Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::day;
use nutrivida_core::errors::ErrorCode;
use nutrivida_core::models::{ActivityLevel, Gender, UserProfile, WeightRecord};
use nutrivida_intelligence::metrics::{
    calculate_bmi, calculate_bmr, calculate_daily_calories, calculate_time_to_goal,
    calculate_user_metrics, calories_for_weight_loss, render_parameters, weekly_goal_kg,
    BmiCategory,
};

fn profile(age: u32, gender: Gender, height_cm: f64, weight_kg: f64) -> UserProfile {
    UserProfile {
        age,
        gender,
        height_cm,
        current_weight_kg: weight_kg,
        goal_weight_kg: 65.0,
        activity_level: ActivityLevel::Light,
        weight_history: Vec::new(),
    }
}

#[test]
fn test_bmi_rounded_to_one_decimal() {
    assert!((calculate_bmi(165.0, 80.0).unwrap() - 29.4).abs() < f64::EPSILON);
    assert!((calculate_bmi(180.0, 95.0).unwrap() - 29.3).abs() < f64::EPSILON);
}

#[test]
fn test_bmi_categories() {
    assert_eq!(BmiCategory::from_bmi(18.4), BmiCategory::Underweight);
    assert_eq!(BmiCategory::from_bmi(22.0), BmiCategory::Normal);
    assert_eq!(BmiCategory::from_bmi(24.9), BmiCategory::Overweight);
    assert_eq!(BmiCategory::from_bmi(30.0), BmiCategory::ObesityClass1);
    assert_eq!(BmiCategory::from_bmi(45.0), BmiCategory::ObesityClass3);
    assert_eq!(BmiCategory::Normal.to_string(), "Peso normal");
}

#[test]
fn test_bmr_mifflin_st_jeor() {
    assert_eq!(
        calculate_bmr(&profile(30, Gender::Female, 165.0, 80.0)).unwrap(),
        1520
    );
    assert_eq!(
        calculate_bmr(&profile(40, Gender::Male, 180.0, 95.0)).unwrap(),
        1880
    );
    // Unspecified gender uses the female constant
    assert_eq!(
        calculate_bmr(&profile(30, Gender::Other, 165.0, 80.0)).unwrap(),
        1520
    );
}

#[test]
fn test_bmr_rejects_out_of_range_inputs() {
    let error = calculate_bmr(&profile(5, Gender::Female, 165.0, 80.0)).unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
    assert!(calculate_bmr(&profile(30, Gender::Female, 165.0, 0.0)).is_err());
    assert!(calculate_bmr(&profile(30, Gender::Female, 350.0, 80.0)).is_err());
}

#[test]
fn test_non_numeric_measurements_are_rejected() {
    assert!(calculate_bmi(170.0, f64::NAN).is_err());
    assert!(calculate_bmi(f64::NAN, 70.0).is_err());
    assert!(calculate_bmi(170.0, f64::INFINITY).is_err());
    assert!(calculate_bmr(&profile(30, Gender::Female, 165.0, f64::NAN)).is_err());
    assert!(calculate_user_metrics(&profile(30, Gender::Male, f64::NAN, 80.0)).is_err());
    assert!(calculate_time_to_goal(80.0, 65.0, f64::NAN).is_err());
    assert!(calculate_time_to_goal(f64::NAN, 65.0, 0.5).is_err());
}

#[test]
fn test_daily_calories_and_weight_loss_target() {
    assert_eq!(calculate_daily_calories(1520, ActivityLevel::Light), 2090);
    assert_eq!(calculate_daily_calories(1880, ActivityLevel::Sedentary), 2256);
    assert_eq!(calculate_daily_calories(1000, ActivityLevel::VeryActive), 1900);

    assert_eq!(calories_for_weight_loss(2090), 1590);
    assert_eq!(calories_for_weight_loss(1500), 1200);
    assert_eq!(calories_for_weight_loss(300), 1200);
}

#[test]
fn test_weekly_goal_by_bmi() {
    assert!((weekly_goal_kg(24.0) - 0.5).abs() < f64::EPSILON);
    assert!((weekly_goal_kg(29.4) - 0.7).abs() < f64::EPSILON);
    assert!((weekly_goal_kg(35.0) - 1.0).abs() < f64::EPSILON);
}

#[test]
fn test_time_to_goal() {
    assert_eq!(calculate_time_to_goal(80.0, 65.0, 0.7).unwrap(), 22);
    assert_eq!(calculate_time_to_goal(65.0, 65.0, 0.5).unwrap(), 0);
    assert_eq!(calculate_time_to_goal(60.0, 65.0, 0.5).unwrap(), 0);
    assert!(calculate_time_to_goal(80.0, 65.0, 0.0).is_err());
}

#[test]
fn test_user_metrics_and_render_parameters() {
    let mut user = profile(30, Gender::Female, 165.0, 80.0);
    let metrics = calculate_user_metrics(&user).unwrap();
    assert_eq!(metrics.bmr, 1520);
    assert_eq!(metrics.daily_calories, 2090);
    assert!((metrics.weekly_goal_kg - 0.7).abs() < f64::EPSILON);

    let params = render_parameters(&user).unwrap();
    assert_eq!(params.target_calories, 1590);
    assert_eq!(params.weeks_on_diet, Some(1));

    user.weight_history = (1..=3)
        .map(|week| WeightRecord {
            date: day(2024, 1, week * 7),
            weight_kg: 80.0 - f64::from(week) * 0.5,
        })
        .collect();
    assert_eq!(user.weeks_on_diet(), 3);
    assert_eq!(render_parameters(&user).unwrap().weeks_on_diet, Some(3));
}

#[test]
fn test_activity_level_parsing() {
    assert_eq!(ActivityLevel::from_str_lossy("very-active"), ActivityLevel::VeryActive);
    assert_eq!(ActivityLevel::from_str_lossy("moderado"), ActivityLevel::Moderate);
    assert_eq!(ActivityLevel::from_str_lossy("unknown"), ActivityLevel::Sedentary);
}
