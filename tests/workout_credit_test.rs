// ABOUTME: Integration tests for workout calorie credit and its suggested-percentage policy
// ABOUTME: Monotonic credit, default preference, and deficit-tier suggestions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macrolog Project

use macrolog::{
    suggested_credit_percentage, workout_calorie_credit, Goal, NutritionConfig,
};

#[test]
fn credit_is_monotonic_in_percentage() {
    let config = NutritionConfig::default().workout_credit;

    assert_eq!(workout_calorie_credit(400.0, Some(0), &config), 0);
    assert_eq!(workout_calorie_credit(400.0, Some(50), &config), 200);
    assert_eq!(workout_calorie_credit(400.0, Some(100), &config), 400);

    let mut previous = 0;
    for pct in 0..=100 {
        let credit = workout_calorie_credit(400.0, Some(pct), &config);
        assert!(credit >= previous);
        previous = credit;
    }
}

#[test]
fn absent_preference_credits_everything() {
    let config = NutritionConfig::default().workout_credit;
    assert_eq!(workout_calorie_credit(400.0, None, &config), 400);
}

#[test]
fn zero_burn_credits_nothing() {
    let config = NutritionConfig::default().workout_credit;
    assert_eq!(workout_calorie_credit(0.0, Some(100), &config), 0);
}

#[test]
fn suggestions_follow_the_deficit_tiers() {
    let config = NutritionConfig::default().workout_credit;
    let weight_loss =
        |adjustment| suggested_credit_percentage(Some(Goal::WeightLoss), Some(adjustment), &config);

    assert_eq!(weight_loss(-1200), 0);
    assert_eq!(weight_loss(-1000), 0);
    assert_eq!(weight_loss(-800), 25);
    assert_eq!(weight_loss(-750), 25);
    assert_eq!(weight_loss(-600), 50);
    assert_eq!(weight_loss(-500), 50);
    assert_eq!(weight_loss(-250), 75);
}

#[test]
fn non_deficit_goals_suggest_full_credit() {
    let config = NutritionConfig::default().workout_credit;
    assert_eq!(
        suggested_credit_percentage(Some(Goal::Maintenance), Some(0), &config),
        100
    );
    assert_eq!(
        suggested_credit_percentage(Some(Goal::MuscleGain), Some(300), &config),
        100
    );
}

#[test]
fn unknown_goal_splits_the_difference() {
    let config = NutritionConfig::default().workout_credit;
    assert_eq!(suggested_credit_percentage(None, None, &config), 50);
    assert_eq!(
        suggested_credit_percentage(Some(Goal::WeightLoss), None, &config),
        50
    );
}
