// ABOUTME: Workout calorie giveback: partial credit of logged burn toward the daily budget
// ABOUTME: Includes the suggested-percentage policy applied when a user has not chosen one
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macrolog Project

//! Workout calorie credit.
//!
//! Burned calories widen the day's eating budget but never change the
//! macro composition targets: the credit is added to the calorie target
//! alone when displaying the remaining budget.

use crate::config::WorkoutCreditConfig;
use macrolog_core::models::Goal;

/// Calories credited back to the daily budget for logged workouts.
///
/// `percentage` is the profile's giveback preference; when the profile has
/// none the configured default applies (full credit out of the box).
#[must_use]
pub fn workout_calorie_credit(
    calories_burned: f64,
    percentage: Option<u8>,
    config: &WorkoutCreditConfig,
) -> i32 {
    let pct = f64::from(percentage.unwrap_or(config.default_percentage));
    (calories_burned * pct / 100.0).round() as i32
}

/// Suggest a giveback percentage for a goal the user just picked.
///
/// A UX default, not a constraint — the user may always override it.
/// Maintenance and muscle gain keep the full credit. For weight loss the
/// suggestion shrinks as the deficit grows, so an aggressive deficit is
/// not eaten back through exercise. Without a goal or a known adjustment
/// the suggestion splits the difference.
#[must_use]
pub fn suggested_credit_percentage(
    goal: Option<Goal>,
    calorie_adjustment: Option<i32>,
    config: &WorkoutCreditConfig,
) -> u8 {
    match goal {
        Some(Goal::Maintenance | Goal::MuscleGain) => config.full_credit_percentage,
        Some(Goal::WeightLoss) => calorie_adjustment.map_or(config.unknown_goal_percentage, |adjustment| {
            let deficit = adjustment.abs();
            config
                .deficit_tiers
                .iter()
                .find(|tier| deficit >= tier.min_deficit_kcal)
                .map_or(config.mild_deficit_percentage, |tier| tier.percentage)
        }),
        None => config.unknown_goal_percentage,
    }
}
