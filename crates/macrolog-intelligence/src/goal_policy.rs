// ABOUTME: Calorie adjustment policy applied when the user switches goals
// ABOUTME: Keeps an adjustment compatible with the new goal, else resets to the goal default
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macrolog Project

use crate::config::MacroSplitConfig;
use macrolog_core::models::Goal;

/// Resolve the calorie adjustment to store after a goal switch.
///
/// Maintenance zeroes the adjustment. Weight loss keeps an existing
/// deficit but replaces anything else with the default deficit; muscle
/// gain mirrors that for surpluses. Clearing the goal leaves the stored
/// adjustment untouched.
#[must_use]
pub fn default_adjustment_for_goal(
    goal: Option<Goal>,
    current: Option<i32>,
    config: &MacroSplitConfig,
) -> Option<i32> {
    match goal {
        Some(Goal::Maintenance) => Some(0),
        Some(Goal::WeightLoss) => match current {
            Some(adjustment) if adjustment < 0 => current,
            _ => Some(-config.weight_loss_deficit_kcal),
        },
        Some(Goal::MuscleGain) => match current {
            Some(adjustment) if adjustment > 0 => current,
            _ => Some(config.muscle_gain_surplus_kcal),
        },
        None => current,
    }
}
