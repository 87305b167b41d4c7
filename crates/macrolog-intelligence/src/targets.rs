// ABOUTME: Daily calorie and macro target derivation from effective TDEE
// ABOUTME: Applies cycle and goal adjustments, then splits calories into protein/fat/carbs/fiber
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macrolog Project

//! Macro target derivation.
//!
//! The rounding order here is load-bearing: TDEE arrives already rounded,
//! the cycle uplift is rounded back to whole kcal, protein and fat grams
//! are rounded individually, but the fat *calories* stay unrounded when the
//! carbs residual is taken. Moving a rounding step shifts final gram values
//! by ±1, so tests pin the worked example end to end.

use crate::config::NutritionConfig;
use crate::energy::effective_tdee;
use crate::physiological_constants::energy::{KCAL_PER_G_CARBS, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN};
use macrolog_core::models::{Goal, MacroTargets, Profile, Sex};
use tracing::warn;

/// Calculate the daily calorie and macro targets for a profile.
///
/// Returns `None` when the effective TDEE is undetermined (incomplete
/// profile with no stored or manual TDEE). Once calories are known the
/// derivation always completes: a missing weight falls back to assigning
/// protein a fixed share of calories instead of failing.
///
/// Steps, in order:
/// 1. Resolve effective TDEE.
/// 2. On menstruation days with sex = female, scale TDEE by the luteal
///    uplift and round. Other sex/flag combinations are never scaled.
/// 3. Apply the explicit calorie adjustment when set, else the goal
///    default (weight loss -deficit, muscle gain +surplus), else keep TDEE.
/// 4. Protein from bodyweight (high ratio for muscle gain / weight loss),
///    or the calorie-share fallback when weight is unknown.
/// 5. Fat as a fixed share of calories.
/// 6. Carbs as the remaining calories.
/// 7. Fiber from the per-1000-kcal guideline.
#[must_use]
pub fn calculate_macro_targets(
    profile: &Profile,
    is_menstruation: bool,
    config: &NutritionConfig,
) -> Option<MacroTargets> {
    let split = &config.macro_split;

    let mut tdee = effective_tdee(profile, config)?;

    if is_menstruation && profile.sex == Some(Sex::Female) {
        tdee = (f64::from(tdee) * split.menstruation_tdee_multiplier).round() as i32;
    }

    let target_calories = match profile.calorie_adjustment {
        Some(adjustment) => tdee + adjustment,
        None => match profile.goal {
            Some(Goal::WeightLoss) => tdee - split.weight_loss_deficit_kcal,
            Some(Goal::MuscleGain) => tdee + split.muscle_gain_surplus_kcal,
            Some(Goal::Maintenance) | None => tdee,
        },
    };
    let target = f64::from(target_calories);

    let protein_per_kg = if matches!(profile.goal, Some(Goal::MuscleGain | Goal::WeightLoss)) {
        split.protein_g_per_kg_high
    } else {
        split.protein_g_per_kg_base
    };
    let protein = profile.weight.map_or_else(
        || (target * split.protein_fallback_calorie_share / KCAL_PER_G_PROTEIN).round(),
        |weight| (weight * protein_per_kg).round(),
    );

    let fat_calories = target * split.fat_calorie_share;
    let fat = (fat_calories / KCAL_PER_G_FAT).round();

    // Residual after protein and (unrounded) fat calories
    let carb_calories = target - protein * KCAL_PER_G_PROTEIN - fat_calories;
    let carbs = (carb_calories / KCAL_PER_G_CARBS).round();
    if carbs < 0.0 {
        warn!(
            target_calories,
            protein_g = protein,
            "macro split infeasible: carbs residual is negative"
        );
    }

    let fiber = (target / 1000.0 * split.fiber_g_per_1000_kcal).round();

    Some(MacroTargets {
        calories: target_calories,
        protein: protein as i32,
        carbs: carbs as i32,
        fat: fat as i32,
        fiber: fiber as i32,
    })
}
