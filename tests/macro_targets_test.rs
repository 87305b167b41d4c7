// ABOUTME: Integration tests for macro target derivation
// ABOUTME: Goal adjustments, cycle uplift, protein fallback, and the exact rounding order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macrolog Project

mod common;

use common::{complete_female_profile, complete_male_profile};
use macrolog::{calculate_macro_targets, Goal, NutritionConfig, Profile};

#[test]
fn weight_loss_worked_example_grams() {
    let config = NutritionConfig::default();
    let mut profile = complete_male_profile();
    profile.goal = Some(Goal::WeightLoss);

    let targets = calculate_macro_targets(&profile, false, &config).unwrap();
    assert_eq!(targets.calories, 2182);
    assert_eq!(targets.protein, 150);
    assert_eq!(targets.fat, 67);
    assert_eq!(targets.carbs, 245);
    assert_eq!(targets.fiber, 31);
}

#[test]
fn explicit_adjustment_beats_goal_default() {
    let config = NutritionConfig::default();
    let mut profile = complete_male_profile();
    profile.goal = Some(Goal::WeightLoss);
    profile.calorie_adjustment = Some(-250);

    // tdee - 250, not the goal's -500
    let targets = calculate_macro_targets(&profile, false, &config).unwrap();
    assert_eq!(targets.calories, 2432);
}

#[test]
fn goal_defaults_apply_without_explicit_adjustment() {
    let config = NutritionConfig::default();

    let mut profile = complete_male_profile();
    profile.goal = Some(Goal::MuscleGain);
    assert_eq!(
        calculate_macro_targets(&profile, false, &config)
            .unwrap()
            .calories,
        2982
    );

    profile.goal = Some(Goal::Maintenance);
    assert_eq!(
        calculate_macro_targets(&profile, false, &config)
            .unwrap()
            .calories,
        2682
    );
}

#[test]
fn cycle_uplift_is_female_only() {
    let config = NutritionConfig::default();

    let mut female = complete_female_profile();
    female.tdee = Some(2000);
    let targets = calculate_macro_targets(&female, true, &config).unwrap();
    assert_eq!(targets.calories, 2140);

    // The flag on a male profile is an invalid combination; no uplift
    let mut male = complete_male_profile();
    male.tdee = Some(2000);
    let targets = calculate_macro_targets(&male, true, &config).unwrap();
    assert_eq!(targets.calories, 2000);
}

#[test]
fn protein_ratio_tracks_the_goal() {
    let config = NutritionConfig::default();

    // 75 kg at 1.6 g/kg without a driving goal
    let profile = complete_male_profile();
    let targets = calculate_macro_targets(&profile, false, &config).unwrap();
    assert_eq!(targets.protein, 120);

    // 75 kg at 2.0 g/kg for muscle gain and weight loss alike
    for goal in [Goal::MuscleGain, Goal::WeightLoss] {
        let mut profile = complete_male_profile();
        profile.goal = Some(goal);
        let targets = calculate_macro_targets(&profile, false, &config).unwrap();
        assert_eq!(targets.protein, 150);
    }
}

#[test]
fn known_calories_survive_a_missing_weight() {
    let config = NutritionConfig::default();
    let profile = Profile {
        tdee: Some(2182),
        ..Profile::empty()
    };

    // 25% of calories at 4 kcal/g
    let targets = calculate_macro_targets(&profile, false, &config).unwrap();
    assert_eq!(targets.protein, (2182.0_f64 * 0.25 / 4.0).round() as i32);
    assert_eq!(targets.calories, 2182);
}

#[test]
fn targets_are_reproducible_across_calls() {
    let config = NutritionConfig::default();
    let mut profile = complete_male_profile();
    profile.goal = Some(Goal::WeightLoss);

    let first = calculate_macro_targets(&profile, false, &config).unwrap();
    for _ in 0..10 {
        assert_eq!(
            calculate_macro_targets(&profile, false, &config).unwrap(),
            first
        );
    }
}
