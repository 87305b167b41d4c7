// ABOUTME: Integration tests for the BMR -> TDEE -> effective-TDEE pipeline
// ABOUTME: Pins the published formula values and the undetermined-propagation contract
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macrolog Project

mod common;

use common::{complete_female_profile, complete_male_profile};
use macrolog::{
    calculate_bmr, calculate_macro_targets, calculate_tdee, effective_tdee, NutritionConfig,
    Profile,
};

#[test]
fn male_worked_example_through_the_pipeline() {
    let config = NutritionConfig::default();
    let profile = complete_male_profile();

    let bmr = calculate_bmr(&profile, &config.bmr).unwrap();
    assert!((bmr - 1730.0).abs() < f64::EPSILON);

    assert_eq!(calculate_tdee(&profile, &config), Some(2682));
    assert_eq!(effective_tdee(&profile, &config), Some(2682));
}

#[test]
fn female_bmr_stays_unrounded_until_tdee() {
    let config = NutritionConfig::default();
    let profile = complete_female_profile();

    let bmr = calculate_bmr(&profile, &config.bmr).unwrap();
    assert!((bmr - 1345.25).abs() < f64::EPSILON);

    // round(1345.25 * 1.375) = round(1849.72) = 1850
    assert_eq!(calculate_tdee(&profile, &config), Some(1850));
}

#[test]
fn any_missing_biometric_undetermines_the_whole_chain() {
    let config = NutritionConfig::default();

    for strip in 0..4 {
        let mut profile = complete_male_profile();
        match strip {
            0 => profile.weight = None,
            1 => profile.height = None,
            2 => profile.age = None,
            _ => profile.sex = None,
        }
        assert_eq!(calculate_bmr(&profile, &config.bmr), None);
        assert_eq!(calculate_tdee(&profile, &config), None);
        assert_eq!(calculate_macro_targets(&profile, false, &config), None);
    }
}

#[test]
fn manual_tdee_is_never_blended() {
    let config = NutritionConfig::default();
    let mut profile = complete_male_profile();
    profile.custom_tdee = Some(2200);
    profile.use_custom_tdee = true;

    // Exactly the manual value, regardless of what the formula computes
    assert_eq!(effective_tdee(&profile, &config), Some(2200));

    // And the disabled flag restores the calculation
    profile.use_custom_tdee = false;
    assert_eq!(effective_tdee(&profile, &config), Some(2682));
}

#[test]
fn snapshot_then_calculation_is_the_fallback_order() {
    let config = NutritionConfig::default();

    let mut profile = complete_male_profile();
    profile.tdee = Some(2600);
    assert_eq!(effective_tdee(&profile, &config), Some(2600));

    // A bare snapshot is enough even when the biometrics are gone
    let snapshot_only = Profile {
        tdee: Some(2400),
        ..Profile::empty()
    };
    assert_eq!(effective_tdee(&snapshot_only, &config), Some(2400));
}
