// ABOUTME: Integration tests for the weeks-to-target-weight projection
// ABOUTME: Worked example, undetermined guards, and weeks/months display switching
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macrolog Project

use macrolog::{weeks_to_target_weight, GoalEta, NutritionConfig, Profile};

fn profile(weight: f64, target: f64, adjustment: Option<i32>) -> Profile {
    Profile {
        weight: Some(weight),
        target_weight: Some(target),
        calorie_adjustment: adjustment,
        ..Profile::empty()
    }
}

#[test]
fn ten_kilos_at_normal_deficit_is_22_weeks() {
    let config = NutritionConfig::default().goal_eta;
    // 10 * 7700 / 500 = 154 days -> round(22)
    assert_eq!(
        weeks_to_target_weight(&profile(80.0, 70.0, Some(-500)), &config),
        Some(22)
    );
}

#[test]
fn undetermined_when_at_or_below_target() {
    let config = NutritionConfig::default().goal_eta;
    assert_eq!(
        weeks_to_target_weight(&profile(70.0, 70.0, Some(-500)), &config),
        None
    );
    assert_eq!(
        weeks_to_target_weight(&profile(68.0, 70.0, Some(-500)), &config),
        None
    );
}

#[test]
fn undetermined_on_zero_or_absent_adjustment() {
    let config = NutritionConfig::default().goal_eta;
    assert_eq!(
        weeks_to_target_weight(&profile(80.0, 70.0, Some(0)), &config),
        None
    );
    assert_eq!(weeks_to_target_weight(&profile(80.0, 70.0, None), &config), None);
}

#[test]
fn undetermined_without_weights() {
    let config = NutritionConfig::default().goal_eta;

    let mut missing_weight = profile(80.0, 70.0, Some(-500));
    missing_weight.weight = None;
    assert_eq!(weeks_to_target_weight(&missing_weight, &config), None);

    let mut missing_target = profile(80.0, 70.0, Some(-500));
    missing_target.target_weight = None;
    assert_eq!(weeks_to_target_weight(&missing_target, &config), None);
}

#[test]
fn display_switches_to_months_at_a_year() {
    let config = NutritionConfig::default().goal_eta;

    assert_eq!(GoalEta::from_weeks(51, &config), GoalEta::Weeks(51));
    assert_eq!(GoalEta::from_weeks(52, &config), GoalEta::Months(13));
    assert_eq!(GoalEta::from_weeks(22, &config).to_string(), "22 weeks");
    assert_eq!(GoalEta::from_weeks(60, &config).to_string(), "15 months");
}

#[test]
fn slow_cut_projects_into_months() {
    let config = NutritionConfig::default().goal_eta;
    // 20 kg at 250 kcal/day: 20 * 7700 / 250 = 616 days -> 88 weeks -> months
    let weeks = weeks_to_target_weight(&profile(95.0, 75.0, Some(-250)), &config).unwrap();
    assert_eq!(weeks, 88);
    assert_eq!(GoalEta::from_weeks(weeks, &config), GoalEta::Months(22));
}
