// ABOUTME: Daily summary assembly: logs + profile + engine output for one day
// ABOUTME: Progress percentage, banding, remaining macros, and credit-adjusted budget
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macrolog Project

//! Caller-side composition of the engine output.
//!
//! The engine produces [`MacroTargets`]; everything a progress surface
//! renders on top of that — percentage bars, the workout-widened calorie
//! budget, the remaining-macros payload handed to the advice generator —
//! is derived here and stays out of the engine itself.

use chrono::NaiveDate;
use macrolog_core::models::{DailyTotals, MacroTargets, Meal, Profile, Workout};
use macrolog_intelligence::{calculate_macro_targets, workout_calorie_credit, NutritionConfig};
use serde::{Deserialize, Serialize};

/// One day's logs, totals, and targets in a single value
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailySummary {
    /// Day this summary describes
    pub date: NaiveDate,
    /// Meals logged on the day
    pub meals: Vec<Meal>,
    /// Workouts logged on the day
    pub workouts: Vec<Workout>,
    /// Summed consumption and burn
    pub totals: DailyTotals,
    /// Engine targets; `None` while the profile is incomplete
    pub targets: Option<MacroTargets>,
}

impl DailySummary {
    /// Assemble a summary for one day from its logs and the profile
    #[must_use]
    pub fn build(
        date: NaiveDate,
        meals: Vec<Meal>,
        workouts: Vec<Workout>,
        profile: &Profile,
        is_menstruation: bool,
        config: &NutritionConfig,
    ) -> Self {
        let totals = DailyTotals::from_logs(&meals, &workouts);
        let targets = calculate_macro_targets(profile, is_menstruation, config);
        Self {
            date,
            meals,
            workouts,
            totals,
            targets,
        }
    }

    /// Remaining macros for the day, `None` while targets are undetermined
    #[must_use]
    pub fn remaining(&self) -> Option<MacroTargets> {
        self.targets
            .map(|targets| remaining_macros(targets, &self.totals))
    }

    /// Calorie budget including the workout credit, `None` while targets
    /// are undetermined
    #[must_use]
    pub fn adjusted_calorie_target(&self, profile: &Profile, config: &NutritionConfig) -> Option<i32> {
        self.targets
            .map(|targets| adjusted_calorie_target(targets, &self.totals, profile, config))
    }
}

/// Remaining macros: target minus consumed, per macro.
///
/// Values go negative once consumption passes the target; the consumer
/// renders that as "over target" rather than clamping it away. This is the
/// payload the advice generator receives as prompt context.
#[must_use]
pub fn remaining_macros(targets: MacroTargets, totals: &DailyTotals) -> MacroTargets {
    MacroTargets {
        calories: targets.calories - totals.calories.round() as i32,
        protein: targets.protein - totals.protein.round() as i32,
        carbs: targets.carbs - totals.carbs.round() as i32,
        fat: targets.fat - totals.fat.round() as i32,
        fiber: targets.fiber - totals.fiber.round() as i32,
    }
}

/// The day's calorie budget after crediting logged workout burn.
///
/// Only the calorie line widens; macro composition targets are untouched.
#[must_use]
pub fn adjusted_calorie_target(
    targets: MacroTargets,
    totals: &DailyTotals,
    profile: &Profile,
    config: &NutritionConfig,
) -> i32 {
    targets.calories
        + workout_calorie_credit(
            totals.calories_burned,
            profile.workout_calorie_percentage,
            &config.workout_credit,
        )
}

/// Percentage of target reached, rounded and clamped to 0-100.
///
/// A non-positive target reads as 0% rather than dividing by zero.
#[must_use]
pub fn progress_percent(current: f64, target: f64) -> u8 {
    if target <= 0.0 {
        return 0;
    }
    let percent = (current / target * 100.0).round();
    percent.min(100.0) as u8
}

/// Display band for a progress value
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ProgressBand {
    /// Below half of target
    Behind,
    /// Between half and 80% of target
    Approaching,
    /// Between 80% and 100% of target
    OnTrack,
    /// Past the target
    Over,
}

impl ProgressBand {
    /// Band for an (unclamped) percentage of target
    #[must_use]
    pub const fn for_percent(percent: u16) -> Self {
        if percent < 50 {
            Self::Behind
        } else if percent < 80 {
            Self::Approaching
        } else if percent <= 100 {
            Self::OnTrack
        } else {
            Self::Over
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn targets() -> MacroTargets {
        MacroTargets {
            calories: 2000,
            protein: 150,
            carbs: 220,
            fat: 60,
            fiber: 28,
        }
    }

    fn totals(calories: f64, burned: f64) -> DailyTotals {
        DailyTotals {
            calories,
            protein: 80.0,
            carbs: 150.0,
            fat: 40.0,
            fiber: 10.0,
            calories_burned: burned,
        }
    }

    #[test]
    fn remaining_subtracts_per_macro() {
        let remaining = remaining_macros(targets(), &totals(1500.0, 0.0));
        assert_eq!(remaining.calories, 500);
        assert_eq!(remaining.protein, 70);
        assert_eq!(remaining.carbs, 70);
        assert_eq!(remaining.fat, 20);
        assert_eq!(remaining.fiber, 18);
    }

    #[test]
    fn remaining_goes_negative_when_over() {
        let remaining = remaining_macros(targets(), &totals(2400.0, 0.0));
        assert_eq!(remaining.calories, -400);
    }

    #[test]
    fn adjusted_target_applies_the_giveback_preference() {
        let config = NutritionConfig::default();
        let mut profile = Profile::empty();
        profile.workout_calorie_percentage = Some(50);

        let adjusted = adjusted_calorie_target(targets(), &totals(0.0, 400.0), &profile, &config);
        assert_eq!(adjusted, 2200);
    }

    #[test]
    fn adjusted_target_defaults_to_full_credit() {
        let config = NutritionConfig::default();
        let adjusted =
            adjusted_calorie_target(targets(), &totals(0.0, 400.0), &Profile::empty(), &config);
        assert_eq!(adjusted, 2400);
    }

    #[test]
    fn progress_clamps_at_100() {
        assert_eq!(progress_percent(1500.0, 2000.0), 75);
        assert_eq!(progress_percent(2500.0, 2000.0), 100);
    }

    #[test]
    fn progress_with_zero_target_is_zero() {
        assert_eq!(progress_percent(100.0, 0.0), 0);
    }

    #[test]
    fn bands_split_at_50_80_100() {
        assert_eq!(ProgressBand::for_percent(49), ProgressBand::Behind);
        assert_eq!(ProgressBand::for_percent(50), ProgressBand::Approaching);
        assert_eq!(ProgressBand::for_percent(79), ProgressBand::Approaching);
        assert_eq!(ProgressBand::for_percent(80), ProgressBand::OnTrack);
        assert_eq!(ProgressBand::for_percent(100), ProgressBand::OnTrack);
        assert_eq!(ProgressBand::for_percent(101), ProgressBand::Over);
    }
}
