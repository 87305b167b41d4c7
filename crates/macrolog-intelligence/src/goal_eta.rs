// ABOUTME: Weeks-to-target-weight projection from the current daily deficit
// ABOUTME: Deficit-direction only; degenerate inputs resolve to undetermined, never infinity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macrolog Project

use crate::config::GoalEtaConfig;
use macrolog_core::models::Profile;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Project how many weeks of the current calorie adjustment it takes to
/// reach the target weight.
///
/// Returns `None` unless weight, target weight, and a non-zero calorie
/// adjustment are all present and the current weight is above the target —
/// the projection only handles the deficit direction; at or below target
/// there is nothing to project. A zero adjustment is undetermined rather
/// than a division blowing up into infinity.
#[must_use]
pub fn weeks_to_target_weight(profile: &Profile, config: &GoalEtaConfig) -> Option<u32> {
    let weight = profile.weight?;
    let target = profile.target_weight?;
    let adjustment = profile.calorie_adjustment?;

    if weight <= target || adjustment == 0 {
        return None;
    }

    let daily_rate = f64::from(adjustment.abs());
    let days_to_goal = (weight - target) * config.kcal_per_kg_body_fat / daily_rate;
    Some((days_to_goal / 7.0).round() as u32)
}

/// A goal ETA ready for display: short horizons read as weeks, long ones
/// as whole months
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case", tag = "unit", content = "value")]
pub enum GoalEta {
    /// Horizon below the months threshold
    Weeks(u32),
    /// Horizon at or above the months threshold, in whole months
    Months(u32),
}

impl GoalEta {
    /// Convert a raw week count into the display unit
    #[must_use]
    pub const fn from_weeks(weeks: u32, config: &GoalEtaConfig) -> Self {
        if weeks < config.months_display_threshold_weeks {
            Self::Weeks(weeks)
        } else {
            // Whole months at ~4 weeks per month, rounded to nearest
            Self::Months((weeks + 2) / 4)
        }
    }
}

impl fmt::Display for GoalEta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Weeks(weeks) => write!(f, "{weeks} weeks"),
            Self::Months(months) => write!(f, "{months} months"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(weight: f64, target: f64, adjustment: i32) -> Profile {
        Profile {
            weight: Some(weight),
            target_weight: Some(target),
            calorie_adjustment: Some(adjustment),
            ..Profile::empty()
        }
    }

    fn config() -> GoalEtaConfig {
        GoalEtaConfig::default()
    }

    #[test]
    fn worked_example() {
        // 10 kg at 500 kcal/day: 10 * 7700 / 500 = 154 days => 22 weeks
        assert_eq!(
            weeks_to_target_weight(&profile(80.0, 70.0, -500), &config()),
            Some(22)
        );
    }

    #[test]
    fn undetermined_at_or_below_target() {
        assert_eq!(
            weeks_to_target_weight(&profile(70.0, 70.0, -500), &config()),
            None
        );
        assert_eq!(
            weeks_to_target_weight(&profile(65.0, 70.0, -500), &config()),
            None
        );
    }

    #[test]
    fn zero_adjustment_is_undetermined_not_infinite() {
        assert_eq!(
            weeks_to_target_weight(&profile(80.0, 70.0, 0), &config()),
            None
        );
    }

    #[test]
    fn missing_fields_are_undetermined() {
        let mut p = profile(80.0, 70.0, -500);
        p.target_weight = None;
        assert_eq!(weeks_to_target_weight(&p, &config()), None);

        let mut p = profile(80.0, 70.0, -500);
        p.calorie_adjustment = None;
        assert_eq!(weeks_to_target_weight(&p, &config()), None);
    }

    #[test]
    fn surplus_magnitude_still_projects() {
        // abs() of the adjustment is the daily rate
        assert_eq!(
            weeks_to_target_weight(&profile(80.0, 70.0, 500), &config()),
            Some(22)
        );
    }

    #[test]
    fn short_horizons_display_as_weeks() {
        assert_eq!(GoalEta::from_weeks(22, &config()).to_string(), "22 weeks");
    }

    #[test]
    fn long_horizons_display_as_months() {
        let eta = GoalEta::from_weeks(60, &config());
        assert_eq!(eta, GoalEta::Months(15));
        assert_eq!(eta.to_string(), "15 months");
    }
}
