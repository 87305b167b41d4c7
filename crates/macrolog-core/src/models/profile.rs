// ABOUTME: User profile model with biometric, goal, and energy-override fields
// ABOUTME: Every engine input is optional; absent fields propagate as undetermined results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macrolog Project

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Biological sex for BMR calculations
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    /// Male (higher BMR constant)
    Male,
    /// Female (lower BMR constant)
    Female,
}

/// Activity level for TDEE calculation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little to no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    Light,
    /// Moderate exercise 3-5 days/week
    Moderate,
    /// Hard exercise 6-7 days/week
    Active,
    /// Very hard exercise or a physical job
    VeryActive,
}

/// Training goal driving the calorie adjustment and protein ratio.
///
/// The upstream store kept goals in an array but only ever used it as a
/// singleton, so the profile models it as an optional scalar.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    /// Caloric deficit for weight loss
    WeightLoss,
    /// Caloric surplus for lean muscle gain
    MuscleGain,
    /// Caloric balance
    Maintenance,
}

/// User profile snapshot read from the external profile store.
///
/// The engine never mutates a `Profile`; callers pass a fresh snapshot on
/// every call. Any absent field makes the computations that depend on it
/// come back undetermined rather than silently substituting a default —
/// the only policy defaults are the workout giveback percentage and the
/// protein fallback ratio, both defined at their point of use.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    /// Unique profile identifier
    pub id: Uuid,
    /// Current body weight in kilograms
    pub weight: Option<f64>,
    /// Height in centimeters
    pub height: Option<f64>,
    /// Age in years
    pub age: Option<u32>,
    /// Biological sex
    pub sex: Option<Sex>,
    /// Activity level for the TDEE multiplier
    pub activity_level: Option<ActivityLevel>,
    /// Training goal (at most one)
    pub goal: Option<Goal>,
    /// Cached TDEE snapshot maintained by the caller, kcal/day
    pub tdee: Option<i32>,
    /// Manual TDEE, e.g. a wearable's reported average, kcal/day
    pub custom_tdee: Option<i32>,
    /// Prefer `custom_tdee` over any calculated or cached value
    #[serde(default)]
    pub use_custom_tdee: bool,
    /// Explicit calorie adjustment in kcal/day; negative is a deficit.
    /// When set it overrides the goal-default adjustment.
    pub calorie_adjustment: Option<i32>,
    /// Goal weight in kilograms
    pub target_weight: Option<f64>,
    /// Share of workout-burned calories credited back to the daily
    /// budget, whole percent 0-100
    pub workout_calorie_percentage: Option<u8>,
    /// Creation timestamp from the profile store
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last-update timestamp from the profile store
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Profile {
    /// Create an empty profile with a fresh id and no measurements
    #[must_use]
    pub fn empty() -> Self {
        Self {
            id: Uuid::new_v4(),
            weight: None,
            height: None,
            age: None,
            sex: None,
            activity_level: None,
            goal: None,
            tdee: None,
            custom_tdee: None,
            use_custom_tdee: false,
            calorie_adjustment: None,
            target_weight: None,
            workout_calorie_percentage: None,
            created_at: None,
            updated_at: None,
        }
    }

    /// Whether this profile has the goal set
    #[must_use]
    pub fn has_goal(&self, goal: Goal) -> bool {
        self.goal == Some(goal)
    }
}
