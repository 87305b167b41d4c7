// ABOUTME: Nutrition value objects: macro targets, daily totals, and log entries
// ABOUTME: MacroTargets is the engine output; totals and logs are caller-owned inputs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macrolog Project

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Daily calorie and macro targets produced by the target engine.
///
/// A pure value object with no identity; the engine recomputes it on every
/// call and never persists it. All fields are rounded whole units. They are
/// signed because the carbs field is a residual that can go negative for
/// pathological inputs (very low calorie target with a high protein
/// requirement) — that infeasible split is surfaced, not clamped.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MacroTargets {
    /// Daily calorie target, kcal
    pub calories: i32,
    /// Daily protein target, grams
    pub protein: i32,
    /// Daily carbohydrate target, grams
    pub carbs: i32,
    /// Daily fat target, grams
    pub fat: i32,
    /// Daily fiber target, grams
    pub fiber: i32,
}

/// Summed consumption and workout burn for a single day.
///
/// Computed upstream from the meal and workout logs; transient and
/// recomputed per day/query.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct DailyTotals {
    /// Calories consumed, kcal
    pub calories: f64,
    /// Protein consumed, grams
    pub protein: f64,
    /// Carbohydrates consumed, grams
    pub carbs: f64,
    /// Fat consumed, grams
    pub fat: f64,
    /// Fiber consumed, grams
    pub fiber: f64,
    /// Calories burned across logged workouts, kcal
    pub calories_burned: f64,
}

impl DailyTotals {
    /// Sum a day's meal and workout logs into totals
    #[must_use]
    pub fn from_logs(meals: &[Meal], workouts: &[Workout]) -> Self {
        let mut totals = Self::default();
        for meal in meals {
            totals.calories += meal.calories;
            totals.protein += meal.protein;
            totals.carbs += meal.carbs;
            totals.fat += meal.fat;
            totals.fiber += meal.fiber;
        }
        for workout in workouts {
            totals.calories_burned += workout.calories_burned;
        }
        totals
    }
}

/// A logged meal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meal {
    /// Unique meal identifier
    pub id: Uuid,
    /// Day the meal belongs to
    pub date: NaiveDate,
    /// Time of day the meal was eaten
    pub time: NaiveTime,
    /// Free-text description of what was eaten
    pub description: String,
    /// Photo reference, when the meal was logged from a picture
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    /// Calories, kcal
    pub calories: f64,
    /// Protein, grams
    pub protein: f64,
    /// Carbohydrates, grams
    pub carbs: f64,
    /// Fat, grams
    pub fat: f64,
    /// Fiber, grams
    pub fiber: f64,
    /// Creation timestamp from the log store
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// A logged workout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workout {
    /// Unique workout identifier
    pub id: Uuid,
    /// Day the workout belongs to
    pub date: NaiveDate,
    /// Workout type label, e.g. "running"
    pub workout_type: String,
    /// Duration in minutes
    pub duration: u32,
    /// Energy expenditure reported or estimated for the session, kcal
    pub calories_burned: f64,
    /// Free-text notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Creation timestamp from the log store
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Per-day state record.
///
/// Carries the menstruation flag the target engine consumes; the flag is
/// only meaningful when the profile's sex is female.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayLog {
    /// Unique record identifier
    pub id: Uuid,
    /// Day this record describes
    pub date: NaiveDate,
    /// Whether the user logged menstruation for this day
    #[serde(default)]
    pub is_menstruation: bool,
    /// Free-text notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
