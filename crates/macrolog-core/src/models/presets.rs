// ABOUTME: Built-in catalogs: weight change rate presets and workout energy presets
// ABOUTME: Static tables surfaced in pickers; the engine itself never reads them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macrolog Project

use serde::Serialize;

/// A selectable weight change rate, expressed as a daily calorie
/// adjustment and the approximate weekly weight delta it produces.
///
/// Serialize-only: the catalogs are compiled in and only ever leave the
/// process, e.g. toward a picker UI.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct RatePreset {
    /// Stable identifier, e.g. "normal"
    pub id: &'static str,
    /// Display label
    pub label: &'static str,
    /// Daily calorie adjustment in kcal; negative is a deficit
    pub adjustment: i32,
    /// Approximate weekly weight change, e.g. "~0.5 kg/week"
    pub weekly_delta: &'static str,
}

/// Deficit presets offered for the weight loss goal
pub const WEIGHT_LOSS_RATES: [RatePreset; 4] = [
    RatePreset {
        id: "slow",
        label: "Slow",
        adjustment: -250,
        weekly_delta: "~0.25 kg/week",
    },
    RatePreset {
        id: "normal",
        label: "Normal",
        adjustment: -500,
        weekly_delta: "~0.5 kg/week",
    },
    RatePreset {
        id: "fast",
        label: "Fast",
        adjustment: -750,
        weekly_delta: "~0.75 kg/week",
    },
    RatePreset {
        id: "aggressive",
        label: "Aggressive",
        adjustment: -1000,
        weekly_delta: "~1 kg/week",
    },
];

/// Surplus presets offered for the muscle gain goal
pub const WEIGHT_GAIN_RATES: [RatePreset; 2] = [
    RatePreset {
        id: "lean",
        label: "Lean bulk",
        adjustment: 250,
        weekly_delta: "+0.25 kg/week",
    },
    RatePreset {
        id: "normal",
        label: "Normal",
        adjustment: 400,
        weekly_delta: "+0.4 kg/week",
    },
];

/// A workout type with a typical hourly energy expenditure, used to
/// prefill the burned-calories field when logging a session.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct WorkoutPreset {
    /// Workout type label
    pub workout_type: &'static str,
    /// Typical energy expenditure, kcal per hour
    pub calories_per_hour: u32,
}

impl WorkoutPreset {
    /// Estimate calories burned for a session of the given duration
    #[must_use]
    pub fn estimate_calories(&self, duration_minutes: u32) -> u32 {
        (f64::from(self.calories_per_hour) * f64::from(duration_minutes) / 60.0).round() as u32
    }
}

/// Built-in workout presets
pub const WORKOUT_PRESETS: [WorkoutPreset; 8] = [
    WorkoutPreset {
        workout_type: "strength",
        calories_per_hour: 400,
    },
    WorkoutPreset {
        workout_type: "running",
        calories_per_hour: 600,
    },
    WorkoutPreset {
        workout_type: "cycling",
        calories_per_hour: 500,
    },
    WorkoutPreset {
        workout_type: "swimming",
        calories_per_hour: 550,
    },
    WorkoutPreset {
        workout_type: "walking",
        calories_per_hour: 250,
    },
    WorkoutPreset {
        workout_type: "yoga",
        calories_per_hour: 200,
    },
    WorkoutPreset {
        workout_type: "hiit",
        calories_per_hour: 700,
    },
    WorkoutPreset {
        workout_type: "other",
        calories_per_hour: 300,
    },
];

/// Look up a workout preset by its type label
#[must_use]
pub fn workout_preset(workout_type: &str) -> Option<&'static WorkoutPreset> {
    WORKOUT_PRESETS
        .iter()
        .find(|preset| preset.workout_type == workout_type)
}
