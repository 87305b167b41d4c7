// ABOUTME: Main library entry point for the Macrolog nutrition platform
// ABOUTME: Re-exports the target engine surface and provides daily summary assembly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macrolog Project

#![deny(unsafe_code)]

//! # Macrolog
//!
//! Deterministic calorie/macro target engine for personal nutrition
//! tracking. Meals and workouts are logged against an external store and
//! AI-estimated elsewhere; this workspace owns the numbers: daily
//! energy/macro targets, workout calorie credit, progress percentages, and
//! the weeks-to-goal projection.
//!
//! The heavy lifting lives in two library crates re-exported here:
//!
//! - `macrolog-core`: domain models, errors, constants
//! - `macrolog-intelligence`: the pure-function target engine
//!
//! This crate adds the caller-side assembly: [`summary`] composes logs,
//! profile, and engine output into a [`summary::DailySummary`] with
//! progress and remaining-macro helpers, and [`logging`] configures the
//! tracing subscriber for the CLI.

/// Tracing subscriber configuration
pub mod logging;

/// Daily summary assembly and progress display helpers
pub mod summary;

pub use macrolog_core::constants;
pub use macrolog_core::errors::{AppError, AppResult, ErrorCode};
pub use macrolog_core::models::{
    ActivityLevel, DailyTotals, DayLog, Goal, MacroTargets, Meal, Profile, RatePreset, Sex,
    Workout, WorkoutPreset, WEIGHT_GAIN_RATES, WEIGHT_LOSS_RATES, WORKOUT_PRESETS,
};
pub use macrolog_intelligence::{
    calculate_bmr, calculate_macro_targets, calculate_tdee, default_adjustment_for_goal,
    effective_tdee, suggested_credit_percentage, weeks_to_target_weight, workout_calorie_credit,
    GoalEta, NutritionConfig,
};
pub use summary::{
    adjusted_calorie_target, progress_percent, remaining_macros, DailySummary, ProgressBand,
};
