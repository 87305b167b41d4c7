// ABOUTME: Deterministic nutrition target engine for the Macrolog platform
// ABOUTME: Pure-function pipeline: BMR -> TDEE -> effective TDEE -> macro targets, plus credit and ETA
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macrolog Project

#![deny(unsafe_code)]

//! # Macrolog Intelligence
//!
//! The calorie/macro target engine. A small pipeline of pure, synchronous
//! functions, leaves first:
//!
//! 1. [`energy::calculate_bmr`] — Basal Metabolic Rate from body measurements
//! 2. [`energy::calculate_tdee`] — BMR scaled by an activity multiplier
//! 3. [`energy::effective_tdee`] — manual override vs. calculated resolution
//! 4. [`targets::calculate_macro_targets`] — cycle and goal adjustments, then
//!    protein/fat/carb/fiber derivation
//! 5. [`workout_credit`] — partial calorie credit for logged exercise
//! 6. [`goal_eta`] — weeks-to-target-weight projection
//!
//! Every function is a deterministic value-in/value-out computation with no
//! shared state, so callers may invoke them freely in parallel or on every
//! keystroke of a profile form. Missing inputs yield `None` ("undetermined")
//! rather than errors or placeholder numbers; see the crate-level contract
//! notes on each function.

/// Tunable formula coefficients and policy tables with published defaults
pub mod config;

/// BMR, TDEE, and effective-TDEE resolution
pub mod energy;

/// Weeks-to-target-weight projection and display formatting
pub mod goal_eta;

/// Goal-switch calorie adjustment policy
pub mod goal_policy;

/// Research-backed physiological constants
pub mod physiological_constants;

/// Daily calorie/macro target derivation
pub mod targets;

/// Workout calorie giveback credit and its suggested-percentage policy
pub mod workout_credit;

pub use config::NutritionConfig;
pub use energy::{calculate_bmr, calculate_tdee, effective_tdee};
pub use goal_eta::{weeks_to_target_weight, GoalEta};
pub use goal_policy::default_adjustment_for_goal;
pub use targets::calculate_macro_targets;
pub use workout_credit::{suggested_credit_percentage, workout_calorie_credit};
