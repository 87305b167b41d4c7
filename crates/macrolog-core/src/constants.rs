// ABOUTME: Domain constants shared across the Macrolog workspace
// ABOUTME: Plausibility ranges used when linting user-supplied profile data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macrolog Project

//! Domain constants organized by concern.

/// Plausibility ranges for user-supplied biometric data.
///
/// These bound what a profile lint accepts, not what the engine computes:
/// the engine treats any absent field as undetermined rather than
/// rejecting it.
pub mod limits {
    /// Maximum plausible body weight in kilograms
    pub const MAX_WEIGHT_KG: f64 = 300.0;

    /// Maximum plausible height in centimeters
    pub const MAX_HEIGHT_CM: f64 = 300.0;

    /// Minimum age in years (Mifflin-St Jeor formula validated for ages 10+)
    pub const MIN_AGE_YEARS: u32 = 10;

    /// Maximum plausible age in years
    pub const MAX_AGE_YEARS: u32 = 120;

    /// Workout calorie giveback upper bound (whole percent)
    pub const MAX_CREDIT_PERCENT: u8 = 100;

    /// Largest calorie adjustment the profile lint accepts, in either
    /// direction. The steepest built-in rate preset is 1000 kcal/day; a
    /// manual adjustment twice that is treated as a data-entry error.
    pub const MAX_CALORIE_ADJUSTMENT_KCAL: i32 = 2000;
}
