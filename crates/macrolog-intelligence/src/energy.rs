// ABOUTME: Basal and total daily energy expenditure calculations
// ABOUTME: Mifflin-St Jeor BMR, activity-scaled TDEE, and manual-override resolution
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macrolog Project

//! Energy expenditure calculations.
//!
//! Contract: a missing input never becomes a guessed number. Each function
//! returns `None` ("undetermined") when a field it needs is absent, and the
//! absence propagates down the pipeline so the caller can render an
//! incomplete-profile prompt instead of a misleading target.

use crate::config::{BmrConfig, NutritionConfig};
use macrolog_core::models::{Profile, Sex};

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation (1990).
///
/// Formula: `BMR = 10 x weight_kg + 6.25 x height_cm - 5 x age + offset`
/// with offset +5 for males and -161 for females.
///
/// Returns `None` when any of weight, height, age, or sex is absent. The
/// result is intentionally unrounded; rounding happens once at TDEE.
///
/// Reference: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
#[must_use]
pub fn calculate_bmr(profile: &Profile, config: &BmrConfig) -> Option<f64> {
    let weight = profile.weight?;
    let height = profile.height?;
    let age = profile.age?;
    let sex = profile.sex?;

    let base = config.weight_coef.mul_add(weight, config.height_coef * height)
        + config.age_coef * f64::from(age);

    let offset = match sex {
        Sex::Male => config.male_constant,
        Sex::Female => config.female_constant,
    };

    Some(base + offset)
}

/// Calculate Total Daily Energy Expenditure.
///
/// Scales BMR by the fixed multiplier for the profile's activity level and
/// rounds to the nearest whole kcal. Returns `None` when BMR is
/// undetermined or the activity level is absent.
#[must_use]
pub fn calculate_tdee(profile: &Profile, config: &NutritionConfig) -> Option<i32> {
    let bmr = calculate_bmr(profile, &config.bmr)?;
    let level = profile.activity_level?;
    let factor = config.activity_factors.factor_for(level);
    Some((bmr * factor).round() as i32)
}

/// Resolve the TDEE the rest of the engine should use.
///
/// A manual value (e.g. a wearable's reported average) always wins when the
/// profile both enables it and carries one: it is returned verbatim with no
/// recomputation or rounding drift. Otherwise the caller-maintained `tdee`
/// snapshot is used when present, and only then is a fresh calculation run.
#[must_use]
pub fn effective_tdee(profile: &Profile, config: &NutritionConfig) -> Option<i32> {
    if profile.use_custom_tdee {
        if let Some(custom) = profile.custom_tdee {
            return Some(custom);
        }
    }
    profile.tdee.or_else(|| calculate_tdee(profile, config))
}
