// ABOUTME: Nutrition engine configuration: formula coefficients and policy tables
// ABOUTME: Defaults carry the published constants; validate() guards loaded overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macrolog Project

//! Nutrition Engine Configuration
//!
//! Every coefficient the engine uses lives here so deployments can tune
//! them without a rebuild, while `Default` supplies the published values:
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Activity factors: `McArdle` et al. (2010), Exercise Physiology
//! - Fat share / protein ratios: DRI guidelines; Phillips & Van Loon (2011)
//!
//! A config loaded from a file must pass [`NutritionConfig::validate`]
//! before use; the engine assumes validated values.

use crate::physiological_constants::{adjustments, cycle, guidelines};
use macrolog_core::errors::{AppError, AppResult};
use macrolog_core::models::ActivityLevel;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable naming an override config file
pub const CONFIG_PATH_ENV: &str = "MACROLOG_NUTRITION_CONFIG";

/// BMR (Basal Metabolic Rate) calculation configuration
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for
/// resting energy expenditure. American Journal of Clinical Nutrition,
/// 51(2), 241-247.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Weight coefficient (10.0)
    pub weight_coef: f64,
    /// Height coefficient (6.25)
    pub height_coef: f64,
    /// Age coefficient (-5.0)
    pub age_coef: f64,
    /// Male constant (+5)
    pub male_constant: f64,
    /// Female constant (-161)
    pub female_constant: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            weight_coef: 10.0,
            height_coef: 6.25,
            age_coef: -5.0,
            male_constant: 5.0,
            female_constant: -161.0,
        }
    }
}

/// Activity factor multipliers for TDEE calculation
///
/// Reference: `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010).
/// Exercise Physiology.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Little to no exercise: 1.2
    pub sedentary: f64,
    /// Light exercise 1-3 days/week: 1.375
    pub light: f64,
    /// Moderate exercise 3-5 days/week: 1.55
    pub moderate: f64,
    /// Hard exercise 6-7 days/week: 1.725
    pub active: f64,
    /// Very hard exercise or a physical job: 1.9
    pub very_active: f64,
}

impl ActivityFactorsConfig {
    /// Multiplier for an activity level
    #[must_use]
    pub const fn factor_for(&self, level: ActivityLevel) -> f64 {
        match level {
            ActivityLevel::Sedentary => self.sedentary,
            ActivityLevel::Light => self.light,
            ActivityLevel::Moderate => self.moderate,
            ActivityLevel::Active => self.active,
            ActivityLevel::VeryActive => self.very_active,
        }
    }

    fn validate(&self) -> AppResult<()> {
        let factors = [
            ("sedentary", self.sedentary),
            ("light", self.light),
            ("moderate", self.moderate),
            ("active", self.active),
            ("very_active", self.very_active),
        ];
        for (name, factor) in factors {
            if factor <= 0.0 {
                return Err(AppError::config_invalid(format!(
                    "activity factor {name} must be positive, got {factor}"
                )));
            }
        }
        Ok(())
    }
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            light: 1.375,
            moderate: 1.55,
            active: 1.725,
            very_active: 1.9,
        }
    }
}

/// Macro target derivation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacroSplitConfig {
    /// TDEE multiplier applied on menstruation days (sex = female only)
    pub menstruation_tdee_multiplier: f64,
    /// Default daily deficit for the weight loss goal, kcal
    pub weight_loss_deficit_kcal: i32,
    /// Default daily surplus for the muscle gain goal, kcal
    pub muscle_gain_surplus_kcal: i32,
    /// Protein ratio for muscle gain / weight loss, g per kg bodyweight
    pub protein_g_per_kg_high: f64,
    /// Protein ratio otherwise, g per kg bodyweight
    pub protein_g_per_kg_base: f64,
    /// Share of target calories assigned to protein when weight is
    /// unknown (0-1)
    pub protein_fallback_calorie_share: f64,
    /// Share of target calories assigned to fat (0-1)
    pub fat_calorie_share: f64,
    /// Fiber recommendation, grams per 1000 kcal
    pub fiber_g_per_1000_kcal: f64,
}

impl MacroSplitConfig {
    fn validate(&self) -> AppResult<()> {
        if self.menstruation_tdee_multiplier <= 0.0 {
            return Err(AppError::config_invalid(format!(
                "menstruation multiplier must be positive, got {}",
                self.menstruation_tdee_multiplier
            )));
        }
        let shares = [
            ("protein_fallback_calorie_share", self.protein_fallback_calorie_share),
            ("fat_calorie_share", self.fat_calorie_share),
        ];
        for (name, share) in shares {
            if !(0.0..=1.0).contains(&share) {
                return Err(AppError::config_invalid(format!(
                    "{name} must be between 0.0 and 1.0, got {share}"
                )));
            }
        }
        if self.protein_g_per_kg_high <= 0.0 || self.protein_g_per_kg_base <= 0.0 {
            return Err(AppError::config_invalid(
                "protein ratios must be positive".to_owned(),
            ));
        }
        if self.fiber_g_per_1000_kcal < 0.0 {
            return Err(AppError::config_invalid(format!(
                "fiber recommendation cannot be negative, got {}",
                self.fiber_g_per_1000_kcal
            )));
        }
        Ok(())
    }
}

impl Default for MacroSplitConfig {
    fn default() -> Self {
        Self {
            menstruation_tdee_multiplier: cycle::LUTEAL_TDEE_MULTIPLIER,
            weight_loss_deficit_kcal: adjustments::WEIGHT_LOSS_DEFICIT_KCAL,
            muscle_gain_surplus_kcal: adjustments::MUSCLE_GAIN_SURPLUS_KCAL,
            protein_g_per_kg_high: 2.0,
            protein_g_per_kg_base: 1.6,
            protein_fallback_calorie_share: 0.25,
            // 25-30% of calories from fat per DRI; use the midpoint
            fat_calorie_share: 0.275,
            fiber_g_per_1000_kcal: guidelines::FIBER_G_PER_1000_KCAL,
        }
    }
}

/// One suggested-giveback tier: deficits at or beyond the threshold
/// suggest the paired percentage
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CreditTier {
    /// Minimum deficit magnitude for this tier, kcal/day
    pub min_deficit_kcal: i32,
    /// Suggested giveback, whole percent
    pub percentage: u8,
}

/// Workout calorie giveback configuration.
///
/// The giveback percentage decides how much of the logged workout burn is
/// credited back to the daily eating budget. The suggested-default tiers
/// give back less of the burn the more aggressive the deficit, so the
/// deficit is preserved; the user may always override.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutCreditConfig {
    /// Giveback applied when the profile has no stored preference
    pub default_percentage: u8,
    /// Suggested giveback for maintenance / muscle gain goals
    pub full_credit_percentage: u8,
    /// Suggested giveback when no goal or no adjustment is known
    pub unknown_goal_percentage: u8,
    /// Suggested giveback for mild deficits below every tier threshold
    pub mild_deficit_percentage: u8,
    /// Deficit tiers, ordered by descending threshold
    pub deficit_tiers: Vec<CreditTier>,
}

impl WorkoutCreditConfig {
    fn validate(&self) -> AppResult<()> {
        let percentages = [
            self.default_percentage,
            self.full_credit_percentage,
            self.unknown_goal_percentage,
            self.mild_deficit_percentage,
        ];
        if let Some(bad) = percentages.iter().find(|pct| **pct > 100) {
            return Err(AppError::config_invalid(format!(
                "giveback percentage must be 0-100, got {bad}"
            )));
        }
        let mut previous: Option<i32> = None;
        for tier in &self.deficit_tiers {
            if tier.percentage > 100 {
                return Err(AppError::config_invalid(format!(
                    "giveback percentage must be 0-100, got {}",
                    tier.percentage
                )));
            }
            if tier.min_deficit_kcal <= 0 {
                return Err(AppError::config_invalid(format!(
                    "deficit tier threshold must be positive, got {}",
                    tier.min_deficit_kcal
                )));
            }
            if let Some(prev) = previous {
                if tier.min_deficit_kcal >= prev {
                    return Err(AppError::config_invalid(
                        "deficit tiers must be ordered by descending threshold".to_owned(),
                    ));
                }
            }
            previous = Some(tier.min_deficit_kcal);
        }
        Ok(())
    }
}

impl Default for WorkoutCreditConfig {
    fn default() -> Self {
        Self {
            default_percentage: 100,
            full_credit_percentage: 100,
            unknown_goal_percentage: 50,
            mild_deficit_percentage: 75,
            deficit_tiers: vec![
                CreditTier {
                    min_deficit_kcal: 1000,
                    percentage: 0,
                },
                CreditTier {
                    min_deficit_kcal: 750,
                    percentage: 25,
                },
                CreditTier {
                    min_deficit_kcal: 500,
                    percentage: 50,
                },
            ],
        }
    }
}

/// Goal-ETA projection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalEtaConfig {
    /// Energy content of one kilogram of body fat mass, kcal
    pub kcal_per_kg_body_fat: f64,
    /// Week counts at or above this threshold display as whole months
    pub months_display_threshold_weeks: u32,
}

impl GoalEtaConfig {
    fn validate(&self) -> AppResult<()> {
        if self.kcal_per_kg_body_fat <= 0.0 {
            return Err(AppError::config_invalid(format!(
                "kcal per kg body fat must be positive, got {}",
                self.kcal_per_kg_body_fat
            )));
        }
        Ok(())
    }
}

impl Default for GoalEtaConfig {
    fn default() -> Self {
        Self {
            kcal_per_kg_body_fat: crate::physiological_constants::energy::KCAL_PER_KG_BODY_FAT,
            months_display_threshold_weeks: 52,
        }
    }
}

/// Complete nutrition engine configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NutritionConfig {
    /// BMR formula coefficients
    pub bmr: BmrConfig,
    /// Activity factor multipliers for TDEE
    pub activity_factors: ActivityFactorsConfig,
    /// Macro target derivation coefficients
    pub macro_split: MacroSplitConfig,
    /// Workout calorie giveback policy
    pub workout_credit: WorkoutCreditConfig,
    /// Goal-ETA projection coefficients
    pub goal_eta: GoalEtaConfig,
}

impl NutritionConfig {
    /// Validate every section of the configuration
    ///
    /// # Errors
    ///
    /// Returns `AppError` with `ConfigInvalid` naming the first offending
    /// value.
    pub fn validate(&self) -> AppResult<()> {
        self.activity_factors.validate()?;
        self.macro_split.validate()?;
        self.workout_credit.validate()?;
        self.goal_eta.validate()?;
        Ok(())
    }

    /// Load and validate a configuration from a JSON file
    ///
    /// # Errors
    ///
    /// Returns `AppError` when the file cannot be read, parsed, or fails
    /// validation.
    pub fn from_json_file(path: &Path) -> AppResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|err| {
            AppError::config_error(format!("cannot read {}", path.display())).with_source(err)
        })?;
        let config: Self = serde_json::from_str(&raw).map_err(|err| {
            AppError::config_error(format!("cannot parse {}", path.display())).with_source(err)
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve the active configuration: the file named by
    /// [`CONFIG_PATH_ENV`] when set, the published defaults otherwise
    ///
    /// # Errors
    ///
    /// Returns `AppError` when an override file is named but unusable.
    pub fn from_env() -> AppResult<Self> {
        match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) => Self::from_json_file(Path::new(&path)),
            Err(_) => Ok(Self::default()),
        }
    }
}
