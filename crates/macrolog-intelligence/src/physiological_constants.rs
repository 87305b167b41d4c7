// ABOUTME: Physiological constants used by the nutrition target engine
// ABOUTME: Energy densities, cycle adjustment, and default goal adjustments with references
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macrolog Project

//! Physiological constants based on nutrition science research.
//!
//! These values are fixed properties of human metabolism or established
//! dietary guidelines; tunable policy lives in [`crate::config`] instead.

/// Macronutrient energy densities (Atwater factors)
///
/// Reference: Atwater, W.O. & Bryant, A.P. (1900). The availability and
/// fuel value of food materials.
pub mod energy {
    /// Energy density of protein, kcal per gram
    pub const KCAL_PER_G_PROTEIN: f64 = 4.0;

    /// Energy density of carbohydrate, kcal per gram
    pub const KCAL_PER_G_CARBS: f64 = 4.0;

    /// Energy density of fat, kcal per gram
    pub const KCAL_PER_G_FAT: f64 = 9.0;

    /// Energy content of one kilogram of body fat mass, kcal.
    ///
    /// The classic Wishnofsky (1958) constant used for weight change
    /// projections throughout the app.
    pub const KCAL_PER_KG_BODY_FAT: f64 = 7700.0;
}

/// Menstrual cycle metabolic adjustment
///
/// Reference: Benton, M.J., et al. (2020). Change in resting energy
/// expenditure across the menstrual cycle, a meta-analysis. Research shows
/// metabolism increases roughly 5-10% during the luteal phase.
pub mod cycle {
    /// TDEE multiplier applied on menstruation days, a balanced middle of
    /// the documented 5-10% luteal-phase increase
    pub const LUTEAL_TDEE_MULTIPLIER: f64 = 1.07;
}

/// Dietary guideline constants
pub mod guidelines {
    /// DRI fiber recommendation: 14 g per 1000 kcal consumed
    ///
    /// Reference: Institute of Medicine (2005). Dietary Reference Intakes
    /// for Energy, Carbohydrate, Fiber, Fat, Fatty Acids.
    pub const FIBER_G_PER_1000_KCAL: f64 = 14.0;
}

/// Default goal adjustments
pub mod adjustments {
    /// Default daily deficit for the weight loss goal, kcal (~0.5 kg/week)
    pub const WEIGHT_LOSS_DEFICIT_KCAL: i32 = 500;

    /// Default daily surplus for the muscle gain goal, kcal (lean gains)
    pub const MUSCLE_GAIN_SURPLUS_KCAL: i32 = 300;
}
