// ABOUTME: Macrolog CLI subcommand implementations
// ABOUTME: File loading, engine invocation, and table/JSON rendering per subcommand
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macrolog Project

use chrono::NaiveDate;
use macrolog::constants::limits;
use macrolog::summary::{progress_percent, DailySummary, ProgressBand};
use macrolog::{
    calculate_macro_targets, weeks_to_target_weight, AppError, AppResult, ErrorCode, GoalEta,
    MacroTargets, Meal, NutritionConfig, Profile, Workout,
};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Resolve the profile path: an explicit `--profile` wins, else the
/// per-user config directory
fn resolve_profile_path(path: Option<&Path>) -> AppResult<PathBuf> {
    if let Some(path) = path {
        return Ok(path.to_owned());
    }
    dirs::config_dir()
        .map(|dir| dir.join("macrolog").join("profile.json"))
        .ok_or_else(|| {
            AppError::not_found("no --profile given and no user config directory available")
        })
}

fn load_json<T: DeserializeOwned>(path: &Path, what: &str) -> AppResult<T> {
    let raw = std::fs::read_to_string(path).map_err(|err| {
        AppError::not_found(format!("cannot read {what} file {}", path.display())).with_source(err)
    })?;
    let value = serde_json::from_str(&raw).map_err(|err| {
        AppError::new(
            ErrorCode::SerializationError,
            format!("cannot parse {what} file {}", path.display()),
        )
        .with_source(err)
    })?;
    debug!(path = %path.display(), "{what} loaded");
    Ok(value)
}

fn load_profile(path: Option<&Path>) -> AppResult<Profile> {
    load_json(&resolve_profile_path(path)?, "profile")
}

const fn band_label(band: ProgressBand) -> &'static str {
    match band {
        ProgressBand::Behind => "behind",
        ProgressBand::Approaching => "approaching",
        ProgressBand::OnTrack => "on track",
        ProgressBand::Over => "over",
    }
}

fn print_targets_table(targets: MacroTargets) {
    println!("Daily targets");
    println!("  calories  {:>6} kcal", targets.calories);
    println!("  protein   {:>6} g", targets.protein);
    println!("  carbs     {:>6} g", targets.carbs);
    println!("  fat       {:>6} g", targets.fat);
    println!("  fiber     {:>6} g", targets.fiber);
}

/// `targets` subcommand: compute and print daily macro targets
pub fn targets(
    profile_path: Option<&Path>,
    menstruating: bool,
    json: bool,
    config: &NutritionConfig,
) -> AppResult<()> {
    let profile = load_profile(profile_path)?;
    let targets = calculate_macro_targets(&profile, menstruating, config);

    if json {
        println!("{}", serde_json::to_string_pretty(&targets)?);
        return Ok(());
    }

    match targets {
        Some(targets) => print_targets_table(targets),
        None => println!(
            "Targets undetermined: the profile is missing required fields \
             (weight, height, age, sex, activity level) and has no stored or manual TDEE."
        ),
    }
    Ok(())
}

/// `summary` subcommand: assemble and print a daily summary
#[allow(clippy::too_many_arguments)]
pub fn summary(
    profile_path: Option<&Path>,
    meals_path: &Path,
    workouts_path: &Path,
    date: Option<NaiveDate>,
    menstruating: bool,
    json: bool,
    config: &NutritionConfig,
) -> AppResult<()> {
    let profile = load_profile(profile_path)?;
    let meals: Vec<Meal> = load_json(meals_path, "meal log")?;
    let workouts: Vec<Workout> = load_json(workouts_path, "workout log")?;

    let date = date.unwrap_or_else(|| chrono::Local::now().date_naive());
    let meals: Vec<Meal> = meals.into_iter().filter(|meal| meal.date == date).collect();
    let workouts: Vec<Workout> = workouts
        .into_iter()
        .filter(|workout| workout.date == date)
        .collect();

    let summary = DailySummary::build(date, meals, workouts, &profile, menstruating, config);
    let remaining = summary.remaining();
    let adjusted = summary.adjusted_calorie_target(&profile, config);

    if json {
        let payload = serde_json::json!({
            "summary": summary,
            "remaining": remaining,
            "adjusted_calorie_target": adjusted,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    println!(
        "{date}: {} meals, {} workouts",
        summary.meals.len(),
        summary.workouts.len()
    );

    let Some(targets) = summary.targets else {
        println!("Targets undetermined: complete the profile to see progress.");
        return Ok(());
    };

    // Safe: adjusted is Some whenever targets is
    let calorie_budget = adjusted.unwrap_or(targets.calories);
    let rows = [
        ("calories", summary.totals.calories, f64::from(calorie_budget), "kcal"),
        ("protein", summary.totals.protein, f64::from(targets.protein), "g"),
        ("carbs", summary.totals.carbs, f64::from(targets.carbs), "g"),
        ("fat", summary.totals.fat, f64::from(targets.fat), "g"),
        ("fiber", summary.totals.fiber, f64::from(targets.fiber), "g"),
    ];
    for (name, current, target, unit) in rows {
        let percent = progress_percent(current, target);
        let band = ProgressBand::for_percent(percent.into());
        println!(
            "  {name:<9} {current:>7.0} / {target:>5.0} {unit:<4} {percent:>3}% ({})",
            band_label(band)
        );
    }
    if summary.totals.calories_burned > 0.0 {
        println!(
            "  workout credit: +{} kcal on a {} kcal base target",
            calorie_budget - targets.calories,
            targets.calories
        );
    }
    if let Some(remaining) = remaining {
        println!(
            "  remaining: {} kcal, {} g protein, {} g carbs, {} g fat, {} g fiber",
            remaining.calories, remaining.protein, remaining.carbs, remaining.fat, remaining.fiber
        );
    }
    Ok(())
}

/// `eta` subcommand: project weeks to the target weight
pub fn eta(profile_path: Option<&Path>, config: &NutritionConfig) -> AppResult<()> {
    let profile = load_profile(profile_path)?;

    match weeks_to_target_weight(&profile, &config.goal_eta) {
        Some(weeks) => {
            let eta = GoalEta::from_weeks(weeks, &config.goal_eta);
            println!("Estimated time to target weight: {eta}");
        }
        None => println!(
            "ETA undetermined: needs current weight above target weight \
             and a non-zero calorie adjustment."
        ),
    }
    Ok(())
}

/// `profile validate` subcommand: lint a profile file for implausible values
pub fn validate_profile(path: &Path) -> AppResult<()> {
    let profile = load_profile(Some(path))?;
    let mut problems = Vec::new();

    if let Some(weight) = profile.weight {
        if weight <= 0.0 || weight > limits::MAX_WEIGHT_KG {
            problems.push(format!(
                "weight must be between 0 and {} kg, got {weight}",
                limits::MAX_WEIGHT_KG
            ));
        }
    }
    if let Some(height) = profile.height {
        if height <= 0.0 || height > limits::MAX_HEIGHT_CM {
            problems.push(format!(
                "height must be between 0 and {} cm, got {height}",
                limits::MAX_HEIGHT_CM
            ));
        }
    }
    if let Some(age) = profile.age {
        if !(limits::MIN_AGE_YEARS..=limits::MAX_AGE_YEARS).contains(&age) {
            problems.push(format!(
                "age must be between {} and {} years, got {age}",
                limits::MIN_AGE_YEARS,
                limits::MAX_AGE_YEARS
            ));
        }
    }
    if let Some(target) = profile.target_weight {
        if target <= 0.0 || target > limits::MAX_WEIGHT_KG {
            problems.push(format!(
                "target weight must be between 0 and {} kg, got {target}",
                limits::MAX_WEIGHT_KG
            ));
        }
    }
    if let Some(tdee) = profile.custom_tdee {
        if tdee <= 0 {
            problems.push(format!("manual TDEE must be positive, got {tdee}"));
        }
    }
    if let Some(tdee) = profile.tdee {
        if tdee <= 0 {
            problems.push(format!("stored TDEE must be positive, got {tdee}"));
        }
    }
    if let Some(percentage) = profile.workout_calorie_percentage {
        if percentage > limits::MAX_CREDIT_PERCENT {
            problems.push(format!(
                "workout calorie percentage must be 0-{}, got {percentage}",
                limits::MAX_CREDIT_PERCENT
            ));
        }
    }
    if let Some(adjustment) = profile.calorie_adjustment {
        if adjustment.abs() > limits::MAX_CALORIE_ADJUSTMENT_KCAL {
            problems.push(format!(
                "calorie adjustment beyond +/-{} kcal/day looks like a data-entry error, got {adjustment}",
                limits::MAX_CALORIE_ADJUSTMENT_KCAL
            ));
        }
    }

    if problems.is_empty() {
        println!("Profile OK: {}", path.display());
        return Ok(());
    }
    for problem in &problems {
        println!("  problem: {problem}");
    }
    Err(AppError::out_of_range(format!(
        "{} problem(s) found in {}",
        problems.len(),
        path.display()
    )))
}
