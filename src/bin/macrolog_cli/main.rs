// ABOUTME: Macrolog CLI - command-line surface for the nutrition target engine
// ABOUTME: Computes targets, daily summaries, and goal ETA from JSON profile and log files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macrolog Project
//!
//! Usage:
//! ```bash
//! # Daily calorie/macro targets for a profile
//! macrolog-cli targets --profile profile.json
//!
//! # Targets on a menstruation day, as JSON
//! macrolog-cli targets --profile profile.json --menstruating --json
//!
//! # Full daily summary with progress and remaining macros
//! macrolog-cli summary --profile profile.json --meals meals.json --workouts workouts.json
//!
//! # Weeks to target weight at the current adjustment
//! macrolog-cli eta --profile profile.json
//!
//! # Lint a profile file for implausible values
//! macrolog-cli profile validate profile.json
//! ```

mod commands;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use macrolog::logging::LoggingConfig;
use macrolog::{AppResult, NutritionConfig};
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "macrolog-cli",
    about = "Macrolog nutrition target engine CLI",
    long_about = "Command-line tool for computing daily calorie/macro targets, summaries, and goal projections from profile and log files."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Nutrition config override file (JSON); defaults to the
    /// MACROLOG_NUTRITION_CONFIG env var, then the built-in constants
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Compute daily calorie/macro targets
    Targets {
        /// Profile JSON file; defaults to the per-user config directory
        #[arg(long)]
        profile: Option<PathBuf>,

        /// Apply the menstruation-day TDEE uplift
        #[arg(long)]
        menstruating: bool,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Assemble a daily summary from meal and workout logs
    Summary {
        /// Profile JSON file; defaults to the per-user config directory
        #[arg(long)]
        profile: Option<PathBuf>,

        /// Meal log JSON file (array of meals)
        #[arg(long)]
        meals: PathBuf,

        /// Workout log JSON file (array of workouts)
        #[arg(long)]
        workouts: PathBuf,

        /// Day to summarize (YYYY-MM-DD); defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Apply the menstruation-day TDEE uplift
        #[arg(long)]
        menstruating: bool,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Project weeks to the target weight
    Eta {
        /// Profile JSON file; defaults to the per-user config directory
        #[arg(long)]
        profile: Option<PathBuf>,
    },

    /// Profile file management
    Profile {
        #[command(subcommand)]
        action: ProfileCommand,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum ProfileCommand {
    /// Lint a profile file for implausible values
    Validate {
        /// Profile JSON file
        path: PathBuf,
    },
}

fn load_nutrition_config(cli: &Cli) -> AppResult<NutritionConfig> {
    match &cli.config {
        Some(path) => NutritionConfig::from_json_file(path),
        None => NutritionConfig::from_env(),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging.level = "debug".into();
    }
    logging.init()?;

    let config = load_nutrition_config(&cli)?;
    debug!("nutrition config loaded");

    match &cli.command {
        Command::Targets {
            profile,
            menstruating,
            json,
        } => commands::targets(profile.as_deref(), *menstruating, *json, &config)?,
        Command::Summary {
            profile,
            meals,
            workouts,
            date,
            menstruating,
            json,
        } => commands::summary(
            profile.as_deref(),
            meals,
            workouts,
            *date,
            *menstruating,
            *json,
            &config,
        )?,
        Command::Eta { profile } => commands::eta(profile.as_deref(), &config)?,
        Command::Profile {
            action: ProfileCommand::Validate { path },
        } => commands::validate_profile(path)?,
    }

    Ok(())
}
