// ABOUTME: Shared fixtures for Macrolog integration tests
// ABOUTME: Profile and log builders used across the test suites
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macrolog Project

#![allow(dead_code)] // each test binary uses a subset of these helpers

use chrono::{NaiveDate, NaiveTime};
use macrolog::{ActivityLevel, Meal, Profile, Sex, Workout};
use uuid::Uuid;

/// The worked-example male profile: BMR 1730, moderate TDEE 2682
pub fn complete_male_profile() -> Profile {
    Profile {
        weight: Some(75.0),
        height: Some(180.0),
        age: Some(30),
        sex: Some(Sex::Male),
        activity_level: Some(ActivityLevel::Moderate),
        ..Profile::empty()
    }
}

/// A complete female profile for cycle-adjustment tests
pub fn complete_female_profile() -> Profile {
    Profile {
        weight: Some(60.0),
        height: Some(165.0),
        age: Some(25),
        sex: Some(Sex::Female),
        activity_level: Some(ActivityLevel::Light),
        ..Profile::empty()
    }
}

/// Day used by the log fixtures
pub fn test_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
}

/// A meal on the fixture day
pub fn meal(calories: f64, protein: f64, carbs: f64, fat: f64, fiber: f64) -> Meal {
    Meal {
        id: Uuid::new_v4(),
        date: test_date(),
        time: NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
        description: "fixture meal".into(),
        photo_url: None,
        calories,
        protein,
        carbs,
        fat,
        fiber,
        created_at: None,
    }
}

/// A workout on the fixture day
pub fn workout(calories_burned: f64) -> Workout {
    Workout {
        id: Uuid::new_v4(),
        date: test_date(),
        workout_type: "running".into(),
        duration: 45,
        calories_burned,
        notes: None,
        created_at: None,
    }
}
