// ABOUTME: Calorie expenditure formulas, one per workout variant
// ABOUTME: Preserves the firmware formulas bit-for-bit, including walking floor division
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Calorie expenditure formulas
//!
//! One formula per workout variant, selected by a single `match` over the
//! closed variant set. The coefficients are the tracker firmware's; results
//! must match it bit-for-bit, so these expressions deliberately avoid fused
//! multiply-add and any other reassociation of the arithmetic.

use crate::constants::distance::METERS_PER_KM;
use crate::constants::time::MINUTES_PER_HOUR;
use crate::constants::{running, swimming, walking};
use crate::models::{Workout, WorkoutType};

/// Calories burned during the session, in kcal
///
/// Dispatches to the variant's formula. Inputs are trusted here: the decode
/// layer has already rejected non-positive durations, weights, and heights.
#[must_use]
pub fn spent_calories(workout: &Workout) -> f64 {
    match workout {
        Workout::Running { .. } => running_calories(
            workout.mean_speed_kmh(),
            workout.weight_kg(),
            workout.duration_hours(),
        ),
        Workout::Walking { height_cm, .. } => walking_calories(
            workout.mean_speed_kmh(),
            workout.weight_kg(),
            *height_cm,
            workout.duration_hours(),
        ),
        Workout::Swimming { .. } => {
            swimming_calories(workout.mean_speed_kmh(), workout.weight_kg())
        }
    }
}

/// Get the formula for a workout type as a display string
#[must_use]
pub const fn formula(workout_type: WorkoutType) -> &'static str {
    match workout_type {
        WorkoutType::Running => "kcal = (18 x speed - 20) x weight / 1000 x minutes",
        WorkoutType::Walking => {
            "kcal = (0.035 x weight + floor(speed^2 / height) x 0.029 x weight) x minutes"
        }
        WorkoutType::Swimming => "kcal = (speed + 1.1) x 2 x weight",
    }
}

/// Running: speed-scaled expenditure over the session minutes
#[allow(clippy::suboptimal_flops)] // no mul_add: must match the firmware rounding
fn running_calories(mean_speed_kmh: f64, weight_kg: f64, duration_hours: f64) -> f64 {
    (running::CALORIE_SPEED_MULTIPLIER * mean_speed_kmh - running::CALORIE_SPEED_OFFSET)
        * weight_kg
        / METERS_PER_KM
        * (duration_hours * MINUTES_PER_HOUR)
}

/// Walking: weight term plus a speed/height term over the session minutes
#[allow(clippy::suboptimal_flops)] // no mul_add: must match the firmware rounding
fn walking_calories(
    mean_speed_kmh: f64,
    weight_kg: f64,
    height_cm: f64,
    duration_hours: f64,
) -> f64 {
    // The height term floor-divides a continuous quantity (toward negative
    // infinity). The firmware ships this exact behavior; keep it until the
    // coefficients are revisited on the firmware side.
    let height_term = (mean_speed_kmh * mean_speed_kmh / height_cm).floor();
    (walking::CALORIE_WEIGHT_MULTIPLIER * weight_kg
        + height_term * walking::CALORIE_SPEED_HEIGHT_MULTIPLIER * weight_kg)
        * (duration_hours * MINUTES_PER_HOUR)
}

/// Swimming: shifted-speed expenditure scaled by weight
#[allow(clippy::suboptimal_flops)] // no mul_add: must match the firmware rounding
fn swimming_calories(mean_speed_kmh: f64, weight_kg: f64) -> f64 {
    (mean_speed_kmh + swimming::CALORIE_SPEED_SHIFT) * swimming::CALORIE_WEIGHT_MULTIPLIER
        * weight_kg
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_running_reference_package() {
        let workout = Workout::Running {
            action: 15_000,
            duration_hours: 1.0,
            weight_kg: 75.0,
        };
        // speed = 15000 * 0.65 / 1000 = 9.75 km/h
        // kcal = (18 * 9.75 - 20) * 75 / 1000 * 60 = 709.875
        assert!((spent_calories(&workout) - 709.875).abs() < EPSILON);
    }

    #[test]
    fn test_walking_height_term_floors_to_zero() {
        let workout = Workout::Walking {
            action: 9_000,
            duration_hours: 1.0,
            weight_kg: 75.0,
            height_cm: 180.0,
        };
        // speed = 5.85 km/h, speed^2 = 34.2225, 34.2225 / 180 floors to 0,
        // leaving only the weight term: 0.035 * 75 * 60 = 157.5
        assert!((spent_calories(&workout) - 157.5).abs() < EPSILON);
    }

    #[test]
    fn test_walking_height_term_floors_to_one() {
        let workout = Workout::Walking {
            action: 20_000,
            duration_hours: 1.0,
            weight_kg: 75.0,
            height_cm: 150.0,
        };
        // speed = 13.0 km/h, 169 / 150 = 1.1266.. floors to 1:
        // (0.035 * 75 + 1 * 0.029 * 75) * 60 = 288.0
        assert!((spent_calories(&workout) - 288.0).abs() < EPSILON);
    }

    #[test]
    fn test_walking_floor_is_not_rounding() {
        let workout = Workout::Walking {
            action: 20_000,
            duration_hours: 1.0,
            weight_kg: 75.0,
            height_cm: 90.0,
        };
        // 169 / 90 = 1.8777.. must floor to 1, not round to 2:
        // (0.035 * 75 + 1 * 0.029 * 75) * 60 = 288.0
        assert!((spent_calories(&workout) - 288.0).abs() < EPSILON);
    }

    #[test]
    fn test_swimming_reference_package() {
        let workout = Workout::Swimming {
            action: 720,
            duration_hours: 1.0,
            weight_kg: 80.0,
            pool_length_m: 25.0,
            pool_crossings: 40,
        };
        // speed = 25 * 40 / 1000 / 1 = 1.0 km/h
        // kcal = (1.0 + 1.1) * 2 * 80 = 336.0
        assert!((spent_calories(&workout) - 336.0).abs() < EPSILON);
    }

    #[test]
    fn test_swimming_ignores_duration_in_calories() {
        // The swimming formula has no duration term: doubling duration and
        // crossings keeps the mean speed, and thus the calories, unchanged.
        let short = Workout::Swimming {
            action: 720,
            duration_hours: 1.0,
            weight_kg: 80.0,
            pool_length_m: 25.0,
            pool_crossings: 40,
        };
        let long = Workout::Swimming {
            action: 720,
            duration_hours: 2.0,
            weight_kg: 80.0,
            pool_length_m: 25.0,
            pool_crossings: 80,
        };
        assert!((spent_calories(&short) - spent_calories(&long)).abs() < EPSILON);
    }

    #[test]
    fn test_formula_strings_cover_all_variants() {
        for workout_type in WorkoutType::ALL {
            assert!(formula(workout_type).starts_with("kcal = "));
        }
    }
}
