// ABOUTME: Workout intelligence - calorie formulas and summary computation
// ABOUTME: Pure, synchronous calculations dispatched over the closed workout variant set
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Workout intelligence
//!
//! Pure calculations over decoded workouts: the per-variant calorie formulas
//! and the summary record assembly. Everything here is deterministic and
//! stateless; computing the same workout twice yields the identical summary.

/// Per-variant calorie expenditure formulas
pub mod calories;

use crate::models::{Workout, WorkoutSummary};

/// Compute the derived metrics for a decoded workout
///
/// Produces the terminal [`WorkoutSummary`] record: duration is carried over
/// from the raw inputs, distance and mean speed come from the workout
/// accessors, and calories from the variant's formula.
#[must_use]
pub fn summarize(workout: &Workout) -> WorkoutSummary {
    WorkoutSummary {
        workout_type: workout.workout_type(),
        duration_hours: workout.duration_hours(),
        distance_km: workout.distance_km(),
        mean_speed_kmh: workout.mean_speed_kmh(),
        calories_kcal: calories::spent_calories(workout),
    }
}
