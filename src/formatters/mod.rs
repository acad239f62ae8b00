// ABOUTME: Summary line rendering with fixed labels and fixed 3-decimal precision
// ABOUTME: Output is locale-invariant and used verbatim for snapshot testing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Summary line rendering
//!
//! One line per workout, five fields, fixed labels and separators, three
//! decimal digits for every real-valued field. Rust's `{:.3}` always renders
//! a `.` decimal separator regardless of locale, so the output is stable
//! enough for verbatim snapshot comparison.

use crate::models::WorkoutSummary;

/// Render the fixed-format summary line for a workout
#[must_use]
pub fn format_summary(summary: &WorkoutSummary) -> String {
    let workout_type = summary.workout_type.display_name();
    let WorkoutSummary {
        duration_hours,
        distance_km,
        mean_speed_kmh,
        calories_kcal,
        ..
    } = summary;
    format!(
        "Training type: {workout_type}; \
         Duration: {duration_hours:.3} h; \
         Distance: {distance_km:.3} km; \
         Mean speed: {mean_speed_kmh:.3} km/h; \
         Calories burned: {calories_kcal:.3}."
    )
}
