// ABOUTME: Sensor package decoding - dispatches a session code to a workout variant
// ABOUTME: Validates tag, value count, and field invariants before construction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Sensor package decoding
//!
//! A sensor package is a session code plus an ordered list of numeric
//! readings. Decoding looks the code up in the closed workout-type set,
//! checks the value count against the variant's field count, validates the
//! field invariants, and binds the values positionally. There is no partial
//! construction: any failure rejects the whole package.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{AppError, AppResult};
use crate::models::{Workout, WorkoutType};

/// One record from the sensor feed
///
/// Serde-deserializable so recorded feeds can be replayed from JSON.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SensorPackage {
    /// Session code emitted by the sensor unit (`RUN`, `WLK`, `SWM`)
    pub workout_type: String,
    /// Ordered numeric readings; meaning and count depend on the session code
    pub values: Vec<f64>,
}

impl SensorPackage {
    /// Decode this package into a workout
    ///
    /// # Errors
    ///
    /// See [`decode_package`].
    pub fn decode(&self) -> AppResult<Workout> {
        decode_package(&self.workout_type, &self.values)
    }
}

/// Decode a sensor package into a workout
///
/// Values are bound positionally in declared order: action, duration, weight,
/// then height (walking) or pool length and pool crossings (swimming).
///
/// # Errors
///
/// - `ErrorCode::UnknownWorkoutType` when the session code is not recognized
/// - `ErrorCode::InvalidArgumentCount` when the value count does not match
///   the variant's field count
/// - `ErrorCode::InvalidInput` when a value violates a field invariant
///   (non-positive duration, weight, height, or pool length; fractional or
///   out-of-range action or pool crossings)
pub fn decode_package(code: &str, values: &[f64]) -> AppResult<Workout> {
    let workout_type = WorkoutType::from_session_code(code)?;
    if values.len() != workout_type.sensor_value_count() {
        return Err(AppError::invalid_argument_count(workout_type, values.len()));
    }

    let action = count_field("action", values[0])?;
    let duration_hours = positive_field("duration", values[1])?;
    let weight_kg = positive_field("weight", values[2])?;

    let workout = match workout_type {
        WorkoutType::Running => Workout::Running {
            action,
            duration_hours,
            weight_kg,
        },
        WorkoutType::Walking => Workout::Walking {
            action,
            duration_hours,
            weight_kg,
            height_cm: positive_field("height", values[3])?,
        },
        WorkoutType::Swimming => Workout::Swimming {
            action,
            duration_hours,
            weight_kg,
            pool_length_m: positive_field("pool length", values[3])?,
            pool_crossings: positive_count_field("pool crossings", values[4])?,
        },
    };

    debug!(
        code = workout_type.session_code(),
        action = workout.action(),
        "decoded sensor package"
    );
    Ok(workout)
}

/// A strictly positive real-valued field
fn positive_field(field: &str, value: f64) -> AppResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(AppError::invalid_input(format!(
            "{field} must be positive, got {value}"
        )))
    }
}

/// A whole-number count field (sensor feeds carry counts as floats)
fn count_field(field: &str, value: f64) -> AppResult<u32> {
    if value.is_finite() && value >= 0.0 && value <= f64::from(u32::MAX) && value.fract() == 0.0 {
        Ok(value as u32)
    } else {
        Err(AppError::invalid_input(format!(
            "{field} must be a whole non-negative count, got {value}"
        )))
    }
}

/// A strictly positive whole-number count field
fn positive_count_field(field: &str, value: f64) -> AppResult<u32> {
    let count = count_field(field, value)?;
    if count == 0 {
        return Err(AppError::invalid_input(format!(
            "{field} must be positive, got 0"
        )));
    }
    Ok(count)
}
