// ABOUTME: Workout variants holding raw sensor inputs, with derived distance and speed
// ABOUTME: Includes the immutable WorkoutSummary record produced once per workout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use super::WorkoutType;
use crate::constants::distance::METERS_PER_KM;

/// Raw sensor inputs for one workout session, tagged by variant
///
/// A closed tagged variant set: the shared fields (action count, duration,
/// weight) appear in every variant, and the variant-specific fields only
/// where the formulas need them. No trait dispatch; the set is small and
/// fixed. Field invariants (positive duration, weight, height, pool length;
/// integral action and pool crossings) are enforced at decode time in
/// [`crate::sensors`]; the derived accessors here trust them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Workout {
    /// Running session
    Running {
        /// Step count reported by the motion sensor
        action: u32,
        /// Session duration in hours
        duration_hours: f64,
        /// Athlete body weight in kg
        weight_kg: f64,
    },
    /// Sports walking session
    Walking {
        /// Step count reported by the motion sensor
        action: u32,
        /// Session duration in hours
        duration_hours: f64,
        /// Athlete body weight in kg
        weight_kg: f64,
        /// Athlete height in cm
        height_cm: f64,
    },
    /// Pool swimming session
    Swimming {
        /// Stroke count reported by the motion sensor
        action: u32,
        /// Session duration in hours
        duration_hours: f64,
        /// Athlete body weight in kg
        weight_kg: f64,
        /// Pool length in meters
        pool_length_m: f64,
        /// Number of pool crossings during the session
        pool_crossings: u32,
    },
}

impl Workout {
    /// The workout type tag for this session
    #[must_use]
    pub const fn workout_type(&self) -> WorkoutType {
        match self {
            Self::Running { .. } => WorkoutType::Running,
            Self::Walking { .. } => WorkoutType::Walking,
            Self::Swimming { .. } => WorkoutType::Swimming,
        }
    }

    /// Step or stroke count reported by the motion sensor
    #[must_use]
    pub const fn action(&self) -> u32 {
        match self {
            Self::Running { action, .. }
            | Self::Walking { action, .. }
            | Self::Swimming { action, .. } => *action,
        }
    }

    /// Session duration in hours
    #[must_use]
    pub const fn duration_hours(&self) -> f64 {
        match self {
            Self::Running { duration_hours, .. }
            | Self::Walking { duration_hours, .. }
            | Self::Swimming { duration_hours, .. } => *duration_hours,
        }
    }

    /// Athlete body weight in kg
    #[must_use]
    pub const fn weight_kg(&self) -> f64 {
        match self {
            Self::Running { weight_kg, .. }
            | Self::Walking { weight_kg, .. }
            | Self::Swimming { weight_kg, .. } => *weight_kg,
        }
    }

    /// Distance covered during the session, in km
    ///
    /// Always the base formula: action count times the per-action stride (or
    /// stroke) length. Swimming overrides the mean speed below, but not the
    /// distance.
    #[must_use]
    pub fn distance_km(&self) -> f64 {
        f64::from(self.action()) * self.workout_type().stride_length_m() / METERS_PER_KM
    }

    /// Mean speed over the session, in km/h
    ///
    /// Running and walking derive it from the step-count distance. Swimming
    /// uses the pool geometry instead: length times crossings over duration.
    #[must_use]
    pub fn mean_speed_kmh(&self) -> f64 {
        match self {
            Self::Running { .. } | Self::Walking { .. } => {
                self.distance_km() / self.duration_hours()
            }
            Self::Swimming {
                duration_hours,
                pool_length_m,
                pool_crossings,
                ..
            } => *pool_length_m * f64::from(*pool_crossings) / METERS_PER_KM / *duration_hours,
        }
    }
}

/// Derived metrics for one workout session, immutable once computed
///
/// Produced exactly once per decoded workout by
/// [`crate::intelligence::summarize`], rendered to a summary line, and
/// discarded.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct WorkoutSummary {
    /// Workout type tag
    pub workout_type: WorkoutType,
    /// Session duration in hours
    pub duration_hours: f64,
    /// Distance covered in km
    pub distance_km: f64,
    /// Mean speed in km/h
    pub mean_speed_kmh: f64,
    /// Calories burned in kcal
    pub calories_kcal: f64,
}
