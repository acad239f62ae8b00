// ABOUTME: Workout type enumeration for tracker sessions
// ABOUTME: Defines the supported session types with parsing and display implementations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::distance::{STEP_LENGTH_M, STROKE_LENGTH_M};
use crate::errors::{AppError, AppResult};

/// Enumeration of supported workout session types
///
/// The set is closed: the tracker hardware emits exactly these three session
/// codes, so dispatch is a plain `match` rather than a trait object.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutType {
    /// Running session
    Running,
    /// Sports walking session
    Walking,
    /// Pool swimming session
    Swimming,
}

impl WorkoutType {
    /// Every supported workout type, in session-code declaration order
    pub const ALL: [Self; 3] = [Self::Running, Self::Walking, Self::Swimming];

    /// Create `WorkoutType` from the session code emitted by the sensor unit
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::UnknownWorkoutType` when the code is not one of
    /// the three recognized session codes.
    pub fn from_session_code(code: &str) -> AppResult<Self> {
        match code {
            "RUN" => Ok(Self::Running),
            "WLK" => Ok(Self::Walking),
            "SWM" => Ok(Self::Swimming),
            other => Err(AppError::unknown_workout_type(other)),
        }
    }

    /// Get the session code for this workout type
    #[must_use]
    pub const fn session_code(&self) -> &'static str {
        match self {
            Self::Running => "RUN",
            Self::Walking => "WLK",
            Self::Swimming => "SWM",
        }
    }

    /// Get the human-readable name for this workout type
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Running => "Running",
            Self::Walking => "Walking",
            Self::Swimming => "Swimming",
        }
    }

    /// Number of numeric values a sensor package of this type carries
    ///
    /// Values are bound positionally: action, duration, weight, then the
    /// variant-specific fields (height for walking; pool length and pool
    /// crossings for swimming).
    #[must_use]
    pub const fn sensor_value_count(&self) -> usize {
        match self {
            Self::Running => 3,
            Self::Walking => 4,
            Self::Swimming => 5,
        }
    }

    /// Per-action distance unit in meters (step length, or stroke length for
    /// swimming)
    #[must_use]
    pub const fn stride_length_m(&self) -> f64 {
        match self {
            Self::Running | Self::Walking => STEP_LENGTH_M,
            Self::Swimming => STROKE_LENGTH_M,
        }
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for WorkoutType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_session_code(s)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn test_session_code_round_trip() {
        for workout_type in WorkoutType::ALL {
            let parsed = WorkoutType::from_session_code(workout_type.session_code()).unwrap();
            assert_eq!(parsed, workout_type);
        }
    }

    #[test]
    fn test_unknown_session_code_is_rejected() {
        let error = WorkoutType::from_session_code("XYZ").unwrap_err();
        assert_eq!(error.code, ErrorCode::UnknownWorkoutType);
    }

    #[test]
    fn test_session_codes_are_case_sensitive() {
        // The sensor unit emits upper-case codes only.
        assert!(WorkoutType::from_session_code("run").is_err());
        assert!(WorkoutType::from_session_code("Swm").is_err());
    }

    #[test]
    fn test_sensor_value_counts() {
        assert_eq!(WorkoutType::Running.sensor_value_count(), 3);
        assert_eq!(WorkoutType::Walking.sensor_value_count(), 4);
        assert_eq!(WorkoutType::Swimming.sensor_value_count(), 5);
    }

    #[test]
    fn test_display_uses_display_name() {
        assert_eq!(WorkoutType::Walking.to_string(), "Walking");
        assert_eq!("SWM".parse::<WorkoutType>().unwrap(), WorkoutType::Swimming);
    }
}
