// ABOUTME: Unified error handling for the tracker module
// ABOUTME: Defines standard error codes, the AppError type, and the AppResult alias
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling
//!
//! Standard error types and error codes for the tracker. Errors surface
//! immediately to the caller; nothing in this crate retries or recovers.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::models::WorkoutType;

/// Standard error codes used throughout the tracker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    /// Sensor package carries a session code outside the supported set
    #[serde(rename = "UNKNOWN_WORKOUT_TYPE")]
    UnknownWorkoutType,
    /// Sensor package value count does not match the variant's field count
    #[serde(rename = "INVALID_ARGUMENT_COUNT")]
    InvalidArgumentCount,
    /// Sensor package value violates a field invariant
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::UnknownWorkoutType => "The workout session code is not recognized",
            Self::InvalidArgumentCount => "The sensor package has the wrong number of values",
            Self::InvalidInput => "The provided input is invalid",
        }
    }
}

/// Unified error type for the tracker
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Unknown workout session code
    #[must_use]
    pub fn unknown_workout_type(code: impl Into<String>) -> Self {
        let code = code.into();
        let valid = WorkoutType::ALL.map(|t| t.session_code()).join(", ");
        Self::new(
            ErrorCode::UnknownWorkoutType,
            format!("Unknown workout type '{code}'. Valid session codes: {valid}"),
        )
    }

    /// Sensor package arity mismatch for the given workout type
    #[must_use]
    pub fn invalid_argument_count(workout_type: WorkoutType, received: usize) -> Self {
        let expected = workout_type.sensor_value_count();
        let code = workout_type.session_code();
        Self::new(
            ErrorCode::InvalidArgumentCount,
            format!("{code} package expects {expected} values, got {received}"),
        )
    }

    /// Invalid input
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_error_code_serialization() {
        let json = serde_json::to_string(&ErrorCode::UnknownWorkoutType).unwrap();
        assert_eq!(json, "\"UNKNOWN_WORKOUT_TYPE\"");

        let json = serde_json::to_string(&ErrorCode::InvalidArgumentCount).unwrap();
        assert_eq!(json, "\"INVALID_ARGUMENT_COUNT\"");
    }

    #[test]
    fn test_unknown_workout_type_lists_valid_codes() {
        let error = AppError::unknown_workout_type("XYZ");
        assert_eq!(error.code, ErrorCode::UnknownWorkoutType);
        assert!(error.message.contains("XYZ"));
        assert!(error.message.contains("RUN"));
        assert!(error.message.contains("WLK"));
        assert!(error.message.contains("SWM"));
    }

    #[test]
    fn test_display_includes_code_description() {
        let error = AppError::invalid_input("duration must be positive");
        let rendered = error.to_string();
        assert!(rendered.contains("invalid"));
        assert!(rendered.contains("duration must be positive"));
    }
}
