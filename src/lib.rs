// ABOUTME: Library interface for the Pierre fitness tracker module
// ABOUTME: Decodes raw sensor packages into workouts and computes summary metrics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Tracker
//!
//! Fitness tracker module for the Pierre platform. Takes raw sensor packages
//! (a workout session code plus an ordered list of numeric readings) for
//! running, walking, or swimming sessions, computes distance, mean speed, and
//! calories burned, and renders one fixed-format summary line per workout.
//!
//! Processing is fully synchronous and stateless: each package is decoded,
//! summarized, and rendered independently, with no shared mutable state.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Formula coefficients and unit conversions organized by domain
//! - **models**: Core data models (`WorkoutType`, `Workout`, `WorkoutSummary`)
//! - **intelligence**: Calorie formulas and workout summary computation
//! - **sensors**: Sensor package decoding and workout-type dispatch
//! - **formatters**: Fixed-precision summary line rendering
//! - **logging**: Structured logging configuration

/// Unified error handling with standard error codes
pub mod errors;

/// Formula coefficients and unit conversions organized by domain
pub mod constants;

/// Core data models (`WorkoutType`, `Workout`, `WorkoutSummary`)
pub mod models;

/// Calorie formulas and workout summary computation
pub mod intelligence;

/// Sensor package decoding and workout-type dispatch
pub mod sensors;

/// Fixed-precision summary line rendering
pub mod formatters;

/// Structured logging configuration
pub mod logging;

pub use errors::{AppError, AppResult, ErrorCode};
pub use models::{Workout, WorkoutSummary, WorkoutType};
pub use sensors::SensorPackage;
