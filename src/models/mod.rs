// ABOUTME: Core data models for the tracker module
// ABOUTME: Workout type enumeration, workout variants, and the summary record
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Core data models
//!
//! - [`WorkoutType`]: the closed set of supported session types
//! - [`Workout`]: raw sensor inputs for one session, tagged by variant
//! - [`WorkoutSummary`]: derived metrics, immutable once computed

/// Workout type enumeration with session-code parsing
pub mod sport;

/// Workout variants and the derived summary record
pub mod workout;

pub use sport::WorkoutType;
pub use workout::{Workout, WorkoutSummary};
