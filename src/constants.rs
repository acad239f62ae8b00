// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Formula coefficients and unit conversions for the tracker calculators
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Formula coefficients and unit conversions grouped by domain. The calorie
//! coefficients come from the tracker firmware and are pinned by tests;
//! change them only together with the firmware side.

/// Distance and stride constants
pub mod distance {
    /// Step length for running and walking sessions (meters)
    pub const STEP_LENGTH_M: f64 = 0.65;
    /// Stroke length for swimming sessions (meters)
    pub const STROKE_LENGTH_M: f64 = 1.38;
    /// Meters per kilometer
    pub const METERS_PER_KM: f64 = 1000.0;
}

/// Time conversions
pub mod time {
    /// Minutes per hour
    pub const MINUTES_PER_HOUR: f64 = 60.0;
}

/// Running calorie formula coefficients
pub mod running {
    /// Multiplier applied to mean speed (km/h)
    pub const CALORIE_SPEED_MULTIPLIER: f64 = 18.0;
    /// Offset subtracted from the speed term
    pub const CALORIE_SPEED_OFFSET: f64 = 20.0;
}

/// Walking calorie formula coefficients
pub mod walking {
    /// Multiplier applied to body weight (kg)
    pub const CALORIE_WEIGHT_MULTIPLIER: f64 = 0.035;
    /// Multiplier applied to the speed/height term
    pub const CALORIE_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
}

/// Swimming calorie formula coefficients
pub mod swimming {
    /// Shift added to mean speed (km/h)
    pub const CALORIE_SPEED_SHIFT: f64 = 1.1;
    /// Multiplier applied to body weight (kg)
    pub const CALORIE_WEIGHT_MULTIPLIER: f64 = 2.0;
}
