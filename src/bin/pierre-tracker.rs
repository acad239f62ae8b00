// ABOUTME: Tracker entry point - processes the recorded sensor feed
// ABOUTME: Prints one fixed-format summary line per sensor package to stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Pierre tracker entry point.
//!
//! Decodes the recorded sensor feed (a stand-in for the live sensor unit),
//! computes each workout's summary, and prints one line per workout.
//!
//! Usage:
//! ```bash
//! cargo run --bin pierre-tracker
//!
//! # Structured diagnostics on stderr
//! RUST_LOG=debug cargo run --bin pierre-tracker
//! ```

use anyhow::Result;
use pierre_tracker::formatters::format_summary;
use pierre_tracker::intelligence::summarize;
use pierre_tracker::logging::{self, LoggingConfig};
use pierre_tracker::sensors::decode_package;
use tracing::info;

/// Recorded sensor feed: (session code, ordered readings)
const SENSOR_FEED: &[(&str, &[f64])] = &[
    ("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
    ("RUN", &[15_000.0, 1.0, 75.0]),
    ("WLK", &[9_000.0, 1.0, 75.0, 180.0]),
];

fn main() -> Result<()> {
    logging::init(&LoggingConfig::from_env())?;
    info!(packages = SENSOR_FEED.len(), "processing sensor feed");

    for (code, values) in SENSOR_FEED {
        let workout = decode_package(code, values)?;
        let summary = summarize(&workout);
        println!("{}", format_summary(&summary));
    }

    Ok(())
}
