// ABOUTME: Criterion benchmarks for the workout calculators
// ABOUTME: Measures per-variant calorie formulas and the full decode-to-render pipeline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the workout calculators.
//!
//! Measures the per-variant calorie formulas and the full
//! decode → summarize → render pipeline over the recorded reference feed.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]
#![allow(clippy::unwrap_used)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pierre_tracker::formatters::format_summary;
use pierre_tracker::intelligence::{calories, summarize};
use pierre_tracker::sensors::decode_package;
use pierre_tracker::Workout;

/// The recorded reference feed
const SENSOR_FEED: &[(&str, &[f64])] = &[
    ("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
    ("RUN", &[15_000.0, 1.0, 75.0]),
    ("WLK", &[9_000.0, 1.0, 75.0, 180.0]),
];

fn reference_workouts() -> Vec<Workout> {
    SENSOR_FEED
        .iter()
        .map(|(code, values)| decode_package(code, values).unwrap())
        .collect()
}

fn bench_spent_calories(c: &mut Criterion) {
    let mut group = c.benchmark_group("spent_calories");
    for workout in reference_workouts() {
        let code = workout.workout_type().session_code();
        group.bench_with_input(BenchmarkId::from_parameter(code), &workout, |b, workout| {
            b.iter(|| calories::spent_calories(black_box(workout)));
        });
    }
    group.finish();
}

fn bench_pipeline(c: &mut Criterion) {
    c.bench_function("decode_summarize_render_feed", |b| {
        b.iter(|| {
            for (code, values) in SENSOR_FEED {
                let workout = decode_package(black_box(code), black_box(values)).unwrap();
                let summary = summarize(&workout);
                black_box(format_summary(&summary));
            }
        });
    });
}

criterion_group!(benches, bench_spent_calories, bench_pipeline);
criterion_main!(benches);
