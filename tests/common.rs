// ABOUTME: Shared test fixtures for the workout-metrics integration suites
// ABOUTME: Provides the reference catalog snapshot and payload builders
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
//! Shared test utilities for `workout_metrics`
//!
//! Provides one reference catalog (a strength family and a generic family,
//! including deliberately odd rows: an unbound definition, an unknown
//! input kind, and a binding row pointing at a missing metric) plus small
//! payload builders, to reduce duplication across suites.

use std::sync::Once;
use workout_metrics::{
    ExerciseId, LoggedSet, MetricCatalog, MetricId, MetricValue, TargetMetric,
};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG environment variable controls test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };
        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

pub const WEIGHT: MetricId = MetricId(1);
pub const REPS: MetricId = MetricId(2);
pub const RPE: MetricId = MetricId(3);
pub const REST_TIME: MetricId = MetricId(4);
pub const HOLD_TIME: MetricId = MetricId(5);
pub const NOTES: MetricId = MetricId(6);
pub const MOOD: MetricId = MetricId(7);
pub const BAND_TENSION: MetricId = MetricId(8);
/// Referenced by the plank binding but absent from the definition table
pub const RETIRED: MetricId = MetricId(99);

pub const BENCH_PRESS: ExerciseId = ExerciseId(100);
pub const PLANK: ExerciseId = ExerciseId(200);
pub const UNKNOWN_EXERCISE: ExerciseId = ExerciseId(999);

/// Catalog snapshot document as the data layer would hand it over
pub const FIXTURE_JSON: &str = r#"{
  "metrics": [
    { "id": 1, "name": "Weight", "unit": "kg", "inputType": "number", "useInPlanning": true },
    { "id": 2, "name": "Reps", "inputType": "number", "useInPlanning": true },
    { "id": 3, "name": "RPE", "inputType": "number", "useInPlanning": true, "minOnly": true },
    { "id": 4, "name": "Rest time", "unit": "s", "inputType": "time", "useInPlanning": true },
    { "id": 5, "name": "Hold time", "unit": "s", "inputType": "time", "useInPlanning": true },
    { "id": 6, "name": "Notes", "inputType": "text" },
    { "id": 7, "name": "Mood", "inputType": "slider" },
    { "id": 8, "name": "Band tension", "unit": "kg", "inputType": "number", "useInPlanning": true, "role": "primaryLoad" }
  ],
  "bindings": [
    {
      "exerciseTypeId": 10,
      "formattingStrategy": "strength",
      "orderedMetrics": [
        { "order": 0, "metricId": 1 },
        { "order": 1, "metricId": 2 },
        { "order": 2, "metricId": 3 },
        { "order": 3, "metricId": 4 },
        { "order": 4, "metricId": 6 }
      ]
    },
    {
      "exerciseTypeId": 20,
      "orderedMetrics": [
        { "order": 0, "metricId": 5 },
        { "order": 1, "metricId": 99 },
        { "order": 2, "metricId": 7 },
        { "order": 3, "metricId": 6 }
      ]
    }
  ],
  "exercises": [
    { "exerciseId": 100, "exerciseTypeId": 10 },
    { "exerciseId": 200, "exerciseTypeId": 20 }
  ]
}"#;

/// Build the reference catalog snapshot.
pub fn fixture_catalog() -> MetricCatalog {
    init_test_logging();
    MetricCatalog::from_json(FIXTURE_JSON).expect("fixture catalog must build")
}

/// Build a logged set from sparse `(metric, value)` pairs.
pub fn logged_set(
    set_number: u32,
    exercise_id: ExerciseId,
    values: &[(MetricId, MetricValue)],
) -> LoggedSet {
    LoggedSet {
        set_number,
        exercise_id,
        metrics: values.iter().cloned().collect(),
    }
}

/// Build a planned target entry.
pub const fn target(metric_id: MetricId, min: Option<f64>, max: Option<f64>) -> TargetMetric {
    TargetMetric { metric_id, min, max }
}
