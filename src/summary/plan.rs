// ABOUTME: One-line summaries of a planned exercise prescription
// ABOUTME: Per-role phrasing templates with single-value vs. range semantics
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Planned-exercise summarizer.
//!
//! Walks the exercise's planning metric ids in order and phrases each
//! prescribed target: `"4 sets, 8-12 reps, RPE 7, Rest 60-90s"`. The
//! phrasing table is deliberately asymmetric - effort (RPE) only ever
//! surfaces its minimum, and rest time concatenates its unit without a
//! space - because that is what the product renders.

use crate::catalog::MetricCatalog;
use crate::models::{MetricDefinition, MetricRole, PlannedExercise};
use crate::summary::with_unit;

/// Produce a one-line description of a planned exercise entry.
///
/// Targets without a minimum are skipped, as are metric ids the catalog
/// does not know. A target whose maximum equals its minimum (or whose
/// definition is `min_only`) phrases as a fixed value; a differing
/// maximum phrases as a range. Inverted ranges (`max < min`) pass through
/// unchanged - rejecting or clamping them belongs to the caller.
#[must_use]
pub fn summarize_plan(catalog: &MetricCatalog, exercise: &PlannedExercise) -> String {
    let mut parts = Vec::new();

    if let Some(sets) = exercise.target_sets.filter(|count| *count > 0) {
        parts.push(format!("{sets} sets"));
    }

    for id in catalog.planning_metric_ids(exercise.exercise_id) {
        let Some(definition) = catalog.metric(id) else {
            continue;
        };
        let Some(target) = exercise
            .target_metrics
            .iter()
            .find(|target| target.metric_id == id)
        else {
            continue;
        };
        let Some(min) = target.min else {
            continue;
        };

        // Exact comparison is intentional: a maximum equal to the entered
        // minimum means "fixed target", not a range
        let range_max = if definition.min_only {
            None
        } else {
            target.max.filter(|max| *max != min)
        };

        parts.push(phrase(definition, min, range_max));
    }

    parts.join(", ")
}

/// Per-role phrasing table.
fn phrase(definition: &MetricDefinition, min: f64, range_max: Option<f64>) -> String {
    match definition.role {
        Some(MetricRole::Repetitions) => range_max.map_or_else(
            || format!("{min} reps"),
            |max| format!("{min}-{max} reps"),
        ),
        // Effort is never phrased as a range; only the minimum is surfaced
        Some(MetricRole::Effort) => format!("RPE {min}"),
        Some(MetricRole::Recovery) => range_max.map_or_else(
            || format!("Rest {min}{}", definition.unit),
            |max| format!("Rest {min}-{max}{}", definition.unit),
        ),
        Some(MetricRole::PrimaryLoad) | None => range_max.map_or_else(
            || with_unit(&format!("{min}"), &definition.unit),
            |max| with_unit(&format!("{min}-{max}"), &definition.unit),
        ),
    }
}
