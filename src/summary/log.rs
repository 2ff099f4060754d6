// ABOUTME: One-line summaries of a logged set, derived from the metric catalog
// ABOUTME: Strength family renders "weight x reps, RPE"; everything else renders ordered value-unit pairs
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Logged-set summarizer.
//!
//! Resolves the exercise's ordered metric ids, then renders either the
//! strength template (`"Set 3: 80 kg x 5, RPE 8"`) or the generic
//! fallback (`"Set 2: 30 s"`). A set with nothing renderable comes out as
//! just `"Set <n>"` so the display layer always has a line to show.

use crate::catalog::MetricCatalog;
use crate::models::{FormattingStrategy, LoggedSet, MetricDefinition, MetricId, MetricRole, MetricValue};
use crate::summary::with_unit;
use tracing::debug;

/// Produce a one-line description of a logged set.
///
/// Pure function of the set and the catalog snapshot. A recorded `0` is a
/// present value; only absence means "not recorded". Metric ids the
/// catalog does not know are skipped, and a non-numeric value in a
/// strength field is treated as not present rather than an error.
#[must_use]
pub fn summarize_log(catalog: &MetricCatalog, set: &LoggedSet) -> String {
    let metric_ids = catalog.log_metric_ids(set.exercise_id);
    let parts = match catalog.formatting_strategy(set.exercise_id) {
        FormattingStrategy::Strength => strength_parts(catalog, &metric_ids, set),
        FormattingStrategy::Generic => generic_parts(catalog, &metric_ids, set),
    };

    if parts.is_empty() {
        format!("Set {}", set.set_number)
    } else {
        format!("Set {}: {}", set.set_number, parts.join(", "))
    }
}

/// Strength template: a load group (`"80 kg"` / `"x 5"`, space-joined)
/// and an independent effort group (`"RPE 8"`), comma-joined.
fn strength_parts(
    catalog: &MetricCatalog,
    metric_ids: &[MetricId],
    set: &LoggedSet,
) -> Vec<String> {
    let mut load_group = Vec::new();

    if let Some(definition) = first_with_role(catalog, metric_ids, MetricRole::PrimaryLoad) {
        if let Some(weight) = recorded_number(set, definition) {
            load_group.push(with_unit(&format!("{weight}"), &definition.unit));
        }
    }
    if let Some(definition) = first_with_role(catalog, metric_ids, MetricRole::Repetitions) {
        if let Some(reps) = recorded_number(set, definition) {
            load_group.push(format!("x {reps}"));
        }
    }

    let mut parts = Vec::new();
    if !load_group.is_empty() {
        parts.push(load_group.join(" "));
    }
    if let Some(definition) = first_with_role(catalog, metric_ids, MetricRole::Effort) {
        if let Some(rpe) = recorded_number(set, definition) {
            parts.push(format!("RPE {rpe}"));
        }
    }
    parts
}

/// Generic fallback: every recorded metric in resolved order as
/// `"<value> <unit>"`.
fn generic_parts(
    catalog: &MetricCatalog,
    metric_ids: &[MetricId],
    set: &LoggedSet,
) -> Vec<String> {
    metric_ids
        .iter()
        .filter_map(|id| {
            let Some(definition) = catalog.metric(*id) else {
                debug!(metric = %id, "skipping metric id absent from catalog");
                return None;
            };
            let value = set.metrics.get(id)?;
            Some(with_unit(&value.to_string(), &definition.unit))
        })
        .collect()
}

/// First resolved metric carrying `role`, in resolved order.
fn first_with_role<'a>(
    catalog: &'a MetricCatalog,
    metric_ids: &[MetricId],
    role: MetricRole,
) -> Option<&'a MetricDefinition> {
    metric_ids
        .iter()
        .find_map(|id| catalog.metric(*id).filter(|definition| definition.has_role(role)))
}

/// Numeric reading of the value recorded against `definition`, if any.
fn recorded_number(set: &LoggedSet, definition: &MetricDefinition) -> Option<f64> {
    set.metrics
        .get(&definition.id)
        .and_then(MetricValue::as_number)
}
