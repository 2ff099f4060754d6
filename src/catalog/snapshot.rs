// ABOUTME: Immutable metric catalog snapshot and the metric resolver
// ABOUTME: Built once per session from remote tables; all derivations read it by reference
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! The catalog snapshot.
//!
//! [`MetricCatalog`] owns the session's metric definitions, exercise-type
//! bindings, and exercise lookup as one explicitly-refreshed snapshot
//! object. Construction is the crate's only fallible boundary (duplicate
//! ids or names are rejected); every lookup afterwards is total -
//! unknown ids yield empty sequences or `None`, never errors, because
//! catalogs evolve independently of historical and planned data.

use crate::catalog::tables::CatalogTables;
use crate::errors::CatalogError;
use crate::models::{
    ExerciseId, ExerciseTypeId, FormattingStrategy, MetricDefinition, MetricId,
};
use chrono::{DateTime, Utc};
use std::collections::{HashMap, HashSet};
use tracing::{debug, info};

/// Metrics bound to one exercise type, in display order
#[derive(Debug, Clone)]
struct BoundMetrics {
    strategy: FormattingStrategy,
    ordered: Vec<MetricId>,
}

/// Immutable-per-session catalog snapshot
///
/// Holds the metric definition table, the exercise-type bindings, and the
/// exercise-to-type lookup. The snapshot is internally consistent for its
/// lifetime; after a remote refresh, callers build a fresh snapshot and
/// re-derive any metric id lists instead of mixing results across two
/// snapshots.
#[derive(Debug, Clone)]
pub struct MetricCatalog {
    metrics: HashMap<MetricId, MetricDefinition>,
    bindings: HashMap<ExerciseTypeId, BoundMetrics>,
    exercise_types: HashMap<ExerciseId, ExerciseTypeId>,
    loaded_at: DateTime<Utc>,
}

impl MetricCatalog {
    /// Build a snapshot from the remote tables.
    ///
    /// Binding rows are sorted by their `order` field; explicit metric
    /// roles are kept and missing ones inferred from the canonical display
    /// names. Rows pointing at metric ids the definition table does not
    /// contain are kept verbatim - downstream consumers skip them.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] when two definitions share an id or a
    /// display name, or when two bindings target the same exercise type.
    pub fn from_tables(tables: CatalogTables) -> Result<Self, CatalogError> {
        let mut metrics = HashMap::with_capacity(tables.metrics.len());
        let mut seen_names = HashSet::with_capacity(tables.metrics.len());
        for record in tables.metrics {
            if metrics.contains_key(&record.id) {
                return Err(CatalogError::DuplicateMetricId(record.id));
            }
            if !seen_names.insert(record.name.clone()) {
                return Err(CatalogError::DuplicateMetricName(record.name));
            }
            let definition = MetricDefinition::from(record);
            metrics.insert(definition.id, definition);
        }

        let mut bindings = HashMap::with_capacity(tables.bindings.len());
        for record in tables.bindings {
            let mut rows = record.ordered_metrics;
            rows.sort_by_key(|row| row.order);
            for row in &rows {
                if !metrics.contains_key(&row.metric_id) {
                    debug!(
                        exercise_type = %record.exercise_type_id,
                        metric = %row.metric_id,
                        "binding references a metric absent from the catalog"
                    );
                }
            }
            let bound = BoundMetrics {
                strategy: record.formatting_strategy,
                ordered: rows.into_iter().map(|row| row.metric_id).collect(),
            };
            if bindings.insert(record.exercise_type_id, bound).is_some() {
                return Err(CatalogError::DuplicateBinding(record.exercise_type_id));
            }
        }

        let mut exercise_types = HashMap::with_capacity(tables.exercises.len());
        for record in tables.exercises {
            if !bindings.contains_key(&record.exercise_type_id) {
                debug!(
                    exercise = %record.exercise_id,
                    exercise_type = %record.exercise_type_id,
                    "exercise assigned to an unbound exercise type"
                );
            }
            exercise_types.insert(record.exercise_id, record.exercise_type_id);
        }

        info!(
            metrics = metrics.len(),
            bindings = bindings.len(),
            exercises = exercise_types.len(),
            "metric catalog snapshot built"
        );

        Ok(Self {
            metrics,
            bindings,
            exercise_types,
            loaded_at: Utc::now(),
        })
    }

    /// Build a snapshot from the JSON document produced by the data layer.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Malformed`] for invalid JSON, plus every
    /// error [`Self::from_tables`] can raise.
    pub fn from_json(document: &str) -> Result<Self, CatalogError> {
        let tables: CatalogTables = serde_json::from_str(document)?;
        Self::from_tables(tables)
    }

    /// Look up a metric definition by id.
    #[must_use]
    pub fn metric(&self, id: MetricId) -> Option<&MetricDefinition> {
        self.metrics.get(&id)
    }

    /// Ordered metric ids applicable to logging a set of `exercise`.
    ///
    /// Unknown exercises (or exercises of an unbound type) yield an empty
    /// vec, not an error.
    #[must_use]
    pub fn log_metric_ids(&self, exercise: ExerciseId) -> Vec<MetricId> {
        self.bound_metrics(exercise)
            .map(|bound| bound.ordered.clone())
            .unwrap_or_default()
    }

    /// Ordered metric ids applicable to planning `exercise`.
    ///
    /// The `use_in_planning` subsequence of [`Self::log_metric_ids`], order
    /// preserved. Ids without a catalog definition are dropped here: a
    /// metric the catalog no longer knows cannot be prescribed.
    #[must_use]
    pub fn planning_metric_ids(&self, exercise: ExerciseId) -> Vec<MetricId> {
        self.log_metric_ids(exercise)
            .into_iter()
            .filter(|id| {
                self.metrics
                    .get(id)
                    .is_some_and(|definition| definition.use_in_planning)
            })
            .collect()
    }

    /// Summary strategy of the exercise's family; `Generic` when unknown.
    #[must_use]
    pub fn formatting_strategy(&self, exercise: ExerciseId) -> FormattingStrategy {
        self.bound_metrics(exercise)
            .map_or(FormattingStrategy::Generic, |bound| bound.strategy)
    }

    /// Number of metric definitions in this snapshot.
    #[must_use]
    pub fn metric_count(&self) -> usize {
        self.metrics.len()
    }

    /// When this snapshot was assembled.
    #[must_use]
    pub const fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    fn bound_metrics(&self, exercise: ExerciseId) -> Option<&BoundMetrics> {
        let type_id = self.exercise_types.get(&exercise)?;
        let bound = self.bindings.get(type_id);
        if bound.is_none() {
            debug!(%exercise, exercise_type = %type_id, "no binding for exercise type");
        }
        bound
    }
}
