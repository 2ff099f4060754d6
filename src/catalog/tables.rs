// ABOUTME: Wire-shaped serde records for the two remote catalog tables
// ABOUTME: Matches the camelCase JSON the catalog-loading collaborator hands over
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Wire records for catalog loading.
//!
//! These structs mirror the JSON tables produced by the external data
//! layer: metric definitions, exercise-type bindings with explicit row
//! ordering, and the exercise-to-type lookup. They exist only at the
//! loading boundary; everything downstream works with
//! [`crate::models::MetricDefinition`] and the built snapshot.

use crate::models::{
    ExerciseId, ExerciseTypeId, FormattingStrategy, InputKind, MetricDefinition, MetricId,
    MetricRole,
};
use serde::{Deserialize, Serialize};

/// One metric definition row from the remote catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricDefinitionRecord {
    /// Catalog-assigned id
    pub id: MetricId,
    /// Display name, unique within the catalog
    pub name: String,
    /// Display suffix; absent means no unit
    #[serde(default)]
    pub unit: String,
    /// Declared entry kind
    #[serde(default)]
    pub input_type: InputKind,
    /// Whether the metric may appear in a prescription
    #[serde(default)]
    pub use_in_planning: bool,
    /// Whether only a minimum target is meaningful
    #[serde(default)]
    pub min_only: bool,
    /// Explicit semantic role; legacy catalogs omit this
    #[serde(default)]
    pub role: Option<MetricRole>,
}

impl From<MetricDefinitionRecord> for MetricDefinition {
    fn from(record: MetricDefinitionRecord) -> Self {
        // Legacy catalogs carry no role field; fall back to the canonical
        // display names once, here, so formatting never matches on strings
        let role = record
            .role
            .or_else(|| MetricRole::infer_from_name(&record.name));
        Self {
            id: record.id,
            name: record.name,
            unit: record.unit,
            input_kind: record.input_type,
            use_in_planning: record.use_in_planning,
            min_only: record.min_only,
            role,
        }
    }
}

/// One `{order, metricId}` row of an exercise-type binding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderedMetricRecord {
    /// Display and input position; rows are sorted by this at load
    pub order: u32,
    /// Metric the row points at
    pub metric_id: MetricId,
}

/// Binding of an exercise type to its ordered metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseTypeBindingRecord {
    /// Exercise type being bound
    pub exercise_type_id: ExerciseTypeId,
    /// Summary strategy for the family; absent or unrecognized -> generic
    #[serde(default)]
    pub formatting_strategy: FormattingStrategy,
    /// Ordered metric rows
    #[serde(default)]
    pub ordered_metrics: Vec<OrderedMetricRecord>,
}

/// Lookup row mapping a concrete exercise to its type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseAssignmentRecord {
    /// Concrete exercise
    pub exercise_id: ExerciseId,
    /// Its exercise type
    pub exercise_type_id: ExerciseTypeId,
}

/// The full catalog snapshot document as fetched by the data layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CatalogTables {
    /// Metric definition table
    #[serde(default)]
    pub metrics: Vec<MetricDefinitionRecord>,
    /// Exercise-type binding table
    #[serde(default)]
    pub bindings: Vec<ExerciseTypeBindingRecord>,
    /// Exercise-to-type lookup table
    #[serde(default)]
    pub exercises: Vec<ExerciseAssignmentRecord>,
}
