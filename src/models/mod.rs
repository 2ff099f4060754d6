// ABOUTME: Core data models for the dynamic metric system
// ABOUTME: Re-exports metric definitions, value types, and exercise payloads
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Core data models shared across the catalog, summary, and validation
//! modules.

/// Metric identity, definition, role, and value types
pub mod metric;

/// Exercise identity, formatting strategy, and logging/planning payloads
pub mod exercise;

pub use exercise::{
    ExerciseId, ExerciseTypeId, FormattingStrategy, LoggedSet, PlannedExercise, TargetMetric,
};
pub use metric::{InputKind, MetricDefinition, MetricId, MetricRole, MetricValue};
