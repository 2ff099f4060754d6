// ABOUTME: Crate root for the workout-metrics foundation crate
// ABOUTME: Wires together catalog, summary, and validation modules
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![deny(unsafe_code)]

//! # Workout Metrics
//!
//! Foundation crate implementing the dynamic metric model of a
//! fitness-tracking application. An exercise declares an ordered set of
//! typed measurements (weight, reps, RPE, rest time, hold duration, ...)
//! as catalog data, and this crate derives from that declaration alone:
//!
//! - one-line summaries of a logged set ([`summarize_log`]),
//! - one-line summaries of a planned prescription ([`summarize_plan`]),
//! - structural validation schemas for data entry ([`LogSchema`],
//!   [`PlanSchema`]).
//!
//! All derivations are pure synchronous functions over an immutable
//! [`MetricCatalog`] snapshot; transport, persistence, and rendering live
//! in external collaborators. Callers re-derive metric id lists after a
//! catalog refresh instead of caching them across snapshots.
//!
//! ## Modules
//!
//! - **models**: core data carriers (`MetricDefinition`, `LoggedSet`,
//!   `PlannedExercise`, value and id types)
//! - **catalog**: the immutable catalog snapshot and metric resolver
//! - **summary**: log and plan summarizers
//! - **validation**: schema generators with per-field error reporting
//! - **errors**: typed catalog construction errors

/// Core data models (metric definitions, logged sets, planned exercises)
pub mod models;

/// Metric catalog snapshot, wire tables, and the metric resolver
pub mod catalog;

/// Human-readable one-line summaries for logged sets and planned exercises
pub mod summary;

/// Structural validation schemas for logging and planning payloads
pub mod validation;

/// Typed errors for catalog construction
pub mod errors;

pub use catalog::{CatalogTables, MetricCatalog};
pub use errors::CatalogError;
pub use models::{
    ExerciseId, ExerciseTypeId, FormattingStrategy, InputKind, LoggedSet, MetricDefinition,
    MetricId, MetricRole, MetricValue, PlannedExercise, TargetMetric,
};
pub use summary::{summarize_log, summarize_plan};
pub use validation::{FieldError, LogSchema, PlanSchema, ValidationResult};
