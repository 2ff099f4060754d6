// ABOUTME: Metric catalog subsystem - wire tables, snapshot, and resolver
// ABOUTME: Derivations take the snapshot by reference and never mutate it
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! The metric catalog: an immutable-per-session snapshot of metric
//! definitions and exercise-type bindings, plus the resolver that maps an
//! exercise to its ordered logging and planning metric ids.
//!
//! The catalog-loading collaborator (remote fetch, cache) is external to
//! this crate; it hands over the two read-only tables described in
//! [`tables`] and receives a [`MetricCatalog`] snapshot back. Summarizers
//! and schema generators are pure functions over one snapshot - callers
//! must re-derive metric id lists after a refresh rather than caching them
//! across snapshots.

/// Wire-shaped records for the remote catalog tables
pub mod tables;

/// The immutable catalog snapshot and metric resolver
pub mod snapshot;

pub use snapshot::MetricCatalog;
pub use tables::{
    CatalogTables, ExerciseAssignmentRecord, ExerciseTypeBindingRecord, MetricDefinitionRecord,
    OrderedMetricRecord,
};
