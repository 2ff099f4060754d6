// ABOUTME: Typed errors for catalog snapshot construction
// ABOUTME: The only fallible boundary in the crate; derivations never return errors
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Catalog construction errors.
//!
//! Building a [`crate::MetricCatalog`] from remote tables is the one
//! fallible operation this crate owns. Everything downstream of a built
//! snapshot (resolving, summarizing, validating) degrades to partial or
//! empty output instead of failing - catalogs and historical data may be
//! out of sync by design.

use thiserror::Error;

use crate::models::MetricId;

/// Errors raised while assembling a catalog snapshot from remote tables
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Two metric definitions share the same id
    #[error("duplicate metric id {0} in catalog")]
    DuplicateMetricId(MetricId),

    /// Two metric definitions share the same display name
    ///
    /// Names double as legacy role-lookup keys, so they must be unique
    /// within a catalog.
    #[error("duplicate metric name \"{0}\" in catalog")]
    DuplicateMetricName(String),

    /// Two bindings target the same exercise type
    #[error("duplicate binding for exercise type {0}")]
    DuplicateBinding(crate::models::ExerciseTypeId),

    /// The snapshot document was not valid JSON for the expected tables
    #[error("malformed catalog snapshot: {0}")]
    Malformed(#[from] serde_json::Error),
}
