// ABOUTME: Structural validation results shared by the schema generators
// ABOUTME: Failures are inspectable per-field payloads, never panics or Err returns
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Validation primitives.
//!
//! Schema generators derive a structural contract from the catalog and
//! report violations as a [`ValidationResult`]: a flag plus per-field
//! errors naming the offending metric. The result is a plain serializable
//! payload so the capture UI can attach each message to its input field.

use crate::models::MetricId;
use serde::{Deserialize, Serialize};

/// Entry-time validation schema for a single logged set
pub mod log_schema;

/// Entry-time validation schema for a planned target-metric array
pub mod plan_schema;

pub use log_schema::LogSchema;
pub use plan_schema::PlanSchema;

/// A single field-level validation error
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldError {
    /// Metric the error is associated with
    pub metric_id: MetricId,
    /// Human-readable message naming the metric
    pub message: String,
}

/// Outcome of validating a payload against a generated schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    /// Whether every field rule passed
    pub is_valid: bool,
    /// Field-level errors, in schema order
    pub errors: Vec<FieldError>,
}

impl ValidationResult {
    /// Create a passing result with no errors.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
        }
    }

    /// Record a field-level error and mark the result invalid.
    pub fn add_error(&mut self, metric_id: MetricId, message: impl Into<String>) {
        self.is_valid = false;
        self.errors.push(FieldError {
            metric_id,
            message: message.into(),
        });
    }

    /// Messages recorded against the given metric.
    #[must_use]
    pub fn messages_for(&self, metric_id: MetricId) -> Vec<&str> {
        self.errors
            .iter()
            .filter(|error| error.metric_id == metric_id)
            .map(|error| error.message.as_str())
            .collect()
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new()
    }
}
