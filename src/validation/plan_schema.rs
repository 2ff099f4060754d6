// ABOUTME: Structural validation schema for a planned target-metric array
// ABOUTME: Membership plus non-negative bounds; deliberately no min/max relation
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Planning schema generator.
//!
//! [`PlanSchema::build`] captures the set of metric ids a plan entry may
//! reference. Validation checks membership and non-negative bounds per
//! array entry; it enforces no relation between `min` and `max` - an
//! inverted range is accepted here and handled (if at all) by the caller
//! or by the plan summarizer's range detection, never rejected at this
//! layer.

use crate::models::{MetricId, TargetMetric};
use crate::validation::ValidationResult;
use std::collections::HashSet;

/// Structural validator for an array of planned targets
#[derive(Debug, Clone)]
pub struct PlanSchema {
    allowed: HashSet<MetricId>,
}

impl PlanSchema {
    /// Derive the schema for the given planning metric ids.
    #[must_use]
    pub fn build(metric_ids: &[MetricId]) -> Self {
        Self {
            allowed: metric_ids.iter().copied().collect(),
        }
    }

    /// Whether the schema admits targets for the given metric.
    #[must_use]
    pub fn allows(&self, metric_id: MetricId) -> bool {
        self.allowed.contains(&metric_id)
    }

    /// Validate a target-metric array against this schema.
    ///
    /// Numeric typing of the bounds is guaranteed by the payload type; what
    /// remains structural is membership, the required minimum, and
    /// non-negativity of both bounds.
    #[must_use]
    pub fn validate(&self, targets: &[TargetMetric]) -> ValidationResult {
        let mut result = ValidationResult::new();
        for target in targets {
            if !self.allowed.contains(&target.metric_id) {
                result.add_error(
                    target.metric_id,
                    format!("metric {} is not available for planning", target.metric_id),
                );
                continue;
            }
            match target.min {
                None => result.add_error(
                    target.metric_id,
                    format!("metric {} requires a minimum target", target.metric_id),
                ),
                Some(min) if min < 0.0 => result.add_error(
                    target.metric_id,
                    format!("metric {} minimum must be at least 0", target.metric_id),
                ),
                Some(_) => {}
            }
            if let Some(max) = target.max {
                if max < 0.0 {
                    result.add_error(
                        target.metric_id,
                        format!("metric {} maximum must be at least 0", target.metric_id),
                    );
                }
            }
        }
        result
    }
}
