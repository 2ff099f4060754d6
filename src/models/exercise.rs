// ABOUTME: Exercise identity, formatting strategy, and the ephemeral logging/planning payloads
// ABOUTME: LoggedSet and PlannedExercise are consumed by the summarizers and never retained
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Exercise-side data carriers.
//!
//! [`LoggedSet`] and [`PlannedExercise`] are ephemeral values handed in by
//! the capture layer: created when a user records or plans a set, consumed
//! immediately for display, never stored by this crate.

use super::metric::{MetricId, MetricValue};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Identifier of a concrete exercise (e.g. "Bench Press")
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct ExerciseId(pub i64);

impl fmt::Display for ExerciseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of an exercise type/family (e.g. "strength", "cardio")
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct ExerciseTypeId(pub i64);

impl fmt::Display for ExerciseTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How logged sets of an exercise family are summarized
///
/// A tagged capability on the exercise-type record rather than a
/// hard-coded type-id comparison, so new families can be added without
/// touching the summarizer's control flow. Unrecognized values from a
/// newer catalog fall back to `Generic`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum FormattingStrategy {
    /// Weight x reps with optional RPE ("80 kg x 5, RPE 8")
    Strength,
    /// Ordered "value unit" fragments ("30 s, 12 breaths")
    #[default]
    Generic,
}

impl From<String> for FormattingStrategy {
    fn from(value: String) -> Self {
        match value.as_str() {
            "strength" => Self::Strength,
            // Families this client predates summarize generically
            _ => Self::Generic,
        }
    }
}

/// One completed set of an exercise with its recorded metric values
///
/// `metrics` is sparse: an absent key means "not recorded", which is
/// distinct from a present-but-empty text value and from a recorded `0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggedSet {
    /// 1-based position of this set within its exercise-in-session
    pub set_number: u32,
    /// Exercise the set belongs to
    pub exercise_id: ExerciseId,
    /// Sparse recorded values keyed by metric id
    #[serde(default)]
    pub metrics: HashMap<MetricId, MetricValue>,
}

/// A prescribed target for one metric of a planned exercise
///
/// An absent `max`, or a `max` equal to `min`, denotes a fixed single
/// target; a differing `max` denotes a range. No `min <= max` relation is
/// enforced anywhere in this crate - an inverted range passes through to
/// the caller unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetMetric {
    /// Metric being prescribed
    pub metric_id: MetricId,
    /// Minimum target; `None` means the metric carries no prescription
    pub min: Option<f64>,
    /// Optional maximum target
    pub max: Option<f64>,
}

/// A planned exercise entry: target metrics plus an optional set count
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannedExercise {
    /// Exercise being planned
    pub exercise_id: ExerciseId,
    /// Ordered prescribed targets
    #[serde(default)]
    pub target_metrics: Vec<TargetMetric>,
    /// Prescribed number of sets, when given
    pub target_sets: Option<u32>,
}
