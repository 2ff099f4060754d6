// ABOUTME: Structural validation schema for a single logged set's metric values
// ABOUTME: One required per-input-kind rule per catalog-known metric id
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Logging schema generator.
//!
//! [`LogSchema::build`] turns an exercise's resolved metric ids into a
//! structural contract over the `{metric id -> value}` capture payload:
//! numbers must be non-negative, time spans must be bare seconds or
//! `minutes:seconds`, text is bounded, and every catalog-known field is
//! required. Ids absent from the catalog emit no rule - whether to accept
//! or reject unknown keys stays with the caller.

use crate::catalog::MetricCatalog;
use crate::models::{InputKind, MetricId, MetricValue};
use crate::validation::ValidationResult;
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;
use tracing::debug;

/// Maximum length of a free-text metric value, in characters
const MAX_TEXT_CHARS: usize = 200;

/// Bare non-negative seconds ("90") or minutes:seconds with the seconds
/// component in 00-59 ("1:30").
/// Stored as Option to handle compilation failures gracefully (should never fail for a static pattern)
static TIME_SPAN_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^(?:\d+|\d+:[0-5]\d)$").ok());

/// Per-input-kind structural rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldRule {
    /// Coerces to a number, minimum 0
    NonNegativeNumber,
    /// Bare seconds or `minutes:seconds`
    TimeSpan,
    /// Free text, at most [`MAX_TEXT_CHARS`] characters
    BoundedText,
    /// Fallback for unrecognized input kinds: any non-empty value
    NonEmpty,
}

impl FieldRule {
    const fn for_kind(kind: InputKind) -> Self {
        match kind {
            InputKind::Number => Self::NonNegativeNumber,
            InputKind::Time => Self::TimeSpan,
            InputKind::Text => Self::BoundedText,
            InputKind::Unknown => Self::NonEmpty,
        }
    }
}

/// One field of the generated schema
#[derive(Debug, Clone)]
struct FieldSchema {
    metric_id: MetricId,
    name: String,
    rule: FieldRule,
}

/// Structural validator for a single set's metric values
///
/// Built per exercise from the resolved metric ids and the catalog
/// snapshot; holds no reference to either afterwards.
#[derive(Debug, Clone)]
pub struct LogSchema {
    fields: Vec<FieldSchema>,
}

impl LogSchema {
    /// Derive the schema for the given ordered metric ids.
    ///
    /// Ids without a catalog definition are skipped without error.
    #[must_use]
    pub fn build(metric_ids: &[MetricId], catalog: &MetricCatalog) -> Self {
        let fields = metric_ids
            .iter()
            .filter_map(|id| {
                let Some(definition) = catalog.metric(*id) else {
                    debug!(metric = %id, "no schema rule for metric id absent from catalog");
                    return None;
                };
                Some(FieldSchema {
                    metric_id: *id,
                    name: definition.name.clone(),
                    rule: FieldRule::for_kind(definition.input_kind),
                })
            })
            .collect();
        Self { fields }
    }

    /// Metric ids this schema has rules for, in schema order.
    #[must_use]
    pub fn metric_ids(&self) -> Vec<MetricId> {
        self.fields.iter().map(|field| field.metric_id).collect()
    }

    /// Validate a capture payload against this schema.
    ///
    /// Every field is required; violations come back as per-field messages
    /// naming the metric. Keys the schema has no rule for are ignored.
    #[must_use]
    pub fn validate(&self, values: &HashMap<MetricId, MetricValue>) -> ValidationResult {
        let mut result = ValidationResult::new();
        for field in &self.fields {
            let Some(value) = values.get(&field.metric_id) else {
                result.add_error(field.metric_id, format!("{} is required", field.name));
                continue;
            };
            if value.is_blank() {
                result.add_error(field.metric_id, format!("{} is required", field.name));
                continue;
            }
            if let Some(message) = check_rule(field, value) {
                result.add_error(field.metric_id, message);
            }
        }
        result
    }
}

/// Apply one field rule; `Some(message)` on violation.
fn check_rule(field: &FieldSchema, value: &MetricValue) -> Option<String> {
    match field.rule {
        FieldRule::NonNegativeNumber => match value.as_number() {
            None => Some(format!("{} must be a number", field.name)),
            Some(number) if number < 0.0 => {
                Some(format!("{} must be at least 0", field.name))
            }
            Some(_) => None,
        },
        FieldRule::TimeSpan => {
            let valid = match value {
                MetricValue::Number(seconds) => {
                    *seconds >= 0.0 && seconds.fract() == 0.0
                }
                MetricValue::Text(text) => TIME_SPAN_PATTERN
                    .as_ref()
                    .map_or(true, |pattern| pattern.is_match(text.trim())),
            };
            if valid {
                None
            } else {
                Some(format!(
                    "{} must be seconds or minutes:seconds",
                    field.name
                ))
            }
        }
        FieldRule::BoundedText => match value {
            MetricValue::Text(text) if text.chars().count() > MAX_TEXT_CHARS => Some(format!(
                "{} must be at most {MAX_TEXT_CHARS} characters",
                field.name
            )),
            MetricValue::Text(_) | MetricValue::Number(_) => None,
        },
        // Required and non-blank already checked; any remaining value passes
        FieldRule::NonEmpty => None,
    }
}
