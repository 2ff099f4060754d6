// ABOUTME: Metric identity, definition, semantic role, and value types
// ABOUTME: Catalog-assigned definitions plus the sparse values recorded against them
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Metric definitions and values.
//!
//! A [`MetricDefinition`] describes one named, typed measurement an
//! exercise can track (weight, reps, RPE, rest time, ...). Definitions are
//! catalog data: loaded once per session and treated as read-only by every
//! derivation in this crate. A [`MetricValue`] is what a user actually
//! recorded against a definition - a number or a free-form string,
//! mirroring the JSON payload shape.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable catalog-assigned metric identifier
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct MetricId(pub i64);

impl fmt::Display for MetricId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Input kind a metric definition declares for data entry
///
/// The `Unknown` variant absorbs input kinds added to the remote catalog
/// before this client learns about them; validation falls back to a
/// required non-empty string rule for those.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum InputKind {
    /// Non-negative numeric entry (weight, reps, RPE)
    #[default]
    Number,
    /// Time-span entry: bare seconds or `minutes:seconds`
    Time,
    /// Free text entry, bounded length
    Text,
    /// Unrecognized kind from a newer catalog
    Unknown,
}

impl From<String> for InputKind {
    fn from(value: String) -> Self {
        match value.as_str() {
            "number" => Self::Number,
            "time" => Self::Time,
            "text" => Self::Text,
            // Newer catalogs may declare kinds this client predates
            _ => Self::Unknown,
        }
    }
}

/// Semantic role of a metric definition, independent of display spelling
///
/// Roles are resolved once at catalog-load time - either carried explicitly
/// on the wire record or inferred from the canonical display names for
/// catalogs that predate the role field. Formatting logic consumes roles
/// only, so renaming "Reps" to "Repetitions" in the catalog cannot break a
/// summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MetricRole {
    /// The primary load figure of a strength set (e.g. barbell weight)
    PrimaryLoad,
    /// Repetition count
    Repetitions,
    /// Subjective effort (RPE)
    Effort,
    /// Rest/recovery interval between sets
    Recovery,
}

impl MetricRole {
    /// Infer a role from the canonical display names used by catalogs that
    /// predate the explicit role field.
    #[must_use]
    pub fn infer_from_name(name: &str) -> Option<Self> {
        match name {
            "Weight" => Some(Self::PrimaryLoad),
            "Reps" => Some(Self::Repetitions),
            "RPE" => Some(Self::Effort),
            "Rest time" => Some(Self::Recovery),
            _ => None,
        }
    }
}

/// A single metric definition from the catalog
///
/// Treated as read-only for the lifetime of a catalog snapshot; the
/// summarizers and schema generators never mutate definitions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricDefinition {
    /// Stable catalog-assigned id
    pub id: MetricId,
    /// Display name, unique within the catalog
    pub name: String,
    /// Display suffix (e.g. "kg", "s"); possibly empty
    pub unit: String,
    /// Declared entry kind
    pub input_kind: InputKind,
    /// Whether this metric may appear in a planned prescription
    pub use_in_planning: bool,
    /// Whether only a minimum target is meaningful (no range phrasing)
    pub min_only: bool,
    /// Semantic role, resolved at catalog-load time
    pub role: Option<MetricRole>,
}

impl MetricDefinition {
    /// Whether this definition carries the given semantic role.
    #[must_use]
    pub fn has_role(&self, role: MetricRole) -> bool {
        self.role == Some(role)
    }
}

/// A recorded metric value: a number or a free-form string
///
/// Mirrors the sparse JSON payload from the capture layer. Absence from
/// the payload map means "not recorded"; a present value - including `0`
/// and the empty string - is "recorded".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    /// Numeric entry
    Number(f64),
    /// Textual entry (time spans like "1:30", notes, or stringly numbers)
    Text(String),
}

impl MetricValue {
    /// Coerce this value to a number, tolerating stringly-typed numerics.
    ///
    /// Returns `None` when the text does not parse; callers treat that as
    /// "not present" rather than an error.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => s.trim().parse().ok(),
        }
    }

    /// Whether this is a present-but-empty text entry.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Number(_) => false,
            Self::Text(s) => s.trim().is_empty(),
        }
    }
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // f64 Display renders whole floats without a trailing ".0"
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for MetricValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for MetricValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}
