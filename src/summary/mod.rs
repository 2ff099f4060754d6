// ABOUTME: One-line summary generation for logged sets and planned exercises
// ABOUTME: Pure string assembly over a catalog snapshot; no state, no side effects
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Human-readable summaries.
//!
//! Both summarizers are pure functions of (catalog snapshot, payload):
//! calling one twice with the same inputs yields byte-identical output.
//! Missing catalog entries and malformed values degrade the summary to a
//! partial or empty string - nothing here can fail or panic.

/// Logged-set summarizer (strength special case + generic fallback)
pub mod log;

/// Planned-exercise summarizer (per-role phrasing templates)
pub mod plan;

pub use log::summarize_log;
pub use plan::summarize_plan;

/// Join a rendered value with its display unit, omitting the separator
/// when the catalog declares no unit.
pub(crate) fn with_unit(value: &str, unit: &str) -> String {
    if unit.is_empty() {
        value.to_owned()
    } else {
        format!("{value} {unit}")
    }
}
