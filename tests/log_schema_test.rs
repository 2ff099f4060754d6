// ABOUTME: Unit tests for the logging schema generator
// ABOUTME: Covers per-input-kind rules, required fields, and per-field error messages
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{
    fixture_catalog, BENCH_PRESS, HOLD_TIME, MOOD, NOTES, PLANK, REPS, REST_TIME, RPE, WEIGHT,
};
use std::collections::HashMap;
use workout_metrics::{LogSchema, MetricCatalog, MetricId, MetricValue};

fn bench_schema(catalog: &MetricCatalog) -> LogSchema {
    LogSchema::build(&catalog.log_metric_ids(BENCH_PRESS), catalog)
}

fn values(entries: &[(MetricId, MetricValue)]) -> HashMap<MetricId, MetricValue> {
    entries.iter().cloned().collect()
}

fn full_bench_payload() -> HashMap<MetricId, MetricValue> {
    values(&[
        (WEIGHT, MetricValue::Number(80.0)),
        (REPS, MetricValue::Number(5.0)),
        (RPE, MetricValue::Number(8.0)),
        (REST_TIME, MetricValue::from("1:30")),
        (NOTES, MetricValue::from("paused reps")),
    ])
}

#[test]
fn test_schema_covers_catalog_known_metrics_only() {
    let catalog = fixture_catalog();
    let schema = LogSchema::build(&catalog.log_metric_ids(PLANK), &catalog);
    // The retired id 99 has no definition and therefore no rule
    assert_eq!(schema.metric_ids(), vec![HOLD_TIME, MOOD, NOTES]);
}

#[test]
fn test_valid_payload_passes() {
    let catalog = fixture_catalog();
    let result = bench_schema(&catalog).validate(&full_bench_payload());
    assert!(result.is_valid, "unexpected errors: {:?}", result.errors);
    assert!(result.errors.is_empty());
}

#[test]
fn test_missing_field_is_reported_by_name() {
    let catalog = fixture_catalog();
    let mut payload = full_bench_payload();
    payload.remove(&WEIGHT);

    let result = bench_schema(&catalog).validate(&payload);
    assert!(!result.is_valid);
    assert_eq!(result.messages_for(WEIGHT), vec!["Weight is required"]);
}

#[test]
fn test_blank_text_fails_required() {
    let catalog = fixture_catalog();
    let mut payload = full_bench_payload();
    payload.insert(NOTES, MetricValue::from("  "));

    let result = bench_schema(&catalog).validate(&payload);
    assert_eq!(result.messages_for(NOTES), vec!["Notes is required"]);
}

#[test]
fn test_negative_number_rejected() {
    let catalog = fixture_catalog();
    let mut payload = full_bench_payload();
    payload.insert(WEIGHT, MetricValue::Number(-5.0));

    let result = bench_schema(&catalog).validate(&payload);
    assert_eq!(result.messages_for(WEIGHT), vec!["Weight must be at least 0"]);
}

#[test]
fn test_zero_is_a_valid_number() {
    let catalog = fixture_catalog();
    let mut payload = full_bench_payload();
    payload.insert(WEIGHT, MetricValue::Number(0.0));

    let result = bench_schema(&catalog).validate(&payload);
    assert!(result.is_valid);
}

#[test]
fn test_non_numeric_entry_in_number_field_rejected() {
    let catalog = fixture_catalog();
    let mut payload = full_bench_payload();
    payload.insert(REPS, MetricValue::from("a few"));

    let result = bench_schema(&catalog).validate(&payload);
    assert_eq!(result.messages_for(REPS), vec!["Reps must be a number"]);
}

#[test]
fn test_stringly_number_is_coerced() {
    let catalog = fixture_catalog();
    let mut payload = full_bench_payload();
    payload.insert(WEIGHT, MetricValue::from("72.5"));

    let result = bench_schema(&catalog).validate(&payload);
    assert!(result.is_valid);
}

#[test]
fn test_time_accepts_bare_seconds_and_minutes_seconds() {
    let catalog = fixture_catalog();
    let schema = bench_schema(&catalog);

    for good in ["90", "1:30", "0", "10:00", "75:59"] {
        let mut payload = full_bench_payload();
        payload.insert(REST_TIME, MetricValue::from(good));
        let result = schema.validate(&payload);
        assert!(result.is_valid, "expected {good:?} to validate");
    }
}

#[test]
fn test_time_rejects_out_of_range_seconds_component() {
    let catalog = fixture_catalog();
    let schema = bench_schema(&catalog);

    for bad in ["75:99", "1:5", "1:30:00", "-90", "90s"] {
        let mut payload = full_bench_payload();
        payload.insert(REST_TIME, MetricValue::from(bad));
        let result = schema.validate(&payload);
        assert_eq!(
            result.messages_for(REST_TIME),
            vec!["Rest time must be seconds or minutes:seconds"],
            "expected {bad:?} to be rejected"
        );
    }
}

#[test]
fn test_time_accepts_whole_numeric_seconds() {
    let catalog = fixture_catalog();
    let schema = bench_schema(&catalog);

    let mut payload = full_bench_payload();
    payload.insert(REST_TIME, MetricValue::Number(90.0));
    assert!(schema.validate(&payload).is_valid);

    payload.insert(REST_TIME, MetricValue::Number(90.5));
    assert!(!schema.validate(&payload).is_valid);
}

#[test]
fn test_text_length_is_bounded() {
    let catalog = fixture_catalog();
    let schema = bench_schema(&catalog);

    let mut payload = full_bench_payload();
    payload.insert(NOTES, MetricValue::Text("x".repeat(200)));
    assert!(schema.validate(&payload).is_valid);

    payload.insert(NOTES, MetricValue::Text("x".repeat(201)));
    let result = schema.validate(&payload);
    assert_eq!(
        result.messages_for(NOTES),
        vec!["Notes must be at most 200 characters"]
    );
}

#[test]
fn test_unknown_input_kind_falls_back_to_non_empty() {
    let catalog = fixture_catalog();
    let schema = LogSchema::build(&catalog.log_metric_ids(PLANK), &catalog);

    let mut payload = values(&[
        (HOLD_TIME, MetricValue::Number(30.0)),
        (MOOD, MetricValue::from("good")),
        (NOTES, MetricValue::from("steady")),
    ]);
    assert!(schema.validate(&payload).is_valid);

    payload.insert(MOOD, MetricValue::from(""));
    let result = schema.validate(&payload);
    assert_eq!(result.messages_for(MOOD), vec!["Mood is required"]);
}

#[test]
fn test_keys_without_rules_are_ignored() {
    let catalog = fixture_catalog();
    let mut payload = full_bench_payload();
    // Not bound to the bench press; the caller decides what to do with it
    payload.insert(MetricId(12345), MetricValue::Number(1.0));

    let result = bench_schema(&catalog).validate(&payload);
    assert!(result.is_valid);
}

#[test]
fn test_errors_accumulate_across_fields() {
    let catalog = fixture_catalog();
    let result = bench_schema(&catalog).validate(&HashMap::new());
    assert!(!result.is_valid);
    // One required error per schema field
    assert_eq!(result.errors.len(), 5);
}
