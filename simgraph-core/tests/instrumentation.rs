//! Tests for the tracing spans and events emitted by the generators.

mod common;

use common::with_recording;
use rstest::rstest;
use simgraph_core::{barabasi_albert, connected_gnp_graph, groups_graph, seeded_rng};
use tracing::Level;

#[rstest]
fn connected_span_records_parameters() {
    let (result, layer) = with_recording(|| connected_gnp_graph(&mut seeded_rng(1), 12, 0.25));
    result.expect("valid parameters");

    let span = layer.span("generate.connected").expect("span must be recorded");
    assert_eq!(span.fields.get("nodes").map(String::as_str), Some("12"));
    assert_eq!(span.fields.get("completion").map(String::as_str), Some("0.25"));

    let events = layer.events_with_message("connected random graph");
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].level, Level::DEBUG);
    assert!(events[0].fields.contains_key("components"));
}

#[rstest]
fn groups_span_wraps_connector_span() {
    let (result, layer) = with_recording(|| groups_graph(&mut seeded_rng(2), &[4, 4, 4], 0.5, 2));
    result.expect("valid parameters");

    let groups_span = layer.span("generate.groups").expect("groups span");
    assert_eq!(groups_span.fields.get("groups").map(String::as_str), Some("3"));
    assert_eq!(
        groups_span.fields.get("max_connections").map(String::as_str),
        Some("2")
    );
    assert!(layer.span("generate.connect_groups").is_some());

    let summary = layer.events_with_message("group graph generated");
    assert_eq!(summary.len(), 1);
    assert_eq!(summary[0].level, Level::INFO);
    assert_eq!(summary[0].fields.get("nodes").map(String::as_str), Some("12"));
}

#[rstest]
fn failures_are_reported_on_the_span() {
    let (result, layer) = with_recording(|| barabasi_albert(&mut seeded_rng(3), 3, 3));
    result.expect_err("m >= n must fail");

    let errors: Vec<_> = layer
        .events()
        .into_iter()
        .filter(|event| event.level == Level::ERROR)
        .collect();
    assert_eq!(errors.len(), 1);
    let rendered = errors[0].fields.get("error").cloned().unwrap_or_default();
    assert!(rendered.contains("edges_per_node"), "unexpected error field: {rendered}");
    assert!(layer.span("generate.attachment").is_some());
}
