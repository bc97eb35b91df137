#![allow(dead_code, reason = "each test binary uses a different subset of these helpers")]

use simgraph_core::{Graph, Group};
use simgraph_test_support::tracing::RecordingLayer;
use tracing_subscriber::layer::SubscriberExt;

/// Runs `f` with a recording subscriber installed and returns its output
/// together with the layer holding the captured spans and events.
pub fn with_recording<T>(f: impl FnOnce() -> T) -> (T, RecordingLayer) {
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());
    let output = tracing::subscriber::with_default(subscriber, f);
    (output, layer)
}

/// Counts the edges with one endpoint in `first` and the other in `second`.
#[must_use]
pub fn crossing_edges(graph: &Graph, first: &Group, second: &Group) -> usize {
    graph
        .edges()
        .filter(|&(u, v)| {
            (first.contains(u) && second.contains(v)) || (first.contains(v) && second.contains(u))
        })
        .count()
}
