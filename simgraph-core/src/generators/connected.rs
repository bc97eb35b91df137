//! Connected G(n,p) generation.

use tracing::{debug, instrument};

use crate::{
    error::{GenerationError, Result},
    graph::Graph,
    primitives::gnp_random_graph,
    random::RandomSource,
    simulation_graph::SimulationGraph,
};

/// Edge probability used when callers have no preference.
pub const DEFAULT_COMPLETION: f64 = 0.5;

/// Generates a connected random graph on `n` nodes and wraps it for the
/// simulation.
///
/// See [`connected_gnp`] for the construction.
///
/// # Errors
/// Returns [`GenerationError::InvalidParameter`] when `n` is zero or
/// `completion` is not a probability.
///
/// # Examples
/// ```
/// use simgraph_core::{DEFAULT_COMPLETION, connected_gnp_graph, seeded_rng};
///
/// let mut rng = seeded_rng(42);
/// let graph = connected_gnp_graph(&mut rng, 30, DEFAULT_COMPLETION)?;
/// assert_eq!(graph.graph().node_count(), 30);
/// assert!(graph.graph().is_connected());
/// # Ok::<(), simgraph_core::GenerationError>(())
/// ```
#[instrument(
    name = "generate.connected",
    err,
    skip_all,
    fields(nodes = n, completion = completion),
)]
pub fn connected_gnp_graph<R: RandomSource>(
    rng: &mut R,
    n: usize,
    completion: f64,
) -> Result<SimulationGraph> {
    connected_gnp(rng, n, completion).map(SimulationGraph::new)
}

/// Samples G(n, `completion`) and bridges its components into one.
///
/// Components are visited in order of their smallest node; every component
/// after the first gains one edge between a uniformly chosen node of its own
/// and a uniformly chosen node of the component before it. The bridges form
/// a path over all components, so the result is always connected.
///
/// # Errors
/// Returns [`GenerationError::InvalidParameter`] when `n` is zero or
/// `completion` is not a probability.
pub fn connected_gnp<R: RandomSource>(rng: &mut R, n: usize, completion: f64) -> Result<Graph> {
    if n < 1 {
        return Err(GenerationError::invalid(
            "nodes",
            "a connected graph needs at least one node",
        ));
    }

    let mut graph = gnp_random_graph(rng, n, completion)?;
    let components = graph.connected_components();
    for pair in components.windows(2) {
        let [previous, current] = pair else { continue };
        if let (Some(&u), Some(&v)) = (rng.choice(current), rng.choice(previous)) {
            graph.add_edge(u, v)?;
        }
    }

    debug!(
        components = components.len(),
        bridges = components.len().saturating_sub(1),
        edges = graph.edge_count(),
        "connected random graph"
    );
    Ok(graph)
}
