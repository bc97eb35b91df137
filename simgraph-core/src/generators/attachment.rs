//! Preferential-attachment generation.

use tracing::instrument;

use crate::{
    error::Result, primitives::barabasi_albert_graph, random::RandomSource,
    simulation_graph::SimulationGraph,
};

/// Generates a Barabási–Albert graph on `n` nodes where each new node brings
/// `m` edges. No post-processing is applied.
///
/// # Errors
/// Returns [`crate::GenerationError::InvalidParameter`] unless `1 <= m < n`.
///
/// # Examples
/// ```
/// use simgraph_core::{barabasi_albert, seeded_rng};
///
/// let mut rng = seeded_rng(5);
/// let graph = barabasi_albert(&mut rng, 50, 3)?;
/// assert_eq!(graph.graph().edge_count(), 3 * 47);
/// # Ok::<(), simgraph_core::GenerationError>(())
/// ```
#[instrument(name = "generate.attachment", err, skip_all, fields(nodes = n, edges_per_node = m))]
pub fn barabasi_albert<R: RandomSource>(
    rng: &mut R,
    n: usize,
    m: usize,
) -> Result<SimulationGraph> {
    barabasi_albert_graph(rng, n, m).map(SimulationGraph::new)
}
