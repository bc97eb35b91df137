//! G(n,p) sampling.

use tracing::trace;

use crate::{error::Result, graph::Graph, random::RandomSource};

use super::validate_probability;

/// Samples a G(n,p) graph: each of the `n * (n - 1) / 2` possible edges is
/// present independently with probability `p`.
///
/// Uses geometric skipping over the pair sequence `(1,0), (2,0), (2,1), …`,
/// so only about one draw per emitted edge is consumed. `p == 0` and
/// `p == 1` short-circuit to the empty and complete graphs without drawing.
///
/// # Errors
/// Returns [`crate::GenerationError::InvalidParameter`] when `p` is not a
/// finite probability.
///
/// # Examples
/// ```
/// use simgraph_core::{gnp_random_graph, seeded_rng};
///
/// let mut rng = seeded_rng(1);
/// let graph = gnp_random_graph(&mut rng, 10, 1.0)?;
/// assert_eq!(graph.edge_count(), 45);
/// # Ok::<(), simgraph_core::GenerationError>(())
/// ```
pub fn gnp_random_graph<R: RandomSource>(rng: &mut R, n: usize, p: f64) -> Result<Graph> {
    let p = validate_probability("completion", p)?;
    if p <= 0.0 {
        return Ok(Graph::with_nodes(n));
    }
    if p >= 1.0 {
        return Ok(Graph::complete(n));
    }

    let mut graph = Graph::with_nodes(n);
    // `ln_1p` keeps `log_miss` non-zero for `p` below the f64 epsilon.
    let log_miss = (-p).ln_1p();
    // `row` is the higher endpoint, `column` the next candidate lower endpoint.
    let mut row = 1_usize;
    let mut column = 0_usize;
    while row < n {
        let log_draw = (-rng.unit_interval()).ln_1p();
        let skip = (log_draw / log_miss).floor();
        if !skip.is_finite() {
            break;
        }
        // Float to usize casts saturate, so huge skips simply end the walk.
        let skip = skip as usize;
        column = column.saturating_add(skip);
        while column >= row && row < n {
            column -= row;
            row += 1;
        }
        if row < n {
            graph.add_edge(row, column)?;
            column += 1;
        }
    }
    trace!(nodes = n, edges = graph.edge_count(), "sampled gnp graph");
    Ok(graph)
}
