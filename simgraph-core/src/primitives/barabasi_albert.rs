//! Barabási–Albert preferential attachment.

use std::collections::BTreeSet;

use crate::{
    error::{GenerationError, Result},
    graph::Graph,
    random::RandomSource,
};

/// Grows a scale-free graph by preferential attachment.
///
/// Starts from a star on `m + 1` nodes with node 0 as the hub. Every further
/// node attaches to `m` distinct existing nodes, each picked uniformly from
/// a list in which every node appears once per incident edge, so targets are
/// chosen with probability proportional to degree.
///
/// The result has `n` nodes and `m * (n - m)` edges.
///
/// # Errors
/// Returns [`GenerationError::InvalidParameter`] unless `1 <= m < n`.
///
/// # Examples
/// ```
/// use simgraph_core::{barabasi_albert_graph, seeded_rng};
///
/// let mut rng = seeded_rng(3);
/// let graph = barabasi_albert_graph(&mut rng, 20, 2)?;
/// assert_eq!(graph.node_count(), 20);
/// assert_eq!(graph.edge_count(), 36);
/// # Ok::<(), simgraph_core::GenerationError>(())
/// ```
pub fn barabasi_albert_graph<R: RandomSource>(rng: &mut R, n: usize, m: usize) -> Result<Graph> {
    if m < 1 || m >= n {
        return Err(GenerationError::invalid(
            "edges_per_node",
            format!("must satisfy 1 <= m < n (got m={m}, n={n})"),
        ));
    }

    let mut graph = Graph::with_nodes(m + 1);
    let mut repeated = Vec::with_capacity(2 * m * n);
    for leaf in 1..=m {
        graph.add_edge(0, leaf)?;
        repeated.push(0);
        repeated.push(leaf);
    }

    while graph.node_count() < n {
        let source = graph.add_node();
        let targets = pick_targets(rng, &repeated, m);
        for &target in &targets {
            graph.add_edge(source, target)?;
            repeated.push(target);
            repeated.push(source);
        }
    }
    Ok(graph)
}

/// Draws `m` distinct nodes from the degree-weighted list.
fn pick_targets<R: RandomSource>(rng: &mut R, repeated: &[usize], m: usize) -> BTreeSet<usize> {
    let mut targets = BTreeSet::new();
    while targets.len() < m {
        if let Some(&node) = rng.choice(repeated) {
            targets.insert(node);
        }
    }
    targets
}
