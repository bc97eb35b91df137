//! The container handed to downstream simulation code.

use crate::graph::Graph;

/// Immutable owner of one generated [`Graph`].
///
/// # Examples
/// ```
/// use simgraph_core::{Graph, SimulationGraph};
///
/// let wrapped = SimulationGraph::new(Graph::complete(3));
/// assert_eq!(wrapped.graph().edge_count(), 3);
/// let graph: Graph = wrapped.into_inner();
/// assert_eq!(graph.node_count(), 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimulationGraph {
    graph: Graph,
}

impl SimulationGraph {
    /// Takes ownership of `graph`.
    #[must_use]
    pub fn new(graph: Graph) -> Self {
        Self { graph }
    }

    /// Borrows the wrapped graph.
    #[must_use]
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Releases the wrapped graph.
    #[must_use]
    pub fn into_inner(self) -> Graph {
        self.graph
    }
}

impl From<Graph> for SimulationGraph {
    fn from(graph: Graph) -> Self {
        Self::new(graph)
    }
}

impl AsRef<Graph> for SimulationGraph {
    fn as_ref(&self) -> &Graph {
        &self.graph
    }
}
