//! Undirected simple graph over contiguous node ids.
//!
//! [`Graph`] is the minimal structure the generators build on: nodes are the
//! integers `0..node_count`, edges are unordered pairs, and inserting an edge
//! that already exists leaves the graph unchanged. Component decomposition
//! and disjoint union are provided here rather than by an external graph
//! library.

use std::{collections::BTreeSet, ops::Range};

use crate::error::GraphError;

mod union_find;

use union_find::DisjointSet;

/// An undirected edge stored with its smaller endpoint first.
pub type Edge = (usize, usize);

/// Undirected graph without self-loops or parallel edges.
///
/// # Examples
/// ```
/// use simgraph_core::Graph;
///
/// let mut graph = Graph::with_nodes(3);
/// assert!(graph.add_edge(0, 1)?);
/// assert!(!graph.add_edge(1, 0)?);
/// assert_eq!(graph.edge_count(), 1);
/// assert_eq!(graph.connected_components(), vec![vec![0, 1], vec![2]]);
/// # Ok::<(), simgraph_core::GraphError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Graph {
    adjacency: Vec<BTreeSet<usize>>,
    edge_count: usize,
}

impl Graph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph with `node_count` isolated nodes.
    #[must_use]
    pub fn with_nodes(node_count: usize) -> Self {
        Self {
            adjacency: vec![BTreeSet::new(); node_count],
            edge_count: 0,
        }
    }

    /// Creates the complete graph on `node_count` nodes.
    #[must_use]
    pub fn complete(node_count: usize) -> Self {
        let adjacency = (0..node_count)
            .map(|node| (0..node_count).filter(|&other| other != node).collect())
            .collect();
        Self {
            adjacency,
            edge_count: node_count * node_count.saturating_sub(1) / 2,
        }
    }

    /// Appends a new isolated node and returns its id.
    pub fn add_node(&mut self) -> usize {
        self.adjacency.push(BTreeSet::new());
        self.adjacency.len() - 1
    }

    /// Inserts the undirected edge `{u, v}`.
    ///
    /// Returns `true` when the edge was new and `false` when it was already
    /// present.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownNode`] if either endpoint is not a node of
    /// this graph and [`GraphError::SelfLoop`] if `u == v`.
    pub fn add_edge(&mut self, u: usize, v: usize) -> Result<bool, GraphError> {
        self.check_node(u)?;
        self.check_node(v)?;
        if u == v {
            return Err(GraphError::SelfLoop { node: u });
        }
        let inserted = self.adjacency[u].insert(v);
        if inserted {
            self.adjacency[v].insert(u);
            self.edge_count += 1;
        }
        Ok(inserted)
    }

    /// Returns `true` if the edge `{u, v}` exists.
    #[must_use]
    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        self.adjacency
            .get(u)
            .is_some_and(|neighbours| neighbours.contains(&v))
    }

    /// Number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of distinct undirected edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Node ids, always the contiguous range `0..node_count`.
    #[must_use]
    pub fn nodes(&self) -> Range<usize> {
        0..self.node_count()
    }

    /// Iterates the edges as `(min, max)` pairs in ascending order.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.adjacency.iter().enumerate().flat_map(|(u, neighbours)| {
            neighbours.range(u + 1..).map(move |&v| (u, v))
        })
    }

    /// Iterates the neighbours of `node` in ascending order. Unknown nodes
    /// have no neighbours.
    pub fn neighbours(&self, node: usize) -> impl Iterator<Item = usize> + '_ {
        self.adjacency.get(node).into_iter().flatten().copied()
    }

    /// Number of edges incident to `node`.
    #[must_use]
    pub fn degree(&self, node: usize) -> usize {
        self.adjacency.get(node).map_or(0, BTreeSet::len)
    }

    /// Splits the node set into connected components.
    ///
    /// Components are ordered by their smallest node id and list their nodes
    /// in ascending order. An empty graph has no components.
    #[must_use]
    pub fn connected_components(&self) -> Vec<Vec<usize>> {
        let mut set = DisjointSet::new(self.node_count());
        for (u, v) in self.edges() {
            set.union(u, v);
        }

        let mut slot_of_root = vec![usize::MAX; self.node_count()];
        let mut components: Vec<Vec<usize>> = Vec::new();
        for node in self.nodes() {
            let root = set.find(node);
            if slot_of_root[root] == usize::MAX {
                slot_of_root[root] = components.len();
                components.push(Vec::new());
            }
            components[slot_of_root[root]].push(node);
        }
        components
    }

    /// Returns `true` when the graph has exactly one connected component.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.connected_components().len() == 1
    }

    /// Appends `other` with its node ids shifted past this graph's nodes.
    ///
    /// Returns the id range the appended nodes now occupy.
    ///
    /// # Examples
    /// ```
    /// use simgraph_core::Graph;
    ///
    /// let mut left = Graph::complete(2);
    /// let range = left.append_disjoint(Graph::complete(3));
    /// assert_eq!(range, 2..5);
    /// assert!(left.has_edge(2, 4));
    /// assert_eq!(left.edge_count(), 4);
    /// ```
    pub fn append_disjoint(&mut self, other: Self) -> Range<usize> {
        let offset = self.node_count();
        self.adjacency.extend(
            other
                .adjacency
                .into_iter()
                .map(|neighbours| neighbours.into_iter().map(|v| v + offset).collect()),
        );
        self.edge_count += other.edge_count;
        offset..self.node_count()
    }

    /// Builds the disjoint union of `self` and `other` without consuming
    /// either graph.
    #[must_use]
    pub fn disjoint_union(&self, other: &Self) -> Self {
        let mut union = self.clone();
        union.append_disjoint(other.clone());
        union
    }

    fn check_node(&self, node: usize) -> Result<(), GraphError> {
        if node < self.node_count() {
            Ok(())
        } else {
            Err(GraphError::UnknownNode {
                node,
                node_count: self.node_count(),
            })
        }
    }
}
