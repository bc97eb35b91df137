//! Multi-group composition: per-group connected graphs stitched together by
//! a bounded random number of inter-group edges.

use std::ops::Range;

use tracing::{debug, info, instrument};

use crate::{
    builder::GroupsGraphBuilder,
    error::{GenerationError, GraphError, Result},
    graph::Graph,
    random::RandomSource,
    simulation_graph::SimulationGraph,
};

use super::connected::connected_gnp;

/// A contiguous block of node ids belonging to one generated community.
///
/// # Examples
/// ```
/// use simgraph_core::Group;
///
/// let group = Group::new(4, 3);
/// assert_eq!(group.nodes(), 4..7);
/// assert_eq!(group.to_vec(), vec![4, 5, 6]);
/// assert!(group.contains(6));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Group {
    start: usize,
    len: usize,
}

impl Group {
    /// Describes the ids `start..start + len`.
    #[must_use]
    pub const fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    /// First node id of the group.
    #[must_use]
    pub const fn start(&self) -> usize {
        self.start
    }

    /// One past the last node id of the group, saturating at `usize::MAX`.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.start.saturating_add(self.len)
    }

    /// Number of nodes in the group.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` when the group holds no nodes.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if `node` belongs to the group.
    #[must_use]
    pub const fn contains(&self, node: usize) -> bool {
        node >= self.start && node < self.end()
    }

    /// The group's node ids in ascending order.
    #[must_use]
    pub const fn nodes(&self) -> Range<usize> {
        self.start..self.end()
    }

    /// Collects the node ids into a vector.
    #[must_use]
    pub fn to_vec(&self) -> Vec<usize> {
        self.nodes().collect()
    }

    fn pick<R: RandomSource>(&self, rng: &mut R) -> usize {
        rng.uniform_int(self.start, self.end() - 1)
    }
}

/// Edge probability for each group: one value for all groups, or one per
/// group.
///
/// # Examples
/// ```
/// use simgraph_core::GroupCompletion;
///
/// assert_eq!(GroupCompletion::from(0.5).resolve(3)?, vec![0.5, 0.5, 0.5]);
/// assert!(GroupCompletion::from(vec![0.1, 0.2]).resolve(3).is_err());
/// # Ok::<(), simgraph_core::GenerationError>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum GroupCompletion {
    /// Broadcast to every group.
    Uniform(f64),
    /// One probability per group, in group order.
    PerGroup(Vec<f64>),
}

impl GroupCompletion {
    /// Expands the completion into one probability per group.
    ///
    /// # Errors
    /// Returns [`GenerationError::Configuration`] when a per-group list does
    /// not have exactly `group_count` entries.
    pub fn resolve(&self, group_count: usize) -> Result<Vec<f64>> {
        match self {
            Self::Uniform(p) => Ok(vec![*p; group_count]),
            Self::PerGroup(values) if values.len() == group_count => Ok(values.clone()),
            Self::PerGroup(values) => Err(GenerationError::Configuration {
                group_sizes: group_count,
                completions: values.len(),
            }),
        }
    }
}

impl From<f64> for GroupCompletion {
    fn from(value: f64) -> Self {
        Self::Uniform(value)
    }
}

impl From<Vec<f64>> for GroupCompletion {
    fn from(values: Vec<f64>) -> Self {
        Self::PerGroup(values)
    }
}

impl From<&[f64]> for GroupCompletion {
    fn from(values: &[f64]) -> Self {
        Self::PerGroup(values.to_vec())
    }
}

impl<const N: usize> From<[f64; N]> for GroupCompletion {
    fn from(values: [f64; N]) -> Self {
        Self::PerGroup(values.to_vec())
    }
}

/// Output of [`groups_graph`]: the composed graph and the groups it was
/// built from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroupsGraph {
    graph: SimulationGraph,
    groups: Vec<Group>,
}

impl GroupsGraph {
    /// The composed graph.
    #[must_use]
    pub fn graph(&self) -> &SimulationGraph {
        &self.graph
    }

    /// The groups in generation order.
    #[must_use]
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Splits the result into its graph and groups.
    #[must_use]
    pub fn into_parts(self) -> (SimulationGraph, Vec<Group>) {
        (self.graph, self.groups)
    }
}

/// Adds random edges between every pair of groups.
///
/// Pairs are visited as combinations `(0, 1), (0, 2), …, (1, 2), …`. Each
/// pair draws a count uniformly from `[1, max_connections]` and adds that
/// many edges, each joining a uniformly chosen node of the first group to a
/// uniformly chosen node of the second. Draws are independent, so the same
/// pair may be drawn twice; the repeat leaves the graph unchanged.
///
/// Returns the number of edges that were new to the graph.
///
/// # Errors
/// Returns [`GenerationError::InvalidParameter`] when `max_connections` is
/// zero or a group is empty, and [`GenerationError::Graph`] when a group
/// names nodes outside `graph`. All groups are checked before any edge is
/// drawn, so `graph` is untouched on error.
///
/// # Examples
/// ```
/// use simgraph_core::{Graph, Group, connect_groups, seeded_rng};
///
/// let mut graph = Graph::with_nodes(4);
/// let groups = [Group::new(0, 2), Group::new(2, 2)];
/// let added = connect_groups(&mut seeded_rng(1), &mut graph, &groups, 1)?;
/// assert_eq!(added, 1);
/// assert_eq!(graph.edge_count(), 1);
/// # Ok::<(), simgraph_core::GenerationError>(())
/// ```
#[instrument(
    name = "generate.connect_groups",
    err,
    skip_all,
    fields(groups = groups.len(), max_connections = max_connections),
)]
pub fn connect_groups<R: RandomSource>(
    rng: &mut R,
    graph: &mut Graph,
    groups: &[Group],
    max_connections: usize,
) -> Result<usize> {
    if max_connections < 1 {
        return Err(GenerationError::invalid(
            "max_connections",
            "every pair of groups needs at least one connection",
        ));
    }
    if let Some(index) = groups.iter().position(Group::is_empty) {
        return Err(GenerationError::invalid(
            "groups",
            format!("group {index} has no nodes to connect"),
        ));
    }
    let node_count = graph.node_count();
    if let Some(group) = groups.iter().find(|group| group.end() > node_count) {
        return Err(GraphError::UnknownNode {
            node: group.end() - 1,
            node_count,
        }
        .into());
    }

    let mut added = 0;
    for (position, first) in groups.iter().enumerate() {
        for second in groups.iter().skip(position + 1) {
            let connections = rng.uniform_int(1, max_connections);
            for _ in 0..connections {
                let u = first.pick(rng);
                let v = second.pick(rng);
                if graph.add_edge(u, v)? {
                    added += 1;
                }
            }
        }
    }

    debug!(added, "connected group pairs");
    Ok(added)
}

/// Generates a graph made of densely connected groups joined by a few
/// random edges.
///
/// Each group is a connected G(n,p) graph of the requested size and
/// completion. Groups are laid out in input order, so group `i` occupies the
/// ids immediately after group `i - 1`. Every pair of groups then receives
/// between one and `max_connections` edges via [`connect_groups`].
///
/// `group_completion` is either one probability for every group or one per
/// group.
///
/// # Errors
/// Returns [`GenerationError::Configuration`] when a per-group completion
/// list has a different length from `group_sizes`, and
/// [`GenerationError::InvalidParameter`] for a zero group size, a
/// probability outside `[0, 1]`, or a zero `max_connections`.
///
/// # Examples
/// ```
/// use simgraph_core::{groups_graph, seeded_rng};
///
/// let mut rng = seeded_rng(8);
/// let result = groups_graph(&mut rng, &[10, 20], [0.6, 0.3], 3)?;
/// assert_eq!(result.graph().graph().node_count(), 30);
/// assert_eq!(result.groups()[1].nodes(), 10..30);
/// assert!(result.graph().graph().is_connected());
/// # Ok::<(), simgraph_core::GenerationError>(())
/// ```
pub fn groups_graph<R, C>(
    rng: &mut R,
    group_sizes: &[usize],
    group_completion: C,
    max_connections: usize,
) -> Result<GroupsGraph>
where
    R: RandomSource,
    C: Into<GroupCompletion>,
{
    GroupsGraphBuilder::new()
        .with_group_sizes(group_sizes.to_vec())
        .with_completion(group_completion)
        .with_max_connections(max_connections)
        .build()?
        .generate(rng)
}

/// Builds and connects the groups for already validated parameters.
#[instrument(
    name = "generate.groups",
    err,
    skip_all,
    fields(groups = group_sizes.len(), max_connections = max_connections),
)]
pub(crate) fn compose_groups<R: RandomSource>(
    rng: &mut R,
    group_sizes: &[usize],
    completions: &[f64],
    max_connections: usize,
) -> Result<GroupsGraph> {
    let mut graph = Graph::new();
    let mut groups = Vec::with_capacity(group_sizes.len());

    for (&size, &completion) in group_sizes.iter().zip(completions) {
        let subgraph = connected_gnp(rng, size, completion)?;
        let range = graph.append_disjoint(subgraph);
        groups.push(Group::new(range.start, range.len()));
    }

    connect_groups(rng, &mut graph, &groups, max_connections)?;

    info!(
        groups = groups.len(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "group graph generated"
    );
    Ok(GroupsGraph {
        graph: SimulationGraph::new(graph),
        groups,
    })
}
